use crate::{
    data::Error,
    ledger::Ledger,
    render::{sorted_totals, BarSummary, PieSummary, SummaryRenderer},
};
use rust_decimal::Decimal;
use std::io::{BufRead, Write};

/// The interactive session: a numbered menu looped until the user exits.
/// Input and output are generic so a whole session can be driven from byte
/// buffers in tests, the same way the store readers and writers are. Bad
/// amounts and an empty ledger are reported and the loop keeps going; store
/// failures end the session.
pub(crate) fn run<R: BufRead, W: Write>(
    ledger: &mut Ledger,
    mut input: R,
    mut output: W,
) -> Result<(), Error> {
    writeln!(output, "Welcome to Expense Tracker")?;
    loop {
        writeln!(output, "\n--- MENU ---")?;
        writeln!(output, "1. Add a new expense")?;
        writeln!(output, "2. View all expenses")?;
        writeln!(output, "3. Show spending summary chart")?;
        writeln!(output, "4. Show spending summary graph")?;
        writeln!(output, "5. Exit")?;
        write!(output, "Enter your choice (1-5): ")?;
        output.flush()?;
        let Some(choice) = read_line(&mut input)? else {
            // Input ran out; nothing more to do.
            break;
        };
        match choice.trim() {
            "1" => add_expense(ledger, &mut input, &mut output)?,
            "2" => show_all(ledger, &mut output)?,
            "3" => show_summary(ledger, &PieSummary, &mut output)?,
            "4" => show_summary(ledger, &BarSummary, &mut output)?,
            "5" => {
                writeln!(output, "\nGoodbye! Your data has been saved.")?;
                break;
            }
            _ => writeln!(output, "\nInvalid choice. Please try again.")?,
        }
    }
    Ok(())
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>, Error> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(|c| c == '\r' || c == '\n').to_owned()))
}

fn add_expense<R: BufRead, W: Write>(
    ledger: &mut Ledger,
    input: &mut R,
    output: &mut W,
) -> Result<(), Error> {
    writeln!(output, "\n-- ADD YOUR NEW EXPENSE --")?;
    write!(output, "Enter the amount you spent: ")?;
    output.flush()?;
    let Some(amount) = read_line(input)? else { return Ok(()) };
    write!(output, "Enter category: ")?;
    output.flush()?;
    let Some(category) = read_line(input)? else { return Ok(()) };
    write!(output, "Enter the date: ")?;
    output.flush()?;
    let Some(date) = read_line(input)? else { return Ok(()) };
    write!(output, "Add a note (optional): ")?;
    output.flush()?;
    let Some(note) = read_line(input)? else { return Ok(()) };
    match ledger.add_expense(&amount, &category, &date, &note) {
        Ok(record) => writeln!(
            output,
            "\nAdded {} to '{}'!",
            rupees(record.amount),
            record.category
        )?,
        Err(Error::InvalidAmount(_)) => writeln!(
            output,
            "\nInvalid input. Please enter a valid number for the amount."
        )?,
        Err(e) => return Err(e),
    }
    Ok(())
}

fn show_all<W: Write>(ledger: &Ledger, output: &mut W) -> Result<(), Error> {
    let listing = match ledger.list_all() {
        Ok(listing) => listing,
        Err(Error::NoRecords) => {
            writeln!(output, "\nNo expenses found. Try adding one first!")?;
            return Ok(());
        }
        Err(e) => return Err(e),
    };
    writeln!(output, "\n-- ALL EXPENSES --")?;
    for (i, record) in listing.iter().enumerate() {
        writeln!(
            output,
            "{}. {} - {}",
            i + 1,
            rupees(record.amount),
            capitalize(&record.category)
        )?;
        if !record.note.is_empty() {
            writeln!(output, "   Note: {}", record.note)?;
        }
        writeln!(output, "   Date: {}\n", record.date)?;
    }
    Ok(())
}

fn show_summary<S: SummaryRenderer, W: Write>(
    ledger: &Ledger,
    renderer: &S,
    output: &mut W,
) -> Result<(), Error> {
    match ledger.category_totals() {
        Ok(totals) => {
            writeln!(output)?;
            renderer.render(&mut *output, &sorted_totals(&totals))?;
        }
        Err(Error::NoRecords) => {
            writeln!(output, "\nNo data to summarize. Please add an expense first.")?
        }
        Err(e) => return Err(e),
    }
    Ok(())
}

/// Two-decimal display with the currency sign. Presentation only - the
/// stored amount keeps whatever scale it was entered with.
fn rupees(amount: Decimal) -> String {
    let mut amount = amount;
    amount.rescale(2);
    format!("\u{20b9}{amount}")
}

/// "food" prints as "Food"; the stored label stays lower-cased.
fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
