use ledger::Ledger;

mod data;
mod ledger;
mod menu;
mod read;
mod render;
mod write;

/// Where the expenses live between runs. One store per process lifetime,
/// wired in here and nowhere else.
const STORE_PATH: &str = "my_expenses.csv";

fn main() -> Result<(), anyhow::Error> {
    let mut ledger = Ledger::new(STORE_PATH);
    ledger.load()?;
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    menu::run(&mut ledger, stdin.lock(), stdout.lock())?;
    Ok(())
}
