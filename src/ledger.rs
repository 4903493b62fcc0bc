use crate::{
    data::{Error, Record},
    read::read_records,
    write::write_records,
};
use rust_decimal::Decimal;
use std::{
    collections::HashMap,
    fs::File,
    io::ErrorKind,
    path::PathBuf,
};

/// The ledger itself: every expense recorded so far, in the order they were
/// added, plus the store file they persist to. The store location is injected
/// at construction; one ledger, one file, for the whole run. Single-threaded,
/// like the rest of the program.
#[derive(Debug)]
pub(crate) struct Ledger {
    records: Vec<Record>,
    store: PathBuf,
}

impl Ledger {
    pub fn new<P: Into<PathBuf>>(store: P) -> Self {
        Self {
            records: Vec::new(),
            store: store.into(),
        }
    }

    /// Replace the in-memory records with the contents of the store. A store
    /// that doesn't exist yet is the normal first-run state, not a failure,
    /// and reading never creates the file. Anything else wrong with it - an
    /// unreadable file, a malformed row - aborts the load; there is no
    /// skip-and-warn for partial stores.
    pub fn load(&mut self) -> Result<(), Error> {
        self.records = match File::open(&self.store) {
            Ok(file) => read_records(file)?,
            Err(e) if e.kind() == ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(())
    }

    /// Rewrite the whole store from memory, header first, records in the
    /// order they were added. No append mode, no atomic swap: the last
    /// rewrite that ran to completion is the durable state.
    pub fn save(&self) -> Result<(), Error> {
        write_records(File::create(&self.store)?, &self.records)
    }

    /// Record a new expense and persist it. The amount arrives as raw user
    /// text; if it doesn't parse as a non-negative decimal the add is
    /// rejected whole - nothing appended, nothing written. The category is
    /// stored lower-cased so "Food" and "food" are the same bucket; date and
    /// note are stored verbatim. On success the store has already been
    /// rewritten to match memory, and the new record is handed back for the
    /// caller's confirmation message.
    pub fn add_expense(
        &mut self,
        amount: &str,
        category: &str,
        date: &str,
        note: &str,
    ) -> Result<Record, Error> {
        let raw = amount.trim();
        let amount: Decimal = raw
            .parse()
            .map_err(|_| Error::InvalidAmount(raw.to_owned()))?;
        if amount.is_sign_negative() {
            return Err(Error::InvalidAmount(raw.to_owned()));
        }
        let record = Record {
            amount,
            category: category.to_lowercase(),
            note: note.to_owned(),
            date: date.to_owned(),
        };
        self.records.push(record.clone());
        self.save()?;
        Ok(record)
    }

    /// Every expense, most recent date first. The sort is stable, so
    /// expenses sharing a date keep the order they were added in, and it
    /// works on a fresh sequence - the ledger's own order stays untouched.
    /// Dates compare as plain text, which matches chronology for ISO dates
    /// and is simply the defined order for everything else.
    pub fn list_all(&self) -> Result<Vec<&Record>, Error> {
        if self.records.is_empty() {
            return Err(Error::NoRecords);
        }
        let mut listing: Vec<&Record> = self.records.iter().collect();
        listing.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(listing)
    }

    /// Total spend per category. The map carries no particular order; views
    /// that want one (the summary renderers do) sort the pairs themselves.
    pub fn category_totals(&self) -> Result<HashMap<String, Decimal>, Error> {
        if self.records.is_empty() {
            return Err(Error::NoRecords);
        }
        let mut totals = HashMap::new();
        for record in &self.records {
            *totals.entry(record.category.clone()).or_insert(Decimal::ZERO) += record.amount;
        }
        Ok(totals)
    }
}
