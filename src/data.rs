use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Column order of the backing store. `Record` must declare its fields in
/// this exact order, because the csv crate serializes struct fields in
/// declaration order and the store schema is fixed on both read and write.
pub(crate) const STORE_HEADER: [&str; 4] = ["amount", "category", "note", "date"];

/// One logged expense. This is a pure data carrier: no validation happens
/// here. The amount is checked where user text enters the system (the add
/// operation) and where store text does (the load), and `category` arrives
/// already lower-cased from the add operation. `date` is just a sort key:
/// free-form text compared lexicographically, with no calendar format
/// enforced anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Record {
    pub amount: Decimal,
    pub category: String,
    pub note: String,
    pub date: String,
}

/// Ledger error handling. The first two variants are conditions the caller
/// is expected to recover from in place: a bad amount aborts one add, an
/// empty ledger just means there's nothing to list or sum yet. `Io` and
/// `Csv` mean the backing store itself is unusable and are left to take the
/// run down.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid amount {0:?}, expected a non-negative decimal number")]
    InvalidAmount(String),
    #[error("no expenses recorded yet")]
    NoRecords,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}
