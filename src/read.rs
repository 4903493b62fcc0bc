use crate::data::{Error, Record};

/// Simple CSV importer for `Record`s. The first line of the store is the
/// header; the csv reader consumes it, so a store with no header at all (an
/// empty file) just yields no records. Fields are kept verbatim - no
/// trimming - so notes and dates round-trip exactly as they were written.
/// A row that doesn't fit the schema (wrong field count, an amount that
/// isn't a decimal) aborts the whole read.
pub(crate) fn read_records<R: std::io::Read>(reader: R) -> Result<Vec<Record>, Error> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut records = Vec::new();
    for result in rdr.deserialize() {
        records.push(result?);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use crate::{data::Record, read::read_records};
    use rust_decimal_macros::dec;

    #[test]
    fn read_records_in_file_order() {
        let store_csv = b"\
amount,category,note,date
20.00,food,,2024-05-01
15.50,transport,bus,2024-05-02
3.25,food,coffee,2024-04-30
";
        let records = read_records(&store_csv[..]).unwrap();
        assert_eq!(
            records,
            [
                Record {
                    amount: dec!(20.00),
                    category: "food".to_owned(),
                    note: String::new(),
                    date: "2024-05-01".to_owned(),
                },
                Record {
                    amount: dec!(15.50),
                    category: "transport".to_owned(),
                    note: "bus".to_owned(),
                    date: "2024-05-02".to_owned(),
                },
                Record {
                    amount: dec!(3.25),
                    category: "food".to_owned(),
                    note: "coffee".to_owned(),
                    date: "2024-04-30".to_owned(),
                },
            ]
        );
    }

    #[test]
    fn empty_store_yields_no_records() {
        assert!(read_records(&b""[..]).unwrap().is_empty());
    }

    #[test]
    fn header_only_store_yields_no_records() {
        let store_csv = b"amount,category,note,date\n";
        assert!(read_records(&store_csv[..]).unwrap().is_empty());
    }

    #[test]
    fn non_numeric_amount_fails_the_read() {
        let store_csv = b"\
amount,category,note,date
lots,food,,2024-05-01
";
        assert!(read_records(&store_csv[..]).is_err());
    }

    #[test]
    fn short_row_fails_the_read() {
        let store_csv = b"\
amount,category,note,date
20.00,food
";
        assert!(read_records(&store_csv[..]).is_err());
    }
}
