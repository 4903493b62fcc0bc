use crate::data::{Error, Record, STORE_HEADER};

/// Basic CSV exporter for `Record`s. The header row is written explicitly
/// instead of being left to serde, so an empty ledger still produces a
/// well-formed store that reads back as empty.
pub(crate) fn write_records<W: std::io::Write>(
    writer: W,
    records: &[Record],
) -> Result<(), Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(STORE_HEADER)?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::{data::Record, read::read_records, write::write_records};
    use rust_decimal_macros::dec;

    fn record(amount: rust_decimal::Decimal, category: &str, note: &str, date: &str) -> Record {
        Record {
            amount,
            category: category.to_owned(),
            note: note.to_owned(),
            date: date.to_owned(),
        }
    }

    #[test]
    fn empty_ledger_still_writes_the_header() {
        let mut out = Vec::new();
        write_records(&mut out, &[]).unwrap();
        assert_eq!(out, b"amount,category,note,date\n");
    }

    #[test]
    fn rows_follow_the_header_in_sequence_order() {
        let records = [
            record(dec!(20.00), "food", "", "2024-05-01"),
            record(dec!(15.50), "transport", "bus", "2024-05-02"),
        ];
        let mut out = Vec::new();
        write_records(&mut out, &records).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "amount,category,note,date\n\
             20.00,food,,2024-05-01\n\
             15.50,transport,bus,2024-05-02\n"
        );
    }

    #[test]
    fn awkward_note_text_survives_a_round_trip() {
        let records = [record(
            dec!(7.80),
            "food",
            "snacks, \"fancy\" ones",
            "2024-05-03",
        )];
        let mut out = Vec::new();
        write_records(&mut out, &records).unwrap();
        assert_eq!(read_records(&out[..]).unwrap(), records);
    }
}
