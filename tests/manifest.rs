mod common;

use delivery_report::Error;
use delivery_report::manifest::{RawRecord, normalize, parse_bytes, parse_quantity};

#[test]
fn header_only_manifest_has_no_rows() {
    let rows = parse_bytes(format!("{}\n", common::HEADER).as_bytes()).unwrap();
    assert!(rows.is_empty());
}

#[test]
fn narrow_header_is_rejected() {
    let input = "Code\tDocument\tSize\tQuantity\tColor\tTransfer\nA1\tD1\tM\t3\tRed\tT1\n";
    match parse_bytes(input.as_bytes()) {
        Err(Error::MissingColumns { found, required }) => {
            assert_eq!(found, 6);
            assert_eq!(required, 7);
        }
        other => panic!("expected MissingColumns, got {other:?}"),
    }
}

#[test]
fn empty_input_is_rejected() {
    assert!(parse_bytes(b"").is_err());
}

#[test]
fn fields_are_trimmed_and_quantity_coerced() {
    let input = format!(
        "{}\n A1 \tCotton tee\t D1 \t M \t 3 \t Red \t T1 \nA2\t\tD1\tL\tbad\tRed\tT1\n",
        common::HEADER
    );
    let rows = parse_bytes(input.as_bytes()).unwrap();
    assert_eq!(rows.len(), 2);

    assert_eq!(rows[0].code, "A1");
    assert_eq!(rows[0].description, "Cotton tee");
    assert_eq!(rows[0].document_number, "D1");
    assert_eq!(rows[0].size, "M");
    assert_eq!(rows[0].quantity_delivered, 3);
    assert_eq!(rows[0].color, "Red");
    assert_eq!(rows[0].transfer_key, "T1");

    assert_eq!(rows[1].quantity_delivered, 0);
    assert_eq!(rows[1].description, "");
}

#[test]
fn rows_without_document_number_are_dropped() {
    let input = common::manifest(&[
        ("A1", "D1", "M", "3", "Red", "T1"),
        ("A2", "", "L", "4", "Red", "T1"),
        ("A3", "  ", "S", "5", "Red", "T1"),
    ]);
    let rows = parse_bytes(input.as_bytes()).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].code, "A1");
}

#[test]
fn short_rows_are_padded_and_blank_lines_skipped() {
    let input = format!("{}\nA1\t\tD1\tM\t2\n\nA2\t\tD1\tS\t1\tBlue\tT3\textra\n", common::HEADER);
    let rows = parse_bytes(input.as_bytes()).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].color, "");
    assert_eq!(rows[0].transfer_key, "");
    assert_eq!(rows[0].quantity_delivered, 2);
    assert_eq!(rows[1].transfer_key, "T3");
}

#[test]
fn windows_1252_fields_are_decoded() {
    let mut input = format!("{}\n", common::HEADER).into_bytes();
    // "Camiseta niño" in Windows-1252
    input.extend_from_slice(b"A1\tCamiseta ni\xF1o\tD1\tM\t1\tRed\tT1\n");
    let rows = parse_bytes(&input).unwrap();
    assert_eq!(rows[0].description, "Camiseta niño");
}

#[test]
fn quantity_parsing() {
    assert_eq!(parse_quantity("12"), 12);
    assert_eq!(parse_quantity(" 7 "), 7);
    assert_eq!(parse_quantity("3.9"), 3);
    assert_eq!(parse_quantity("1e2"), 100);
    assert_eq!(parse_quantity("-4"), 0);
    assert_eq!(parse_quantity("-4.5"), 0);
    assert_eq!(parse_quantity(""), 0);
    assert_eq!(parse_quantity("bad"), 0);
    assert_eq!(parse_quantity("NaN"), 0);
    assert_eq!(parse_quantity("inf"), 0);
    assert_eq!(parse_quantity("1,5"), 0);
}

#[test]
fn normalize_keeps_optional_fields_empty() {
    let row = normalize(RawRecord {
        document_number: "D9".into(),
        quantity: "2".into(),
        ..Default::default()
    })
    .unwrap();
    assert_eq!(row.document_number, "D9");
    assert_eq!(row.quantity_delivered, 2);
    assert!(row.code.is_empty() && row.size.is_empty() && row.color.is_empty());

    assert!(normalize(RawRecord::default()).is_none());
}
