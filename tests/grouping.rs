mod common;

use delivery_report::SummaryOrder;
use delivery_report::manifest::parse_quantity;
use delivery_report::group::{SummaryKey, group_rows, sort_rows, summarize};

use common::{mixed_rows, row};

#[test]
fn every_row_lands_in_exactly_one_bucket() {
    let rows = mixed_rows();
    let docs = group_rows(rows.clone());

    let mut seen = Vec::new();
    for doc in &docs {
        for color in &doc.colors {
            for transfer in &color.transfers {
                for r in &transfer.rows {
                    assert_eq!(r.document_number, doc.document_number);
                    assert_eq!(r.color, color.color);
                    assert_eq!(r.transfer_key, transfer.transfer_key);
                    seen.push(r.code.clone());
                }
            }
        }
    }
    seen.sort();
    let mut expected: Vec<String> = rows.iter().map(|r| r.code.clone()).collect();
    expected.sort();
    assert_eq!(seen, expected);
}

#[test]
fn groups_follow_string_sort_order() {
    let docs = group_rows(mixed_rows());

    let doc_keys: Vec<&str> = docs.iter().map(|d| d.document_number.as_str()).collect();
    assert_eq!(doc_keys, ["D1", "D2"]);

    let d1_colors: Vec<&str> = docs[0].colors.iter().map(|c| c.color.as_str()).collect();
    assert_eq!(d1_colors, ["Blue", "Red"]);

    // "T10" sorts between "T1" and "T2" as a string
    let red_transfers: Vec<&str> = docs[0].colors[1]
        .transfers
        .iter()
        .map(|t| t.transfer_key.as_str())
        .collect();
    assert_eq!(red_transfers, ["T1", "T10", "T2"]);

    let red_rows: Vec<&str> = docs[0].colors[1].rows().map(|r| r.code.as_str()).collect();
    assert_eq!(red_rows, ["A1", "A2", "A0", "A3"]);
}

#[test]
fn numeric_looking_documents_sort_as_strings() {
    let docs = group_rows(vec![
        row("A", "9", "M", 1, "Red", "T1"),
        row("B", "10", "M", 1, "Red", "T1"),
        row("C", "100", "M", 1, "Red", "T1"),
    ]);
    let keys: Vec<&str> = docs.iter().map(|d| d.document_number.as_str()).collect();
    assert_eq!(keys, ["10", "100", "9"]);
}

#[test]
fn code_then_size_break_ties_within_a_transfer() {
    let mut rows = vec![
        row("B", "D1", "S", 1, "Red", "T1"),
        row("A", "D1", "XL", 1, "Red", "T1"),
        row("A", "D1", "L", 1, "Red", "T1"),
    ];
    sort_rows(&mut rows);
    let order: Vec<(&str, &str)> = rows.iter().map(|r| (r.code.as_str(), r.size.as_str())).collect();
    assert_eq!(order, [("A", "L"), ("A", "XL"), ("B", "S")]);
}

#[test]
fn summaries_agree_with_color_totals() {
    for doc in group_rows(mixed_rows()) {
        for color in &doc.colors {
            let by_size: u64 = summarize(color.rows(), SummaryKey::Size, SummaryOrder::FirstSeen)
                .iter()
                .map(|e| e.quantity)
                .sum();
            let by_transfer: u64 =
                summarize(color.rows(), SummaryKey::TransferKey, SummaryOrder::FirstSeen)
                    .iter()
                    .map(|e| e.quantity)
                    .sum();
            assert_eq!(by_size, color.total_units());
            assert_eq!(by_transfer, color.total_units());
        }
    }
}

#[test]
fn summarize_orders() {
    let rows = vec![
        row("A1", "D1", "M", 3, "Red", "T1"),
        row("A2", "D1", "L", 0, "Red", "T1"),
        row("A3", "D1", "M", 2, "Red", "T1"),
    ];

    let first_seen = summarize(&rows, SummaryKey::Size, SummaryOrder::FirstSeen);
    let labels: Vec<(&str, u64)> = first_seen.iter().map(|e| (e.label.as_str(), e.quantity)).collect();
    assert_eq!(labels, [("M", 5), ("L", 0)]);

    let ascending = summarize(&rows, SummaryKey::Size, SummaryOrder::Ascending);
    let labels: Vec<(&str, u64)> = ascending.iter().map(|e| (e.label.as_str(), e.quantity)).collect();
    assert_eq!(labels, [("L", 0), ("M", 5)]);
}

#[test]
fn no_rows_no_groups() {
    assert!(group_rows(Vec::new()).is_empty());
}

#[test]
fn oversized_quantities_saturate_every_total() {
    assert_eq!(parse_quantity("1e20"), u64::MAX);
    assert_eq!(parse_quantity("99999999999999999999"), u64::MAX);

    let docs = group_rows(vec![
        row("A1", "D1", "M", parse_quantity("1e20"), "Red", "T1"),
        row("A2", "D1", "M", 5, "Red", "T1"),
        row("A3", "D1", "L", 7, "Red", "T2"),
    ]);
    let red = &docs[0].colors[0];
    assert_eq!(red.total_units(), u64::MAX);

    let by_size = summarize(red.rows(), SummaryKey::Size, SummaryOrder::FirstSeen);
    let quantities: Vec<(&str, u64)> = by_size.iter().map(|e| (e.label.as_str(), e.quantity)).collect();
    assert_eq!(quantities, [("M", u64::MAX), ("L", 7)]);

    let by_transfer = summarize(red.rows(), SummaryKey::TransferKey, SummaryOrder::FirstSeen);
    assert_eq!(by_transfer[0].quantity, u64::MAX);
    assert_eq!(by_transfer[1].quantity, 7);
}
