use std::collections::HashMap;

use crate::config::SummaryOrder;
use crate::model::{ColorGroup, DocumentGroup, Row, SummaryEntry, TransferGroup};

/// Field a summary list is keyed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SummaryKey {
    Size,
    TransferKey,
}

impl SummaryKey {
    fn of(self, row: &Row) -> &str {
        match self {
            SummaryKey::Size => &row.size,
            SummaryKey::TransferKey => &row.transfer_key,
        }
    }
}

/// Canonical order: document, color, transfer key, code, size. All keys
/// compare as strings, so "10" sorts before "9".
pub fn sort_rows(rows: &mut [Row]) {
    rows.sort_by(|a, b| {
        (&a.document_number, &a.color, &a.transfer_key, &a.code, &a.size).cmp(&(
            &b.document_number,
            &b.color,
            &b.transfer_key,
            &b.code,
            &b.size,
        ))
    });
}

/// Sort the rows and split them into document → color → transfer groups.
/// Each level is a run of equal keys in the sorted rows, so group order is
/// sorted key order.
pub fn group_rows(mut rows: Vec<Row>) -> Vec<DocumentGroup> {
    sort_rows(&mut rows);

    let documents: Vec<DocumentGroup> = rows
        .chunk_by(|a, b| a.document_number == b.document_number)
        .map(|doc_rows| DocumentGroup {
            document_number: doc_rows[0].document_number.clone(),
            colors: doc_rows
                .chunk_by(|a, b| a.color == b.color)
                .map(|color_rows| ColorGroup {
                    color: color_rows[0].color.clone(),
                    transfers: color_rows
                        .chunk_by(|a, b| a.transfer_key == b.transfer_key)
                        .map(|transfer_rows| TransferGroup {
                            transfer_key: transfer_rows[0].transfer_key.clone(),
                            rows: transfer_rows.to_vec(),
                        })
                        .collect(),
                })
                .collect(),
        })
        .collect();

    for doc in &documents {
        log::debug!(
            "Document {}: {} colors, {} rows",
            doc.document_number,
            doc.colors.len(),
            doc.rows().count()
        );
    }
    documents
}

/// Sum `quantity_delivered` per distinct value of `key`, saturating at `u64::MAX`.
pub fn summarize<'a>(
    rows: impl IntoIterator<Item = &'a Row>,
    key: SummaryKey,
    order: SummaryOrder,
) -> Vec<SummaryEntry> {
    let mut entries: Vec<SummaryEntry> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for row in rows {
        let label = key.of(row);
        match index.get(label) {
            Some(&i) => {
                let entry = &mut entries[i];
                entry.quantity = entry.quantity.saturating_add(row.quantity_delivered);
            }
            None => {
                index.insert(label, entries.len());
                entries.push(SummaryEntry {
                    label: label.to_string(),
                    quantity: row.quantity_delivered,
                });
            }
        }
    }
    if order == SummaryOrder::Ascending {
        entries.sort_by(|a, b| a.label.cmp(&b.label));
    }
    entries
}
