use crate::model::Row;

/// Fields of one manifest line, already decoded and trimmed, before coercion.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawRecord {
    pub code: String,
    pub description: String,
    pub document_number: String,
    pub size: String,
    pub quantity: String,
    pub color: String,
    pub transfer_key: String,
}

/// Coerce a raw record into a canonical row. Records without a document
/// number have nowhere to go in the report and are dropped.
pub fn normalize(raw: RawRecord) -> Option<Row> {
    let document_number = raw.document_number.trim();
    if document_number.is_empty() {
        return None;
    }
    Some(Row {
        code: raw.code.trim().to_string(),
        description: raw.description.trim().to_string(),
        document_number: document_number.to_string(),
        size: raw.size.trim().to_string(),
        quantity_delivered: parse_quantity(&raw.quantity),
        color: raw.color.trim().to_string(),
        transfer_key: raw.transfer_key.trim().to_string(),
    })
}

/// Integer quantity, truncated toward zero. Anything unparsable, negative or
/// non-finite counts as 0; values past `u64::MAX` clamp to it.
pub fn parse_quantity(s: &str) -> u64 {
    let s = s.trim();
    if let Ok(n) = s.parse::<i64>() {
        return n.max(0) as u64;
    }
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => v.trunc() as u64,
        _ => 0,
    }
}
