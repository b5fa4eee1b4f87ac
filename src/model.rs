/// One shipped line item, as read from the manifest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    pub code: String,
    pub description: String,
    pub document_number: String,
    pub size: String,
    pub quantity_delivered: u64,
    pub color: String,
    pub transfer_key: String,
}

/// All rows sharing one delivery-note number. Rendered as its own page group.
#[derive(Clone, Debug)]
pub struct DocumentGroup {
    pub document_number: String,
    pub colors: Vec<ColorGroup>,
}

#[derive(Clone, Debug)]
pub struct ColorGroup {
    pub color: String,
    pub transfers: Vec<TransferGroup>,
}

#[derive(Clone, Debug)]
pub struct TransferGroup {
    pub transfer_key: String,
    pub rows: Vec<Row>,
}

impl DocumentGroup {
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.colors.iter().flat_map(|c| c.rows())
    }
}

impl ColorGroup {
    /// Rows of every transfer sub-block, in canonical order.
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.transfers.iter().flat_map(|t| t.rows.iter())
    }

    pub fn row_count(&self) -> usize {
        self.transfers.iter().map(|t| t.rows.len()).sum()
    }

    /// Saturates at `u64::MAX`, like the per-key sums in `group::summarize`.
    pub fn total_units(&self) -> u64 {
        self.rows()
            .map(|r| r.quantity_delivered)
            .fold(0, u64::saturating_add)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryEntry {
    pub label: String,
    pub quantity: u64,
}

/// One line of the right-hand summary column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryLine {
    pub text: String,
    pub is_heading: bool,
}

impl SummaryLine {
    pub fn heading(text: &str) -> Self {
        Self {
            text: text.to_string(),
            is_heading: true,
        }
    }

    pub fn entry(entry: &SummaryEntry) -> Self {
        Self {
            text: format!("{}: {}", entry.label, entry.quantity),
            is_heading: false,
        }
    }
}

/// Left-hand slot of a body line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LeftSlot<'a> {
    Row(&'a Row),
    /// Blank separator between two transfer sub-blocks.
    Gap,
    /// The itemized table is exhausted; only the summary column continues.
    Empty,
}

/// One printed line: row slot `i` on the left, summary line `i` on the right.
#[derive(Clone, Debug, PartialEq)]
pub struct BodyLine<'a> {
    pub left: LeftSlot<'a>,
    pub right: Option<&'a SummaryLine>,
}

/// Per-page state handed to the header renderer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageContext {
    pub document_number: Option<String>,
}

impl PageContext {
    pub fn for_document(document_number: &str) -> Self {
        Self {
            document_number: Some(document_number.to_string()),
        }
    }
}
