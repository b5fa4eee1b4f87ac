//! Line planning for one color group: what goes on which printed line.
//!
//! The itemized table (left) and the summary column (right) are two
//! independent streams that only share a line index. Line `i` shows left
//! slot `i` and summary line `i`; neither stream is aligned to the meaning
//! of the other.

use std::borrow::Cow;

use crate::config::{ColumnKind, ReportConfig};
use crate::group::{SummaryKey, summarize};
use crate::model::{BodyLine, ColorGroup, LeftSlot, PageContext, Row, SummaryLine};

/// `[size heading] + size entries + [transfer heading] + transfer entries`.
pub fn summary_lines(group: &ColorGroup, config: &ReportConfig) -> Vec<SummaryLine> {
    let by_size = summarize(group.rows(), SummaryKey::Size, config.summary_order);
    let by_transfer = summarize(group.rows(), SummaryKey::TransferKey, config.summary_order);

    let mut lines = Vec::with_capacity(by_size.len() + by_transfer.len() + 2);
    lines.push(SummaryLine::heading(&config.size_heading));
    lines.extend(by_size.iter().map(SummaryLine::entry));
    lines.push(SummaryLine::heading(&config.transfer_heading));
    lines.extend(by_transfer.iter().map(SummaryLine::entry));
    lines
}

/// Left-hand stream: the group's rows in canonical order, with blank gap
/// slots between transfer sub-blocks when `transfer_break` is on.
pub fn left_slots<'a>(group: &'a ColorGroup, config: &ReportConfig) -> Vec<LeftSlot<'a>> {
    let mut slots = Vec::with_capacity(group.row_count());
    for (i, transfer) in group.transfers.iter().enumerate() {
        if i > 0 && config.transfer_break {
            slots.extend(std::iter::repeat_n(LeftSlot::Gap, config.transfer_gap_lines));
        }
        slots.extend(transfer.rows.iter().map(LeftSlot::Row));
    }
    slots
}

/// Zip both streams by index into `max(left, right)` lines.
pub fn body_lines<'a>(
    group: &'a ColorGroup,
    summary: &'a [SummaryLine],
    config: &ReportConfig,
) -> Vec<BodyLine<'a>> {
    let left = left_slots(group, config);
    let n = left.len().max(summary.len());
    (0..n)
        .map(|i| BodyLine {
            left: left.get(i).copied().unwrap_or(LeftSlot::Empty),
            right: summary.get(i),
        })
        .collect()
}

pub fn subtitle(group: &ColorGroup, config: &ReportConfig) -> String {
    config
        .subtitle_format
        .replace("{color}", &group.color)
        .replace("{total}", &group.total_units().to_string())
}

/// Page heading, present only when the page belongs to a document.
pub fn heading(ctx: &PageContext, config: &ReportConfig) -> Option<String> {
    ctx.document_number
        .as_deref()
        .map(|doc| config.heading_format.replace("{document}", doc))
}

pub fn cell_text(row: &Row, kind: ColumnKind) -> Cow<'_, str> {
    match kind {
        ColumnKind::Code => Cow::Borrowed(&row.code),
        ColumnKind::Description => Cow::Borrowed(&row.description),
        ColumnKind::Size => Cow::Borrowed(&row.size),
        ColumnKind::Quantity => Cow::Owned(row.quantity_delivered.to_string()),
        ColumnKind::Transfer => Cow::Borrowed(&row.transfer_key),
        ColumnKind::Spacer => Cow::Borrowed(""),
    }
}
