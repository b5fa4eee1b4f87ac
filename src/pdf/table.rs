use crate::config::ReportConfig;
use crate::fonts::FontStyle;
use crate::model::{BodyLine, ColorGroup, LeftSlot};

use super::canvas::{Cell, PdfCanvas};
use super::layout::{body_lines, cell_text, subtitle, summary_lines};

const SUBTITLE_HEIGHT: f32 = 10.0;
const SUBTITLE_GAP: f32 = 2.0;

/// Shaded color heading followed by the interleaved body.
pub(super) fn render_color_group(canvas: &mut PdfCanvas<'_>, group: &ColorGroup, config: &ReportConfig) {
    let text = subtitle(group, config);
    canvas.set_font(FontStyle::Bold, config.fonts.subtitle);
    canvas.set_fill(config.subtitle_fill);
    canvas.cell(Cell::new(0.0, SUBTITLE_HEIGHT, &text).filled().then_break());
    canvas.ln(Some(SUBTITLE_GAP));

    let summary = summary_lines(group, config);
    let lines = body_lines(group, &summary, config);
    log::debug!(
        "Color {}: {} rows, {} summary lines, {} printed lines",
        group.color,
        group.row_count(),
        summary.len(),
        lines.len()
    );
    for line in &lines {
        render_body_line(canvas, line, config);
    }
}

fn render_body_line(canvas: &mut PdfCanvas<'_>, line: &BodyLine<'_>, config: &ReportConfig) {
    let h = config.line_height;
    canvas.set_font(FontStyle::Regular, config.fonts.body);

    for col in &config.columns {
        match line.left {
            LeftSlot::Row(row) => {
                let text = cell_text(row, col.kind);
                canvas.cell(Cell::new(col.width, h, &text).bordered(true));
            }
            LeftSlot::Gap | LeftSlot::Empty => canvas.cell(Cell::new(col.width, h, "")),
        }
    }
    canvas.set_x(config.summary_x());

    match line.right {
        Some(summary) => {
            let style = if summary.is_heading {
                FontStyle::Bold
            } else {
                FontStyle::Regular
            };
            canvas.set_font(style, config.fonts.body);
            canvas.cell(Cell::new(0.0, h, &summary.text).then_break());
        }
        None => canvas.ln(None),
    }
}
