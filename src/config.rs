use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Error;

/// Which field of a row fills a column of the itemized table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    Code,
    Description,
    Size,
    Quantity,
    Transfer,
    /// Bordered empty cell, used as a tick box on the printed sheet.
    Spacer,
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct ColumnSpec {
    pub kind: ColumnKind,
    pub width: f32, // mm
}

impl ColumnSpec {
    pub const fn new(kind: ColumnKind, width: f32) -> Self {
        Self { kind, width }
    }
}

/// Order of entries inside one summary list.
///
/// The default lists `M: 3` above `L: 0` when M comes first in the rows;
/// `ascending` gives a sorted key listing instead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryOrder {
    /// First appearance in canonical row order.
    #[default]
    FirstSeen,
    /// Ascending string order of the key.
    Ascending,
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin_left: f32,
    pub margin_top: f32,
    pub margin_right: f32,
    /// Distance from the bottom edge at which a new page is started.
    pub margin_bottom: f32,
}

impl Default for PageGeometry {
    fn default() -> Self {
        // A4 portrait
        Self {
            width: 210.0,
            height: 297.0,
            margin_left: 10.0,
            margin_top: 10.0,
            margin_right: 10.0,
            margin_bottom: 15.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FontSizes {
    pub heading: f32,
    pub subtitle: f32,
    pub body: f32,
}

impl Default for FontSizes {
    fn default() -> Self {
        Self {
            heading: 14.0,
            subtitle: 11.0,
            body: 10.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub columns: Vec<ColumnSpec>,
    /// Horizontal gap between the itemized table and the summary column.
    pub summary_gap: f32,
    pub line_height: f32,
    /// Separate transfer sub-blocks with blank lines.
    pub transfer_break: bool,
    pub transfer_gap_lines: usize,
    /// Placeholders: `{color}`, `{total}`.
    pub subtitle_format: String,
    /// Placeholder: `{document}`.
    pub heading_format: String,
    pub size_heading: String,
    pub transfer_heading: String,
    pub summary_order: SummaryOrder,
    pub page: PageGeometry,
    pub fonts: FontSizes,
    pub subtitle_fill: [u8; 3],
    pub logo: Option<PathBuf>,
    pub logo_width: f32,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            columns: vec![
                ColumnSpec::new(ColumnKind::Code, 30.0),
                ColumnSpec::new(ColumnKind::Size, 20.0),
                ColumnSpec::new(ColumnKind::Quantity, 30.0),
                ColumnSpec::new(ColumnKind::Transfer, 30.0),
                ColumnSpec::new(ColumnKind::Spacer, 20.0),
            ],
            summary_gap: 10.0,
            line_height: 8.0,
            transfer_break: true,
            transfer_gap_lines: 2,
            subtitle_format: "Color: {color} - Total units: {total}".to_string(),
            heading_format: "Delivery note: {document}".to_string(),
            size_heading: "Summary by size:".to_string(),
            transfer_heading: "Summary by transfer:".to_string(),
            summary_order: SummaryOrder::FirstSeen,
            page: PageGeometry::default(),
            fonts: FontSizes::default(),
            subtitle_fill: [230, 230, 230],
            logo: None,
            logo_width: 30.0,
        }
    }
}

impl ReportConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, Error> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Width of the itemized table; the summary column starts `summary_gap` after it.
    pub fn table_width(&self) -> f32 {
        self.columns.iter().map(|c| c.width).sum()
    }

    pub fn summary_x(&self) -> f32 {
        self.page.margin_left + self.table_width() + self.summary_gap
    }

    fn validate(&self) -> Result<(), Error> {
        if self.columns.is_empty() {
            return Err(Error::Config("at least one column is required".into()));
        }
        if let Some(col) = self.columns.iter().find(|c| c.width <= 0.0) {
            return Err(Error::Config(format!(
                "column {:?} must have a positive width",
                col.kind
            )));
        }
        if self.line_height <= 0.0 {
            return Err(Error::Config("line_height must be positive".into()));
        }
        let printable = self.page.width - self.page.margin_left - self.page.margin_right;
        if self.table_width() + self.summary_gap >= printable {
            return Err(Error::Config(format!(
                "columns ({:.1}mm) and summary gap leave no room for the summary column ({:.1}mm printable)",
                self.table_width(),
                printable
            )));
        }
        if self.page.height - self.page.margin_top - self.page.margin_bottom <= self.line_height {
            return Err(Error::Config("page is too short for a single line".into()));
        }
        Ok(())
    }
}
