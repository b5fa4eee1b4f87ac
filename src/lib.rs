mod config;
mod error;
mod fonts;
pub mod group;
pub mod manifest;
mod model;
mod pdf;

pub use config::{ColumnKind, ColumnSpec, FontSizes, PageGeometry, ReportConfig, SummaryOrder};
pub use error::Error;
pub use model::{
    BodyLine, ColorGroup, DocumentGroup, LeftSlot, PageContext, Row, SummaryEntry, SummaryLine,
    TransferGroup,
};
pub use pdf::layout;

use std::path::Path;
use std::time::Instant;

/// File name offered for the generated report.
pub const DEFAULT_OUTPUT_NAME: &str = "report_by_document.pdf";

pub fn generate_report(input: &Path, output: &Path, config: &ReportConfig) -> Result<(), Error> {
    let t0 = Instant::now();

    let rows = manifest::parse_path(input)?;
    let t_parse = t0.elapsed();

    let bytes = render_rows(rows, config)?;
    let t_render = t0.elapsed();

    std::fs::write(output, &bytes).map_err(Error::Io)?;
    let t_total = t0.elapsed();

    log::info!(
        "Timing: parse={:.1}ms, render={:.1}ms, write={:.1}ms, total={:.1}ms (output {} bytes)",
        t_parse.as_secs_f64() * 1000.0,
        (t_render - t_parse).as_secs_f64() * 1000.0,
        (t_total - t_render).as_secs_f64() * 1000.0,
        t_total.as_secs_f64() * 1000.0,
        bytes.len(),
    );

    Ok(())
}

/// Same pipeline as [`generate_report`], for manifests already in memory.
pub fn generate_report_bytes(input: &[u8], config: &ReportConfig) -> Result<Vec<u8>, Error> {
    let rows = manifest::parse_bytes(input)?;
    render_rows(rows, config)
}

/// Group already-normalized rows and render them.
pub fn render_rows(rows: Vec<Row>, config: &ReportConfig) -> Result<Vec<u8>, Error> {
    let documents = group::group_rows(rows);
    pdf::render(&documents, config)
}
