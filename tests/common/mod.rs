#![allow(dead_code)]

use delivery_report::Row;

pub const HEADER: &str = "Code\tDescription\tDocument\tSize\tQuantity\tColor\tTransfer";

/// (code, document, size, quantity, color, transfer)
pub type Line<'a> = (&'a str, &'a str, &'a str, &'a str, &'a str, &'a str);

/// Build a manifest in the accepted column order, description left empty.
pub fn manifest(lines: &[Line<'_>]) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');
    for (code, doc, size, qty, color, transfer) in lines {
        out.push_str(&format!("{code}\t\t{doc}\t{size}\t{qty}\t{color}\t{transfer}\n"));
    }
    out
}

pub fn row(code: &str, doc: &str, size: &str, qty: u64, color: &str, transfer: &str) -> Row {
    Row {
        code: code.to_string(),
        description: String::new(),
        document_number: doc.to_string(),
        size: size.to_string(),
        quantity_delivered: qty,
        color: color.to_string(),
        transfer_key: transfer.to_string(),
    }
}

/// A manifest mixing documents, colors and transfer keys, deliberately unsorted.
pub fn mixed_rows() -> Vec<Row> {
    vec![
        row("C3", "D2", "XL", 4, "Blue", "T9"),
        row("A1", "D1", "M", 3, "Red", "T1"),
        row("B7", "D1", "S", 5, "Blue", "T2"),
        row("A2", "D1", "L", 0, "Red", "T1"),
        row("A0", "D1", "M", 2, "Red", "T10"),
        row("C1", "D2", "M", 1, "Blue", "T9"),
        row("B2", "D1", "S", 7, "Blue", "T1"),
        row("A3", "D1", "XL", 6, "Red", "T2"),
    ]
}

pub fn pdf_pages(bytes: &[u8]) -> Vec<String> {
    let doc = lopdf::Document::load_mem(bytes).expect("generated PDF parses");
    doc.get_pages()
        .values()
        .map(|&id| {
            let content = doc.get_page_content(id).expect("page content");
            String::from_utf8_lossy(&content).into_owned()
        })
        .collect()
}

/// Route `log` output through the test harness.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Drawn rectangles (`re` operators) on a decoded page.
pub fn rect_count(page: &str) -> usize {
    page.lines().filter(|l| l.trim_end().ends_with(" re")).count()
}

/// Horizontal text position (pt) of the first `show` of `text` on the page.
pub fn text_x(page: &str, text: &str) -> f32 {
    let at = page
        .find(&format!("({text}) Tj"))
        .unwrap_or_else(|| panic!("{text:?} not on page"));
    let td = page[..at]
        .lines()
        .rev()
        .find(|l| l.trim_end().ends_with(" Td"))
        .expect("text position before text");
    td.split_whitespace().next().unwrap().parse().unwrap()
}
