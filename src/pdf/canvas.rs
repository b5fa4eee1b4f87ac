use pdf_writer::{Content, Name, Str};

use crate::config::ReportConfig;
use crate::fonts::{FontSet, FontStyle, to_winansi_bytes};
use crate::model::PageContext;

use super::layout::heading;

/// Points per millimetre. All canvas coordinates are millimetres with the
/// origin at the top-left corner of the page.
pub(crate) const PT_PER_MM: f32 = 72.0 / 25.4;

/// Horizontal padding between a cell edge and its text.
const CELL_PADDING: f32 = 1.0;
const LINE_WIDTH: f32 = 0.2;
const LOGO_Y: f32 = 8.0;
const HEADING_X: f32 = 50.0;
const HEADING_HEIGHT: f32 = 10.0;
const HEADER_GAP: f32 = 10.0;

/// Image drawn in the page header.
pub(crate) enum Logo {
    Image { pdf_name: String, aspect: f32 },
    /// Configured but unreadable: drawn as a marked placeholder box.
    Missing,
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct Cell<'t> {
    /// 0 extends the cell to the right margin.
    pub(crate) width: f32,
    pub(crate) height: f32,
    pub(crate) text: &'t str,
    pub(crate) border: bool,
    pub(crate) fill: bool,
    /// Move to the start of the next line after drawing.
    pub(crate) line_break: bool,
}

impl<'t> Cell<'t> {
    pub(crate) fn new(width: f32, height: f32, text: &'t str) -> Self {
        Self {
            width,
            height,
            text,
            border: false,
            fill: false,
            line_break: false,
        }
    }

    pub(crate) fn bordered(mut self, border: bool) -> Self {
        self.border = border;
        self
    }

    pub(crate) fn filled(mut self) -> Self {
        self.fill = true;
        self
    }

    pub(crate) fn then_break(mut self) -> Self {
        self.line_break = true;
        self
    }
}

/// Cursor-based page writer: cells are placed left to right at the cursor
/// and a new page (with its header) is started whenever a cell would cross
/// the bottom margin.
pub(crate) struct PdfCanvas<'a> {
    config: &'a ReportConfig,
    fonts: &'a FontSet,
    logo: Option<&'a Logo>,
    pages: Vec<Content>,
    content: Option<Content>,
    page_ctx: PageContext,
    x: f32,
    y: f32,
    last_h: f32,
    font: FontStyle,
    font_size: f32,
    fill: [u8; 3],
    in_header: bool,
}

impl<'a> PdfCanvas<'a> {
    pub(crate) fn new(config: &'a ReportConfig, fonts: &'a FontSet, logo: Option<&'a Logo>) -> Self {
        Self {
            config,
            fonts,
            logo,
            pages: Vec::new(),
            content: None,
            page_ctx: PageContext::default(),
            x: config.page.margin_left,
            y: config.page.margin_top,
            last_h: 0.0,
            font: FontStyle::Regular,
            font_size: config.fonts.body,
            fill: [255, 255, 255],
            in_header: false,
        }
    }

    pub(crate) fn page_count(&self) -> usize {
        self.pages.len() + usize::from(self.content.is_some())
    }

    /// Start a new page whose header shows `ctx`. The same context is reused
    /// for pages opened by automatic breaks until the next call.
    pub(crate) fn add_page(&mut self, ctx: PageContext) {
        self.page_ctx = ctx;
        self.open_page();
    }

    fn open_page(&mut self) {
        if let Some(done) = self.content.replace(Content::new()) {
            self.pages.push(done);
        }
        self.x = self.config.page.margin_left;
        self.y = self.config.page.margin_top;
        self.last_h = 0.0;

        let (font, size, fill) = (self.font, self.font_size, self.fill);
        let ctx = self.page_ctx.clone();
        self.in_header = true;
        self.header(&ctx);
        self.in_header = false;
        self.set_font(font, size);
        self.set_fill(fill);
        log::debug!("Opened page {} ({:?})", self.page_count(), ctx.document_number);
    }

    fn header(&mut self, ctx: &PageContext) {
        let margin_left = self.config.page.margin_left;
        if let Some(logo) = self.logo {
            let w = self.config.logo_width;
            match logo {
                Logo::Image { pdf_name, aspect } => {
                    let h = w / aspect;
                    let (x, y) = self.to_pdf(margin_left, LOGO_Y + h);
                    let content = self.content();
                    content.save_state();
                    content.transform([w * PT_PER_MM, 0.0, 0.0, h * PT_PER_MM, x, y]);
                    content.x_object(Name(pdf_name.as_bytes()));
                    content.restore_state();
                }
                Logo::Missing => {
                    let h = w / 2.0;
                    self.set_fill([200, 200, 200]);
                    self.set_font(FontStyle::Regular, self.config.fonts.body);
                    self.set_xy(margin_left, LOGO_Y);
                    self.cell(Cell::new(w, h, "[logo]").bordered(true).filled());
                }
            }
        }

        self.set_font(FontStyle::Bold, self.config.fonts.heading);
        self.set_xy(HEADING_X, self.config.page.margin_top);
        match heading(ctx, self.config) {
            Some(text) => self.cell(Cell::new(0.0, HEADING_HEIGHT, &text).then_break()),
            None => self.ln(Some(HEADING_HEIGHT)),
        }
        self.ln(Some(HEADER_GAP));
    }

    pub(crate) fn set_font(&mut self, style: FontStyle, size: f32) {
        self.font = style;
        self.font_size = size;
    }

    pub(crate) fn set_fill(&mut self, rgb: [u8; 3]) {
        self.fill = rgb;
    }

    pub(crate) fn set_xy(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    pub(crate) fn set_x(&mut self, x: f32) {
        self.x = x;
    }

    /// Line break: back to the left margin, down by `h` or the last cell height.
    pub(crate) fn ln(&mut self, h: Option<f32>) {
        self.x = self.config.page.margin_left;
        self.y += h.unwrap_or(self.last_h);
    }

    pub(crate) fn cell(&mut self, cell: Cell<'_>) {
        let page = self.config.page;
        if self.content.is_none() {
            self.open_page();
        } else if !self.in_header && self.y + cell.height > page.height - page.margin_bottom {
            let x = self.x;
            self.open_page();
            self.x = x;
        }

        let width = if cell.width == 0.0 {
            page.width - page.margin_right - self.x
        } else {
            cell.width
        };
        let (x_pt, y_pt) = self.to_pdf(self.x, self.y + cell.height);
        let (w_pt, h_pt) = (width * PT_PER_MM, cell.height * PT_PER_MM);
        let [r, g, b] = self.fill;

        if cell.fill || cell.border {
            let content = self.content();
            content.save_state();
            content.set_line_width(LINE_WIDTH * PT_PER_MM);
            content.set_fill_rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0);
            content.rect(x_pt, y_pt, w_pt, h_pt);
            match (cell.fill, cell.border) {
                (true, true) => content.fill_nonzero_and_stroke(),
                (true, false) => content.fill_nonzero(),
                _ => content.stroke(),
            };
            content.restore_state();
        }

        if !cell.text.is_empty() {
            let entry = self.fonts.get(self.font);
            let size = self.font_size;
            let baseline = self.y + cell.height / 2.0 + 0.3 * size / PT_PER_MM;
            let (tx, ty) = self.to_pdf(self.x + CELL_PADDING, baseline);
            let bytes = to_winansi_bytes(cell.text);
            let font_name = entry.pdf_name.clone();
            self.content()
                .begin_text()
                .set_font(Name(font_name.as_bytes()), size)
                .next_line(tx, ty)
                .show(Str(&bytes))
                .end_text();
        }

        self.last_h = cell.height;
        if cell.line_break {
            self.x = page.margin_left;
            self.y += cell.height;
        } else {
            self.x += width;
        }
    }

    /// Finished page contents, in order. A report without pages still gets one blank page.
    pub(crate) fn finish(mut self) -> Vec<Content> {
        match self.content.take() {
            Some(last) => self.pages.push(last),
            None if self.pages.is_empty() => self.pages.push(Content::new()),
            None => {}
        }
        self.pages
    }

    fn to_pdf(&self, x: f32, y: f32) -> (f32, f32) {
        (x * PT_PER_MM, (self.config.page.height - y) * PT_PER_MM)
    }

    fn content(&mut self) -> &mut Content {
        self.content.get_or_insert_with(Content::new)
    }
}
