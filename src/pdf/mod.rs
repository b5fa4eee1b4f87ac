mod canvas;
pub mod layout;
mod table;

use std::path::Path;

use pdf_writer::{Filter, Name, Pdf, Rect, Ref};

use crate::config::ReportConfig;
use crate::error::Error;
use crate::fonts::FontSet;
use crate::model::{DocumentGroup, PageContext};

use canvas::{Logo, PT_PER_MM, PdfCanvas};
use table::render_color_group;

pub fn render(documents: &[DocumentGroup], config: &ReportConfig) -> Result<Vec<u8>, Error> {
    let t0 = std::time::Instant::now();
    let mut pdf = Pdf::new();
    let mut next_id = 1i32;
    let mut alloc = || {
        let r = Ref::new(next_id);
        next_id += 1;
        r
    };

    let catalog_id = alloc();
    let pages_id = alloc();

    // Phase 1: shared resources
    let fonts = FontSet::register(&mut pdf, &mut alloc);

    let mut image_xobjects: Vec<(String, Ref)> = Vec::new();
    let logo = config.logo.as_deref().map(|path| {
        match embed_image(path, &mut image_xobjects, &mut pdf, &mut alloc) {
            Ok(logo) => logo,
            Err(e) => {
                log::warn!("Logo unavailable, drawing placeholder: {e}");
                Logo::Missing
            }
        }
    });

    let t_resources = t0.elapsed();

    // Phase 2: lay out pages. One page group per document; the canvas adds
    // continuation pages on its own.
    let mut canvas = PdfCanvas::new(config, &fonts, logo.as_ref());
    for doc in documents {
        canvas.add_page(PageContext::for_document(&doc.document_number));
        let first_page = canvas.page_count();
        for color in &doc.colors {
            render_color_group(&mut canvas, color, config);
        }
        log::debug!(
            "Document {} spans pages {}..={}",
            doc.document_number,
            first_page,
            canvas.page_count()
        );
    }
    let all_contents = canvas.finish();

    let t_layout = t0.elapsed();

    // Phase 3: allocate page and content IDs now that page count is known
    let n = all_contents.len();
    let page_ids: Vec<Ref> = (0..n).map(|_| alloc()).collect();
    let content_ids: Vec<Ref> = (0..n).map(|_| alloc()).collect();

    for (i, c) in all_contents.into_iter().enumerate() {
        let raw = c.finish();
        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(raw.as_slice(), 6);
        pdf.stream(content_ids[i], &compressed).filter(Filter::FlateDecode);
    }

    pdf.catalog(catalog_id).pages(pages_id);
    pdf.pages(pages_id)
        .kids(page_ids.iter().copied())
        .count(n as i32);

    let media_box = Rect::new(
        0.0,
        0.0,
        config.page.width * PT_PER_MM,
        config.page.height * PT_PER_MM,
    );
    for i in 0..n {
        let mut page = pdf.page(page_ids[i]);
        page.media_box(media_box)
            .parent(pages_id)
            .contents(content_ids[i]);
        let mut resources = page.resources();
        {
            let mut font_dict = resources.fonts();
            for entry in fonts.iter() {
                font_dict.pair(Name(entry.pdf_name.as_bytes()), entry.font_ref);
            }
        }
        if !image_xobjects.is_empty() {
            let mut xobjects = resources.x_objects();
            for (name, xobj_ref) in &image_xobjects {
                xobjects.pair(Name(name.as_bytes()), *xobj_ref);
            }
        }
    }

    let t_assembly = t0.elapsed();

    log::info!(
        "Render phases: resources={:.1}ms, layout={:.1}ms, assembly={:.1}ms ({} documents, {} pages)",
        t_resources.as_secs_f64() * 1000.0,
        (t_layout - t_resources).as_secs_f64() * 1000.0,
        (t_assembly - t_layout).as_secs_f64() * 1000.0,
        documents.len(),
        n,
    );

    Ok(pdf.finish())
}

/// Decode a PNG or JPEG and write it as an RGB image XObject, with an
/// alpha soft mask when the image has transparency.
fn embed_image(
    path: &Path,
    image_xobjects: &mut Vec<(String, Ref)>,
    pdf: &mut Pdf,
    alloc: &mut dyn FnMut() -> Ref,
) -> Result<Logo, Error> {
    let data = std::fs::read(path)
        .map_err(|e| Error::Image(format!("{}: {}", path.display(), e)))?;
    let decoded = image::load_from_memory(&data)
        .map_err(|e| Error::Image(format!("{}: {}", path.display(), e)))?;

    let rgba: image::RgbaImage = decoded.to_rgba8();
    let (w, h) = (rgba.width(), rgba.height());
    if w == 0 || h == 0 {
        return Err(Error::Image(format!("{}: empty image", path.display())));
    }
    let has_alpha = rgba.pixels().any(|p| p.0[3] < 255);

    let rgb_data: Vec<u8> = rgba
        .pixels()
        .flat_map(|p| [p.0[0], p.0[1], p.0[2]])
        .collect();
    let compressed_rgb = miniz_oxide::deflate::compress_to_vec_zlib(&rgb_data, 6);

    let smask_ref = if has_alpha {
        let alpha_data: Vec<u8> = rgba.pixels().map(|p| p.0[3]).collect();
        let compressed_alpha = miniz_oxide::deflate::compress_to_vec_zlib(&alpha_data, 6);
        let mask_ref = alloc();
        let mut mask = pdf.image_xobject(mask_ref, &compressed_alpha);
        mask.filter(Filter::FlateDecode);
        mask.width(w as i32);
        mask.height(h as i32);
        mask.color_space().device_gray();
        mask.bits_per_component(8);
        Some(mask_ref)
    } else {
        None
    };

    let xobj_ref = alloc();
    let mut xobj = pdf.image_xobject(xobj_ref, &compressed_rgb);
    xobj.filter(Filter::FlateDecode);
    xobj.width(w as i32);
    xobj.height(h as i32);
    xobj.color_space().device_rgb();
    xobj.bits_per_component(8);
    if let Some(mask_ref) = smask_ref {
        xobj.s_mask(mask_ref);
    }

    let pdf_name = format!("Im{}", image_xobjects.len() + 1);
    image_xobjects.push((pdf_name.clone(), xobj_ref));
    Ok(Logo::Image {
        pdf_name,
        aspect: w as f32 / h as f32,
    })
}
