use super::document::ReportDocument;
use super::layout::{paginate, PageLayout, PAGE_HEIGHT_PT, PAGE_WIDTH_PT};
use crate::error::{Result, RiskError};
use log::debug;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerIndex,
    PdfPageIndex, Pt, Rgb,
};

pub const PDF_MIME_TYPE: &str = "application/pdf";

/// Draws a laid out [`ReportDocument`] with the builtin Helvetica faces.
pub struct PdfRenderer;

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

impl PdfRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render the whole document into memory. Nothing is returned unless
    /// every line could be encoded, drawn and serialised.
    pub fn render(&self, document: &ReportDocument) -> Result<Vec<u8>> {
        let layout = paginate(document)?;
        debug!("Rendering '{}' across {} page(s)", document.title, layout.len());

        let width = Mm::from(Pt(PAGE_WIDTH_PT));
        let height = Mm::from(Pt(PAGE_HEIGHT_PT));
        let (doc, first_page, first_layer) =
            PdfDocument::new(document.title.as_str(), width, height, "Layer 1");

        let fonts = Fonts {
            regular: doc
                .add_builtin_font(BuiltinFont::Helvetica)
                .map_err(|e| RiskError::render(format!("Failed to load Helvetica: {}", e)))?,
            bold: doc
                .add_builtin_font(BuiltinFont::HelveticaBold)
                .map_err(|e| RiskError::render(format!("Failed to load Helvetica-Bold: {}", e)))?,
        };

        let mut pages = layout.iter();
        if let Some(page) = pages.next() {
            draw_page(&doc, first_page, first_layer, page, &fonts);
        }
        for (offset, page) in pages.enumerate() {
            let (page_index, layer_index) =
                doc.add_page(width, height, format!("Page {}", offset + 2));
            draw_page(&doc, page_index, layer_index, page, &fonts);
        }

        doc.save_to_bytes()
            .map_err(|e| RiskError::render(format!("Failed to serialise PDF: {}", e)))
    }
}

impl Default for PdfRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn draw_page(
    doc: &PdfDocumentReference,
    page_index: PdfPageIndex,
    layer_index: PdfLayerIndex,
    page: &PageLayout,
    fonts: &Fonts,
) {
    let layer = doc.get_page(page_index).get_layer(layer_index);
    for line in &page.lines {
        let (r, g, b) = line
            .style
            .color
            .map(|c| c.rgb())
            .unwrap_or((0.0, 0.0, 0.0));
        layer.set_fill_color(Color::Rgb(Rgb::new(r, g, b, None)));

        let font = if line.style.bold { &fonts.bold } else { &fonts.regular };
        layer.use_text(
            line.text.as_str(),
            line.style.size,
            Mm::from(Pt(line.x)),
            Mm::from(Pt(line.y)),
            font,
        );
    }
}
