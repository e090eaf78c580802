//! Review report PDF writer.
//!
//! Blocks from [`crate::layout`] flow top to bottom; the render context
//! wraps lines and breaks pages on its own, redrawing the logo header on
//! every new page.

use std::path::Path;

use folio_core::models::Row;
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, ObjectId, Stream, dictionary};
use tracing::{debug, info};

use crate::error::ExportError;
use crate::layout::{Block, plan_blocks};
use crate::logo::Logo;
use crate::metrics::{Font, encode, text_width, wrap_lines};
use crate::styles::ReportStyles;

const LOGO_RESOURCE: &str = "Im1";
const PRODUCER: &str = concat!("folio ", env!("CARGO_PKG_VERSION"));

/// Render a review report with the default styles.
pub fn render(rows: &[Row], logo_path: &Path) -> Result<Vec<u8>, ExportError> {
    render_with_styles(rows, logo_path, &ReportStyles::default())
}

/// Render a review report.
///
/// The logo is loaded first, so a missing asset is reported even for empty
/// input. Nothing is returned unless the whole document was written.
pub fn render_with_styles(
    rows: &[Row],
    logo_path: &Path,
    styles: &ReportStyles,
) -> Result<Vec<u8>, ExportError> {
    let logo = Logo::load(logo_path)?;
    let blocks = plan_blocks(rows, &styles.labels)?;

    let mut ctx = RenderContext::new(styles, &logo);
    for block in &blocks {
        ctx.draw_block(block)?;
    }
    let page_count = ctx.page_count();
    let bytes = ctx.finish()?;

    info!(
        rows = rows.len(),
        blocks = blocks.len(),
        pages = page_count,
        bytes = bytes.len(),
        "report rendered"
    );
    Ok(bytes)
}

#[derive(Debug, Clone, Copy)]
enum Align {
    Left,
    Center,
}

/// Layout state for one document. Positions are measured from the top edge
/// of the page and flipped to PDF coordinates when drawn.
struct RenderContext<'a> {
    styles: &'a ReportStyles,
    doc: Document,
    pages_id: ObjectId,
    resources_id: ObjectId,
    logo_height: f32,
    pages: Vec<ObjectId>,
    ops: Vec<Operation>,
    y: f32,
}

impl<'a> RenderContext<'a> {
    fn new(styles: &'a ReportStyles, logo: &Logo) -> Self {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let regular_id = doc.add_object(font_dictionary(Font::Regular));
        let bold_id = doc.add_object(font_dictionary(Font::Bold));
        let logo_id = logo.embed(&mut doc);

        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                Font::Regular.resource_name() => regular_id,
                Font::Bold.resource_name() => bold_id,
            },
            "XObject" => dictionary! {
                LOGO_RESOURCE => logo_id,
            },
        });

        let mut ctx = Self {
            styles,
            doc,
            pages_id,
            resources_id,
            logo_height: logo.height_for_width(styles.logo.width),
            pages: Vec::new(),
            ops: Vec::new(),
            y: 0.0,
        };
        ctx.start_page();
        ctx
    }

    /// Pages started so far, including the open one.
    fn page_count(&self) -> usize {
        self.pages.len() + 1
    }

    fn start_page(&mut self) {
        let page = &self.styles.page;
        let logo = &self.styles.logo;

        self.ops = vec![
            Operation::new("q", vec![]),
            Operation::new(
                "cm",
                vec![
                    Object::Real(logo.width),
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Real(self.logo_height),
                    Object::Real(logo.x),
                    Object::Real(page.height - logo.y - self.logo_height),
                ],
            ),
            Operation::new("Do", vec![LOGO_RESOURCE.into()]),
            Operation::new("Q", vec![]),
        ];
        self.y = page.margin_top + self.styles.header_height;
    }

    /// Close the open page and add it to the document.
    fn flush_page(&mut self) -> Result<(), ExportError> {
        let page = &self.styles.page;
        let content = Content {
            operations: std::mem::take(&mut self.ops),
        };
        let content_id = self
            .doc
            .add_object(Stream::new(dictionary! {}, content.encode()?));

        let page_id = self.doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "Contents" => content_id,
            "Resources" => self.resources_id,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(page.width),
                Object::Real(page.height),
            ],
        });
        self.pages.push(page_id);
        Ok(())
    }

    /// Start a new page when a row of `height` would cross the bottom margin.
    fn ensure_space(&mut self, height: f32) -> Result<(), ExportError> {
        if self.y + height > self.styles.page.content_bottom() {
            self.flush_page()?;
            self.start_page();
            debug!(page = self.page_count(), "page break");
        }
        Ok(())
    }

    fn draw_block(&mut self, block: &Block) -> Result<(), ExportError> {
        let styles = self.styles;
        match block {
            Block::Reviewer { name } => {
                let left = styles.page.margin_left;
                self.ensure_space(styles.reviewer_height)?;
                self.text_row(
                    Font::Bold,
                    styles.reviewer_size,
                    left,
                    styles.reviewer_label_width,
                    styles.reviewer_height,
                    &styles.labels.reviewer,
                    Align::Left,
                );
                self.text_row(
                    Font::Regular,
                    styles.reviewer_size,
                    left + styles.reviewer_label_width,
                    styles.page.content_width() - styles.reviewer_label_width,
                    styles.reviewer_height,
                    name,
                    Align::Left,
                );
                self.y += styles.reviewer_height + styles.reviewer_gap;
            }
            Block::SectionTitle { title } => {
                self.ensure_space(styles.section_height)?;
                let text = format!("{}{title}", styles.labels.section_prefix);
                self.text_row(
                    Font::Bold,
                    styles.section_size,
                    styles.page.margin_left,
                    styles.page.content_width(),
                    styles.section_height,
                    &text,
                    Align::Center,
                );
                self.y += styles.section_height + styles.section_gap;
            }
            Block::Question { number, text } => {
                self.paragraph(Font::Bold, &format!("{number} - {text}"))?;
            }
            Block::Response { text } => {
                self.paragraph(Font::Regular, text)?;
                self.y += styles.pair_gap;
            }
        }
        Ok(())
    }

    /// Wrapped body text, one line-height row per line.
    fn paragraph(&mut self, font: Font, text: &str) -> Result<(), ExportError> {
        let styles = self.styles;
        let width = styles.page.content_width();
        let wrap_width = width - 2.0 * styles.cell_padding;

        for line in wrap_lines(font, styles.body_size, wrap_width, text) {
            self.ensure_space(styles.body_line_height)?;
            self.text_row(
                font,
                styles.body_size,
                styles.page.margin_left,
                width,
                styles.body_line_height,
                &line,
                Align::Left,
            );
            self.y += styles.body_line_height;
        }
        Ok(())
    }

    /// Draw one line of text inside a cell at the current row, vertically
    /// centered. Does not move the cursor.
    #[allow(clippy::too_many_arguments)]
    fn text_row(
        &mut self,
        font: Font,
        size: f32,
        x: f32,
        width: f32,
        height: f32,
        text: &str,
        align: Align,
    ) {
        if text.is_empty() {
            return;
        }

        let padding = self.styles.cell_padding;
        let text_x = match align {
            Align::Left => x + padding,
            Align::Center => {
                let offset = (width - text_width(font, size, text)) / 2.0;
                x + offset.max(padding)
            }
        };
        let baseline = self.y + height / 2.0 + 0.3 * size;

        self.ops.extend([
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec![font.resource_name().into(), Object::Real(size)]),
            Operation::new(
                "Td",
                vec![
                    Object::Real(text_x),
                    Object::Real(self.styles.page.height - baseline),
                ],
            ),
            Operation::new("Tj", vec![Object::string_literal(encode(text))]),
            Operation::new("ET", vec![]),
        ]);
    }

    /// Close the last page and serialize the document.
    fn finish(mut self) -> Result<Vec<u8>, ExportError> {
        self.flush_page()?;

        let kids: Vec<Object> = self.pages.iter().copied().map(Object::Reference).collect();
        let count = kids.len() as i64;
        self.doc.objects.insert(
            self.pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );

        let catalog_id = self.doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => self.pages_id,
        });
        let info_id = self.doc.add_object(dictionary! {
            "Producer" => Object::string_literal(PRODUCER),
        });
        self.doc.trailer.set("Root", catalog_id);
        self.doc.trailer.set("Info", info_id);
        self.doc.compress();

        let mut out = Vec::new();
        self.doc.save_to(&mut out).map_err(lopdf::Error::from)?;
        Ok(out)
    }
}

fn font_dictionary(font: Font) -> lopdf::Dictionary {
    dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => font.base_font(),
        "Encoding" => "WinAnsiEncoding",
    }
}
