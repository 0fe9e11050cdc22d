//! pdfium Raster Repository Implementation
//!
//! PageRasterRepositoryのpdfium実装

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]

use image::ImageFormat;
use log::debug;
use pdfium_render::prelude::*;
use std::io::Cursor;

use crate::domain::errors::ExtractionError;
use crate::domain::repositories::pdf_repository::{PageImage, PageRasterRepository};

/// PDF points per inch
const PDF_POINTS_PER_INCH: f32 = 72.0;

/// pdfium によるページ画像化
///
/// ライブラリはカレントディレクトリ、次にシステムの順で探す。
/// 見つからない場合は `ExtractionError::Render` になる
pub struct PdfiumRasterRepository {
    dpi: u32,
}

impl PdfiumRasterRepository {
    pub fn new(dpi: u32) -> Self {
        Self { dpi }
    }

    fn bind() -> Result<Pdfium, ExtractionError> {
        let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
            .or_else(|_| Pdfium::bind_to_system_library())
            .map_err(|e| ExtractionError::Render(format!("pdfium 不可用: {}", e)))?;
        Ok(Pdfium::new(bindings))
    }

    fn render_page(&self, page: &PdfPage, page_number: u32) -> Result<PageImage, ExtractionError> {
        let width = page.width().value;
        let height = page.height().value;

        let render_config = PdfRenderConfig::new()
            .set_target_width((width * self.dpi as f32 / PDF_POINTS_PER_INCH) as i32)
            .set_target_height((height * self.dpi as f32 / PDF_POINTS_PER_INCH) as i32);

        let bitmap = page
            .render_with_config(&render_config)
            .map_err(|e| ExtractionError::Render(format!("第 {} 页: {}", page_number, e)))?;

        let mut png = Vec::new();
        bitmap
            .as_image()
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .map_err(|e| ExtractionError::Render(format!("第 {} 页: {}", page_number, e)))?;

        Ok(PageImage { page_number, png })
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
impl PageRasterRepository for PdfiumRasterRepository {
    fn render_pages(&self, content: &[u8]) -> Result<Vec<PageImage>, ExtractionError> {
        let pdfium = Self::bind()?;
        let document = pdfium
            .load_pdf_from_byte_slice(content, None)
            .map_err(|e| ExtractionError::Render(e.to_string()))?;

        let mut pages = Vec::new();
        for (i, page) in document.pages().iter().enumerate() {
            let page_number = (i + 1) as u32;
            pages.push(self.render_page(&page, page_number)?);
        }

        debug!("Rendered {} page(s) at {} dpi", pages.len(), self.dpi);
        Ok(pages)
    }
}
