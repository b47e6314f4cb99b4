//! PDFレポート生成（CLI版）
//!
//! 文書モデルと配置は resume_analyzer_common の pdf_core で計算し、
//! ここでは printpdf で描画するだけ。

use crate::error::{AnalyzerError, Result};
use printpdf::*;
use resume_analyzer_common::export::pdf_core::{document_lines, LineStyle, PdfLayoutCore};
use resume_analyzer_common::{AnalysisResult, ReportMetadata};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// PDFをバイト列として生成
pub fn render_pdf(
    result: &AnalysisResult,
    suggestions: &[String],
    metadata: &ReportMetadata,
) -> Result<Vec<u8>> {
    let doc = build_document(result, suggestions, metadata)?;
    doc.save_to_bytes()
        .map_err(|e| AnalyzerError::PdfGeneration(format!("PDF保存エラー: {:?}", e)))
}

/// PDFファイルを生成
pub fn generate_pdf(
    result: &AnalysisResult,
    suggestions: &[String],
    metadata: &ReportMetadata,
    output_path: &Path,
) -> Result<()> {
    let doc = build_document(result, suggestions, metadata)?;

    let file = File::create(output_path)?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| AnalyzerError::PdfGeneration(format!("PDF保存エラー: {:?}", e)))?;

    Ok(())
}

fn build_document(
    result: &AnalysisResult,
    suggestions: &[String],
    metadata: &ReportMetadata,
) -> Result<PdfDocumentReference> {
    let layout = PdfLayoutCore::default();
    let lines = document_lines(result, suggestions, metadata);
    let pages = layout.layout_pages(&lines);

    let (doc, first_page, first_layer) = PdfDocument::new(
        metadata.title.as_str(),
        Mm(layout.page_width_mm),
        Mm(layout.page_height_mm),
        "Layer 1",
    );

    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| AnalyzerError::PdfGeneration(format!("フォント追加エラー: {:?}", e)))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| AnalyzerError::PdfGeneration(format!("フォント追加エラー: {:?}", e)))?;

    for (index, page) in pages.iter().enumerate() {
        let layer = if index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page_index, layer_index) = doc.add_page(
                Mm(layout.page_width_mm),
                Mm(layout.page_height_mm),
                format!("Layer {}", index + 1),
            );
            doc.get_page(page_index).get_layer(layer_index)
        };

        for line in page {
            let font = match line.style {
                LineStyle::Title | LineStyle::Heading => &bold,
                _ => &regular,
            };
            layer.use_text(
                line.text.as_str(),
                layout.font_size_pt(line.style),
                Mm(line.x_mm),
                Mm(line.y_mm),
                font,
            );
        }
    }

    Ok(doc)
}
