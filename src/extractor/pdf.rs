//! PDFテキスト抽出（pdf-extract）

use crate::error::{AnalyzerError, Result};
use std::any::Any;
use tracing::debug;

pub fn extract_text(bytes: &[u8]) -> Result<String> {
    // pdf-extract は壊れたPDFでpanicすることがある
    let extracted = std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes))
        .map_err(|payload| {
            let cause = panic_message(&*payload);
            debug!(%cause, size = bytes.len(), "pdf-extract panicked");
            AnalyzerError::ExtractionFailure(format!("PDFの解析中に異常終了しました: {}", cause))
        })?;

    extracted.map_err(|e| {
        debug!(error = %e, "pdf-extract failed");
        AnalyzerError::ExtractionFailure(format!("PDF読み込みエラー: {}", e))
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_is_extraction_failure() {
        let result = extract_text(b"this is not a pdf at all");
        assert!(matches!(result, Err(AnalyzerError::ExtractionFailure(_))));
    }

    #[test]
    fn test_panic_message() {
        let payload = std::panic::catch_unwind(|| panic!("bad xref")).unwrap_err();
        assert_eq!(panic_message(&*payload), "bad xref");

        let payload = std::panic::catch_unwind(|| panic!("offset {}", 42)).unwrap_err();
        assert_eq!(panic_message(&*payload), "offset 42");

        let payload = std::panic::catch_unwind(|| std::panic::panic_any(7u8)).unwrap_err();
        assert_eq!(panic_message(&*payload), "unknown panic");
    }

    #[test]
    fn test_empty_is_extraction_failure() {
        assert!(matches!(extract_text(&[]), Err(AnalyzerError::ExtractionFailure(_))));
    }
}
