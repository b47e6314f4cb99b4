//! DOCXテキスト抽出
//!
//! DOCXはZIPアーカイブで、本文は `word/document.xml` にある。
//! `w:t` のテキストを連結し、段落の終わりで改行、`w:tab` はタブ、
//! `w:br` / `w:cr` は改行として扱う。

use crate::error::{AnalyzerError, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};
use zip::ZipArchive;

const DOCUMENT_XML: &str = "word/document.xml";

pub fn extract_text(bytes: &[u8]) -> Result<String> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| AnalyzerError::ExtractionFailure(format!("DOCXを開けません: {}", e)))?;

    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_XML)
        .map_err(|e| AnalyzerError::ExtractionFailure(format!("{} がありません: {}", DOCUMENT_XML, e)))?
        .read_to_string(&mut xml)
        .map_err(|e| AnalyzerError::ExtractionFailure(format!("{} の読み込みに失敗: {}", DOCUMENT_XML, e)))?;

    document_xml_to_text(&xml)
}

/// document.xml からプレーンテキストを取り出す
fn document_xml_to_text(xml: &str) -> Result<String> {
    let mut reader = Reader::from_str(xml);
    let mut buf = Vec::new();
    let mut text = String::new();
    let mut in_text = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) if e.local_name().as_ref() == b"t" => in_text = true,
            Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                b"t" => in_text = false,
                b"p" => text.push('\n'),
                _ => {}
            },
            Ok(Event::Empty(ref e)) => match e.local_name().as_ref() {
                b"tab" => text.push('\t'),
                b"br" | b"cr" => text.push('\n'),
                _ => {}
            },
            Ok(Event::Text(e)) if in_text => {
                let unescaped = e.unescape().map_err(|err| {
                    AnalyzerError::ExtractionFailure(format!("document.xml の解析に失敗: {}", err))
                })?;
                text.push_str(&unescaped);
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(AnalyzerError::ExtractionFailure(format!(
                    "document.xml の解析に失敗 (位置 {}): {}",
                    reader.buffer_position(),
                    e
                )))
            }
            _ => {}
        }
        buf.clear();
    }

    Ok(text)
}
