//! resume-analyzer
//!
//! 履歴書（PDF / DOCX）を固定のスキル語彙と照合し、
//! 一致率・改善提案・CSV/PDFレポートを生成する。

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod extractor;
pub mod history;
pub mod scanner;
