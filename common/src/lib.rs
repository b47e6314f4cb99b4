//! Resume Analyzer Common Library
//!
//! CLIとバッチ処理で共有される照合エンジンとレポートモデル。
//! I/Oを持たない純粋な処理のみを置く。

pub mod types;
pub mod catalog;
pub mod error;
pub mod normalizer;
pub mod matcher;
pub mod suggestions;
pub mod export;

pub use types::{AnalysisResult, MatchResult, SOFT, TECHNICAL};
pub use catalog::{KeywordCatalog, KeywordCategory};
pub use error::{Error, Result};
pub use normalizer::normalize;
pub use matcher::{match_keywords, match_percent};
pub use suggestions::build_suggestions;
pub use export::pdf_core::ReportMetadata;
pub use export::table_core::{tabular_rows, text_summary, TabularRow};
