//! キーワード照合モジュール
//!
//! 正規化済みの履歴書テキストに対し、カタログの各キーワードが
//! 連続した部分文字列として含まれるかで matched / missing に振り分ける。
//!
//! 部分文字列照合なので "c" のような短いキーワードは無関係な単語
//! （"documentation" など）にも一致する。これは既知の仕様。

use crate::catalog::KeywordCatalog;
use crate::types::{AnalysisResult, MatchResult};

/// カタログ全カテゴリを照合する
pub fn match_keywords(catalog: &KeywordCatalog, normalized_text: &str) -> AnalysisResult {
    let categories = catalog
        .categories()
        .iter()
        .map(|category| match_category(&category.name, &category.keywords, normalized_text))
        .collect();

    AnalysisResult::new(categories)
}

/// 1カテゴリを照合する
pub fn match_category(category: &str, keywords: &[String], normalized_text: &str) -> MatchResult {
    let (matched, missing): (Vec<String>, Vec<String>) = keywords
        .iter()
        .cloned()
        .partition(|kw| normalized_text.contains(kw.as_str()));

    let match_percent = match_percent(matched.len(), keywords.len());

    MatchResult {
        category: category.to_string(),
        matched,
        missing,
        match_percent,
    }
}

/// 一致率（%）を小数第2位で丸めて返す。総数0なら0
pub fn match_percent(matched: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let percent = matched as f64 / total as f64 * 100.0;
    (percent * 100.0).round() / 100.0
}
