//! キーワードカタログモジュール
//!
//! 照合に使う技術スキル・ソフトスキルの語彙を定義する。
//! カタログは起動時に一度だけ構築し、各解析へ参照で渡す。

use crate::error::{Error, Result};
use crate::types::{SOFT, TECHNICAL};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// 組み込みの技術スキル（順序が提案の優先度になる）
const TECHNICAL_SKILLS: &[&str] = &[
    // プログラミング言語
    "java", "python", "c", "c++", "javascript", "typescript",
    // Web技術
    "html", "css", "react", "angular", "node.js", "spring boot", "flask",
    // データベース
    "mysql", "mongodb", "postgresql", "sqlite",
    // CS基礎科目
    "data structures", "algorithms", "dbms", "os", "computer networks",
    // ツール
    "git", "github", "docker", "kubernetes", "jira", "postman", "api testing",
];

/// 組み込みのソフトスキル
const SOFT_SKILLS: &[&str] = &[
    "communication",
    "teamwork",
    "leadership",
    "problem solving",
    "time management",
    "adaptability",
    "critical thinking",
    "collaboration",
    "creativity",
    "attention to detail",
];

/// カテゴリ1件分のキーワード
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCategory {
    pub name: String,
    pub keywords: Vec<String>,
}

/// キーワードカタログ（カテゴリ順・キーワード順を保持）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCatalog {
    categories: Vec<KeywordCategory>,
}

impl KeywordCatalog {
    /// 組み込みカタログ（technical / soft）
    pub fn builtin() -> Self {
        Self {
            categories: vec![
                KeywordCategory {
                    name: TECHNICAL.to_string(),
                    keywords: TECHNICAL_SKILLS.iter().map(|s| s.to_string()).collect(),
                },
                KeywordCategory {
                    name: SOFT.to_string(),
                    keywords: SOFT_SKILLS.iter().map(|s| s.to_string()).collect(),
                },
            ],
        }
    }

    /// カテゴリ一覧から構築（検証・正規化あり）
    ///
    /// - カテゴリ名は空不可・重複不可
    /// - キーワードは小文字化し、空文字と重複（先勝ち）を除く
    pub fn new(categories: Vec<KeywordCategory>) -> Result<Self> {
        let mut seen_names = HashSet::new();
        let mut normalized = Vec::with_capacity(categories.len());

        for category in categories {
            let name = category.name.trim().to_string();
            if name.is_empty() {
                return Err(Error::InvalidCatalog("empty category name".into()));
            }
            if !seen_names.insert(name.clone()) {
                return Err(Error::InvalidCatalog(format!("duplicate category: {}", name)));
            }

            let mut seen_keywords = HashSet::new();
            let keywords = category
                .keywords
                .iter()
                .map(|k| k.trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .filter(|k| seen_keywords.insert(k.clone()))
                .collect();

            normalized.push(KeywordCategory { name, keywords });
        }

        Ok(Self { categories: normalized })
    }

    /// JSONファイルから読み込み
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// JSON文字列から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: KeywordCatalog = serde_json::from_str(json)?;
        Self::new(raw.categories)
    }

    pub fn categories(&self) -> &[KeywordCategory] {
        &self.categories
    }

    /// カテゴリ名でキーワードを取得
    pub fn keywords(&self, category: &str) -> Option<&[String]> {
        self.categories
            .iter()
            .find(|c| c.name == category)
            .map(|c| c.keywords.as_slice())
    }

    /// 全カテゴリのキーワード総数
    pub fn keyword_count(&self) -> usize {
        self.categories.iter().map(|c| c.keywords.len()).sum()
    }
}

impl Default for KeywordCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
