//! 解析履歴モジュール
//!
//! 解析が完了するたびに、所有者ごとの非正規化レコードを1件追記する。
//! 一致率と matched / missing の一覧は区切り文字列として保存する。

use crate::analyzer::ResumeAnalysis;
use crate::error::Result;
use chrono::{DateTime, Utc};
use resume_analyzer_common::export::table_core::LIST_DELIMITER;
use resume_analyzer_common::{SOFT, TECHNICAL};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::warn;

pub const HISTORY_FILE_NAME: &str = "history.json";

/// 解析1回分の記録
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRecord {
    pub owner: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub job_title: Option<String>,
    pub resume_file: String,
    /// 履歴書ファイルの SHA-256
    #[serde(default)]
    pub resume_fingerprint: String,
    pub technical_match: f64,
    #[serde(default)]
    pub technical_matched_skills: String,
    #[serde(default)]
    pub technical_missing_skills: String,
    pub soft_match: f64,
    #[serde(default)]
    pub soft_matched_skills: String,
    #[serde(default)]
    pub soft_missing_skills: String,
}

impl AnalysisRecord {
    pub fn from_analysis(
        owner: &str,
        job_title: Option<&str>,
        fingerprint: &str,
        analysis: &ResumeAnalysis,
        created_at: DateTime<Utc>,
    ) -> Self {
        let result = &analysis.result;
        let joined = |category: &str, matched: bool| {
            result
                .get(category)
                .map(|c| {
                    if matched {
                        c.matched.join(LIST_DELIMITER)
                    } else {
                        c.missing.join(LIST_DELIMITER)
                    }
                })
                .unwrap_or_default()
        };

        Self {
            owner: owner.to_string(),
            created_at,
            job_title: job_title.map(str::to_string),
            resume_file: analysis.file_name.clone(),
            resume_fingerprint: fingerprint.to_string(),
            technical_match: result.match_percent(TECHNICAL),
            technical_matched_skills: joined(TECHNICAL, true),
            technical_missing_skills: joined(TECHNICAL, false),
            soft_match: result.match_percent(SOFT),
            soft_matched_skills: joined(SOFT, true),
            soft_missing_skills: joined(SOFT, false),
        }
    }
}

/// 履歴ファイルの構造
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryFile {
    /// バージョン（互換性チェック用）
    version: u32,
    records: Vec<AnalysisRecord>,
}

impl HistoryFile {
    const CURRENT_VERSION: u32 = 1;

    /// 履歴ファイルを読み込み
    ///
    /// 存在しない場合は空から始める。読めない・バージョン不一致のファイルは
    /// 上書きせず `history.json.bak` などに退避してから空で始める。
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        // 退避で rename する前にファイルを閉じる
        let parsed = {
            let file = File::open(path)?;
            serde_json::from_reader::<_, HistoryFile>(BufReader::new(file))
        };
        match parsed {
            Ok(history) if history.version == Self::CURRENT_VERSION => Ok(history),
            Ok(history) => {
                let backup = backup_history_file(path)?;
                warn!(
                    found = history.version,
                    backup = %backup.display(),
                    "履歴バージョン不一致、退避して新規作成します"
                );
                Ok(Self::default())
            }
            Err(e) => {
                let backup = backup_history_file(path)?;
                warn!(
                    error = %e,
                    backup = %backup.display(),
                    "履歴ファイルが壊れています、退避して新規作成します"
                );
                Ok(Self::default())
            }
        }
    }

    /// 履歴ファイルを保存
    ///
    /// 同じディレクトリの一時ファイルに書いてから置き換える。
    pub fn save(&self, path: &Path) -> Result<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir)?;

        let mut temp = NamedTempFile::new_in(dir)?;
        {
            let mut writer = BufWriter::new(temp.as_file_mut());
            serde_json::to_writer_pretty(&mut writer, self)?;
            writer.flush()?;
        }
        temp.as_file().sync_all()?;
        temp.persist(path).map_err(|e| e.error)?;
        Ok(())
    }

    pub fn append(&mut self, record: AnalysisRecord) {
        self.records.push(record);
    }

    /// 所有者の記録（新しい順）
    pub fn for_owner(&self, owner: &str) -> Vec<&AnalysisRecord> {
        let mut records: Vec<&AnalysisRecord> =
            self.records.iter().filter(|r| r.owner == owner).collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        records
    }

    /// 所有者の記録を削除し、削除件数を返す
    pub fn clear_owner(&mut self, owner: &str) -> usize {
        let before = self.records.len();
        self.records.retain(|r| r.owner != owner);
        before - self.records.len()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for HistoryFile {
    fn default() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            records: Vec::new(),
        }
    }
}

/// 壊れた履歴ファイルを既存の退避ファイルと衝突しない名前へ移す
fn backup_history_file(path: &Path) -> Result<PathBuf> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| HISTORY_FILE_NAME.to_string());

    let mut backup = path.with_file_name(format!("{}.bak", file_name));
    let mut n = 1;
    while backup.exists() {
        backup = path.with_file_name(format!("{}.bak.{}", file_name, n));
        n += 1;
    }

    std::fs::rename(path, &backup)?;
    Ok(backup)
}

/// ファイルの SHA-256 を16進文字列で返す
pub fn compute_file_hash(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(hex::encode(Sha256::digest(&bytes)))
}

/// 解析結果を履歴に追記して保存する
pub fn record_analysis(
    history_path: &Path,
    owner: &str,
    job_title: Option<&str>,
    analysis: &ResumeAnalysis,
) -> Result<AnalysisRecord> {
    let fingerprint = compute_file_hash(Path::new(&analysis.file_path))?;
    let record = AnalysisRecord::from_analysis(owner, job_title, &fingerprint, analysis, Utc::now());

    let mut history = HistoryFile::load(history_path)?;
    history.append(record.clone());
    history.save(history_path)?;

    Ok(record)
}
