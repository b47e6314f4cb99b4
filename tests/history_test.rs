//! 解析履歴テスト
//!
//! 履歴ファイルの保存・読み込みと所有者ごとの絞り込みを検証

use chrono::{TimeZone, Utc};
use resume_analyzer::analyzer::ResumeAnalysis;
use resume_analyzer::history::{self, AnalysisRecord, HistoryFile};
use resume_analyzer_common::{match_keywords, KeywordCatalog};
use tempfile::tempdir;

fn create_analysis(file_name: &str, text: &str) -> ResumeAnalysis {
    ResumeAnalysis {
        file_name: file_name.to_string(),
        file_path: String::new(),
        result: match_keywords(&KeywordCatalog::builtin(), text),
        suggestions: Vec::new(),
    }
}

fn record_at(owner: &str, file_name: &str, hour: u32) -> AnalysisRecord {
    AnalysisRecord::from_analysis(
        owner,
        None,
        "deadbeef",
        &create_analysis(file_name, "python"),
        Utc.with_ymd_and_hms(2026, 1, 18, hour, 0, 0).unwrap(),
    )
}

/// 存在しない履歴ファイル
#[test]
fn test_history_missing_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let history = HistoryFile::load(&dir.path().join("history.json")).unwrap();

    assert_eq!(history.len(), 0);
    assert!(history.is_empty());
}

/// 保存と読み込み
#[test]
fn test_history_save_and_load() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("history.json");

    let mut history = HistoryFile::default();
    history.append(record_at("jane", "jane.pdf", 9));
    history.save(&path).expect("履歴保存失敗");

    let loaded = HistoryFile::load(&path).unwrap();
    assert_eq!(loaded.len(), 1);
    let record = loaded.for_owner("jane")[0];
    assert_eq!(record.resume_file, "jane.pdf");
    assert_eq!(record.resume_fingerprint, "deadbeef");
}

/// レコードは一致率と区切り文字列を持つ
#[test]
fn test_record_from_analysis() {
    let analysis = create_analysis("cv.docx", "python and teamwork");
    let record = AnalysisRecord::from_analysis("jane", Some("Backend"), "abc", &analysis, Utc::now());

    assert_eq!(record.job_title.as_deref(), Some("Backend"));
    assert!(record.technical_matched_skills.contains("python"));
    assert!(record.technical_missing_skills.starts_with("java, "));
    assert_eq!(record.soft_matched_skills, "teamwork");
    assert_eq!(record.soft_match, 10.0);
    assert!(record.technical_match > 0.0);
}

/// 所有者で絞り込み、新しい順に並ぶ
#[test]
fn test_history_for_owner_newest_first() {
    let mut history = HistoryFile::default();
    history.append(record_at("jane", "first.pdf", 8));
    history.append(record_at("john", "other.pdf", 9));
    history.append(record_at("jane", "second.pdf", 10));

    let records = history.for_owner("jane");
    let files: Vec<&str> = records.iter().map(|r| r.resume_file.as_str()).collect();
    assert_eq!(files, ["second.pdf", "first.pdf"]);

    assert!(history.for_owner("nobody").is_empty());
}

/// 所有者の履歴削除
#[test]
fn test_history_clear_owner() {
    let mut history = HistoryFile::default();
    history.append(record_at("jane", "a.pdf", 8));
    history.append(record_at("jane", "b.pdf", 9));
    history.append(record_at("john", "c.pdf", 10));

    assert_eq!(history.clear_owner("jane"), 2);
    assert_eq!(history.len(), 1);
    assert_eq!(history.clear_owner("jane"), 0);
    assert_eq!(history.for_owner("john").len(), 1);
}

/// 壊れたファイルは退避してから空で始める
#[test]
fn test_history_corrupted_file_is_backed_up() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("history.json");
    std::fs::write(&path, "{ invalid json }").unwrap();

    let history = HistoryFile::load(&path).unwrap();
    assert!(history.is_empty());
    assert!(!path.exists());
    assert_eq!(
        std::fs::read_to_string(dir.path().join("history.json.bak")).unwrap(),
        "{ invalid json }"
    );
}

/// バージョン不一致も退避する（既存の退避ファイルは上書きしない）
#[test]
fn test_history_version_mismatch_keeps_previous_backup() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("history.json");
    let future = r#"{"version": 999, "records": []}"#;
    std::fs::write(dir.path().join("history.json.bak"), "older backup").unwrap();
    std::fs::write(&path, future).unwrap();

    let history = HistoryFile::load(&path).unwrap();
    assert!(history.is_empty());
    assert_eq!(
        std::fs::read_to_string(dir.path().join("history.json.bak")).unwrap(),
        "older backup"
    );
    assert_eq!(
        std::fs::read_to_string(dir.path().join("history.json.bak.1")).unwrap(),
        future
    );
}

/// 壊れた履歴に追記しても過去の記録は失われない
#[test]
fn test_record_analysis_on_corrupted_history_keeps_records() {
    let dir = tempdir().expect("Failed to create temp dir");
    let resume_path = dir.path().join("cv.pdf");
    std::fs::write(&resume_path, b"resume bytes").unwrap();
    let history_path = dir.path().join("history.json");

    let mut analysis = create_analysis("cv.pdf", "docker");
    analysis.file_path = resume_path.display().to_string();
    for _ in 0..3 {
        history::record_analysis(&history_path, "jane", None, &analysis).unwrap();
    }

    // 末尾にゴミが付いたファイル
    let mut content = std::fs::read_to_string(&history_path).unwrap();
    content.push_str("\n,");
    std::fs::write(&history_path, &content).unwrap();

    history::record_analysis(&history_path, "jane", None, &analysis).unwrap();

    assert_eq!(HistoryFile::load(&history_path).unwrap().len(), 1);
    let backup = std::fs::read_to_string(dir.path().join("history.json.bak")).unwrap();
    assert_eq!(backup, content);
    let previous: HistoryFile =
        serde_json::from_str(backup.trim_end_matches(|c: char| c == '\n' || c == ',')).unwrap();
    assert_eq!(previous.len(), 3);
}

/// 保存は一時ファイルを残さず置き換える
#[test]
fn test_history_save_replaces_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("history.json");

    let mut history = HistoryFile::default();
    history.append(record_at("jane", "a.pdf", 8));
    history.save(&path).unwrap();
    history.append(record_at("jane", "b.pdf", 9));
    history.save(&path).unwrap();

    assert_eq!(HistoryFile::load(&path).unwrap().len(), 2);
    let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

/// 解析結果を追記すると指紋が記録される
#[test]
fn test_record_analysis_appends() {
    let dir = tempdir().expect("Failed to create temp dir");
    let resume_path = dir.path().join("cv.pdf");
    std::fs::write(&resume_path, b"resume bytes").unwrap();
    let history_path = dir.path().join("history.json");

    let mut analysis = create_analysis("cv.pdf", "docker");
    analysis.file_path = resume_path.display().to_string();

    let first = history::record_analysis(&history_path, "jane", None, &analysis).unwrap();
    history::record_analysis(&history_path, "jane", Some("SRE"), &analysis).unwrap();

    assert_eq!(first.resume_fingerprint, history::compute_file_hash(&resume_path).unwrap());
    assert_eq!(first.resume_fingerprint.len(), 64);
    assert_eq!(HistoryFile::load(&history_path).unwrap().len(), 2);
}
