use chrono::Utc;
use clap::Parser;
use resume_analyzer::{analyzer, cli, config, error, export, history, scanner};
use resume_analyzer_common::export::table_core::format_percent;
use resume_analyzer_common::{text_summary, ReportMetadata, SOFT, TECHNICAL};
use cli::{Cli, Commands, ExportFormat};
use config::Config;
use error::Result;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Analyze { resume, jd, format, output, title, json, job_title, no_history } => {
            println!("📄 resume-analyzer - 履歴書解析\n");

            // 起動時に1回だけ構築し、以降は参照で渡す
            let catalog = config.load_catalog()?;

            // 1. 求人票
            println!("[1/3] 求人票を読み込み中...");
            let jd_text = match &jd {
                Some(path) => {
                    let text = analyzer::load_job_description(path)?;
                    println!("✔ 求人票: {}\n", path.display());
                    Some(text)
                }
                None => {
                    println!("- 求人票なし（履歴書自体と比較します）\n");
                    None
                }
            };

            // 2. 解析
            println!("[2/3] 履歴書を解析中...");
            let analysis = analyzer::analyze_resume(&resume, jd_text.as_deref(), &catalog)?;
            println!("✔ 解析完了\n");

            println!("📊 Resume Analysis Report:\n");
            print!("{}", text_summary(&analysis.result));
            println!("💡 Suggestions:");
            for suggestion in &analysis.suggestions {
                println!("- {}", suggestion);
            }
            println!();

            if let Some(json_path) = json {
                let content = serde_json::to_string_pretty(&analysis)?;
                std::fs::write(&json_path, content)?;
                println!("✔ 結果を保存: {}", json_path.display());
            }

            // 3. レポート出力
            println!("[3/3] レポートを出力中... ({})", format);
            let metadata = ReportMetadata {
                title: title.unwrap_or_else(|| config.report_title.clone()),
                resume_name: analysis.file_name.clone(),
                job_description_name: jd.as_deref().map(display_file_name),
                generated_at: Utc::now().format("%Y-%m-%d %H:%M UTC").to_string(),
            };
            let output = output.unwrap_or_else(|| PathBuf::from("."));
            for path in export::export_report(&analysis, &format, &output, "analysis_report", &metadata)? {
                println!("✔ 出力: {}", path.display());
            }

            if config.save_history && !no_history {
                let owner = config.owner();
                history::record_analysis(&Config::history_path()?, &owner, job_title.as_deref(), &analysis)?;
                println!("✔ 履歴に記録しました (所有者: {})", owner);
            }

            println!("\n✅ 完了");
        }

        Commands::Batch { folder, jd, output, format, recursive } => {
            println!("🚀 resume-analyzer - 一括解析\n");

            let catalog = config.load_catalog()?;

            // 1. スキャン
            println!("[1/3] 履歴書をスキャン中...");
            let documents = scanner::scan_folder(&folder, recursive)?;
            if documents.is_empty() {
                return Err(error::AnalyzerError::NoDocumentsFound(folder.display().to_string()));
            }
            println!("✔ {}件の履歴書を検出\n", documents.len());

            let jd_text = match &jd {
                Some(path) => Some(analyzer::load_job_description(path)?),
                None => None,
            };

            // 2. 解析
            println!("[2/3] 解析中...");
            let outcome = analyzer::batch::analyze_documents(&documents, jd_text.as_deref(), &catalog, true);
            println!("✔ 解析完了 ({}/{}件成功)\n", outcome.analyses.len(), outcome.total());

            // 3. 出力
            println!("[3/3] レポートを出力中... ({})", format);
            let output_dir = output.unwrap_or_else(|| folder.clone());
            std::fs::create_dir_all(&output_dir)?;
            let history_path = Config::history_path()?;
            let owner = config.owner();

            let stems = export::batch_report_stems(
                &folder,
                outcome.analyses.iter().map(|a| Path::new(a.file_path.as_str())),
            );

            for (analysis, stem) in outcome.analyses.iter().zip(&stems) {
                let metadata = ReportMetadata {
                    title: config.report_title.clone(),
                    resume_name: analysis.file_name.clone(),
                    job_description_name: jd.as_deref().map(display_file_name),
                    generated_at: Utc::now().format("%Y-%m-%d %H:%M UTC").to_string(),
                };
                export::export_report(analysis, &format, &output_dir, stem, &metadata)?;

                println!(
                    "  {}: technical {}% / soft {}%",
                    analysis.file_name,
                    format_percent(analysis.result.match_percent(TECHNICAL)),
                    format_percent(analysis.result.match_percent(SOFT)),
                );

                if config.save_history {
                    history::record_analysis(&history_path, &owner, None, analysis)?;
                }
            }

            for (file_name, err) in &outcome.failures {
                println!("✘ {}: {}", file_name, err);
            }

            if format != ExportFormat::None {
                println!("✔ 出力先: {}", output_dir.display());
            }
            println!("\n✅ 完了");
        }

        Commands::Catalog { json } => {
            let catalog = config.load_catalog()?;

            if json {
                println!("{}", serde_json::to_string_pretty(&catalog)?);
            } else {
                for category in catalog.categories() {
                    println!("🔹 {} ({}件)", category.name, category.keywords.len());
                    println!("  {}", category.keywords.join(", "));
                }
            }
        }

        Commands::Config { set_owner, set_catalog, clear_catalog, show } => {
            let mut config = config;

            if let Some(owner) = set_owner {
                config.set_owner(owner)?;
                println!("✔ 所有者を設定しました");
            }

            if let Some(path) = set_catalog {
                // 保存前に読み込めるか確認
                resume_analyzer_common::KeywordCatalog::from_file(&path)?;
                config.set_catalog_path(Some(path))?;
                println!("✔ カタログを設定しました");
            } else if clear_catalog {
                config.set_catalog_path(None)?;
                println!("✔ 組み込みカタログに戻しました");
            }

            if show {
                println!("設定:");
                println!("  所有者: {}", config.owner());
                println!(
                    "  カタログ: {}",
                    config
                        .catalog_path
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "組み込み".into())
                );
                println!("  レポートタイトル: {}", config.report_title);
                println!("  履歴保存: {}", if config.save_history { "有効" } else { "無効" });
                println!("  設定ファイル: {}", Config::config_path()?.display());
            }
        }

        Commands::History { owner, limit, clear } => {
            let owner = owner.unwrap_or_else(|| config.owner());
            let history_path = Config::history_path()?;
            let mut history = history::HistoryFile::load(&history_path)?;

            if clear {
                let removed = history.clear_owner(&owner);
                history.save(&history_path)?;
                println!("✔ {}件の履歴を削除しました (所有者: {})", removed, owner);
            } else {
                let records = history.for_owner(&owner);
                if records.is_empty() {
                    println!("履歴がありません (所有者: {})", owner);
                }
                for record in records.into_iter().take(limit) {
                    println!(
                        "{}  {}  technical {}% / soft {}%{}",
                        record.created_at.format("%Y-%m-%d %H:%M"),
                        record.resume_file,
                        format_percent(record.technical_match),
                        format_percent(record.soft_match),
                        record
                            .job_title
                            .as_ref()
                            .map(|t| format!("  [{}]", t))
                            .unwrap_or_default(),
                    );
                }
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("resume_analyzer={0},resume_analyzer_common={0}", level))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn display_file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
