use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-analyzer")]
#[command(about = "履歴書と求人票のキーワード照合・改善提案ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 履歴書を解析してレポートを出力
    Analyze {
        /// 履歴書ファイル (.pdf / .docx)
        #[arg(required = true)]
        resume: PathBuf,

        /// 求人票テキストファイル（省略時は履歴書自体と比較）
        #[arg(short, long)]
        jd: Option<PathBuf>,

        /// 出力形式 (csv/pdf/both/none)
        #[arg(short, long, default_value = "csv")]
        format: ExportFormat,

        /// 出力ファイル/ディレクトリ（デフォルト: カレント/analysis_report）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// レポートタイトル（省略時は設定値）
        #[arg(short, long)]
        title: Option<String>,

        /// 解析結果JSONの保存先
        #[arg(long)]
        json: Option<PathBuf>,

        /// 履歴に記録する職種名
        #[arg(long)]
        job_title: Option<String>,

        /// 履歴に記録しない
        #[arg(long)]
        no_history: bool,
    },

    /// フォルダ内の履歴書を一括解析
    Batch {
        /// 履歴書フォルダのパス
        #[arg(required = true)]
        folder: PathBuf,

        /// 求人票テキストファイル
        #[arg(short, long)]
        jd: Option<PathBuf>,

        /// 出力ディレクトリ（デフォルト: 入力フォルダ）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 出力形式 (csv/pdf/both/none)
        #[arg(short, long, default_value = "csv")]
        format: ExportFormat,

        /// サブフォルダも再帰的にスキャン
        #[arg(short = 'r', long)]
        recursive: bool,
    },

    /// 使用中のキーワードカタログを表示
    Catalog {
        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 設定を表示/編集
    Config {
        /// 履歴の所有者名を設定
        #[arg(long)]
        set_owner: Option<String>,

        /// カスタムカタログ（JSON）を設定
        #[arg(long)]
        set_catalog: Option<PathBuf>,

        /// カスタムカタログを解除して組み込みに戻す
        #[arg(long)]
        clear_catalog: bool,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },

    /// 解析履歴を表示/削除
    History {
        /// 所有者（省略時は設定値）
        #[arg(long)]
        owner: Option<String>,

        /// 表示件数
        #[arg(short = 'n', long, default_value = "10")]
        limit: usize,

        /// 所有者の履歴を削除
        #[arg(long)]
        clear: bool,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Csv,
    Pdf,
    Both,
    None,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "pdf" => Ok(ExportFormat::Pdf),
            "both" => Ok(ExportFormat::Both),
            "none" => Ok(ExportFormat::None),
            _ => Err(format!("Unknown format: {}. Use csv, pdf, both, or none", s)),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Pdf => write!(f, "pdf"),
            ExportFormat::Both => write!(f, "both"),
            ExportFormat::None => write!(f, "none"),
        }
    }
}
