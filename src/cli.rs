use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_URL: &str = "https://www.klantenvertellen.nl/reviews/1039690/merk_echt";
pub const DEFAULT_OUTPUT: &str = "merk_echt_reviews.xlsx";

#[derive(Parser)]
#[command(name = "review-scraper")]
#[command(about = "Klantenvertellen のレビューを取得して Excel に出力", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub scrape: ScrapeArgs,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// サブコマンド省略時のレビュー取得オプション
#[derive(Args, Debug, Clone)]
pub struct ScrapeArgs {
    /// レビューページのURL
    #[arg(long, default_value = DEFAULT_URL)]
    pub url: String,

    /// 最大ページ数
    #[arg(long, default_value = "10")]
    pub pages: u32,

    /// 出力ファイル
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// 出力形式 (excel/json/both)
    #[arg(short, long, default_value = "excel")]
    pub format: ExportFormat,

    /// 取得方式 (auto/http/browser)
    #[arg(long, default_value = "auto")]
    pub engine: Engine,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 設定を表示/編集
    Config {
        /// 設定を表示
        #[arg(long)]
        show: bool,

        /// User-Agentを設定
        #[arg(long)]
        set_user_agent: Option<String>,

        /// 設定を初期値に戻す
        #[arg(long)]
        reset: bool,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Excel,
    Json,
    Both,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "excel" | "xlsx" => Ok(ExportFormat::Excel),
            "json" => Ok(ExportFormat::Json),
            "both" => Ok(ExportFormat::Both),
            _ => Err(format!("Unknown format: {}. Use excel, json, or both", s)),
        }
    }
}

/// ページ取得方式
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Engine {
    /// ブラウザを試し、起動できなければHTTP
    #[default]
    Auto,
    /// HTTPのみ
    Http,
    /// ブラウザのみ（起動失敗はエラー）
    Browser,
}

impl std::str::FromStr for Engine {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Engine::Auto),
            "http" | "requests" => Ok(Engine::Http),
            "browser" | "chrome" => Ok(Engine::Browser),
            _ => Err(format!("Unknown engine: {}. Use auto, http, or browser", s)),
        }
    }
}

impl std::fmt::Display for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Engine::Auto => write!(f, "auto"),
            Engine::Http => write!(f, "http"),
            Engine::Browser => write!(f, "browser"),
        }
    }
}
