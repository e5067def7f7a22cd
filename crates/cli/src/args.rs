use crate::options::OutputFormat;
use crate::parsers::parse_delimiter;
use clap::{ArgAction, Parser, ValueHint};
use std::path::PathBuf;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "colstat",
    version = crate::VERSION,
    about = "CSV の列ごとの要約統計を表示するツール",
    long_about = "Reads a header line such as `name,age(number)` followed by comma-separated \
                  rows and prints per-column summary statistics. Columns annotated `(number)` \
                  get min/max/total/avg; all others get string frequency statistics."
)]
pub struct Args {
    /// 入力ファイル（省略時は標準入力）
    #[arg(value_hint = ValueHint::FilePath)]
    pub input: Option<PathBuf>,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// 区切り文字（1文字、`tab` / `\t` も可）
    #[arg(short, long, default_value = ",", value_parser = parse_delimiter)]
    pub delimiter: char,

    /// ログの詳細度（-v, -vv, -vvv）
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
