use clap::ValueEnum;
use colstat_engine::options as engine_options;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// 列ごとのテキストブロック
    #[default]
    Text,
    /// 列サマリーの JSON 配列
    Json,
    /// 列サマリーの YAML リスト
    Yaml,
}

impl From<OutputFormat> for engine_options::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => Self::Text,
            OutputFormat::Json => Self::Json,
            OutputFormat::Yaml => Self::Yaml,
        }
    }
}
