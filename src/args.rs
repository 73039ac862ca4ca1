// src/args.rs
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Table,
    Json,
    Jsonl,
}

#[derive(Parser, Debug)]
#[command(
    name = "countable",
    version,
    about = "Paragraph/word/character statistics for files and stdin"
)]
pub struct Args {
    /// Files or glob patterns to count; reads stdin when omitted
    pub selectors: Vec<String>,

    /// Treat only runs of three or more line breaks as paragraph boundaries
    #[arg(long)]
    pub hard_returns: bool,

    /// Strip markup tags before counting
    #[arg(long)]
    pub strip_tags: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Keep running and re-count whenever a matched file changes
    #[arg(long)]
    pub watch: bool,

    /// Debounce interval for watch mode, in milliseconds
    #[arg(long, default_value_t = 200)]
    pub interval_ms: u64,

    /// Directory selectors are resolved against
    #[arg(long, default_value = ".")]
    pub root: std::path::PathBuf,
}

impl Args {
    pub fn count_config(&self) -> countable_domain::CountConfig {
        countable_domain::CountConfig::new()
            .hard_returns(self.hard_returns)
            .strip_tags(self.strip_tags)
    }
}
