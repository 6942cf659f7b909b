use clap::Parser;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Parser)]
#[command(name = "neuro-boost")]
#[command(about = "Runs the Neuro-AI Boost cerebrospinal synchronization sequence")]
pub struct CliConfig {
    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    /// 其餘參數一律忽略
    #[arg(hide = true, num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
    #[serde(skip)]
    pub ignored: Vec<String>,
}

impl CliConfig {
    /// 寬鬆解析：clap 拒絕的參數列（含 `--help`）退回預設設定，並回傳被拒絕的原因
    pub fn parse_lenient_from<I, T>(args: I) -> (Self, Option<String>)
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Self::try_parse_from(args) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(format!("{:?}", e.kind()))),
        }
    }

    pub fn parse_lenient() -> (Self, Option<String>) {
        Self::parse_lenient_from(std::env::args_os())
    }
}
