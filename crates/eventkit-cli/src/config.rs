//! Runtime settings resolved from flags and environment.

use clap::Args;
use eventkit_core::Mode;

use crate::logging::{LogConfig, LogFormat};

/// Flags shared by every subcommand.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Operating mode (`prod`/`production` or anything else for development)
    #[arg(long, env = "EVENTKIT_MODE", default_value = "dev", global = true)]
    pub mode: Mode,
    /// Log level filter
    #[arg(long, env = "EVENTKIT_LOG", default_value = "warn", global = true)]
    pub log_level: String,
    /// Log output format
    #[arg(long, env = "EVENTKIT_LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty, global = true)]
    pub log_format: LogFormat,
}

/// Resolved settings handed to commands.
#[derive(Debug, Clone)]
pub struct Settings {
    pub mode: Mode,
    pub log: LogConfig,
}

impl From<&GlobalArgs> for Settings {
    fn from(args: &GlobalArgs) -> Self {
        Self {
            mode: args.mode,
            log: LogConfig {
                level: args.log_level.clone(),
                format: args.log_format,
            },
        }
    }
}
