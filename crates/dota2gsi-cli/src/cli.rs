//! Command-line arguments.
//!
//! Every flag can also be set through an environment variable (`GSI_*`).
//! An explicit flag wins over the environment.

use clap::{Parser, ValueEnum};
use dota2gsi_listener::ListenerConfig;
use dota2gsi_listener::config::{
    DEFAULT_HOST, DEFAULT_MAX_BODY_BYTES, DEFAULT_PORT, DEFAULT_READ_TIMEOUT_MS,
    DEFAULT_SHUTDOWN_GRACE_MS,
};

/// Listen for Dota 2 Game State Integration updates and print them.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// The port to listen on for game state information.
    #[arg(
        short,
        long,
        env = "GSI_PORT",
        default_value_t = DEFAULT_PORT,
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    pub port: u16,

    /// The host name or address to bind to.
    #[arg(long, env = "GSI_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Request bodies larger than this many bytes are discarded.
    #[arg(long, env = "GSI_MAX_BODY_BYTES", default_value_t = DEFAULT_MAX_BODY_BYTES)]
    pub max_body_bytes: usize,

    /// Request bodies not fully received within this many milliseconds
    /// are discarded.
    #[arg(long, env = "GSI_READ_TIMEOUT_MS", default_value_t = DEFAULT_READ_TIMEOUT_MS)]
    pub read_timeout_ms: u64,

    /// How long shutdown waits for open connections before closing them.
    #[arg(long, env = "GSI_SHUTDOWN_GRACE_MS", default_value_t = DEFAULT_SHUTDOWN_GRACE_MS)]
    pub shutdown_grace_ms: u64,

    /// How received updates are printed.
    #[arg(long, env = "GSI_OUTPUT", value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Log line format (logs go to stderr).
    #[arg(long, env = "GSI_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl Cli {
    /// The listener configuration described by these arguments.
    pub fn listener_config(&self) -> ListenerConfig {
        ListenerConfig {
            host: self.host.clone(),
            port: self.port,
            max_body_bytes: self.max_body_bytes,
            read_timeout_ms: self.read_timeout_ms,
            shutdown_grace_ms: self.shutdown_grace_ms,
        }
    }
}

/// Output format for received updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One human-readable summary line per update.
    Text,
    /// One compact JSON document per line, in the wire shape.
    Json,
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines.
    Text,
    /// Structured JSON lines.
    Json,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    use super::*;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn explicit_flags_build_listener_config() {
        let cli = Cli::try_parse_from([
            "dota2gsi",
            "--port",
            "3000",
            "--host",
            "0.0.0.0",
            "--max-body-bytes",
            "4096",
            "--read-timeout-ms",
            "250",
            "--output",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.output, OutputFormat::Json);
        assert_eq!(
            cli.listener_config(),
            ListenerConfig {
                host: String::from("0.0.0.0"),
                port: 3000,
                max_body_bytes: 4096,
                read_timeout_ms: 250,
                shutdown_grace_ms: DEFAULT_SHUTDOWN_GRACE_MS,
            }
        );
    }

    #[test]
    fn defaults_match_listener_defaults() {
        let cli = Cli::try_parse_from(["dota2gsi"]).unwrap();
        assert_eq!(cli.listener_config(), ListenerConfig::default());
    }

    #[test]
    fn short_port_flag() {
        let cli = Cli::try_parse_from(["dota2gsi", "-p", "4001"]).unwrap();
        assert_eq!(cli.port, 4001);
    }

    #[test]
    fn zero_port_is_rejected() {
        let err = Cli::try_parse_from(["dota2gsi", "--port", "0"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn non_numeric_port_is_rejected() {
        let err = Cli::try_parse_from(["dota2gsi", "--port", "http"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn out_of_range_port_is_rejected() {
        assert!(Cli::try_parse_from(["dota2gsi", "--port", "70000"]).is_err());
    }
}
