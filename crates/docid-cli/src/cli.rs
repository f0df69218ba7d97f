use clap::{Parser, Subcommand, ValueEnum};
use std::fmt::{Display, Formatter};

pub const LOG_FORMAT_ENV: &str = "DOCID_LOG_FORMAT";
pub const COUNT_ENV: &str = "DOCID_COUNT";
pub const TIME_ENV: &str = "DOCID_TIME";

pub const DEFAULT_COUNT: &str = "1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    #[value(name = "text")]
    Text,
    #[value(name = "json")]
    Json,
}

impl Display for LogFormatArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormatArg::Text => write!(f, "text"),
            LogFormatArg::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "docid", about = "Generate and inspect ULID document ids")]
pub struct CLI {
    #[arg(
        long,
        global = true,
        env = LOG_FORMAT_ENV,
        value_enum,
        default_value_t = LogFormatArg::Text
    )]
    pub log_format: LogFormatArg,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// Print new identifiers, one per line.
    Generate {
        #[arg(long, short = 'n', env = COUNT_ENV, default_value = DEFAULT_COUNT)]
        count: usize,

        /// Milliseconds since the Unix epoch; defaults to the system clock.
        #[arg(long, env = TIME_ENV, allow_negative_numbers = true)]
        time: Option<i64>,
    },
    /// Print the 10-character time segment for a timestamp.
    EncodeTime {
        #[arg(allow_negative_numbers = true)]
        millis: i64,
    },
    /// Print the timestamp stored in an identifier.
    DecodeTime { id: String },
    /// Print every field of a full identifier.
    Inspect { id: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_defaults() {
        let cli = CLI::try_parse_from(["docid", "generate"]).unwrap();
        assert_eq!(cli.log_format, LogFormatArg::Text);
        assert_eq!(
            cli.command,
            Command::Generate {
                count: 1,
                time: None
            }
        );
    }

    #[test]
    fn generate_with_frozen_time() {
        let cli = CLI::try_parse_from([
            "docid",
            "--log-format",
            "json",
            "generate",
            "-n",
            "5",
            "--time",
            "1700000000000",
        ])
        .unwrap();
        assert_eq!(cli.log_format, LogFormatArg::Json);
        assert_eq!(
            cli.command,
            Command::Generate {
                count: 5,
                time: Some(1_700_000_000_000)
            }
        );
    }

    #[test]
    fn encode_time_accepts_negative_input() {
        let cli = CLI::try_parse_from(["docid", "encode-time", "-1"]).unwrap();
        assert_eq!(cli.command, Command::EncodeTime { millis: -1 });
    }

    #[test]
    fn decode_and_inspect_take_an_id() {
        let cli = CLI::try_parse_from(["docid", "decode-time", "01ARYZ6S41"]).unwrap();
        assert_eq!(
            cli.command,
            Command::DecodeTime {
                id: "01ARYZ6S41".to_string()
            }
        );
        let cli = CLI::try_parse_from(["docid", "inspect", "01ARYZ6S41TSV4RRFFQ69G5FAV"]).unwrap();
        assert!(matches!(cli.command, Command::Inspect { .. }));
    }

    #[test]
    fn rejects_unknown_log_format() {
        assert!(CLI::try_parse_from(["docid", "--log-format", "xml", "generate"]).is_err());
    }
}
