use crate::cli::Command;
use docid_ulid::encoding::TIME_LEN;
use docid_ulid::{decode_time, encode_time, Error, Ulid, UlidGenerator};
use tracing::debug;

/// Runs one subcommand and returns the lines to print.
pub fn run(command: &Command) -> Result<Vec<String>, Error> {
    match command {
        Command::Generate { count, time } => {
            let generator = UlidGenerator::new()?;
            debug!(count, time = ?time, "generating identifiers");
            (0..*count)
                .map(|_| match time {
                    Some(millis) => generator.generate_at(*millis),
                    None => generator.generate(),
                })
                .collect()
        }
        Command::EncodeTime { millis } => Ok(vec![encode_time(*millis, TIME_LEN)?]),
        Command::DecodeTime { id } => Ok(vec![decode_time(id)?.to_string()]),
        Command::Inspect { id } => {
            let ulid: Ulid = id.parse()?;
            let time = ulid
                .datetime()
                .map(|at| at.to_string())
                .unwrap_or_else(|| "out of calendar range".to_string());
            Ok(vec![
                format!("id:         {}", ulid),
                format!("timestamp:  {}", ulid.timestamp()),
                format!("time:       {}", time),
                format!("randomness: {:020x}", ulid.randomness()),
            ])
        }
    }
}
