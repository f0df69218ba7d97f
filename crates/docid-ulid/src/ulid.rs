use crate::encoding::{decode_digits, encode_digits, RANDOM_LEN, TIME_LEN, TIME_MAX, ULID_LEN};
use crate::error::Error;
use jiff::Timestamp;
use modular_bitfield::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

const RANDOMNESS_MAX: u128 = (1_u128 << 80) - 1;

/// Binary form of a canonical 26-character identifier.
#[bitfield]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ulid {
    /// 80 bits of randomness.
    pub randomness: B80,
    /// 48 bits for timestamp (milliseconds since the Unix epoch).
    pub timestamp: B48,
}

impl Ulid {
    /// Builds a ULID from its two segments.
    pub fn from_parts(timestamp: u64, randomness: u128) -> Result<Self, Error> {
        if timestamp > TIME_MAX {
            return Err(Error::UlidInvalid(format!(
                "timestamp {} exceeds {}",
                timestamp, TIME_MAX
            )));
        }
        if randomness > RANDOMNESS_MAX {
            return Err(Error::UlidInvalid(format!(
                "randomness {:#x} exceeds 80 bits",
                randomness
            )));
        }
        Ok(Self::new()
            .with_timestamp(timestamp)
            .with_randomness(randomness))
    }

    /// Returns the creation time, or `None` when the timestamp lies past the
    /// range of [`Timestamp`] (after year 9999).
    pub fn datetime(&self) -> Option<Timestamp> {
        Timestamp::from_millisecond(self.timestamp() as i64).ok()
    }
}

impl fmt::Display for Ulid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode_digits(u128::from(self.timestamp()), TIME_LEN))?;
        f.write_str(&encode_digits(self.randomness(), RANDOM_LEN))
    }
}

impl fmt::Debug for Ulid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ulid")
            .field("timestamp", &self.timestamp())
            .field("randomness", &format_args!("{:#022x}", self.randomness()))
            .finish()
    }
}

impl FromStr for Ulid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != ULID_LEN {
            return Err(Error::UlidInvalid(format!(
                "expected {} characters, got {}",
                ULID_LEN,
                chars.len()
            )));
        }

        let (time, random) = chars.split_at(TIME_LEN);
        let timestamp = decode_digits(time, 0).map_err(invalid_ulid)?;
        if timestamp > u128::from(TIME_MAX) {
            return Err(Error::UlidInvalid(format!(
                "timestamp {} exceeds {}",
                timestamp, TIME_MAX
            )));
        }
        let randomness = decode_digits(random, TIME_LEN).map_err(invalid_ulid)?;

        Self::from_parts(timestamp as u64, randomness)
    }
}

fn invalid_ulid(err: Error) -> Error {
    match err {
        Error::DecodeTimeInvalidCharacter {
            character,
            position,
        } => Error::UlidInvalid(format!(
            "invalid character {:?} at position {}",
            character, position
        )),
        other => other,
    }
}

impl PartialOrd for Ulid {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ulid {
    fn cmp(&self, other: &Self) -> Ordering {
        self.timestamp()
            .cmp(&other.timestamp())
            .then_with(|| self.randomness().cmp(&other.randomness()))
    }
}

impl Serialize for Ulid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Ulid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
