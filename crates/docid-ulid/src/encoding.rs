//! Crockford Base32 primitives for the two ULID segments.
//!
//! The alphabet and lengths below are part of the identifier format and must
//! never change: the character at position `i` of [`ENCODING`] always stands
//! for the value `i`.

use crate::error::Error;
use jiff::Timestamp;

/// Crockford's Base32 alphabet (no `I`, `L`, `O`, `U`).
pub const ENCODING: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";
pub const ENCODING_LEN: u64 = 32;
/// Characters in the time segment.
pub const TIME_LEN: usize = 10;
/// Characters in the randomness segment.
pub const RANDOM_LEN: usize = 16;
/// Characters in a complete identifier.
pub const ULID_LEN: usize = TIME_LEN + RANDOM_LEN;
/// Largest encodable timestamp, `2^48 - 1` milliseconds.
pub const TIME_MAX: u64 = (1_u64 << 48) - 1;

/// A value that can be validated into a 48-bit millisecond timestamp.
pub trait IntoMillis {
    fn into_millis(self) -> Result<u64, Error>;
}

impl IntoMillis for u64 {
    fn into_millis(self) -> Result<u64, Error> {
        if self > TIME_MAX {
            return Err(Error::EncodeTimeSizeExceeded {
                value: u128::from(self),
                max: TIME_MAX,
            });
        }
        Ok(self)
    }
}

impl IntoMillis for i64 {
    fn into_millis(self) -> Result<u64, Error> {
        if self < 0 {
            return Err(Error::EncodeTimeNegative {
                value: i128::from(self),
            });
        }
        (self as u64).into_millis()
    }
}

impl IntoMillis for f64 {
    fn into_millis(self) -> Result<u64, Error> {
        if self.is_nan() {
            return Err(Error::EncodeTimeValueMalformed { value: self });
        }
        if self > TIME_MAX as f64 {
            return Err(Error::EncodeTimeSizeExceeded {
                value: self as u128,
                max: TIME_MAX,
            });
        }
        if self < 0.0 {
            return Err(Error::EncodeTimeNegative {
                value: self as i128,
            });
        }
        if self.fract() != 0.0 {
            return Err(Error::EncodeTimeValueMalformed { value: self });
        }
        Ok(self as u64)
    }
}

impl IntoMillis for Timestamp {
    fn into_millis(self) -> Result<u64, Error> {
        self.as_millisecond().into_millis()
    }
}

/// Encodes the time portion of a ULID, most significant character first.
///
/// The input is validated before encoding and is never clamped. Pass
/// [`TIME_LEN`] for the canonical 10-character segment.
pub fn encode_time(value: impl IntoMillis, len: usize) -> Result<String, Error> {
    let millis = value.into_millis()?;
    Ok(encode_digits(u128::from(millis), len))
}

/// Encodes `len` random characters, drawing one sample in `[0, 1)` per
/// character.
///
/// Each draw is prepended, so the first sample ends up in the last position.
pub fn encode_random(len: usize, mut sample: impl FnMut() -> f64) -> String {
    let mut chars = vec!['0'; len];
    for slot in chars.iter_mut().rev() {
        *slot = random_char(sample());
    }
    chars.into_iter().collect()
}

/// Decodes the first [`TIME_LEN`] characters of `id` into milliseconds.
///
/// Lowercase input is accepted.
pub fn decode_time(id: &str) -> Result<u64, Error> {
    let segment: Vec<char> = id.chars().take(TIME_LEN).collect();
    if segment.len() < TIME_LEN {
        return Err(Error::DecodeTimeMalformed(format!(
            "expected at least {} characters, got {}",
            TIME_LEN,
            segment.len()
        )));
    }

    let time = decode_digits(&segment, 0)?;
    if time > u128::from(TIME_MAX) {
        return Err(Error::DecodeTimeMalformed(format!(
            "decoded time {} exceeds {}",
            time, TIME_MAX
        )));
    }
    Ok(time as u64)
}

fn random_char(sample: f64) -> char {
    // A source returning exactly 1.0 wraps back to the first character.
    let position = (sample * ENCODING_LEN as f64).floor() as u64 % ENCODING_LEN;
    char::from(ENCODING[position as usize])
}

/// Writes `value` as `len` base-32 digits, most significant first.
pub(crate) fn encode_digits(mut value: u128, len: usize) -> String {
    let mut chars = vec!['0'; len];
    for slot in chars.iter_mut().rev() {
        *slot = char::from(ENCODING[(value % u128::from(ENCODING_LEN)) as usize]);
        value /= u128::from(ENCODING_LEN);
    }
    chars.into_iter().collect()
}

/// Reads `digits` as a base-32 number, most significant first.
///
/// `offset` is added to the reported position of an invalid character.
/// Callers keep `digits` at 25 characters or fewer so the sum fits in `u128`.
pub(crate) fn decode_digits(digits: &[char], offset: usize) -> Result<u128, Error> {
    digits
        .iter()
        .enumerate()
        .try_fold(0_u128, |acc, (index, &character)| {
            let value = decode_char(character).ok_or(Error::DecodeTimeInvalidCharacter {
                character,
                position: offset + index,
            })?;
            Ok(acc * u128::from(ENCODING_LEN) + u128::from(value))
        })
}

fn decode_char(character: char) -> Option<u8> {
    let upper = character.to_ascii_uppercase();
    ENCODING
        .iter()
        .position(|&symbol| char::from(symbol) == upper)
        .map(|position| position as u8)
}
