use thiserror::Error;

/// Errors returned by ULID encoding, decoding and generation.
///
/// Every variant maps to a fixed machine-readable code, see [`Error::code`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    #[error("time must be an integer: {value} (ENC_TIME_MALFORMED)")]
    EncodeTimeValueMalformed { value: f64 },
    #[error("cannot encode a time larger than {max}: {value} (ENC_TIME_SIZE_EXCEED)")]
    EncodeTimeSizeExceeded { value: u128, max: u64 },
    #[error("time must not be negative: {value} (ENC_TIME_NEG)")]
    EncodeTimeNegative { value: i128 },
    #[error("invalid character {character:?} at position {position} in time segment (DEC_TIME_CHAR)")]
    DecodeTimeInvalidCharacter { character: char, position: usize },
    #[error("malformed time segment: {0} (DEC_TIME_MALFORMED)")]
    DecodeTimeMalformed(String),
    #[error("failed to find a reliable PRNG (PRNG_DETECT)")]
    PrngDetectFailure,
    #[error("invalid ULID: {0} (ULID_INVALID)")]
    UlidInvalid(String),
    #[error("unexpected failure: {0} (UNEXPECTED)")]
    Unexpected(String),
}

impl Error {
    /// Returns the stable code identifying the kind of failure.
    pub fn code(&self) -> &'static str {
        match self {
            Error::EncodeTimeValueMalformed { .. } => "ENC_TIME_MALFORMED",
            Error::EncodeTimeSizeExceeded { .. } => "ENC_TIME_SIZE_EXCEED",
            Error::EncodeTimeNegative { .. } => "ENC_TIME_NEG",
            Error::DecodeTimeInvalidCharacter { .. } => "DEC_TIME_CHAR",
            Error::DecodeTimeMalformed(_) => "DEC_TIME_MALFORMED",
            Error::PrngDetectFailure => "PRNG_DETECT",
            Error::UlidInvalid(_) => "ULID_INVALID",
            Error::Unexpected(_) => "UNEXPECTED",
        }
    }
}
