//! ULID generation for document ids.
//!
//! An identifier is 26 Crockford Base32 characters: a 10-character
//! millisecond timestamp followed by 16 characters (80 bits) of secure
//! randomness. Sorting identifiers as plain strings sorts them by creation
//! time.

mod clock;
pub mod encoding;
pub mod error;
mod generator;
mod prng;
mod ulid;

pub use clock::{Clock, FixedClock, SystemClock};
pub use encoding::{decode_time, encode_random, encode_time, IntoMillis};
pub use error::Error;
pub use generator::{ulid, UlidGenerator};
pub use prng::{detect_prng, verify_prng, OsPrng, Prng};
pub use ulid::Ulid;
