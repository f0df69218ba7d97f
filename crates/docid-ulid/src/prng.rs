//! Secure random byte sources.
//!
//! Identifiers are assumed to be unguessable, so generation only ever runs on
//! top of a cryptographically secure source. [`detect_prng`] locates the
//! operating system source once; there is no fallback to a weaker generator.

use crate::error::Error;
use rand::rngs::OsRng;
use rand::TryRngCore;
use tracing::debug;

/// A uniform random byte source.
pub trait Prng: Send + Sync {
    /// Draws one uniformly distributed byte.
    fn next_byte(&self) -> Result<u8, Error>;

    /// Draws one sample in `[0, 1)` with a resolution of 1/256.
    fn next_fraction(&self) -> Result<f64, Error> {
        Ok(f64::from(self.next_byte()?) / 256.0)
    }
}

/// The operating system CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsPrng;

impl Prng for OsPrng {
    fn next_byte(&self) -> Result<u8, Error> {
        let mut buffer = [0_u8; 1];
        OsRng
            .try_fill_bytes(&mut buffer)
            .map_err(|err| Error::Unexpected(format!("secure random source failed: {err}")))?;
        Ok(buffer[0])
    }
}

/// Locates the operating system CSPRNG and checks that it can produce bytes.
pub fn detect_prng() -> Result<OsPrng, Error> {
    verify_prng(OsPrng)
}

/// Accepts `candidate` as the process random source if it can produce a byte.
///
/// Returns [`Error::PrngDetectFailure`] otherwise.
pub fn verify_prng<P: Prng>(candidate: P) -> Result<P, Error> {
    if candidate.next_byte().is_err() {
        return Err(Error::PrngDetectFailure);
    }
    debug!(
        source = std::any::type_name::<P>(),
        "secure random source detected"
    );
    Ok(candidate)
}
