use crate::{
    clock::{Clock, SystemClock},
    encoding::{encode_random, encode_time, IntoMillis, RANDOM_LEN, TIME_LEN},
    error::Error,
    prng::{detect_prng, verify_prng, OsPrng, Prng},
    ulid::Ulid,
};

/// ULID generator over an injected clock and secure random source.
///
/// The generator keeps no state between calls, so a single instance can be
/// shared across threads. Two identifiers generated in the same millisecond
/// differ only by their 80 random bits; uniqueness is probabilistic.
pub struct UlidGenerator<C: Clock, P: Prng> {
    clock: C,
    prng: P,
}

impl UlidGenerator<SystemClock, OsPrng> {
    /// Creates a generator backed by the system clock and the operating
    /// system CSPRNG.
    ///
    /// Fails with [`Error::PrngDetectFailure`] when no secure source exists.
    pub fn new() -> Result<Self, Error> {
        Ok(Self::with_clock(SystemClock, detect_prng()?))
    }
}

impl<C: Clock, P: Prng> UlidGenerator<C, P> {
    pub fn with_clock(clock: C, prng: P) -> Self {
        Self { clock, prng }
    }

    /// Like [`UlidGenerator::with_clock`], but verifies the random source
    /// first.
    pub fn detect(clock: C, prng: P) -> Result<Self, Error> {
        Ok(Self::with_clock(clock, verify_prng(prng)?))
    }

    /// Generates an identifier for the current time of the clock.
    pub fn generate(&self) -> Result<String, Error> {
        self.generate_at(self.clock.now())
    }

    /// Generates an identifier for an explicit time.
    pub fn generate_at(&self, now: impl IntoMillis) -> Result<String, Error> {
        let time = encode_time(now, TIME_LEN)?;

        // Draw everything up front so a failing source never leaves a
        // partially built identifier behind.
        let mut samples = [0.0_f64; RANDOM_LEN];
        for sample in samples.iter_mut() {
            *sample = self.prng.next_fraction()?;
        }
        let mut draws = samples.into_iter();
        let random = encode_random(RANDOM_LEN, || draws.next().unwrap_or_default());

        Ok(time + &random)
    }

    /// Generates an identifier in its binary form.
    pub fn generate_ulid(&self) -> Result<Ulid, Error> {
        self.generate()?.parse()
    }
}

/// Generates one identifier from the system clock and the operating system
/// CSPRNG.
///
/// Detection runs on every call; hold a [`UlidGenerator`] when generating many.
pub fn ulid() -> Result<String, Error> {
    UlidGenerator::new()?.generate()
}
