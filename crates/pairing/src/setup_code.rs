//! HomeKit setup code generation and the triviality filter.
//!
//! A setup code is 8 decimal digits, displayed as `XXX-XX-XXX`. Codes that a
//! person could guess (repeated digits, runs, `ABABABAB` patterns) are never
//! produced by the generator and are reported invalid by [`is_valid`].

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::{PairingError, ValidationError};

/// Smallest code the generator draws (leading digit nonzero).
pub const SETUP_CODE_MIN: u32 = 10_000_000;

/// Largest 8-digit code.
pub const SETUP_CODE_MAX: u32 = 99_999_999;

/// Number of digits in a plain setup code.
pub const SETUP_CODE_DIGITS: usize = 8;

/// Upper bound on draws before the generator gives up.
pub const MAX_GENERATION_ATTEMPTS: u32 = 10_000;

/// Known-bad codes. Overlaps the pattern rules on purpose; extend here.
const DENY_LIST: &[&str] = &["12345678", "87654321", "00000000", "11111111"];

/// A source of uniformly distributed integers.
///
/// Implemented for every [`rand::Rng`], so `rand::thread_rng()` or a seeded
/// `StdRng` can be passed straight to [`SetupCodeGenerator::new`].
pub trait UniformSource {
    /// Return a value in `low..=high`.
    fn uniform_inclusive(&mut self, low: u32, high: u32) -> u32;
}

impl<R: rand::Rng + ?Sized> UniformSource for R {
    fn uniform_inclusive(&mut self, low: u32, high: u32) -> u32 {
        self.gen_range(low..=high)
    }
}

/// An 8-digit setup code. Stored without dashes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SetupCode {
    digits: String,
}

impl SetupCode {
    /// The code without separators, e.g. `61380755`.
    pub fn as_plain(&self) -> &str {
        &self.digits
    }

    /// The code grouped as `XXX-XX-XXX`.
    pub fn formatted(&self) -> String {
        format!(
            "{}-{}-{}",
            &self.digits[0..3],
            &self.digits[3..5],
            &self.digits[5..8]
        )
    }

    /// Numeric value of the code, as packed into the pairing payload.
    pub fn value(&self) -> u32 {
        self.digits
            .bytes()
            .fold(0u32, |acc, b| acc * 10 + u32::from(b - b'0'))
    }

    pub fn is_too_simple(&self) -> bool {
        is_too_simple(&self.digits)
    }
}

impl fmt::Display for SetupCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

/// Parses `613-80-755` or `61380755`. Only the format is checked; trivial
/// codes parse fine (see [`SetupCode::is_too_simple`]).
impl FromStr for SetupCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let plain = to_plain(s.trim());
        if plain.len() != SETUP_CODE_DIGITS {
            return Err(ValidationError::PasswordLength(plain.len()));
        }
        if !plain.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::PasswordFormat);
        }
        Ok(Self { digits: plain })
    }
}

impl Serialize for SetupCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Draws setup codes from an injected [`UniformSource`], skipping trivial ones.
pub struct SetupCodeGenerator<S> {
    source: S,
    max_attempts: u32,
}

impl<S: UniformSource> SetupCodeGenerator<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            max_attempts: MAX_GENERATION_ATTEMPTS,
        }
    }

    /// Override the retry bound (at least one draw is always made).
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Draw until a non-trivial code comes up.
    ///
    /// Fails with [`PairingError::EntropyExhausted`] once the retry bound is
    /// hit, which only happens with a broken source.
    pub fn generate(&mut self) -> Result<SetupCode, PairingError> {
        for attempt in 1..=self.max_attempts {
            let n = self.source.uniform_inclusive(SETUP_CODE_MIN, SETUP_CODE_MAX);
            if !(SETUP_CODE_MIN..=SETUP_CODE_MAX).contains(&n) {
                tracing::trace!(attempt, value = n, "Source returned out-of-range value");
                continue;
            }

            let raw = format!("{n:08}");
            if is_too_simple(&raw) {
                tracing::trace!(attempt, code = %raw, "Rejected trivial setup code");
                continue;
            }
            return Ok(SetupCode { digits: raw });
        }

        Err(PairingError::EntropyExhausted {
            attempts: self.max_attempts,
        })
    }
}

/// Generate a setup code using the thread-local RNG.
pub fn generate_setup_code() -> Result<SetupCode, PairingError> {
    SetupCodeGenerator::new(rand::thread_rng()).generate()
}

/// Strip dash separators: `613-80-755` -> `61380755`.
pub fn to_plain(code: &str) -> String {
    code.replace('-', "")
}

/// True when `code` (with or without dashes) is 8 digits and not trivial.
pub fn is_valid(code: &str) -> bool {
    let raw = to_plain(code);
    if raw.len() != SETUP_CODE_DIGITS || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    !is_too_simple(&raw)
}

/// Whether a plain digit string is guessable.
///
/// Rejects: all digits equal, a run ascending or descending by one, a
/// two-digit block repeated four times, and the explicit deny-list.
pub fn is_too_simple(raw: &str) -> bool {
    let d = raw.as_bytes();
    if d.is_empty() {
        return false;
    }

    if d.iter().all(|&b| b == d[0]) {
        return true;
    }

    let step = |w: &[u8]| i16::from(w[1]) - i16::from(w[0]);
    if d.windows(2).all(|w| step(w) == 1) || d.windows(2).all(|w| step(w) == -1) {
        return true;
    }

    if d.len() == SETUP_CODE_DIGITS {
        let block = &d[0..2];
        if d.chunks(2).all(|c| c == block) {
            return true;
        }
    }

    DENY_LIST.contains(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Replays a fixed list of values, then repeats the last one.
    struct Scripted {
        values: Vec<u32>,
        pos: usize,
    }

    impl Scripted {
        fn new(values: &[u32]) -> Self {
            Self {
                values: values.to_vec(),
                pos: 0,
            }
        }
    }

    impl UniformSource for Scripted {
        fn uniform_inclusive(&mut self, _low: u32, _high: u32) -> u32 {
            let v = self.values[self.pos.min(self.values.len() - 1)];
            self.pos += 1;
            v
        }
    }

    #[test]
    fn trivial_codes_are_rejected() {
        assert!(!is_valid("00000000"));
        assert!(!is_valid("12345678"));
        assert!(!is_valid("87654321"));
        assert!(!is_valid("12121212"));
        assert!(!is_valid("99999999"));
        assert!(!is_valid("23456789"));
        assert!(!is_valid("98765432"));
        assert!(!is_valid("343-43-434"));
    }

    #[test]
    fn ordinary_codes_are_valid() {
        assert!(is_valid("61380755"));
        assert!(is_valid("613-80-755"));
        assert!(is_valid("482-91-573"));
        // Runs that break midway are fine.
        assert!(is_valid("12345679"));
        assert!(is_valid("12121213"));
    }

    #[test]
    fn malformed_codes_are_invalid() {
        assert!(!is_valid(""));
        assert!(!is_valid("6138075"));
        assert!(!is_valid("613807555"));
        assert!(!is_valid("61380a55"));
        assert!(!is_valid("613 80 755"));
        assert!(!is_valid("６１３８０７５５"));
    }

    #[test]
    fn to_plain_only_strips_dashes() {
        assert_eq!(to_plain("613-80-755"), "61380755");
        assert_eq!(to_plain("61380755"), "61380755");
        assert_eq!(to_plain("6 1-3"), "6 13");
    }

    #[test]
    fn generator_skips_trivial_draws() {
        let source = Scripted::new(&[11_111_111, 12_345_678, 45_454_545, 61_380_755]);
        let mut generator = SetupCodeGenerator::new(source);
        let code = generator.generate().unwrap();
        assert_eq!(code.as_plain(), "61380755");
    }

    #[test]
    fn generator_gives_up_on_stuck_source() {
        let mut generator =
            SetupCodeGenerator::new(Scripted::new(&[22_222_222])).with_max_attempts(50);
        match generator.generate() {
            Err(PairingError::EntropyExhausted { attempts }) => assert_eq!(attempts, 50),
            other => panic!("expected EntropyExhausted, got {other:?}"),
        }
    }

    #[test]
    fn generator_ignores_out_of_range_values() {
        let mut generator = SetupCodeGenerator::new(Scripted::new(&[5, 100_000_000, 48_291_573]));
        assert_eq!(generator.generate().unwrap().as_plain(), "48291573");
    }

    #[test]
    fn seeded_generator_is_deterministic() {
        let a = SetupCodeGenerator::new(StdRng::seed_from_u64(7)).generate().unwrap();
        let b = SetupCodeGenerator::new(StdRng::seed_from_u64(7)).generate().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn setup_code_formats_in_groups() {
        let code: SetupCode = "61380755".parse().unwrap();
        assert_eq!(code.formatted(), "613-80-755");
        assert_eq!(code.to_string(), "613-80-755");
        assert_eq!(code.value(), 61_380_755);
    }

    #[test]
    fn setup_code_parse_checks_format_only() {
        let trivial: SetupCode = "000-00-000".parse().unwrap();
        assert!(trivial.is_too_simple());
        assert_eq!(
            "613-80-75".parse::<SetupCode>(),
            Err(ValidationError::PasswordLength(7))
        );
        assert_eq!(
            "613-8x-755".parse::<SetupCode>(),
            Err(ValidationError::PasswordFormat)
        );
    }

    #[test]
    fn is_too_simple_tolerates_odd_input() {
        assert!(!is_too_simple(""));
        assert!(is_too_simple("55"));
        assert!(!is_too_simple("1357"));
    }
}
