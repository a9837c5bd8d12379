//! Illion Core - short-scale "-illion" names for huge illion indices
//!
//! This library provides:
//! - Latin prefix tables and the euphony rules for composing them
//! - A precomputed cache of all 1000 triple morphemes
//! - Sequential and chunked parallel assembly of morpheme streams
//! - The "-illion" suffix with vowel elision
//!
//! The input is the illion index as decimal digits: 1 -> "million",
//! 10 -> "decillion", 24 -> "quattuorvigintillion".

pub mod assemble;
pub mod cache;
pub mod compose;
pub mod config;
pub mod error;
pub mod normalize;
pub mod suffix;
pub mod tables;

mod generator;

pub use assemble::{AssemblyMode, ChunkLadder, ChunkPlan, ChunkStep};
pub use cache::TripleCache;
pub use config::{env_vars, GeneratorConfig};
pub use error::{ConfigError, IllionError};
pub use generator::IllionGenerator;

use num_bigint::BigUint;

/// Build the process-wide triple cache now instead of on first use
pub fn init() {
    let cache = TripleCache::global();
    tracing::debug!(entries = cache.len(), "Illion cache ready");
}

/// Name the illion at index `digits`.
///
/// This is the main entry point. `parallel` selects chunked assembly on the
/// rayon pool; the output is identical either way. Empty input gives an
/// empty name. Non-digit input is not checked (see [`try_illion_name`]).
pub fn illion_name(digits: &str, parallel: bool) -> String {
    IllionGenerator::default().name_with_mode(digits, AssemblyMode::from_flag(parallel))
}

/// [`illion_name`] for an arbitrary-precision index
pub fn illion_name_bigint(n: &BigUint, parallel: bool) -> String {
    illion_name(&n.to_str_radix(10), parallel)
}

/// [`illion_name`] with digit validation
pub fn try_illion_name(digits: &str, parallel: bool) -> Result<String, IllionError> {
    normalize::validate_digits(digits)?;
    Ok(illion_name(digits, parallel))
}

/// Name the power of ten 10^`exponent`, e.g. 27 -> "octillion".
///
/// Returns `None` unless the exponent is a multiple of 3 and at least 6.
pub fn illion_name_for_power_of_ten(exponent: &BigUint) -> Option<String> {
    if *exponent < BigUint::from(6u32) || exponent % 3u32 != BigUint::from(0u32) {
        return None;
    }
    let index = exponent / 3u32 - 1u32;
    Some(IllionGenerator::default().name_bigint(&index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_illion_name_examples() {
        assert_eq!(illion_name("1", false), "million");
        assert_eq!(illion_name("10", false), "decillion");
        assert_eq!(illion_name("24", true), "quattuorvigintillion");
        assert_eq!(illion_name("", true), "");
    }

    #[test]
    fn test_illion_name_bigint() {
        assert_eq!(illion_name_bigint(&BigUint::from(10u32), true), "decillion");
        assert_eq!(
            illion_name_bigint(&BigUint::from(1_000_000u32), false),
            illion_name("1000000", false)
        );
    }

    #[test]
    fn test_try_illion_name() {
        assert_eq!(try_illion_name("3", false), Ok("trillion".to_string()));
        assert!(try_illion_name("-3", false).is_err());
    }

    #[test]
    fn test_power_of_ten() {
        let name = |e: u32| illion_name_for_power_of_ten(&BigUint::from(e));
        assert_eq!(name(6).as_deref(), Some("million"));
        assert_eq!(name(27).as_deref(), Some("octillion"));
        assert_eq!(name(33).as_deref(), Some("decillion"));
        assert_eq!(name(75).as_deref(), Some("quattuorvigintillion"));
        assert_eq!(name(3), None);
        assert_eq!(name(28), None);
        assert_eq!(name(0), None);
    }

    #[test]
    fn test_fifty_thousand_digits_paths_agree() {
        init();
        let mut rng = StdRng::seed_from_u64(24);
        let digits: String = (0..50_000)
            .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
            .collect();

        let sequential = illion_name(&digits, false);
        let parallel = illion_name(&digits, true);
        assert_eq!(sequential, parallel);
        assert!(sequential.ends_with("illion"));
    }
}
