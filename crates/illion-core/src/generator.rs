//! Normalizer → assembler → suffix, with an explicit cache and config

use num_bigint::BigUint;

use crate::assemble::{assemble_parallel, assemble_sequential, AssemblyMode};
use crate::cache::TripleCache;
use crate::config::GeneratorConfig;
use crate::error::IllionError;
use crate::normalize::{pad_to_multiple_of_3, validate_digits};
use crate::suffix::finalize;

/// Illion name generator bound to a triple cache
#[derive(Debug, Clone)]
pub struct IllionGenerator<'c> {
    cache: &'c TripleCache,
    config: GeneratorConfig,
}

impl Default for IllionGenerator<'static> {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

impl IllionGenerator<'static> {
    /// Generator over the process-wide cache
    pub fn new(config: GeneratorConfig) -> Self {
        Self::with_cache(TripleCache::global(), config)
    }
}

impl<'c> IllionGenerator<'c> {
    pub fn with_cache(cache: &'c TripleCache, config: GeneratorConfig) -> Self {
        Self { cache, config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn cache(&self) -> &'c TripleCache {
        self.cache
    }

    /// Name the illion at index `digits` using the configured mode.
    ///
    /// `digits` must be decimal digits only; use [`Self::try_name`] for
    /// unvalidated input.
    pub fn name(&self, digits: &str) -> String {
        self.name_with_mode(digits, self.config.default_mode)
    }

    /// Name the illion at index `digits` with an explicit assembly mode
    pub fn name_with_mode(&self, digits: &str, mode: AssemblyMode) -> String {
        if digits.is_empty() {
            return String::new();
        }

        let padded = pad_to_multiple_of_3(digits);
        let parallel = mode.is_parallel_for(padded.len(), self.config.auto_parallel_min_len);

        let stream = if parallel {
            assemble_parallel(self.cache, &padded, &self.config.ladder)
        } else {
            assemble_sequential(self.cache, &padded)
        };
        finalize(stream)
    }

    /// Name the illion at index `n`
    pub fn name_bigint(&self, n: &BigUint) -> String {
        self.name(&n.to_str_radix(10))
    }

    /// Like [`Self::name`], but rejects anything that is not a decimal digit
    pub fn try_name(&self, digits: &str) -> Result<String, IllionError> {
        validate_digits(digits)?;
        Ok(self.name(digits))
    }
}
