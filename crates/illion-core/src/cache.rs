//! Precomputed morphemes for every 3-digit group
//!
//! The cache is built once from [`compose_triple`] and never written again,
//! so any number of assembler threads can read it through a shared
//! reference. A process-wide instance is available through
//! [`TripleCache::global`]; callers that want an explicit dependency can
//! build their own and pass it to [`IllionGenerator::with_cache`].
//!
//! [`IllionGenerator::with_cache`]: crate::IllionGenerator::with_cache

use once_cell::sync::Lazy;

use crate::compose::compose_triple;

/// Number of distinct 3-digit groups, "000" through "999"
pub const TRIPLE_COUNT: usize = 1000;

/// Process-wide cache, built on first use
static GLOBAL_CACHE: Lazy<TripleCache> = Lazy::new(TripleCache::new);

/// Read-only lookup from a 3-digit group to its morpheme
#[derive(Debug, Clone)]
pub struct TripleCache {
    morphemes: Box<[String]>,
}

impl Default for TripleCache {
    fn default() -> Self {
        Self::new()
    }
}

impl TripleCache {
    /// Compose the morpheme of every group 0-999
    pub fn new() -> Self {
        let morphemes: Box<[String]> = (0..TRIPLE_COUNT)
            .map(|value| compose_triple(&triple_key(value)))
            .collect();

        tracing::debug!(entries = morphemes.len(), "Triple cache built");
        Self { morphemes }
    }

    /// The shared process-wide cache
    pub fn global() -> &'static TripleCache {
        &GLOBAL_CACHE
    }

    /// Look up the morpheme for a 3-byte digit group.
    ///
    /// Anything that is not exactly three ASCII digits maps to the empty
    /// morpheme.
    #[inline]
    pub fn get(&self, triple: &[u8]) -> &str {
        match triple_value(triple) {
            Some(value) => &self.morphemes[value],
            None => "",
        }
    }

    /// Look up a group by its numeric value (0-999)
    pub fn get_value(&self, value: usize) -> Option<&str> {
        self.morphemes.get(value).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.morphemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.morphemes.is_empty()
    }

    /// Iterate `(value, morpheme)` pairs in ascending group order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.morphemes
            .iter()
            .enumerate()
            .map(|(value, m)| (value, m.as_str()))
    }
}

/// Zero-padded ASCII key for a group value, e.g. 7 -> "007"
pub(crate) fn triple_key(value: usize) -> [u8; 3] {
    // value < 1000, so each digit fits in a u8
    let digit = |n: usize| b'0' + (n % 10) as u8;
    [digit(value / 100), digit(value / 10), digit(value)]
}

#[inline]
fn triple_value(triple: &[u8]) -> Option<usize> {
    let &[h, t, o] = triple else {
        return None;
    };
    let digit = |b: u8| b.is_ascii_digit().then(|| usize::from(b - b'0'));
    Some(digit(h)? * 100 + digit(t)? * 10 + digit(o)?)
}
