use crate::cache::TripleCache;

/// Rough average morpheme length, used to pre-size output buffers
pub(crate) const MORPHEME_LEN_HINT: usize = 16;

/// Concatenate the cached morpheme of every triple, most significant first.
///
/// `padded` should already be a multiple of 3 long; a trailing partial
/// triple is skipped.
pub fn assemble_sequential(cache: &TripleCache, padded: &str) -> String {
    let digits = padded.as_bytes();
    if digits.len() % 3 != 0 {
        tracing::warn!(
            len = digits.len(),
            "Digit string is not padded to whole triples, ignoring trailing digits"
        );
    }

    let mut out = String::with_capacity(digits.len() / 3 * MORPHEME_LEN_HINT);
    write_triples(cache, digits, &mut out);
    out
}

/// Append the morphemes for `digits` onto `out` in triple order
#[inline]
pub(crate) fn write_triples(cache: &TripleCache, digits: &[u8], out: &mut String) {
    for triple in digits.chunks_exact(3) {
        out.push_str(cache.get(triple));
    }
}
