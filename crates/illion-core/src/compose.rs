//! Triple-to-prefix composition
//!
//! Turns one group of three digits into its illion morpheme. The ones root
//! comes first, then the tens root, then the hundreds root, so "123" reads
//! "tres" + "viginti" + "centi".

use std::borrow::Cow;

use crate::tables::{prefix, short_prefix, NIL_PREFIX};

/// Compose the morpheme for a zero-padded 3-digit group.
///
/// The group must hold ASCII digits; this is only called while building the
/// triple cache.
pub fn compose_triple(triple: &[u8; 3]) -> String {
    if triple == b"000" {
        return NIL_PREFIX.to_string();
    }

    let [hundreds, tens, ones] = triple.map(|b| u32::from(b.wrapping_sub(b'0')));

    // Only the ones digit is set: million, billion, ... nonillion
    if hundreds == 0 && tens == 0 {
        return short_prefix(ones).unwrap_or_default().to_string();
    }

    let hundreds_root = (hundreds != 0).then_some(hundreds * 100);
    let tens_root = (tens != 0).then_some(tens * 10);

    // The nearest non-zero root decides the ones spelling
    let context = tens_root.or(hundreds_root);

    let mut morpheme = String::with_capacity(24);
    morpheme.push_str(&ones_prefix(ones, context));
    for value in [tens_root, hundreds_root].into_iter().flatten() {
        morpheme.push_str(prefix(value).unwrap_or_default());
    }
    morpheme
}

/// Spell the ones digit given the root that follows it.
///
/// Rules are checked in order and the first match wins:
/// "tres"/"ses" before 20-50 and 300-500, "sex" before 80, 100 and 800,
/// "septem"/"novem" before 20, 80 and 800, "septen"/"noven" before the
/// remaining tens and hundreds.
pub fn ones_prefix(digit: u32, context: Option<u32>) -> Cow<'static, str> {
    let root = match digit {
        0 => return Cow::Borrowed(""),
        d => prefix(d).unwrap_or_default(),
    };

    match (digit, context) {
        (3 | 6, Some(20 | 30 | 40 | 50 | 300 | 400 | 500)) => Cow::Owned(format!("{root}s")),
        (6, Some(80 | 100 | 800)) => Cow::Borrowed("sex"),
        (7 | 9, Some(20 | 80 | 800)) => Cow::Owned(format!("{root}m")),
        (7 | 9, Some(10 | 30 | 40 | 50 | 60 | 70 | 100 | 200 | 300 | 400 | 500 | 600 | 700)) => {
            Cow::Owned(format!("{root}n"))
        }
        _ => Cow::Borrowed(root),
    }
}
