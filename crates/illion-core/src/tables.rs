//! Latin roots for illion prefixes
//!
//! Two fixed tables: the main table keyed by digit value (ones, tens and
//! hundreds), and the short table holding the base illion roots used when a
//! group only carries a ones digit.

/// Morpheme for a group whose three digits are all zero
pub const NIL_PREFIX: &str = "nilli";

const PREFIXES: &[(u32, &str)] = &[
    (0, NIL_PREFIX),
    (1, "un"),
    (2, "duo"),
    (3, "tre"),
    (4, "quattuor"),
    (5, "quinqua"),
    (6, "se"),
    (7, "septe"),
    (8, "octo"),
    (9, "nove"),
    (10, "deci"),
    (20, "viginti"),
    (30, "triginta"),
    (40, "quadraginta"),
    (50, "quinquaginta"),
    (60, "sexaginta"),
    (70, "septuaginta"),
    (80, "octoginta"),
    (90, "nonaginta"),
    (100, "centi"),
    (200, "ducenti"),
    (300, "trecenti"),
    (400, "quadringenti"),
    (500, "quingenti"),
    (600, "sescenti"),
    (700, "septingenti"),
    (800, "octingenti"),
    (900, "nongenti"),
];

const SHORT_PREFIXES: &[(u32, &str)] = &[
    (1, "milli"),
    (2, "billi"),
    (3, "trilli"),
    (4, "quadrilli"),
    (5, "quintilli"),
    (6, "sextilli"),
    (7, "septilli"),
    (8, "octilli"),
    (9, "nonilli"),
    (10, "decilli"),
];

/// Main table lookup: 0-9, the tens 10-90 and the hundreds 100-900
pub fn prefix(value: u32) -> Option<&'static str> {
    PREFIXES.iter().find(|(v, _)| *v == value).map(|(_, p)| *p)
}

/// Short table lookup: the direct illion roots for 1-10
pub fn short_prefix(value: u32) -> Option<&'static str> {
    SHORT_PREFIXES
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, p)| *p)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_ones() {
        assert_eq!(prefix(0), Some("nilli"));
        assert_eq!(prefix(4), Some("quattuor"));
        assert_eq!(prefix(9), Some("nove"));
    }

    #[test]
    fn test_prefix_tens_and_hundreds() {
        assert_eq!(prefix(10), Some("deci"));
        assert_eq!(prefix(90), Some("nonaginta"));
        assert_eq!(prefix(600), Some("sescenti"));
        assert_eq!(prefix(900), Some("nongenti"));
    }

    #[test]
    fn test_prefix_missing_keys() {
        assert_eq!(prefix(11), None);
        assert_eq!(prefix(1000), None);
    }

    #[test]
    fn test_short_prefix() {
        assert_eq!(short_prefix(1), Some("milli"));
        assert_eq!(short_prefix(10), Some("decilli"));
        assert_eq!(short_prefix(0), None);
        assert_eq!(short_prefix(11), None);
    }

    #[test]
    fn test_main_table_covers_every_digit_position() {
        for digit in 1..=9 {
            assert!(prefix(digit).is_some());
            assert!(prefix(digit * 10).is_some());
            assert!(prefix(digit * 100).is_some());
        }
    }
}
