//! English number lexicon and group spelling.
//!
//! The tables here are the whole vocabulary the formatter uses. Spelling is
//! split into three-digit groups, each tagged with a scale word.

/// Words for 0 through 9. Index 0 is never spoken.
pub(crate) const ONES: [&str; 10] = [
    "", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// Words for 10 through 19, indexed by `n - 10`.
pub(crate) const TEENS: [&str; 10] = [
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

/// Words for multiples of ten, indexed by the tens digit. Indices 0 and 1 are unused.
pub(crate) const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Scale words, least significant group first.
pub(crate) const SCALES: [&str; 4] = ["", "thousand", "million", "billion"];

/// Base of a digit group.
pub(crate) const GROUP_BASE: u64 = 1_000;

/// First integer that no longer fits in [`SCALES`].
pub(crate) const LIMIT: u64 = 1_000_000_000_000;

/// Spell a single group in `0..=999`.
///
/// Zero spells as the empty string.
pub(crate) fn spell_hundreds(n: usize) -> String {
    debug_assert!(n < 1_000, "group out of range: {n}");

    let mut result = String::new();
    let mut rest = n;

    if rest > 99 {
        result.push_str(ONES[rest / 100]);
        result.push_str(" hundred");
        rest %= 100;
        if rest > 0 {
            result.push_str(" and ");
        }
    }

    match rest {
        20.. => {
            result.push_str(TENS[rest / 10]);
            if rest % 10 > 0 {
                result.push('-');
                result.push_str(ONES[rest % 10]);
            }
        }
        10..=19 => result.push_str(TEENS[rest - 10]),
        1..=9 => result.push_str(ONES[rest]),
        _ => {}
    }

    result
}

/// Spell a non-negative integer as comma-joined groups.
///
/// Returns `None` when the value needs a scale beyond [`SCALES`], and an
/// empty string for zero.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn spell_integer(n: u64) -> Option<String> {
    if n >= LIMIT {
        return None;
    }

    let mut parts = Vec::with_capacity(SCALES.len());
    let mut remaining = n;

    for scale in SCALES {
        if remaining == 0 {
            break;
        }
        // always < 1000
        let group = (remaining % GROUP_BASE) as usize;
        remaining /= GROUP_BASE;

        if group > 0 {
            let mut section = spell_hundreds(group);
            if !scale.is_empty() {
                section.push(' ');
                section.push_str(scale);
            }
            parts.push(section);
        }
    }

    parts.reverse();
    Some(parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_matches_scale_table() {
        let groups = u32::try_from(SCALES.len()).unwrap();
        assert_eq!(LIMIT, GROUP_BASE.pow(groups));
    }

    #[test]
    fn test_spell_hundreds_zero_is_empty() {
        assert_eq!(spell_hundreds(0), "");
    }

    #[test]
    fn test_spell_hundreds_units_and_teens() {
        assert_eq!(spell_hundreds(7), "seven");
        assert_eq!(spell_hundreds(10), "ten");
        assert_eq!(spell_hundreds(15), "fifteen");
        assert_eq!(spell_hundreds(19), "nineteen");
    }

    #[test]
    fn test_spell_hundreds_tens() {
        assert_eq!(spell_hundreds(20), "twenty");
        assert_eq!(spell_hundreds(42), "forty-two");
        assert_eq!(spell_hundreds(99), "ninety-nine");
    }

    #[test]
    fn test_spell_hundreds_with_and() {
        assert_eq!(spell_hundreds(100), "one hundred");
        assert_eq!(spell_hundreds(101), "one hundred and one");
        assert_eq!(spell_hundreds(115), "one hundred and fifteen");
        assert_eq!(spell_hundreds(123), "one hundred and twenty-three");
        assert_eq!(spell_hundreds(999), "nine hundred and ninety-nine");
    }

    #[test]
    fn test_spell_integer_zero_is_empty() {
        assert_eq!(spell_integer(0).as_deref(), Some(""));
    }

    #[test]
    fn test_spell_integer_skips_empty_groups() {
        assert_eq!(spell_integer(1_000_001).as_deref(), Some("one million, one"));
        assert_eq!(
            spell_integer(2_000_300_000).as_deref(),
            Some("two billion, three hundred thousand")
        );
    }

    #[test]
    fn test_spell_integer_largest_supported() {
        let words = spell_integer(LIMIT - 1).unwrap();
        assert!(words.starts_with("nine hundred and ninety-nine billion"));
        assert!(words.ends_with("nine hundred and ninety-nine"));
    }

    #[test]
    fn test_spell_integer_beyond_table() {
        assert!(spell_integer(LIMIT).is_none());
        assert!(spell_integer(u64::MAX).is_none());
    }
}
