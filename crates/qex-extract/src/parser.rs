//! Measurement Parser
//!
//! Extracts `(value, unit)` candidates from free text: a decimal number,
//! optional whitespace, then one of the catalog's unit abbreviations.
//!
//! The matcher is a small deterministic scanner seeded from the unit
//! catalog rather than an alternation regex. Unit tokens are tried
//! longest-first so multi-word units ("fl oz", "cu ft") win over their
//! suffixes, and every unit match must end on a word boundary so "min"
//! never matches "in".

use crate::catalog::UnitCatalog;

/// A `(value, unit)` pair recognized in text. Ephemeral, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeasurementCandidate {
    /// Decimal value, kept verbatim as it appeared in the text.
    pub value: String,
    /// Matched unit abbreviation, lower-cased.
    pub unit: String,
}

/// Scanner for measurement candidates, seeded from a [`UnitCatalog`].
#[derive(Debug, Clone)]
pub struct MeasurementParser {
    /// Global abbreviation set, longest token first.
    units: Vec<&'static str>,
}

impl MeasurementParser {
    pub fn new(catalog: &UnitCatalog) -> Self {
        let mut units = catalog.global_abbreviations();
        // Longest-first keeps "fl oz" ahead of "oz" and "cu ft" ahead of
        // "ft"; the sort is stable so same-length tokens keep catalog order.
        units.sort_by_key(|u| std::cmp::Reverse(u.chars().count()));
        Self { units }
    }

    /// All measurement candidates in `text`, left to right, no dedup.
    ///
    /// An empty result is normal, not an error. Matching is
    /// case-insensitive; the input is lower-cased before scanning.
    pub fn parse(&self, text: &str) -> Vec<MeasurementCandidate> {
        let lower = text.to_lowercase();
        let chars: Vec<(usize, char)> = lower.char_indices().collect();
        let mut candidates = Vec::new();

        let mut i = 0;
        while i < chars.len() {
            if !starts_number(&chars, i) {
                i += 1;
                continue;
            }

            // Digits, then an optional fraction using '.' as separator.
            let mut j = i + 1;
            while j < chars.len() && chars[j].1.is_ascii_digit() {
                j += 1;
            }
            if j + 1 < chars.len() && chars[j].1 == '.' && chars[j + 1].1.is_ascii_digit() {
                j += 2;
                while j < chars.len() && chars[j].1.is_ascii_digit() {
                    j += 1;
                }
            }
            let value = slice(&lower, &chars, i, j);

            // Optional whitespace between the number and its unit.
            let mut k = j;
            while k < chars.len() && chars[k].1.is_whitespace() {
                k += 1;
            }

            match self.match_unit(&chars, k) {
                Some(unit) => {
                    candidates.push(MeasurementCandidate {
                        value: value.to_string(),
                        unit: unit.to_string(),
                    });
                    // Resume after the unit token (non-overlapping matches).
                    i = k + unit.chars().count();
                }
                None => {
                    i = j;
                }
            }
        }

        candidates
    }

    /// The unit token starting exactly at `chars[start]`, if any.
    ///
    /// A match must be followed by a word boundary so a unit never matches
    /// inside a longer word.
    fn match_unit(&self, chars: &[(usize, char)], start: usize) -> Option<&'static str> {
        for unit in &self.units {
            let len = unit.chars().count();
            if start + len > chars.len() {
                continue;
            }
            let matches = unit
                .chars()
                .zip(&chars[start..start + len])
                .all(|(expect, (_, got))| expect == *got);
            if !matches {
                continue;
            }
            let end = start + len;
            if end < chars.len() && is_word_char(chars[end].1) {
                continue;
            }
            return Some(unit);
        }
        None
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric()
}

/// A number may start at `i` only on a word boundary; "a12" is not a value.
fn starts_number(chars: &[(usize, char)], i: usize) -> bool {
    chars[i].1.is_ascii_digit() && (i == 0 || !is_word_char(chars[i - 1].1))
}

fn slice<'a>(text: &'a str, chars: &[(usize, char)], from: usize, to: usize) -> &'a str {
    let start = chars[from].0;
    let end = if to < chars.len() {
        chars[to].0
    } else {
        text.len()
    };
    &text[start..end]
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn parser() -> MeasurementParser {
        MeasurementParser::new(&UnitCatalog::new())
    }

    fn pairs(text: &str) -> Vec<(String, String)> {
        parser()
            .parse(text)
            .into_iter()
            .map(|c| (c.value, c.unit))
            .collect()
    }

    #[test]
    fn test_simple_measurement() {
        assert_eq!(pairs("12.5 cm"), vec![("12.5".into(), "cm".into())]);
    }

    #[test]
    fn test_no_whitespace_between_value_and_unit() {
        assert_eq!(pairs("230v"), vec![("230".into(), "v".into())]);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(pairs("12.5 CM"), vec![("12.5".into(), "cm".into())]);
    }

    #[test]
    fn test_multi_word_unit_is_atomic() {
        assert_eq!(pairs("2.5 cu ft"), vec![("2.5".into(), "cu ft".into())]);
        assert_eq!(pairs("8 fl oz"), vec![("8".into(), "fl oz".into())]);
    }

    #[test]
    fn test_word_boundary_on_unit() {
        // "min" must not match "m" or "in"
        assert!(pairs("5 min").is_empty());
        // "inch" written out is not the "in" abbreviation
        assert!(pairs("5 inches").is_empty());
    }

    #[test]
    fn test_number_needs_word_boundary() {
        assert!(pairs("a12cm").is_empty());
    }

    #[test]
    fn test_all_matches_in_order_no_dedup() {
        assert_eq!(
            pairs("3 cm 10 cm 3 cm"),
            vec![
                ("3".into(), "cm".into()),
                ("10".into(), "cm".into()),
                ("3".into(), "cm".into()),
            ]
        );
    }

    #[test]
    fn test_mixed_entities_all_returned() {
        assert_eq!(
            pairs("5 oz 2 l"),
            vec![("5".into(), "oz".into()), ("2".into(), "l".into())]
        );
    }

    #[test]
    fn test_no_unit_text_is_empty() {
        assert!(pairs("very light and compact").is_empty());
    }

    #[test]
    fn test_number_without_unit_skipped() {
        assert_eq!(pairs("pack of 6, 2 kg"), vec![("2".into(), "kg".into())]);
    }

    #[test]
    fn test_trailing_dot_breaks_the_match() {
        // the dot is neither part of the value nor whitespace, so no
        // candidate is produced
        assert!(pairs("5. kg").is_empty());
        // a real fraction still works
        assert_eq!(pairs("5.0 kg"), vec![("5.0".into(), "kg".into())]);
    }

    #[test]
    fn test_non_ascii_unit() {
        assert_eq!(pairs("250 µg"), vec![("250".into(), "µg".into())]);
    }

    #[test]
    fn test_unit_at_end_of_input() {
        assert_eq!(pairs("weight 2 kg"), vec![("2".into(), "kg".into())]);
    }
}
