//! Symbol alphabets: how ordinal symbols are rendered as text.

use std::fmt;
use std::str::FromStr;

use crate::error::SaxError;

/// Largest cardinality the letter alphabet can render.
pub const MAX_LETTER_CARDINALITY: usize = 26;

/// Text rendering of SAX symbols. Purely cosmetic: distances only ever look at
/// a symbol's ordinal position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Representation {
    /// Zero-padded binary strings of width `ceil(log2(c))`.
    Binary,
    /// Lowercase Latin letters `a..`, at most 26 symbols.
    #[default]
    Letter,
    /// Decimal strings `0..c`.
    Integer,
}

impl Representation {
    /// Return the representation actually used for `cardinality`.
    ///
    /// `Letter` falls back to `Binary` above 26 symbols; everything else is
    /// returned unchanged.
    #[must_use]
    pub fn effective(self, cardinality: usize) -> Self {
        match self {
            Self::Letter if cardinality > MAX_LETTER_CARDINALITY => Self::Binary,
            other => other,
        }
    }

    /// Render ordinal `index` under this representation for an alphabet of `cardinality`.
    pub(crate) fn label(self, index: usize, cardinality: usize) -> String {
        match self {
            Self::Binary => {
                let width = binary_width(cardinality);
                format!("{index:0>width$b}")
            }
            Self::Letter => char::from(b'a' + index as u8).to_string(),
            Self::Integer => index.to_string(),
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Binary => f.write_str("binary"),
            Self::Letter => f.write_str("letter"),
            Self::Integer => f.write_str("integer"),
        }
    }
}

impl FromStr for Representation {
    type Err = SaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "binary" => Ok(Self::Binary),
            "letter" => Ok(Self::Letter),
            "integer" => Ok(Self::Integer),
            other => Err(SaxError::UnknownRepresentation {
                tag: other.to_string(),
            }),
        }
    }
}

/// `ceil(log2(cardinality))` for `cardinality >= 2`.
fn binary_width(cardinality: usize) -> usize {
    (usize::BITS - (cardinality - 1).leading_zeros()) as usize
}

/// Generate the `cardinality` symbol labels of an alphabet in ascending ordinal order.
///
/// No fallback happens here: asking for more than 26 letters is an error.
/// Use [`Representation::effective`] first to get the discretizer's behavior.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`SaxError::InvalidCardinality`] | `cardinality < 2` |
/// | [`SaxError::LetterCardinality`] | [`Representation::Letter`] and `cardinality > 26` |
pub fn symbols(cardinality: usize, representation: Representation) -> Result<Vec<String>, SaxError> {
    if cardinality < 2 {
        return Err(SaxError::InvalidCardinality { cardinality });
    }
    if representation == Representation::Letter && cardinality > MAX_LETTER_CARDINALITY {
        return Err(SaxError::LetterCardinality { cardinality });
    }
    Ok((0..cardinality)
        .map(|i| representation.label(i, cardinality))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_is_zero_padded() {
        assert_eq!(
            symbols(4, Representation::Binary).unwrap(),
            vec!["00", "01", "10", "11"]
        );
        assert_eq!(symbols(5, Representation::Binary).unwrap()[1], "001");
        assert_eq!(symbols(2, Representation::Binary).unwrap(), vec!["0", "1"]);
    }

    #[test]
    fn binary_width_is_ceil_log2() {
        assert_eq!(binary_width(2), 1);
        assert_eq!(binary_width(3), 2);
        assert_eq!(binary_width(4), 2);
        assert_eq!(binary_width(5), 3);
        assert_eq!(binary_width(256), 8);
        assert_eq!(binary_width(257), 9);
    }

    #[test]
    fn letters_in_order() {
        assert_eq!(
            symbols(3, Representation::Letter).unwrap(),
            vec!["a", "b", "c"]
        );
        assert_eq!(symbols(26, Representation::Letter).unwrap()[25], "z");
    }

    #[test]
    fn integers_in_order() {
        let labels = symbols(12, Representation::Integer).unwrap();
        assert_eq!(labels[0], "0");
        assert_eq!(labels[11], "11");
    }

    #[test]
    fn labels_distinct_and_ordered() {
        for repr in [Representation::Binary, Representation::Letter, Representation::Integer] {
            for c in 2..=26 {
                let labels = symbols(c, repr).unwrap();
                assert_eq!(labels.len(), c);
                let mut unique = labels.clone();
                unique.sort();
                unique.dedup();
                assert_eq!(unique.len(), c, "{repr} c = {c} has duplicates");
                if repr != Representation::Integer {
                    assert!(labels.windows(2).all(|p| p[0] < p[1]), "{repr} c = {c}");
                }
            }
        }
    }

    #[test]
    fn letter_cardinality_ceiling() {
        assert!(matches!(
            symbols(27, Representation::Letter),
            Err(SaxError::LetterCardinality { cardinality: 27 })
        ));
        assert_eq!(Representation::Letter.effective(27), Representation::Binary);
        assert_eq!(Representation::Letter.effective(26), Representation::Letter);
        assert_eq!(Representation::Integer.effective(500), Representation::Integer);
    }

    #[test]
    fn rejects_small_cardinality() {
        assert!(matches!(
            symbols(1, Representation::Integer),
            Err(SaxError::InvalidCardinality { cardinality: 1 })
        ));
    }

    #[test]
    fn parse_tags() {
        assert_eq!("binary".parse::<Representation>().unwrap(), Representation::Binary);
        assert_eq!("letter".parse::<Representation>().unwrap(), Representation::Letter);
        assert_eq!("integer".parse::<Representation>().unwrap(), Representation::Integer);
        assert!(matches!(
            "roman".parse::<Representation>(),
            Err(SaxError::UnknownRepresentation { tag }) if tag == "roman"
        ));
    }
}
