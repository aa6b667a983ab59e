use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Player, BOARD_COLS};

/// A single algebraic term, e.g. `-3x^2`, `x` or `4`.
///
/// The coefficient is never zero; a zero term would contribute nothing to
/// any equation and has no representation in the piece tables.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Term {
    pub coefficient: i32,
    pub degree: Degree,
}

/// The degree of a [term](Term).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Degree {
    Constant,
    Linear,
    Quadratic,
}

impl Degree {
    /// Maximum step distance (Chebyshev) for a piece of this degree.
    pub fn step_range(self) -> i8 {
        match self {
            Degree::Quadratic => 3,
            Degree::Linear => 2,
            Degree::Constant => 1,
        }
    }
}

impl std::fmt::Display for Degree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Degree::Constant => "constant",
            Degree::Linear => "linear",
            Degree::Quadratic => "quadratic",
        };
        write!(f, "{}", name)
    }
}

impl std::fmt::Display for Term {
    /// The canonical ASCII label, e.g. `-4x^2`, `-x`, `3`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.degree {
            Degree::Constant => write!(f, "{}", self.coefficient),
            Degree::Linear | Degree::Quadratic => {
                match self.coefficient {
                    1 => {}
                    -1 => write!(f, "-")?,
                    c => write!(f, "{}", c)?,
                }
                write!(f, "x")?;
                if self.degree == Degree::Quadratic {
                    write!(f, "^2")?;
                }
                Ok(())
            }
        }
    }
}

// !!!!!! NOTE: Keep the parser in sync with the Display impl !!!!!!
impl Term {
    /// The display form: typographic minus and superscript two.
    pub fn pretty(&self) -> String {
        self.to_string().replace('-', "\u{2212}").replace("^2", "²")
    }
}

/// The error type for the [`FromStr`] instance of [`Term`].
///
/// In normal play every label comes out of the fixed slot table, so hitting
/// one of these means the table itself is corrupted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TermFromStrErr {
    Empty,
    InvalidCoefficient,
    ZeroCoefficient,
}

impl FromStr for Term {
    type Err = TermFromStrErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        if label.is_empty() {
            return Err(TermFromStrErr::Empty);
        }
        let (head, degree) = if let Some(head) = label.strip_suffix("x^2") {
            (head, Degree::Quadratic)
        } else if let Some(head) = label.strip_suffix('x') {
            (head, Degree::Linear)
        } else {
            (label.as_str(), Degree::Constant)
        };
        let coefficient = match (head, degree) {
            // A bare variable marker means a coefficient of ±1
            ("" | "+", Degree::Linear | Degree::Quadratic) => 1,
            ("-", Degree::Linear | Degree::Quadratic) => -1,
            _ => head
                .parse::<i32>()
                .map_err(|_| TermFromStrErr::InvalidCoefficient)?,
        };
        if coefficient == 0 {
            return Err(TermFromStrErr::ZeroCoefficient);
        }
        Ok(Term {
            coefficient,
            degree,
        })
    }
}

/// Shorthand for creating terms from their canonical label.
///
/// ```
/// # use quadwar::{term, Degree, Term};
/// assert_eq!(
///     term!("-3x^2"),
///     Term { coefficient: -3, degree: Degree::Quadratic }
/// );
/// ```
#[macro_export]
macro_rules! term {
    ($label:literal) => {
        <$crate::Term as std::str::FromStr>::from_str($label)
            .expect("Invalid term label given to term! macro")
    };
}
// The import is for using the macro in other modules, see https://stackoverflow.com/a/31749071/1726797
#[allow(unused_imports)]
pub(crate) use term;

/// The coefficient row shared by all three tiers, in Blue's column order.
pub static SLOT_COEFFICIENTS: [i32; 8] = [-4, -3, -2, -1, 1, 2, 3, 4];

/// The term a freshly set up piece carries, keyed by side, tier degree and
/// column.
///
/// The coefficient row is reversed for Red so that the two formations are
/// mirror images of each other across the board's vertical axis.
pub fn term_for_slot(player: Player, degree: Degree, col: i8) -> Term {
    let idx = match player {
        Player::Red => BOARD_COLS - 1 - col,
        Player::Blue => col,
    };
    Term {
        coefficient: SLOT_COEFFICIENTS[idx as usize],
        degree,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_quadratics() {
        assert_eq!(
            "-4x^2".parse(),
            Ok(Term {
                coefficient: -4,
                degree: Degree::Quadratic
            })
        );
        assert_eq!(
            "x^2".parse(),
            Ok(Term {
                coefficient: 1,
                degree: Degree::Quadratic
            })
        );
        assert_eq!(
            "-x^2".parse(),
            Ok(Term {
                coefficient: -1,
                degree: Degree::Quadratic
            })
        );
    }

    #[test]
    fn parse_linears_and_constants() {
        assert_eq!(term!("x"), Term { coefficient: 1, degree: Degree::Linear });
        assert_eq!(term!("-x"), Term { coefficient: -1, degree: Degree::Linear });
        assert_eq!(term!("+3x"), Term { coefficient: 3, degree: Degree::Linear });
        assert_eq!(term!("4"), Term { coefficient: 4, degree: Degree::Constant });
        assert_eq!(term!("-1"), Term { coefficient: -1, degree: Degree::Constant });
    }

    #[test]
    fn parse_rejects_malformed_labels() {
        assert_eq!("".parse::<Term>(), Err(TermFromStrErr::Empty));
        assert_eq!("0".parse::<Term>(), Err(TermFromStrErr::ZeroCoefficient));
        assert_eq!("0x".parse::<Term>(), Err(TermFromStrErr::ZeroCoefficient));
        assert_eq!("abx".parse::<Term>(), Err(TermFromStrErr::InvalidCoefficient));
        assert_eq!("x^3".parse::<Term>(), Err(TermFromStrErr::InvalidCoefficient));
    }

    #[test]
    fn display_roundtrips_the_slot_tables() {
        for degree in [Degree::Quadratic, Degree::Linear, Degree::Constant] {
            for col in 0..BOARD_COLS {
                for player in [Player::Red, Player::Blue] {
                    let t = term_for_slot(player, degree, col);
                    assert_eq!(t.to_string().parse(), Ok(t));
                }
            }
        }
    }

    #[test]
    fn pretty_substitutes_glyphs() {
        assert_eq!(term!("-4x^2").pretty(), "\u{2212}4x²");
        assert_eq!(term!("3x").pretty(), "3x");
        assert_eq!(term!("-2").pretty(), "\u{2212}2");
    }

    #[test]
    fn slot_tables_are_mirrored() {
        for col in 0..BOARD_COLS {
            assert_eq!(
                term_for_slot(Player::Red, Degree::Linear, col),
                term_for_slot(Player::Blue, Degree::Linear, BOARD_COLS - 1 - col),
            );
        }
        // Leftmost blue quadratic is -4x^2, leftmost red quadratic is 4x^2
        assert_eq!(term_for_slot(Player::Blue, Degree::Quadratic, 0), term!("-4x^2"));
        assert_eq!(term_for_slot(Player::Red, Degree::Quadratic, 0), term!("4x^2"));
    }
}
