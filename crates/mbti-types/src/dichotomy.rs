//! Dichotomy letters and their complements.
//!
//! An MBTI code picks one letter from each of four fixed pairs, and every
//! cognitive function carries one of two orientations. All five pairs are
//! modelled as two-variant enums implementing [`Dichotomy`], so the complement
//! of a letter is a direct lookup rather than arithmetic over a letter list.
//!
//! | Pair | Letters |
//! |------|---------|
//! | [`Attitude`] | `E` / `I` |
//! | [`Perception`] | `S` / `N` |
//! | [`Judgment`] | `F` / `T` |
//! | [`Lifestyle`] | `J` / `P` |
//! | [`Orientation`] | `i` / `e` |

use std::fmt;

/// A fixed pair of opposed letters.
pub trait Dichotomy: Copy + Eq + Sized + 'static {
    /// Both letters of the pair, in canonical case and order.
    const LETTERS: [char; 2];

    /// The letter for this value, in canonical case.
    fn letter(self) -> char;

    /// Parse a letter, ignoring ASCII case.
    fn from_letter(c: char) -> Option<Self>;

    /// The other member of the pair.
    fn opposite(self) -> Self;
}

macro_rules! dichotomy {
    (
        $(#[$meta:meta])*
        $name:ident { $first:ident = $a:literal, $second:ident = $b:literal }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $first,
            $second,
        }

        impl Dichotomy for $name {
            const LETTERS: [char; 2] = [$a, $b];

            fn letter(self) -> char {
                match self {
                    $name::$first => $a,
                    $name::$second => $b,
                }
            }

            fn from_letter(c: char) -> Option<Self> {
                if c.eq_ignore_ascii_case(&$a) {
                    Some($name::$first)
                } else if c.eq_ignore_ascii_case(&$b) {
                    Some($name::$second)
                } else {
                    None
                }
            }

            fn opposite(self) -> Self {
                match self {
                    $name::$first => $name::$second,
                    $name::$second => $name::$first,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.letter())
            }
        }
    };
}

dichotomy! {
    /// Where a type directs its dominant function: outward (E) or inward (I).
    Attitude { Extraversion = 'E', Introversion = 'I' }
}

dichotomy! {
    /// The perceiving letter of a type.
    Perception { Sensing = 'S', Intuition = 'N' }
}

dichotomy! {
    /// The judging letter of a type.
    Judgment { Feeling = 'F', Thinking = 'T' }
}

dichotomy! {
    /// Which function a type shows to the outer world: judging (J) or perceiving (P).
    Lifestyle { Judging = 'J', Perceiving = 'P' }
}

dichotomy! {
    /// Orientation of a single cognitive function.
    Orientation { Introverted = 'i', Extraverted = 'e' }
}

impl From<Orientation> for Attitude {
    fn from(orientation: Orientation) -> Self {
        match orientation {
            Orientation::Extraverted => Attitude::Extraversion,
            Orientation::Introverted => Attitude::Introversion,
        }
    }
}

impl From<Attitude> for Orientation {
    fn from(attitude: Attitude) -> Self {
        match attitude {
            Attitude::Extraversion => Orientation::Extraverted,
            Attitude::Introversion => Orientation::Introverted,
        }
    }
}

/// The kind letter of a cognitive function.
///
/// Sensing and Intuition sit on the perceiving axis; Feeling and Thinking on
/// the judging axis. Variant order is the canonical `S N F T` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Kind {
    Sensing,
    Intuition,
    Feeling,
    Thinking,
}

impl Kind {
    /// Every kind, once, in canonical order.
    pub const ALL: [Kind; 4] = [Kind::Sensing, Kind::Intuition, Kind::Feeling, Kind::Thinking];

    pub fn letter(self) -> char {
        match self {
            Kind::Sensing => 'S',
            Kind::Intuition => 'N',
            Kind::Feeling => 'F',
            Kind::Thinking => 'T',
        }
    }

    /// Parse a kind letter, ignoring ASCII case.
    pub fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'S' => Some(Kind::Sensing),
            'N' => Some(Kind::Intuition),
            'F' => Some(Kind::Feeling),
            'T' => Some(Kind::Thinking),
            _ => None,
        }
    }

    /// The other kind on the same axis (N↔S, T↔F).
    pub fn partner(self) -> Self {
        match self {
            Kind::Sensing => Kind::Intuition,
            Kind::Intuition => Kind::Sensing,
            Kind::Feeling => Kind::Thinking,
            Kind::Thinking => Kind::Feeling,
        }
    }

    pub fn is_perceiving(self) -> bool {
        matches!(self, Kind::Sensing | Kind::Intuition)
    }

    pub fn is_judging(self) -> bool {
        !self.is_perceiving()
    }

    /// The perceiving letter this kind stands for, if it is on that axis.
    pub fn perception(self) -> Option<Perception> {
        match self {
            Kind::Sensing => Some(Perception::Sensing),
            Kind::Intuition => Some(Perception::Intuition),
            Kind::Feeling | Kind::Thinking => None,
        }
    }

    /// The judging letter this kind stands for, if it is on that axis.
    pub fn judgment(self) -> Option<Judgment> {
        match self {
            Kind::Feeling => Some(Judgment::Feeling),
            Kind::Thinking => Some(Judgment::Thinking),
            Kind::Sensing | Kind::Intuition => None,
        }
    }
}

impl From<Perception> for Kind {
    fn from(perception: Perception) -> Self {
        match perception {
            Perception::Sensing => Kind::Sensing,
            Perception::Intuition => Kind::Intuition,
        }
    }
}

impl From<Judgment> for Kind {
    fn from(judgment: Judgment) -> Self {
        match judgment {
            Judgment::Feeling => Kind::Feeling,
            Judgment::Thinking => Kind::Thinking,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_pair<D: Dichotomy + fmt::Debug>() {
        let [a, b] = D::LETTERS;
        let first = D::from_letter(a).unwrap();
        let second = D::from_letter(b).unwrap();
        assert_eq!(first.opposite(), second);
        assert_eq!(second.opposite(), first);
        assert_eq!(first.letter(), a);
        assert_eq!(second.letter(), b);
    }

    #[test]
    fn test_opposites() {
        assert_pair::<Attitude>();
        assert_pair::<Perception>();
        assert_pair::<Judgment>();
        assert_pair::<Lifestyle>();
        assert_pair::<Orientation>();
    }

    #[test]
    fn test_from_letter_ignores_case() {
        assert_eq!(Attitude::from_letter('e'), Some(Attitude::Extraversion));
        assert_eq!(Perception::from_letter('n'), Some(Perception::Intuition));
        assert_eq!(Orientation::from_letter('I'), Some(Orientation::Introverted));
        assert_eq!(Lifestyle::from_letter('x'), None);
        assert_eq!(Judgment::from_letter('S'), None);
    }

    #[test]
    fn test_kind_partner() {
        for kind in Kind::ALL {
            assert_eq!(kind.partner().partner(), kind);
            assert_ne!(kind.partner(), kind);
            assert_eq!(kind.partner().is_perceiving(), kind.is_perceiving());
        }
        assert_eq!(Kind::Intuition.partner(), Kind::Sensing);
        assert_eq!(Kind::Thinking.partner(), Kind::Feeling);
    }

    #[test]
    fn test_kind_axes() {
        assert_eq!(Kind::from(Perception::Intuition), Kind::Intuition);
        assert_eq!(Kind::from(Judgment::Thinking), Kind::Thinking);
        assert_eq!(Kind::Sensing.perception(), Some(Perception::Sensing));
        assert_eq!(Kind::Sensing.judgment(), None);
        assert_eq!(Kind::Feeling.judgment(), Some(Judgment::Feeling));
        assert!(Kind::Feeling.is_judging());
    }

    #[test]
    fn test_attitude_orientation_conversion() {
        assert_eq!(Attitude::from(Orientation::Extraverted), Attitude::Extraversion);
        assert_eq!(Orientation::from(Attitude::Introversion), Orientation::Introverted);
    }
}
