//! Question kind taxonomy.
//!
//! Every quiz item is tagged with a closed kind: a trait axis (R/G/B), a
//! polarity (positive items raise the axis total, negative items lower it),
//! and an optional world sub-dimension for the multi-world question sets.
//! Kinds travel in datasets as compact wire strings (`"RP"`, `"GSinner"`, ...)
//! and are validated into this enumeration at load time rather than trusted
//! as ad hoc string keys.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three personality trait axes, doubling as an RGB channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TraitAxis {
    R,
    G,
    B,
}

impl TraitAxis {
    /// All axes in channel order.
    pub const ALL: [Self; 3] = [Self::R, Self::G, Self::B];

    /// Single-letter wire representation
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::R => 'R',
            Self::G => 'G',
            Self::B => 'B',
        }
    }

    /// Human-readable trait label used on result cards
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::R => "Assertive (R)",
            Self::G => "Mediating (G)",
            Self::B => "Deliberate (B)",
        }
    }

    /// Fixed bar color for this axis on the result card
    #[must_use]
    pub const fn bar_color(self) -> &'static str {
        match self {
            Self::R => "#E63946",
            Self::G => "#7FB069",
            Self::B => "#457B9D",
        }
    }

    fn from_letter(c: char) -> Option<Self> {
        match c {
            'R' => Some(Self::R),
            'G' => Some(Self::G),
            'B' => Some(Self::B),
            _ => None,
        }
    }
}

impl fmt::Display for TraitAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Whether an item counts toward or against its axis.
///
/// The wire letters follow the source datasets: `P` for positive items and
/// `S` for negative (reversed) items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Polarity {
    Positive,
    Negative,
}

impl Polarity {
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Positive => 'P',
            Self::Negative => 'S',
        }
    }

    fn from_letter(c: char) -> Option<Self> {
        match c {
            'P' => Some(Self::Positive),
            'S' => Some(Self::Negative),
            _ => None,
        }
    }
}

/// Optional world sub-dimension for multi-world question sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum World {
    Inner,
    Relational,
    Social,
}

impl World {
    pub const ALL: [Self; 3] = [Self::Inner, Self::Relational, Self::Social];

    /// Wire suffix appended to the axis+polarity prefix
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Inner => "inner",
            Self::Relational => "relational",
            Self::Social => "social",
        }
    }

    fn from_suffix(s: &str) -> Option<Self> {
        match s {
            "inner" => Some(Self::Inner),
            "relational" => Some(Self::Relational),
            "social" => Some(Self::Social),
            _ => None,
        }
    }
}

impl fmt::Display for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Fully-resolved kind of a quiz item: axis x polarity x optional world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct QuestionKind {
    pub axis: TraitAxis,
    pub polarity: Polarity,
    pub world: Option<World>,
}

impl QuestionKind {
    #[must_use]
    pub const fn new(axis: TraitAxis, polarity: Polarity) -> Self {
        Self {
            axis,
            polarity,
            world: None,
        }
    }

    #[must_use]
    pub const fn with_world(axis: TraitAxis, polarity: Polarity, world: World) -> Self {
        Self {
            axis,
            polarity,
            world: Some(world),
        }
    }

    /// Parse a wire string like `"RP"` or `"GSinner"`.
    ///
    /// Returns `None` for anything outside the closed enumeration; dataset
    /// loaders turn that into a typed configuration error.
    #[must_use]
    pub fn parse(wire: &str) -> Option<Self> {
        let mut chars = wire.chars();
        let axis = TraitAxis::from_letter(chars.next()?)?;
        let polarity = Polarity::from_letter(chars.next()?)?;
        let rest = chars.as_str();
        let world = if rest.is_empty() {
            None
        } else {
            Some(World::from_suffix(rest)?)
        };
        Some(Self {
            axis,
            polarity,
            world,
        })
    }

    /// Wire representation, the inverse of [`QuestionKind::parse`].
    #[must_use]
    pub fn wire(&self) -> String {
        match self.world {
            Some(world) => format!(
                "{}{}{}",
                self.axis.letter(),
                self.polarity.letter(),
                world.suffix()
            ),
            None => format!("{}{}", self.axis.letter(), self.polarity.letter()),
        }
    }

    /// The same kind with the world dimension stripped.
    ///
    /// Comprehensive scoring folds all worlds into the base axis+polarity.
    #[must_use]
    pub const fn base(&self) -> Self {
        Self {
            axis: self.axis,
            polarity: self.polarity,
            world: None,
        }
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.wire())
    }
}

impl TryFrom<String> for QuestionKind {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("unknown question kind '{value}'"))
    }
}

impl From<QuestionKind> for String {
    fn from(kind: QuestionKind) -> Self {
        kind.wire()
    }
}
