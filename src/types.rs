//! Core value types shared by the generator and the classifier.

use std::fmt;

/// One of the four fixed categories of characters contributing to the
/// password alphabet.
///
/// The `Ord` derive follows declaration order; the generator's coverage
/// pass relies on it (uppercase, lowercase, numbers, symbols).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Numbers,
    Symbols,
}

impl CharacterClass {
    /// All classes, in the fixed coverage-pass order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Numbers,
        CharacterClass::Symbols,
    ];

    /// The fixed member characters of this class.
    ///
    /// The four sets are pairwise disjoint, non-empty, and ASCII.
    pub const fn charset(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
            CharacterClass::Lowercase => "abcdefghijklmnopqrstuvwxyz",
            CharacterClass::Numbers => "0123456789",
            CharacterClass::Symbols => "!@#$%^&*()_+-=[]{}|;:,.<>?",
        }
    }

    /// Returns `true` if `c` is a member of this class.
    pub fn contains(self, c: char) -> bool {
        self.charset().contains(c)
    }
}

/// Coarse classification of a password's resistance to guessing,
/// based on length and class diversity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthCategory {
    /// No password supplied (empty input). Distinct from `Weak`.
    Undefined,
    Weak,
    Medium,
    Strong,
}

impl fmt::Display for StrengthCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StrengthCategory::Undefined => "-",
            StrengthCategory::Weak => "Weak",
            StrengthCategory::Medium => "Medium",
            StrengthCategory::Strong => "Strong",
        };
        write!(f, "{}", label)
    }
}
