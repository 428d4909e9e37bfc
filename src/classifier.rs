//! Password strength classifier - length and class-diversity heuristic.

use secrecy::{ExposeSecret, SecretString};

use crate::types::{CharacterClass, StrengthCategory};

const STRONG_MIN_LENGTH: usize = 13;
const STRONG_MIN_CLASSES: usize = 3;
const MEDIUM_MIN_LENGTH: usize = 8;
const MEDIUM_MIN_CLASSES: usize = 2;

/// Classifies a password's strength from its length and the number of
/// character classes represented in it.
///
/// An empty password yields [`StrengthCategory::Undefined`], which is a
/// sentinel for "nothing to classify", not an error. Characters outside
/// the four fixed classes count toward length but toward no class.
///
/// Pure and deterministic; thresholds are fixed constants.
pub fn classify_password_strength(password: &SecretString) -> StrengthCategory {
    let pwd = password.expose_secret();
    if pwd.is_empty() {
        return StrengthCategory::Undefined;
    }

    let length = pwd.chars().count();
    let classes = represented_classes(pwd);

    if length >= STRONG_MIN_LENGTH && classes >= STRONG_MIN_CLASSES {
        StrengthCategory::Strong
    } else if length >= MEDIUM_MIN_LENGTH && classes >= MEDIUM_MIN_CLASSES {
        StrengthCategory::Medium
    } else {
        StrengthCategory::Weak
    }
}

/// Counts how many of the four classes have at least one representative
/// character in the password.
fn represented_classes(pwd: &str) -> usize {
    CharacterClass::ALL
        .iter()
        .filter(|class| pwd.chars().any(|c| class.contains(c)))
        .count()
}
