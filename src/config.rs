//! Generation configuration and its validation.

use std::collections::BTreeSet;
use thiserror::Error;

use crate::types::CharacterClass;

/// Minimum accepted password length.
pub const MIN_LENGTH: usize = 1;

/// Maximum accepted password length.
pub const MAX_LENGTH: usize = 128;

const DEFAULT_LENGTH: usize = 16;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("at least one character class must be enabled")]
    NoClassEnabled,
    #[error("password length must be between 1 and 128 characters, got {0}")]
    LengthOutOfRange(usize),
}

/// Configuration for a single password generation.
///
/// The class set iterates in the fixed `CharacterClass` order, which is
/// also the order the generator's coverage pass visits classes in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Requested password length, in characters.
    pub length: usize,
    /// Enabled character classes. Must be non-empty.
    pub classes: BTreeSet<CharacterClass>,
}

impl GenerationConfig {
    pub fn new(
        length: usize,
        classes: impl IntoIterator<Item = CharacterClass>,
    ) -> Self {
        Self {
            length,
            classes: classes.into_iter().collect(),
        }
    }

    /// Configuration with all four character classes enabled.
    pub fn with_all_classes(length: usize) -> Self {
        Self::new(length, CharacterClass::ALL)
    }

    /// Checks the configuration invariants.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::NoClassEnabled`] if no character class is enabled
    /// - [`ConfigError::LengthOutOfRange`] if length is outside 1..=128
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.classes.is_empty() {
            return Err(ConfigError::NoClassEnabled);
        }
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&self.length) {
            return Err(ConfigError::LengthOutOfRange(self.length));
        }
        Ok(())
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::with_all_classes(DEFAULT_LENGTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_default() {
        let config = GenerationConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.length, 16);
        assert_eq!(config.classes.len(), 4);
    }

    #[test]
    fn test_validate_rejects_empty_class_set() {
        let config = GenerationConfig::new(12, []);
        assert_eq!(config.validate(), Err(ConfigError::NoClassEnabled));
    }

    #[test]
    fn test_validate_rejects_zero_length() {
        let config = GenerationConfig::with_all_classes(0);
        assert_eq!(config.validate(), Err(ConfigError::LengthOutOfRange(0)));
    }

    #[test]
    fn test_validate_rejects_oversized_length() {
        let config = GenerationConfig::with_all_classes(129);
        assert_eq!(config.validate(), Err(ConfigError::LengthOutOfRange(129)));
    }

    #[test]
    fn test_validate_accepts_boundaries() {
        assert_eq!(GenerationConfig::with_all_classes(1).validate(), Ok(()));
        assert_eq!(GenerationConfig::with_all_classes(128).validate(), Ok(()));
    }

    #[test]
    fn test_new_deduplicates_classes() {
        let config = GenerationConfig::new(
            8,
            [CharacterClass::Numbers, CharacterClass::Numbers],
        );
        assert_eq!(config.classes.len(), 1);
    }

    #[test]
    fn test_classes_iterate_in_fixed_order() {
        let config = GenerationConfig::new(
            8,
            [
                CharacterClass::Symbols,
                CharacterClass::Uppercase,
                CharacterClass::Numbers,
            ],
        );
        let order: Vec<CharacterClass> = config.classes.iter().copied().collect();
        assert_eq!(
            order,
            vec![
                CharacterClass::Uppercase,
                CharacterClass::Numbers,
                CharacterClass::Symbols,
            ]
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ConfigError::NoClassEnabled.to_string(),
            "at least one character class must be enabled"
        );
        assert_eq!(
            ConfigError::LengthOutOfRange(200).to_string(),
            "password length must be between 1 and 128 characters, got 200"
        );
    }
}
