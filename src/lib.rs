//! Randomized password generation and strength classification.
//!
//! This library builds passwords from user-selected character classes
//! (uppercase, lowercase, numbers, symbols) with a guaranteed-inclusion
//! pass per enabled class, and classifies any password into a coarse
//! strength category from its length and class diversity.
//!
//! # Features
//!
//! - `async` (default): Enables an async generation wrapper with
//!   cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_forge::{classify_password_strength, generate_password, GenerationConfig};
//! use secrecy::ExposeSecret;
//!
//! let config = GenerationConfig::with_all_classes(16);
//! let password = generate_password(&config).expect("valid configuration");
//!
//! println!("Password: {}", password.expose_secret());
//! println!("Strength: {}", classify_password_strength(&password));
//! ```
//!
//! Randomness comes from `rand::thread_rng()` by default; pass any
//! [`rand::Rng`] to [`generate_password_with`] to substitute a
//! cryptographically secure or deterministic source.

// Internal modules
mod classifier;
mod config;
mod generator;
mod types;

// Public API
pub use classifier::classify_password_strength;
pub use config::{ConfigError, GenerationConfig, MAX_LENGTH, MIN_LENGTH};
pub use generator::{generate_password, generate_password_with};
pub use types::{CharacterClass, StrengthCategory};

#[cfg(feature = "async")]
pub use generator::generate_password_tx;
