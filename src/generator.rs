//! Password generator - combined-alphabet sampling with per-class coverage.

use rand::Rng;
use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::config::{ConfigError, GenerationConfig};

/// Generates a password from the given configuration using the thread-local
/// random generator.
///
/// # Errors
/// Returns [`ConfigError`] if the configuration is invalid. The generator
/// never repairs a bad configuration.
pub fn generate_password(config: &GenerationConfig) -> Result<SecretString, ConfigError> {
    generate_password_with(config, &mut rand::thread_rng())
}

/// Generates a password drawing randomness from a caller-supplied source.
///
/// Any [`Rng`] works, including cryptographically secure ones such as
/// `rand::rngs::OsRng`; the algorithm only assumes uniformity.
///
/// # Errors
/// Returns [`ConfigError`] if the configuration is invalid.
pub fn generate_password_with<R: Rng>(
    config: &GenerationConfig,
    rng: &mut R,
) -> Result<SecretString, ConfigError> {
    config.validate()?;

    let mut alphabet = String::new();
    for class in &config.classes {
        alphabet.push_str(class.charset());
    }

    let mut candidate: Vec<char> = (0..config.length)
        .map(|_| random_char(&alphabet, rng))
        .collect();

    ensure_class_coverage(&mut candidate, config, rng);
    shuffle(&mut candidate, rng);

    let password: String = candidate.into_iter().collect();

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "generated password: length={} classes={}",
        config.length,
        config.classes.len()
    );

    Ok(SecretString::new(password.into()))
}

/// Overwrites characters so that every enabled class gets a representative.
///
/// Classes are visited in fixed order; membership is tested against the
/// candidate as it was sampled, and patches land at a cursor advancing from
/// index 0. Patched positions are not re-checked, and the cursor wraps when
/// the password is shorter than the number of classes needing a patch, so a
/// later patch can overwrite an earlier one.
fn ensure_class_coverage<R: Rng>(
    candidate: &mut [char],
    config: &GenerationConfig,
    rng: &mut R,
) {
    let sampled = candidate.to_vec();
    let mut cursor = 0;

    for class in &config.classes {
        if sampled.iter().any(|&c| class.contains(c)) {
            continue;
        }
        candidate[cursor % candidate.len()] = random_char(class.charset(), rng);
        cursor += 1;
    }
}

/// Picks one character uniformly at random from an ASCII character set.
fn random_char<R: Rng>(set: &str, rng: &mut R) -> char {
    let bytes = set.as_bytes();
    bytes[rng.gen_range(0..bytes.len())] as char
}

/// In-place backward Fisher-Yates shuffle; every permutation of the input
/// is equally likely.
fn shuffle<R: Rng>(chars: &mut [char], rng: &mut R) {
    for i in (1..chars.len()).rev() {
        let j = rng.gen_range(0..=i);
        chars.swap(i, j);
    }
}

/// Async version that sends the generated password via channel.
///
/// Checks the cancellation token before running; if already cancelled,
/// nothing is sent and the channel closes when the sender drops.
#[cfg(feature = "async")]
pub async fn generate_password_tx(
    config: GenerationConfig,
    token: CancellationToken,
    tx: mpsc::Sender<Result<SecretString, ConfigError>>,
) {
    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::info!("password generation cancelled before start");
        return;
    }

    let result = generate_password(&config);

    if let Err(e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send generated password: {}", e);
    }
}
