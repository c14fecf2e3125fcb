//! Adaptive Rock-Paper-Scissors opponent.
//!
//! The engine looks up past rounds that were played in the same two-move
//! context as the current one, finds the move the player chose most often
//! in that context, and answers with the move that beats it. With no usable
//! history it answers uniformly at random.
//!
//! ## Modules
//!
//! - [`game`] - moves, compressed sequences, and round records
//! - [`engine`] - prediction, recording, and their tunables
//! - [`history`] - the history store capability and its implementations
//! - [`analytics`] - fire-and-forget event export
//! - `hosting` - HTTP surface (feature `server`)
//! - `save` - PostgreSQL connectivity (feature `database`)
pub mod analytics;
pub mod engine;
pub mod game;
pub mod history;

#[cfg(feature = "server")]
pub mod hosting;
#[cfg(feature = "database")]
pub mod save;

// ============================================================================
// CONTEXT MATCHING
// Rounds are grouped by the last few moves each side made before them.
// ============================================================================
/// Moves per side that form the lookup key for matching past rounds.
pub const CONTEXT_KEY_LENGTH: usize = 2;
/// Moves per side kept on each stored round for auditing and analytics.
pub const CONTEXT_AUDIT_LENGTH: usize = 3;

// ============================================================================
// HISTORY STORE
// ============================================================================
/// Most recent matching rounds considered per prediction. Caps query cost
/// and recency skew; prediction is correct for any positive value.
pub const HISTORY_QUERY_LIMIT: usize = 100;
/// Upper bound on any single store call before the engine gives up on it.
pub const HISTORY_STORE_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(2);

// ============================================================================
// ANALYTICS & SESSIONS
// ============================================================================
/// Wait before the one retry of a failed analytics export.
pub const ANALYTICS_RETRY_DELAY: std::time::Duration = std::time::Duration::from_secs(10);
/// Cookie carrying the opaque session identifier.
pub const SESSION_COOKIE: &str = "ID";
/// Lifetime of a freshly issued session cookie.
pub const SESSION_LIFETIME_DAYS: i64 = 30;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for fallbacks, tests, and benchmarks.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// RANDOMNESS
// ============================================================================
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::sync::LazyLock;
use std::sync::Mutex;
use std::sync::PoisonError;

/// Process-wide generator, seeded once from OS entropy.
static DICE: LazyLock<Mutex<SmallRng>> = LazyLock::new(|| Mutex::new(SmallRng::from_os_rng()));

/// Uniform draw from `0..n`. Safe to call from any thread.
pub fn roll(n: usize) -> usize {
    DICE.lock()
        .unwrap_or_else(PoisonError::into_inner)
        .random_range(0..n)
}

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}
