/**
 * Replaying a team's submission history: which entries count against the
 * limit, and which are merely recorded.
 */
mod eligibility;
pub use eligibility::*;

/**
 * Picking the live submission per question and scoring it.
 */
mod resolve;
pub use resolve::*;

/**
 * Folding per-question outcomes into a team total.
 */
mod aggregate;
pub use aggregate::*;

/**
 * Competition ranks over sorted totals.
 */
mod rank;
pub use rank::*;

/**
 * Assembling the ranked scoreboard of one game.
 */
mod scoreboard;
pub use scoreboard::*;

/**
 * The user-facing operations, written against the repository ports so any
 * backend can drive them.
 */
pub mod service;

// We use a non-std map here for its ordering semantics and performance
pub(crate) type Map<K, V> = indexmap::IndexMap<K, V, rustc_hash::FxBuildHasher>;
