#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

use esti_core::models::{Game, GameSlug, Question, QuestionId, Submission, Team, TeamId};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

mod r#impl;

type Map<K, V> = indexmap::IndexMap<K, V, rustc_hash::FxBuildHasher>;

/// In-memory implementation of the estimathon repositories
///
/// All records live in one lock-guarded state, so the store is cheap to
/// create and safe to share by reference between tasks. Reads sort on the
/// way out rather than maintaining sorted structures; at estimathon sizes
/// (dozens of teams, a few hundred submissions) that is never the slow part.
#[derive(Default)]
pub struct MemoryStore {
    state: RwLock<State>,
}

#[derive(Default)]
struct State {
    games: Map<GameSlug, Game>,
    questions: Map<QuestionId, Question>,
    teams: Map<TeamId, Team>,
    submissions: Vec<Submission>,
}

impl MemoryStore {
    /// Creates a store with an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    // Every mutation is a single map insert or vector push, so state behind
    // a poisoned lock is still fully applied and safe to keep serving.
    fn read(&self) -> RwLockReadGuard<'_, State> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, State> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
