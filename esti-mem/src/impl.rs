//! Repository trait implementations backed by the in-memory state.
//!
//! Each file mirrors one port from `esti-core`; the store-wide contracts
//! (infallibility and the marker trait) live here.

use crate::MemoryStore;
use esti_core::ports::{EstimathonRepository, Repository};

mod game;
mod question;
mod submission;
mod team;

impl Repository for MemoryStore {
    // Memory access cannot fail, so domain failures in the inner Result are
    // the only errors callers ever see from this backend.
    type Error = std::convert::Infallible;
}

impl EstimathonRepository for MemoryStore {}
