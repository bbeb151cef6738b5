#![warn(missing_docs)]
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

/// Domain entities for estimathon games.
///
/// These types carry their own validity rules: anything that can be
/// constructed is valid, and anything invalid is reported as a structured,
/// field-attributable error at construction time. Beyond validation they
/// hold no business logic; the scoring rules that consume them live in the
/// `esti-score` crate.
pub mod models;

/// Interface traits between the domain and its collaborators.
///
/// The surrounding application (persistence, HTTP handlers, admin tooling)
/// is not part of this workspace. These traits are the contract it
/// implements: catalog lookups, ordered submission histories, and the single
/// mutating operation of appending a submission. Keeping them as traits lets
/// the scoring operations run against any backend, including the in-memory
/// one used by the test suites.
pub mod ports;
