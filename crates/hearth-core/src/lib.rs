//! hearth-core
//!
//! The budget aggregation and goal-allocation engine: month statistics,
//! cumulative savings trends, and waterfall allocation of savings across
//! prioritized goals. Services are pure read-and-compute over a store
//! injected at construction; persistence, auth, and transport live in
//! collaborator crates.

pub mod error;
pub mod goals;
pub mod stats;
pub mod store;
pub mod telemetry;
pub mod trend;

pub use error::CoreError;
pub use goals::*;
pub use stats::*;
pub use store::*;
pub use trend::*;
