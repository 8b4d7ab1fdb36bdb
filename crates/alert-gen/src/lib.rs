//! Mock Alert Generation
//!
//! Synthesizes alert records resembling monitoring-system notifications,
//! driven by a caller-supplied pseudo-random stream. Seeding the stream
//! from the same value reproduces the same batch byte for byte.

pub mod catalog;

mod generator;
mod model;
mod stream;

pub use generator::{batch_size, generate_alerts, MAX_BATCH, MIN_BATCH};
pub use model::{Alert, AlertCollection};
pub use stream::{rng_from_entropy, rng_from_offset};
