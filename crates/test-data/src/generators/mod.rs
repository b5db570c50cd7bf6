//! Entity generators for test data.
//!
//! - [`TrailGenerator`]: trails with plausible names, climb and distance

pub mod trail;

pub use trail::{GeneratedTrail, TrailGenConfig, TrailGenerator};
