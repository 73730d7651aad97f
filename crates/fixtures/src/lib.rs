//! Demo/sample data and stand-in collaborators.
//!
//! Data generation is deliberately separated from the analytics runtime:
//! the pipeline accepts ledger + catalog as parameters and never
//! manufactures them internally. This crate supplies the manufactured
//! inputs: a seeded sample dataset for demos and tests, and a
//! deterministic drift forecaster honoring the [`Forecaster`] contract so
//! the forecast path can run without a real time-series model.
//!
//! [`Forecaster`]: stockwatch_analytics::Forecaster

pub mod drift;
pub mod sample;

pub use drift::DriftForecaster;
pub use sample::{DEFAULT_SEED, SampleData};
