pub mod experiment;

pub use experiment::{Experiment, ExperimentBuilder};
