//! Core module - project model, sample resolution, document materialization

pub mod materialize;
pub mod project;
pub mod sample;

pub use materialize::{materialize, materialize_sample, MaterializeError};
pub use project::{Project, ProjectError};
pub use sample::{resolve_sample, Sample, SampleError};
