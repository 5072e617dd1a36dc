//! pepcheck: project metadata validation
//!
//! Validates a project (a YAML configuration plus an ordered sample
//! manifest) against a declarative JSON-Schema-compatible schema, and
//! converts validated projects into alternate output formats.

pub mod cli;
pub mod convert;
pub mod core;
pub mod schema;
