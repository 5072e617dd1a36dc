//! Command implementations

pub mod convert;
pub mod filters;
pub mod inspect;
pub mod validate;
