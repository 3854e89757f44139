//! Core processing building blocks: background knockout, alpha trim,
//! height-normalizing resize, and the pipeline that chains them. These are
//! internal primitives consumed by the high-level `api` module.
pub mod params;
pub mod processing;
