//! Core processing building blocks: spatial geometry kernels, batch
//! reconciliation, and the concatenation pipeline. These are typed internal
//! primitives consumed by the high-level `api` module.
pub mod params;
pub mod processing;
