pub mod concat;
pub mod geometry;
pub mod reconcile;
