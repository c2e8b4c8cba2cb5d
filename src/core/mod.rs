//! Core building blocks: protection policy (`params`), the per-run request
//! (`request`) and the pre-flight checks (`validate`).
pub mod params;
pub mod request;
pub mod validate;
