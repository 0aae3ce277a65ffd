//! eventful_core - pure types and collaborator seams for eventful.
//!
//! Nothing in this crate performs I/O. The cache and remote source are
//! described by traits so the repository can be exercised with fakes.

pub mod event;
pub mod pagination;
pub mod resource;
pub mod serde;
pub mod source;
pub mod storage;

pub use event::{Event, Geometry};
pub use resource::Resource;
