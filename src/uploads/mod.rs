//! Room image uploads.

pub mod storage;

pub use storage::{UploadError, UploadStore};
