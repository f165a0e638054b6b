//! wellness-storage
//!
//! Assessment persistence. An append-only [`AssessmentStore`] with an S3
//! backend (a thin wrapper around the AWS S3 SDK) and an in-memory backend.

pub mod assessments;
pub mod client;
pub mod error;
pub mod memory;
pub mod objects;

pub use assessments::{AssessmentStore, S3AssessmentStore, create};
pub use memory::MemoryAssessmentStore;
