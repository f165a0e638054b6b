//! wellness-content
//!
//! Static informational content for the portal pages. Pure data, built once
//! per process and never mutated.

pub mod exercises;
pub mod resources;
pub mod section;

pub use section::Section;
