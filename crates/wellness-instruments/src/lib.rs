//! wellness-instruments
//!
//! The stress-assessment instrument. Pure data and functions with no AWS
//! dependency. Defines the quiz questions, the rating rules used to validate a
//! submission, the scoring formula, and the recommendation bundle for each
//! stress level.

pub mod questions;
pub mod recommendations;
pub mod scoring;
pub mod validation;
