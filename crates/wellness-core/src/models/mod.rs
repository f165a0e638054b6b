pub mod assessment;
pub mod identity;
pub mod stress_level;

pub use assessment::{Assessment, SubScores};
pub use identity::Identity;
pub use stress_level::StressLevel;
