pub mod assessments;
pub mod health;
pub mod home;
pub mod module;
pub mod recommendations;
pub mod resources;
