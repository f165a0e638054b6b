pub mod audit;
pub mod identity;
