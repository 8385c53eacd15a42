pub mod directory;
pub mod fights;
pub mod statistics;
