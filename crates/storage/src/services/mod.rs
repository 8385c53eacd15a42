pub mod fight_resolver;
pub mod statistics;
