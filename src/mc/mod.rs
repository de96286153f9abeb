pub mod simulator;
pub mod statistics;
