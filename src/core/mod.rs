pub mod calculator;
pub mod clock;
pub mod config;
pub mod del;
pub mod edit;
pub mod log;
pub mod logic;
pub mod report;
