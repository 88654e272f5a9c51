pub mod cli;
pub mod data;
pub mod error;
pub mod report;
