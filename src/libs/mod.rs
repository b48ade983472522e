pub mod artifact;
pub mod chain;
pub mod cli;
pub mod config;
pub mod errors;
pub mod writing;
