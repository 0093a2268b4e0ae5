pub mod cli;
pub mod di;
pub mod fileio;
pub mod handler;
pub mod input;
