pub mod error;
pub mod validation;
pub mod model;
pub mod db;
pub mod queries;
pub mod ops;
pub mod cli;

pub use cli::{run, Cli};
