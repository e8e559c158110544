pub mod cli;
pub mod commands;
pub mod error;
pub mod graph;
pub mod loader;
pub mod report;
pub mod server;
pub mod telemetry;
pub mod validation;

pub use error::{OasGuardError, Result};
pub use validation::{Invalid, Validator, ValidatorConfig, validate};
