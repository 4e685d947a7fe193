pub mod error;
pub mod hierarchy;
pub mod io;
pub mod model;
pub mod report;

pub use error::{ChartError, Result, ValidationError};
