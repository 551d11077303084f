pub mod error;
pub mod feature;
pub mod io;
pub mod paths;
pub mod summary;

pub use error::{ProgressError, Result};
