pub mod docker;
pub mod error;
pub mod runtime;

pub use docker::*;
pub use error::*;
pub use runtime::*;
