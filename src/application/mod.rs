//! Application layer: command grammar and the registration session
//!
//! This layer drives the domain and turns user input into domain calls.

pub mod command;
pub mod error;
pub mod error_ext;
pub mod session;

pub use command::Command;
pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use session::{RegistrationSession, Response};
