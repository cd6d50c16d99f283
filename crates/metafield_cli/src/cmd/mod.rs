/// Field comparison command.
pub mod compare;
/// Kind conversion command.
pub mod convert;
/// Kind listing command.
pub mod kinds;
/// Field printing command.
pub mod show;

mod error;
mod json;
mod print;
mod util;

pub use error::{CliError, Result};
