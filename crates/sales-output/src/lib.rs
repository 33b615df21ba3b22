//! Output writers for cleaned sales exports.

mod error;
mod json;

pub use error::{OutputError, Result};
pub use json::{WrittenFile, render_json, write_json_atomic};
