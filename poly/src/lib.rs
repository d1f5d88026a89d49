#![warn(clippy::all, rust_2018_idioms)]

mod error;
mod matrix;
pub mod nr;
mod parse;
mod polynomial;

pub use error::{Error, Result};
pub use matrix::Matrix;
pub use nr::{
    find_root, find_root_report, find_root_with_default, Root, DEFAULT_MAX_ITERATIONS,
};
pub use polynomial::Polynomial;
