pub use coupling::*;
pub use diagonalization::*;

pub mod coupling;
pub mod diagonalization;
