pub use io::*;
pub use sampling::*;

pub mod io;
pub mod sampling;
