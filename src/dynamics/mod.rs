pub use runge_kutta::*;
pub use trajectory::*;

pub mod runge_kutta;
pub mod trajectory;
