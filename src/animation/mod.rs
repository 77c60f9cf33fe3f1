pub mod driver;
pub mod sampling;

pub use driver::{next_deadline, AnimationDriver, DriverState, Frame};
