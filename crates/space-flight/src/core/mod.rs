pub mod collider;
pub mod driver;
pub mod rng;
pub mod session;
pub mod time;
