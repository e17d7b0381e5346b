pub mod asteroid;
pub mod particles;
pub mod ship;
