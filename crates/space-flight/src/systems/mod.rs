pub mod collision;
pub mod effects;
pub mod motion;
pub mod render;
pub mod spawner;

#[cfg(test)]
mod proptest_motion;
