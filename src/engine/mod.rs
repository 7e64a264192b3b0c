pub mod animator;
pub mod input;
pub mod time;
