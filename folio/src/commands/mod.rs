pub mod render;
pub mod send;
