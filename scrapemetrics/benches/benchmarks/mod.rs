pub mod histogram;
pub mod render;
