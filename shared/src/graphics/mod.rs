pub mod color;
pub mod palette;
