pub mod block;
pub mod fractal;
pub mod fragments;
pub mod grid;
