pub mod assignment;
pub mod block_result;
pub mod envelope;
pub mod fragment;
