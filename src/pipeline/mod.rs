pub mod resolve;
pub mod scale;
pub mod sort;
