pub mod data;
pub mod normalize;
