pub mod input;
pub mod surface;
