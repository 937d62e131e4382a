pub mod energy;
pub mod medical;
pub mod stability;
pub mod validate;
