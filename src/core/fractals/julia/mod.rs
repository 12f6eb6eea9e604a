pub mod algorithm;
pub mod errors;
pub mod interest;
pub mod params;
