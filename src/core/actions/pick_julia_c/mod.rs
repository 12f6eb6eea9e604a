pub mod errors;
pub mod pick_julia_c;
