pub mod complex;
pub mod complex_rect;
pub mod pixel_rect;
pub mod point;
