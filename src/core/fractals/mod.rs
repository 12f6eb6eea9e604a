pub mod fractal_kinds;
pub mod fractal_options;
pub mod julia;
