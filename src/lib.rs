mod controllers;
mod core;
mod presenters;

pub use crate::controllers::cli::args::{Cli, Command, ThresholdArgs};
pub use crate::controllers::cli::controller::CliController;
pub use crate::controllers::cli::run_cli;
pub use crate::controllers::ports::report_presenter::{InterestVerdict, ReportPresenterPort};

pub use crate::core::actions::pick_julia_c::errors::PickError;
pub use crate::core::actions::pick_julia_c::pick_julia_c::{
    DEFAULT_MAX_ATTEMPTS, JuliaPick, default_search_region, pick_julia_c,
};
pub use crate::core::actions::scan_interest::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::scan_interest::scan_interest::{
    InterestScan, InterestScanError, ScanSummary, scan_interest,
};
pub use crate::core::actions::scan_interest::scan_interest_rayon::scan_interest_rayon;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::complex_rect::{ComplexRect, ComplexRectError, ParseComplexRectError};
pub use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
pub use crate::core::data::point::Point;
pub use crate::core::fractals::fractal_kinds::{FractalKinds, FractalKindsError};
pub use crate::core::fractals::fractal_options::{
    FRACTAL_OPTIONS, FractalOption, fractal_options, fractal_options_json,
};
pub use crate::core::fractals::julia::algorithm::JuliaInterestAlgorithm;
pub use crate::core::fractals::julia::errors::JuliaError;
pub use crate::core::fractals::julia::interest::{escape_iteration, is_interesting, is_julia_c_interesting};
pub use crate::core::fractals::julia::params::InterestThresholds;
pub use crate::core::util::pixel_to_complex_coords::PixelToComplexCoordsError;

pub use crate::presenters::json::json_presenter::JsonPresenter;
pub use crate::presenters::text::text_presenter::TextPresenter;
