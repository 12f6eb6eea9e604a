use clap::{Args, Parser, Subcommand};

use crate::core::actions::pick_julia_c::pick_julia_c::DEFAULT_MAX_ATTEMPTS;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::fractals::julia::errors::JuliaError;
use crate::core::fractals::julia::params::{
    DEFAULT_ESCAPE_RADIUS_SQUARED, DEFAULT_INTEREST_CUTOFF, DEFAULT_MAX_ITERATIONS,
    InterestThresholds,
};

pub const DEFAULT_SCAN_WIDTH: u32 = 120;
pub const DEFAULT_SCAN_HEIGHT: u32 = 80;
pub const DEFAULT_SEED: u64 = 0;

#[derive(Parser, Debug)]
#[command(name = "fractal_scout")]
#[command(
    version,
    about = "List fractal families and find Julia constants worth rendering"
)]
pub struct Cli {
    /// Print reports as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(flatten)]
    pub thresholds: ThresholdArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Args, Debug, Clone, Copy)]
pub struct ThresholdArgs {
    /// Iteration budget of the interest heuristic
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub max_iterations: u32,

    /// Squared escape radius of the interest heuristic
    #[arg(long, global = true, default_value_t = DEFAULT_ESCAPE_RADIUS_SQUARED)]
    pub escape_radius_squared: f64,

    /// Escapes at or before this step count as boring
    #[arg(long, global = true, default_value_t = DEFAULT_INTEREST_CUTOFF)]
    pub interest_cutoff: u32,
}

impl ThresholdArgs {
    pub fn to_thresholds(self) -> Result<InterestThresholds, JuliaError> {
        InterestThresholds::new(
            self.max_iterations,
            self.escape_radius_squared,
            self.interest_cutoff,
        )
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List the selectable fractal families
    Options,

    /// Judge a single Julia constant c = CR + CI·i
    Check {
        #[arg(allow_negative_numbers = true)]
        cr: f64,
        #[arg(allow_negative_numbers = true)]
        ci: f64,
    },

    /// Classify a grid of constants over a region of the parameter plane
    Scan {
        #[arg(long, default_value_t = DEFAULT_SCAN_WIDTH)]
        width: u32,

        #[arg(long, default_value_t = DEFAULT_SCAN_HEIGHT)]
        height: u32,

        /// Region as x0,y0,x1,y1 (defaults to the whole Mandelbrot set)
        #[arg(long, allow_hyphen_values = true)]
        region: Option<ComplexRect>,

        /// Scan on the calling thread only
        #[arg(long)]
        sequential: bool,
    },

    /// Draw random constants until one is interesting
    Pick {
        #[arg(long, default_value_t = DEFAULT_SEED)]
        seed: u64,

        #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
        attempts: u32,

        /// Region as x0,y0,x1,y1 (defaults to the whole Mandelbrot set)
        #[arg(long, allow_hyphen_values = true)]
        region: Option<ComplexRect>,
    },
}
