use std::time::Instant;

use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::controllers::cli::args::Command;
use crate::controllers::ports::report_presenter::{InterestVerdict, ReportPresenterPort};
use crate::core::actions::pick_julia_c::pick_julia_c::{default_search_region, pick_julia_c};
use crate::core::actions::scan_interest::scan_interest::scan_interest;
use crate::core::actions::scan_interest::scan_interest_rayon::scan_interest_rayon;
use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::fractals::fractal_options::fractal_options;
use crate::core::fractals::julia::algorithm::JuliaInterestAlgorithm;
use crate::core::fractals::julia::interest::{escape_iteration, is_interesting};
use crate::core::fractals::julia::params::InterestThresholds;

pub struct CliController<P: ReportPresenterPort> {
    presenter: P,
    thresholds: InterestThresholds,
}

impl<P: ReportPresenterPort> CliController<P> {
    pub fn new(presenter: P, thresholds: InterestThresholds) -> Self {
        Self {
            presenter,
            thresholds,
        }
    }

    pub fn into_presenter(self) -> P {
        self.presenter
    }

    pub fn run(&mut self, command: Command) -> Result<(), Box<dyn std::error::Error>> {
        match command {
            Command::Options => self.presenter.present_options(fractal_options())?,
            Command::Check { cr, ci } => {
                let c = Complex::new(cr, ci);
                if !c.is_finite() {
                    info!("{c} is not finite, verdict is unspecified");
                }

                let verdict = InterestVerdict {
                    c,
                    interesting: is_interesting(c, &self.thresholds),
                    escape_iteration: escape_iteration(c, &self.thresholds),
                };
                self.presenter.present_verdict(&verdict)?;
            }
            Command::Scan {
                width,
                height,
                region,
                sequential,
            } => {
                let region = region.unwrap_or_else(default_search_region);
                let pixel_rect = PixelRect::with_size(width, height)?;
                let algorithm = JuliaInterestAlgorithm::new(pixel_rect, region, self.thresholds);

                let start = Instant::now();
                let scan = if sequential {
                    scan_interest(pixel_rect, &algorithm)?
                } else {
                    scan_interest_rayon(pixel_rect, &algorithm)?
                };
                info!("scanned {} cells in {:?}", pixel_rect.size(), start.elapsed());

                self.presenter.present_scan(region, &scan)?;
            }
            Command::Pick {
                seed,
                attempts,
                region,
            } => {
                let region = region.unwrap_or_else(default_search_region);
                let mut rng = StdRng::seed_from_u64(seed);
                info!("picking a Julia constant with seed {seed}");

                let pick = pick_julia_c(&mut rng, region, &self.thresholds, attempts)?;
                self.presenter.present_pick(&pick)?;
            }
        }

        Ok(())
    }
}
