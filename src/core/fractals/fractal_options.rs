use serde::Serialize;

use crate::core::fractals::fractal_kinds::FractalKinds;

/// One entry of the fractal selector: a label to show and the value a
/// renderer dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FractalOption {
    pub label: &'static str,
    pub value: u8,
}

impl FractalOption {
    #[must_use]
    pub const fn from_kind(kind: FractalKinds) -> Self {
        Self {
            label: kind.display_name(),
            value: kind.value(),
        }
    }

    /// The kind this option selects. Every entry of the table maps to one.
    #[must_use]
    pub fn kind(&self) -> Option<FractalKinds> {
        FractalKinds::from_value(self.value).ok()
    }
}

pub static FRACTAL_OPTIONS: [FractalOption; 7] = [
    FractalOption::from_kind(FractalKinds::BurningShip),
    FractalOption::from_kind(FractalKinds::Tricorn),
    FractalOption::from_kind(FractalKinds::Mandelbrot),
    FractalOption::from_kind(FractalKinds::Multibrot3),
    FractalOption::from_kind(FractalKinds::Multibrot4),
    FractalOption::from_kind(FractalKinds::Multibrot5),
    FractalOption::from_kind(FractalKinds::Julia),
];

#[must_use]
pub fn fractal_options() -> &'static [FractalOption] {
    &FRACTAL_OPTIONS
}

pub fn fractal_options_json() -> serde_json::Result<String> {
    serde_json::to_string_pretty(fractal_options())
}
