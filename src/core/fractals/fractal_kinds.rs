#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FractalKindsError {
    #[error("unknown fractal value {0}, expected 0 to 6")]
    UnknownValue(u8),
}

/// The fractal families a renderer can be asked for. The discriminant is the
/// `value` exposed to selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FractalKinds {
    #[default]
    Mandelbrot,
    BurningShip,
    Tricorn,
    Multibrot3,
    Multibrot4,
    Multibrot5,
    Julia,
}

impl FractalKinds {
    /// Presentation order.
    pub const ALL: &'static [Self] = &[
        Self::BurningShip,
        Self::Tricorn,
        Self::Mandelbrot,
        Self::Multibrot3,
        Self::Multibrot4,
        Self::Multibrot5,
        Self::Julia,
    ];

    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Mandelbrot => 0,
            Self::BurningShip => 1,
            Self::Tricorn => 2,
            Self::Multibrot3 => 3,
            Self::Multibrot4 => 4,
            Self::Multibrot5 => 5,
            Self::Julia => 6,
        }
    }

    pub const fn from_value(value: u8) -> Result<Self, FractalKindsError> {
        match value {
            0 => Ok(Self::Mandelbrot),
            1 => Ok(Self::BurningShip),
            2 => Ok(Self::Tricorn),
            3 => Ok(Self::Multibrot3),
            4 => Ok(Self::Multibrot4),
            5 => Ok(Self::Multibrot5),
            6 => Ok(Self::Julia),
            _ => Err(FractalKindsError::UnknownValue(value)),
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot (z^2)",
            Self::BurningShip => "Burning Ship",
            Self::Tricorn => "Tricorn (z^2 conj)",
            Self::Multibrot3 => "Multibrot (z^3)",
            Self::Multibrot4 => "Multibrot (z^4)",
            Self::Multibrot5 => "Multibrot (z^5)",
            Self::Julia => "Julia Set (z^2)",
        }
    }

    /// Only the Julia family iterates with a caller-chosen constant `c`.
    #[must_use]
    pub const fn is_julia(self) -> bool {
        matches!(self, Self::Julia)
    }
}

impl std::fmt::Display for FractalKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

impl TryFrom<u8> for FractalKinds {
    type Error = FractalKindsError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}
