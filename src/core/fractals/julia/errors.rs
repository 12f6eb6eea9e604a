#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum JuliaError {
    #[error("Maximum iterations must be greater than zero")]
    ZeroMaxIterations,
    #[error("Escape radius squared must be positive and finite, got {0}")]
    InvalidEscapeRadius(f64),
}
