#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PickError {
    #[error("at least one attempt is required")]
    ZeroAttempts,
    #[error("no interesting Julia constant found in {attempts} attempts")]
    Exhausted { attempts: u32 },
}
