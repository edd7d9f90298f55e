//! Output mode.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show results and status.
    #[default]
    Normal,
    /// Show results only.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows status messages (warnings, summaries).
    pub fn shows_status(&self) -> bool {
        matches!(self, Self::Normal)
    }
}
