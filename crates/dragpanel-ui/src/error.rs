use std::fmt;

/// Errors surfaced by the panel engine and its facade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelError {
    /// A required collaborator was missing when the panel was initialized.
    Configuration { reason: &'static str },
    /// The panel was queried or driven before it was initialized or measured.
    InvalidState { reason: &'static str },
}

impl PanelError {
    pub fn is_configuration(&self) -> bool {
        matches!(self, PanelError::Configuration { .. })
    }

    pub fn is_invalid_state(&self) -> bool {
        matches!(self, PanelError::InvalidState { .. })
    }
}

impl fmt::Display for PanelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanelError::Configuration { reason } => {
                write!(f, "invalid panel configuration: {reason}")
            }
            PanelError::InvalidState { reason } => write!(f, "invalid panel state: {reason}"),
        }
    }
}

impl std::error::Error for PanelError {}
