use crate::pareto::Label;

pub type Result<T = (), E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required objective is missing or is not a finite number.
    #[error("invalid {field}: {value}")]
    InvalidInput { field: &'static str, value: String },

    /// The tolerant rule needs the deviation and the simulation window on both sides.
    #[error("`{label}` has no deviation or simulation window, the tolerant rule cannot compare it")]
    UnsupportedMode { label: Label },

    #[error("malformed report")]
    Report(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn missing(field: &'static str) -> Self {
        Self::InvalidInput { field, value: "missing".to_string() }
    }
}
