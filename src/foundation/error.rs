/// Convenience result type used across the crate.
pub type CalendarResult<T> = Result<T, CalendarError>;

/// Top-level error taxonomy used by the rendering APIs.
#[derive(thiserror::Error, Debug)]
pub enum CalendarError {
    /// Missing, unparsable or invalid settings.
    #[error("configuration error: {0}")]
    Config(String),

    /// Missing or malformed input data (city data, holidays, activities).
    #[error("data error: {0}")]
    Data(String),

    /// Errors while composing or rasterizing the chart.
    #[error("render error: {0}")]
    Render(String),

    /// Errors while writing output files.
    #[error("export error: {0}")]
    Export(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CalendarError {
    /// Build a [`CalendarError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`CalendarError::Data`] value.
    pub fn data(msg: impl Into<String>) -> Self {
        Self::Data(msg.into())
    }

    /// Build a [`CalendarError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`CalendarError::Export`] value.
    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }

    /// Short stable name of the error category, used for CLI reporting.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Config(_) => "configuration",
            Self::Data(_) => "data",
            Self::Render(_) => "render",
            Self::Export(_) => "export",
            Self::Other(_) => "internal",
        }
    }

    /// Return `true` for settings problems, which the CLI reports as a one-liner.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
