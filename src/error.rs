use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScorerError {
    #[error("failed to parse file {file}: {reason}")]
    Parse { file: String, reason: String },

    #[error("{0}")]
    Validation(String),

    /// The cause is logged where the failure happens; only this generic text is shown.
    #[error("failed to analyze campaigns; please check the analysis service and try again")]
    AnalysisUnavailable,

    #[error("analysis result {record} is missing required field: {field}")]
    MissingField { record: usize, field: &'static str },

    #[error("score field {field} is not a finite number")]
    NonFiniteScore { field: &'static str },

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("workbook error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

impl ScorerError {
    /// Errors caused by what the user supplied rather than by the run itself.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::Parse { .. } | Self::Validation(_) | Self::ConfigParse(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ScorerError>;
