use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("input file '{0}' could not be found (check the path)")]
    InputMissing(String),

    #[error("input file '{path}' is not a valid JSON export: {source}")]
    InputParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("output file suffix generation failed: {0}")]
    Entropy(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConvertError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::InputMissing(_) => "input_missing",
            Self::InputParse { .. } => "input_parse",
            Self::Entropy(_) => "entropy",
            Self::Io(_) => "io_error",
            Self::Json(_) => "json_error",
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
