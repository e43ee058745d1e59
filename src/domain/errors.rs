use derive_more::Display;

/// Why the dataset could not be obtained.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum FetchError {
    #[display(fmt = "request failed: {}", _0)]
    Request(String),
    #[display(fmt = "HTTP error: {}", _0)]
    Status(u16),
    #[display(fmt = "invalid dataset payload: {}", _0)]
    Parse(String),
}

/// Root error type for a render pass.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum AppError {
    #[display(fmt = "Fetch Error: {}", _0)]
    Fetch(FetchError),
    #[display(fmt = "Malformed Time {:?} in record #{}", raw, index)]
    MalformedTime { index: usize, raw: String },
    #[display(fmt = "Dataset contains no records")]
    EmptyDataset,
    #[display(fmt = "Rendering Error: {}", _0)]
    Rendering(String),
    #[display(fmt = "Config Error: {}", _0)]
    Config(String),
}

impl std::error::Error for FetchError {}
impl std::error::Error for AppError {}

impl From<FetchError> for AppError {
    fn from(err: FetchError) -> Self {
        AppError::Fetch(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Fetch(FetchError::Parse(err.to_string()))
    }
}

impl From<AppError> for wasm_bindgen::JsValue {
    fn from(err: AppError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
