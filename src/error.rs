use thiserror::Error;

#[derive(Error, Debug)]
pub enum CipherError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid keyed alphabet construction: {0}")]
    InvalidKeyedAlphabet(String),

    #[error("Key cannot be empty")]
    EmptyKey,

    #[error("Encrypted text must contain at least {required} characters (got {actual})")]
    InputTooShort { required: usize, actual: usize },

    #[error("Could not load dictionary '{path}': {source}")]
    DictionaryLoad {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid choice: {0}")]
    InvalidChoice(String),
}

pub type CrResult<T> = Result<T, CipherError>;
