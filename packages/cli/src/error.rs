use tsf_codec::CodecError;

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Codec(#[from] CodecError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
