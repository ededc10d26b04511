use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirectionsError {
    #[error("Malformed directions URL: {0}")]
    MalformedUrl(#[from] url::ParseError),

    #[error("Directions request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to decode directions response: {0}")]
    Decode(#[from] serde_json::Error),
}
