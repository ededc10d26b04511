pub mod client;
pub mod error;
pub mod model;
pub mod url;

pub use client::DirectionsClient;
pub use error::DirectionsError;
pub use model::{decode_directions, DirectionsResult};
pub use url::{build_directions_url, DEFAULT_BASE_URL};
