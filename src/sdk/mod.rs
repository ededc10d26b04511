pub mod config;
pub mod directions;
pub mod itinerary;
pub mod markup;
pub mod util;

pub use config::DirectionsConfig;
pub use directions::{DirectionsClient, DirectionsError, DirectionsResult};
pub use itinerary::write_itinerary;
pub use markup::strip_markup;
