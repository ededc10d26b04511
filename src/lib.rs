pub mod sdk;

pub use sdk::config::DirectionsConfig;
pub use sdk::directions::{DirectionsClient, DirectionsError, DirectionsResult};
pub use sdk::itinerary::write_itinerary;
pub use sdk::markup::strip_markup;
