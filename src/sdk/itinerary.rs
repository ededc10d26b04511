use std::io::{self, Write};

use super::directions::model::DirectionsResult;
use super::markup::strip_markup;

/// Writes the step-by-step itinerary for a directions result.
///
/// Format: an `origin -> destination` header, then per route and leg the
/// leg's distance text followed by its 1-indexed steps, with a blank line
/// closing each route. A result with zero routes prints only the header —
/// the service saying "ZERO_RESULTS" is an answer, not a failure.
pub fn write_itinerary(
    out: &mut impl Write,
    origin: &str,
    destination: &str,
    directions: &DirectionsResult,
) -> io::Result<()> {
    writeln!(out, "{} -> {}\n", origin, destination)?;
    for route in &directions.routes {
        for leg in &route.legs {
            writeln!(out, "{}", leg.distance.text)?;
            for (i, step) in leg.steps.iter().enumerate() {
                writeln!(
                    out,
                    "{} - {} ({})",
                    i + 1,
                    strip_markup(&step.html_instructions),
                    step.duration.text
                )?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}
