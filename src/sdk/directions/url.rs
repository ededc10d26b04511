use url::Url;

use super::error::DirectionsError;

/// The keyless legacy endpoint of the directions service.
pub const DEFAULT_BASE_URL: &str = "http://maps.googleapis.com/maps/api/directions/json";

/// The legacy API requires this flag on every request.
const SENSOR_PARAM: (&str, &str) = ("sensor", "false");

/// Builds the request URL for a directions query.
///
/// Origin and destination are free-form text; percent-encoding of spaces,
/// unicode and reserved characters is handled by the `Url` query serializer.
pub fn build_directions_url(
    base: &str,
    origin: &str,
    destination: &str,
) -> Result<Url, DirectionsError> {
    let mut url = Url::parse(base)?;
    url.query_pairs_mut()
        .append_pair("origin", origin)
        .append_pair("destination", destination)
        .append_pair(SENSOR_PARAM.0, SENSOR_PARAM.1);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query_pairs(url: &Url) -> Vec<(String, String)> {
        url.query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn builds_query_from_inputs() {
        let url = build_directions_url(DEFAULT_BASE_URL, "San Francisco, CA", "Mountain View, CA")
            .unwrap();

        assert_eq!(url.host_str(), Some("maps.googleapis.com"));
        assert_eq!(url.path(), "/maps/api/directions/json");
        assert_eq!(
            query_pairs(&url),
            vec![
                ("origin".to_string(), "San Francisco, CA".to_string()),
                ("destination".to_string(), "Mountain View, CA".to_string()),
                ("sensor".to_string(), "false".to_string()),
            ]
        );
    }

    #[test]
    fn escapes_reserved_and_unicode_text() {
        let origin = "1 Main St & 2nd Ave #5";
        let destination = "Müllerstraße 12, Berlin";
        let url = build_directions_url(DEFAULT_BASE_URL, origin, destination).unwrap();

        // The raw query must not leak unescaped reserved characters: the only
        // ampersands left are the two pair separators, and the fragment
        // marker is escaped away.
        let raw = url.query().unwrap();
        assert_eq!(raw.matches('&').count(), 2);
        assert!(!raw.contains('#'));

        // Decoding the pairs recovers the inputs exactly.
        assert_eq!(
            query_pairs(&url),
            vec![
                ("origin".to_string(), origin.to_string()),
                ("destination".to_string(), destination.to_string()),
                ("sensor".to_string(), "false".to_string()),
            ]
        );
    }

    #[test]
    fn rejects_malformed_base() {
        let err = build_directions_url("not a url", "a", "b").unwrap_err();
        assert!(matches!(err, DirectionsError::MalformedUrl(_)));
    }
}
