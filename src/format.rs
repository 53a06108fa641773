//! Display formatting helpers for conversation records.
//!
//! All policy around dates, percentages, and the TTS endpoint URL lives
//! here so it can be tested with fixed inputs, independent of the UI.

use chrono::NaiveDateTime;

/// Render a backend timestamp for display: "Jan 5, 2024, 03:45 PM".
///
/// Absent or empty input yields "Unknown date". A string that does not
/// parse as a date-time is shown unchanged rather than as an error.
pub fn format_date(raw: Option<&str>) -> String {
    let Some(raw) = raw.filter(|s| !s.is_empty()) else {
        return "Unknown date".to_string();
    };
    match parse_datetime(raw) {
        Some(dt) => dt.format("%b %-d, %Y, %I:%M %p").to_string(),
        None => raw.to_string(),
    }
}

/// Parse the timestamp shapes the backend emits: RFC 3339 with offset, or
/// a naive ISO date-time (Python `isoformat()` without timezone).
fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt);
        }
    }
    None
}

/// Overall confidence badge text: 0.873 -> "87% confidence".
pub fn confidence_label(confidence: f64) -> String {
    format!("{:.0}% confidence", confidence * 100.0)
}

/// Vision analysis text: disease name, plus "(91.2%)" when the classifier
/// reported a confidence.
pub fn vision_label(disease: &str, confidence: Option<f64>) -> String {
    match confidence {
        Some(c) => format!("{} ({:.1}%)", disease, c * 100.0),
        None => disease.to_string(),
    }
}

/// Map a language code to its display name. The backend only ever tags
/// Bengali ("bn") or English; anything else falls back to English.
pub fn language_label(code: &str) -> &'static str {
    if code == "bn" { "Bengali" } else { "English" }
}

/// First hourly temperature, e.g. "Temperature: 25.3°C".
pub fn temperature_label(celsius: f64) -> String {
    format!("Temperature: {}°C", celsius)
}

/// GPS coordinates rounded to 4 decimal places: "23.4568, 90.1235".
pub fn gps_label(lat: f64, lon: f64) -> String {
    format!("{:.4}, {:.4}", lat, lon)
}

/// Build the audio URL for a TTS file path against the configured backend:
/// `<base>/api/get_tts?path=<url-encoded path>`.
///
/// Returns None when the base URL itself is unparseable, which suppresses
/// the audio control rather than producing a broken link.
pub fn tts_url(backend_url: &str, tts_path: &str) -> Option<String> {
    let mut url = reqwest::Url::parse(backend_url).ok()?;
    url.set_path("api/get_tts");
    url.query_pairs_mut().clear().append_pair("path", tts_path);
    Some(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_absent() {
        assert_eq!(format_date(None), "Unknown date");
        assert_eq!(format_date(Some("")), "Unknown date");
    }

    #[test]
    fn test_format_date_iso() {
        // Python isoformat() without timezone, as the backend serializes it
        assert_eq!(
            format_date(Some("2024-01-05T15:45:30.123456")),
            "Jan 5, 2024, 03:45 PM"
        );
        assert_eq!(format_date(Some("2024-01-05T15:45:30")), "Jan 5, 2024, 03:45 PM");
        assert_eq!(format_date(Some("2024-11-23 09:05:00")), "Nov 23, 2024, 09:05 AM");
    }

    #[test]
    fn test_format_date_rfc3339() {
        assert_eq!(
            format_date(Some("2024-01-05T15:45:30+06:00")),
            "Jan 5, 2024, 03:45 PM"
        );
    }

    #[test]
    fn test_format_date_parse_failure_shows_raw() {
        assert_eq!(format_date(Some("not-a-date")), "not-a-date");
        assert_eq!(format_date(Some("2024-13-45")), "2024-13-45");
    }

    #[test]
    fn test_confidence_label() {
        assert_eq!(confidence_label(0.873), "87% confidence");
        assert_eq!(confidence_label(0.0), "0% confidence");
        assert_eq!(confidence_label(1.0), "100% confidence");
    }

    #[test]
    fn test_vision_label() {
        assert_eq!(
            vision_label("Leaf Blight", Some(0.9123)),
            "Leaf Blight (91.2%)"
        );
        assert_eq!(vision_label("Leaf Blight", None), "Leaf Blight");
    }

    #[test]
    fn test_language_label() {
        assert_eq!(language_label("bn"), "Bengali");
        assert_eq!(language_label("en"), "English");
        assert_eq!(language_label("hi"), "English");
    }

    #[test]
    fn test_temperature_label() {
        assert_eq!(temperature_label(25.3), "Temperature: 25.3°C");
        assert_eq!(temperature_label(25.0), "Temperature: 25°C");
    }

    #[test]
    fn test_gps_label() {
        assert_eq!(gps_label(23.456789, 90.123456), "23.4568, 90.1235");
    }

    #[test]
    fn test_tts_url_encodes_path() {
        let url = tts_url("http://localhost:8000", "/tmp/tts/resp_42.mp3").unwrap();
        assert_eq!(
            url,
            "http://localhost:8000/api/get_tts?path=%2Ftmp%2Ftts%2Fresp_42.mp3"
        );
    }

    #[test]
    fn test_tts_url_bad_base() {
        assert_eq!(tts_url("not a url", "/tmp/a.mp3"), None);
    }
}
