//! Conversation record types as served by the FarmAssist backend.
//!
//! Every field the backend may omit is an `Option`; the accessors below
//! additionally treat empty strings as absent, so the UI can key each
//! display block off a single `Option` without probing nested fields.

use serde::{Deserialize, Serialize};

/// One logged user interaction (voice or text query) with optional media,
/// AI-derived metadata, and an audio response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConversationRecord {
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    /// Overall response confidence, 0.0 - 1.0.
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub transcript: Option<String>,
    #[serde(default)]
    pub media_url: Option<String>,
    /// Server-side path of the generated TTS audio file.
    #[serde(default)]
    pub tts_path: Option<String>,
    #[serde(default)]
    pub metadata: Option<Metadata>,
}

/// Auxiliary structured data attached to a conversation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub crop: Option<String>,
    /// Language code, e.g. "bn" or "en".
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub vision_result: Option<VisionResult>,
    #[serde(default)]
    pub weather_forecast: Option<WeatherForecast>,
    #[serde(default)]
    pub gps: Option<Gps>,
}

/// Crop disease classification produced by the vision model.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VisionResult {
    #[serde(default)]
    pub disease: Option<String>,
    /// Classifier confidence, 0.0 - 1.0.
    #[serde(default)]
    pub confidence: Option<f64>,
}

/// Weather snapshot attached at query time (Open-Meteo style shape).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherForecast {
    #[serde(default)]
    pub hourly: Option<HourlyForecast>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HourlyForecast {
    #[serde(default)]
    pub temperature_2m: Vec<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Gps {
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
}

fn non_empty(s: &Option<String>) -> Option<&str> {
    s.as_deref().filter(|s| !s.is_empty())
}

impl ConversationRecord {
    /// Transcript text, if any was captured.
    pub fn transcript(&self) -> Option<&str> {
        non_empty(&self.transcript)
    }

    pub fn media_url(&self) -> Option<&str> {
        non_empty(&self.media_url)
    }

    pub fn tts_path(&self) -> Option<&str> {
        non_empty(&self.tts_path)
    }

    pub fn crop(&self) -> Option<&str> {
        self.metadata.as_ref().and_then(|m| non_empty(&m.crop))
    }

    pub fn language(&self) -> Option<&str> {
        self.metadata.as_ref().and_then(|m| non_empty(&m.language))
    }

    /// Disease name plus optional classifier confidence. The block renders
    /// only when a disease name is present.
    pub fn vision(&self) -> Option<(&str, Option<f64>)> {
        let vision = self.metadata.as_ref()?.vision_result.as_ref()?;
        let disease = vision.disease.as_deref().filter(|d| !d.is_empty())?;
        Some((disease, vision.confidence))
    }

    /// First hourly temperature reading, if the forecast carries one.
    pub fn first_temperature(&self) -> Option<f64> {
        self.metadata
            .as_ref()?
            .weather_forecast
            .as_ref()?
            .hourly
            .as_ref()?
            .temperature_2m
            .first()
            .copied()
    }

    /// GPS coordinates; requires both latitude and longitude.
    pub fn gps_coords(&self) -> Option<(f64, f64)> {
        let gps = self.metadata.as_ref()?.gps.as_ref()?;
        gps.lat.zip(gps.lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_record() -> ConversationRecord {
        serde_json::from_str(r#"{"id": 7}"#).unwrap()
    }

    #[test]
    fn test_all_fields_default_to_absent() {
        let rec = bare_record();
        assert_eq!(rec.id, 7);
        assert!(rec.transcript().is_none());
        assert!(rec.media_url().is_none());
        assert!(rec.tts_path().is_none());
        assert!(rec.crop().is_none());
        assert!(rec.language().is_none());
        assert!(rec.vision().is_none());
        assert!(rec.first_temperature().is_none());
        assert!(rec.gps_coords().is_none());
    }

    #[test]
    fn test_empty_strings_treated_as_absent() {
        let rec: ConversationRecord = serde_json::from_str(
            r#"{"id": 1, "transcript": "", "media_url": "", "tts_path": "",
                "metadata": {"crop": "", "language": ""}}"#,
        )
        .unwrap();
        assert!(rec.transcript().is_none());
        assert!(rec.media_url().is_none());
        assert!(rec.tts_path().is_none());
        assert!(rec.crop().is_none());
        assert!(rec.language().is_none());
    }

    #[test]
    fn test_vision_requires_disease() {
        let rec: ConversationRecord = serde_json::from_str(
            r#"{"id": 1, "metadata": {"vision_result": {"confidence": 0.9}}}"#,
        )
        .unwrap();
        assert!(rec.vision().is_none());

        let rec: ConversationRecord = serde_json::from_str(
            r#"{"id": 1, "metadata": {"vision_result": {"disease": "Leaf Blight"}}}"#,
        )
        .unwrap();
        assert_eq!(rec.vision(), Some(("Leaf Blight", None)));
    }

    #[test]
    fn test_first_temperature() {
        let rec: ConversationRecord = serde_json::from_str(
            r#"{"id": 1, "metadata": {"weather_forecast":
                {"hourly": {"temperature_2m": [25.3, 26.1]}}}}"#,
        )
        .unwrap();
        assert_eq!(rec.first_temperature(), Some(25.3));

        let rec: ConversationRecord = serde_json::from_str(
            r#"{"id": 1, "metadata": {"weather_forecast": {"hourly": {"temperature_2m": []}}}}"#,
        )
        .unwrap();
        assert_eq!(rec.first_temperature(), None);
    }

    #[test]
    fn test_gps_requires_both_coordinates() {
        let rec: ConversationRecord = serde_json::from_str(
            r#"{"id": 1, "metadata": {"gps": {"lat": 23.456789}}}"#,
        )
        .unwrap();
        assert_eq!(rec.gps_coords(), None);

        let rec: ConversationRecord = serde_json::from_str(
            r#"{"id": 1, "metadata": {"gps": {"lat": 23.456789, "lon": 90.123456}}}"#,
        )
        .unwrap();
        assert_eq!(rec.gps_coords(), Some((23.456789, 90.123456)));
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let rec: ConversationRecord = serde_json::from_str(
            r#"{"id": 3, "reply_text": "ignored", "metadata": {"extra": {"deep": true}}}"#,
        )
        .unwrap();
        assert_eq!(rec.id, 3);
        assert!(rec.metadata.is_some());
    }
}
