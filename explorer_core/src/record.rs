use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub const UNTITLED: &str = "Untitled";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MediaType {
    Image,
    Video,
    /// Anything else the feed sends, kept verbatim.
    Other(String),
    #[default]
    Missing,
}

impl From<Option<String>> for MediaType {
    fn from(raw: Option<String>) -> Self {
        match raw.as_deref() {
            Some("image") => MediaType::Image,
            Some("video") => MediaType::Video,
            Some(other) => MediaType::Other(other.to_string()),
            None => MediaType::Missing,
        }
    }
}

/// One feed entry. Every field is optional because the feed is not ours.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct MediaRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient_media_type")]
    pub media_type: MediaType,
    #[serde(default, deserialize_with = "lenient_string")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub thumbnail_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub hdurl: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub explanation: Option<String>,
}

impl MediaRecord {
    /// Decodes a single feed element. Elements that aren't objects still
    /// produce a (blank) record so every array entry gets a card.
    pub fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_else(|err| {
            log::warn!("Feed entry is not a record, rendering it blank: {err}");
            MediaRecord::default()
        })
    }

    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(UNTITLED)
    }

    pub fn display_date(&self) -> &str {
        self.date.as_deref().unwrap_or("")
    }

    pub fn display_explanation(&self) -> &str {
        self.explanation.as_deref().unwrap_or("")
    }

    /// Ordering key. Missing dates compare as the empty string.
    pub fn date_key(&self) -> &str {
        self.display_date()
    }

    pub fn is_video(&self) -> bool {
        self.media_type == MediaType::Video
    }
}

// Falsy values (empty string, zero, false, null) count as absent.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        Value::Bool(false) | Value::Null | Value::Array(_) | Value::Object(_) => None,
    })
}

fn lenient_media_type<'de, D>(deserializer: D) -> Result<MediaType, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_string(deserializer).map(MediaType::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_full_image_record() {
        let record = MediaRecord::from_value(json!({
            "title": "Pillars of Creation",
            "date": "2024-05-01",
            "media_type": "image",
            "url": "https://example.com/small.jpg",
            "hdurl": "https://example.com/large.jpg",
            "explanation": "Columns of gas and dust."
        }));

        assert_eq!(record.title.as_deref(), Some("Pillars of Creation"));
        assert_eq!(record.date.as_deref(), Some("2024-05-01"));
        assert_eq!(record.media_type, MediaType::Image);
        assert_eq!(record.hdurl.as_deref(), Some("https://example.com/large.jpg"));
        assert_eq!(record.display_explanation(), "Columns of gas and dust.");
    }

    #[test]
    fn missing_fields_fall_back_to_display_defaults() {
        let record = MediaRecord::from_value(json!({ "media_type": "video" }));

        assert_eq!(record.media_type, MediaType::Video);
        assert_eq!(record.display_title(), "Untitled");
        assert_eq!(record.display_date(), "");
        assert_eq!(record.display_explanation(), "");
        assert!(record.thumbnail_url.is_none());
    }

    #[test]
    fn empty_and_odd_field_values_are_tolerated() {
        let record = MediaRecord::from_value(json!({
            "title": "",
            "date": 20240501,
            "media_type": null,
            "url": ["not", "a", "url"],
            "hdurl": { "nested": true },
            "explanation": false
        }));

        assert_eq!(record.title, None);
        assert_eq!(record.date.as_deref(), Some("20240501"));
        assert_eq!(record.media_type, MediaType::Missing);
        assert_eq!(record.url, None);
        assert_eq!(record.hdurl, None);
        assert_eq!(record.explanation, None);
    }

    #[test]
    fn zero_counts_as_missing() {
        let record = MediaRecord::from_value(json!({
            "title": 0,
            "date": 0.0,
            "explanation": 7
        }));

        assert_eq!(record.display_title(), "Untitled");
        assert_eq!(record.date, None);
        assert_eq!(record.display_explanation(), "7");
    }

    #[test]
    fn unknown_media_type_is_kept_verbatim() {
        let record = MediaRecord::from_value(json!({ "media_type": "audio" }));
        assert_eq!(record.media_type, MediaType::Other("audio".to_string()));
        assert!(!record.is_video());
    }

    #[test]
    fn non_object_entry_becomes_blank_record() {
        assert_eq!(MediaRecord::from_value(json!(42)), MediaRecord::default());
        assert_eq!(MediaRecord::from_value(json!("text")), MediaRecord::default());
    }
}
