use crate::record::{MediaRecord, MediaType};

pub const IMAGE_ALT_FALLBACK: &str = "Astronomy image";

/// Full-size media shown in the detail overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalMedia {
    Image { src: String, alt: String },
    Video { src: String },
}

/// Newest first by plain string comparison of `date`. The sort is stable, so
/// entries sharing a date keep their feed order.
pub fn sort_by_date_desc(mut records: Vec<MediaRecord>) -> Vec<MediaRecord> {
    records.sort_by(|a, b| b.date_key().cmp(a.date_key()));
    records
}

/// The small image shown on a gallery card.
pub fn display_image(record: &MediaRecord) -> Option<&str> {
    match record.media_type {
        MediaType::Image => record.url.as_deref(),
        MediaType::Video => record.thumbnail_url.as_deref(),
        MediaType::Other(_) | MediaType::Missing => None,
    }
}

pub fn modal_media(record: &MediaRecord) -> Option<ModalMedia> {
    match record.media_type {
        MediaType::Image => {
            let src = record.hdurl.as_deref().or(record.url.as_deref())?;
            Some(ModalMedia::Image {
                src: src.to_string(),
                alt: record.title.clone().unwrap_or_else(|| IMAGE_ALT_FALLBACK.to_string()),
            })
        }
        MediaType::Video => record
            .url
            .as_ref()
            .map(|src| ModalMedia::Video { src: src.clone() }),
        MediaType::Other(_) | MediaType::Missing => None,
    }
}
