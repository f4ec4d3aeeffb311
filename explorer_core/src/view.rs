//! Host-independent description of what the page shows. Renderers turn these
//! values into DOM nodes; nothing in here touches the browser.

use crate::config::FETCH_BUTTON_LABEL;
use crate::pipeline::{display_image, modal_media, ModalMedia, IMAGE_ALT_FALLBACK};
use crate::record::MediaRecord;
use crate::state::{AppState, LoadState};

pub const PLAY_BADGE: &str = "▶";
pub const CLOSE_GLYPH: &str = "✕";

pub const LOADING_MESSAGE: &str = "Fetching the cosmos…";
pub const ERROR_MESSAGE: &str = "Error loading data.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderIcon {
    Rocket,
    Telescope,
    Wrench,
}

impl PlaceholderIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            PlaceholderIcon::Rocket => "🚀",
            PlaceholderIcon::Telescope => "🔭",
            PlaceholderIcon::Wrench => "🛠️",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderView {
    pub icon: PlaceholderIcon,
    pub message: String,
    pub detail: Option<String>,
}

impl PlaceholderView {
    pub fn loading() -> Self {
        Self {
            icon: PlaceholderIcon::Rocket,
            message: LOADING_MESSAGE.to_string(),
            detail: None,
        }
    }

    pub fn call_to_action() -> Self {
        Self {
            icon: PlaceholderIcon::Telescope,
            message: format!("Click \"{FETCH_BUTTON_LABEL}\" to explore the cosmos!"),
            detail: None,
        }
    }

    pub fn error(reason: &str) -> Self {
        Self {
            icon: PlaceholderIcon::Wrench,
            message: ERROR_MESSAGE.to_string(),
            detail: Some(reason.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardMedia {
    pub src: String,
    pub alt: String,
    pub play_badge: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    /// Position in the record collection, sent back on activation.
    pub index: usize,
    pub title: String,
    pub date: String,
    pub aria_label: String,
    pub media: Option<CardMedia>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalView {
    pub title: String,
    pub date: String,
    pub media: Option<ModalMedia>,
    pub explanation: String,
}

/// Where inside the open overlay a click landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalClick {
    /// The dimmed area around the dialog.
    Backdrop,
    /// Anywhere inside the dialog box itself.
    Dialog,
    CloseButton,
}

impl ModalView {
    pub fn closes_on(click: ModalClick) -> bool {
        match click {
            ModalClick::Backdrop | ModalClick::CloseButton => true,
            ModalClick::Dialog => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryView {
    Cards(Vec<CardView>),
    Placeholder(PlaceholderView),
}

pub fn card_view(index: usize, record: &MediaRecord) -> CardView {
    let title = record.display_title();
    let date = record.display_date();

    let aria_label = match &record.date {
        Some(date) => format!("Open details for {title} ({date})"),
        None => format!("Open details for {title}"),
    };

    let media = display_image(record).map(|src| {
        let is_video = record.is_video();
        let alt = if is_video {
            format!("{title} (video thumbnail)")
        } else {
            record.title.clone().unwrap_or_else(|| IMAGE_ALT_FALLBACK.to_string())
        };
        CardMedia {
            src: src.to_string(),
            alt,
            play_badge: is_video,
        }
    });

    CardView {
        index,
        title: title.to_string(),
        date: date.to_string(),
        aria_label,
        media,
    }
}

pub fn modal_view(record: &MediaRecord) -> ModalView {
    ModalView {
        title: record.display_title().to_string(),
        date: record.display_date().to_string(),
        media: modal_media(record),
        explanation: record.display_explanation().to_string(),
    }
}

/// What the gallery container holds for the current state. Always a full
/// replacement of the previous contents.
pub fn gallery_view(state: &AppState) -> GalleryView {
    match &state.load {
        LoadState::Loading => GalleryView::Placeholder(PlaceholderView::loading()),
        LoadState::Errored(reason) => GalleryView::Placeholder(PlaceholderView::error(reason)),
        LoadState::Idle | LoadState::Empty => GalleryView::Placeholder(PlaceholderView::call_to_action()),
        LoadState::Populated => GalleryView::Cards(
            state
                .records
                .iter()
                .enumerate()
                .map(|(index, record)| card_view(index, record))
                .collect(),
        ),
    }
}
