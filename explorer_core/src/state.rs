use crate::feed::FetchError;
use crate::pipeline::sort_by_date_desc;
use crate::record::MediaRecord;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Populated,
    Empty,
    Errored(String),
}

/// Everything the page knows. Owned by whoever drives the UI and changed
/// only through [`AppState::apply`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    /// Always sorted newest first.
    pub records: Vec<MediaRecord>,
    pub load: LoadState,
    /// The record shown in the detail overlay, if one is open.
    pub modal: Option<MediaRecord>,
}

#[derive(Debug)]
pub enum Msg {
    FetchStarted,
    FetchSucceeded(Vec<MediaRecord>),
    FetchFailed(FetchError),
    /// A card was activated; carries the card's index into `records`.
    SelectRecord(usize),
    CloseModal,
}

impl AppState {
    pub fn apply(&mut self, msg: Msg) {
        match msg {
            Msg::FetchStarted => {
                self.load = LoadState::Loading;
            }
            Msg::FetchSucceeded(records) => {
                self.records = sort_by_date_desc(records);
                self.load = if self.records.is_empty() {
                    LoadState::Empty
                } else {
                    LoadState::Populated
                };
                log::info!("Loaded {} records", self.records.len());
            }
            Msg::FetchFailed(err) => {
                log::error!("Feed fetch failed: {err}");
                self.load = LoadState::Errored(err.to_string());
            }
            Msg::SelectRecord(index) => match self.records.get(index) {
                Some(record) => {
                    log::debug!("Opening details for {}", record.display_title());
                    self.modal = Some(record.clone());
                }
                None => log::warn!("Ignoring selection of unknown record {index}"),
            },
            Msg::CloseModal => {
                self.modal = None;
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.load == LoadState::Loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::MediaType;

    fn record(title: &str, date: &str) -> MediaRecord {
        MediaRecord {
            title: Some(title.to_string()),
            date: Some(date.to_string()),
            media_type: MediaType::Image,
            url: Some(format!("{title}.jpg")),
            ..Default::default()
        }
    }

    #[test]
    fn starts_idle_and_empty() {
        let state = AppState::default();
        assert_eq!(state.load, LoadState::Idle);
        assert!(state.records.is_empty());
        assert!(state.modal.is_none());
    }

    #[test]
    fn successful_fetch_sorts_and_populates() {
        let mut state = AppState::default();
        state.apply(Msg::FetchStarted);
        assert!(state.is_loading());

        state.apply(Msg::FetchSucceeded(vec![record("a", "2024-01-01"), record("b", "2024-05-05")]));
        assert_eq!(state.load, LoadState::Populated);
        assert_eq!(state.records[0].display_title(), "b");
    }

    #[test]
    fn zero_records_is_empty_state() {
        let mut state = AppState::default();
        state.apply(Msg::FetchStarted);
        state.apply(Msg::FetchSucceeded(Vec::new()));
        assert_eq!(state.load, LoadState::Empty);
    }

    #[test]
    fn failure_keeps_message_and_prior_records() {
        let mut state = AppState::default();
        state.apply(Msg::FetchSucceeded(vec![record("kept", "2024-01-01")]));
        state.apply(Msg::FetchStarted);
        state.apply(Msg::FetchFailed(FetchError::Network("Failed to fetch".into())));

        assert_eq!(state.load, LoadState::Errored("Failed to fetch".into()));
        assert_eq!(state.records.len(), 1);
    }

    #[test]
    fn refetch_after_error_recovers() {
        let mut state = AppState::default();
        state.apply(Msg::FetchStarted);
        state.apply(Msg::FetchFailed(FetchError::Status { status: 503 }));
        state.apply(Msg::FetchStarted);
        state.apply(Msg::FetchSucceeded(vec![record("back", "2024-01-01")]));

        assert_eq!(state.load, LoadState::Populated);
    }

    #[test]
    fn select_and_close_modal() {
        let mut state = AppState::default();
        state.apply(Msg::FetchSucceeded(vec![record("a", "2024-01-01"), record("b", "2024-02-02")]));

        state.apply(Msg::SelectRecord(1));
        assert_eq!(state.modal.as_ref().map(MediaRecord::display_title), Some("a"));

        state.apply(Msg::SelectRecord(0));
        assert_eq!(state.modal.as_ref().map(MediaRecord::display_title), Some("b"));

        state.apply(Msg::CloseModal);
        assert!(state.modal.is_none());
    }

    #[test]
    fn unknown_selection_is_ignored() {
        let mut state = AppState::default();
        state.apply(Msg::FetchSucceeded(vec![record("a", "2024-01-01")]));
        state.apply(Msg::SelectRecord(7));
        assert!(state.modal.is_none());
    }

    #[test]
    fn open_modal_survives_refetch() {
        let mut state = AppState::default();
        state.apply(Msg::FetchSucceeded(vec![record("viewing", "2024-01-01")]));
        state.apply(Msg::SelectRecord(0));

        state.apply(Msg::FetchStarted);
        state.apply(Msg::FetchSucceeded(vec![record("other", "2025-01-01")]));

        assert_eq!(state.modal.as_ref().map(MediaRecord::display_title), Some("viewing"));
    }

    #[test]
    fn overlapping_fetches_last_completion_wins() {
        let mut state = AppState::default();
        state.apply(Msg::FetchStarted);
        state.apply(Msg::FetchStarted);

        state.apply(Msg::FetchSucceeded(vec![record("second", "2024-02-02")]));
        state.apply(Msg::FetchSucceeded(vec![record("first", "2024-01-01"), record("x", "2024-01-02")]));

        let titles: Vec<_> = state.records.iter().map(MediaRecord::display_title).collect();
        assert_eq!(titles, vec!["x", "first"]);
    }
}
