pub mod config;
pub mod feed;
pub mod pipeline;
pub mod record;
pub mod state;
pub mod view;

use thiserror::Error;

pub use feed::{fetch_feed, parse_feed, FeedResponse, FeedSource, FetchError};
pub use record::{MediaRecord, MediaType};
pub use state::{AppState, LoadState, Msg};


/// Turns a piece of the view tree into whatever the host platform displays.
pub trait CanRender<C, Ctx> {
    type Target;

    fn render(
        &self,
        component: &C,
        ctx: &Ctx,
    ) -> Result<Self::Target, RenderError>;
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("Missing host element: {0}")]
    MissingHost(&'static str),
    #[error("DOM operation failed: {0}")]
    Dom(String),
}
