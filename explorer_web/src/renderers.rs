use explorer_core::pipeline::ModalMedia;
use explorer_core::view::{
    CardView, GalleryView, ModalClick, ModalView, PlaceholderView, CLOSE_GLYPH, PLAY_BADGE,
};
use explorer_core::{CanRender, RenderError};
use yew::prelude::*;

use crate::host;

/// Callbacks the rendered nodes dispatch into.
pub struct YewRenderContext {
    pub on_select: Callback<usize>,
    pub on_close: Callback<()>,
}

pub struct YewRenderer;

impl CanRender<PlaceholderView, YewRenderContext> for YewRenderer {
    type Target = Html;

    fn render(&self, placeholder: &PlaceholderView, _ctx: &YewRenderContext) -> Result<Html, RenderError> {
        Ok(html! {
            <div class="placeholder">
                <div class="placeholder-icon">{ placeholder.icon.glyph() }</div>
                <p>
                    { &placeholder.message }
                    if let Some(detail) = &placeholder.detail {
                        <br />
                        <small>{ detail }</small>
                    }
                </p>
            </div>
        })
    }
}

impl CanRender<CardView, YewRenderContext> for YewRenderer {
    type Target = Html;

    fn render(&self, card: &CardView, ctx: &YewRenderContext) -> Result<Html, RenderError> {
        let index = card.index;

        let onclick = {
            let on_select = ctx.on_select.clone();
            Callback::from(move |_: MouseEvent| on_select.emit(index))
        };

        // Cards are role="button", so they answer to the same keys a button does.
        let onkeydown = {
            let on_select = ctx.on_select.clone();
            Callback::from(move |e: KeyboardEvent| {
                if e.key() == "Enter" || e.key() == " " {
                    e.prevent_default();
                    on_select.emit(index);
                }
            })
        };

        Ok(html! {
            <article
                class="card"
                tabindex="0"
                role="button"
                aria-label={card.aria_label.clone()}
                {onclick}
                {onkeydown}
            >
                <div class="card-media">
                    if let Some(media) = &card.media {
                        <img src={media.src.clone()} alt={media.alt.clone()} loading="lazy" />
                        if media.play_badge {
                            <div class="play-badge">{ PLAY_BADGE }</div>
                        }
                    }
                </div>
                <div class="card-info">
                    <h3>{ &card.title }</h3>
                    <p class="card-meta">{ &card.date }</p>
                </div>
            </article>
        })
    }
}

impl CanRender<GalleryView, YewRenderContext> for YewRenderer {
    type Target = Html;

    fn render(&self, gallery: &GalleryView, ctx: &YewRenderContext) -> Result<Html, RenderError> {
        match gallery {
            GalleryView::Placeholder(placeholder) => {
                <Self as CanRender<PlaceholderView, YewRenderContext>>::render(self, placeholder, ctx)
            }
            GalleryView::Cards(cards) => {
                let cards = cards
                    .iter()
                    .map(|card| <Self as CanRender<CardView, YewRenderContext>>::render(self, card, ctx))
                    .collect::<Result<Vec<Html>, RenderError>>()?;

                Ok(html! { <>{ for cards }</> })
            }
        }
    }
}

impl CanRender<ModalView, YewRenderContext> for YewRenderer {
    type Target = Html;

    /// The overlay is portalled into `document.body`; dropping it from the
    /// tree removes it from the page.
    fn render(&self, modal: &ModalView, ctx: &YewRenderContext) -> Result<Html, RenderError> {
        let body = host::body()?;

        let on_backdrop = modal_click(ctx, ModalClick::Backdrop);
        let on_close_button = modal_click(ctx, ModalClick::CloseButton);

        // Events are delegated from the app root, so the dialog has to stop
        // its clicks before they bubble up to the backdrop handler.
        let on_dialog = {
            let on_close = ctx.on_close.clone();
            Callback::from(move |e: MouseEvent| {
                e.stop_propagation();
                if ModalView::closes_on(ModalClick::Dialog) {
                    on_close.emit(());
                }
            })
        };

        let media = match &modal.media {
            Some(ModalMedia::Image { src, alt }) => html! {
                <img src={src.clone()} alt={alt.clone()} />
            },
            Some(ModalMedia::Video { src }) => html! {
                <iframe class="modal-video" src={src.clone()} allowfullscreen={true}></iframe>
            },
            None => html! {},
        };

        let overlay = html! {
            <div class="modal-overlay" onclick={on_backdrop}>
                <div class="modal" onclick={on_dialog}>
                    <header class="modal-header">
                        <h2>{ &modal.title }</h2>
                        <div class="modal-date">{ &modal.date }</div>
                        <button class="modal-close" aria-label="Close" onclick={on_close_button}>
                            { CLOSE_GLYPH }
                        </button>
                    </header>
                    <div class="modal-body">
                        { media }
                        <p class="modal-explanation">{ &modal.explanation }</p>
                    </div>
                </div>
            </div>
        };

        Ok(yew::create_portal(overlay, body.into()))
    }
}

fn modal_click(ctx: &YewRenderContext, click: ModalClick) -> Callback<MouseEvent> {
    let on_close = ctx.on_close.clone();
    Callback::from(move |_: MouseEvent| {
        if ModalView::closes_on(click) {
            on_close.emit(());
        }
    })
}
