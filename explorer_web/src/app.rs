use std::rc::Rc;

use explorer_core::config::{feed_url, FETCH_BUTTON_LABEL};
use explorer_core::view::{gallery_view, modal_view};
use explorer_core::{fetch_feed, AppState, CanRender, Msg, RenderError};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::fetcher::GlooFeedSource;
use crate::renderers::{YewRenderContext, YewRenderer};

#[derive(Default)]
pub struct GalleryStore(AppState);

impl Reducible for GalleryStore {
    type Action = Msg;

    fn reduce(self: Rc<Self>, msg: Msg) -> Rc<Self> {
        let mut state = self.0.clone();
        state.apply(msg);
        Rc::new(Self(state))
    }
}

fn render_or_log(result: Result<Html, RenderError>) -> Html {
    result.unwrap_or_else(|err| {
        log::error!("Render failed: {err}");
        html! {}
    })
}

#[function_component(App)]
pub fn app() -> Html {
    let store = use_reducer(GalleryStore::default);

    // No guard against a second click while a fetch is in flight; whichever
    // response lands last is what stays on screen.
    let on_fetch = {
        let dispatcher = store.dispatcher();
        Callback::from(move |_: MouseEvent| {
            dispatcher.dispatch(Msg::FetchStarted);

            let dispatcher = dispatcher.clone();
            spawn_local(async move {
                let msg = match fetch_feed(&GlooFeedSource, feed_url()).await {
                    Ok(records) => Msg::FetchSucceeded(records),
                    Err(err) => Msg::FetchFailed(err),
                };
                dispatcher.dispatch(msg);
            });
        })
    };

    let ctx = YewRenderContext {
        on_select: {
            let dispatcher = store.dispatcher();
            Callback::from(move |index: usize| dispatcher.dispatch(Msg::SelectRecord(index)))
        },
        on_close: {
            let dispatcher = store.dispatcher();
            Callback::from(move |_| dispatcher.dispatch(Msg::CloseModal))
        },
    };

    let renderer = YewRenderer;
    let state = &store.0;

    let gallery = render_or_log(renderer.render(&gallery_view(state), &ctx));
    let modal = match &state.modal {
        Some(record) => render_or_log(renderer.render(&modal_view(record), &ctx)),
        None => html! {},
    };

    html! {
        <>
            <header class="site-header">
                <h1>{ "Space Explorer" }</h1>
                <button id="getImageBtn" class="fetch-button" onclick={on_fetch}>
                    { FETCH_BUTTON_LABEL }
                </button>
            </header>

            <main>
                <section id="gallery" class="gallery" aria-busy={state.is_loading().to_string()}>
                    { gallery }
                </section>
            </main>

            { modal }
        </>
    }
}
