use super::PageProps;
use super::results::render_results;
use super::utils::{abort_handle, first_image_file, render_status, save_export};
use crate::api;
use gloo_file::File as GlooFile;
use shared::{
    HttpReply, SearchController, SearchRequest, SubmitError, Ticket, TransportError, export_match,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::{AbortController, HtmlInputElement};
use yew::prelude::*;

pub enum SearchMsg {
    FileChanged(Option<GlooFile>),
    Submit,
    Cancel,
    Resolved(Ticket, Result<HttpReply, TransportError>),
    Export(usize),
}

/// Probe image search with ranked, downloadable matches.
pub struct SearchPage {
    controller: SearchController<GlooFile>,
    abort: Option<AbortController>,
}

impl Component for SearchPage {
    type Message = SearchMsg;
    type Properties = PageProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            controller: SearchController::new(),
            abort: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            SearchMsg::FileChanged(file) => {
                self.controller.set_file(file);
                true
            }
            SearchMsg::Submit => match self.controller.submit() {
                Ok(request) => {
                    self.send_search_request(ctx, request);
                    true
                }
                Err(SubmitError::Busy) => false,
                Err(SubmitError::Invalid(_)) => true,
            },
            SearchMsg::Cancel => {
                if self.controller.cancel().is_none() {
                    return false;
                }
                if let Some(abort) = self.abort.take() {
                    abort.abort();
                }
                true
            }
            SearchMsg::Resolved(ticket, reply) => {
                if !self.controller.resolve(ticket, reply) {
                    return false;
                }
                self.abort = None;
                true
            }
            SearchMsg::Export(index) => {
                if let Some(found) = self.controller.matches().get(index) {
                    match export_match(found) {
                        Ok(file) => save_export(file),
                        Err(e) => log::warn!("Download of {} skipped: {}", found.filename, e),
                    }
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let submitting = self.controller.task().is_submitting();

        let on_file = link.callback(|e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            SearchMsg::FileChanged(first_image_file(input.files()))
        });

        html! {
            <div class="upload-form">
                <h2 class="title">{"Search for Similar Faces"}</h2>

                <div class="form-row">
                    <input
                        type="file"
                        accept="image/*"
                        class="file-input"
                        aria-label="Upload image to search for matching faces"
                        onchange={on_file}
                    />
                    <button
                        class="primary-btn"
                        disabled={submitting}
                        aria-label="Search for similar faces"
                        onclick={link.callback(|_| SearchMsg::Submit)}
                    >
                        { if submitting { "Searching..." } else { "Search" } }
                    </button>
                    if submitting {
                        <button class="secondary-btn" onclick={link.callback(|_| SearchMsg::Cancel)}>
                            {"Cancel"}
                        </button>
                    }
                </div>

                { render_status(self.controller.task()) }
                { render_results(self.controller.matches(), link) }
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let Some(abort) = self.abort.take() {
            abort.abort();
        }
    }
}

impl SearchPage {
    fn send_search_request(&mut self, ctx: &Context<Self>, request: SearchRequest<GlooFile>) {
        let (abort, signal) = abort_handle();
        self.abort = abort;

        let link = ctx.link().clone();
        let config = ctx.props().config.clone();

        spawn_local(async move {
            let reply = api::post_search(&config, &request, signal.as_ref()).await;
            let aborted = signal.as_ref().is_some_and(|s| s.aborted());
            if let Err(err) = &reply {
                if !aborted {
                    gloo_console::error!(format!("Search error: {}", err));
                }
            }
            link.send_message(SearchMsg::Resolved(request.ticket, reply));
        });
    }
}
