use super::PageProps;
use super::utils::{abort_handle, first_image_file, render_status};
use crate::api;
use gloo_file::File as GlooFile;
use shared::{
    EnrollmentController, EnrollmentRequest, HttpReply, Phase, SubmitError, Ticket, TransportError,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::{AbortController, HtmlInputElement};
use yew::prelude::*;

pub enum EnrollMsg {
    NameChanged(String),
    FileChanged(Option<GlooFile>),
    Submit,
    Cancel,
    Resolved(Ticket, Result<HttpReply, TransportError>),
}

/// Admin page: registers a labeled face with the backend.
pub struct EnrollPage {
    controller: EnrollmentController<GlooFile>,
    abort: Option<AbortController>,
    file_input: NodeRef,
}

impl Component for EnrollPage {
    type Message = EnrollMsg;
    type Properties = PageProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            controller: EnrollmentController::new(),
            abort: None,
            file_input: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            EnrollMsg::NameChanged(name) => {
                self.controller.set_name(name);
                true
            }
            EnrollMsg::FileChanged(file) => {
                self.controller.set_file(file);
                true
            }
            EnrollMsg::Submit => match self.controller.submit() {
                Ok(request) => {
                    self.send_enrollment_request(ctx, request);
                    true
                }
                Err(SubmitError::Busy) => false,
                Err(SubmitError::Invalid(_)) => true,
            },
            EnrollMsg::Cancel => {
                if self.controller.cancel().is_none() {
                    return false;
                }
                if let Some(abort) = self.abort.take() {
                    abort.abort();
                }
                true
            }
            EnrollMsg::Resolved(ticket, reply) => {
                if !self.controller.resolve(ticket, reply) {
                    return false;
                }
                self.abort = None;
                if self.controller.task().phase() == Phase::Succeeded {
                    self.clear_file_input();
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let submitting = self.controller.task().is_submitting();

        let on_name = link.callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            EnrollMsg::NameChanged(input.value())
        });

        let on_file = link.callback(|e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            EnrollMsg::FileChanged(first_image_file(input.files()))
        });

        html! {
            <div class="upload-face">
                <h2 class="title">{"Admin: Add New Face"}</h2>

                <div class="form-column">
                    <input
                        type="text"
                        placeholder="Enter Person Name"
                        aria-label="Enter the name of the person"
                        class="file-input"
                        value={self.controller.name().to_string()}
                        oninput={on_name}
                    />
                    <input
                        type="file"
                        accept="image/*"
                        class="file-input"
                        aria-label="Select face image to upload"
                        ref={self.file_input.clone()}
                        onchange={on_file}
                    />
                    <button
                        class="primary-btn"
                        disabled={submitting}
                        aria-label="Upload new face to the database"
                        onclick={link.callback(|_| EnrollMsg::Submit)}
                    >
                        { if submitting { "Uploading..." } else { "Upload" } }
                    </button>
                    if submitting {
                        <button class="secondary-btn" onclick={link.callback(|_| EnrollMsg::Cancel)}>
                            {"Cancel"}
                        </button>
                    }

                    { render_status(self.controller.task()) }
                </div>
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let Some(abort) = self.abort.take() {
            abort.abort();
        }
    }
}

impl EnrollPage {
    fn send_enrollment_request(
        &mut self,
        ctx: &Context<Self>,
        request: EnrollmentRequest<GlooFile>,
    ) {
        let (abort, signal) = abort_handle();
        self.abort = abort;

        let link = ctx.link().clone();
        let config = ctx.props().config.clone();

        spawn_local(async move {
            let reply = api::post_enrollment(&config, &request, signal.as_ref()).await;
            let aborted = signal.as_ref().is_some_and(|s| s.aborted());
            if let Err(err) = &reply {
                if !aborted {
                    gloo_console::error!(format!("Upload error: {}", err));
                }
            }
            link.send_message(EnrollMsg::Resolved(request.ticket, reply));
        });
    }

    // The browser keeps the picked file name until the input is reset.
    fn clear_file_input(&self) {
        if let Some(input) = self.file_input.cast::<HtmlInputElement>() {
            input.set_value("");
        }
    }
}
