use gloo_file::{Blob, File as GlooFile, ObjectUrl};
use gloo_timers::callback::Timeout;
use shared::{ExportFile, StatusTone, Task};
use wasm_bindgen::JsCast;
use web_sys::{AbortController, AbortSignal, FileList, HtmlAnchorElement};
use yew::prelude::*;

// Object URLs must outlive the click that starts the download.
const REVOKE_AFTER_MS: u32 = 1_000;

pub fn first_image_file(files: Option<FileList>) -> Option<GlooFile> {
    let file = files?.item(0)?;

    if file.type_().starts_with("image/") {
        Some(GlooFile::from(file))
    } else {
        log::warn!("Skipping non-image file: {}", file.name());
        None
    }
}

/// Fresh abort handle for one request. `None` if the browser lacks AbortController.
pub fn abort_handle() -> (Option<AbortController>, Option<AbortSignal>) {
    match AbortController::new() {
        Ok(controller) => {
            let signal = controller.signal();
            (Some(controller), Some(signal))
        }
        Err(e) => {
            log::warn!("AbortController unavailable: {:?}", e);
            (None, None)
        }
    }
}

pub fn render_status(task: &Task) -> Html {
    match task.message() {
        Some(message) => {
            let tone = match task.tone() {
                StatusTone::Error => "status-error",
                StatusTone::Info => "status-info",
            };
            html! {
                <p class={classes!("status-text", tone)} role="status">{ message }</p>
            }
        }
        None => html! {},
    }
}

/// Saves the export through a temporary download anchor. Best-effort.
pub fn save_export(export: ExportFile) {
    let blob = Blob::new_with_options(export.bytes.as_slice(), Some(export.mime_type));
    let url = ObjectUrl::from(blob);

    let anchor = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.create_element("a").ok())
        .and_then(|element| element.dyn_into::<HtmlAnchorElement>().ok());

    let Some(anchor) = anchor else {
        log::warn!("Cannot create download link for {}", export.file_name);
        return;
    };

    anchor.set_href(&url);
    anchor.set_download(&export.file_name);
    anchor.click();
    log::info!("Exported {} ({} bytes)", export.file_name, export.bytes.len());

    Timeout::new(REVOKE_AFTER_MS, move || drop(url)).forget();
}
