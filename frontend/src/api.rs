use gloo_file::File as GlooFile;
use gloo_net::http::{Request, Response};
use shared::{ApiConfig, EnrollmentRequest, HttpReply, SearchRequest, TransportError};
use wasm_bindgen::JsValue;
use web_sys::{AbortSignal, FormData};

fn js_error(context: &str, err: JsValue) -> TransportError {
    TransportError::Request(format!("{}: {:?}", context, err))
}

fn file_form(file: &GlooFile) -> Result<FormData, TransportError> {
    let form_data = FormData::new().map_err(|e| js_error("cannot create form data", e))?;
    form_data
        .append_with_blob_and_filename("file", file.as_ref(), &file.name())
        .map_err(|e| js_error("cannot attach file", e))?;
    Ok(form_data)
}

async fn read_reply(response: Response) -> Result<HttpReply, TransportError> {
    let status = response.status();
    let status_text = response.status_text();
    let body = response
        .text()
        .await
        .map_err(|e| TransportError::Network(e.to_string()))?;

    Ok(HttpReply {
        status,
        status_text,
        body,
    })
}

async fn post_form(
    url: &str,
    form_data: FormData,
    signal: Option<&AbortSignal>,
) -> Result<HttpReply, TransportError> {
    let request = Request::post(url)
        .abort_signal(signal)
        .body(form_data)
        .map_err(|e| TransportError::Request(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| TransportError::Network(e.to_string()))?;

    read_reply(response).await
}

pub async fn post_enrollment(
    config: &ApiConfig,
    request: &EnrollmentRequest<GlooFile>,
    signal: Option<&AbortSignal>,
) -> Result<HttpReply, TransportError> {
    let form_data = file_form(&request.file)?;
    form_data
        .append_with_str("person_name", &request.person_name)
        .map_err(|e| js_error("cannot attach person_name", e))?;

    post_form(&config.enroll_url(), form_data, signal).await
}

pub async fn post_search(
    config: &ApiConfig,
    request: &SearchRequest<GlooFile>,
    signal: Option<&AbortSignal>,
) -> Result<HttpReply, TransportError> {
    let form_data = file_form(&request.file)?;
    post_form(&config.search_url(), form_data, signal).await
}

pub async fn get_health(config: &ApiConfig) -> Result<HttpReply, TransportError> {
    let response = Request::get(&config.health_url())
        .send()
        .await
        .map_err(|e| TransportError::Network(e.to_string()))?;

    read_reply(response).await
}
