use crate::error::{ClientError, SubmitError, TransportError, ValidationError};
use crate::schema::{EnrollResponse, HttpReply, error_detail};
use crate::task::{Task, Ticket};

pub const UPLOAD_FAILED: &str = "Error uploading face.";
pub const UPLOAD_REJECTED: &str = "Upload failed. Please try again.";

/// Multipart payload for one enrollment: fields `file` and `person_name`.
#[derive(Debug, Clone)]
pub struct EnrollmentRequest<F> {
    pub ticket: Ticket,
    pub person_name: String,
    pub file: F,
}

/// Collects a name and an image and drives one enrollment at a time.
///
/// `F` is whatever handle the host uses for a selected file.
#[derive(Debug)]
pub struct EnrollmentController<F> {
    task: Task,
    name: String,
    file: Option<F>,
    submitted_name: Option<String>,
}

impl<F> Default for EnrollmentController<F> {
    fn default() -> Self {
        Self {
            task: Task::new(),
            name: String::new(),
            file: None,
            submitted_name: None,
        }
    }
}

impl<F: Clone> EnrollmentController<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn task(&self) -> &Task {
        &self.task
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn file(&self) -> Option<&F> {
        self.file.as_ref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.task.touch();
    }

    pub fn set_file(&mut self, file: Option<F>) {
        self.file = file;
        self.task.touch();
    }

    pub fn can_submit(&self) -> bool {
        !self.task.is_submitting()
    }

    /// Validates the inputs and hands back the request to send.
    ///
    /// Name is checked before file. On any error no request exists, so
    /// nothing can go out over the network.
    pub fn submit(&mut self) -> Result<EnrollmentRequest<F>, SubmitError> {
        if !self.task.begin() {
            return Err(SubmitError::Busy);
        }

        let file = match self.validate() {
            Ok(file) => file,
            Err(err) => {
                self.task.fail(err.prompt());
                return Err(err.into());
            }
        };

        let ticket = self.task.start();
        self.submitted_name = Some(self.name.clone());
        log::info!("enrollment {} submitted for '{}'", ticket, self.name);

        Ok(EnrollmentRequest {
            ticket,
            person_name: self.name.clone(),
            file,
        })
    }

    fn validate(&self) -> Result<F, ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::NameRequired);
        }

        self.file.clone().ok_or(ValidationError::FileRequired)
    }

    /// Applies the outcome of request `ticket`. Returns false for stale completions.
    pub fn resolve(&mut self, ticket: Ticket, reply: Result<HttpReply, TransportError>) -> bool {
        if !self.task.settle(ticket) {
            return false;
        }

        let name = self.submitted_name.take().unwrap_or_default();

        match interpret(reply) {
            Ok(_) => {
                log::info!("enrollment {} accepted", ticket);
                self.task
                    .succeed(format!("Face of '{}' uploaded successfully!", name));
                self.name.clear();
                self.file = None;
            }
            Err(err) => {
                log::warn!("enrollment {} failed: {}", ticket, err);
                self.task.fail(failure_message(&err));
            }
        }

        true
    }

    pub fn cancel(&mut self) -> Option<Ticket> {
        self.submitted_name = None;
        self.task.cancel()
    }
}

fn interpret(reply: Result<HttpReply, TransportError>) -> Result<EnrollResponse, ClientError> {
    let reply = reply?;
    let body = reply.body.clone();
    let parsed: EnrollResponse = reply.parse()?;

    if parsed.is_success() {
        Ok(parsed)
    } else {
        Err(ClientError::Backend {
            detail: error_detail(&body),
        })
    }
}

/// Detail field, then raw body, then transport description, then the fixed fallback.
///
/// A well-formed reply whose `status` is not `"success"` stops after the detail
/// field and shows `UPLOAD_REJECTED` instead of the raw body.
pub fn failure_message(err: &ClientError) -> String {
    match err {
        ClientError::Validation(v) => v.prompt().to_string(),
        ClientError::Backend { detail } => detail
            .clone()
            .unwrap_or_else(|| UPLOAD_REJECTED.to_string()),
        ClientError::Transport(transport) => {
            let (detail, raw) = match transport {
                TransportError::Status { body, .. } | TransportError::Malformed { body, .. } => (
                    error_detail(body),
                    Some(body.trim()).filter(|b| !b.is_empty()).map(str::to_string),
                ),
                _ => (None, None),
            };

            detail
                .or(raw)
                .or_else(|| transport.description())
                .unwrap_or_else(|| UPLOAD_FAILED.to_string())
        }
    }
}
