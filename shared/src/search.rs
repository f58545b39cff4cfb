use crate::error::{SubmitError, TransportError, ValidationError};
use crate::schema::{HttpReply, MatchResult, SearchResponse};
use crate::task::{Task, Ticket};

pub const SEARCH_FAILED: &str = "Error occurred while searching faces.";
pub const NO_MATCHES: &str = "No similar faces found.";

/// Multipart payload for one probe search: field `file`.
#[derive(Debug, Clone)]
pub struct SearchRequest<F> {
    pub ticket: Ticket,
    pub file: F,
}

/// Submits a probe image and keeps the ranked matches of the latest search.
#[derive(Debug)]
pub struct SearchController<F> {
    task: Task,
    file: Option<F>,
    matches: Vec<MatchResult>,
}

impl<F> Default for SearchController<F> {
    fn default() -> Self {
        Self {
            task: Task::new(),
            file: None,
            matches: Vec::new(),
        }
    }
}

impl<F: Clone> SearchController<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn task(&self) -> &Task {
        &self.task
    }

    pub fn file(&self) -> Option<&F> {
        self.file.as_ref()
    }

    /// Matches in backend order. Replaced wholesale by every new search.
    pub fn matches(&self) -> &[MatchResult] {
        &self.matches
    }

    pub fn set_file(&mut self, file: Option<F>) {
        self.file = file;
        self.task.touch();
    }

    pub fn can_submit(&self) -> bool {
        !self.task.is_submitting()
    }

    pub fn submit(&mut self) -> Result<SearchRequest<F>, SubmitError> {
        if !self.task.begin() {
            return Err(SubmitError::Busy);
        }

        let Some(file) = self.file.clone() else {
            let err = ValidationError::ImageRequired;
            self.task.fail(err.prompt());
            return Err(err.into());
        };

        self.matches.clear();
        let ticket = self.task.start();
        log::info!("search {} submitted", ticket);

        Ok(SearchRequest { ticket, file })
    }

    /// Applies the outcome of request `ticket`. Returns false for stale completions.
    pub fn resolve(&mut self, ticket: Ticket, reply: Result<HttpReply, TransportError>) -> bool {
        if !self.task.settle(ticket) {
            return false;
        }

        match reply.and_then(HttpReply::parse::<SearchResponse>) {
            Ok(response) => {
                self.matches = response.matches.unwrap_or_default();
                log::info!("search {} returned {} match(es)", ticket, self.matches.len());
                self.task.succeed(found_message(self.matches.len()));
            }
            Err(err) => {
                log::warn!("search {} failed: {}", ticket, err);
                self.matches.clear();
                self.task.fail(SEARCH_FAILED);
            }
        }

        true
    }

    pub fn cancel(&mut self) -> Option<Ticket> {
        self.task.cancel()
    }
}

pub fn found_message(count: usize) -> String {
    match count {
        0 => NO_MATCHES.to_string(),
        1 => "Found 1 match!".to_string(),
        n => format!("Found {} matches!", n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Phase;

    fn ok(body: &str) -> Result<HttpReply, TransportError> {
        Ok(HttpReply {
            status: 200,
            status_text: "OK".into(),
            body: body.into(),
        })
    }

    #[test]
    fn wording_by_count() {
        assert_eq!(found_message(0), "No similar faces found.");
        assert_eq!(found_message(1), "Found 1 match!");
        assert_eq!(found_message(2), "Found 2 matches!");
        assert_eq!(found_message(17), "Found 17 matches!");
    }

    #[test]
    fn validation_failure_keeps_previous_matches() {
        let mut controller = SearchController::<&str>::new();
        controller.set_file(Some("probe.png"));
        let request = controller.submit().unwrap();
        controller.resolve(
            request.ticket,
            ok(r#"{"matches":[{"filename":"a.jpg","distance":0.2,"image_base64":"AA=="}]}"#),
        );
        assert_eq!(controller.matches().len(), 1);

        controller.set_file(None);
        assert_eq!(
            controller.submit().unwrap_err(),
            SubmitError::Invalid(ValidationError::ImageRequired)
        );
        assert_eq!(controller.task().message(), Some("Please select an image first."));
        assert_eq!(controller.matches().len(), 1);
    }

    #[test]
    fn new_submission_clears_previous_matches() {
        let mut controller = SearchController::<&str>::new();
        controller.set_file(Some("probe.png"));
        let first = controller.submit().unwrap();
        controller.resolve(
            first.ticket,
            ok(r#"{"matches":[{"filename":"a.jpg","distance":0.2,"image_base64":"AA=="}]}"#),
        );

        controller.submit().unwrap();
        assert!(controller.matches().is_empty());
        assert_eq!(controller.task().phase(), Phase::Submitting);
        assert_eq!(controller.task().message(), None);
    }

    #[test]
    fn malformed_body_is_a_failure() {
        let mut controller = SearchController::<&str>::new();
        controller.set_file(Some("probe.png"));
        let request = controller.submit().unwrap();
        controller.resolve(request.ticket, ok(r#"{"matches":"nope"}"#));

        assert_eq!(controller.task().phase(), Phase::Failed);
        assert_eq!(controller.task().message(), Some(SEARCH_FAILED));
    }

    #[test]
    fn cancel_leaves_matches_empty() {
        let mut controller = SearchController::<&str>::new();
        controller.set_file(Some("probe.png"));
        let request = controller.submit().unwrap();
        controller.cancel();

        assert!(!controller.resolve(
            request.ticket,
            ok(r#"{"matches":[{"filename":"a.jpg","distance":0.2,"image_base64":"AA=="}]}"#),
        ));
        assert!(controller.matches().is_empty());
        assert!(controller.can_submit());
    }
}
