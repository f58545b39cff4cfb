pub mod config;
pub mod enrollment;
pub mod error;
pub mod health;
pub mod presenter;
pub mod schema;
pub mod screen;
pub mod search;
pub mod task;

pub use config::ApiConfig;
pub use enrollment::{EnrollmentController, EnrollmentRequest};
pub use error::{ClientError, ExportError, SubmitError, TransportError, ValidationError};
pub use health::BackendHealth;
pub use presenter::{ExportFile, MatchCard, export_match, present};
pub use schema::{EnrollResponse, HttpReply, MatchResult, SearchResponse};
pub use screen::Screen;
pub use search::{SearchController, SearchRequest};
pub use task::{Phase, StatusTone, Task, Ticket};
