use crate::error::TransportError;
use crate::schema::{HealthResponse, HttpReply};

/// Backend liveness as reported by `GET /health`. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendHealth {
    #[default]
    Unknown,
    Ok {
        cached_faces: usize,
    },
    Degraded {
        cached_faces: usize,
    },
    Unreachable,
}

impl BackendHealth {
    pub fn from_reply(reply: Result<HttpReply, TransportError>) -> Self {
        match reply.and_then(HttpReply::parse::<HealthResponse>) {
            Ok(health) if health.status == "ok" => BackendHealth::Ok {
                cached_faces: health.cache_count,
            },
            Ok(health) => BackendHealth::Degraded {
                cached_faces: health.cache_count,
            },
            Err(err) => {
                log::warn!("health check failed: {}", err);
                BackendHealth::Unreachable
            }
        }
    }

    pub fn label(&self) -> String {
        match self {
            BackendHealth::Unknown => "Checking backend...".to_string(),
            BackendHealth::Ok { cached_faces } => {
                format!("Backend online ({} cached)", cached_faces)
            }
            BackendHealth::Degraded { cached_faces } => {
                format!("Backend degraded ({} cached)", cached_faces)
            }
            BackendHealth::Unreachable => "Backend unreachable".to_string(),
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            BackendHealth::Unknown => "health-unknown",
            BackendHealth::Ok { .. } => "health-ok",
            BackendHealth::Degraded { .. } => "health-degraded",
            BackendHealth::Unreachable => "health-down",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(status: u16, body: &str) -> Result<HttpReply, TransportError> {
        Ok(HttpReply {
            status,
            status_text: String::new(),
            body: body.into(),
        })
    }

    #[test]
    fn maps_health_payloads() {
        assert_eq!(
            BackendHealth::from_reply(reply(200, r#"{"status":"ok","cache_count":12}"#)),
            BackendHealth::Ok { cached_faces: 12 }
        );
        assert_eq!(
            BackendHealth::from_reply(reply(200, r#"{"status":"degraded","cache_count":3}"#)),
            BackendHealth::Degraded { cached_faces: 3 }
        );
        assert_eq!(
            BackendHealth::from_reply(Err(TransportError::Network("refused".into()))),
            BackendHealth::Unreachable
        );
        assert_eq!(
            BackendHealth::from_reply(reply(500, "")),
            BackendHealth::Unreachable
        );
    }

    #[test]
    fn labels() {
        assert_eq!(
            BackendHealth::Ok { cached_faces: 1 }.label(),
            "Backend online (1 cached)"
        );
        assert_eq!(BackendHealth::Unreachable.css_class(), "health-down");
    }
}
