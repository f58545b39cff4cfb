use base64::{Engine as _, engine::general_purpose::STANDARD};

use crate::error::ExportError;
use crate::schema::MatchResult;

pub const EXPORT_MIME: &str = "image/jpeg";

/// Everything a result card needs, already formatted.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchCard {
    pub index: usize,
    pub filename: String,
    pub person_name: Option<String>,
    pub distance_label: String,
    pub image_src: String,
    pub alt: String,
}

pub fn format_distance(distance: f64) -> String {
    format!("{:.4}", distance)
}

pub fn data_url(payload: &str) -> String {
    format!("data:{};base64,{}", EXPORT_MIME, payload)
}

/// One card per match, in the order the backend ranked them.
pub fn present(matches: &[MatchResult]) -> Vec<MatchCard> {
    matches
        .iter()
        .enumerate()
        .map(|(index, m)| MatchCard {
            index,
            filename: m.filename.clone(),
            person_name: m.person_name.clone(),
            distance_label: format_distance(m.distance),
            image_src: data_url(&m.image_payload),
            alt: format!("Matched face: {}", m.filename),
        })
        .collect()
}

/// Bytes and suggested name for saving a match locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

pub fn export_match(m: &MatchResult) -> Result<ExportFile, ExportError> {
    let bytes = STANDARD.decode(m.image_payload.trim())?;

    Ok(ExportFile {
        file_name: m.filename.clone(),
        mime_type: EXPORT_MIME,
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(filename: &str, distance: f64, payload: &str) -> MatchResult {
        MatchResult {
            filename: filename.into(),
            person_name: None,
            distance,
            image_payload: payload.into(),
        }
    }

    #[test]
    fn distance_has_four_decimals() {
        assert_eq!(format_distance(0.5), "0.5000");
        assert_eq!(format_distance(0.123456), "0.1235");
        assert_eq!(format_distance(1.0), "1.0000");
    }

    #[test]
    fn cards_keep_backend_order() {
        let cards = present(&[result("b.jpg", 0.12, "AA=="), result("a.jpg", 0.45, "AQ==")]);

        let labels: Vec<_> = cards.iter().map(|c| c.distance_label.as_str()).collect();
        assert_eq!(labels, ["0.1200", "0.4500"]);
        assert_eq!(cards[0].filename, "b.jpg");
        assert_eq!(cards[1].index, 1);
        assert_eq!(cards[0].image_src, "data:image/jpeg;base64,AA==");
        assert_eq!(cards[0].alt, "Matched face: b.jpg");
    }

    #[test]
    fn export_decodes_payload() {
        let file = export_match(&result("ann.jpg", 0.3, "/9j/4A==")).unwrap();
        assert_eq!(file.file_name, "ann.jpg");
        assert_eq!(file.mime_type, "image/jpeg");
        assert_eq!(file.bytes, vec![0xff, 0xd8, 0xff, 0xe0]);
    }

    #[test]
    fn export_rejects_garbage() {
        assert!(export_match(&result("x.jpg", 0.3, "not base64!")).is_err());
    }
}
