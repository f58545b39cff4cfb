use strum_macros::{Display, EnumIter};

/// Which of the two pages is showing. Owned by the root component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter)]
pub enum Screen {
    #[default]
    #[strum(serialize = "Search Faces")]
    Search,
    #[strum(serialize = "Add New Person (Admin)")]
    Enroll,
}

impl Screen {
    pub fn aria_label(self) -> &'static str {
        match self {
            Screen::Search => "Switch to Search Page",
            Screen::Enroll => "Switch to Admin Upload Page",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn nav_labels_in_order() {
        let labels: Vec<String> = Screen::iter().map(|s| s.to_string()).collect();
        assert_eq!(labels, ["Search Faces", "Add New Person (Admin)"]);
        assert_eq!(Screen::default(), Screen::Search);
    }
}
