use serde::Serialize;

/// Tag digiKam attaches when the curator approves an image.
pub const ACCEPTED_TAG_NAME: &str = "Pick Label Accepted";

/// Output groupings, each identified by a tag of the same name in the
/// database. The tag name doubles as the output subdirectory name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Bride,
    Groom,
    Common,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Bride, Category::Groom, Category::Common];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Bride => "bride",
            Category::Groom => "groom",
            Category::Common => "common",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
