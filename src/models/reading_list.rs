//! Reading list document (`reading-list.json`) and the shared paper record.

use serde::Deserialize;

use super::null_as_default;

/// A referenced paper.
///
/// The reading list links papers through `link`, the schedule outline
/// through `url`; both land in `link`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Paper {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, alias = "url")]
    pub link: Option<String>,
    #[serde(default)]
    pub authors: Option<String>,
    #[serde(default)]
    pub venue: Option<String>,
}

impl Paper {
    /// Link target, `#` when the paper has none.
    pub fn href(&self) -> &str {
        self.link.as_deref().filter(|l| !l.is_empty()).unwrap_or("#")
    }
}

/// Contents of `reading-list.json`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReadingListDocument {
    #[serde(default)]
    pub papers: Option<Vec<Paper>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_and_url_aliases() {
        let a: Paper = serde_json::from_str(r#"{"title":"A","link":"http://a"}"#).unwrap();
        let b: Paper = serde_json::from_str(r#"{"title":"B","url":"http://b"}"#).unwrap();
        assert_eq!(a.href(), "http://a");
        assert_eq!(b.href(), "http://b");
    }

    #[test]
    fn test_missing_link_falls_back_to_hash() {
        let p: Paper = serde_json::from_str(r#"{"title":"C"}"#).unwrap();
        assert_eq!(p.href(), "#");
    }
}
