//! Article model
//!
//! An article is one spreadsheet row assigned for screening. Articles are
//! immutable once fetched; the remote store is the source of truth.

use serde::{Deserialize, Deserializer, Serialize};

/// An article awaiting (or having received) a screening decision
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Stable row identifier used to write the decision back
    ///
    /// Summary listings may omit it; queue entries are checked for it on receipt.
    #[serde(default)]
    pub row_index: u64,

    /// Row number as shown in the spreadsheet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_number: Option<u64>,

    /// Link to the row in the spreadsheet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sheet_url: Option<String>,

    /// Article title
    #[serde(default)]
    pub title: String,

    /// Author list as a single string
    #[serde(default, deserialize_with = "lenient_string")]
    pub author: Option<String>,

    /// Publication year (sheets hand these back as numbers or strings)
    #[serde(default, deserialize_with = "lenient_string")]
    pub year: Option<String>,

    /// Database the record came from
    #[serde(default, deserialize_with = "lenient_string")]
    pub source: Option<String>,

    /// Journal or venue
    #[serde(default, deserialize_with = "lenient_string")]
    pub publication: Option<String>,

    /// Publication type (journal article, conference paper, ...)
    #[serde(default, deserialize_with = "lenient_string")]
    pub publication_type: Option<String>,

    /// Digital object identifier
    #[serde(default, deserialize_with = "lenient_string")]
    pub doi: Option<String>,

    /// External full-text link
    #[serde(default, deserialize_with = "lenient_string")]
    pub url: Option<String>,

    /// Abstract text
    #[serde(default, rename = "abstract", deserialize_with = "lenient_string")]
    pub abstract_text: Option<String>,

    /// Whether the store flagged this row as a likely duplicate
    #[serde(default, alias = "isDuplicate")]
    pub duplicate: bool,
}

impl Article {
    /// Create an article with only the required fields set
    #[must_use]
    pub fn new(row_index: u64, title: impl Into<String>) -> Self {
        Self {
            row_index,
            row_number: None,
            sheet_url: None,
            title: title.into(),
            author: None,
            year: None,
            source: None,
            publication: None,
            publication_type: None,
            doi: None,
            url: None,
            abstract_text: None,
            duplicate: false,
        }
    }

    /// Resolver link for the DOI, if one is recorded
    #[must_use]
    pub fn doi_url(&self) -> Option<String> {
        self.doi.as_deref().map(|doi| {
            let bare = doi
                .trim_start_matches("https://doi.org/")
                .trim_start_matches("http://doi.org/")
                .trim_start_matches("doi:");
            format!("https://doi.org/{bare}")
        })
    }
}

/// Accept strings, numbers, or null for free-form sheet cells.
/// Empty strings collapse to `None`.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        },
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        Some(serde_json::Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}
