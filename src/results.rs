use serde::{Deserialize, Serialize};
use std::fmt;

/// Status recorded when the page carries no status marker
pub const DEFAULT_STATUS: &str = "Pending";

/// Structured record extracted from one patent page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatentRecord {
    /// URL the record was extracted from
    pub source_url: String,

    pub title: Option<String>,

    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,

    /// Classification codes in document order, without duplicates
    #[serde(default)]
    pub classifications: Vec<Classification>,

    pub publication_number: Option<String>,

    pub country: Option<String>,

    /// Legal status; `DEFAULT_STATUS` when the page has no status marker
    pub status: Option<String>,

    #[serde(default)]
    pub inventors: Vec<String>,

    #[serde(default)]
    pub assignees: Assignees,

    #[serde(default)]
    pub events: Vec<Event>,

    /// Claims in whichever shape the page's markup provides
    #[serde(default)]
    pub claims: Vec<Claim>,

    /// Description paragraphs with numbering markers removed
    #[serde(default)]
    pub description: Vec<String>,

    #[serde(default)]
    pub similar_documents: Vec<SimilarDocument>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub code: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignees {
    #[serde(default)]
    pub current: Vec<String>,
    #[serde(default)]
    pub original: Vec<String>,
}

/// Legal event from the patent's timeline
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub date: Option<String>,
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// A single claim.
///
/// Pages use one of two claim markups: numbered claim elements, or bare
/// claim-text containers. The record keeps whichever shape the page used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Claim {
    Numbered { number: Option<String>, text: String },
    Text(String),
}

impl Claim {
    /// Declared claim number, if the markup carried one
    pub fn number(&self) -> Option<&str> {
        match self {
            Claim::Numbered { number, .. } => number.as_deref(),
            Claim::Text(_) => None,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Claim::Numbered { text, .. } => text,
            Claim::Text(text) => text,
        }
    }
}

impl fmt::Display for Claim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.number() {
            Some(number) => write!(f, "{}: {}", number, self.text()),
            None => f.write_str(self.text()),
        }
    }
}

/// Related patent or scholarly citation listed on the page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimilarDocument {
    /// Publication number, or the author list for scholarly citations
    pub publication: Option<String>,
    pub date: Option<String>,
    pub title: Option<String>,
    /// Absolute link to the cited document
    pub link: Option<String>,
}

impl PatentRecord {
    /// Create an empty record for the given source URL
    pub fn new(source_url: impl Into<String>) -> Self {
        Self {
            source_url: source_url.into(),
            ..Self::default()
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn sample_record() -> PatentRecord {
        PatentRecord {
            source_url: "https://patents.google.com/patent/US1234567B2/en".to_string(),
            title: Some("Rotating widget".to_string()),
            abstract_text: Some("A widget that rotates about H₂O.".to_string()),
            classifications: vec![Classification {
                code: "B65D".to_string(),
                description: None,
            }],
            publication_number: Some("US1234567B2".to_string()),
            country: Some("United States".to_string()),
            status: Some("Active".to_string()),
            inventors: vec!["Ada Lovelace".to_string(), "Ada Lovelace".to_string()],
            assignees: Assignees {
                current: vec!["Widget Co".to_string()],
                original: vec![],
            },
            events: vec![Event {
                date: Some("2020-01-01".to_string()),
                title: None,
                kind: Some("filed".to_string()),
            }],
            claims: vec![
                Claim::Numbered {
                    number: Some("1".to_string()),
                    text: "A widget.".to_string(),
                },
                Claim::Numbered {
                    number: None,
                    text: "The widget of claim 1.".to_string(),
                },
            ],
            description: vec!["The widget rotates.".to_string()],
            similar_documents: vec![SimilarDocument {
                publication: Some("Smith et al.".to_string()),
                date: None,
                title: Some("On widgets".to_string()),
                link: Some("https://patents.google.com/scholar/1".to_string()),
            }],
        }
    }

    #[test]
    fn test_json_round_trip() {
        let record = sample_record();
        let json = record.to_json_pretty().unwrap();
        assert_eq!(PatentRecord::from_json(&json).unwrap(), record);

        let bare = PatentRecord {
            claims: vec![Claim::Text("A widget.".to_string())],
            ..sample_record()
        };
        assert_eq!(PatentRecord::from_json(&bare.to_json().unwrap()).unwrap(), bare);
    }

    #[test]
    fn test_empty_record_serializes_nulls_and_empty_arrays() {
        let value: Value = serde_json::to_value(PatentRecord::new("https://x")).unwrap();
        assert_eq!(value["title"], Value::Null);
        assert_eq!(value["abstract"], Value::Null);
        assert_eq!(value["status"], Value::Null);
        assert_eq!(value["claims"], json!([]));
        assert_eq!(value["assignees"], json!({"current": [], "original": []}));
    }

    #[test]
    fn test_claim_shapes_on_the_wire() {
        let value = serde_json::to_value(vec![
            Claim::Numbered {
                number: Some("2".to_string()),
                text: "b".to_string(),
            },
            Claim::Text("c".to_string()),
        ])
        .unwrap();
        assert_eq!(value, json!([{"number": "2", "text": "b"}, "c"]));
    }

    #[test]
    fn test_event_type_field_name() {
        let value = serde_json::to_value(Event {
            kind: Some("granted".to_string()),
            ..Event::default()
        })
        .unwrap();
        assert_eq!(value, json!({"date": null, "title": null, "type": "granted"}));
    }

    #[test]
    fn test_claim_display() {
        let numbered = Claim::Numbered {
            number: Some("3".to_string()),
            text: "A gear.".to_string(),
        };
        assert_eq!(numbered.to_string(), "3: A gear.");
        assert_eq!(Claim::Text("A gear.".to_string()).to_string(), "A gear.");
        assert_eq!(Claim::Text("x".to_string()).number(), None);
    }
}
