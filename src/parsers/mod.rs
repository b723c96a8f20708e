pub mod claims;
pub mod html;
pub mod text;


use crate::config::ScraperConfig;
use crate::error::ExtractError;
use crate::filter;
use crate::results::PatentRecord;
use html::{Matches, Tier, selector};
use scraper::Html;

/// Per-document inputs the extractors need besides the tree itself
#[derive(Debug, Clone)]
pub struct ExtractContext {
    /// Origin prefixed onto root-relative links
    pub origin: String,
}

impl ExtractContext {
    pub fn new(origin: &str) -> Self {
        Self {
            origin: origin.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &ScraperConfig) -> Self {
        Self::new(config.origin())
    }

    pub fn absolutize(&self, href: &str) -> String {
        filter::absolutize(&self.origin, href)
    }
}

impl Default for ExtractContext {
    fn default() -> Self {
        Self::from_config(&ScraperConfig::default())
    }
}

/// Reads a field's matched elements into the record
pub type Apply = fn(&mut PatentRecord, &Matches<'_>, &ExtractContext) -> Result<(), ExtractError>;

/// How one record field is located and read
pub struct FieldRule {
    pub field: &'static str,
    /// Selector tried first
    pub primary: &'static str,
    /// Selector tried only when the primary matches nothing
    pub fallback: Option<&'static str>,
    pub apply: Apply,
}

impl FieldRule {
    /// Collects the elements for this field, falling back when the primary marker is absent
    pub fn resolve<'a>(&self, document: &'a Html) -> Result<Matches<'a>, ExtractError> {
        let primary = selector(self.field, self.primary)?;
        let elements: Vec<_> = document.select(&primary).collect();

        if elements.is_empty() {
            if let Some(marker) = self.fallback {
                let fallback = selector(self.field, marker)?;
                let elements: Vec<_> = document.select(&fallback).collect();
                if !elements.is_empty() {
                    return Ok(Matches {
                        field: self.field,
                        marker,
                        tier: Tier::Fallback,
                        elements,
                    });
                }
            }
        }

        Ok(Matches {
            field: self.field,
            marker: self.primary,
            tier: Tier::Primary,
            elements,
        })
    }
}

/// Every extracted field and the markers that locate it
pub static FIELD_RULES: &[FieldRule] = &[
    FieldRule {
        field: "title",
        primary: r#"h1[itemprop="pageTitle"]"#,
        fallback: None,
        apply: html::title,
    },
    FieldRule {
        field: "abstract",
        primary: r#"section[itemprop="abstract"] div.abstract"#,
        fallback: None,
        apply: html::abstract_text,
    },
    FieldRule {
        field: "classifications",
        primary: r#"li[itemprop="classifications"]"#,
        fallback: None,
        apply: html::classifications,
    },
    FieldRule {
        field: "claims",
        primary: r#"section[itemprop="claims"] claim"#,
        fallback: Some(r#"section[itemprop="claims"] div.claim-text"#),
        apply: html::claims,
    },
    FieldRule {
        field: "publication_number",
        primary: r#"dd[itemprop="publicationNumber"]"#,
        fallback: None,
        apply: html::publication_number,
    },
    FieldRule {
        field: "country",
        primary: r#"dd[itemprop="countryName"]"#,
        fallback: Some(r#"span[itemprop="countryCode"]"#),
        apply: html::country,
    },
    FieldRule {
        field: "inventors",
        primary: r#"dd[itemprop="inventor"]"#,
        fallback: None,
        apply: html::inventors,
    },
    FieldRule {
        field: "assignees.current",
        primary: r#"dd[itemprop="assigneeCurrent"]"#,
        fallback: None,
        apply: html::current_assignees,
    },
    FieldRule {
        field: "assignees.original",
        primary: r#"dd[itemprop="assigneeOriginal"]"#,
        fallback: None,
        apply: html::original_assignees,
    },
    FieldRule {
        field: "events",
        primary: r#"dd[itemprop="events"]"#,
        fallback: None,
        apply: html::events,
    },
    FieldRule {
        field: "status",
        primary: r#"span[itemprop="status"]"#,
        fallback: Some(r#"span[itemprop="legalStatus"]"#),
        apply: html::status,
    },
    FieldRule {
        field: "description",
        primary: r#"section[itemprop="description"] div.description-paragraph"#,
        fallback: None,
        apply: html::description,
    },
    FieldRule {
        field: "similar_documents",
        primary: r#"tr[itemprop="similarDocuments"]"#,
        fallback: None,
        apply: html::similar_documents,
    },
];

/// Walks a parsed patent page and fills in every field it can.
///
/// A field whose marker is missing or malformed is logged and left at its
/// default; it never stops the remaining fields from being extracted.
pub fn extract(document: &Html, source_url: &str, context: &ExtractContext) -> PatentRecord {
    let mut record = PatentRecord::new(source_url);

    for rule in FIELD_RULES {
        let outcome = rule
            .resolve(document)
            .and_then(|matches| (rule.apply)(&mut record, &matches, context));

        match outcome {
            Ok(()) => {}
            Err(e @ ExtractError::MissingMarker { .. }) => {
                ::log::debug!("Partial extraction: {}", e)
            }
            Err(e) => ::log::warn!("Partial extraction: {}", e),
        }
    }

    ::log::debug!(
        "Extracted {}: {} claims, {} description paragraphs, {} similar documents",
        source_url,
        record.claims.len(),
        record.description.len(),
        record.similar_documents.len()
    );

    record
}

/// Parses raw page markup and extracts a record from it
pub fn parse(markup: &str, source_url: &str, context: &ExtractContext) -> PatentRecord {
    let document = Html::parse_document(markup);
    extract(&document, source_url, context)
}
