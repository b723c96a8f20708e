use crate::error::ExtractError;
use crate::parsers::ExtractContext;
use crate::parsers::claims::ClaimMarkup;
use crate::parsers::text::{clean_text, normalize_whitespace, strip_paragraph_markers};
use crate::results::{Classification, DEFAULT_STATUS, Event, PatentRecord, SimilarDocument};
use scraper::{ElementRef, Selector};

/// Branding the site appends to every page title
pub const TITLE_SUFFIX: &str = " - Google Patents";

/// Which of a field's markers produced the matches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Primary,
    Fallback,
}

/// Elements found for one field
#[derive(Debug)]
pub struct Matches<'a> {
    pub field: &'static str,
    pub marker: &'static str,
    pub tier: Tier,
    pub elements: Vec<ElementRef<'a>>,
}

impl<'a> Matches<'a> {
    /// First match; scalar fields take the first element in document order
    pub fn first(&self) -> Result<ElementRef<'a>, ExtractError> {
        self.elements
            .first()
            .copied()
            .ok_or(ExtractError::MissingMarker {
                field: self.field,
                marker: self.marker,
            })
    }

    fn texts(&self) -> Vec<String> {
        self.elements
            .iter()
            .filter_map(|el| clean_text(Some(*el)))
            .collect()
    }
}

/// Compiles a marker selector, attributing failures to `field`
pub fn selector(field: &'static str, marker: &'static str) -> Result<Selector, ExtractError> {
    Selector::parse(marker).map_err(|e| ExtractError::Selector {
        field,
        marker,
        reason: e.to_string(),
    })
}

/// First descendant of `scope` matching `selector`
pub fn find_first<'a>(scope: &ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    scope.select(selector).next()
}

pub fn title(
    record: &mut PatentRecord,
    matches: &Matches<'_>,
    _: &ExtractContext,
) -> Result<(), ExtractError> {
    let text = clean_text(Some(matches.first()?)).unwrap_or_default();
    let title = text.strip_suffix(TITLE_SUFFIX).unwrap_or(&text).trim_end();
    record.title = Some(title.to_string());
    Ok(())
}

pub fn abstract_text(
    record: &mut PatentRecord,
    matches: &Matches<'_>,
    _: &ExtractContext,
) -> Result<(), ExtractError> {
    record.abstract_text = clean_text(Some(matches.first()?));
    Ok(())
}

pub fn classifications(
    record: &mut PatentRecord,
    matches: &Matches<'_>,
    _: &ExtractContext,
) -> Result<(), ExtractError> {
    let code_selector = selector(matches.field, r#"span[itemprop="Code"]"#)?;
    let description_selector = selector(matches.field, r#"span[itemprop="Description"]"#)?;

    for item in &matches.elements {
        let Some(code) = clean_text(find_first(item, &code_selector)) else {
            continue;
        };
        let classification = Classification {
            code,
            description: clean_text(find_first(item, &description_selector)),
        };
        if !record.classifications.contains(&classification) {
            record.classifications.push(classification);
        }
    }
    Ok(())
}

pub fn claims(
    record: &mut PatentRecord,
    matches: &Matches<'_>,
    _: &ExtractContext,
) -> Result<(), ExtractError> {
    if matches.elements.is_empty() {
        return Ok(());
    }
    let markup = ClaimMarkup::from_tier(matches.tier);
    ::log::debug!(
        "Extracting {} claims using {:?} markup",
        matches.elements.len(),
        markup
    );
    record.claims = markup.extract(&matches.elements)?;
    Ok(())
}

pub fn publication_number(
    record: &mut PatentRecord,
    matches: &Matches<'_>,
    _: &ExtractContext,
) -> Result<(), ExtractError> {
    record.publication_number = clean_text(Some(matches.first()?));
    Ok(())
}

pub fn country(
    record: &mut PatentRecord,
    matches: &Matches<'_>,
    _: &ExtractContext,
) -> Result<(), ExtractError> {
    record.country = clean_text(Some(matches.first()?));
    Ok(())
}

pub fn status(
    record: &mut PatentRecord,
    matches: &Matches<'_>,
    _: &ExtractContext,
) -> Result<(), ExtractError> {
    record.status = Some(
        clean_text(matches.elements.first().copied())
            .unwrap_or_else(|| DEFAULT_STATUS.to_string()),
    );
    Ok(())
}

pub fn inventors(
    record: &mut PatentRecord,
    matches: &Matches<'_>,
    _: &ExtractContext,
) -> Result<(), ExtractError> {
    record.inventors = matches.texts();
    Ok(())
}

pub fn current_assignees(
    record: &mut PatentRecord,
    matches: &Matches<'_>,
    _: &ExtractContext,
) -> Result<(), ExtractError> {
    record.assignees.current = matches.texts();
    Ok(())
}

pub fn original_assignees(
    record: &mut PatentRecord,
    matches: &Matches<'_>,
    _: &ExtractContext,
) -> Result<(), ExtractError> {
    record.assignees.original = matches.texts();
    Ok(())
}

pub fn events(
    record: &mut PatentRecord,
    matches: &Matches<'_>,
    _: &ExtractContext,
) -> Result<(), ExtractError> {
    let date = selector(matches.field, r#"time[itemprop="date"]"#)?;
    let title = selector(matches.field, r#"span[itemprop="title"]"#)?;
    let kind = selector(matches.field, r#"span[itemprop="type"]"#)?;

    record.events = matches
        .elements
        .iter()
        .map(|event| Event {
            date: clean_text(find_first(event, &date)),
            title: clean_text(find_first(event, &title)),
            kind: clean_text(find_first(event, &kind)),
        })
        .collect();
    Ok(())
}

pub fn description(
    record: &mut PatentRecord,
    matches: &Matches<'_>,
    _: &ExtractContext,
) -> Result<(), ExtractError> {
    record.description = matches
        .texts()
        .iter()
        .map(|paragraph| strip_paragraph_markers(paragraph))
        .filter(|paragraph| !paragraph.is_empty())
        .collect();
    Ok(())
}

pub fn similar_documents(
    record: &mut PatentRecord,
    matches: &Matches<'_>,
    context: &ExtractContext,
) -> Result<(), ExtractError> {
    let publication = selector(matches.field, r#"span[itemprop="publicationNumber"]"#)?;
    let authors = selector(matches.field, r#"span[itemprop="scholarAuthors"]"#)?;
    let date = selector(matches.field, r#"time[itemprop="publicationDate"]"#)?;
    let title = selector(matches.field, r#"td[itemprop="title"]"#)?;
    let link = selector(matches.field, "a[href]")?;

    record.similar_documents = matches
        .elements
        .iter()
        .map(|row| SimilarDocument {
            publication: clean_text(find_first(row, &publication))
                .or_else(|| clean_text(find_first(row, &authors))),
            // Dates are plain text; no sub/superscript handling
            date: find_first(row, &date)
                .map(|time| normalize_whitespace(&time.text().collect::<String>())),
            title: clean_text(find_first(row, &title)),
            link: find_first(row, &link)
                .and_then(|a| a.value().attr("href"))
                .map(|href| context.absolutize(href)),
        })
        .collect();
    Ok(())
}
