use crate::error::ExtractError;
use crate::parsers::html::{Tier, find_first, selector};
use crate::parsers::text::clean_text;
use crate::results::Claim;
use scraper::ElementRef;

/// Claim markup used by a page, detected once per document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimMarkup {
    /// `<claim num="..">` elements wrapping a claim-text container
    Numbered,
    /// Bare claim-text containers without numbering
    Legacy,
}

impl ClaimMarkup {
    /// Markup implied by which marker tier matched
    pub fn from_tier(tier: Tier) -> Self {
        match tier {
            Tier::Primary => ClaimMarkup::Numbered,
            Tier::Fallback => ClaimMarkup::Legacy,
        }
    }

    /// Extracts one claim per matched element in this markup's shape
    pub fn extract(self, matches: &[ElementRef<'_>]) -> Result<Vec<Claim>, ExtractError> {
        match self {
            ClaimMarkup::Numbered => numbered_claims(matches),
            ClaimMarkup::Legacy => Ok(legacy_claims(matches)),
        }
    }
}

fn numbered_claims(matches: &[ElementRef<'_>]) -> Result<Vec<Claim>, ExtractError> {
    let claim_text = selector("claims", "div.claim-text")?;
    let mut claims = Vec::with_capacity(matches.len());

    for claim in matches {
        // A claim element without a text container carries nothing to keep
        let Some(text) = clean_text(find_first(claim, &claim_text)) else {
            ::log::debug!("Skipping claim element without claim text");
            continue;
        };
        claims.push(Claim::Numbered {
            number: claim.value().attr("num").map(|n| n.to_string()),
            text,
        });
    }

    if claims.is_empty() && !matches.is_empty() {
        return Err(ExtractError::Malformed {
            field: "claims",
            reason: format!("none of {} claim elements has claim text", matches.len()),
        });
    }

    Ok(claims)
}

fn legacy_claims(matches: &[ElementRef<'_>]) -> Vec<Claim> {
    matches
        .iter()
        .filter_map(|div| clean_text(Some(*div)))
        .map(Claim::Text)
        .collect()
}
