//! Portland Big Pipe combined sewer overflow (CSO) advisories.
//!
//! The advisory page has no stable structure around the status, so this
//! works on the flattened page text instead of the DOM.

use super::UNAVAILABLE;
use super::dom::{AdapterError, document_text};
use scraper::Html;

pub const ADAPTER_NAME: &str = "portland-big-pipe";

/// Normalized status when nothing has overflowed.
pub const NO_ADVISORIES: &str = "No current advisories. Big Pipe has not overflowed.";

/// Shown when the advisory section exists but no sentence could be picked out.
pub const CHECK_SITE: &str = "Check site for current advisory status.";

const SECTION_MARKERS: [&str; 2] = ["Current CSO Advisories", "CSO Advisories"];
const NO_ADVISORY_MARKERS: [&str; 2] = ["no current advisories", "there are no current advisories"];

/// Extract the current CSO advisory status.
pub fn portland_big_pipe(html: &str) -> Result<String, AdapterError> {
    let document = Html::parse_document(html);
    let text = document_text(&document);

    if !SECTION_MARKERS.iter().any(|marker| text.contains(marker)) {
        return Ok(UNAVAILABLE.to_string());
    }

    let lowered = text.to_lowercase();
    if NO_ADVISORY_MARKERS.iter().any(|marker| lowered.contains(marker)) {
        return Ok(NO_ADVISORIES.to_string());
    }

    // Naive sentence split: abbreviations will fragment, which is fine for this page.
    let sentences: Vec<&str> = text.split('.').collect();
    let advisory = sentences
        .iter()
        .find(|s| is_overflow_advisory(s))
        .or_else(|| sentences.iter().find(|s| is_cso_advisory(s)));

    Ok(match advisory {
        Some(sentence) => format!("{}.", sentence.trim()),
        None => CHECK_SITE.to_string(),
    })
}

fn is_overflow_advisory(sentence: &str) -> bool {
    let lowered = sentence.to_lowercase();
    lowered.contains("advisory") && lowered.contains("overflow")
}

fn is_cso_advisory(sentence: &str) -> bool {
    sentence.contains("CSO") && sentence.to_lowercase().contains("advisory")
}
