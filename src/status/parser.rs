//! HTML signal extraction for the isitdownrightnow.com status page
//!
//! The page signals status through the mere presence of class-tagged icon
//! elements. Their text is irrelevant. A second, weaker signal is the "last
//! checked down" timestamp buried in the status-history table.

use scraper::{ElementRef, Html, Selector};

use crate::status::{CheckResult, SiteState};

/// Marker whose presence means the site is up
const UP_MARKER: &str = "span.upicon";

/// Marker whose presence means the site is down
const DOWN_MARKER: &str = "span.downicon";

/// Status-history row container
const HISTORY_ROW: &str = "div.tabletrsimple";

/// Element holding the last-down timestamp text
const LAST_DOWN_VALUE: &str = "span.tab";

/// Derive the tri-state result and the optional last-down note from one
/// fetched status page.
///
/// Down is resolved before up, so a page carrying both markers reports down.
/// That matches the source site's observed behavior and is pinned by tests.
pub fn resolve_status(html: &str) -> CheckResult {
    let document = Html::parse_document(html);

    let is_down = has_marker(&document, DOWN_MARKER);
    let is_up = has_marker(&document, UP_MARKER);
    let last_down_note = extract_last_down(&document);

    let state = if is_down {
        SiteState::Down
    } else if is_up {
        SiteState::Up
    } else {
        SiteState::Indeterminate
    };

    CheckResult {
        state,
        last_down_note,
    }
}

/// True if at least one element matches the marker selector.
///
/// An unparsable selector counts as marker-absent; the caller always gets an
/// answer.
fn has_marker(document: &Html, css: &str) -> bool {
    match Selector::parse(css) {
        Ok(selector) => document.select(&selector).next().is_some(),
        Err(_) => false,
    }
}

/// Extract the "last checked down" note from the status-history table.
///
/// Precondition on the scraped layout: the page renders at least two
/// `div.tabletrsimple` rows and the second one holds the last-down info,
/// with the timestamp in the next `span.tab` in document order (a descendant
/// of that row or of one of its following siblings). This is the one fragile
/// assumption in the crate; a layout change on the source page is a fix
/// here and nowhere else.
fn extract_last_down(document: &Html) -> Option<String> {
    let row_selector = Selector::parse(HISTORY_ROW).ok()?;
    let value_selector = Selector::parse(LAST_DOWN_VALUE).ok()?;

    // nth(1) rather than next(): the first row holds unrelated data
    let row = document.select(&row_selector).nth(1)?;

    let value = row.select(&value_selector).next().or_else(|| {
        row.next_siblings()
            .filter_map(ElementRef::wrap)
            .find_map(|sibling| {
                if value_selector.matches(&sibling) {
                    Some(sibling)
                } else {
                    sibling.select(&value_selector).next()
                }
            })
    })?;

    let text = value.text().collect::<String>();
    Some(format!("Last down time is: {}", text.trim()))
}
