//! Website status lookup
//!
//! Contains the checker that queries isitdownrightnow.com and the HTML
//! parsing that turns the response into an up/down/indeterminate answer.

pub mod checker;
pub mod parser;

/// Reply used whenever the fetch fails or neither marker is found
pub const INDETERMINATE_MESSAGE: &str = "Could not determine the status of the website.";

/// Placeholder when the last-down row is missing or unreadable
pub const LAST_DOWN_UNKNOWN: &str = "Last down time not found.";

/// Tri-state outcome of one status lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteState {
    Up,
    Down,
    Indeterminate,
}

/// Outcome of one lookup; built fresh per request, rendered to text, dropped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    /// Up, down, or indeterminate
    pub state: SiteState,

    /// "Last down time is: ..." when the history row could be read
    pub last_down_note: Option<String>,
}

impl CheckResult {
    /// Render the result as the single reply string the tool returns
    pub fn render(&self) -> String {
        let note = self.last_down_note.as_deref().unwrap_or(LAST_DOWN_UNKNOWN);
        match self.state {
            SiteState::Down => format!("The website is down. {}", note),
            SiteState::Up => format!("The website is up. {}", note),
            SiteState::Indeterminate => INDETERMINATE_MESSAGE.to_string(),
        }
    }
}
