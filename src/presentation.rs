//! Display-layer values and the mapping from feed items onto them.

use serde::{Deserialize, Serialize};

use crate::checksum::text_checksum;
use crate::constants::{EMPTY_HEADER, ERROR_HEADER, LOADING_HEADER};
use crate::models::{FeedItem, UserSummary};

/// One display row handed to the list UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListRow {
    pub id: u64,
    pub title: String,
    pub subtitle: Option<String>,
    pub selected: bool,
}

/// Value handed to the display layer.
///
/// At most one of {non-empty rows, loading=true, error set} is meaningfully
/// populated per instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Presentation {
    pub header: String,
    pub rows: Vec<ListRow>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Maps feed items into display values
#[derive(Debug, Clone)]
pub struct FeedPresenter {
    feed_title: String,
}

impl FeedPresenter {
    pub fn new(feed_title: String) -> Self {
        FeedPresenter { feed_title }
    }

    /// Render feed items as a numbered list.
    pub fn present(&self, items: &[FeedItem]) -> Presentation {
        let rows = items
            .iter()
            .enumerate()
            .map(|(index, item)| ListRow {
                id: item.id,
                title: format!("{}. {}", index + 1, item.title),
                subtitle: item.subtitle.clone(),
                selected: item.summary.is_active,
            })
            .collect();

        Presentation {
            header: format!("{} ({})", self.feed_title, items.len()),
            rows,
            loading: false,
            error: None,
        }
    }

    /// Render summaries directly, bypassing the feed-item step.
    pub fn present_summaries(&self, summaries: &[UserSummary]) -> Presentation {
        let rows = summaries
            .iter()
            .enumerate()
            .map(|(index, summary)| ListRow {
                id: index as u64,
                title: summary.name.clone(),
                subtitle: Some(activity_label(summary.is_active).to_string()),
                selected: summary.is_active,
            })
            .collect();

        Presentation {
            header: format!("{} ({})", self.feed_title, summaries.len()),
            rows,
            loading: false,
            error: None,
        }
    }

    /// The designated "no data" state: absence of data is a normal,
    /// representable outcome, not an error.
    pub fn empty_state(&self) -> Presentation {
        Presentation {
            header: EMPTY_HEADER.to_string(),
            rows: Vec::new(),
            loading: false,
            error: None,
        }
    }

    pub fn loading_state(&self) -> Presentation {
        Presentation {
            header: LOADING_HEADER.to_string(),
            rows: Vec::new(),
            loading: true,
            error: None,
        }
    }

    pub fn error_state(&self, message: String) -> Presentation {
        Presentation {
            header: ERROR_HEADER.to_string(),
            rows: Vec::new(),
            loading: false,
            error: Some(message),
        }
    }
}

/// Subtitle text for a user's activity flag
pub fn activity_label(is_active: bool) -> &'static str {
    if is_active {
        "Active"
    } else {
        "Inactive"
    }
}

/// Presentation value paired with its header checksum
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateBlock {
    pub state: Presentation,
    pub checksum: i32,
}

impl StateBlock {
    /// Wrap a presentation, checksumming the header and error text
    pub fn of(state: Presentation) -> Self {
        let mut keyed = state.header.clone();
        if let Some(error) = &state.error {
            keyed.push_str(error);
        }
        let checksum = text_checksum(&keyed);
        StateBlock { state, checksum }
    }
}
