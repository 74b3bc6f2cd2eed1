//! Intent vocabulary for classified email requests.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classified purpose of an email request.
///
/// The set is closed; [`Intent::Other`] is the fallback for anything the
/// classifier cannot place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// First contact with someone new.
    Outreach,
    /// Following up on an earlier exchange.
    FollowUp,
    /// Apologizing for something.
    Apology,
    /// Requesting information.
    InfoRequest,
    /// Internal status or team update.
    InternalUpdate,
    /// Anything that does not fit the above.
    #[default]
    Other,
}

impl Intent {
    /// All members of the vocabulary, in declaration order.
    pub const ALL: [Intent; 6] = [
        Intent::Outreach,
        Intent::FollowUp,
        Intent::Apology,
        Intent::InfoRequest,
        Intent::InternalUpdate,
        Intent::Other,
    ];

    /// Get the canonical label for this intent.
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Outreach => "outreach",
            Intent::FollowUp => "follow_up",
            Intent::Apology => "apology",
            Intent::InfoRequest => "info_request",
            Intent::InternalUpdate => "internal_update",
            Intent::Other => "other",
        }
    }

    /// Parse an exact canonical label.
    ///
    /// Used for the user-supplied override, which must match a known value
    /// to take effect. Returns `None` for anything else.
    pub fn from_str(label: &str) -> Option<Self> {
        match label {
            "outreach" => Some(Intent::Outreach),
            "follow_up" => Some(Intent::FollowUp),
            "apology" => Some(Intent::Apology),
            "info_request" => Some(Intent::InfoRequest),
            "internal_update" => Some(Intent::InternalUpdate),
            "other" => Some(Intent::Other),
            _ => None,
        }
    }

    /// Map a free-form classifier label to an intent.
    ///
    /// Lower-cases the label and normalizes hyphens and spaces to
    /// underscores before the member lookup. Unrecognized labels map to
    /// [`Intent::Other`].
    pub fn from_label(label: &str) -> Self {
        let normalized = label.trim().to_lowercase().replace(['-', ' '], "_");
        Self::from_str(&normalized).unwrap_or(Intent::Other)
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
