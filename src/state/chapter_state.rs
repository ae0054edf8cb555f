//! Chapter state definitions for tracking crawl progress
//!
//! The lifecycle of a single chapter is
//! `Pending → Fetched|FetchFailed → Extracted|ExtractEmpty|ExtractNone → Written|WriteFailed`.

use std::fmt;

/// Represents the current state of a chapter in the crawl process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChapterState {
    // ===== Active States =====
    /// Chapter is in range but has not been requested yet
    Pending,

    /// Page markup was downloaded
    Fetched,

    /// Chapter text was found and is about to be written
    Extracted,

    // ===== Terminal Success States =====
    /// Chapter text was saved to disk
    Written,

    // ===== Terminal Skip States =====
    /// Page was fetched but carried no original-language sentences
    ExtractEmpty,

    // ===== Terminal Error States =====
    /// HTTP error status or transport failure
    FetchFailed,

    /// There was no markup to extract from
    ExtractNone,

    /// Chapter text could not be written to its file
    WriteFailed,
}

impl ChapterState {
    /// Returns true if this is a terminal state (no further processing needed)
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending | Self::Fetched | Self::Extracted)
    }

    /// Returns true if the chapter ended up on disk
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Written)
    }

    /// Returns true if the page was fine but had nothing to save
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::ExtractEmpty)
    }

    /// Returns true if this represents an error state
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Self::FetchFailed | Self::ExtractNone | Self::WriteFailed
        )
    }

    /// Returns true if `next` is a legal successor of this state
    pub fn can_transition_to(&self, next: ChapterState) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Fetched)
                | (Self::Pending, Self::FetchFailed)
                | (Self::Fetched, Self::Extracted)
                | (Self::Fetched, Self::ExtractEmpty)
                | (Self::Fetched, Self::ExtractNone)
                | (Self::Extracted, Self::Written)
                | (Self::Extracted, Self::WriteFailed)
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Fetched => "fetched",
            Self::Extracted => "extracted",
            Self::Written => "written",
            Self::ExtractEmpty => "extract_empty",
            Self::FetchFailed => "fetch_failed",
            Self::ExtractNone => "extract_none",
            Self::WriteFailed => "write_failed",
        }
    }

    /// Returns all possible chapter states
    pub fn all_states() -> Vec<Self> {
        vec![
            Self::Pending,
            Self::Fetched,
            Self::Extracted,
            Self::Written,
            Self::ExtractEmpty,
            Self::FetchFailed,
            Self::ExtractNone,
            Self::WriteFailed,
        ]
    }
}

impl fmt::Display for ChapterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
