//! Copy-to-clipboard confirmation state.
//!
//! The "Copied!" label lives for a fixed window after a copy. The deadline is
//! a single slot: marking again replaces it (the window restarts, it never
//! stacks), and a fresh quote clears it outright.

use crate::fetch::QuoteResult;
use chrono::{DateTime, Duration, Utc};

/// How long the "Copied!" confirmation stays visible.
pub const COPIED_RESET_MS: i64 = 2000;

/// Single-slot owner of the copy-confirmation deadline.
#[derive(Debug, Clone, Default)]
pub struct CopiedIndicator {
    reset_at: Option<DateTime<Utc>>,
}

impl CopiedIndicator {
    /// Records a successful copy, replacing any pending deadline.
    pub fn mark(&mut self, now: DateTime<Utc>) {
        self.reset_at = Some(now + Duration::milliseconds(COPIED_RESET_MS));
    }

    /// Drops any pending deadline. Called when a fresh quote arrives, since
    /// the confirmation referred to the previous quote.
    pub fn clear(&mut self) {
        self.reset_at = None;
    }

    /// Whether the confirmation is still active, releasing the slot once the
    /// deadline has passed.
    pub fn is_copied(&mut self, now: DateTime<Utc>) -> bool {
        match self.reset_at {
            Some(deadline) if now < deadline => true,
            Some(_) => {
                self.reset_at = None;
                false
            }
            None => false,
        }
    }

    /// Whether a deadline is pending, without consuming it. The frame loop
    /// uses this to keep repainting until the label reverts.
    pub fn is_pending(&self) -> bool {
        self.reset_at.is_some()
    }
}

/// The exact string written to the clipboard.
pub fn copy_text(quote: &QuoteResult) -> String {
    format!("\"{}\" — {}", quote.quote, quote.author)
}
