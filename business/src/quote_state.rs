//! View state for the quote card.
//!
//! This is the small state record behind the UI: a loading flag, a single
//! fixed error message, and the most recently fetched quote. What the card
//! shows is derived from it by `display()` rather than stored as extra flags.

use crate::fetch::{FetchOutcome, QuoteResult};
use log::info;

/// The one user-visible message for any failed fetch. Network failures,
/// non-2xx statuses, and malformed bodies are deliberately not distinguished.
pub const FETCH_ERROR_MESSAGE: &str = "Failed to load quote from backend";

/// What applying a `FetchOutcome` did to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppliedOutcome {
    /// A fresh quote was stored. The caller should reset any copy
    /// confirmation, since it referred to the previous quote.
    FreshQuote,
    /// The fetch failed and the error message is now set.
    Error,
    /// The outcome belonged to a superseded request and was ignored.
    StaleDiscarded,
}

/// What the quote card should render, derived purely from the state.
#[derive(Debug, PartialEq, Eq)]
pub enum QuoteDisplay<'a> {
    Loading,
    Error(&'static str),
    Quote(&'a QuoteResult),
    Empty,
}

#[derive(Debug, Default)]
pub struct QuoteViewState {
    loading: bool,
    error: Option<&'static str>,
    quote: Option<QuoteResult>,
    // Generation of the newest fetch; outcomes from older fetches are stale.
    generation: u64,
}

impl QuoteViewState {
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    pub fn quote(&self) -> Option<&QuoteResult> {
        self.quote.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Starts a fetch cycle: enters loading and clears any error, leaving the
    /// previous quote in place (it stays stored while the new one loads).
    /// Returns the generation tag for the new request.
    pub fn begin_fetch(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        self.generation
    }

    /// Applies a completed fetch. Outcomes whose generation is not current
    /// are discarded so a slow response for an old genre cannot overwrite a
    /// newer one.
    pub fn apply(&mut self, outcome: FetchOutcome) -> AppliedOutcome {
        if outcome.generation != self.generation {
            info!(
                "Discarding stale quote response (generation {} < {})",
                outcome.generation, self.generation
            );
            return AppliedOutcome::StaleDiscarded;
        }

        self.loading = false;
        match outcome.result {
            Ok(quote) => {
                self.quote = Some(quote);
                self.error = None;
                AppliedOutcome::FreshQuote
            }
            Err(_) => {
                // The quote stays stored but display() hides it: the error
                // takes priority until the next successful fetch.
                self.error = Some(FETCH_ERROR_MESSAGE);
                AppliedOutcome::Error
            }
        }
    }

    /// Derives what to render: loading wins, then the error, then the quote.
    pub fn display(&self) -> QuoteDisplay<'_> {
        if self.loading {
            QuoteDisplay::Loading
        } else if let Some(error) = self.error {
            QuoteDisplay::Error(error)
        } else if let Some(quote) = &self.quote {
            QuoteDisplay::Quote(quote)
        } else {
            QuoteDisplay::Empty
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::FetchError;

    fn quote(text: &str) -> QuoteResult {
        QuoteResult {
            quote: text.to_string(),
            author: "Anonymous".to_string(),
            genre: "motivation".to_string(),
        }
    }

    fn success(generation: u64, text: &str) -> FetchOutcome {
        FetchOutcome {
            generation,
            result: Ok(quote(text)),
        }
    }

    fn failure(generation: u64) -> FetchOutcome {
        FetchOutcome {
            generation,
            result: Err(FetchError::Status(500)),
        }
    }

    #[test]
    fn test_initial_state_is_empty() {
        let state = QuoteViewState::default();
        assert!(!state.is_loading());
        assert_eq!(state.display(), QuoteDisplay::Empty);
    }

    #[test]
    fn test_begin_fetch_enters_loading_and_keeps_quote() {
        let mut state = QuoteViewState::default();
        let generation = state.begin_fetch();
        state.apply(success(generation, "first"));

        let generation = state.begin_fetch();
        assert!(state.is_loading());
        assert_eq!(state.display(), QuoteDisplay::Loading);
        // The stale quote stays stored while the new one loads.
        assert_eq!(state.quote().map(|q| q.quote.as_str()), Some("first"));
        assert_eq!(generation, 2);
    }

    #[test]
    fn test_success_stores_quote_and_clears_error() {
        let mut state = QuoteViewState::default();
        let generation = state.begin_fetch();
        state.apply(failure(generation));
        assert_eq!(state.display(), QuoteDisplay::Error(FETCH_ERROR_MESSAGE));

        let generation = state.begin_fetch();
        let applied = state.apply(success(generation, "fresh"));
        assert_eq!(applied, AppliedOutcome::FreshQuote);
        assert!(!state.is_loading());
        assert_eq!(state.display(), QuoteDisplay::Quote(&quote("fresh")));
    }

    #[test]
    fn test_failure_hides_previous_quote_until_next_success() {
        let mut state = QuoteViewState::default();
        let generation = state.begin_fetch();
        state.apply(success(generation, "first"));

        let generation = state.begin_fetch();
        let applied = state.apply(failure(generation));
        assert_eq!(applied, AppliedOutcome::Error);

        // The error takes priority over the previously shown quote.
        assert_eq!(state.display(), QuoteDisplay::Error(FETCH_ERROR_MESSAGE));
        assert!(state.quote().is_some());

        let generation = state.begin_fetch();
        state.apply(success(generation, "second"));
        assert_eq!(state.display(), QuoteDisplay::Quote(&quote("second")));
    }

    #[test]
    fn test_begin_fetch_clears_error_immediately() {
        let mut state = QuoteViewState::default();
        let generation = state.begin_fetch();
        state.apply(failure(generation));

        state.begin_fetch();
        assert_eq!(state.error(), None);
        assert_eq!(state.display(), QuoteDisplay::Loading);
    }

    #[test]
    fn test_stale_outcome_is_discarded() {
        let mut state = QuoteViewState::default();
        let old_generation = state.begin_fetch();
        let new_generation = state.begin_fetch();

        // The old genre's response lands after a newer fetch started.
        let applied = state.apply(success(old_generation, "stale"));
        assert_eq!(applied, AppliedOutcome::StaleDiscarded);
        assert!(state.is_loading());
        assert!(state.quote().is_none());

        let applied = state.apply(success(new_generation, "current"));
        assert_eq!(applied, AppliedOutcome::FreshQuote);
        assert_eq!(state.quote().map(|q| q.quote.as_str()), Some("current"));
    }

    #[test]
    fn test_stale_failure_does_not_set_error() {
        let mut state = QuoteViewState::default();
        let old_generation = state.begin_fetch();
        let new_generation = state.begin_fetch();

        state.apply(failure(old_generation));
        assert_eq!(state.error(), None);

        state.apply(success(new_generation, "current"));
        assert_eq!(state.display(), QuoteDisplay::Quote(&quote("current")));
    }
}
