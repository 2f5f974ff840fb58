pub mod config;
pub mod copy_feedback;
pub mod fetch;
pub mod genre;
pub mod quote_state;

pub use config::BusinessConfig;
pub use copy_feedback::{CopiedIndicator, copy_text};
pub use fetch::{
    FetchError, FetchOutcome, QuoteResult, QuoteResultReceiver, QuoteResultSender,
    create_quote_channel, fetch_quote,
};
pub use genre::{DEFAULT_GENRE, GENRE_OPTIONS, GenreOption, genre_label};
pub use quote_state::{AppliedOutcome, FETCH_ERROR_MESSAGE, QuoteDisplay, QuoteViewState};
