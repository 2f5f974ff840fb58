use quotegen_business::{
    AppliedOutcome, BusinessConfig, CopiedIndicator, DEFAULT_GENRE, QuoteResultReceiver,
    QuoteResultSender, QuoteViewState, create_quote_channel, fetch_quote,
};

/// The main application state.
///
/// Note: We manually implement Default because the quote result channels
/// don't implement Default.
pub struct State {
    /// Backend configuration for the quote fetches.
    pub config: BusinessConfig,
    /// The quote card's view state.
    pub view: QuoteViewState,
    /// The active genre, sent with every fetch and echoed back by the relay.
    pub genre: String,
    /// Whether the genre dropdown is open.
    pub menu_open: bool,
    /// The copy-confirmation window.
    pub copied: CopiedIndicator,
    /// Sender handed to each fetch callback.
    pub quote_sender: QuoteResultSender,
    /// Receiver drained by the frame loop.
    pub quote_receiver: QuoteResultReceiver,
}

impl Default for State {
    fn default() -> Self {
        Self::with_config(BusinessConfig::default())
    }
}

impl State {
    pub fn test(base_url: String) -> Self {
        Self::with_config(BusinessConfig::new(base_url))
    }

    fn with_config(config: BusinessConfig) -> Self {
        let (quote_sender, quote_receiver) = create_quote_channel();

        Self {
            config,
            view: QuoteViewState::default(),
            genre: DEFAULT_GENRE.to_string(),
            menu_open: false,
            copied: CopiedIndicator::default(),
            quote_sender,
            quote_receiver,
        }
    }

    /// Starts a fetch cycle for the active genre.
    pub fn refresh(&mut self) {
        let generation = self.view.begin_fetch();
        fetch_quote(
            &self.config,
            &self.genre,
            generation,
            self.quote_sender.clone(),
        );
    }

    /// Applies a genre selection: store it, close the menu, refetch.
    pub fn select_genre(&mut self, value: &str) {
        self.genre = value.to_string();
        self.menu_open = false;
        self.refresh();
    }

    /// Drains completed fetches into the view state. A fresh quote
    /// invalidates any pending copy confirmation.
    pub fn drain_fetch_outcomes(&mut self) {
        while let Ok(outcome) = self.quote_receiver.try_recv() {
            if self.view.apply(outcome) == AppliedOutcome::FreshQuote {
                self.copied.clear();
            }
        }
    }
}
