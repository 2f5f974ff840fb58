use crate::utils::colors::COLOR_RED;
use egui::{RichText, Ui};
use quotegen_business::{QuoteDisplay, QuoteViewState};

/// Renders the quote card body: loading text, the error message, or the
/// quote/author pair. Loading wins over the error, and the error hides any
/// previously shown quote until the next successful fetch.
pub fn quote_display(view: &QuoteViewState, ui: &mut Ui) {
    match view.display() {
        QuoteDisplay::Loading => {
            ui.label("Loading...");
        }
        QuoteDisplay::Error(message) => {
            ui.colored_label(COLOR_RED, message);
        }
        QuoteDisplay::Quote(quote) => {
            ui.label(
                RichText::new(format!("\"{}\"", quote.quote))
                    .size(18.0)
                    .italics(),
            );
            ui.add_space(8.0);
            ui.label(format!("— {}", quote.author));
        }
        QuoteDisplay::Empty => {}
    }
}
