mod genre_menu;
mod quote_actions;
mod quote_display;

pub use genre_menu::genre_menu;
pub use quote_actions::{QuoteActions, quote_actions};
pub use quote_display::quote_display;
