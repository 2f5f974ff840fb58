use crate::{state::State, utils, widgets};
use chrono::Utc;
use quotegen_business::copy_text;

pub struct QuoteApp {
    state: State,
}

impl QuoteApp {
    /// Called once before the first frame.
    pub fn new(mut state: State) -> Self {
        // Load the first quote right away, like a page-load fetch.
        state.refresh();
        Self { state }
    }
}

impl eframe::App for QuoteApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply any fetches that completed since the last frame
        self.state.drain_fetch_outcomes();

        let now = Utc::now();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(16.0);
                ui.heading("Quote Generator");
                ui.add_space(16.0);

                if let Some(value) =
                    widgets::genre_menu(&self.state.genre, &mut self.state.menu_open, ui)
                {
                    self.state.select_genre(value);
                }

                ui.add_space(24.0);
                widgets::quote_display(&self.state.view, ui);
                ui.add_space(24.0);

                let copied = self.state.copied.is_copied(now);
                let actions = widgets::quote_actions(&self.state.view, copied, ui);

                if actions.new_quote {
                    self.state.refresh();
                }

                if actions.copy {
                    if let Some(quote) = self.state.view.quote() {
                        let text = copy_text(quote);
                        if utils::clipboard::copy_text_to_clipboard(&text) {
                            self.state.copied.mark(now);
                        }
                        // Copy failures are swallowed: the loading/error
                        // messaging stays untouched.
                    }
                }
            });
        });

        // egui only repaints on input; keep painting while a fetch is in
        // flight or the copied label still has to revert.
        if self.state.view.is_loading() || self.state.copied.is_pending() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
