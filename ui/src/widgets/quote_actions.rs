use egui::Ui;
use quotegen_business::QuoteViewState;

/// What the user clicked this frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct QuoteActions {
    pub new_quote: bool,
    pub copy: bool,
}

/// Renders the action row: a refresh button and a copy button.
///
/// Both are disabled while a fetch is in flight; copy additionally needs a
/// quote to copy. The copy button shows "Copied!" while the confirmation
/// window is active.
pub fn quote_actions(view: &QuoteViewState, copied: bool, ui: &mut Ui) -> QuoteActions {
    let mut actions = QuoteActions::default();
    let loading = view.is_loading();

    ui.horizontal(|ui| {
        let new_quote_label = if loading { "Loading..." } else { "New Quote" };
        if ui
            .add_enabled(!loading, egui::Button::new(new_quote_label))
            .clicked()
        {
            actions.new_quote = true;
        }

        ui.add_space(12.0);

        let can_copy = !loading && view.quote().is_some();
        let copy_label = if copied { "Copied!" } else { "Copy Quote" };
        if ui
            .add_enabled(can_copy, egui::Button::new(copy_label))
            .clicked()
        {
            actions.copy = true;
        }
    });

    actions
}
