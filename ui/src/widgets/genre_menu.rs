//! Genre dropdown control.
//!
//! A labelled toggle button plus an option list rendered only while the menu
//! is open. Any click outside the control closes it; the outside-click check
//! is scoped to the frames where the menu is rendered, so nothing lingers
//! once it closes.

use egui::{Response, Ui};
use quotegen_business::{GENRE_OPTIONS, genre_label};

/// Renders the genre control. Returns the selected genre value when the user
/// picks an option.
pub fn genre_menu(active_genre: &str, menu_open: &mut bool, ui: &mut Ui) -> Option<&'static str> {
    let mut selected = None;

    ui.label("Select Genre");

    let toggle = ui.button(format!("{} ⏷", genre_label(active_genre)));
    if toggle.clicked() {
        *menu_open = !*menu_open;
    }

    let mut control: Response = toggle;
    if *menu_open {
        for option in GENRE_OPTIONS {
            let row = ui.selectable_label(option.value == active_genre, option.label);
            if row.clicked() {
                selected = Some(option.value);
            }
            control = control.union(row);
        }

        // A click anywhere outside the toggle-plus-list subtree closes the
        // menu; selecting an option closes it as well.
        if selected.is_some() || control.clicked_elsewhere() {
            *menu_open = false;
        }
    }

    selected
}
