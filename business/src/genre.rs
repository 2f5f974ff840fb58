//! The genre catalogue presented by the dropdown.
//!
//! Genres are cosmetic labels: the relay echoes them back but never forwards
//! them upstream, so nothing here is validated against the provider.

/// One selectable genre.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenreOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Available genres the dropdown presents.
pub const GENRE_OPTIONS: &[GenreOption] = &[
    GenreOption {
        value: "motivation",
        label: "Motivation",
    },
    GenreOption {
        value: "life",
        label: "Life",
    },
    GenreOption {
        value: "success",
        label: "Success",
    },
    GenreOption {
        value: "wisdom",
        label: "Wisdom",
    },
];

/// Genre the UI starts with. The relay falls back to "life" when a request
/// carries no genre at all; both defaults are intentional.
pub const DEFAULT_GENRE: &str = "motivation";

/// Resolve the label for a genre value, for the dropdown toggle.
pub fn genre_label(value: &str) -> &'static str {
    GENRE_OPTIONS
        .iter()
        .find(|option| option.value == value)
        .map(|option| option.label)
        .unwrap_or("Select Genre")
}
