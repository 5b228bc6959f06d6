//! Panel visibility state.

use serde::{Deserialize, Serialize};

/// Whether the favorites panel is shown.
///
/// The panel is visible only while the `showWidget` preference is on and
/// at least one favorite is visible; it toggles for the lifetime of the
/// session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisibilityState {
    /// Preference off or nothing to show.
    #[default]
    Hidden,
    /// Preference on and at least one visible favorite.
    Visible,
}

impl VisibilityState {
    /// Evaluate from the preference and the visible favorite count.
    pub fn evaluate(show_widget: bool, visible_count: usize) -> Self {
        if show_widget && visible_count > 0 {
            Self::Visible
        } else {
            Self::Hidden
        }
    }

    /// Whether the panel is shown.
    pub fn is_visible(self) -> bool {
        self == Self::Visible
    }
}
