//! Light/dark display mode.

use crate::config::DARK_MODE_CLASS;
use log::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// Mirror the theme onto `<body>` as the dark-mode class.
pub fn apply_to_body(theme: Theme) {
    let body = gloo_utils::body();
    if let Err(e) = body
        .class_list()
        .toggle_with_force(DARK_MODE_CLASS, theme.is_dark())
    {
        warn!("Could not update body class for {:?}: {:?}", theme, e);
    }
}
