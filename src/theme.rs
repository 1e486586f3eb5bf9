use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ThemeMode {
	#[default]
	#[display("light")]
	Light,
	#[display("dark")]
	Dark,
}

impl ThemeMode {
	pub fn from_prefers_dark(prefers_dark: bool) -> Self {
		if prefers_dark {
			Self::Dark
		} else {
			Self::Light
		}
	}

	pub fn is_dark(self) -> bool {
		self == Self::Dark
	}

	pub fn thaw_theme(self) -> thaw::Theme {
		match self {
			Self::Light => thaw::Theme::light(),
			Self::Dark => thaw::Theme::dark(),
		}
	}
}

/// Derives the theme mode from a dark-preference signal.
///
/// Subscribers are only notified when the mode actually changes, so setting the preference to its
/// current value does not cause anything downstream to rebuild.
pub fn theme_mode_memo(prefers_dark: Signal<bool>) -> Memo<ThemeMode> {
	Memo::new(move |_| ThemeMode::from_prefers_dark(prefers_dark.get()))
}

/// The theme mode requested by `(prefers-color-scheme: dark)`.
///
/// Falls back to [`ThemeMode::Light`] where the media query is unavailable.
pub fn use_theme_mode() -> Memo<ThemeMode> {
	theme_mode_memo(leptos_use::use_preferred_dark())
}
