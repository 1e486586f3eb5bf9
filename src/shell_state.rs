use leptos::prelude::*;

use crate::config::CONFIGURATION_PATH;

/// Open/closed state of the navigation drawer.
///
/// The header only ever opens the drawer; closing is left to the drawer itself.
#[derive(Clone, Copy, Debug)]
pub struct DrawerController {
	open: RwSignal<bool>,
}

impl DrawerController {
	pub fn new() -> Self {
		Self {
			open: RwSignal::new(false),
		}
	}

	pub fn open(&self) {
		if !self.open.get_untracked() {
			tracing::debug!("opening navigation drawer");
		}
		self.open.set(true);
	}

	pub fn close(&self) {
		self.open.set(false);
	}

	pub fn is_open(&self) -> bool {
		self.open.get()
	}

	pub fn signal(&self) -> RwSignal<bool> {
		self.open
	}
}

impl Default for DrawerController {
	fn default() -> Self {
		Self::new()
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FooterVisibility {
	#[default]
	Visible,
	Hidden,
}

impl FooterVisibility {
	pub fn for_path(path: &str) -> Self {
		if path == CONFIGURATION_PATH {
			Self::Hidden
		} else {
			Self::Visible
		}
	}

	pub fn is_visible(self) -> bool {
		self == Self::Visible
	}
}

pub fn footer_visibility_memo(path: Signal<String>) -> Memo<FooterVisibility> {
	Memo::new(move |_| path.with(|path| FooterVisibility::for_path(path)))
}

#[cfg(test)]
mod tests {
	use super::*;
	use leptos::reactive::owner::Owner;

	#[test]
	fn footer_hidden_only_on_configuration() {
		assert_eq!(FooterVisibility::for_path("/configuration"), FooterVisibility::Hidden);
		for path in [
			"/configuration/",
			"/",
			"/recordings",
			"/recordings/cam/2024-03-01",
			"/entities",
			"/configuration/extra",
			"/configurations",
			"/nowhere",
		] {
			assert!(FooterVisibility::for_path(path).is_visible(), "{path}");
		}
	}

	#[test]
	fn footer_follows_navigation() {
		let owner = Owner::new();
		owner.set();

		let path = RwSignal::new(String::from("/"));
		let footer = footer_visibility_memo(path.into());
		assert_eq!(footer.get(), FooterVisibility::Visible);

		path.set("/configuration".into());
		assert_eq!(footer.get(), FooterVisibility::Hidden);

		path.set("/entities".into());
		assert_eq!(footer.get(), FooterVisibility::Visible);
	}

	#[test]
	fn drawer_stays_open_until_closed() {
		let owner = Owner::new();
		owner.set();

		let drawer = DrawerController::new();
		assert!(!drawer.is_open());

		drawer.open();
		assert!(drawer.is_open());
		drawer.open();
		assert!(drawer.is_open());

		drawer.close();
		assert!(!drawer.is_open());
	}
}
