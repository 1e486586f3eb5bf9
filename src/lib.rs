mod components;
pub mod config;
pub mod error;
pub mod pages;
pub mod shell_state;
pub mod theme;
pub mod toast;

pub use components::{use_toaster, Toaster};

use config::APP_NAME;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::Router;
use pages::{PageLoader, PageModule};
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
	view! { <AppShell loader=pages::builtin_loader()/> }
}

/// The whole application, resolving its pages through `loader`.
#[component]
pub fn AppShell(loader: PageLoader<PageModule>) -> impl IntoView {
	provide_meta_context();

	// Built once per session and only read afterwards.
	let loader: components::SharedPageLoader = StoredValue::new_local(loader);
	provide_context(loader);

	// thaw only accepts a writable theme signal, so it follows the memoised mode.
	let mode = theme::use_theme_mode();
	let theme = RwSignal::new(mode.get_untracked().thaw_theme());
	Effect::new(move |_| {
		let mode = mode.get();
		tracing::debug!(%mode, "applying theme");
		theme.set(mode.thaw_theme());
	});

	view! {
		<Title formatter=|page: String| format!("{APP_NAME} - {page}")/>

		<ConfigProvider theme>
			<Router>
				<components::ShellLayout theme=mode/>
			</Router>
		</ConfigProvider>
	}
}
