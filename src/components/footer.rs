use leptos::prelude::*;

use crate::config::{APP_NAME, APP_VERSION};

#[component]
pub fn Footer() -> impl IntoView {
	view! {
		<footer class="Footer">
			<span>{APP_NAME}</span>
			<span>{format!("v{APP_VERSION}")}</span>
		</footer>
	}
}
