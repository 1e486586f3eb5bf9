use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::config::SCROLL_TOP_THRESHOLD;

fn is_scrolled(scroll_y: f64) -> bool {
	scroll_y > SCROLL_TOP_THRESHOLD
}

fn scroll_to_top() {
	let options = web_sys::ScrollToOptions::new();
	options.set_top(0.0);
	options.set_behavior(web_sys::ScrollBehavior::Smooth);
	window().scroll_to_with_scroll_to_options(&options);
}

/// Floating button that appears once the page has been scrolled down.
#[component]
pub fn ScrollToTopFab() -> impl IntoView {
	let (_, scroll_y) = use_window_scroll();
	let visible = Memo::new(move |_| is_scrolled(scroll_y.get()));

	view! {
		<button
			class=move || if visible.get() { "ScrollToTopFab visible" } else { "ScrollToTopFab" }
			aria-label="Scroll to top"
			on:click=move |_| scroll_to_top()
		>
			"↑"
		</button>
	}
}
