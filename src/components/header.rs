use leptos::prelude::*;
use leptos_router::components::A;
use thaw::{Button, ButtonAppearance};

use crate::config::APP_NAME;
use crate::shell_state::DrawerController;

#[component]
pub fn Header(drawer: DrawerController) -> impl IntoView {
	view! {
		<header class="Header">
			<Button appearance=ButtonAppearance::Subtle on_click=move |_| drawer.open()>
				"Menu"
			</Button>
			<A href="/">
				<span class="Header-title">{APP_NAME}</span>
			</A>
		</header>
	}
}
