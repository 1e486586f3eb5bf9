use leptos::prelude::*;
use leptos_router::components::A;
use thaw::{Button, ButtonAppearance, DrawerBody, DrawerHeader, DrawerHeaderTitle, OverlayDrawer};

use crate::config::{APP_NAME, CONFIGURATION_PATH, ROOT_PATH};
use crate::shell_state::DrawerController;

const NAV_LINKS: &[(&str, &str)] = &[
	("Cameras", ROOT_PATH),
	("Recordings", "/recordings"),
	("Entities", "/entities"),
	("Configuration", CONFIGURATION_PATH),
];

/// Side navigation. Dismissing the overlay or following a link closes it.
#[component]
pub fn AppDrawer(drawer: DrawerController) -> impl IntoView {
	view! {
		<OverlayDrawer open=drawer.signal() class="AppDrawer">
			<DrawerHeader>
				<DrawerHeaderTitle>{APP_NAME}</DrawerHeaderTitle>
			</DrawerHeader>
			<DrawerBody>
				<nav class="AppDrawer-nav">
					{NAV_LINKS
						.iter()
						.map(|&(label, href)| {
							view! {
								<A href=href>
									<span class="AppDrawer-link" on:click=move |_| drawer.close()>
										{label}
									</span>
								</A>
							}
						})
						.collect_view()}
				</nav>
				<Button appearance=ButtonAppearance::Subtle on_click=move |_| drawer.close()>
					"Close"
				</Button>
			</DrawerBody>
		</OverlayDrawer>
	}
}
