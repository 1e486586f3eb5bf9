use leptos::prelude::*;
use leptos_router::hooks::use_location;

use super::*;
use crate::config::LOADING_TEXT;
use crate::shell_state::{footer_visibility_memo, DrawerController};
use crate::theme::ThemeMode;
use crate::toast::ToastConfig;

#[component]
pub fn ShellLayout(#[prop(into)] theme: Signal<ThemeMode>) -> impl IntoView {
	let drawer = DrawerController::new();
	let toaster = Toaster::new(ToastConfig::default());
	provide_context(toaster);

	let location = use_location();
	let footer = footer_visibility_memo(location.pathname.into());

	view! {
		<div class="FullHeight" style="min-height: 100%">
			<div class="FullHeight" style="min-height: 100%">
				<AppDrawer drawer/>
				<Header drawer/>
				<ToastHost toaster theme/>
				<Suspense fallback=|| view! { <fallback::Loading text=LOADING_TEXT/> }>
					<RoutedContent/>
				</Suspense>
			</div>
			<Show when=move || footer.get().is_visible()>
				<Footer/>
			</Show>
			<ScrollToTopFab/>
		</div>
	}
}
