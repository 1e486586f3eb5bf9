use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use leptos_router::components::{Redirect, Route, Routes};
use leptos_router::{path, NavigateOptions};
use send_wrapper::SendWrapper;

use super::fallback::ErrorList;
use super::use_toaster;
use crate::config::ROOT_PATH;
use crate::pages::{NotFound, PageId, PageLoader, PageModule};

pub type SharedPageLoader = StoredValue<PageLoader<PageModule>, LocalStorage>;

/// The application's routes, in declaration order. Undeclared paths render [`NotFound`].
#[component]
pub fn RoutedContent() -> impl IntoView {
	view! {
		<Routes fallback=|| view! { <NotFound/> }>
			<Route path=path!("/cameras") view=LegacyCamerasRedirect/>
			<Route path=path!("/") view=|| view! { <LazyPage page=PageId::Cameras/> }/>
			<Route path=path!("/recordings") view=|| view! { <LazyPage page=PageId::Recordings/> }/>
			<Route
				path=path!("/recordings/:identifier")
				view=|| view! { <LazyPage page=PageId::CameraRecordings/> }
			/>
			<Route
				path=path!("/recordings/:identifier/:date")
				view=|| view! { <LazyPage page=PageId::CameraRecordingsDaily/> }
			/>
			<Route
				path=path!("/configuration")
				view=|| view! { <LazyPage page=PageId::Configuration/> }
			/>
			<Route path=path!("/entities") view=|| view! { <LazyPage page=PageId::Entities/> }/>
		</Routes>
	}
}

#[component]
fn LegacyCamerasRedirect() -> impl IntoView {
	tracing::debug!(to = ROOT_PATH, "redirecting legacy cameras path");
	let options = NavigateOptions {
		replace: true,
		..Default::default()
	};
	view! { <Redirect path=ROOT_PATH options/> }
}

/// Waits for `page` to resolve, then renders it. Must be placed inside a `Suspense`.
#[component]
fn LazyPage(page: PageId) -> impl IntoView {
	let loader: SharedPageLoader = expect_context();
	let toaster = use_toaster();
	let resolution = loader.with_value(|loader| loader.resolve(page));
	let content = SendWrapper::new(async move {
		let result = resolution.await;
		if let Err(err) = &result {
			toaster.error(err.to_string());
		}
		result.map(|module| module.render())
	});

	view! {
		<ErrorBoundary fallback=|errors| view! { <ErrorList errors/> }>
			{Suspend::new(content)}
		</ErrorBoundary>
	}
}
