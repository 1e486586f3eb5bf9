use futures::future::FutureExt;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_params_map};

mod loader;
pub use loader::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, derive_more::Display)]
pub enum PageId {
	Cameras,
	Recordings,
	#[display("Camera recordings")]
	CameraRecordings,
	#[display("Daily recordings")]
	CameraRecordingsDaily,
	Configuration,
	Entities,
}

/// A resolved page. Route parameters are read by the page itself.
#[derive(Clone, Copy)]
pub struct PageModule {
	render: fn() -> AnyView,
}

impl PageModule {
	pub fn builtin(page: PageId) -> Self {
		let render: fn() -> AnyView = match page {
			PageId::Cameras => || view! { <Cameras/> }.into_any(),
			PageId::Recordings => || view! { <Recordings/> }.into_any(),
			PageId::CameraRecordings => || view! { <CameraRecordings/> }.into_any(),
			PageId::CameraRecordingsDaily => || view! { <CameraRecordingsDaily/> }.into_any(),
			PageId::Configuration => || view! { <Configuration/> }.into_any(),
			PageId::Entities => || view! { <Entities/> }.into_any(),
		};
		Self { render }
	}

	pub fn render(&self) -> AnyView {
		(self.render)()
	}
}

/// Reads a path parameter, passed through without validation.
fn use_param(name: &'static str) -> Signal<String> {
	let params = use_params_map();
	Signal::derive(move || {
		params.with(|params| params.get(name).map(|value| value.to_string()).unwrap_or_default())
	})
}

/// Pages are compiled into the application, so resolving one completes immediately.
pub fn builtin_loader() -> PageLoader<PageModule> {
	PageLoader::new(|page| async move { Ok(PageModule::builtin(page)) }.boxed_local())
}

#[component]
pub fn Cameras() -> impl IntoView {
	view! {
		<Title text="Cameras"/>
		<section class="Page Cameras">
			<h1>"Cameras"</h1>
		</section>
	}
}

#[component]
pub fn Recordings() -> impl IntoView {
	view! {
		<Title text="Recordings"/>
		<section class="Page Recordings">
			<h1>"Recordings"</h1>
		</section>
	}
}

#[component]
pub fn CameraRecordings() -> impl IntoView {
	let identifier = use_param("identifier");
	view! {
		<Title text=move || format!("Recordings - {}", identifier.get())/>
		<section class="Page CameraRecordings">
			<h1>{identifier}</h1>
			<A href="/recordings">"All recordings"</A>
		</section>
	}
}

#[component]
pub fn CameraRecordingsDaily() -> impl IntoView {
	let identifier = use_param("identifier");
	let date = use_param("date");
	view! {
		<Title text=move || format!("Recordings - {} - {}", identifier.get(), date.get())/>
		<section class="Page CameraRecordingsDaily">
			<h1>{identifier}</h1>
			<h2>{date}</h2>
			<A href=move || format!("/recordings/{}", identifier.get())>"All days"</A>
		</section>
	}
}

#[component]
pub fn Configuration() -> impl IntoView {
	view! {
		<Title text="Configuration"/>
		<section class="Page Configuration">
			<h1>"Configuration"</h1>
		</section>
	}
}

#[component]
pub fn Entities() -> impl IntoView {
	view! {
		<Title text="Entities"/>
		<section class="Page Entities">
			<h1>"Entities"</h1>
		</section>
	}
}

#[component]
pub fn NotFound() -> impl IntoView {
	let path = use_location().pathname.get_untracked();
	tracing::info!(%path, "no route matches");

	view! {
		<Title text="Not found"/>
		<div class="NotFound">
			<div>{format!("Not found: {path}")}</div>
			<A href="/">"Return home"</A>
		</div>
	}
}
