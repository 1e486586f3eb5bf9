use leptos::prelude::*;
use thaw::Spinner;

#[component]
pub fn Loading(#[prop(into)] text: String) -> impl IntoView {
	view! {
		<div class="Loading">
			<Spinner label=text/>
		</div>
	}
}

#[component]
pub fn ErrorList(#[prop(into)] errors: Signal<Errors>) -> impl IntoView {
	view! {
		<ul class="ErrorList">
			{move || {
				errors.with(move |errors|
					errors
					.iter()
					.map(|(_, e)| view! { <li>{e.to_string()}</li> })
					.collect_view())
			}}
		</ul>
	}
}
