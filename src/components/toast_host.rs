use leptos::ev::PointerEvent;
use leptos::html::Div;
use leptos::prelude::*;

use crate::config::TOAST_TICK;
use crate::theme::ThemeMode;
use crate::toast::*;

/// Handle for showing toasts, provided as context by the shell.
#[derive(Clone, Copy)]
pub struct Toaster(RwSignal<ToastQueue>);

impl Toaster {
	pub fn new(config: ToastConfig) -> Self {
		Self(RwSignal::new(ToastQueue::new(config)))
	}

	fn queue(&self) -> RwSignal<ToastQueue> {
		self.0
	}

	pub fn show(&self, kind: ToastKind, message: impl Into<String>) -> Option<ToastId> {
		let message = message.into();
		tracing::debug!(%kind, %message, "showing toast");
		self.0.try_update(|queue| queue.push(kind, message))
	}

	pub fn info(&self, message: impl Into<String>) -> Option<ToastId> {
		self.show(ToastKind::Info, message)
	}

	pub fn success(&self, message: impl Into<String>) -> Option<ToastId> {
		self.show(ToastKind::Success, message)
	}

	pub fn warning(&self, message: impl Into<String>) -> Option<ToastId> {
		self.show(ToastKind::Warning, message)
	}

	pub fn error(&self, message: impl Into<String>) -> Option<ToastId> {
		self.show(ToastKind::Error, message)
	}

	pub fn dismiss(&self, id: ToastId) {
		self.0.update(|queue| {
			queue.dismiss(id);
		});
	}
}

pub fn use_toaster() -> Toaster {
	expect_context()
}

#[component]
pub fn ToastHost(toaster: Toaster, #[prop(into)] theme: Signal<ThemeMode>) -> impl IntoView {
	let queue = toaster.queue();
	let (position, rtl) = queue.with_untracked(|queue| (queue.config().position, queue.config().rtl));

	let focused = leptos_use::use_window_focus();
	Effect::new(move |_| {
		let focused = focused.get();
		queue.update(|queue| queue.set_window_focused(focused));
	});

	match set_interval_with_handle(
		move || {
			if queue.with_untracked(ToastQueue::has_running) {
				queue.update(|queue| {
					for id in queue.advance(TOAST_TICK) {
						tracing::trace!(?id, "toast expired");
					}
				});
			}
		},
		TOAST_TICK,
	) {
		Ok(handle) => on_cleanup(move || handle.clear()),
		Err(err) => tracing::error!(?err, "failed to start the toast timer"),
	}

	view! {
		<div
			class=format!("ToastHost ToastHost--{position}")
			dir=if rtl { "rtl" } else { "ltr" }
			data-theme=move || theme.get().to_string()
		>
			<For
				each=move || {
					queue
						.with(|queue| queue.visible().into_iter().map(|toast| toast.id).collect::<Vec<_>>())
				}
				key=|id| *id
				children=move |id| view! { <ToastItem queue id/> }
			/>
		</div>
	}
}

#[component]
fn ToastItem(queue: RwSignal<ToastQueue>, id: ToastId) -> impl IntoView {
	let Some((kind, message)) =
		queue.with_untracked(|queue| queue.get(id).map(|toast| (toast.kind, toast.message.clone())))
	else {
		return ().into_any();
	};
	let hide_progress_bar = queue.with_untracked(|queue| queue.config().hide_progress_bar);

	let element = NodeRef::<Div>::new();
	let drag_origin = StoredValue::new(None::<f64>);

	let offset = move || {
		queue.with(|queue| queue.get(id).map(Toast::drag_offset).unwrap_or_default())
	};
	let progress = move || queue.with(|queue| queue.progress(id)).unwrap_or_default();

	let end_drag = move || {
		if drag_origin.get_value().is_none() {
			return;
		}
		drag_origin.set_value(None);
		let width = element
			.get_untracked()
			.map(|element| element.offset_width() as f64)
			.unwrap_or_default();
		queue.update(|queue| {
			queue.drag_end(id, width);
		});
	};

	view! {
		<div
			node_ref=element
			class=format!("Toast Toast--{kind}")
			role="alert"
			style=move || format!("transform: translateX({}px)", offset())
			on:mouseenter=move |_| queue.update(|queue| queue.set_hovered(id, true))
			on:mouseleave=move |_| queue.update(|queue| queue.set_hovered(id, false))
			on:pointerdown=move |ev: PointerEvent| {
				if queue.with_untracked(|queue| queue.config().draggable) {
					drag_origin.set_value(Some(ev.client_x() as f64));
					queue.update(|queue| queue.drag_start(id));
				}
			}
			on:pointermove=move |ev: PointerEvent| {
				if let Some(origin) = drag_origin.get_value() {
					queue.update(|queue| queue.drag_move(id, ev.client_x() as f64 - origin));
				}
			}
			on:pointerup=move |_| end_drag()
			on:pointercancel=move |_| end_drag()
			on:pointerleave=move |_| end_drag()
			on:click=move |_| {
				queue.update(|queue| {
					queue.click(id);
				});
			}
		>
			<div class="Toast-body">{message}</div>
			{(!hide_progress_bar)
				.then(|| {
					view! {
						<div
							class="Toast-progress"
							style=move || format!("width: {:.1}%", progress() * 100.0)
						></div>
					}
				})}
		</div>
	}
	.into_any()
}
