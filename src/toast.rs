//! Transient notifications.
//!
//! [`ToastQueue`] holds the toasts currently on screen and implements their countdown, pausing
//! and dismissal rules. It is plain data, driven by the `ToastHost` component.

use std::time::Duration;

use crate::config::{TOAST_AUTO_CLOSE, TOAST_DRAG_FRACTION};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, derive_more::Display)]
pub enum ToastPosition {
	#[display("top-left")]
	TopLeft,
	#[display("top-center")]
	TopCenter,
	#[display("top-right")]
	TopRight,
	#[default]
	#[display("bottom-left")]
	BottomLeft,
	#[display("bottom-center")]
	BottomCenter,
	#[display("bottom-right")]
	BottomRight,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, derive_more::Display)]
pub enum ToastKind {
	#[default]
	#[display("default")]
	Default,
	#[display("info")]
	Info,
	#[display("success")]
	Success,
	#[display("warning")]
	Warning,
	#[display("error")]
	Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastConfig {
	pub position: ToastPosition,
	/// `None` keeps toasts on screen until they are dismissed.
	pub auto_close: Option<Duration>,
	pub hide_progress_bar: bool,
	pub newest_on_top: bool,
	pub close_on_click: bool,
	pub rtl: bool,
	pub pause_on_focus_loss: bool,
	pub draggable: bool,
	pub drag_fraction: f64,
	pub pause_on_hover: bool,
}

impl Default for ToastConfig {
	fn default() -> Self {
		Self {
			position: ToastPosition::BottomLeft,
			auto_close: Some(TOAST_AUTO_CLOSE),
			hide_progress_bar: false,
			newest_on_top: false,
			close_on_click: true,
			rtl: false,
			pause_on_focus_loss: true,
			draggable: true,
			drag_fraction: TOAST_DRAG_FRACTION,
			pause_on_hover: true,
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
	pub id: ToastId,
	pub kind: ToastKind,
	pub message: String,
	remaining: Option<Duration>,
	hovered: bool,
	drag: Option<f64>,
	suppress_click: bool,
}

impl Toast {
	/// Horizontal offset while the toast is being dragged.
	pub fn drag_offset(&self) -> f64 {
		self.drag.unwrap_or(0.0)
	}

	pub fn is_dragging(&self) -> bool {
		self.drag.is_some()
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastQueue {
	config: ToastConfig,
	toasts: Vec<Toast>,
	next_id: u64,
	window_focused: bool,
}

impl ToastQueue {
	pub fn new(config: ToastConfig) -> Self {
		Self {
			config,
			toasts: Vec::new(),
			next_id: 0,
			window_focused: true,
		}
	}

	pub fn config(&self) -> &ToastConfig {
		&self.config
	}

	pub fn is_empty(&self) -> bool {
		self.toasts.is_empty()
	}

	pub fn len(&self) -> usize {
		self.toasts.len()
	}

	pub fn get(&self, id: ToastId) -> Option<&Toast> {
		self.toasts.iter().find(|toast| toast.id == id)
	}

	fn get_mut(&mut self, id: ToastId) -> Option<&mut Toast> {
		self.toasts.iter_mut().find(|toast| toast.id == id)
	}

	pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> ToastId {
		let id = ToastId(self.next_id);
		self.next_id += 1;
		self.toasts.push(Toast {
			id,
			kind,
			message: message.into(),
			remaining: self.config.auto_close,
			hovered: false,
			drag: None,
			suppress_click: false,
		});
		id
	}

	pub fn dismiss(&mut self, id: ToastId) -> bool {
		let before = self.toasts.len();
		self.toasts.retain(|toast| toast.id != id);
		self.toasts.len() != before
	}

	pub fn clear(&mut self) {
		self.toasts.clear();
	}

	/// Toasts in display order, top to bottom of the stack.
	pub fn visible(&self) -> Vec<&Toast> {
		let mut toasts: Vec<_> = self.toasts.iter().collect();
		if self.config.newest_on_top {
			toasts.reverse();
		}
		toasts
	}

	pub fn is_paused(&self, toast: &Toast) -> bool {
		toast.is_dragging()
			|| (self.config.pause_on_hover && toast.hovered)
			|| (self.config.pause_on_focus_loss && !self.window_focused)
	}

	/// Whether any toast is still counting down.
	pub fn has_running(&self) -> bool {
		self
			.toasts
			.iter()
			.any(|toast| toast.remaining.is_some() && !self.is_paused(toast))
	}

	/// Counts down every running toast by `elapsed` and removes the ones that expire.
	pub fn advance(&mut self, elapsed: Duration) -> Vec<ToastId> {
		let paused: Vec<bool> = self.toasts.iter().map(|toast| self.is_paused(toast)).collect();
		let mut expired = Vec::new();
		for (toast, paused) in self.toasts.iter_mut().zip(paused) {
			if paused {
				continue;
			}
			if let Some(remaining) = toast.remaining.as_mut() {
				*remaining = remaining.saturating_sub(elapsed);
				if remaining.is_zero() {
					expired.push(toast.id);
				}
			}
		}
		self.toasts.retain(|toast| !expired.contains(&toast.id));
		expired
	}

	/// Fraction of the auto-close time still remaining, for the progress bar.
	pub fn progress(&self, id: ToastId) -> Option<f64> {
		let total = self.config.auto_close?;
		let remaining = self.get(id)?.remaining?;
		if total.is_zero() {
			return Some(0.0);
		}
		Some(remaining.as_secs_f64() / total.as_secs_f64())
	}

	pub fn set_hovered(&mut self, id: ToastId, hovered: bool) {
		if let Some(toast) = self.get_mut(id) {
			toast.hovered = hovered;
		}
	}

	pub fn set_window_focused(&mut self, focused: bool) {
		self.window_focused = focused;
	}

	/// Handles a click on a toast, returning whether it was dismissed.
	///
	/// A click that ends a drag gesture never dismisses.
	pub fn click(&mut self, id: ToastId) -> bool {
		let close_on_click = self.config.close_on_click;
		let Some(toast) = self.get_mut(id) else {
			return false;
		};
		if std::mem::take(&mut toast.suppress_click) || !close_on_click {
			return false;
		}
		self.dismiss(id)
	}

	pub fn drag_start(&mut self, id: ToastId) {
		if !self.config.draggable {
			return;
		}
		if let Some(toast) = self.get_mut(id) {
			toast.drag = Some(0.0);
		}
	}

	pub fn drag_move(&mut self, id: ToastId, dx: f64) {
		if let Some(toast) = self.get_mut(id) {
			if toast.drag.is_some() {
				toast.drag = Some(dx);
			}
		}
	}

	/// Ends a drag, dismissing the toast if it travelled far enough relative to `width`.
	pub fn drag_end(&mut self, id: ToastId, width: f64) -> bool {
		let fraction = self.config.drag_fraction;
		let Some(toast) = self.get_mut(id) else {
			return false;
		};
		let Some(dx) = toast.drag.take() else {
			return false;
		};
		if dx != 0.0 {
			toast.suppress_click = true;
		}
		if width > 0.0 && dx.abs() >= width * fraction {
			tracing::debug!(?id, dx, width, "toast dragged away");
			return self.dismiss(id);
		}
		false
	}
}

impl Default for ToastQueue {
	fn default() -> Self {
		Self::new(ToastConfig::default())
	}
}
