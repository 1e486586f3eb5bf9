use futures::future::{FutureExt, LocalBoxFuture, Shared};
use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;
use std::rc::Rc;

use super::PageId;
use crate::error::PageLoadError;

pub type LoadResult<M> = Result<M, PageLoadError>;

type Resolution<M> = Shared<LocalBoxFuture<'static, LoadResult<M>>>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadState {
	/// Never requested.
	Idle,
	Pending,
	Ready,
	Failed(PageLoadError),
}

/// Resolves pages on first use and keeps them for the rest of the session.
///
/// Concurrent requests for a page share one in-flight resolution. A failed resolution is kept
/// only until the page is requested again, at which point it is retried.
pub struct PageLoader<M> {
	source: Rc<dyn Fn(PageId) -> LocalBoxFuture<'static, LoadResult<M>>>,
	resolutions: Rc<RefCell<HashMap<PageId, Resolution<M>>>>,
}

impl<M> Clone for PageLoader<M> {
	fn clone(&self) -> Self {
		Self {
			source: self.source.clone(),
			resolutions: self.resolutions.clone(),
		}
	}
}

impl<M: Clone + 'static> PageLoader<M> {
	pub fn new(source: impl Fn(PageId) -> LocalBoxFuture<'static, LoadResult<M>> + 'static) -> Self {
		Self {
			source: Rc::new(source),
			resolutions: Default::default(),
		}
	}

	pub fn state(&self, page: PageId) -> LoadState {
		match self.resolutions.borrow().get(&page).map(Shared::peek) {
			None => LoadState::Idle,
			Some(None) => LoadState::Pending,
			Some(Some(Ok(_))) => LoadState::Ready,
			Some(Some(Err(err))) => LoadState::Failed(err.clone()),
		}
	}

	pub fn resolve(&self, page: PageId) -> impl Future<Output = LoadResult<M>> {
		let resolution = {
			let mut resolutions = self.resolutions.borrow_mut();
			match resolutions.get(&page) {
				Some(resolution) if !matches!(resolution.peek(), Some(Err(_))) => resolution.clone(),
				_ => {
					tracing::debug!(%page, "resolving page");
					let resolution = (self.source)(page).shared();
					resolutions.insert(page, resolution.clone());
					resolution
				}
			}
		};
		async move {
			let result = resolution.await;
			if let Err(err) = &result {
				tracing::warn!(%page, %err, "page failed to load");
			}
			result
		}
	}
}
