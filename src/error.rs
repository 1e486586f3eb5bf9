use crate::pages::PageId;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("failed to load the {page} page: {reason}")]
pub struct PageLoadError {
	pub page: PageId,
	pub reason: String,
}

impl PageLoadError {
	pub fn new(page: PageId, reason: impl Into<String>) -> Self {
		Self {
			page,
			reason: reason.into(),
		}
	}
}
