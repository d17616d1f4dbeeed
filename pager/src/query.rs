use crate::{PageNum, PageWindow};

/// The page and page size a client asked for, as found in the query string.
#[derive(serde::Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Query {
	pub page: Option<PageNum>,
	pub per_page: Option<PageNum>,
}

pub const fn default_page() -> PageNum {
	1
}

pub const fn default_per_page() -> PageNum {
	20
}

impl Query {
	/// The requested page, or the first one. Values below 1 are treated as 1.
	#[inline]
	pub fn page(&self) -> PageNum {
		self.page.unwrap_or(default_page()).max(1)
	}

	/// The requested page size, or `default` when missing or not positive.
	#[inline]
	pub fn per_page_or(&self, default: PageNum) -> PageNum {
		self.per_page.filter(|&size| size > 0).unwrap_or(default)
	}

	#[inline]
	pub fn per_page(&self) -> PageNum {
		self.per_page_or(default_per_page())
	}

	/// How many rows the data source should skip.
	#[inline]
	pub fn offset(&self) -> PageNum {
		(self.page() - 1).saturating_mul(self.per_page())
	}

	/// How many rows the data source should return.
	#[inline]
	pub fn limit(&self) -> PageNum {
		self.per_page()
	}

	pub fn page_count(&self, total: PageNum) -> PageNum {
		page_count(total, self.per_page())
	}

	/// A window over all pages for `total` items, with the item bounds of the requested page.
	pub fn window(&self, total: PageNum) -> PageWindow {
		PageWindow::with_items(
			self.page_count(total),
			self.page(),
			Some(total),
			Some(self.per_page()),
		)
	}
}

/// Number of pages needed for `total` items, rounding up.
pub fn page_count(total: PageNum, per_page: PageNum) -> PageNum {
	if total <= 0 || per_page <= 0 {
		return 0;
	}
	(total - 1) / per_page + 1
}
