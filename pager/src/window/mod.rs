use crate::PageNum;

/// The range of page numbers to display as links, plus the item bounds of the current page.
///
/// No input is rejected. A `current` outside of `1..=page_count` is kept as-is and may produce an inverted window (`first > last`), which renders as no links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
	first: PageNum,
	last: PageNum,
	current: PageNum,
	page_count: PageNum,
	total: Option<PageNum>,
	per_page: Option<PageNum>,
	per_page_start: Option<PageNum>,
	per_page_end: Option<PageNum>,
}

impl PageWindow {
	/// Creates a window showing every page. Call [`Self::set_surround_count`] to narrow it.
	pub fn new(page_count: PageNum, current: PageNum) -> Self {
		Self {
			first: 1,
			last: page_count,
			current,
			page_count,
			total: None,
			per_page: None,
			per_page_start: None,
			per_page_end: None,
		}
	}

	/// Creates a window that also knows the total number of items and the page size, so the item bounds of the current page are available.
	pub fn with_items(
		page_count: PageNum,
		current: PageNum,
		total: Option<PageNum>,
		per_page: Option<PageNum>,
	) -> Self {
		let mut ret = Self::new(page_count, current);
		ret.total = total;
		ret.per_page = per_page;
		ret.compute_per_page_bounds();
		ret
	}

	/// Narrows the window to `count` pages on either side of the current page.
	///
	/// `None` leaves the window unchanged. The item bounds are not affected.
	pub fn set_surround_count(&mut self, count: Option<PageNum>) -> &mut Self {
		if let Some(count) = count {
			self.compute_window(count);
		}
		self
	}

	fn compute_window(&mut self, count: PageNum) {
		let first = self.current.saturating_sub(count);
		self.first = if first > 0 { first } else { 1 };
		let last = self.current.saturating_add(count);
		self.last = if last <= self.page_count {
			last
		} else {
			self.page_count
		};
	}

	fn compute_per_page_bounds(&mut self) {
		let (total, per_page) = match (self.total, self.per_page) {
			(Some(total), Some(per_page)) if self.page_count > 0 => (total, per_page),
			_ => {
				self.per_page_start = None;
				self.per_page_end = None;
				return;
			}
		};

		// `current` is client-supplied and may be anywhere up to `PageNum::MAX`
		let start = per_page
			.saturating_mul(self.current.saturating_sub(1))
			.saturating_add(1);

		// the last page takes whatever is left over
		if self.last == self.current {
			self.per_page_start = Some(start);
			self.per_page_end = Some(total);
			return;
		}

		self.per_page_start = Some(if self.current == 1 { 1 } else { start });
		self.per_page_end = Some(per_page.saturating_mul(self.current));
	}

	#[inline]
	pub fn first_page_number(&self) -> PageNum {
		self.first
	}

	#[inline]
	pub fn last_page_number(&self) -> PageNum {
		self.last
	}

	#[inline]
	pub fn current_page_number(&self) -> PageNum {
		self.current
	}

	#[inline]
	pub fn page_count(&self) -> PageNum {
		self.page_count
	}

	#[inline]
	pub fn total(&self) -> Option<PageNum> {
		self.total
	}

	#[inline]
	pub fn per_page(&self) -> Option<PageNum> {
		self.per_page
	}

	/// 1-indexed number of the first item shown on the current page.
	#[inline]
	pub fn per_page_start(&self) -> Option<PageNum> {
		self.per_page_start
	}

	/// 1-indexed number of the last item shown on the current page, inclusive.
	#[inline]
	pub fn per_page_end(&self) -> Option<PageNum> {
		self.per_page_end
	}

	pub fn previous_page_number(&self) -> Option<PageNum> {
		if self.current == 1 {
			None
		} else {
			self.current.checked_sub(1)
		}
	}

	pub fn next_page_number(&self) -> Option<PageNum> {
		if self.current == self.page_count {
			None
		} else {
			self.current.checked_add(1)
		}
	}

	/// The pages in the window, in ascending order. Empty if the window is inverted.
	pub fn pages(&self) -> std::ops::RangeInclusive<PageNum> {
		self.first..=self.last
	}

	/// Whether there is a page before the first page of the window.
	pub fn has_previous(&self) -> bool {
		self.first > 1
	}

	/// Whether there is a page after the last page of the window.
	pub fn has_next(&self) -> bool {
		self.page_count > self.last
	}

	/// Whether there is a page directly before the current page.
	pub fn has_previous_page(&self) -> bool {
		self.current > 1
	}

	/// Whether there is a page directly after the current page within the window.
	pub fn has_next_page(&self) -> bool {
		self.current < self.last
	}
}

#[cfg(test)]
mod test;
