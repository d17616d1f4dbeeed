use serde::Serialize;

use crate::{PageNum, PageWindow, UriTemplate};

/// One numbered link in the pagination bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
	pub uri: String,
	pub title: PageNum,
	pub active: bool,
}

/// Everything a view needs to render a pagination bar.
///
/// "Previous" and "next" step over the whole window of displayed links, while "previous page" and "next page" step by a single page from the current one.
#[derive(Debug, Clone)]
pub struct Pagination {
	window: PageWindow,
	template: UriTemplate,
}

impl Pagination {
	pub fn new(window: PageWindow, template: UriTemplate) -> Self {
		Self { window, template }
	}

	pub fn with_surround_count(mut self, count: Option<PageNum>) -> Self {
		self.window.set_surround_count(count);
		self
	}

	#[inline]
	pub fn window(&self) -> &PageWindow {
		&self.window
	}

	#[inline]
	pub fn template(&self) -> &UriTemplate {
		&self.template
	}

	pub fn has_previous(&self) -> bool {
		self.window.has_previous()
	}

	/// The page just before the first displayed link.
	pub fn previous_uri(&self) -> Option<String> {
		self
			.has_previous()
			.then(|| self.uri(self.window.first_page_number() - 1))
	}

	pub fn has_next(&self) -> bool {
		self.window.has_next()
	}

	/// The page just after the last displayed link.
	pub fn next_uri(&self) -> Option<String> {
		self
			.has_next()
			.then(|| self.uri(self.window.last_page_number() + 1))
	}

	pub fn has_previous_page(&self) -> bool {
		self.window.has_previous_page()
	}

	pub fn previous_page_uri(&self) -> Option<String> {
		self
			.has_previous_page()
			.then(|| self.uri(self.window.current_page_number() - 1))
	}

	pub fn has_next_page(&self) -> bool {
		self.window.has_next_page()
	}

	pub fn next_page_uri(&self) -> Option<String> {
		self
			.has_next_page()
			.then(|| self.uri(self.window.current_page_number() + 1))
	}

	pub fn first_uri(&self) -> String {
		self.uri(1)
	}

	pub fn last_uri(&self) -> String {
		self.uri(self.window.page_count())
	}

	pub fn current_uri(&self) -> String {
		self.uri(self.window.current_page_number())
	}

	/// The numbered links of the window, ascending.
	pub fn links(&self) -> Vec<Link> {
		let current = self.window.current_page_number();
		self
			.window
			.pages()
			.map(|page| Link {
				uri: self.uri(page),
				title: page,
				active: page == current,
			})
			.collect()
	}

	#[inline]
	fn uri(&self, page: PageNum) -> String {
		self.template.with_page(page)
	}
}

#[cfg(test)]
mod test;
