#![deny(
	absolute_paths_not_starting_with_crate,
	future_incompatible,
	keyword_idents,
	macro_use_extern_crate,
	meta_variable_misuse,
	missing_abi,
	non_ascii_idents,
	nonstandard_style,
	noop_method_call,
	rust_2018_idioms
)]
#![forbid(unsafe_code)]

//! Page windows and pagination links.
//!
//! A [`PageWindow`] decides which page numbers to show, a [`UriTemplate`] knows how to write a page number into a base URI, and [`Pagination`] combines the two into links.

mod links;
mod percent;
mod query;
mod uri;
mod window;

pub use links::{Link, Pagination};
pub use query::{default_page, default_per_page, page_count, Query};
pub use uri::{ParseBaseError, Selector, UriTemplate};
pub use window::PageWindow;

pub type PageNum = i64;

pub fn default_page_selector() -> String {
	"page".to_owned()
}

/// How pagination links are built.
#[derive(serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
	/// Name of the query parameter holding the page number.
	#[serde(default = "default_page_selector")]
	pub page_selector: String,
	/// 1-indexed path segment holding the page number. `0` uses the query parameter instead.
	#[serde(default)]
	pub segment: usize,
	/// Number of links shown on either side of the current page. All pages are shown if unset.
	#[serde(default)]
	pub surround_count: Option<PageNum>,
	#[serde(default = "default_per_page")]
	pub per_page: PageNum,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			page_selector: default_page_selector(),
			segment: 0,
			surround_count: None,
			per_page: default_per_page(),
		}
	}
}

impl Config {
	pub fn selector(&self) -> Selector {
		Selector::new(self.segment, &self.page_selector)
	}

	/// Builds the links for `total` items, using the page and page size from `query` and the base URI `base`.
	pub fn paginate(
		&self,
		base: &str,
		query: Query,
		total: PageNum,
	) -> Result<Pagination, ParseBaseError> {
		let template = UriTemplate::parse(base, self.selector())?;
		let query = Query {
			per_page: Some(query.per_page_or(self.per_page)),
			..query
		};
		Ok(Pagination::new(query.window(total), template).with_surround_count(self.surround_count))
	}
}

#[cfg(test)]
mod test {
	use super::{Config, PageNum, Query};

	#[test]
	fn paginate_uses_configured_defaults() {
		let config = Config {
			surround_count: Some(1),
			per_page: 10,
			..Config::default()
		};
		let pagination = config
			.paginate("/articles", Query { page: Some(4), per_page: None }, 95)
			.unwrap();
		let window = pagination.window();
		assert_eq!(window.page_count(), 10);
		assert_eq!(window.pages(), 3..=5);
		assert_eq!(window.per_page_start(), Some(31));
		assert_eq!(window.per_page_end(), Some(40));
		assert_eq!(pagination.next_uri().as_deref(), Some("/articles?page=6"));
	}

	#[test]
	fn huge_requested_page_does_not_overflow() {
		let config = Config {
			surround_count: Some(PageNum::MAX),
			..Config::default()
		};
		let query = Query {
			page: Some(PageNum::MAX),
			per_page: None,
		};
		let pagination = config.paginate("/articles", query, 95).unwrap();
		let window = pagination.window();
		assert_eq!(window.pages(), 1..=5);
		assert_eq!(window.per_page_start(), Some(PageNum::MAX));
		assert_eq!(window.per_page_end(), Some(PageNum::MAX));
		assert!(!pagination.has_next_page());
		assert!(pagination.has_previous_page());
		assert_eq!(pagination.links().len(), 5);
	}

	#[test]
	fn paginate_by_segment() {
		let config = Config {
			segment: 2,
			..Config::default()
		};
		let pagination = config
			.paginate("/articles/1", Query::default(), 45)
			.unwrap();
		assert_eq!(pagination.last_uri(), "/articles/3");
	}
}
