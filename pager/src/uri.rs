use std::borrow::Cow;

use url::{Position, Url};

use crate::{percent, PageNum};

/// Relative bases are resolved against this origin, which is stripped again from the output.
static RELATIVE_ORIGIN: &str = "http://relative.invalid/";

#[derive(Debug, thiserror::Error)]
#[error("parsing base URI {uri:?}: {source}")]
pub struct ParseBaseError {
	uri: String,
	#[source]
	source: url::ParseError,
}

/// Where the page number lives in a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
	/// A named query parameter.
	Query(String),
	/// A 1-indexed path segment.
	Segment(usize),
}

impl Selector {
	/// Segment `0` means "use the query parameter instead".
	pub fn new(segment: usize, page_selector: &str) -> Self {
		if segment == 0 {
			Self::Query(page_selector.to_owned())
		} else {
			Self::Segment(segment)
		}
	}
}

impl Default for Selector {
	fn default() -> Self {
		Self::Query(crate::default_page_selector())
	}
}

/// How much of the resolved base is written back out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Relative {
	/// Absolute URI, written in full.
	No,
	/// `//host/path`, written without the scheme.
	Scheme,
	/// `/path`, written from the path on.
	Path,
}

/// A base URI plus the knowledge of where to write the page number into it.
#[derive(Debug, Clone)]
pub struct UriTemplate {
	base: Url,
	relative: Relative,
	selector: Selector,
}

impl UriTemplate {
	/// Accepts absolute URIs as well as paths like `/articles?sort=new` and scheme-relative URIs like `//cdn.example.com/articles`. The produced links keep the form of the base.
	pub fn parse(base: &str, selector: Selector) -> Result<Self, ParseBaseError> {
		let error = |source| ParseBaseError {
			uri: base.to_owned(),
			source,
		};
		let (url, relative) = match Url::parse(base) {
			Ok(url) => (url, Relative::No),
			Err(url::ParseError::RelativeUrlWithoutBase) => {
				let url = Url::parse(RELATIVE_ORIGIN)
					.and_then(|origin| origin.join(base))
					.map_err(error)?;
				let relative = if base.starts_with("//") {
					Relative::Scheme
				} else {
					Relative::Path
				};
				(url, relative)
			}
			Err(other) => return Err(error(other)),
		};
		Ok(Self::from_url(url, selector).relative(relative))
	}

	pub fn from_url(base: Url, selector: Selector) -> Self {
		Self {
			base,
			relative: Relative::No,
			selector,
		}
	}

	fn relative(mut self, relative: Relative) -> Self {
		self.relative = relative;
		self
	}

	#[inline]
	pub fn selector(&self) -> &Selector {
		&self.selector
	}

	/// The base URI with the page number set to `page`. Everything else about the base is kept.
	pub fn with_page(&self, page: PageNum) -> String {
		let mut url = self.base.clone();
		match &self.selector {
			Selector::Query(name) => {
				let query = set_query_param(url.query(), name, page);
				url.set_query(Some(&query));
			}
			Selector::Segment(position) => set_segment(&mut url, *position, page),
		}

		match self.relative {
			Relative::No => url.into(),
			Relative::Scheme => format!("//{}", &url[Position::BeforeUsername..]),
			Relative::Path => url[Position::BeforePath..].to_owned(),
		}
	}
}

/// Replaces the first pair named `name` in place and drops any later ones, or appends a new pair. The other pairs are kept byte-for-byte.
fn set_query_param(query: Option<&str>, name: &str, page: PageNum) -> String {
	let replacement = format!("{}={page}", percent::encode(name));
	let mut replaced = false;
	let mut pairs: Vec<Cow<'_, str>> = Vec::new();

	for pair in query.unwrap_or("").split('&').filter(|pair| !pair.is_empty()) {
		let key = pair.split_once('=').map_or(pair, |(key, _)| key);
		if percent::decode_query_key(key) == name {
			if !replaced {
				pairs.push(Cow::Owned(replacement.clone()));
				replaced = true;
			}
			continue;
		}
		pairs.push(Cow::Borrowed(pair));
	}

	if !replaced {
		pairs.push(Cow::Owned(replacement));
	}
	pairs.join("&")
}

/// Positions one past the last segment append a segment; positions further out leave the path alone.
fn set_segment(url: &mut Url, position: usize, page: PageNum) {
	let mut segments: Vec<String> = match url.path_segments() {
		Some(segments) => segments.map(str::to_owned).collect(),
		// cannot-be-a-base URLs like `mailto:` have no segments to replace
		None => return,
	};
	let trailing_slash = segments.len() > 1 && segments.last().map_or(false, String::is_empty);
	if trailing_slash {
		segments.pop();
	}

	let page = page.to_string();
	match position.checked_sub(1) {
		Some(index) if index < segments.len() => segments[index] = page,
		Some(index) if index == segments.len() => segments.push(page),
		_ => return,
	}

	if trailing_slash {
		segments.push(String::new());
	}
	url.set_path(&format!("/{}", segments.join("/")));
}
