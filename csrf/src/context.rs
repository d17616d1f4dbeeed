use std::collections::HashMap;

use cookie::{Cookie, CookieJar};
use headers::HeaderMapExt as _;
use http::header::IntoHeaderName;
use http::{HeaderMap, HeaderValue, Method};
use time::OffsetDateTime;

/// The parts of an inbound request that CSRF protection looks at.
#[derive(Debug, Clone)]
pub struct Request {
	pub method: Method,
	pub headers: HeaderMap,
	/// Decoded form fields, present when the body was a form submission.
	pub form: Option<Vec<(String, String)>>,
	/// The raw body.
	pub body: String,
}

impl Request {
	pub fn new(method: Method) -> Self {
		Self {
			method,
			headers: HeaderMap::new(),
			form: None,
			body: String::new(),
		}
	}

	pub fn with_header<K: IntoHeaderName>(mut self, name: K, value: HeaderValue) -> Self {
		self.headers.append(name, value);
		self
	}

	pub fn with_form<K: Into<String>, V: Into<String>>(
		mut self,
		fields: impl IntoIterator<Item = (K, V)>,
	) -> Self {
		self.form = Some(
			fields
				.into_iter()
				.map(|(key, value)| (key.into(), value.into()))
				.collect(),
		);
		self
	}

	pub fn with_body(mut self, body: impl Into<String>) -> Self {
		self.body = body.into();
		self
	}

	/// The last value of a form field, like PHP-style form parsing would give.
	pub fn form_value(&self, name: &str) -> Option<&str> {
		self
			.form
			.as_deref()?
			.iter()
			.rev()
			.find(|(key, _)| key == name)
			.map(|(_, value)| value.as_str())
	}

	/// A POST with a URL-encoded body, whose fields are also found in `form`.
	pub(crate) fn is_form_submission(&self) -> bool {
		self.method == Method::POST
			&& self
				.headers
				.get(http::header::CONTENT_TYPE)
				.and_then(|value| value.to_str().ok())
				.map_or(false, |content_type| {
					content_type
						.trim_start()
						.to_ascii_lowercase()
						.starts_with("application/x-www-form-urlencoded")
				})
	}
}

impl From<http::Request<String>> for Request {
	/// URL-encoded POST bodies are also decoded into form fields.
	fn from(request: http::Request<String>) -> Self {
		let (parts, body) = request.into_parts();
		let mut ret = Self {
			method: parts.method,
			headers: parts.headers,
			form: None,
			body,
		};
		if ret.is_form_submission() {
			ret.form = Some(
				url::form_urlencoded::parse(ret.body.as_bytes())
					.into_owned()
					.collect(),
			);
		}
		ret
	}
}

/// Server-side per-client storage.
pub trait Session {
	fn get(&self, key: &str) -> Option<String>;
	fn set(&mut self, key: &str, value: String);
}

impl Session for HashMap<String, String> {
	fn get(&self, key: &str) -> Option<String> {
		HashMap::get(self, key).cloned()
	}

	fn set(&mut self, key: &str, value: String) {
		self.insert(key.to_owned(), value);
	}
}

/// Per-request state: the request itself, the cookies going in and out, the session if there is one, and the current time.
pub struct Context<'s> {
	pub request: Request,
	cookies: CookieJar,
	session: Option<&'s mut dyn Session>,
	now: OffsetDateTime,
}

impl<'s> Context<'s> {
	/// Reads the request cookies from the `Cookie` header.
	pub fn new(request: Request) -> Self {
		let mut cookies = CookieJar::new();
		if let Some(header) = request.headers.typed_get::<headers::Cookie>() {
			for (name, value) in header.iter() {
				cookies.add_original(Cookie::new(name.to_owned(), value.to_owned()));
			}
		}
		Self {
			request,
			cookies,
			session: None,
			now: OffsetDateTime::now_utc(),
		}
	}

	pub fn with_session(mut self, session: &'s mut dyn Session) -> Self {
		self.session = Some(session);
		self
	}

	/// Overrides the clock used for cookie expiry.
	pub fn at(mut self, now: OffsetDateTime) -> Self {
		self.now = now;
		self
	}

	#[inline]
	pub fn now(&self) -> OffsetDateTime {
		self.now
	}

	/// The current value of a cookie, including changes made while handling this request.
	pub fn cookie(&self, name: &str) -> Option<&str> {
		self.cookies.get(name).map(Cookie::value)
	}

	pub fn set_cookie(&mut self, cookie: Cookie<'static>) {
		self.cookies.add(cookie);
	}

	/// Cookies that have to be sent back with the response.
	pub fn response_cookies(&self) -> impl Iterator<Item = &Cookie<'static>> {
		self.cookies.delta()
	}

	pub fn session(&mut self) -> Option<&mut (dyn Session + 's)> {
		self.session.as_deref_mut()
	}

	pub fn into_request(self) -> Request {
		self.request
	}
}
