use cookie::Cookie;
use http::header::{InvalidHeaderValue, SET_COOKIE};
use http::{HeaderMap, HeaderValue};
use time::{Duration, OffsetDateTime};

use crate::{Config, Context};

impl Config {
	/// The cookie carrying `hash`. An `expires` of zero makes it last until the browser session ends.
	pub(crate) fn hash_cookie(&self, hash: &str, now: OffsetDateTime) -> Cookie<'static> {
		let mut builder = Cookie::build(self.cookie_name(), hash.to_owned())
			.path(self.cookie.path.clone())
			.secure(self.cookie.secure)
			.http_only(self.cookie.http_only)
			.same_site(self.cookie.same_site.into());
		if let Some(domain) = &self.cookie.domain {
			builder = builder.domain(domain.clone());
		}
		if self.expires != 0 {
			builder = builder.expires(now + Duration::seconds(self.expires));
		}
		builder.finish()
	}
}

pub fn encode(cookie: &Cookie<'_>) -> Result<HeaderValue, InvalidHeaderValue> {
	cookie.to_string().parse()
}

impl Context<'_> {
	/// Appends a `Set-Cookie` header for every cookie changed while handling this request.
	pub fn write_set_cookie(&self, headers: &mut HeaderMap) -> Result<(), InvalidHeaderValue> {
		for cookie in self.response_cookies() {
			headers.append(SET_COOKIE, encode(cookie)?);
		}
		Ok(())
	}
}
