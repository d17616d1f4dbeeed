use serde_json::Value;
use url::form_urlencoded;

use crate::Request;

/// A place in the request where a token may be found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
	Form,
	Header,
	Json,
	UrlEncoded,
}

impl Source {
	/// The order in which sources are tried.
	pub const ORDER: [Self; 4] = [Self::Form, Self::Header, Self::Json, Self::UrlEncoded];

	pub fn extract(self, request: &Request, token_name: &str, header_name: &str) -> Option<String> {
		match self {
			Self::Form => request.form_value(token_name).map(str::to_owned),
			Self::Header => request
				.headers
				.get(header_name)
				.and_then(|value| value.to_str().ok())
				.map(str::to_owned),
			Self::Json => json_body(&request.body)?
				.get(token_name)?
				.as_str()
				.map(str::to_owned),
			Self::UrlEncoded => {
				if request.body.is_empty() || json_body(&request.body).is_some() {
					return None;
				}
				form_urlencoded::parse(request.body.as_bytes())
					.filter(|(key, _)| key == token_name)
					.last()
					.map(|(_, value)| value.into_owned())
			}
		}
	}

	/// Takes the token back out of the payload it was found in so that later processing never sees it.
	pub fn remove(self, request: &mut Request, token_name: &str) {
		match self {
			Self::Form => {
				if let Some(form) = &mut request.form {
					form.retain(|(key, _)| key != token_name);
				}
				// the form was decoded from the body, which must not keep a copy
				if request.is_form_submission() {
					request.body = without_pair(&request.body, token_name);
				}
			}
			// headers are not part of the payload
			Self::Header => {}
			Self::Json => {
				if let Some(mut json) = json_body(&request.body) {
					if let Some(object) = json.as_object_mut() {
						object.retain(|key, _| key != token_name);
					}
					if let Ok(body) = serde_json::to_string(&json) {
						request.body = body;
					}
				}
			}
			Self::UrlEncoded => request.body = without_pair(&request.body, token_name),
		}
	}
}

fn without_pair(body: &str, name: &str) -> String {
	form_urlencoded::Serializer::new(String::new())
		.extend_pairs(form_urlencoded::parse(body.as_bytes()).filter(|(key, _)| key != name))
		.finish()
}

/// A body counts as JSON if it parses to anything but `null`.
fn json_body(body: &str) -> Option<Value> {
	if body.is_empty() {
		return None;
	}
	serde_json::from_str(body)
		.ok()
		.filter(|value: &Value| !value.is_null())
}

/// Tries every source in order. The first non-empty value wins.
pub fn posted_token(request: &Request, token_name: &str, header_name: &str) -> Option<(Source, String)> {
	Source::ORDER.into_iter().find_map(|source| {
		source
			.extract(request, token_name, header_name)
			.filter(|token| !token.is_empty())
			.map(|token| (source, token))
	})
}
