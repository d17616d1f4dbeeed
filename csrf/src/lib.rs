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

//! Cross-site request forgery protection using a double-submitted secret.
//!
//! The secret ("hash") lives in a cookie or in the session. Pages embed it as a token, optionally masked with a fresh random key each time so that the emitted bytes never repeat. State-changing requests must send the token back, and [`Csrf::verify`] compares it with the stored hash.

use serde::Deserialize;

mod context;
mod error;
mod extract;
mod hash;
mod sanitize;
mod security;
mod set_cookie;

pub use context::{Context, Request, Session};
pub use error::{Error, Result};
pub use extract::{posted_token, Source};
pub use hash::{derandomize, Hash, MalformedToken, HASH_BYTES, RANDOMIZED_LEN};
pub use sanitize::sanitize_filename;
pub use security::{Csrf, State};
pub use set_cookie::encode as encode_cookie;

/// Where the hash is kept between requests.
#[derive(Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
	#[default]
	Cookie,
	Session,
}

#[derive(Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SameSite {
	#[default]
	Lax,
	Strict,
	None,
}

impl From<SameSite> for cookie::SameSite {
	fn from(same_site: SameSite) -> Self {
		match same_site {
			SameSite::Lax => Self::Lax,
			SameSite::Strict => Self::Strict,
			SameSite::None => Self::None,
		}
	}
}

/// Attributes of the hash cookie.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct CookieConfig {
	pub prefix: String,
	pub path: String,
	pub domain: Option<String>,
	pub secure: bool,
	pub http_only: bool,
	pub same_site: SameSite,
}

impl Default for CookieConfig {
	fn default() -> Self {
		Self {
			prefix: String::new(),
			path: "/".into(),
			domain: None,
			secure: false,
			http_only: true,
			same_site: SameSite::Lax,
		}
	}
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
	pub backend: Backend,
	/// Mask the token with a fresh key every time it is emitted.
	pub randomize: bool,
	/// Issue a new hash after every successful verification.
	pub regenerate: bool,
	/// Lifetime of the hash cookie in seconds. `0` means until the browser session ends.
	pub expires: i64,
	/// Name of the form or JSON field carrying the token, and the session key of the hash.
	pub token_name: String,
	pub header_name: String,
	/// Cookie name without the prefix.
	pub cookie_name: String,
	/// Whether a failed verification should redirect back instead of showing an error.
	pub redirect: bool,
	pub cookie: CookieConfig,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			backend: Backend::Cookie,
			randomize: false,
			regenerate: true,
			expires: 7200,
			token_name: "csrf_token_name".into(),
			header_name: "X-CSRF-TOKEN".into(),
			cookie_name: "csrf_cookie_name".into(),
			redirect: false,
			cookie: CookieConfig::default(),
		}
	}
}

impl Config {
	/// The cookie name including the prefix.
	pub fn cookie_name(&self) -> String {
		format!("{}{}", self.cookie.prefix, self.cookie_name)
	}
}
