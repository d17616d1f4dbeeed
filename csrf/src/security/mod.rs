use http::Method;

use crate::error::{Error, Result};
use crate::hash::{derandomize, Hash};
use crate::{extract, Backend, Config, Context};

const PROTECTED_METHODS: [Method; 4] = [Method::POST, Method::PUT, Method::DELETE, Method::PATCH];

/// How the current hash came to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
	/// Read back from the cookie or session.
	Restored,
	/// Freshly generated and stored.
	Generated,
	/// A request carrying the hash was verified. If the hash was regenerated afterwards, this is the new one.
	Verified,
}

/// CSRF protection for one request.
///
/// Concurrent requests from the same client race when `regenerate` is on: whichever stores its new hash last wins, and pages rendered with the other hash stop verifying.
#[derive(Debug)]
pub struct Csrf {
	config: Config,
	hash: Hash,
	state: State,
}

impl Csrf {
	/// Restores the hash from the configured backend, or generates and stores a new one.
	pub fn new(config: Config, context: &mut Context<'_>) -> Result<Self> {
		let restored = match config.backend {
			Backend::Cookie => context.cookie(&config.cookie_name()).and_then(Hash::parse),
			Backend::Session => context
				.session()
				.ok_or(Error::MissingSession)?
				.get(&config.token_name)
				.and_then(|raw| Hash::parse(&raw)),
		};

		match restored {
			Some(hash) => {
				tracing::trace!(backend = ?config.backend, "restored CSRF hash");
				Ok(Self {
					config,
					hash,
					state: State::Restored,
				})
			}
			None => {
				let hash = Hash::generate();
				save(&config, &hash, context)?;
				Ok(Self {
					config,
					hash,
					state: State::Generated,
				})
			}
		}
	}

	/// Checks the token sent with a state-changing request.
	///
	/// Safe methods pass without looking at anything. On success the token is removed from the request payload, and the hash is regenerated if configured.
	pub fn verify(&mut self, context: &mut Context<'_>) -> Result<()> {
		if !PROTECTED_METHODS.contains(&context.request.method) {
			return Ok(());
		}

		let posted = extract::posted_token(
			&context.request,
			&self.config.token_name,
			&self.config.header_name,
		);
		let posted = match posted {
			Some((source, token)) if self.config.randomize => match derandomize(&token) {
				Ok(token) => Some((source, token)),
				Err(error) => {
					tracing::debug!(?source, %error, "malformed CSRF token");
					None
				}
			},
			other => other,
		};

		let source = match posted {
			Some((source, token)) if self.hash.matches(&token) => source,
			Some((source, _)) => {
				tracing::debug!(?source, "CSRF token does not match");
				return Err(Error::VerificationFailed);
			}
			None => {
				tracing::debug!("no CSRF token in request");
				return Err(Error::VerificationFailed);
			}
		};

		source.remove(&mut context.request, &self.config.token_name);

		if self.config.regenerate {
			self.generate_hash(context)?;
		}
		self.state = State::Verified;

		tracing::info!(?source, "CSRF token verified");
		Ok(())
	}

	/// Replaces the hash with a new random one and stores it right away.
	pub fn generate_hash(&mut self, context: &mut Context<'_>) -> Result<&Hash> {
		let hash = Hash::generate();
		save(&self.config, &hash, context)?;
		self.hash = hash;
		self.state = State::Generated;
		Ok(&self.hash)
	}

	/// The value to embed in a page. Masked with a fresh key on every call if randomization is on.
	pub fn token(&self) -> String {
		if self.config.randomize {
			self.hash.randomize()
		} else {
			self.hash.as_str().to_owned()
		}
	}

	#[inline]
	pub fn hash(&self) -> &Hash {
		&self.hash
	}

	#[inline]
	pub fn state(&self) -> State {
		self.state
	}

	#[inline]
	pub fn config(&self) -> &Config {
		&self.config
	}

	pub fn token_name(&self) -> &str {
		&self.config.token_name
	}

	pub fn header_name(&self) -> &str {
		&self.config.header_name
	}

	/// The cookie name including the prefix.
	pub fn cookie_name(&self) -> String {
		self.config.cookie_name()
	}

	pub fn should_redirect(&self) -> bool {
		self.config.redirect
	}
}

/// Writes are last-write-wins; nothing is locked.
fn save(config: &Config, hash: &Hash, context: &mut Context<'_>) -> Result<()> {
	match config.backend {
		Backend::Cookie => {
			let cookie = config.hash_cookie(hash.as_str(), context.now());
			context.set_cookie(cookie);
		}
		Backend::Session => {
			context
				.session()
				.ok_or(Error::MissingSession)?
				.set(&config.token_name, hash.as_str().to_owned());
		}
	}
	tracing::debug!(backend = ?config.backend, "stored new CSRF hash");
	Ok(())
}
