use http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// The token was missing, malformed, or did not match. The request must not be processed.
	#[error("the action you requested is not allowed")]
	VerificationFailed,
	#[error("session-based CSRF protection needs a session")]
	MissingSession,
}

pub type Result<T, E = Error> = core::result::Result<T, E>;

impl Error {
	pub fn status_code(&self) -> StatusCode {
		match self {
			Self::VerificationFailed => StatusCode::FORBIDDEN,
			Self::MissingSession => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}
