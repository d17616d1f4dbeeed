use rand::{Rng as _, RngCore as _};
use subtle::ConstantTimeEq as _;

/// Number of random bytes in a hash. Hashes are hex-encoded, so they are twice as long.
pub const HASH_BYTES: usize = 16;
/// Length of a randomized token: the masked hash followed by the key.
pub const RANDOMIZED_LEN: usize = HASH_BYTES * 4;

#[derive(Debug, thiserror::Error)]
pub enum MalformedToken {
	#[error("token has {0} characters instead of {}", RANDOMIZED_LEN)]
	Length(usize),
	#[error("decoding token: {0}")]
	Hex(#[from] hex::FromHexError),
}

/// The server-side CSRF secret.
///
/// The hex form is kept exactly as it was stored, since an upper-case hash restored from a cookie has to be compared as such.
#[derive(Clone, PartialEq, Eq)]
pub struct Hash {
	hex: String,
	bytes: [u8; HASH_BYTES],
}

impl std::fmt::Debug for Hash {
	fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		formatter.write_str("Hash(..)")
	}
}

impl Hash {
	pub fn generate() -> Self {
		let bytes: [u8; HASH_BYTES] = rand::thread_rng().gen();
		Self {
			hex: hex::encode(bytes),
			bytes,
		}
	}

	/// Accepts exactly `2 * HASH_BYTES` hex digits of either case.
	pub fn parse(raw: &str) -> Option<Self> {
		if raw.len() != HASH_BYTES * 2 {
			return None;
		}
		let mut bytes = [0; HASH_BYTES];
		hex::decode_to_slice(raw, &mut bytes).ok()?;
		Some(Self {
			hex: raw.to_owned(),
			bytes,
		})
	}

	#[inline]
	pub fn as_str(&self) -> &str {
		&self.hex
	}

	/// Constant-time comparison against a token that has already been de-randomized if necessary.
	pub fn matches(&self, token: &str) -> bool {
		self.hex.as_bytes().ct_eq(token.as_bytes()).into()
	}

	/// Masks the hash with a fresh random key so the emitted bytes differ every time.
	pub fn randomize(&self) -> String {
		let mut key = [0; HASH_BYTES];
		rand::thread_rng().fill_bytes(&mut key);
		self.randomize_with(&key)
	}

	fn randomize_with(&self, key: &[u8; HASH_BYTES]) -> String {
		let mut masked = [0; HASH_BYTES * 2];
		let (value, key_part) = masked.split_at_mut(HASH_BYTES);
		for ((out, hash), key) in value.iter_mut().zip(self.bytes).zip(key) {
			*out = hash ^ key;
		}
		key_part.copy_from_slice(key);
		hex::encode(masked)
	}
}

/// Recovers the hash from a randomized token. The result is lower-case hex.
pub fn derandomize(token: &str) -> Result<String, MalformedToken> {
	if token.len() != RANDOMIZED_LEN {
		return Err(MalformedToken::Length(token.len()));
	}
	let (value, key) = token.as_bytes().split_at(HASH_BYTES * 2);
	let mut hash = [0; HASH_BYTES];
	let mut key_bytes = [0; HASH_BYTES];
	hex::decode_to_slice(value, &mut hash)?;
	hex::decode_to_slice(key, &mut key_bytes)?;
	for (byte, key) in hash.iter_mut().zip(key_bytes) {
		*byte ^= key;
	}
	Ok(hex::encode(hash))
}
