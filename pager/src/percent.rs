use std::borrow::Cow;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// The unreserved characters of RFC 3986 are left alone.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
	.remove(b'-')
	.remove(b'_')
	.remove(b'.')
	.remove(b'~');

#[inline]
pub fn encode(data: &str) -> Cow<'_, str> {
	utf8_percent_encode(data, COMPONENT).into()
}

/// Decodes a query string key, treating `+` as a space like HTML forms do.
pub fn decode_query_key(raw: &str) -> Cow<'_, str> {
	if raw.contains('+') {
		let spaced = raw.replace('+', " ");
		Cow::Owned(percent_decode_str(&spaced).decode_utf8_lossy().into_owned())
	} else {
		percent_decode_str(raw).decode_utf8_lossy()
	}
}

#[cfg(test)]
mod test {
	use super::{decode_query_key, encode};

	#[test]
	fn unreserved_characters_are_kept() {
		assert_eq!(encode("page_no-1.x~"), "page_no-1.x~");
		assert_eq!(encode("a b&c"), "a%20b%26c");
	}

	#[test]
	fn keys_decode_like_forms() {
		assert_eq!(decode_query_key("page"), "page");
		assert_eq!(decode_query_key("my+page"), "my page");
		assert_eq!(decode_query_key("my%20page"), "my page");
	}
}
