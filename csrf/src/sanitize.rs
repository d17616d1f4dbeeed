static BAD: &[&str] = &[
	"../", "<!--", "-->", "<", ">", "'", "\"", "&", "$", "#", "{", "}", "[", "]", "=", ";", "?",
	"%20", "%22", "%3c", "%253c", "%3e", "%0e", "%28", "%29", "%2528", "%26", "%24", "%3f", "%3b",
	"%3d",
];

static BAD_IN_NAME: &[&str] = &["./", "/"];

/// Control characters other than tab, line feed and carriage return.
fn is_invisible(c: char) -> bool {
	matches!(c, '\x00'..='\x08' | '\x0b' | '\x0c' | '\x0e'..='\x1f' | '\x7f')
}

/// Strips sequences from a user-supplied file name that could be used for directory traversal or injection.
///
/// Removal repeats until nothing changes, so `....//` cannot reassemble into `../`. Unless `relative_path` is set, slashes are removed too.
pub fn sanitize_filename(name: &str, relative_path: bool) -> String {
	let mut bad: Vec<&str> = BAD.to_vec();
	if !relative_path {
		bad.extend_from_slice(BAD_IN_NAME);
	}

	let mut current: String = name.chars().filter(|&c| !is_invisible(c)).collect();
	loop {
		let mut next = current.clone();
		for pattern in &bad {
			next = next.replace(pattern, "");
		}
		if next == current {
			break;
		}
		current = next;
	}

	current.replace('\\', "")
}
