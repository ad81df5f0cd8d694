use unicode_normalization::UnicodeNormalization;

/// Lowercase ASCII slug without diacritics, keeping `[a-z0-9]` only.
/// Characters with no ASCII decomposition (such as `Đ`) are dropped.
/// Empty results become `user`.
pub fn to_ascii_slug(text: &str) -> String {
	let slug: String = text
		.nfkd()
		.filter(char::is_ascii)
		.map(|c| c.to_ascii_lowercase())
		.filter(char::is_ascii_alphanumeric)
		.collect();
	if slug.is_empty() {
		String::from("user")
	} else {
		slug
	}
}

pub fn email_local_part(email: &str) -> &str {
	email.split('@').next().unwrap_or(email)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn slug_strips_vietnamese_diacritics() {
		assert_eq!(to_ascii_slug("quânnguyễn001"), "quannguyen001");
		assert_eq!(to_ascii_slug("Tùng Đặng"), "tungang");
		assert_eq!(to_ascii_slug("Huỳnh-Ông 42"), "huynhong42");
	}

	#[test]
	fn empty_slug_falls_back_to_user() {
		assert_eq!(to_ascii_slug(""), "user");
		assert_eq!(to_ascii_slug("Đ !"), "user");
	}

	#[test]
	fn local_part_stops_at_the_at_sign() {
		assert_eq!(email_local_part("tech.club@bkhn.edu.vn"), "tech.club");
		assert_eq!(email_local_part("nobody"), "nobody");
	}
}
