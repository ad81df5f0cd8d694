//! Deterministic image URL derivation.
//!
//! Every URL is a pure function of an entity key (and its category), except the
//! color chosen for text placeholders in [`ImageMode::Avatar`].

use md5::{Digest, Md5};
use serde::Serialize;

pub mod basic;
pub mod thematic;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageMode {
	/// Transformed Cloudinary delivery URLs under `club_management/`.
	Cloudinary,
	/// picsum.photos images with hash-derived seeds.
	Placeholder,
	/// ui-avatars / via.placeholder text images.
	Avatar,
}

impl ImageMode {
	pub fn from_flags(use_real_images: bool, use_placeholder_service: bool) -> Self {
		if use_real_images {
			Self::Cloudinary
		} else if use_placeholder_service {
			Self::Placeholder
		} else {
			Self::Avatar
		}
	}
}

#[derive(Debug, Clone)]
pub struct ImageUrls {
	cloud_name: String,
	mode: ImageMode,
}

impl ImageUrls {
	pub fn new(cloud_name: impl Into<String>, mode: ImageMode) -> Self {
		Self {
			cloud_name: cloud_name.into(),
			mode,
		}
	}

	pub fn mode(&self) -> ImageMode {
		self.mode
	}

	pub fn thematic(&self) -> thematic::ThematicImages<'_> {
		thematic::ThematicImages::new(self)
	}

	fn cloudinary(&self, folder: &str, public_id: &str, width: u32, height: u32) -> String {
		format!(
			"https://res.cloudinary.com/{}/image/upload/c_fill,w_{width},h_{height},q_auto,f_auto/club_management/{folder}/{public_id}.jpg",
			self.cloud_name
		)
	}
}

pub fn md5_hex(bytes: &[u8]) -> String {
	let mut hasher = Md5::new();
	hasher.update(bytes);
	hex::encode(hasher.finalize())
}

/// Integer value of the first `digits` hex digits of `md5(key)`.
pub fn hash_seed(key: &str, digits: usize) -> u64 {
	let hex = md5_hex(key.as_bytes());
	u64::from_str_radix(&hex[..digits.min(16)], 16).unwrap_or_default()
}

fn picsum(seed: impl std::fmt::Display, width: u32, height: u32) -> String {
	format!("https://picsum.photos/seed/{seed}/{width}/{height}")
}

fn initial(text: &str, fallback: char) -> char {
	text.chars().next().unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn hash_seed_reads_leading_hex_digits() {
		// md5("") = d41d8cd9..., md5("abc") = 90015098...
		assert_eq!(md5_hex(b""), "d41d8cd98f00b204e9800998ecf8427e");
		assert_eq!(hash_seed("", 4), 0xd41d);
		assert_eq!(hash_seed("abc", 8), 0x9001_5098);
	}

	#[test]
	fn image_mode_prefers_real_images() {
		assert_eq!(ImageMode::from_flags(true, true), ImageMode::Cloudinary);
		assert_eq!(ImageMode::from_flags(false, true), ImageMode::Placeholder);
		assert_eq!(ImageMode::from_flags(false, false), ImageMode::Avatar);
	}

	#[test]
	fn cloudinary_urls_carry_transformations() {
		let urls = ImageUrls::new("demo", ImageMode::Cloudinary);
		assert_eq!(
			urls.cloudinary("profiles", "user_u1", 400, 400),
			"https://res.cloudinary.com/demo/image/upload/c_fill,w_400,h_400,q_auto,f_auto/club_management/profiles/user_u1.jpg"
		);
	}
}
