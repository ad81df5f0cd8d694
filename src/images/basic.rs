use rand::Rng;

use super::{hash_seed, initial, picsum, ImageMode, ImageUrls};

const CATEGORY_COVER_SEEDS: &[(&str, u64)] = &[
	("Công nghệ", 1000),
	("Thể thao", 2000),
	("Văn hóa", 3000),
	("Học thuật", 4000),
	("Tình nguyện", 5000),
	("Kinh doanh", 6000),
];

impl ImageUrls {
	pub fn profile_picture(&self, user_key: &str) -> String {
		match self.mode {
			ImageMode::Cloudinary => self.cloudinary("profiles", &format!("user_{user_key}"), 400, 400),
			ImageMode::Placeholder => picsum(hash_seed(user_key, 8), 400, 400),
			ImageMode::Avatar => {
				format!("https://ui-avatars.com/api/?name={user_key}&size=400&background=random")
			}
		}
	}

	pub fn club_logo(&self, club_id: &str, club_name: &str) -> String {
		match self.mode {
			ImageMode::Cloudinary => self.cloudinary("clubs/logos", &format!("club_{club_id}"), 300, 300),
			ImageMode::Placeholder => picsum(format!("logo{}", hash_seed(club_id, 8)), 300, 300),
			ImageMode::Avatar => format!(
				"https://ui-avatars.com/api/?name={}&size=300&background=4f46e5&color=ffffff&font-size=0.5",
				initial(club_name, 'C')
			),
		}
	}

	pub fn club_cover(&self, club_id: &str, category: &str) -> String {
		match self.mode {
			ImageMode::Cloudinary => self.cloudinary("clubs/covers", &format!("cover_{club_id}"), 1200, 400),
			ImageMode::Placeholder => {
				let base = CATEGORY_COVER_SEEDS
					.iter()
					.find(|(name, _)| *name == category)
					.map(|(_, seed)| *seed)
					.unwrap_or(0);
				picsum(format!("cover{}", base + hash_seed(club_id, 8) % 1000), 1200, 400)
			}
			ImageMode::Avatar => format!("https://via.placeholder.com/1200x400/4f46e5/ffffff?text={category}"),
		}
	}

	pub fn event_image(&self, event_id: &str) -> String {
		match self.mode {
			ImageMode::Cloudinary => self.cloudinary("events", &format!("event_{event_id}"), 800, 600),
			ImageMode::Placeholder => picsum(format!("event{}", hash_seed(event_id, 8)), 800, 600),
			ImageMode::Avatar => "https://via.placeholder.com/800x600/059669/ffffff?text=Event".to_string(),
		}
	}

	pub fn event_logo(&self, event_id: &str, event_title: &str) -> String {
		match self.mode {
			ImageMode::Cloudinary => self.cloudinary("events/logos", &format!("logo_{event_id}"), 200, 200),
			ImageMode::Placeholder => {
				picsum(format!("eventlogo{}", hash_seed(&format!("logo_{event_id}"), 8)), 200, 200)
			}
			ImageMode::Avatar => format!(
				"https://ui-avatars.com/api/?name={}&size=200&background=059669&color=ffffff&font-size=0.6",
				initial(event_title, 'E')
			),
		}
	}

	pub fn event_gallery(&self, event_id: &str, count: usize) -> Vec<String> {
		(0..count)
			.map(|i| match self.mode {
				ImageMode::Cloudinary => {
					self.cloudinary("events/gallery", &format!("gallery_{event_id}_{i}"), 600, 400)
				}
				ImageMode::Placeholder => picsum(
					format!("gallery{}", hash_seed(&format!("gallery_{event_id}_{i}"), 8)),
					600,
					400,
				),
				ImageMode::Avatar => {
					format!("https://via.placeholder.com/600x400/6366f1/ffffff?text=Gallery+{}", i + 1)
				}
			})
			.collect()
	}

	/// A non-deterministic filler image.
	pub fn random_placeholder<R: Rng + ?Sized>(&self, rng: &mut R, width: u32, height: u32) -> String {
		match self.mode {
			ImageMode::Avatar => format!("https://via.placeholder.com/{width}x{height}/6b7280/ffffff?text=Image"),
			_ => picsum(rng.gen_range(1..=10_000), width, height),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::{rngs::StdRng, SeedableRng};

	#[test]
	fn placeholder_urls_are_stable_per_key() {
		let urls = ImageUrls::new("demo", ImageMode::Placeholder);
		assert_eq!(urls.profile_picture("abc"), "https://picsum.photos/seed/2416005272/400/400");
		assert_eq!(urls.profile_picture("user001"), urls.profile_picture("user001"));
		assert_ne!(urls.profile_picture("user001"), urls.profile_picture("user002"));
		assert!(urls.club_logo("abc", "CLB").starts_with("https://picsum.photos/seed/logo2416005272/"));
	}

	#[test]
	fn cover_seed_stays_inside_the_category_band() {
		let urls = ImageUrls::new("demo", ImageMode::Placeholder);
		let cover = urls.club_cover("abc", "Thể thao");
		// 0x90015098 % 1000 = 272
		assert_eq!(cover, "https://picsum.photos/seed/cover2272/1200/400");
		assert_eq!(urls.club_cover("abc", "Khác"), "https://picsum.photos/seed/cover272/1200/400");
	}

	#[test]
	fn avatar_mode_uses_text_placeholders() {
		let urls = ImageUrls::new("demo", ImageMode::Avatar);
		assert_eq!(
			urls.profile_picture("user007"),
			"https://ui-avatars.com/api/?name=user007&size=400&background=random"
		);
		assert!(urls.club_logo("x", "").contains("name=C&"));
		assert!(urls.event_logo("x", "Đêm nhạc").contains("name=Đ&"));
		let gallery = urls.event_gallery("x", 2);
		assert!(gallery[1].ends_with("text=Gallery+2"));
		let mut rng = StdRng::seed_from_u64(1);
		assert!(urls.random_placeholder(&mut rng, 10, 20).contains("/10x20/"));
	}

	#[test]
	fn cloudinary_event_assets_use_their_folders() {
		let urls = ImageUrls::new("demo", ImageMode::Cloudinary);
		assert!(urls.event_image("e1").ends_with("/club_management/events/event_e1.jpg"));
		assert!(urls.event_logo("e1", "T").ends_with("/events/logos/logo_e1.jpg"));
		assert_eq!(urls.event_gallery("e1", 3).len(), 3);
	}
}
