use rand::{seq::SliceRandom, Rng};

use super::{hash_seed, initial, picsum, ImageMode, ImageUrls};

#[derive(Debug)]
pub struct Theme {
	pub name: &'static str,
	pub keywords: &'static [&'static str],
	pub colors: &'static [&'static str],
	/// First picsum seed of the band reserved for this theme.
	pub seed_base: u64,
}

pub const CLUB_THEMES: &[Theme] = &[
	Theme {
		name: "Công nghệ",
		keywords: &["technology", "coding", "computer", "software", "digital", "innovation"],
		colors: &["4f46e5", "3b82f6", "06b6d4", "8b5cf6"],
		seed_base: 1000,
	},
	Theme {
		name: "Thể thao",
		keywords: &["sports", "fitness", "athletics", "competition", "team", "active"],
		colors: &["ef4444", "f97316", "22c55e", "eab308"],
		seed_base: 2000,
	},
	Theme {
		name: "Văn hóa",
		keywords: &["culture", "art", "music", "creative", "performance", "artistic"],
		colors: &["ec4899", "a855f7", "f59e0b", "06b6d4"],
		seed_base: 3000,
	},
	Theme {
		name: "Học thuật",
		keywords: &["academic", "education", "research", "study", "learning", "knowledge"],
		colors: &["059669", "0891b2", "7c3aed", "dc2626"],
		seed_base: 4000,
	},
	Theme {
		name: "Tình nguyện",
		keywords: &["volunteer", "community", "helping", "charity", "environment", "social"],
		colors: &["22c55e", "16a34a", "f59e0b", "dc2626"],
		seed_base: 5000,
	},
	Theme {
		name: "Kinh doanh",
		keywords: &["business", "entrepreneurship", "finance", "startup", "corporate", "professional"],
		colors: &["1f2937", "374151", "4b5563", "6b7280"],
		seed_base: 6000,
	},
];

pub const EVENT_THEMES: &[Theme] = &[
	Theme {
		name: "Workshop",
		keywords: &["workshop", "learning", "hands-on", "training", "skill"],
		colors: &["3b82f6", "8b5cf6", "06b6d4"],
		seed_base: 7000,
	},
	Theme {
		name: "Seminar",
		keywords: &["seminar", "presentation", "discussion", "academic", "lecture"],
		colors: &["059669", "0891b2", "7c3aed"],
		seed_base: 7050,
	},
	Theme {
		name: "Competition",
		keywords: &["competition", "contest", "challenge", "tournament", "winner"],
		colors: &["ef4444", "f97316", "eab308"],
		seed_base: 7100,
	},
	Theme {
		name: "Social",
		keywords: &["social", "networking", "community", "gathering", "fun"],
		colors: &["ec4899", "a855f7", "f59e0b"],
		seed_base: 7150,
	},
	Theme {
		name: "Performance",
		keywords: &["performance", "show", "entertainment", "stage", "audience"],
		colors: &["ec4899", "a855f7", "8b5cf6"],
		seed_base: 7200,
	},
	Theme {
		name: "Exhibition",
		keywords: &["exhibition", "display", "showcase", "gallery", "art"],
		colors: &["a855f7", "f59e0b", "06b6d4"],
		seed_base: 7250,
	},
];

/// Theme of a club category; unknown categories look academic.
pub fn club_theme(category: &str) -> &'static Theme {
	CLUB_THEMES
		.iter()
		.find(|theme| theme.name == category)
		.unwrap_or(&CLUB_THEMES[3])
}

/// Theme of an event kind; unknown kinds look social.
pub fn event_theme(event_category: &str) -> &'static Theme {
	EVENT_THEMES
		.iter()
		.find(|theme| theme.name == event_category)
		.unwrap_or(&EVENT_THEMES[3])
}

fn pick_color<R: Rng + ?Sized>(rng: &mut R, colors: &[&'static str]) -> &'static str {
	colors.choose(rng).copied().unwrap_or("6b7280")
}

fn combined_colors(event_category: &str, club_category: &str) -> Vec<&'static str> {
	event_theme(event_category)
		.colors
		.iter()
		.chain(club_theme(club_category).colors)
		.copied()
		.collect()
}

/// Category-aware image URLs for clubs and events.
pub struct ThematicImages<'a> {
	urls: &'a ImageUrls,
}

impl<'a> ThematicImages<'a> {
	pub(super) fn new(urls: &'a ImageUrls) -> Self {
		Self { urls }
	}

	pub fn club_logo<R: Rng + ?Sized>(&self, rng: &mut R, club_id: &str, club_name: &str, category: &str) -> String {
		let theme = club_theme(category);
		match self.urls.mode {
			ImageMode::Cloudinary => self.urls.cloudinary(
				"clubs/logos",
				&format!("{}_{club_id}", category.to_lowercase()),
				300,
				300,
			),
			ImageMode::Placeholder => picsum(theme.seed_base + hash_seed(club_id, 4) % 100, 300, 300),
			ImageMode::Avatar => format!(
				"https://ui-avatars.com/api/?name={}&size=300&background={}&color=ffffff&font-size=0.5",
				initial(club_name, 'C'),
				pick_color(rng, theme.colors)
			),
		}
	}

	pub fn club_cover<R: Rng + ?Sized>(&self, rng: &mut R, club_id: &str, category: &str) -> String {
		let theme = club_theme(category);
		match self.urls.mode {
			ImageMode::Cloudinary => self.urls.cloudinary(
				"clubs/covers",
				&format!("{}_{club_id}", category.to_lowercase()),
				1200,
				400,
			),
			ImageMode::Placeholder => picsum(
				theme.seed_base + 500 + hash_seed(&format!("cover_{club_id}"), 4) % 100,
				1200,
				400,
			),
			ImageMode::Avatar => format!(
				"https://via.placeholder.com/1200x400/{}/ffffff?text={category}",
				pick_color(rng, theme.colors)
			),
		}
	}

	pub fn event_image<R: Rng + ?Sized>(
		&self,
		rng: &mut R,
		event_id: &str,
		event_category: &str,
		club_category: &str,
	) -> String {
		match self.urls.mode {
			ImageMode::Cloudinary => self.urls.cloudinary(
				"events",
				&format!(
					"{}_{}_{event_id}",
					event_category.to_lowercase(),
					club_category.to_lowercase()
				),
				800,
				600,
			),
			ImageMode::Placeholder => picsum(
				event_theme(event_category).seed_base + hash_seed(event_id, 4) % 50,
				800,
				600,
			),
			ImageMode::Avatar => format!(
				"https://via.placeholder.com/800x600/{}/ffffff?text={event_category}",
				pick_color(rng, &combined_colors(event_category, club_category))
			),
		}
	}

	pub fn event_logo<R: Rng + ?Sized>(
		&self,
		rng: &mut R,
		event_id: &str,
		event_title: &str,
		event_category: &str,
	) -> String {
		let theme = event_theme(event_category);
		match self.urls.mode {
			ImageMode::Cloudinary => self.urls.cloudinary(
				"events/logos",
				&format!("{}_logo_{event_id}", event_category.to_lowercase()),
				200,
				200,
			),
			ImageMode::Placeholder => picsum(
				theme.seed_base + 25 + hash_seed(&format!("logo_{event_id}"), 4) % 25,
				200,
				200,
			),
			ImageMode::Avatar => format!(
				"https://ui-avatars.com/api/?name={}&size=200&background={}&color=ffffff&font-size=0.6",
				initial(event_title, 'E'),
				pick_color(rng, theme.colors)
			),
		}
	}

	pub fn event_gallery(&self, event_id: &str, event_category: &str, club_category: &str, count: usize) -> Vec<String> {
		let seed_base = event_theme(event_category).seed_base + 100;
		let colors = combined_colors(event_category, club_category);
		(0..count)
			.map(|i| match self.urls.mode {
				ImageMode::Cloudinary => self.urls.cloudinary(
					"events/gallery",
					&format!(
						"{}_{}_gallery_{event_id}_{i}",
						event_category.to_lowercase(),
						club_category.to_lowercase()
					),
					600,
					400,
				),
				ImageMode::Placeholder => picsum(
					seed_base + hash_seed(&format!("gallery_{event_id}_{i}"), 4) % 50,
					600,
					400,
				),
				ImageMode::Avatar => format!(
					"https://via.placeholder.com/600x400/{}/ffffff?text=Gallery+{}",
					colors[i % colors.len()],
					i + 1
				),
			})
			.collect()
	}
}

/// Keywords describing a club category, optionally extended by an event kind.
pub fn thematic_keywords(category: &str, event_category: Option<&str>) -> Vec<&'static str> {
	let mut keywords = club_theme(category).keywords.to_vec();
	if let Some(event_category) = event_category {
		keywords.extend_from_slice(event_theme(event_category).keywords);
	}
	keywords
}

/// Palette for a club category and optional event kind, without repeats.
pub fn suggested_colors(category: &str, event_category: Option<&str>) -> Vec<&'static str> {
	let mut colors: Vec<&'static str> = Vec::new();
	let event_colors = event_category.map(|name| event_theme(name).colors).unwrap_or_default();
	for color in club_theme(category).colors.iter().chain(event_colors) {
		if !colors.contains(color) {
			colors.push(*color);
		}
	}
	colors
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::{rngs::StdRng, SeedableRng};

	fn seed_of(url: &str) -> u64 {
		url.trim_start_matches("https://picsum.photos/seed/")
			.split('/')
			.next()
			.and_then(|seed| seed.parse().ok())
			.unwrap_or(u64::MAX)
	}

	#[test]
	fn club_images_fall_inside_category_bands() {
		let urls = ImageUrls::new("demo", ImageMode::Placeholder);
		let thematic = urls.thematic();
		let mut rng = StdRng::seed_from_u64(7);
		for (id, category, base) in [("c1", "Công nghệ", 1000), ("c2", "Kinh doanh", 6000), ("c3", "Khác", 4000)] {
			let logo = seed_of(&thematic.club_logo(&mut rng, id, "CLB", category));
			assert!((base..base + 100).contains(&logo), "{category}: {logo}");
			let cover = seed_of(&thematic.club_cover(&mut rng, id, category));
			assert!((base + 500..base + 600).contains(&cover), "{category}: {cover}");
		}
	}

	#[test]
	fn event_images_fall_inside_event_bands() {
		let urls = ImageUrls::new("demo", ImageMode::Placeholder);
		let thematic = urls.thematic();
		let mut rng = StdRng::seed_from_u64(7);
		let image = seed_of(&thematic.event_image(&mut rng, "e1", "Competition", "Thể thao"));
		assert!((7100..7150).contains(&image));
		let logo = seed_of(&thematic.event_logo(&mut rng, "e1", "Giải", "Fundraiser"));
		assert!((7175..7200).contains(&logo));
		for url in thematic.event_gallery("e1", "Workshop", "Công nghệ", 4) {
			assert!((7100..7150).contains(&seed_of(&url)));
		}
		// md5("") starts with d41d; 0xd41d % 100 = 1
		assert_eq!(thematic.club_logo(&mut rng, "", "CLB", "Thể thao"), "https://picsum.photos/seed/2001/300/300");
	}

	#[test]
	fn avatar_gallery_alternates_event_and_club_colors() {
		let urls = ImageUrls::new("demo", ImageMode::Avatar);
		let gallery = urls.thematic().event_gallery("e1", "Seminar", "Kinh doanh", 4);
		assert!(gallery[0].contains("/059669/"));
		assert!(gallery[3].contains("/1f2937/"));
		assert!(gallery[3].ends_with("Gallery+4"));
	}

	#[test]
	fn cloudinary_ids_include_lowercased_categories() {
		let urls = ImageUrls::new("demo", ImageMode::Cloudinary);
		let mut rng = StdRng::seed_from_u64(7);
		let logo = urls.thematic().club_logo(&mut rng, "abc", "CLB", "Thể thao");
		assert!(logo.ends_with("/clubs/logos/thể thao_abc.jpg"));
	}

	#[test]
	fn keywords_and_colors_merge_club_and_event_themes() {
		let keywords = thematic_keywords("Văn hóa", Some("Performance"));
		assert_eq!(keywords.len(), 11);
		assert_eq!(keywords[0], "culture");
		assert_eq!(keywords[6], "performance");
		let colors = suggested_colors("Văn hóa", Some("Performance"));
		assert_eq!(colors, vec!["ec4899", "a855f7", "f59e0b", "06b6d4", "8b5cf6"]);
		assert_eq!(suggested_colors("Kinh doanh", None).len(), 4);
	}
}
