use rand::Rng;

use crate::images::ImageUrls;
use crate::images::thematic::{suggested_colors, thematic_keywords};

const SAMPLE_CLUB_ID: &str = "sample_club_123";
const SAMPLE_EVENT_ID: &str = "sample_event_456";
const SAMPLE_USER_ID: &str = "sample_user_789";

/// Example URLs from both generators for one club category and event kind.
#[derive(Debug, Clone)]
pub struct Preview {
	pub basic: Vec<(&'static str, String)>,
	pub thematic: Vec<(&'static str, String)>,
	pub gallery: Vec<String>,
	pub keywords: Vec<&'static str>,
	pub colors: Vec<&'static str>,
}

pub fn build_preview<R: Rng + ?Sized>(rng: &mut R, urls: &ImageUrls, category: &str, event_category: &str) -> Preview {
	let thematic = urls.thematic();
	Preview {
		basic: vec![
			("profile picture", urls.profile_picture(SAMPLE_USER_ID)),
			("club logo", urls.club_logo(SAMPLE_CLUB_ID, "CLB Mẫu")),
			("club cover", urls.club_cover(SAMPLE_CLUB_ID, category)),
			("event image", urls.event_image(SAMPLE_EVENT_ID)),
			("event logo", urls.event_logo(SAMPLE_EVENT_ID, "Sự kiện mẫu")),
			("random placeholder", urls.random_placeholder(rng, 640, 480)),
		],
		thematic: vec![
			("club logo", thematic.club_logo(rng, SAMPLE_CLUB_ID, "CLB Mẫu", category)),
			("club cover", thematic.club_cover(rng, SAMPLE_CLUB_ID, category)),
			("event image", thematic.event_image(rng, SAMPLE_EVENT_ID, event_category, category)),
			("event logo", thematic.event_logo(rng, SAMPLE_EVENT_ID, "Sự kiện mẫu", event_category)),
		],
		gallery: thematic.event_gallery(SAMPLE_EVENT_ID, event_category, category, 3),
		keywords: thematic_keywords(category, Some(event_category)),
		colors: suggested_colors(category, Some(event_category)),
	}
}

pub fn print_preview(preview: &Preview, category: &str, event_category: &str, urls: &ImageUrls) {
	println!("Image mode: {:?}", urls.mode());
	println!("Basic URLs:");
	for (what, url) in &preview.basic {
		println!("  {what:<20} {url}");
	}
	println!("Thematic URLs ({category} / {event_category}):");
	for (what, url) in &preview.thematic {
		println!("  {what:<20} {url}");
	}
	println!("  {:<20} {}", "basic gallery", urls.event_gallery(SAMPLE_EVENT_ID, 1).join(" "));
	for url in &preview.gallery {
		println!("  {:<20} {url}", "gallery");
	}
	println!("Keywords: {}", preview.keywords.join(", "));
	println!("Colors: {}", preview.colors.iter().map(|c| format!("#{c}")).collect::<Vec<_>>().join(" "));
}
