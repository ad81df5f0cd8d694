use anyhow::{Result, bail};
use bson::{doc, oid::ObjectId};
use rand::Rng;
use rand::seq::SliceRandom;
use time::{Duration, OffsetDateTime};
use tracing::{info, warn};

use super::{bson_time, pick, weighted};
use crate::catalog::events::{EVENTS_BY_CLUB_CATEGORY, EventTemplate, VENUES, VIRTUAL_PLATFORMS, agenda_for};
use crate::core::{Stores, clear, documents, insert_batched};
use crate::images::ImageUrls;
use crate::models::{
	self, AgendaItem, ContactInfo, Coordinates, Event, EventLocation, EventSocialLinks, EventStatistics, Organizer,
};
use crate::refs::{self, ClubRef, UserRef};
use crate::stats::{self, count_by, print_counts};

const STATUSES: &[(&str, u32)] = &[("published", 3), ("draft", 1), ("cancelled", 1)];
const VISIBILITIES: &[(&str, u32)] = &[("public", 3), ("private", 1)];
const AGENDA_START_MINUTES: u32 = 9 * 60;

/// Timed agenda starting at 09:00 with one item per hour of the event plus one.
pub fn generate_agenda<R: Rng + ?Sized>(rng: &mut R, event_category: &str, duration_hours: u32) -> Vec<AgendaItem> {
	let activities = agenda_for(event_category);
	let n = (duration_hours as usize + 1).min(activities.len());

	let mut minutes = AGENDA_START_MINUTES;
	let mut agenda = Vec::with_capacity(n);
	for (i, activity) in activities.iter().take(n).enumerate() {
		agenda.push(AgendaItem {
			time: format!("{:02}:{:02}", (minutes / 60) % 24, minutes % 60),
			activity: activity.to_string(),
		});
		let lower = activity.to_lowercase();
		minutes += if i == 0 {
			30
		} else if lower.contains("nghỉ") || lower.contains("giải lao") {
			15
		} else {
			rng.gen_range(45..=90)
		};
	}
	agenda
}

/// A point within about a kilometre of `center`, rounded to four decimals.
fn jitter<R: Rng + ?Sized>(rng: &mut R, center: f64) -> f64 {
	((center + rng.gen_range(-0.01..=0.01)) * 10_000.0).round() / 10_000.0
}

fn random_user<R: Rng + ?Sized>(rng: &mut R, users: &[UserRef]) -> String {
	users.choose(rng).map(|u| u.id.clone()).unwrap_or_default()
}

fn location<R: Rng + ?Sized>(rng: &mut R) -> EventLocation {
	if rng.gen_bool(0.5) {
		EventLocation::Physical {
			address: pick(rng, VENUES).to_string(),
			room: format!("Phòng {}", rng.gen_range(101..=501)),
			coordinates: Coordinates {
				lat: jitter(rng, 21.0),
				lng: jitter(rng, 105.85),
			},
		}
	} else {
		EventLocation::Virtual {
			virtual_link: format!("https://meet.google.com/{}", rng.gen_range(100_000..=999_999)),
			platform: pick(rng, VIRTUAL_PLATFORMS).to_string(),
		}
	}
}

struct EventInputs<'a> {
	club: &'a ClubRef,
	club_category: &'a str,
	template: &'a EventTemplate,
	variation: usize,
}

fn build_event<R: Rng + ?Sized>(
	rng: &mut R,
	urls: &ImageUrls,
	users: &[UserRef],
	input: EventInputs<'_>,
	now: OffsetDateTime,
) -> Event {
	let EventInputs {
		club,
		club_category,
		template,
		variation,
	} = input;
	let id = ObjectId::new();
	let id_hex = id.to_hex();
	let thematic = urls.thematic();

	let start = now + Duration::days(rng.gen_range(-60..=90));
	let duration_hours = rng.gen_range(2..=8u32);
	let end = start + Duration::hours(i64::from(duration_hours));
	let deadline = start - Duration::days(rng.gen_range(1..=14));

	let titles = [
		template.title.to_string(),
		format!("{} - {}", template.title, club.name),
		format!("{} {}", template.title, now.year()),
		format!("{} - Phiên {}", template.title, variation + 1),
	];
	let title = titles[rng.gen_range(0..titles.len())].clone();

	let gallery_size = rng.gen_range(2..=4);
	let mut tags: Vec<String> = template.tags.iter().map(|t| t.to_string()).collect();
	tags.push(format!("Event{}", rng.gen_range(1..=100)));
	tags.push(club_category.to_string());

	let capacity = template.max_participants;
	let participation_fee = if template.participation_fee > 0 {
		template.participation_fee + rng.gen_range(-10_000..=10_000)
	} else {
		0
	};

	Event {
		id,
		club_id: club.id,
		title,
		description: template.description.to_string(),
		short_description: template.short_description.to_string(),
		category: template.category.to_string(),
		location: location(rng),
		start_date: bson_time(start),
		end_date: bson_time(end),
		registration_deadline: bson_time(deadline),
		max_participants: (capacity + rng.gen_range(-10..=20)).max(1),
		participation_fee,
		currency: String::from("VND"),
		requirements: template.requirements.iter().map(|r| r.to_string()).collect(),
		tags,
		images: thematic.event_gallery(&id_hex, template.category, club_category, gallery_size),
		event_image_url: thematic.event_image(rng, &id_hex, template.category, club_category),
		event_logo_url: thematic.event_logo(rng, &id_hex, template.title, template.category),
		agenda: generate_agenda(rng, template.category, duration_hours),
		contact_info: ContactInfo {
			email: format!("event{}@bkhn.edu.vn", rng.gen_range(1000..=9999)),
			phone: format!("+8490{}", rng.gen_range(1_000_000..=9_999_999)),
		},
		social_links: EventSocialLinks {
			facebook: format!("https://facebook.com/event{}", rng.gen_range(1000..=9999)),
		},
		status: weighted(rng, STATUSES).unwrap_or("published").to_string(),
		visibility: weighted(rng, VISIBILITIES).unwrap_or("public").to_string(),
		organizers: vec![Organizer {
			user_id: random_user(rng, users),
			role: String::from("lead_organizer"),
			joined_at: bson_time(now - Duration::days(rng.gen_range(1..=30))),
		}],
		statistics: EventStatistics {
			total_registrations: rng.gen_range(0..=capacity),
			total_interested: rng.gen_range(0..=capacity * 2),
			total_attended: if start > now { 0 } else { rng.gen_range(0..=capacity) },
		},
		created_by: random_user(rng, users),
		current_participants: rng.gen_range(0..=capacity),
		created_at: bson_time(now - Duration::days(rng.gen_range(1..=60))),
		updated_at: bson_time(now - Duration::days(rng.gen_range(0..=5))),
	}
}

/// Events for every club, drawn from the templates of the club's own category.
pub fn generate_events<R: Rng + ?Sized>(
	rng: &mut R,
	urls: &ImageUrls,
	users: &[UserRef],
	clubs: &[ClubRef],
	now: OffsetDateTime,
) -> Result<Vec<Event>> {
	if users.is_empty() {
		bail!("No users found. Please seed users first.");
	}
	if clubs.is_empty() {
		bail!("No clubs found. Please seed clubs first.");
	}

	let mut events = Vec::new();
	for (category, templates) in EVENTS_BY_CLUB_CATEGORY {
		let members: Vec<&ClubRef> = clubs.iter().filter(|c| c.category.as_deref() == Some(*category)).collect();
		if members.is_empty() {
			warn!("no clubs in category {category}, skipping its events");
			continue;
		}
		info!("generating {category} events for {} clubs", members.len());

		for club in members {
			let wanted = rng.gen_range(2..=3).min(templates.len());
			let chosen: Vec<&EventTemplate> = templates.choose_multiple(rng, wanted).collect();
			for template in chosen {
				for variation in 0..rng.gen_range(1..=2) {
					let input = EventInputs {
						club,
						club_category: category,
						template,
						variation,
					};
					events.push(build_event(rng, urls, users, input, now));
				}
			}
		}
	}
	Ok(events)
}

pub async fn seed<R: Rng + ?Sized>(
	stores: &Stores,
	rng: &mut R,
	urls: &ImageUrls,
	batch_size: usize,
	now: OffsetDateTime,
) -> Result<usize> {
	let users = refs::users(&stores.pg).await?;
	let clubs = refs::clubs(&stores.club_db).await?;
	let events = generate_events(rng, urls, &users, &clubs, now)?;
	if events.is_empty() {
		bail!("no events generated, none of the clubs has a known category");
	}
	info!("generated {} events", events.len());

	let coll = stores.event_db.collection::<Event>(models::EVENTS);
	clear(&coll).await?;
	let inserted = insert_batched(&coll, &events, batch_size).await?;

	print_stats(stores).await?;
	Ok(inserted)
}

async fn print_stats(stores: &Stores) -> Result<()> {
	let coll = documents(&stores.event_db, models::EVENTS);
	println!("Total events: {}", stats::count(&coll, None).await?);

	println!("Events by category:");
	for (category, n) in count_by(&coll, "category", None).await? {
		println!("  - {category}: {n}");
		if let Some(sample) = coll.find_one(doc! { "category": category.as_str() }, None).await? {
			println!("      {}", sample.get_str("title").unwrap_or_default());
			println!("      {}", sample.get_str("event_image_url").unwrap_or("N/A"));
		}
	}
	print_counts("Events by status", &count_by(&coll, "status", None).await?);

	let pipeline = vec![doc! {
		"$group": {
			"_id": null,
			"capacity": { "$sum": "$max_participants" },
			"registrations": { "$sum": "$statistics.total_registrations" },
			"avg_fee": { "$avg": "$participation_fee" },
			"free": { "$sum": { "$cond": [{ "$eq": ["$participation_fee", 0] }, 1, 0] } },
		}
	}];
	if let Some(row) = stats::aggregate(&coll, pipeline).await?.first() {
		println!("Participation:");
		println!("  - total capacity: {}", stats::number(row, "capacity"));
		println!("  - total registrations: {}", stats::number(row, "registrations"));
		println!("  - average fee: {:.0} VND", stats::number(row, "avg_fee"));
		println!("  - free events: {}", stats::number(row, "free"));
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::images::ImageMode;
	use rand::{SeedableRng, rngs::StdRng};

	fn now() -> OffsetDateTime {
		OffsetDateTime::from_unix_timestamp(1_760_000_000).unwrap()
	}

	fn users() -> Vec<UserRef> {
		(0..5)
			.map(|i| UserRef {
				id: format!("user-{i}"),
				email: format!("u{i}@x"),
				full_name: format!("User {i}"),
				role: String::from("user"),
			})
			.collect()
	}

	fn club(category: &str) -> ClubRef {
		ClubRef {
			id: ObjectId::new(),
			name: String::from("CLB Test"),
			category: Some(category.to_string()),
			manager: None,
			created_by: None,
			logo_url: None,
		}
	}

	#[test]
	fn agenda_times_follow_the_item_kind() {
		let mut rng = StdRng::seed_from_u64(1);
		let agenda = generate_agenda(&mut rng, "Workshop", 8);
		assert_eq!(agenda.len(), 8);
		assert_eq!(agenda[0].time, "09:00");
		assert_eq!(agenda[1].time, "09:30");
		let break_at = agenda.iter().position(|a| a.activity == "Nghỉ giải lao").unwrap();
		let minutes = |t: &str| {
			let (h, m) = t.split_once(':').unwrap();
			h.parse::<u32>().unwrap() * 60 + m.parse::<u32>().unwrap()
		};
		assert_eq!(minutes(&agenda[break_at + 1].time) - minutes(&agenda[break_at].time), 15);
	}

	#[test]
	fn short_events_get_short_agendas() {
		let mut rng = StdRng::seed_from_u64(2);
		assert_eq!(generate_agenda(&mut rng, "Seminar", 2).len(), 3);
		assert_eq!(generate_agenda(&mut rng, "Unknown", 3)[0].activity, "Đăng ký và check-in");
	}

	#[test]
	fn events_carry_their_club_category() {
		let mut rng = StdRng::seed_from_u64(3);
		let urls = ImageUrls::new("demo", ImageMode::Placeholder);
		let clubs = vec![club("Công nghệ"), club("Thể thao"), club("Không rõ")];
		let events = generate_events(&mut rng, &urls, &users(), &clubs, now()).unwrap();

		assert!(!events.is_empty());
		for event in &events {
			let owner = clubs.iter().find(|c| c.id == event.club_id).unwrap();
			let category = owner.category.as_deref().unwrap();
			assert_ne!(category, "Không rõ");
			assert_eq!(event.tags.last().map(String::as_str), Some(category));

			let start = event.start_date.to_time_0_3();
			let deadline = event.registration_deadline.to_time_0_3();
			assert!(deadline < start && start - deadline <= Duration::days(14));
			assert!(event.end_date.to_time_0_3() > start);
			assert!((2..=4).contains(&event.images.len()));
			assert!(["published", "draft", "cancelled"].contains(&event.status.as_str()));
			if start > now() {
				assert_eq!(event.statistics.total_attended, 0);
			}
		}
	}

	#[test]
	fn capacity_and_fee_stay_near_the_template() {
		let mut rng = StdRng::seed_from_u64(6);
		let urls = ImageUrls::new("demo", ImageMode::Placeholder);
		let clubs: Vec<ClubRef> = EVENTS_BY_CLUB_CATEGORY
			.iter()
			.flat_map(|(category, _)| (0..5).map(|_| club(category)))
			.collect();
		let events = generate_events(&mut rng, &urls, &users(), &clubs, now()).unwrap();
		assert!(events.len() >= clubs.len() * 2);

		for event in &events {
			let owner = clubs.iter().find(|c| c.id == event.club_id).unwrap();
			let templates = EVENTS_BY_CLUB_CATEGORY
				.iter()
				.find(|(name, _)| Some(*name) == owner.category.as_deref())
				.map(|(_, templates)| *templates)
				.unwrap();
			let fits = templates
				.iter()
				.filter(|t| t.description == event.description && t.category == event.category)
				.any(|t| {
					let capacity_ok = ((t.max_participants - 10).max(1)..=t.max_participants + 20)
						.contains(&event.max_participants);
					let fee_ok = if t.participation_fee == 0 {
						event.participation_fee == 0
					} else {
						(event.participation_fee - t.participation_fee).abs() <= 10_000
					};
					capacity_ok && fee_ok
				});
			assert!(fits, "{}: {} seats, {} VND", event.title, event.max_participants, event.participation_fee);
		}
	}

	#[test]
	fn each_club_gets_two_to_six_events() {
		let mut rng = StdRng::seed_from_u64(4);
		let urls = ImageUrls::new("demo", ImageMode::Placeholder);
		let clubs = vec![club("Kinh doanh"), club("Kinh doanh")];
		let events = generate_events(&mut rng, &urls, &users(), &clubs, now()).unwrap();
		for c in &clubs {
			let n = events.iter().filter(|e| e.club_id == c.id).count();
			assert!((2..=6).contains(&n), "{n}");
		}
	}

	#[test]
	fn missing_inputs_are_errors() {
		let mut rng = StdRng::seed_from_u64(5);
		let urls = ImageUrls::new("demo", ImageMode::Placeholder);
		assert!(generate_events(&mut rng, &urls, &[], &[club("Công nghệ")], now()).is_err());
		assert!(generate_events(&mut rng, &urls, &users(), &[], now()).is_err());
	}
}
