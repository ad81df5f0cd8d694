use anyhow::{Context, Result, bail};
use bson::{doc, oid::ObjectId};
use rand::Rng;
use rand::seq::SliceRandom;
use time::{Duration, OffsetDateTime};
use tracing::info;
use uuid::Uuid;

use super::{bson_time, pick, weighted};
use crate::catalog::registrations::{
	CANCELLATION_REASONS, DIETARY_PREFERENCES, EMERGENCY_CONTACT_NAMES, EMERGENCY_RELATIONSHIPS, PAYMENT_METHODS,
	SPECIAL_REQUIREMENTS, motivation_answers,
};
use crate::core::{Stores, clear, documents, insert_batched};
use crate::models::{self, EmergencyContact, PaymentInfo, Registration, RegistrationAnswers, RegistrationData};
use crate::plan::{RegistrationVolume, SeedPlan};
use crate::refs::{self, EventRef, UserRef};
use crate::stats::{self, count_by, print_counts};

const PAST_STATUSES: &[(&str, u32)] = &[("attended", 65), ("registered", 25), ("cancelled", 10)];
const FUTURE_STATUSES: &[(&str, u32)] = &[("registered", 80), ("cancelled", 10), ("attended", 10)];
const PAYMENT_STATUSES: &[(&str, u32)] = &[("paid", 60), ("pending", 30), ("refunded", 10)];

const DEFAULT_CATEGORY: &str = "Social";
const DEFAULT_CAPACITY: i64 = 50;

/// `TK-` plus the first eight characters of a v4 uuid, upper-cased.
pub fn ticket_id() -> String {
	let id = Uuid::new_v4().simple().to_string();
	format!("TK-{}", id[..8].to_uppercase())
}

fn emergency_contact<R: Rng + ?Sized>(rng: &mut R) -> EmergencyContact {
	EmergencyContact {
		name: pick(rng, EMERGENCY_CONTACT_NAMES).to_string(),
		phone: format!("0{}", rng.gen_range(300_000_000..=999_999_999)),
		relationship: pick(rng, EMERGENCY_RELATIONSHIPS).to_string(),
	}
}

/// Sign-up time: 1 to 30 days before the deadline, never later than `now`.
fn registered_at<R: Rng + ?Sized>(rng: &mut R, deadline: OffsetDateTime, now: OffsetDateTime) -> OffsetDateTime {
	let days_left = (deadline - now).whole_seconds().div_euclid(86_400);
	let window = (days_left + 30).max(1).min(30);
	let at = deadline - Duration::days(rng.gen_range(1..=window));
	if at > now {
		now - Duration::hours(rng.gen_range(1..=72))
	} else {
		at
	}
}

fn build_registration<R: Rng + ?Sized>(
	rng: &mut R,
	event: &EventRef,
	user: &UserRef,
	now: OffsetDateTime,
) -> Registration {
	let start = event.start_date.to_time_0_3();
	let fee = event.participation_fee.unwrap_or(0);
	let category = event.category.as_deref().unwrap_or(DEFAULT_CATEGORY);

	let statuses = if start < now { PAST_STATUSES } else { FUTURE_STATUSES };
	let status = weighted(rng, statuses).unwrap_or("registered");
	let mut payment_status = if fee == 0 {
		"pending"
	} else {
		weighted(rng, PAYMENT_STATUSES).unwrap_or("pending")
	};

	let deadline = event.registration_deadline.unwrap_or(event.start_date).to_time_0_3();
	let registered = registered_at(rng, deadline, now);

	let answers = RegistrationAnswers {
		motivation: pick(rng, motivation_answers(category)).to_string(),
		special_requirements: pick(rng, SPECIAL_REQUIREMENTS).to_string(),
		dietary_preferences: pick(rng, DIETARY_PREFERENCES).to_string(),
	};
	let contact = emergency_contact(rng);

	let payment_info = PaymentInfo {
		amount: fee,
		currency: String::from("VND"),
		method: (fee > 0).then(|| pick(rng, PAYMENT_METHODS).to_string()),
		transaction_id: (payment_status == "paid").then(|| format!("TXN-{}", rng.gen_range(100_000..=999_999))),
	};
	let payment_reference = matches!(payment_status, "paid" | "refunded")
		.then(|| format!("PAY-{}", rng.gen_range(1_000_000..=9_999_999)));

	let mut updated = registered;
	let mut cancelled_at = None;
	let mut cancellation_reason = None;
	if status == "cancelled" {
		let at = registered + Duration::days(rng.gen_range(1..=15));
		cancelled_at = Some(bson_time(at));
		cancellation_reason = Some(pick(rng, CANCELLATION_REASONS).to_string());
		updated = at;
		if payment_status == "paid" {
			payment_status = "refunded";
		}
	}

	Registration {
		id: ObjectId::new(),
		event_id: event.id,
		user_id: user.id.clone(),
		ticket_id: ticket_id(),
		status: status.to_string(),
		user_email: user.email.clone(),
		user_name: user.full_name.clone(),
		registration_data: RegistrationData {
			special_requirements: answers.special_requirements.clone(),
			emergency_contact_legacy: format!("{} - {}", contact.name, contact.phone),
			answers: vec![answers],
		},
		payment_info,
		payment_status: payment_status.to_string(),
		payment_reference,
		emergency_contact: contact,
		registered_at: bson_time(registered),
		created_at: bson_time(registered),
		updated_at: bson_time(updated),
		cancelled_at,
		cancellation_reason,
	}
}

/// Registrations for every open event, each filled to a random share of its capacity.
pub fn generate_registrations<R: Rng + ?Sized>(
	rng: &mut R,
	users: &[UserRef],
	events: &[EventRef],
	volume: &RegistrationVolume,
	now: OffsetDateTime,
) -> Result<Vec<Registration>> {
	if users.is_empty() {
		bail!("No users found. Please seed users first.");
	}
	if events.is_empty() {
		bail!("No events found. Please seed events first.");
	}

	let mut registrations = Vec::new();
	for event in events {
		if matches!(event.status.as_deref(), Some("draft" | "cancelled")) {
			continue;
		}
		let capacity = event.max_participants.unwrap_or(DEFAULT_CAPACITY).max(0);
		let fill = rng.gen_range(volume.fill_min..=volume.fill_max);
		let wanted = ((capacity as f64 * fill).floor() as usize).min(users.len());

		let attendees: Vec<&UserRef> = users.choose_multiple(rng, wanted).collect();
		for user in attendees {
			registrations.push(build_registration(rng, event, user, now));
		}
	}
	Ok(registrations)
}

pub async fn seed<R: Rng + ?Sized>(stores: &Stores, rng: &mut R, plan: &SeedPlan, now: OffsetDateTime) -> Result<usize> {
	let users = refs::users(&stores.pg).await?;
	let events = refs::events(&stores.event_db).await?;
	let registrations = generate_registrations(rng, &users, &events, &plan.registrations, now)?;
	info!("generated {} registrations for {} events", registrations.len(), events.len());

	let coll = stores.event_db.collection::<Registration>(models::REGISTRATIONS);
	clear(&coll).await?;
	let inserted = insert_batched(&coll, &registrations, plan.batches.registrations).await?;

	print_stats(stores).await?;
	sync_event_statistics(stores, &events).await?;
	Ok(inserted)
}

async fn print_stats(stores: &Stores) -> Result<()> {
	let coll = documents(&stores.event_db, models::REGISTRATIONS);
	println!("Total registrations: {}", stats::count(&coll, None).await?);
	print_counts("Registrations by status", &count_by(&coll, "status", None).await?);
	print_counts("Registrations by payment status", &count_by(&coll, "payment_status", None).await?);

	let pipeline = vec![
		doc! { "$group": { "_id": "$event_id", "count": { "$sum": 1 } } },
		doc! { "$sort": { "count": -1 } },
		doc! { "$limit": 5 },
		doc! { "$lookup": { "from": models::EVENTS, "localField": "_id", "foreignField": "_id", "as": "event" } },
		doc! { "$unwind": "$event" },
	];
	println!("Top events by registrations:");
	for row in stats::aggregate(&coll, pipeline).await? {
		let title = row.get_document("event").ok().and_then(|e| e.get_str("title").ok()).unwrap_or("?");
		println!("  - {title}: {}", stats::number(&row, "count"));
	}
	Ok(())
}

/// Replace each event's counters with what was actually registered.
async fn sync_event_statistics(stores: &Stores, events: &[EventRef]) -> Result<()> {
	let registrations = documents(&stores.event_db, models::REGISTRATIONS);
	let event_coll = documents(&stores.event_db, models::EVENTS);
	for event in events {
		let total = stats::count(&registrations, Some(doc! { "event_id": event.id })).await?;
		let attended = stats::count(&registrations, Some(doc! { "event_id": event.id, "status": "attended" })).await?;
		event_coll
			.update_one(
				doc! { "_id": event.id },
				doc! { "$set": {
					"statistics.total_registrations": total as i64,
					"statistics.total_attended": attended as i64,
					"statistics.total_interested": 0_i64,
				} },
				None,
			)
			.await
			.with_context(|| format!("updating statistics of {}", event.title))?;
	}
	info!("updated statistics for {} events", events.len());
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::{SeedableRng, rngs::StdRng};
	use std::collections::HashSet;

	fn now() -> OffsetDateTime {
		OffsetDateTime::from_unix_timestamp(1_760_000_000).unwrap()
	}

	fn users(n: usize) -> Vec<UserRef> {
		(0..n)
			.map(|i| UserRef {
				id: format!("user-{i}"),
				email: format!("u{i}@x"),
				full_name: format!("User {i}"),
				role: String::from("user"),
			})
			.collect()
	}

	fn event(days_from_now: i64, capacity: i64, fee: i64, status: &str) -> EventRef {
		let start = now() + Duration::days(days_from_now);
		EventRef {
			id: ObjectId::new(),
			title: String::from("Hackathon"),
			category: Some(String::from("Competition")),
			start_date: bson_time(start),
			registration_deadline: Some(bson_time(start - Duration::days(3))),
			max_participants: Some(capacity),
			participation_fee: Some(fee),
			status: Some(status.to_string()),
		}
	}

	#[test]
	fn ticket_ids_have_the_expected_shape() {
		let id = ticket_id();
		assert_eq!(id.len(), 11);
		assert!(id.starts_with("TK-"));
		assert!(id[3..].chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
	}

	#[test]
	fn drafts_and_cancelled_events_get_nobody() {
		let mut rng = StdRng::seed_from_u64(1);
		let events = vec![event(5, 40, 0, "draft"), event(5, 40, 0, "cancelled")];
		let regs =
			generate_registrations(&mut rng, &users(50), &events, &RegistrationVolume::default(), now()).unwrap();
		assert!(regs.is_empty());
	}

	#[test]
	fn fill_rate_is_bounded_by_capacity_and_users() {
		let mut rng = StdRng::seed_from_u64(2);
		let events = vec![event(10, 100, 0, "published")];
		let regs =
			generate_registrations(&mut rng, &users(200), &events, &RegistrationVolume::default(), now()).unwrap();
		assert!((40..=90).contains(&regs.len()), "{}", regs.len());

		let few = generate_registrations(&mut rng, &users(7), &events, &RegistrationVolume::default(), now()).unwrap();
		assert_eq!(few.len(), 7);
		let distinct: HashSet<_> = few.iter().map(|r| r.user_id.clone()).collect();
		assert_eq!(distinct.len(), 7);
	}

	#[test]
	fn free_events_stay_pending_without_payment_details() {
		let mut rng = StdRng::seed_from_u64(3);
		let events = vec![event(-10, 60, 0, "published")];
		for reg in generate_registrations(&mut rng, &users(60), &events, &RegistrationVolume::default(), now()).unwrap() {
			assert_eq!(reg.payment_status, "pending");
			assert!(reg.payment_info.method.is_none());
			assert!(reg.payment_info.transaction_id.is_none());
			assert!(reg.payment_reference.is_none());
		}
	}

	#[test]
	fn cancelled_paid_registrations_are_refunded() {
		let mut rng = StdRng::seed_from_u64(4);
		let events: Vec<EventRef> = (0..10).map(|_| event(20, 80, 150_000, "published")).collect();
		let regs = generate_registrations(&mut rng, &users(100), &events, &RegistrationVolume::default(), now()).unwrap();
		assert!(regs.iter().any(|r| r.status == "cancelled"));
		for reg in &regs {
			assert!(reg.payment_info.method.is_some());
			assert_eq!(reg.payment_reference.is_some(), reg.payment_status != "pending");
			if reg.status == "cancelled" {
				assert_ne!(reg.payment_status, "paid");
				let cancelled = reg.cancelled_at.unwrap().to_time_0_3();
				assert_eq!(reg.updated_at.to_time_0_3(), cancelled);
				assert!(reg.cancellation_reason.is_some());
			} else {
				assert!(reg.cancelled_at.is_none());
			}
		}
	}

	#[test]
	fn sign_ups_never_happen_in_the_future() {
		let mut rng = StdRng::seed_from_u64(5);
		for days in [-30, -1, 0, 1, 15, 60] {
			let deadline = now() + Duration::days(days);
			for _ in 0..50 {
				let at = registered_at(&mut rng, deadline, now());
				assert!(at <= now());
				assert!(at < deadline);
			}
		}
	}

	#[test]
	fn past_events_are_mostly_attended() {
		let mut rng = StdRng::seed_from_u64(6);
		let events: Vec<EventRef> = (0..5).map(|_| event(-20, 100, 0, "published")).collect();
		let regs = generate_registrations(&mut rng, &users(150), &events, &RegistrationVolume::default(), now()).unwrap();
		let attended = regs.iter().filter(|r| r.status == "attended").count();
		assert!(attended * 2 > regs.len());
	}
}
