//! Documents written to the club and event stores.

use bson::{DateTime, Document, oid::ObjectId};
use serde::{Deserialize, Serialize};

pub const CLUBS: &str = "clubs";
pub const MEMBERSHIPS: &str = "memberships";
pub const CAMPAIGNS: &str = "recruitmentcampaigns";
pub const EVENTS: &str = "events";
pub const REGISTRATIONS: &str = "registrations";
pub const EVENT_INTERESTS: &str = "event_interests";
pub const EVENT_TASKS: &str = "event_tasks";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Club {
	#[serde(rename = "_id")]
	pub id: ObjectId,
	pub name: String,
	pub description: String,
	pub category: String,
	pub location: String,
	pub contact_email: String,
	pub contact_phone: String,
	pub logo_url: String,
	pub cover_url: String,
	pub website_url: String,
	pub social_links: ClubSocialLinks,
	pub status: String,
	pub manager: String,
	pub created_by: String,
	pub founding_date: DateTime,
	pub member_count: i64,
	pub created_at: DateTime,
	pub updated_at: DateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClubSocialLinks {
	pub facebook: String,
	pub instagram: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
	#[serde(rename = "_id")]
	pub id: ObjectId,
	pub club_id: ObjectId,
	pub title: String,
	pub description: String,
	pub short_description: String,
	pub category: String,
	pub location: EventLocation,
	pub start_date: DateTime,
	pub end_date: DateTime,
	pub registration_deadline: DateTime,
	pub max_participants: i64,
	pub participation_fee: i64,
	pub currency: String,
	pub requirements: Vec<String>,
	pub tags: Vec<String>,
	pub images: Vec<String>,
	pub event_image_url: String,
	pub event_logo_url: String,
	pub agenda: Vec<AgendaItem>,
	pub contact_info: ContactInfo,
	pub social_links: EventSocialLinks,
	pub status: String,
	pub visibility: String,
	pub organizers: Vec<Organizer>,
	pub statistics: EventStatistics,
	pub created_by: String,
	pub current_participants: i64,
	pub created_at: DateTime,
	pub updated_at: DateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "location_type", rename_all = "lowercase")]
pub enum EventLocation {
	Physical {
		address: String,
		room: String,
		coordinates: Coordinates,
	},
	Virtual {
		virtual_link: String,
		platform: String,
	},
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
	pub lat: f64,
	pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgendaItem {
	pub time: String,
	pub activity: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactInfo {
	pub email: String,
	pub phone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventSocialLinks {
	pub facebook: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organizer {
	pub user_id: String,
	pub role: String,
	pub joined_at: DateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventStatistics {
	pub total_registrations: i64,
	pub total_interested: i64,
	pub total_attended: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Campaign {
	#[serde(rename = "_id")]
	pub id: ObjectId,
	pub club_id: ObjectId,
	pub title: String,
	pub description: String,
	pub requirements: Vec<String>,
	pub application_questions: Vec<ApplicationQuestion>,
	pub start_date: DateTime,
	pub end_date: DateTime,
	pub max_applications: i64,
	pub status: String,
	pub logo_url: String,
	pub statistics: CampaignStatistics,
	pub created_by: Option<String>,
	pub created_at: DateTime,
	pub updated_at: DateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationQuestion {
	pub id: String,
	pub question: String,
	#[serde(rename = "type")]
	pub kind: String,
	pub is_required: bool,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub max_length: Option<i32>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub options: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignStatistics {
	pub total_applications: i64,
	pub approved_applications: i64,
	pub rejected_applications: i64,
	pub pending_applications: i64,
	pub last_updated: DateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Membership {
	#[serde(rename = "_id")]
	pub id: ObjectId,
	pub club_id: ObjectId,
	pub user_id: String,
	pub user_email: String,
	pub user_full_name: String,
	pub campaign_id: Option<ObjectId>,
	pub role: String,
	pub status: String,
	pub application_message: String,
	pub application_answers: Document,
	pub joined_at: DateTime,
	pub created_at: DateTime,
	pub updated_at: DateTime,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub approved_by: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub approved_at: Option<DateTime>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub removed_at: Option<DateTime>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub removal_reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registration {
	#[serde(rename = "_id")]
	pub id: ObjectId,
	pub event_id: ObjectId,
	pub user_id: String,
	pub ticket_id: String,
	pub status: String,
	pub user_email: String,
	pub user_name: String,
	pub registration_data: RegistrationData,
	pub payment_info: PaymentInfo,
	pub payment_status: String,
	pub payment_reference: Option<String>,
	pub emergency_contact: EmergencyContact,
	pub registered_at: DateTime,
	pub created_at: DateTime,
	pub updated_at: DateTime,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub cancelled_at: Option<DateTime>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub cancellation_reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationData {
	pub answers: Vec<RegistrationAnswers>,
	pub special_requirements: String,
	pub emergency_contact_legacy: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationAnswers {
	pub motivation: String,
	pub special_requirements: String,
	pub dietary_preferences: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentInfo {
	pub amount: i64,
	pub currency: String,
	pub method: Option<String>,
	pub transaction_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmergencyContact {
	pub name: String,
	pub phone: String,
	pub relationship: String,
}
