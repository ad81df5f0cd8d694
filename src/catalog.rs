//! Static Vietnamese template data the seeders draw from.

pub mod campaigns;
pub mod clubs;
pub mod events;
pub mod people;
pub mod registrations;
