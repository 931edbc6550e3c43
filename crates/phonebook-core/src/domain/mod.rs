pub mod contact;
pub mod merge;
pub mod name;
pub mod phone;

pub use contact::{Contact, RawRecord, COLUMNS};
pub use merge::{merge_contacts, ContactKey};
pub use name::{join_full_name, parse_full_name, ParsedName};
pub use phone::{normalize_phone, normalize_phone_with_extension};
