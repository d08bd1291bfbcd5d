pub mod contact;

pub use contact::{Contact, ContactPriority, ContactStatus};
