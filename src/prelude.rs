pub use crate::cli::{command, run_app};
pub use crate::domain::contact::{self, Contact, ContactPriority, ContactStatus};
pub use crate::errors::AppError;
pub use crate::store::{self, ContactFilter, MemStore, StoreStats};
