use std::str::FromStr;

use log::debug;
use uuid::Uuid;

use crate::domain::{Contact, ContactPriority, ContactStatus};
use crate::errors::AppError;

/// In-memory contact store. Keeps contacts in insertion order and is the
/// only authoritative holder of the collection; everything the UI shows is
/// derived from it on demand.
#[derive(Debug, Default, Clone)]
pub struct MemStore {
    data: Vec<Contact>,
}

impl MemStore {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Appends a contact. Ids must be unique; a colliding id is rejected and
    /// the store is left unchanged.
    pub fn add(&mut self, contact: Contact) -> Result<(), AppError> {
        if self.data.iter().any(|c| c.id == contact.id) {
            return Err(AppError::DuplicateId(contact.id));
        }

        debug!("add contact {}", contact.id);
        self.data.push(contact);
        Ok(())
    }

    /// Replaces the mutable fields of the contact with the matching id.
    /// Position in the collection and the original `created_at` are kept.
    pub fn edit(&mut self, contact: Contact) -> Result<(), AppError> {
        match self.data.iter_mut().find(|c| c.id == contact.id) {
            Some(existing) => {
                let created_at = existing.created_at;
                *existing = contact;
                existing.created_at = created_at;

                debug!("edit contact {}", existing.id);
                Ok(())
            }
            None => Err(AppError::NotFound("Contact".to_string())),
        }
    }

    /// Removes the contact with the given id. Absent ids are a no-op, so the
    /// operation is idempotent.
    pub fn remove(&mut self, id: &Uuid) {
        debug!("remove contact {}", id);
        self.data.retain(|c| c.id != *id);
    }

    /// Full collection in insertion order.
    pub fn list(&self) -> &[Contact] {
        &self.data
    }

    pub fn get(&self, id: &Uuid) -> Option<&Contact> {
        self.data.iter().find(|c| c.id == *id)
    }

    pub fn iter(&self) -> MemStoreIter<'_> {
        MemStoreIter {
            inner: &self.data,
            idx: 0,
        }
    }

    /// Subsequence matching the filter, in insertion order.
    pub fn filter(&self, filter: ContactFilter) -> Vec<&Contact> {
        self.data.iter().filter(|c| filter.matches(c)).collect()
    }

    /// Aggregate counts, recomputed on every call.
    pub fn stats(&self) -> StoreStats {
        let mut stats = StoreStats {
            total: self.data.len(),
            ..StoreStats::default()
        };

        for contact in &self.data {
            match contact.status {
                ContactStatus::Pending => stats.pending += 1,
                ContactStatus::Completed => stats.completed += 1,
            }
            match contact.priority {
                ContactPriority::Urgent => stats.urgent += 1,
                ContactPriority::Important => stats.important += 1,
                ContactPriority::Normal => {}
            }
        }
        stats
    }
}

pub struct MemStoreIter<'a> {
    inner: &'a [Contact],
    idx: usize,
}

impl<'a> Iterator for MemStoreIter<'a> {
    type Item = &'a Contact;

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx >= self.inner.len() {
            return None;
        }
        let contact = &self.inner[self.idx];
        self.idx += 1;
        Some(contact)
    }
}

/// A contact matches when its status OR priority equals the filter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactFilter {
    All,
    Status(ContactStatus),
    Priority(ContactPriority),
}

impl ContactFilter {
    pub fn matches(&self, contact: &Contact) -> bool {
        match self {
            ContactFilter::All => true,
            ContactFilter::Status(status) => contact.status == *status,
            ContactFilter::Priority(priority) => contact.priority == *priority,
        }
    }
}

impl FromStr for ContactFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(ContactFilter::All);
        }
        if let Ok(status) = s.parse::<ContactStatus>() {
            return Ok(ContactFilter::Status(status));
        }
        if let Ok(priority) = s.parse::<ContactPriority>() {
            return Ok(ContactFilter::Priority(priority));
        }
        Err(AppError::Validation(format!(
            "Unknown filter '{}'. Expected all, a status or a priority",
            s
        )))
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StoreStats {
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
    pub urgent: usize,
    pub important: usize,
}
