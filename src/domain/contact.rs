use core::fmt;
use std::str::FromStr;

pub use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
pub use uuid::Uuid;

use crate::errors::AppError;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Contact {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub status: ContactStatus,
    pub priority: ContactPriority,
    pub created_at: DateTime<Utc>,
}

impl Contact {
    pub fn new(
        full_name: String,
        email: String,
        phone: String,
        status: ContactStatus,
        priority: ContactPriority,
    ) -> Self {
        Contact {
            id: Uuid::new_v4(),
            full_name,
            email,
            phone,
            status,
            priority,
            created_at: Utc::now(),
        }
    }
}

/// Workflow state of follow-up on a contact.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    Pending,
    Completed,
}

impl ContactStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactStatus::Pending => "pending",
            ContactStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for ContactStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ContactStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(ContactStatus::Pending),
            "completed" => Ok(ContactStatus::Completed),
            other => Err(AppError::Validation(format!(
                "Unknown status '{}'. Expected pending or completed",
                other
            ))),
        }
    }
}

/// Urgency classification, independent of status.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContactPriority {
    Urgent,
    Important,
    Normal,
}

impl ContactPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactPriority::Urgent => "urgent",
            ContactPriority::Important => "important",
            ContactPriority::Normal => "normal",
        }
    }
}

impl fmt::Display for ContactPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ContactPriority {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "urgent" => Ok(ContactPriority::Urgent),
            "important" => Ok(ContactPriority::Important),
            "normal" => Ok(ContactPriority::Normal),
            other => Err(AppError::Validation(format!(
                "Unknown priority '{}'. Expected urgent, important or normal",
                other
            ))),
        }
    }
}
