//! Message record and delivery status.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{Measurable, MessageId, Timestamp, ValidationError, WorkStatus};

/// Delivery status of a message.
///
/// Messages never enter the pending/in-progress/completed triple; their
/// distribution is reported separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MessageStatus {
    #[default]
    Sent,
    Read,
    Responded,
}

impl MessageStatus {
    /// Returns the wire-format name of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageStatus::Sent => "sent",
            MessageStatus::Read => "read",
            MessageStatus::Responded => "responded",
        }
    }
}

impl fmt::Display for MessageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A tracked team communication with clarity/impact/urgency ratings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: MessageId,
    pub title: String,
    pub content: String,
    /// How understandable the message is, 1-10.
    pub clarity: u8,
    /// How consequential the message is, 1-10.
    pub impact: u8,
    /// How time-sensitive the message is, 1-10.
    pub urgency: u8,
    pub status: MessageStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Message {
    /// Creates a new sent message, validating text fields and rating ranges.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        clarity: u8,
        impact: u8,
        urgency: u8,
        now: Timestamp,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        let content = content.into();
        if content.trim().is_empty() {
            return Err(ValidationError::empty_field("content"));
        }
        for (field, value) in [("clarity", clarity), ("impact", impact), ("urgency", urgency)] {
            if !(1..=10).contains(&value) {
                return Err(ValidationError::out_of_range(field, 1, 10, value as i32));
            }
        }

        Ok(Self {
            id: MessageId::new(),
            title,
            content,
            clarity,
            impact,
            urgency,
            status: MessageStatus::Sent,
            created_at: now,
            updated_at: now,
        })
    }
}

impl Measurable for Message {
    fn created_at(&self) -> Timestamp {
        self.created_at
    }

    fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    fn work_status(&self) -> Option<WorkStatus> {
        None
    }

    fn impact(&self) -> Option<u8> {
        Some(self.impact)
    }
}
