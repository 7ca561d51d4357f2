//! Timeline - merged newest-first view over the communication collections.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::Timestamp;
use crate::domain::records::{Conflict, Decision, Feedback, Message};

/// Which collection a timeline entry came from.
///
/// Tasks do not appear on the timeline; it tracks communication flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimelineKind {
    Message,
    Decision,
    Conflict,
    Feedback,
}

impl fmt::Display for TimelineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TimelineKind::Message => "message",
            TimelineKind::Decision => "decision",
            TimelineKind::Conflict => "conflict",
            TimelineKind::Feedback => "feedback",
        };
        write!(f, "{}", s)
    }
}

/// A single row of the merged timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    pub id: String,
    pub kind: TimelineKind,
    pub title: String,
    pub description: String,
    pub timestamp: Timestamp,
    /// Wire-format status string of the source record. Message entries
    /// always read "sent" regardless of delivery state.
    pub status: String,
    pub impact: Option<u8>,
}

/// Merges the four communication collections into one newest-first list.
///
/// Entries are keyed by creation time. Ties keep the merge order
/// (messages, then decisions, conflicts, feedback).
pub fn build_timeline(
    messages: &[Message],
    decisions: &[Decision],
    conflicts: &[Conflict],
    feedbacks: &[Feedback],
) -> Vec<TimelineEntry> {
    let mut entries: Vec<TimelineEntry> = Vec::with_capacity(
        messages.len() + decisions.len() + conflicts.len() + feedbacks.len(),
    );

    entries.extend(messages.iter().map(|message| TimelineEntry {
        id: message.id.to_string(),
        kind: TimelineKind::Message,
        title: message.title.clone(),
        description: message.content.clone(),
        timestamp: message.created_at,
        status: "sent".to_string(),
        impact: Some(message.impact),
    }));

    entries.extend(decisions.iter().map(|decision| TimelineEntry {
        id: decision.id.to_string(),
        kind: TimelineKind::Decision,
        title: decision.title.clone(),
        description: decision.description.clone(),
        timestamp: decision.created_at,
        status: decision.status.as_str().to_string(),
        impact: None,
    }));

    entries.extend(conflicts.iter().map(|conflict| TimelineEntry {
        id: conflict.id.to_string(),
        kind: TimelineKind::Conflict,
        title: conflict.title.clone(),
        description: conflict.description.clone(),
        timestamp: conflict.created_at,
        status: conflict.status.as_str().to_string(),
        impact: None,
    }));

    entries.extend(feedbacks.iter().map(|feedback| TimelineEntry {
        id: feedback.id.to_string(),
        kind: TimelineKind::Feedback,
        title: feedback.title.clone(),
        description: feedback.description.clone(),
        timestamp: feedback.created_at,
        status: feedback.status.as_str().to_string(),
        impact: None,
    }));

    // Stable sort keeps merge order for identical timestamps.
    entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::records::{ConflictStatus, FeedbackPriority, FeedbackType};

    fn at(secs: i64) -> Timestamp {
        Timestamp::from_unix_secs(1_705_276_800 + secs)
    }

    #[test]
    fn empty_collections_produce_empty_timeline() {
        assert!(build_timeline(&[], &[], &[], &[]).is_empty());
    }

    #[test]
    fn entries_are_sorted_newest_first() {
        let old_message = Message::new("old", "c", 5, 5, 5, at(0)).unwrap();
        let decision = Decision::new("mid", "", vec![], vec![], at(100)).unwrap();
        let recent_feedback = Feedback::new(
            "new",
            "d",
            FeedbackType::Praise,
            FeedbackPriority::Low,
            vec![],
            at(200),
        )
        .unwrap();

        let timeline = build_timeline(&[old_message], &[decision], &[], &[recent_feedback]);

        assert_eq!(timeline.len(), 3);
        assert_eq!(timeline[0].title, "new");
        assert_eq!(timeline[1].title, "mid");
        assert_eq!(timeline[2].title, "old");
    }

    #[test]
    fn message_entries_carry_impact_and_sent_status() {
        let mut message = Message::new("m", "body", 5, 7, 5, at(0)).unwrap();
        message.status = crate::domain::records::MessageStatus::Responded;

        let timeline = build_timeline(&[message], &[], &[], &[]);

        assert_eq!(timeline[0].kind, TimelineKind::Message);
        assert_eq!(timeline[0].status, "sent");
        assert_eq!(timeline[0].impact, Some(7));
        assert_eq!(timeline[0].description, "body");
    }

    #[test]
    fn non_message_entries_use_record_status() {
        let conflict = Conflict::new(
            "c",
            "d",
            vec!["Ann".to_string()],
            vec![],
            vec![],
            at(0),
        )
        .unwrap()
        .with_status(ConflictStatus::Resolved, at(10));

        let timeline = build_timeline(&[], &[], &[conflict], &[]);

        assert_eq!(timeline[0].status, "resolved");
        assert_eq!(timeline[0].impact, None);
        // Timeline keys off creation, not update, time.
        assert_eq!(timeline[0].timestamp, at(0));
    }
}
