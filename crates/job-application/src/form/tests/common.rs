use std::sync::{Arc, Mutex};

use serde_json::{json, Value};

use crate::form::domain::{ApplicationDraft, Position, Skill, SkillSet};
use crate::form::transport::{SubmissionPayload, SubmissionTransport, TransportError};

pub(super) fn developer_draft() -> ApplicationDraft {
    ApplicationDraft {
        full_name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        phone_number: "5551234".to_string(),
        position: Position::Developer,
        experience: "3".to_string(),
        portfolio_url: String::new(),
        management_experience: String::new(),
        additional_skills: [Skill::JavaScript].into_iter().collect(),
        preferred_interview_time: "2024-01-01T10:00".to_string(),
    }
}

pub(super) fn designer_draft() -> ApplicationDraft {
    ApplicationDraft {
        position: Position::Designer,
        experience: "5".to_string(),
        portfolio_url: "https://ada.design".to_string(),
        additional_skills: [Skill::Css, Skill::JavaScript].into_iter().collect(),
        ..developer_draft()
    }
}

pub(super) fn manager_draft() -> ApplicationDraft {
    ApplicationDraft {
        position: Position::Manager,
        experience: String::new(),
        management_experience: "Led a team of 5".to_string(),
        ..developer_draft()
    }
}

pub(super) fn unset_draft() -> ApplicationDraft {
    ApplicationDraft {
        position: Position::Unset,
        experience: String::new(),
        ..developer_draft()
    }
}

pub(super) fn skills(list: &[Skill]) -> SkillSet {
    list.iter().copied().collect()
}

/// Records every payload it is asked to send.
#[derive(Debug, Clone, Default)]
pub(super) struct RecordingTransport {
    sent: Arc<Mutex<Vec<SubmissionPayload>>>,
    fail: bool,
}

impl RecordingTransport {
    pub(super) fn failing() -> Self {
        Self {
            sent: Arc::default(),
            fail: true,
        }
    }

    pub(super) fn sent(&self) -> Vec<SubmissionPayload> {
        self.sent.lock().expect("transport mutex poisoned").clone()
    }
}

impl SubmissionTransport for RecordingTransport {
    fn send(&self, payload: &SubmissionPayload) -> Result<Value, TransportError> {
        self.sent
            .lock()
            .expect("transport mutex poisoned")
            .push(payload.clone());
        if self.fail {
            Err(TransportError::Request("connection refused".to_string()))
        } else {
            Ok(json!({ "result": "success" }))
        }
    }
}
