use std::fmt;

use serde::{Deserialize, Serialize};

pub const DEFAULT_FETCH_LIMIT: u32 = 10;
pub const DEFAULT_REPLY_TONE: &str = "professional";

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisRequest {
    pub subject: String,
    pub sender: String,
    pub recipient: String,
    pub body: String,
    pub received_at: String,
}

/// Verdict for one email, produced entirely by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub email_id: String,
    pub priority_score: f64,
    pub priority_level: String,
    pub intent: String,
    pub sentiment: String,
    #[serde(default)]
    pub urgency_keywords: Vec<String>,
    pub sender_importance: f64,
    pub processing_time_ms: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Clone, Serialize)]
pub struct InboxFetchRequest {
    pub email: String,
    pub password: String,
    pub limit: u32,
}

impl InboxFetchRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>, limit: Option<u32>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            limit: limit.unwrap_or(DEFAULT_FETCH_LIMIT),
        }
    }
}

// The password must never reach logs, even at debug level.
impl fmt::Debug for InboxFetchRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InboxFetchRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("limit", &self.limit)
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboxFetchResult {
    pub results: Vec<AnalysisResult>,
    pub total: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReplyRequest {
    pub email_subject: String,
    pub email_body: String,
    pub tone: String,
}

impl ReplyRequest {
    pub fn new(subject: impl Into<String>, body: impl Into<String>, tone: Option<&str>) -> Self {
        Self {
            email_subject: subject.into(),
            email_body: body.into(),
            tone: tone
                .map(str::trim)
                .filter(|tone| !tone.is_empty())
                .unwrap_or(DEFAULT_REPLY_TONE)
                .to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplyResult {
    pub generated_response: String,
    pub tone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<f64>,
}
