use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Incoming voice-platform request (Alexa JSON interface).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillRequest {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub session: Option<Session>,
    #[serde(default)]
    pub context: Option<Context>,
    pub request: RequestBody,
}

impl SkillRequest {
    /// Session id first, then the system context.
    pub fn application_id(&self) -> Option<&str> {
        self.session
            .as_ref()
            .and_then(|session| session.application.as_ref())
            .or_else(|| {
                self.context
                    .as_ref()
                    .and_then(|context| context.system.as_ref())
                    .and_then(|system| system.application.as_ref())
            })
            .map(|application| application.application_id.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default)]
    pub new: bool,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub application: Option<Application>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub application_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Context {
    #[serde(rename = "System", default)]
    pub system: Option<SystemContext>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemContext {
    #[serde(default)]
    pub application: Option<Application>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RequestBody {
    LaunchRequest {
        #[serde(rename = "requestId", default)]
        request_id: Option<String>,
    },
    IntentRequest {
        #[serde(rename = "requestId", default)]
        request_id: Option<String>,
        intent: Intent,
    },
    SessionEndedRequest {
        #[serde(rename = "requestId", default)]
        request_id: Option<String>,
        #[serde(default)]
        reason: Option<String>,
    },
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Intent {
    pub name: String,
    #[serde(default)]
    pub slots: HashMap<String, Slot>,
}

impl Intent {
    /// Slot text, `None` when the slot is absent or was not filled.
    pub fn slot(&self, name: &str) -> Option<&str> {
        self.slots
            .get(name)
            .and_then(|slot| slot.value.as_deref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slot {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
}

/// Outgoing response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillResponse {
    pub version: String,
    pub response: ResponseBody,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub should_end_session: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSpeech {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

impl SkillResponse {
    const VERSION: &'static str = "1.0";

    /// Speaks `text` and ends the session.
    pub fn tell(text: impl Into<String>) -> Self {
        Self::speak(text.into(), true)
    }

    /// Speaks `text` and keeps the session open for a follow-up question.
    pub fn ask(text: impl Into<String>) -> Self {
        Self::speak(text.into(), false)
    }

    pub fn empty() -> Self {
        Self {
            version: Self::VERSION.to_string(),
            response: ResponseBody::default(),
        }
    }

    fn speak(text: String, end_session: bool) -> Self {
        Self {
            version: Self::VERSION.to_string(),
            response: ResponseBody {
                output_speech: Some(OutputSpeech {
                    kind: "PlainText".to_string(),
                    text,
                }),
                should_end_session: Some(end_session),
            },
        }
    }

    pub fn speech_text(&self) -> Option<&str> {
        self.response
            .output_speech
            .as_ref()
            .map(|speech| speech.text.as_str())
    }
}
