use crate::app::error::{context, Result};
use eyre::WrapErr;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::User => "You",
            Role::Assistant => "Assistant",
            Role::System => "System",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
}

impl ChatMessage {
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, text)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(Role::Assistant, text)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

impl Conversation {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            messages: Vec::new(),
        }
    }

    pub fn with_messages(mut self, messages: Vec<ChatMessage>) -> Self {
        self.messages = messages;
        self
    }

    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            &self.id
        } else {
            &self.title
        }
    }
}

// A transcript file holds either one conversation or a list of them
#[derive(Deserialize)]
#[serde(untagged)]
enum TranscriptFile {
    Many(Vec<Conversation>),
    One(Conversation),
}

pub fn parse_transcript(json: &str) -> Result<Vec<Conversation>> {
    let parsed: TranscriptFile = serde_json::from_str(json)
        .map_err(|e| context::transcript(format!("Invalid transcript JSON: {}", e)))?;

    Ok(match parsed {
        TranscriptFile::Many(conversations) => conversations,
        TranscriptFile::One(conversation) => vec![conversation],
    })
}

pub fn load_transcript(path: &Path) -> Result<Vec<Conversation>> {
    let json = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read transcript {}", path.display()))?;
    let conversations = parse_transcript(&json)?;

    tracing::info!(
        "Loaded {} conversation(s) from {}",
        conversations.len(),
        path.display()
    );
    Ok(conversations)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_conversation() {
        let json = r#"{
            "id": "abc",
            "messages": [
                { "role": "user", "text": "hello" },
                { "role": "assistant", "text": "hi there" }
            ]
        }"#;

        let conversations = parse_transcript(json).unwrap();
        assert_eq!(conversations.len(), 1);
        assert_eq!(conversations[0].display_title(), "abc");
        assert_eq!(conversations[0].messages[1], ChatMessage::assistant("hi there"));
    }

    #[test]
    fn test_parse_conversation_list() {
        let json = r#"[
            { "id": "a", "title": "First" },
            { "id": "b", "title": "Second", "messages": [{ "role": "system", "text": "x" }] }
        ]"#;

        let conversations = parse_transcript(json).unwrap();
        assert_eq!(conversations.len(), 2);
        assert!(conversations[0].messages.is_empty());
        assert_eq!(conversations[1].messages[0].role, Role::System);
    }

    #[test]
    fn test_parse_rejects_unknown_role() {
        let json = r#"{ "id": "a", "messages": [{ "role": "robot", "text": "x" }] }"#;
        assert!(parse_transcript(json).is_err());
    }
}
