//! Chat webhook payload structures

use serde::Serialize;

use crate::message::Message;

#[derive(Debug, Clone, Default, Serialize)]
pub struct EmbedFooter {
    pub text: String,
    pub icon_url: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct EmbedAuthor {
    pub name: String,
    pub url: String,
    pub icon_url: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
}

/// A single rich embed block
#[derive(Debug, Clone, Default, Serialize)]
pub struct Embed {
    pub title: String,
    pub description: String,
    pub url: String,
    pub color: u32,
    pub footer: EmbedFooter,
    pub author: EmbedAuthor,
    pub fields: Vec<EmbedField>,
    pub timestamp: String,
}

/// Body POSTed to the webhook endpoint
#[derive(Debug, Clone, Default, Serialize)]
pub struct WebhookPayload {
    pub wait: bool,
    pub content: String,
    pub username: String,
    pub avatar_url: String,
    pub tts: bool,
    pub embeds: Vec<Embed>,
}

impl From<Message> for Embed {
    fn from(message: Message) -> Self {
        Self {
            title: message.title,
            description: message.description,
            url: message.link,
            color: message.color,
            author: EmbedAuthor {
                name: message.author.name,
                url: String::new(),
                icon_url: message.author.avatar_url,
            },
            ..Default::default()
        }
    }
}

impl From<Message> for WebhookPayload {
    fn from(message: Message) -> Self {
        Self {
            embeds: vec![Embed::from(message)],
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::MessageAuthor;
    use serde_json::json;

    #[test]
    fn payload_carries_one_embed_with_every_field() {
        let message = Message {
            title: "Build #**42** on `org/repo` has succeded.".to_string(),
            description: "**alice** pushed to `main`.".to_string(),
            link: "https://ci.test/org/repo/42".to_string(),
            color: 0x1AC600,
            author: MessageAuthor {
                name: "alice".to_string(),
                avatar_url: "https://avatars.test/alice.png".to_string(),
            },
        };

        let value = serde_json::to_value(WebhookPayload::from(message)).unwrap();

        assert_eq!(
            value,
            json!({
                "wait": false,
                "content": "",
                "username": "",
                "avatar_url": "",
                "tts": false,
                "embeds": [{
                    "title": "Build #**42** on `org/repo` has succeded.",
                    "description": "**alice** pushed to `main`.",
                    "url": "https://ci.test/org/repo/42",
                    "color": 1754624,
                    "footer": { "text": "", "icon_url": "" },
                    "author": {
                        "name": "alice",
                        "url": "",
                        "icon_url": "https://avatars.test/alice.png"
                    },
                    "fields": [],
                    "timestamp": ""
                }]
            })
        );
    }
}
