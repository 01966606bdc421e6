//! Outbound webhook messages.

use crate::NameRendering;
use serde::Serialize;

/// Reply payload in the shape the chat platform expects. Validation
/// problems are `ephemeral` (visible only to the sender); successful
/// renderings are posted `in_channel`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub response_type: ResponseType,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    Ephemeral,
    InChannel,
}

impl Reply {
    pub fn ephemeral(text: impl Into<String>) -> Reply {
        Reply {
            response_type: ResponseType::Ephemeral,
            text: text.into(),
        }
    }

    pub fn in_channel(text: impl Into<String>) -> Reply {
        Reply {
            response_type: ResponseType::InChannel,
            text: text.into(),
        }
    }

    /// Format a rendering: a single populated group posts bare, several
    /// groups post as labeled lines. Empty groups are omitted.
    pub fn from_rendering(rendering: &NameRendering) -> Reply {
        let lines = rendering.labeled_lines();

        let text = if lines.len() == 1 {
            lines[0].1.to_string()
        } else {
            lines
                .iter()
                .map(|(label, value)| format!("{}: {}", label, value))
                .collect::<Vec<_>>()
                .join("\n")
        };

        Reply::in_channel(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Transliterator;

    #[test]
    fn serializes_response_type() {
        let json = serde_json::to_string(&Reply::ephemeral("hi")).unwrap();
        assert_eq!(json, r#"{"response_type":"ephemeral","text":"hi"}"#);

        let json = serde_json::to_string(&Reply::in_channel("ok")).unwrap();
        assert_eq!(json, r#"{"response_type":"in_channel","text":"ok"}"#);
    }

    #[test]
    fn single_group_posts_bare() {
        let rendering = Transliterator::new().render("محمد").unwrap();
        let reply = Reply::from_rendering(&rendering);
        assert_eq!(reply.response_type, ResponseType::InChannel);
        assert_eq!(reply.text, "Muhammad");
    }

    #[test]
    fn multiple_groups_post_labeled_lines() {
        let rendering = Transliterator::new().render("أحمد بن محمد").unwrap();
        let reply = Reply::from_rendering(&rendering);
        assert_eq!(reply.text, "First name: Ahmad\nFiliation: bin Muhammad");
    }
}
