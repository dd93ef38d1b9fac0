use crate::core::message::{Message, Role};

use super::markdown::render_markdown;

/// Sanitized, display-ready HTML for one message.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedMessage {
    pub role: Role,
    pub html: String,
}

/// Renders the whole message list. Called again whenever the list changes,
/// so newly appended replies get highlighted without tracking which message
/// is new; the highlight cache absorbs the re-run cost. Output is
/// presentation-only and never feeds back into the conversation log or the
/// gateway.
pub struct TranscriptRenderer {
    syntax_enabled: bool,
}

impl TranscriptRenderer {
    pub fn new() -> Self {
        Self {
            syntax_enabled: true,
        }
    }

    pub fn with_syntax(mut self, enabled: bool) -> Self {
        self.syntax_enabled = enabled;
        self
    }

    pub fn render_all(&self, messages: &[Message]) -> Vec<RenderedMessage> {
        messages
            .iter()
            .map(|msg| RenderedMessage {
                role: msg.role,
                html: render_markdown(&msg.content, self.syntax_enabled),
            })
            .collect()
    }
}

impl Default for TranscriptRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_every_message_in_order() {
        let renderer = TranscriptRenderer::new();
        let log = vec![
            Message::user("hello"),
            Message::assistant("```js\nconsole.log(1)\n```"),
        ];
        let rendered = renderer.render_all(&log);
        assert_eq!(rendered.len(), 2);
        assert_eq!(rendered[0].role, Role::User);
        assert!(rendered[0].html.contains("hello"));
        assert!(rendered[1].html.contains("language-js"));
    }

    #[test]
    fn rerendering_is_idempotent() {
        let renderer = TranscriptRenderer::new();
        let log = vec![Message::assistant("```rust\nfn main() {}\n```")];
        assert_eq!(renderer.render_all(&log), renderer.render_all(&log));
    }

    #[test]
    fn appending_a_message_extends_the_rendered_list() {
        let renderer = TranscriptRenderer::new();
        let mut log = vec![Message::user("hi")];
        let before = renderer.render_all(&log);
        log.push(Message::assistant("reply"));
        let after = renderer.render_all(&log);
        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(after[0], before[0]);
    }
}
