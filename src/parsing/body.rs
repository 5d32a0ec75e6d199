//! Sender/notice classification of an entry body.
//!
//! After the header, an authored entry reads `Sender: message`, where the
//! message may continue over several lines. Anything else (e.g. "Bob left
//! the group") is a chat-system notice.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::record::Sender;

/// A run of non-colon characters, a colon, one whitespace, then the rest of
/// the chunk including any newlines.
const SENDER_PATTERN: &str = r"(?s)^(?P<sender>[^:]+):\s(?P<message>.*)";

/// Same as [`SENDER_PATTERN`], but the sender can't contain a line break.
const SINGLE_LINE_SENDER_PATTERN: &str = r"(?s)^(?P<sender>[^:\r\n]+):\s(?P<message>.*)";

static SENDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SENDER_PATTERN).expect("sender pattern compiles"));

static SINGLE_LINE_SENDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(SINGLE_LINE_SENDER_PATTERN).expect("single-line sender pattern compiles")
});

/// How far a sender name may run before its colon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SenderRule {
    /// Any run of non-colon characters, line breaks included.
    #[default]
    AnyChars,
    /// The sender must sit on the header line. A notice whose later lines
    /// contain `: ` stays a notice.
    SingleLine,
}

impl SenderRule {
    fn regex(self) -> &'static Regex {
        match self {
            SenderRule::AnyChars => &SENDER_RE,
            SenderRule::SingleLine => &SINGLE_LINE_SENDER_RE,
        }
    }
}

/// A classified entry body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classified<'a> {
    pub sender: Sender,
    /// Message text, trimmed. May contain newlines.
    pub message: &'a str,
}

/// Splits a raw entry body into sender and message with the default
/// [`SenderRule`].
///
/// The body is trimmed first; sender and message are trimmed again after
/// the split. Bodies that don't have the `Sender: message` shape are
/// attributed to [`Sender::System`] with the whole trimmed body as the
/// message.
///
/// # Example
///
/// ```rust
/// use chatsift::parsing::classify_body;
/// use chatsift::Sender;
///
/// let c = classify_body("Alice: Hello\nstill me\n");
/// assert_eq!(c.sender, Sender::participant("Alice"));
/// assert_eq!(c.message, "Hello\nstill me");
///
/// let c = classify_body("Bob left the group\n");
/// assert_eq!(c.sender, Sender::System);
/// assert_eq!(c.message, "Bob left the group");
/// ```
pub fn classify_body(body: &str) -> Classified<'_> {
    classify_body_with(body, SenderRule::default())
}

/// Like [`classify_body`], with an explicit [`SenderRule`].
pub fn classify_body_with(body: &str, rule: SenderRule) -> Classified<'_> {
    let content = body.trim();

    match rule.regex().captures(content) {
        Some(caps) => Classified {
            sender: Sender::participant(caps.name("sender").map_or("", |m| m.as_str().trim())),
            message: caps.name("message").map_or("", |m| m.as_str().trim()),
        },
        None => Classified {
            sender: Sender::System,
            message: content,
        },
    }
}
