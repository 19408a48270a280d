//! Chat messages exchanged with the host.

/// A chat message as seen by the title module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub channel: String,
    pub body: String,
}

impl Message {
    pub fn new(channel: impl Into<String>, body: impl Into<String>) -> Self {
        Self { channel: channel.into(), body: body.into() }
    }

    /// A reply to this message carrying `body`.
    pub fn with_body(&self, body: impl Into<String>) -> Self {
        Self { channel: self.channel.clone(), body: body.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_keeps_channel() {
        let inbound = Message::new("#rust", "look https://example.com");
        let reply = inbound.with_body("Title: Example");
        assert_eq!(reply.channel, "#rust");
        assert_eq!(reply.body, "Title: Example");
    }
}
