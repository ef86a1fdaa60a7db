/// How many of the latest messages to keep per listing conversation.
pub const MESSAGES_PER_CONVERSATION: usize = 100;
