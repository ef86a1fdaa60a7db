pub const MAX_MESSAGE_LENGTH: usize = 1000;
