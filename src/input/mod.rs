mod commands;
mod keyboard;

pub use commands::{Command, KEY_HELP};
pub use keyboard::{handle_key_input, match_key};
