use super::*;

mod interactive;
mod skip_prompt;
