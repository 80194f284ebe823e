//! Abstract collaborators for user-facing input and output.
//!
//! The rest of the crate never talks to a concrete display or input
//! facility; it goes through these traits, so tests can capture output
//! and script answers.

use std::collections::VecDeque;

/// An output collaborator: surfaces a message to the user.
pub trait Notify {
    fn notify(&mut self, message: &str);
}

/// An input collaborator: asks the user a question and returns their raw
/// text answer, or the default if they give none.
pub trait Prompt {
    fn prompt(&mut self, question: &str, default: &str) -> String;
}

/// A `Notify` that captures messages for inspection in tests.
#[derive(Debug, Default)]
pub struct BufferNotify {
    pub messages: Vec<String>,
}

impl BufferNotify {
    pub fn new() -> BufferNotify {
        return BufferNotify::default();
    }
}

impl Notify for BufferNotify {
    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

/// A `Prompt` that replays canned answers, falling back to the default
/// once they run out.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
}

impl ScriptedPrompt {
    pub fn new<I>(answers: I) -> ScriptedPrompt
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        return ScriptedPrompt {
            answers: answers.into_iter().map(Into::into).collect(),
        };
    }
}

impl Prompt for ScriptedPrompt {
    fn prompt(&mut self, _question: &str, default: &str) -> String {
        return self
            .answers
            .pop_front()
            .unwrap_or_else(|| default.to_string());
    }
}

/// A `Notify` that prints to stdout.
#[derive(Debug, Default)]
pub struct ConsoleNotify;

impl Notify for ConsoleNotify {
    fn notify(&mut self, message: &str) {
        println!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_notify_captures_messages_in_order() {
        let mut notify = BufferNotify::new();
        notify.notify("first");
        notify.notify("second");
        assert_eq!(notify.messages, ["first", "second"]);
    }

    #[test]
    fn scripted_prompt_replays_answers() {
        let mut prompt = ScriptedPrompt::new(["yes", "no"]);
        assert_eq!(prompt.prompt("q1", "d"), "yes");
        assert_eq!(prompt.prompt("q2", "d"), "no");
    }

    #[test]
    fn scripted_prompt_falls_back_to_the_default() {
        let mut prompt = ScriptedPrompt::new(Vec::<String>::new());
        assert_eq!(prompt.prompt("anything?", "42"), "42");
    }
}
