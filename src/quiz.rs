//! Conditional-branching exercises, expressed over the [`io`](crate::io)
//! collaborators so they stay testable.

use crate::io::Notify;
use crate::io::Prompt;

/// The sign of a number: 1 if positive, -1 if negative, 0 if zero.
pub fn sign_of(n: i64) -> i64 {
    if n > 0 {
        return 1;
    } else if n < 0 {
        return -1;
    } else {
        return 0;
    }
}

/// Ask for a number and notify its sign.
///
/// Input parses explicitly; anything that is not a number gets a
/// not-a-number reply rather than a coerced value.
pub fn run_sign_quiz<P, N>(prompt: &mut P, notify: &mut N)
where
    P: Prompt,
    N: Notify,
{
    let raw = prompt.prompt("Enter a value", "0");
    match raw.trim().parse::<i64>() {
        Ok(n) => notify.notify(&sign_of(n).to_string()),
        Err(_) => notify.notify("not a number"),
    }
}

/// The reply to the "official name of JavaScript" question.
pub fn official_name_reply(answer: &str) -> &'static str {
    if answer == "ECMAScript" {
        return "Right!";
    } else {
        return "You don't know? ECMAScript!";
    }
}

/// Ask the official-name question and notify the reply.
pub fn run_official_name_quiz<P, N>(prompt: &mut P, notify: &mut N)
where
    P: Prompt,
    N: Notify,
{
    let answer = prompt.prompt("What is the \"official\" name of JavaScript?", "??");
    notify.notify(official_name_reply(&answer));
}

/// The greeting for a login: the if..else ladder exercise.
pub fn greeting_for(login: &str) -> &'static str {
    return match login {
        "Employee" => "Hello",
        "Director" => "Greetings",
        "" => "No login",
        _ => "",
    };
}
