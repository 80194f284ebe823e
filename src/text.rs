//! Small text utilities.

/// Turn a dash-separated string into camelCase: the first word is kept as
/// is, and every later word gets its first character uppercased.
///
/// ```
/// use etude::text::camelize;
///
/// assert_eq!(camelize("background-color"), "backgroundColor");
/// assert_eq!(camelize("list-style-image"), "listStyleImage");
/// assert_eq!(camelize("-webkit-transition"), "WebkitTransition");
/// ```
pub fn camelize(input: &str) -> String {
    return input
        .split('-')
        .enumerate()
        .map(|(index, word)| {
            if index == 0 {
                return word.to_string();
            }
            return capitalize(word);
        })
        .collect();
}

/// Uppercase the first character of a word.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    return match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };
}
