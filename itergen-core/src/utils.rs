//! Shared utility functions for deriving names from type spellings.

/// Uppercase the first letter of every word (e.g., "os" -> "Os", "int64" -> "Int64").
///
/// A word starts at the beginning of the input or after any character that is
/// not a letter, digit or underscore, so `"my_type"` stays a single word
/// (`"My_type"`) while `"map[string]int"` becomes `"Map[String]Int"`.
pub fn title_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut prev: Option<char> = None;
    for c in s.chars() {
        let starts_word = prev.is_none_or(is_separator);
        if starts_word {
            result.extend(c.to_uppercase());
        } else {
            result.push(c);
        }
        prev = Some(c);
    }
    result
}

fn is_separator(c: char) -> bool {
    !(c.is_alphanumeric() || c == '_')
}

/// Strip everything outside `[A-Za-z0-9]` and lowercase the rest (e.g., "*os.File" -> "osfile")
pub fn fileify(s: &str) -> String {
    s.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Check whether `s` can be used as an identifier in generated code.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {
            chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
