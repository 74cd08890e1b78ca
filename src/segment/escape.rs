use std::borrow::Cow;

const REGEX_META: &[char] = &[
    '|', '\\', '{', '}', '(', ')', '[', ']', '^', '$', '+', '*', '?', '.', '-',
];

pub fn escape_literal(input: &str) -> Cow<'_, str> {
    if !input.contains(REGEX_META) {
        return Cow::Borrowed(input);
    }

    let mut escaped = String::with_capacity(input.len() + 4);
    for ch in input.chars() {
        if REGEX_META.contains(&ch) {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    Cow::Owned(escaped)
}
