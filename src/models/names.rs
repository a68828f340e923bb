//! TestDox-style name prettifying
//!
//! Turns `App\Tests\UserTest::testCanBeCreated` into a `User` header and a
//! `Can be created` line.

const NAMESPACE_SEPARATORS: &[&str] = &["\\", "::", "."];

/// Strip the namespace and a `Test` suffix or prefix from a class name
pub fn prettify_test_class(name: &str) -> String {
    let mut short = name;
    for separator in NAMESPACE_SEPARATORS {
        if let Some((_, tail)) = short.rsplit_once(separator) {
            short = tail;
        }
    }

    if let Some(stripped) = short.strip_suffix("Test").filter(|s| !s.is_empty()) {
        return stripped.to_string();
    }
    if let Some(stripped) = short.strip_prefix("Test").filter(|s| !s.is_empty()) {
        return stripped.to_string();
    }

    short.to_string()
}

/// Turn a test method name into a sentence
pub fn prettify_test_method(name: &str) -> String {
    if name == "test" {
        return name.to_string();
    }

    let words = split_words(strip_test_prefix(name));
    if words.is_empty() {
        return name.to_string();
    }

    words
        .iter()
        .enumerate()
        .map(|(i, word)| {
            if is_acronym(word) {
                word.clone()
            } else if i == 0 {
                capitalize(&word.to_lowercase())
            } else {
                word.to_lowercase()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// `testFoo`, `test_foo` and `test42` lose the prefix; `testing` does not
fn strip_test_prefix(name: &str) -> &str {
    match name.strip_prefix("test") {
        Some(rest) => match rest.chars().next() {
            Some(c) if c == '_' || c.is_uppercase() || c.is_ascii_digit() => {
                rest.trim_start_matches('_')
            }
            _ => name,
        },
        None => name,
    }
}

fn split_words(s: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev: Option<char> = None;

    for c in s.chars() {
        if c == '_' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev = None;
            continue;
        }

        if let Some(p) = prev {
            let camel = c.is_uppercase() && (p.is_lowercase() || p.is_ascii_digit());
            let digits = c.is_ascii_digit() != p.is_ascii_digit();
            if (camel || digits) && !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
        }

        current.push(c);
        prev = Some(c);
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn is_acronym(word: &str) -> bool {
    word.chars().count() > 1
        && word.chars().all(|c| c.is_uppercase() || c.is_ascii_digit())
        && word.chars().any(|c| c.is_uppercase())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
