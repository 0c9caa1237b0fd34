use heck::{ToSnakeCase, ToUpperCamelCase};

pub fn snake_case(src: &str) -> String {
    src.to_snake_case()
}

pub fn upper_camel_case(src: &str) -> String {
    src.to_upper_camel_case()
}

/// Turns an identifier into a display label.
///
/// `created_at` and `createdAt` both become `Created at`. A trailing `_id`
/// is dropped, so `owner_id` becomes `Owner`.
pub fn humanize(src: &str) -> String {
    let snake = snake_case(src);
    let base = snake
        .strip_suffix("_id")
        .filter(|base| !base.is_empty())
        .unwrap_or(snake.as_str());

    let mut words = base.split('_').filter(|word| !word.is_empty());
    let mut out = String::with_capacity(base.len());

    if let Some(first) = words.next() {
        let mut chars = first.chars();
        if let Some(c) = chars.next() {
            out.extend(c.to_uppercase());
            out.push_str(chars.as_str());
        }
    }

    for word in words {
        out.push(' ');
        out.push_str(word);
    }

    out
}
