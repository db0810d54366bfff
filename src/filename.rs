const PLACEHOLDER: &str = "file";

/// Splits `name` at its last dot, keeping the dot with the extension.
///
/// A name without a dot has an empty extension. A leading-dot name such as
/// `.bashrc` is all extension.
pub fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(index) => name.split_at(index),
        None => (name, ""),
    }
}

pub fn extension(name: &str) -> String {
    split_extension(name).1.to_lowercase()
}

pub fn sanitize(name: &str) -> String {
    let (base, ext) = split_extension(name);

    let sanitized: String = transliterate(&base.to_lowercase())
        .chars()
        .filter_map(|c| match c {
            ' ' => Some('-'),
            'a'..='z' | '0'..='9' | '-' => Some(c),
            _ => None,
        })
        .collect();

    let sanitized = if sanitized.is_empty() {
        PLACEHOLDER.to_owned()
    } else {
        sanitized
    };

    format!("{}{}", sanitized, ext.to_lowercase())
}

fn transliterate(input: &str) -> String {
    let mut output = String::with_capacity(input.len());

    for c in input.chars() {
        if c.is_ascii() {
            output.push(c);
        } else if let Some(replacement) = ascii_equivalent(c) {
            output.push_str(replacement);
        }
    }

    output
}

fn ascii_equivalent(c: char) -> Option<&'static str> {
    let replacement = match c {
        'ä' => "ae",
        'ö' => "o",
        'ü' => "ue",
        'ß' => "ss",
        'á' | 'à' | 'â' | 'ã' | 'å' | 'ā' => "a",
        'é' | 'è' | 'ê' | 'ë' => "e",
        'ī' | 'í' | 'ì' | 'î' => "i",
        'ñ' => "n",
        'ó' | 'ò' | 'ô' | 'õ' | 'ø' => "o",
        'ū' | 'ú' | 'ù' | 'û' => "u",
        'ç' => "c",
        'ý' | 'ÿ' => "y",
        _ => return None,
    };

    Some(replacement)
}
