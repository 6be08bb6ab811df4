//! Word-shape helpers deriving variable, route and table names from a
//! PascalCase model name.

/// Lowercase the first character: `BlogPost` -> `blogPost`.
pub fn lower_camel(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) => c.to_lowercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Pluralize using the regular English rules: consonant+`y` -> `ies`,
/// sibilant endings take `es`, everything else takes `s`.
pub fn pluralize(name: &str) -> String {
    if name.is_empty() {
        return String::new();
    }

    let lower = name.to_lowercase();
    if lower.ends_with('y') {
        let stem: Vec<char> = lower.chars().collect();
        let before = stem.get(stem.len().wrapping_sub(2)).copied();
        if before.is_some_and(|c| c.is_ascii_alphabetic() && !"aeiou".contains(c)) {
            let mut out = name.to_string();
            out.pop();
            out.push_str("ies");
            return out;
        }
    }

    if lower.ends_with('s')
        || lower.ends_with('x')
        || lower.ends_with('z')
        || lower.ends_with("ch")
        || lower.ends_with("sh")
    {
        return format!("{name}es");
    }

    format!("{name}s")
}

/// `BlogPost` -> `blog_post`
pub fn snake(name: &str) -> String {
    delimited(name, '_')
}

/// `BlogPost` -> `blog-post`
pub fn kebab(name: &str) -> String {
    delimited(name, '-')
}

/// Insert a space before every interior capital: `BlogPost` -> `Blog Post`.
pub fn title_spaced(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for (i, c) in name.chars().enumerate() {
        if c.is_uppercase() && i > 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

/// Conventional table name: snake_case plural (`BlogPost` -> `blog_posts`).
pub fn table_name(model: &str) -> String {
    snake(&pluralize(model))
}

/// Conventional API route segment: kebab-case plural (`BlogPost` -> `blog-posts`).
pub fn route_segment(model: &str) -> String {
    kebab(&pluralize(model))
}

fn delimited(name: &str, sep: char) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if c.is_uppercase() && i > 0 {
            out.push(sep);
        }
        out.extend(c.to_lowercase());
    }
    out
}
