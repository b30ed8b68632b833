/// Lowercase ASCII slug: runs of anything that is not a letter or digit
/// collapse into a single hyphen, with no hyphen at either end.
pub fn slugify(text: &str) -> String {
    text.to_lowercase()
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|s| !s.is_empty())
        .collect::<Vec<&str>>()
        .join("-")
}

/// Slug for `text`, falling back to `fallback` when nothing usable is left
/// (e.g. a title written entirely in a non-Latin script).
pub fn slugify_or(text: &str, fallback: &str) -> String {
    let slug = slugify(text);
    if slug.is_empty() {
        fallback.to_string()
    } else {
        slug
    }
}

/// Slug limited to the 200 characters the slug columns hold, leaving room
/// for a numeric suffix.
pub fn base_slug(text: &str, fallback: &str) -> String {
    let slug = slugify_or(text, fallback);
    if slug.len() <= 190 {
        return slug;
    }
    slug[..190].trim_end_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_collapses_separators() {
        assert_eq!(slugify("Spartak  beat CSKA 3:1!"), "spartak-beat-cska-3-1");
        assert_eq!(slugify("  --Hello--World-- "), "hello-world");
    }

    #[test]
    fn non_latin_text_falls_back() {
        assert_eq!(slugify("Новости"), "");
        assert_eq!(slugify_or("Новости", "article"), "article");
    }

    #[test]
    fn long_titles_are_truncated() {
        let title = "word ".repeat(100);
        let slug = base_slug(&title, "article");
        assert!(slug.len() <= 190);
        assert!(!slug.ends_with('-'));
    }
}
