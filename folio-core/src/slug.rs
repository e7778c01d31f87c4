const FALLBACK_SLUG: &str = "project";

/// Lowercase ASCII alphanumerics are kept; every run of anything else
/// becomes a single hyphen. Leading and trailing hyphens are stripped.
pub fn slugify(input: &str) -> String {
    let mut slug = String::new();
    let mut last_was_dash = false;

    for ch in input.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            last_was_dash = false;
        } else if !slug.is_empty() && !last_was_dash {
            slug.push('-');
            last_was_dash = true;
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }

    slug
}

/// Build a project id from a title and a millisecond timestamp suffix.
///
/// The suffix is bumped until `taken` reports the id as free, so two
/// projects added within the same millisecond still get distinct ids.
pub fn project_id(title: &str, millis: i64, taken: impl Fn(&str) -> bool) -> String {
    let base = slugify(title);
    let base = if base.is_empty() { FALLBACK_SLUG } else { base.as_str() };

    let mut suffix = millis;
    loop {
        let candidate = format!("{base}-{suffix}");
        if !taken(&candidate) {
            return candidate;
        }
        suffix += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn slugify_basic_cases() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("  E-Commerce   Platform!! "), "e-commerce-platform");
        assert_eq!(slugify("foo/bar\\baz"), "foo-bar-baz");
        assert_eq!(slugify("café ☕ bar"), "caf-bar");
    }

    #[test]
    fn slugify_strips_edges() {
        assert_eq!(slugify("--Shop--"), "shop");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn project_id_appends_suffix() {
        assert_eq!(project_id("My Shop", 1700, |_| false), "my-shop-1700");
        assert_eq!(project_id("???", 5, |_| false), "project-5");
    }

    #[test]
    fn project_id_skips_taken_ids() {
        let taken: HashSet<&str> = ["shop-10", "shop-11"].into_iter().collect();
        assert_eq!(project_id("Shop", 10, |id| taken.contains(id)), "shop-12");
    }
}
