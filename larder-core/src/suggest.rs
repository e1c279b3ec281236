//! Recipe name suggestions.

use std::sync::LazyLock;

use regex::Regex;

/// Most names kept from one suggestion reply.
pub const MAX_SUGGESTIONS: usize = 5;

static NUMBERED_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s").expect("Invalid numbered line regex"));

static NUMBER_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s*").expect("Invalid number prefix regex"));

/// Take recipe names from a numbered-list reply such as `"1. Tomato Soup"`.
///
/// Only lines starting with `N. ` count; at most [`MAX_SUGGESTIONS`] are kept.
/// Fewer, including none, is a valid result.
pub fn parse_recipe_names(reply: &str) -> Vec<String> {
    reply
        .trim()
        .lines()
        .map(str::trim)
        .filter(|line| NUMBERED_LINE.is_match(line))
        .map(|line| NUMBER_PREFIX.replace(line, "").trim().to_string())
        .take(MAX_SUGGESTIONS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_list() {
        let reply = "\
Here are some ideas:
1. Tomato Basil Soup
2. Caprese Salad
3.  Bruschetta
Enjoy!";
        assert_eq!(
            parse_recipe_names(reply),
            vec!["Tomato Basil Soup", "Caprese Salad", "Bruschetta"]
        );
    }

    #[test]
    fn test_caps_at_five() {
        let reply = (1..=7)
            .map(|i| format!("{}. Dish {}", i, i))
            .collect::<Vec<_>>()
            .join("\n");
        let names = parse_recipe_names(&reply);
        assert_eq!(names.len(), 5);
        assert_eq!(names[4], "Dish 5");
    }

    #[test]
    fn test_ignores_unnumbered_and_malformed() {
        let reply = "- Pasta\n1.Pizza\n10. Risotto\n  2. Gnocchi  ";
        assert_eq!(parse_recipe_names(reply), vec!["Risotto", "Gnocchi"]);
    }

    #[test]
    fn test_empty_reply() {
        assert!(parse_recipe_names("").is_empty());
        assert!(parse_recipe_names("No ideas, sorry.").is_empty());
    }
}
