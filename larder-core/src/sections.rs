//! Splitting a detailed recipe response into its named sections.

use crate::types::RecipeSections;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Ingredients,
    PrepTime,
    CookTime,
    Equipment,
    ServingSize,
    Calories,
    Instructions,
    Tips,
}

/// Header tokens in match precedence order.
const HEADERS: &[(&str, Section)] = &[
    ("INGREDIENTS:", Section::Ingredients),
    ("PREP TIME:", Section::PrepTime),
    ("COOK TIME:", Section::CookTime),
    ("EQUIPMENT NEEDED:", Section::Equipment),
    ("SERVING SIZE:", Section::ServingSize),
    ("CALORIES:", Section::Calories),
    ("INSTRUCTIONS:", Section::Instructions),
    ("TIPS FOR SUCCESS:", Section::Tips),
];

impl RecipeSections {
    fn field_mut(&mut self, section: Section) -> &mut String {
        match section {
            Section::Ingredients => &mut self.ingredients,
            Section::PrepTime => &mut self.prep_time,
            Section::CookTime => &mut self.cook_time,
            Section::Equipment => &mut self.equipment,
            Section::ServingSize => &mut self.serving_size,
            Section::Calories => &mut self.calories,
            Section::Instructions => &mut self.instructions,
            Section::Tips => &mut self.tips,
        }
    }
}

/// Find the header a line announces, if any.
///
/// A header matches when its token appears anywhere in the uppercased line,
/// so "Use your INSTRUCTIONS: wisely" switches sections too.
fn header_for(line: &str) -> Option<Section> {
    let upper = line.to_uppercase();
    HEADERS
        .iter()
        .find(|(token, _)| upper.contains(token))
        .map(|(_, section)| *section)
}

/// Parse a free-text recipe into sections.
///
/// Never fails. Lines before the first header are dropped, blank lines are
/// skipped, `*` characters are stripped, and text after a header's colon on
/// the header line itself is discarded.
pub fn parse_recipe_sections(text: &str) -> RecipeSections {
    let mut sections = RecipeSections::default();
    let mut current: Option<Section> = None;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let line = line.replace('*', "");

        if let Some(section) = header_for(&line) {
            current = Some(section);
            continue;
        }

        let Some(section) = current else {
            continue;
        };

        let field = sections.field_mut(section);
        if !field.is_empty() {
            field.push('\n');
        }
        field.push_str(&line);
    }

    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_sections() {
        let sections = parse_recipe_sections("INGREDIENTS:\n2 apples\nPREP TIME:\n10\n");
        assert_eq!(sections.ingredients, "2 apples");
        assert_eq!(sections.prep_time, "10");
        assert_eq!(sections.cook_time, "");
        assert_eq!(sections.tips, "");
    }

    #[test]
    fn test_full_response() {
        let text = "\
Here is your recipe!

INGREDIENTS:
- 2 tomatoes
- 1 cup basil

PREP TIME:
15

COOK TIME:
20

EQUIPMENT NEEDED:
Saucepan
Knife

SERVING SIZE:
Serves 4 people

CALORIES:
320

INSTRUCTIONS:
1. Chop the tomatoes.
2. Simmer with basil.

TIPS FOR SUCCESS:
Use ripe tomatoes.
";
        let sections = parse_recipe_sections(text);
        assert_eq!(sections.ingredients, "- 2 tomatoes\n- 1 cup basil");
        assert_eq!(sections.prep_time, "15");
        assert_eq!(sections.cook_time, "20");
        assert_eq!(sections.equipment, "Saucepan\nKnife");
        assert_eq!(sections.serving_size, "Serves 4 people");
        assert_eq!(sections.calories, "320");
        assert_eq!(
            sections.instructions,
            "1. Chop the tomatoes.\n2. Simmer with basil."
        );
        assert_eq!(sections.tips, "Use ripe tomatoes.");
    }

    #[test]
    fn test_strips_emphasis_markup() {
        let text = "**INGREDIENTS:**\n* 2 **ripe** tomatoes\n**Cook Time:** 20 minutes\n25";
        let sections = parse_recipe_sections(text);
        assert_eq!(sections.ingredients, " 2 ripe tomatoes");
        // Content on the header line itself is discarded.
        assert_eq!(sections.cook_time, "25");
    }

    #[test]
    fn test_case_insensitive_headers() {
        let sections = parse_recipe_sections("ingredients:\nrice\ntips for success:\nrinse it");
        assert_eq!(sections.ingredients, "rice");
        assert_eq!(sections.tips, "rinse it");
    }

    #[test]
    fn test_header_containment_switches_mid_sentence() {
        // Headers match anywhere in a line, not only at the start.
        let text = "INGREDIENTS:\n1 egg\nUse your INSTRUCTIONS: wisely\nstep one";
        let sections = parse_recipe_sections(text);
        assert_eq!(sections.ingredients, "1 egg");
        assert_eq!(sections.instructions, "step one");
    }

    #[test]
    fn test_header_precedence() {
        // A line containing two tokens goes to the earlier one in the fixed order.
        let text = "CALORIES: and PREP TIME:\n5";
        let sections = parse_recipe_sections(text);
        assert_eq!(sections.prep_time, "5");
        assert_eq!(sections.calories, "");
    }

    #[test]
    fn test_headerless_text_is_empty() {
        let sections = parse_recipe_sections("Sorry, I can't help with that.\nTry again.");
        assert!(sections.is_empty());
        assert!(parse_recipe_sections("").is_empty());
    }

    #[test]
    fn test_repeated_header_keeps_appending() {
        let text = "TIPS FOR SUCCESS:\nfirst\nTIPS FOR SUCCESS:\nsecond";
        assert_eq!(parse_recipe_sections(text).tips, "first\nsecond");
    }

    #[test]
    fn test_crlf_line_endings() {
        let sections = parse_recipe_sections("INGREDIENTS:\r\n1 onion\r\n\r\nCALORIES:\r\n90\r\n");
        assert_eq!(sections.ingredients, "1 onion");
        assert_eq!(sections.calories, "90");
    }
}
