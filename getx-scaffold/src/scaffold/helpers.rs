//! Naming helpers for page generation
//!
//! Page names arrive as `snake_case` or `kebab-case` tokens. These helpers
//! derive the class prefix and the display title used by every template.
//!
//! Only `_` and `-` separate words. Case boundaries inside a segment are not
//! detected, so `minePage` is a single word and becomes `Minepage`.

/// Template helpers for page name conversion
pub struct TemplateHelpers;

impl TemplateHelpers {
    /// Convert a page name to a `PascalCase` class prefix
    ///
    /// Each segment keeps its first character upper-cased and the rest
    /// lower-cased.
    ///
    /// # Examples
    ///
    /// ```
    /// # use getx_scaffold::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::to_pascal_case("user_profile"), "UserProfile");
    /// assert_eq!(TemplateHelpers::to_pascal_case("my-settings-page"), "MySettingsPage");
    /// assert_eq!(TemplateHelpers::to_pascal_case("minePage"), "Minepage");
    /// ```
    #[must_use]
    pub fn to_pascal_case(input: &str) -> String {
        input
            .split(is_separator)
            .map(|segment| capitalize(segment, true))
            .collect()
    }

    /// Convert a page name to a human-readable title
    ///
    /// Segments are joined with a single space. Only the first character of
    /// each segment changes.
    ///
    /// # Examples
    ///
    /// ```
    /// # use getx_scaffold::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::to_title_case("user_profile"), "User Profile");
    /// assert_eq!(TemplateHelpers::to_title_case("settings-page"), "Settings Page");
    /// assert_eq!(TemplateHelpers::to_title_case("minePage"), "MinePage");
    /// ```
    #[must_use]
    pub fn to_title_case(input: &str) -> String {
        input
            .split(is_separator)
            .map(|segment| capitalize(segment, false))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

const fn is_separator(c: char) -> bool {
    matches!(c, '_' | '-')
}

fn capitalize(segment: &str, lower_rest: bool) -> String {
    let mut chars = segment.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut word: String = first.to_uppercase().collect();
    if lower_rest {
        word.push_str(&chars.as_str().to_lowercase());
    } else {
        word.push_str(chars.as_str());
    }
    word
}
