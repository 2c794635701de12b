//! Message payload types for the Teams MessageCard wire format.
//!
//! Defines the JSON structure with serde. Fields are not validated;
//! the payload is serialized as-is and correctness is the caller's
//! responsibility.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A notification message posted to a Teams incoming webhook.
///
/// Optional fields are omitted from the JSON when empty, matching what
/// the webhook endpoint expects. Only `title` is always emitted.
///
/// # Example
///
/// ```
/// use teams_webhook::{Message, Section, Fact, ThemeColor};
///
/// let msg = Message::new("Deploy finished")
///     .with_text("Build **1234** rolled out")
///     .with_theme(ThemeColor::SUCCESS)
///     .with_section(
///         Section::new()
///             .with_activity_title("production")
///             .with_fact(Fact::new("duration", "42s")),
///     );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Message title, always present in the payload
    pub title: String,

    /// Short summary shown in notification previews
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub summary: String,

    /// Body content; Teams renders markdown here
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,

    /// Accent color rendered by the Teams client
    #[serde(
        rename = "themeColor",
        default,
        skip_serializing_if = "ThemeColor::is_default"
    )]
    pub theme: ThemeColor,

    /// Ordered content sections
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<Section>,
}

impl Message {
    /// Creates a message with the given title and no other content.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Sets the summary line.
    #[must_use]
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    /// Sets the body text.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Sets the theme color.
    #[must_use]
    pub fn with_theme(mut self, theme: ThemeColor) -> Self {
        self.theme = theme;
        self
    }

    /// Appends a section.
    #[must_use]
    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }
}

/// A logical grouping of content within a [`Message`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Title displayed in the section header
    #[serde(
        rename = "activityTitle",
        default,
        skip_serializing_if = "String::is_empty"
    )]
    pub activity_title: String,

    /// Optional subtitle below the section header
    #[serde(
        rename = "activitySubtitle",
        default,
        skip_serializing_if = "String::is_empty"
    )]
    pub activity_subtitle: String,

    /// Key-value pairs displayed in the section
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub facts: Vec<Fact>,

    /// Whether the section content is rendered as markdown.
    ///
    /// Always emitted, even when `false`.
    #[serde(default)]
    pub markdown: bool,
}

impl Section {
    /// Creates an empty section with markdown disabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the activity title.
    #[must_use]
    pub fn with_activity_title(mut self, title: impl Into<String>) -> Self {
        self.activity_title = title.into();
        self
    }

    /// Sets the activity subtitle.
    #[must_use]
    pub fn with_activity_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.activity_subtitle = subtitle.into();
        self
    }

    /// Appends a fact.
    ///
    /// Facts are an ordered sequence, not a map: duplicate names are
    /// kept and serialized in insertion order.
    #[must_use]
    pub fn with_fact(mut self, fact: Fact) -> Self {
        self.facts.push(fact);
        self
    }

    /// Enables or disables markdown rendering for this section.
    #[must_use]
    pub const fn with_markdown(mut self, markdown: bool) -> Self {
        self.markdown = markdown;
        self
    }
}

/// A labeled key-value display pair within a [`Section`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fact {
    /// Display label
    pub name: String,
    /// Display value
    pub value: String,
}

impl Fact {
    /// Creates a fact from a name and value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Accent color attached to a [`Message`].
///
/// Serialized as a plain string. The empty string means "no theme" and
/// is omitted from the payload. Construct via a named constant or
/// [`ThemeColor::from_hex`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeColor(Cow<'static, str>);

impl ThemeColor {
    /// No theme; the `themeColor` field is omitted from the payload.
    pub const DEFAULT: Self = Self(Cow::Borrowed(""));

    /// Green accent for successful operations.
    pub const SUCCESS: Self = Self(Cow::Borrowed("#19e013"));

    /// Yellow accent for caution or alerts.
    pub const WARNING: Self = Self(Cow::Borrowed("#f3b911"));

    /// Red accent for errors or critical issues.
    pub const ERROR: Self = Self(Cow::Borrowed("#f40909"));

    /// Blue accent for general information.
    pub const INFO: Self = Self(Cow::Borrowed("#1951fa"));

    /// Builds a theme color from a hex color code string.
    ///
    /// Whitespace-only input yields [`ThemeColor::DEFAULT`]. A missing
    /// `#` prefix is added. Hex digit count and characters are not
    /// validated; malformed values pass through unchanged.
    #[must_use]
    pub fn from_hex(hex: &str) -> Self {
        if hex.trim().is_empty() {
            return Self::DEFAULT;
        }
        if hex.starts_with('#') {
            Self(Cow::Owned(hex.to_owned()))
        } else {
            Self(Cow::Owned(format!("#{hex}")))
        }
    }

    /// Returns the color as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if this is the empty (no theme) color.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for ThemeColor {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for ThemeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
