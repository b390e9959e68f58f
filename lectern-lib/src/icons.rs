//! Category icon registry.
//!
//! Categories name their icon by string. Names are resolved once into the
//! closed [`Icon`] set; unknown names fall back to [`Icon::Folder`].

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Icons a category can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Icon {
    #[default]
    Folder,
    Book,
    BookOpen,
    GraduationCap,
    Calculator,
    FlaskConical,
    Atom,
    Globe,
    Languages,
    History,
    Palette,
    Music,
    Code,
    Leaf,
    Dumbbell,
    Newspaper,
    Tag,
}

impl Icon {
    /// Every registered icon.
    pub const ALL: [Icon; 17] = [
        Icon::Folder,
        Icon::Book,
        Icon::BookOpen,
        Icon::GraduationCap,
        Icon::Calculator,
        Icon::FlaskConical,
        Icon::Atom,
        Icon::Globe,
        Icon::Languages,
        Icon::History,
        Icon::Palette,
        Icon::Music,
        Icon::Code,
        Icon::Leaf,
        Icon::Dumbbell,
        Icon::Newspaper,
        Icon::Tag,
    ];

    /// Look up an icon by name.
    ///
    /// Matching ignores case, `-`, `_` and spaces, so `"BookOpen"`,
    /// `"book-open"` and `"book_open"` are the same icon.
    pub fn from_name(name: &str) -> Icon {
        let key: String = name
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        Self::ALL
            .into_iter()
            .find(|icon| icon.name().replace('-', "") == key)
            .unwrap_or_default()
    }

    /// Canonical kebab-case name.
    pub fn name(self) -> &'static str {
        match self {
            Icon::Folder => "folder",
            Icon::Book => "book",
            Icon::BookOpen => "book-open",
            Icon::GraduationCap => "graduation-cap",
            Icon::Calculator => "calculator",
            Icon::FlaskConical => "flask-conical",
            Icon::Atom => "atom",
            Icon::Globe => "globe",
            Icon::Languages => "languages",
            Icon::History => "history",
            Icon::Palette => "palette",
            Icon::Music => "music",
            Icon::Code => "code",
            Icon::Leaf => "leaf",
            Icon::Dumbbell => "dumbbell",
            Icon::Newspaper => "newspaper",
            Icon::Tag => "tag",
        }
    }

    /// Single-cell glyph for terminal output.
    pub fn glyph(self) -> char {
        match self {
            Icon::Folder => '▸',
            Icon::Book | Icon::BookOpen => '§',
            Icon::GraduationCap => '^',
            Icon::Calculator => '±',
            Icon::FlaskConical | Icon::Atom => '*',
            Icon::Globe | Icon::Languages => '@',
            Icon::History => '~',
            Icon::Palette => '%',
            Icon::Music => '♪',
            Icon::Code => '#',
            Icon::Leaf => '&',
            Icon::Dumbbell => '=',
            Icon::Newspaper => '¶',
            Icon::Tag => '•',
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Icon {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Icon {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Icon::from_name(&name))
    }
}
