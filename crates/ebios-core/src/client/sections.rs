//! Section navigation. Exactly one section is visible at a time.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Chat,
    Features,
    About,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Chat, Section::Features, Section::About];
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Chat => write!(f, "chat"),
            Section::Features => write!(f, "features"),
            Section::About => write!(f, "about"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown section: '{0}'")]
pub struct UnknownSection(pub String);

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "chat" => Ok(Section::Chat),
            "features" => Ok(Section::Features),
            "about" => Ok(Section::About),
            other => Err(UnknownSection(other.to_string())),
        }
    }
}

/// Holds the single visible section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSwitcher {
    current: Section,
}

impl SectionSwitcher {
    pub fn new() -> Self {
        Self {
            current: Section::Chat,
        }
    }

    pub fn current(&self) -> Section {
        self.current
    }

    pub fn is_visible(&self, section: Section) -> bool {
        self.current == section
    }

    pub fn switch(&mut self, section: Section) {
        self.current = section;
    }
}

impl Default for SectionSwitcher {
    fn default() -> Self {
        Self::new()
    }
}
