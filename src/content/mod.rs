//! Content hosted inside windows.
//!
//! The shell never looks inside content. It only needs a title when the
//! window opens and the mount/unmount hooks around the window's lifetime.
//! Launchable kinds form a closed set; each kind maps to a constructor via
//! [`ContentFactory`].

mod context;
mod placeholder;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use ratatui::Frame;
use ratatui::layout::Rect;

pub use context::ContentContext;
pub use placeholder::PlaceholderContent;

use crate::error::ShellError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContentKind {
    Terminal,
    Editor,
    Browser,
    Files,
}

impl ContentKind {
    pub const ALL: [ContentKind; 4] = [
        ContentKind::Terminal,
        ContentKind::Browser,
        ContentKind::Editor,
        ContentKind::Files,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ContentKind::Terminal => "Terminal",
            ContentKind::Editor => "Editor",
            ContentKind::Browser => "Browser",
            ContentKind::Files => "Files",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ContentKind {
    type Err = ShellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "terminal" => Ok(ContentKind::Terminal),
            "editor" => Ok(ContentKind::Editor),
            "browser" => Ok(ContentKind::Browser),
            "files" => Ok(ContentKind::Files),
            _ => Err(ShellError::UnknownContentKind(s.to_string())),
        }
    }
}

/// Capability interface for anything a window can host.
pub trait Content: fmt::Debug {
    fn title(&self) -> &str;

    fn kind(&self) -> Option<ContentKind> {
        None
    }

    fn mount(&mut self, _ctx: &ContentContext) {}

    fn unmount(&mut self) {}

    fn render(&mut self, _frame: &mut Frame<'_>, _area: Rect, _ctx: &ContentContext) {}
}

pub type ContentConstructor = fn() -> Box<dyn Content>;

/// Maps each launchable kind to the constructor that builds its content.
#[derive(Debug, Clone)]
pub struct ContentFactory {
    constructors: BTreeMap<ContentKind, ContentConstructor>,
}

impl Default for ContentFactory {
    fn default() -> Self {
        let mut factory = Self::empty();
        factory.register(ContentKind::Terminal, || {
            Box::new(PlaceholderContent::new(ContentKind::Terminal))
        });
        factory.register(ContentKind::Editor, || {
            Box::new(PlaceholderContent::new(ContentKind::Editor))
        });
        factory.register(ContentKind::Browser, || {
            Box::new(PlaceholderContent::new(ContentKind::Browser))
        });
        factory.register(ContentKind::Files, || {
            Box::new(PlaceholderContent::new(ContentKind::Files))
        });
        factory
    }
}

impl ContentFactory {
    pub fn empty() -> Self {
        Self {
            constructors: BTreeMap::new(),
        }
    }

    /// Install or replace the constructor for `kind`.
    pub fn register(&mut self, kind: ContentKind, constructor: ContentConstructor) {
        self.constructors.insert(kind, constructor);
    }

    pub fn create(&self, kind: ContentKind) -> Result<Box<dyn Content>, ShellError> {
        self.constructors
            .get(&kind)
            .map(|constructor| constructor())
            .ok_or_else(|| ShellError::UnknownContentKind(kind.to_string()))
    }
}
