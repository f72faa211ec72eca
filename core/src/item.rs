use alloc::string::String;
use core::fmt;
use serde::{Deserialize, Serialize};

/// Stable identity of an item, assigned by the catalog.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Skills,
    Experience,
    Education,
    Hobbies,
    Facts,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Self::Skills,
        Self::Experience,
        Self::Education,
        Self::Hobbies,
        Self::Facts,
    ];

    /// Lowercase key, matching the catalog spelling.
    pub const fn key(self) -> &'static str {
        use Category::*;
        match self {
            Skills => "skills",
            Experience => "experience",
            Education => "education",
            Hobbies => "hobbies",
            Facts => "facts",
        }
    }

    pub const fn label(self) -> &'static str {
        use Category::*;
        match self {
            Skills => "Skills",
            Experience => "Experience",
            Education => "Education",
            Hobbies => "Hobbies",
            Facts => "Facts",
        }
    }
}

/// A single discoverable fact.
///
/// Everything except the discovered flag is fixed at creation. The flag only
/// ever goes from `false` to `true`, and only through [`crate::GridModel`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    category: Category,
    title: String,
    body: String,
    #[serde(skip_deserializing)]
    discovered: bool,
}

impl Item {
    pub fn new(
        id: ItemId,
        category: Category,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id,
            category,
            title: title.into(),
            body: body.into(),
            discovered: false,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn is_discovered(&self) -> bool {
        self.discovered
    }

    pub(crate) fn mark_discovered(&mut self) {
        self.discovered = true;
    }
}
