//! Navigation entries.
//!
//! Menus are static configuration: every field borrows `'static` data so a
//! role's whole menu can live in a `const` table and be handed out by
//! reference.

use serde::Serialize;

/// One row of a role's navigation sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MenuEntry {
    /// Section label rendered as plain text.
    Header { label: &'static str },
    /// Navigable node.
    Item(MenuItem),
}

impl MenuEntry {
    pub const fn header(label: &'static str) -> Self {
        Self::Header { label }
    }

    pub const fn item(item: MenuItem) -> Self {
        Self::Item(item)
    }

    pub fn as_item(&self) -> Option<&MenuItem> {
        match self {
            Self::Item(item) => Some(item),
            Self::Header { .. } => None,
        }
    }

    pub fn is_header(&self) -> bool {
        matches!(self, Self::Header { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub icon: &'static str,
    pub title: &'static str,
    pub path: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<u32>,
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    pub children: &'static [MenuItem],
    /// Excluded from active-path matching.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub ignore: bool,
}

impl MenuItem {
    pub const fn new(icon: &'static str, title: &'static str, path: &'static str) -> Self {
        Self {
            icon,
            title,
            path,
            badge: None,
            children: &[],
            ignore: false,
        }
    }

    pub const fn with_badge(mut self, badge: u32) -> Self {
        self.badge = Some(badge);
        self
    }

    pub const fn with_children(mut self, children: &'static [MenuItem]) -> Self {
        self.children = children;
        self
    }

    pub const fn ignored(mut self) -> Self {
        self.ignore = true;
        self
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}
