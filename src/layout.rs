//! Document shell shared by every page: metadata and the global theme.
//!
//! The markup itself lives in `templates/layout.html`; page templates
//! extend it and expose a `meta` field of type [`PageMeta`].

pub const SITE_TITLE: &str = "FOUR WEEKS";
pub const SITE_DESCRIPTION: &str = "Independent media, commerce, and intelligence platform";

/// Inline style applied to `<body>`.
pub const BODY_STYLE: &str = "background: black; color: white";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMeta {
    pub title: &'static str,
    pub description: &'static str,
    pub body_style: &'static str,
}

impl Default for PageMeta {
    fn default() -> Self {
        Self {
            title: SITE_TITLE,
            description: SITE_DESCRIPTION,
            body_style: BODY_STYLE,
        }
    }
}
