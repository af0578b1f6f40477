//! Ephemeral interaction state: lightbox and accordion.
//!
//! None of this survives a reload; it exists only between user inputs.

/// At most one media item open at a time; opening another replaces it.
#[derive(Debug, Clone, Default)]
pub struct Lightbox {
    current: Option<String>,
}

impl Lightbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the given item, replacing whatever was open.
    pub fn open(&mut self, item_id: impl Into<String>) {
        self.current = Some(item_id.into());
    }

    pub fn close(&mut self) {
        self.current = None;
    }

    /// The id of the currently open item, if any.
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }
}

/// Exclusive-open accordion: selecting the open section closes it,
/// selecting another closes the prior one and opens the new one.
#[derive(Debug, Clone, Default)]
pub struct Accordion {
    open: Option<String>,
}

impl Accordion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, section_id: &str) {
        if self.open.as_deref() == Some(section_id) {
            self.open = None;
        } else {
            self.open = Some(section_id.to_string());
        }
    }

    /// The id of the expanded section, if any.
    pub fn open_section(&self) -> Option<&str> {
        self.open.as_deref()
    }
}
