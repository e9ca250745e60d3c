//! UI configuration options derived from config/environment.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiOptions {
    /// Use ASCII-only glyphs for checkboxes, slider tracks and markers.
    pub ascii_only: bool,
    pub high_contrast: bool,
}
