//! Shell configuration.
//!
//! Built in code only. Nothing here is read from disk or the environment.

use crate::highlight::HighlightColor;

/// Window geometry, panel sizes and render resolution for the reader shell.
#[derive(Debug, Clone, PartialEq)]
pub struct ShellConfig {
    /// Window title
    pub title: String,
    /// Initial inner size in logical points
    pub inner_size: [f32; 2],
    /// Initial window position in logical points
    pub position: [f32; 2],
    /// Smallest inner size the window may be resized to
    pub min_inner_size: [f32; 2],
    /// Page render scale; 1.0 renders at 72 dpi
    pub render_scale: f32,
    /// Default width of the library sidebar
    pub sidebar_width: f32,
    /// Default width of the highlights panel
    pub notes_panel_width: f32,
    /// Colour the highlight picker starts from
    pub highlight_default: HighlightColor,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            title: "Modern Reader".to_string(),
            inner_size: [1200.0, 800.0],
            position: [100.0, 100.0],
            min_inner_size: [640.0, 480.0],
            render_scale: 1.0,
            sidebar_width: 200.0,
            notes_panel_width: 260.0,
            highlight_default: HighlightColor::YELLOW,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reader_window() {
        let config = ShellConfig::default();
        assert_eq!(config.title, "Modern Reader");
        assert_eq!(config.inner_size, [1200.0, 800.0]);
        assert_eq!(config.position, [100.0, 100.0]);
        assert_eq!(config.render_scale, 1.0);
        assert_eq!(config.highlight_default, HighlightColor::YELLOW);
        assert_eq!(config.sidebar_width, 200.0);
    }
}
