//! Colors and cosmetic styling for the picker overlay.
//!
//! `PickerStyle` is a plain bag of colors that rendering reads from. The
//! setters on `ModalPicker` write into it; none of them carry behavior.

use ratatui::style::Color;

// Default palette
pub const TINT_BLUE: Color = Color::Rgb(124, 175, 194); // #7CAFC2
pub const TEXT_WHITE: Color = Color::Rgb(255, 255, 255); // #FFFFFF
pub const TEXT_DIM: Color = Color::Rgb(136, 136, 136); // #888888
pub const SURFACE_DARK: Color = Color::Rgb(24, 24, 28); // #18181C
pub const TOOLBAR_DARK: Color = Color::Rgb(38, 38, 44); // #26262C
pub const SURFACE_LIGHT: Color = Color::Rgb(236, 236, 240); // #ECECF0
pub const TOOLBAR_LIGHT: Color = Color::Rgb(220, 220, 226); // #DCDCE2
pub const TEXT_DARK: Color = Color::Rgb(28, 28, 32); // #1C1C20

/// Cosmetic parameters for a picker overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickerStyle {
    /// Accent color for the border, cursor and focused toolbar action
    pub tint: Color,

    /// Background of the picker surface
    pub picker_bg: Color,

    /// Text color of the picker rows / date fields
    pub picker_fg: Color,

    /// Background of the toolbar row
    pub toolbar_bg: Color,

    /// De-emphasized text (unselected rows, help line)
    pub dim: Color,
}

impl PickerStyle {
    /// Dark preset (default).
    pub fn dark() -> Self {
        Self {
            tint: TINT_BLUE,
            picker_bg: SURFACE_DARK,
            picker_fg: TEXT_WHITE,
            toolbar_bg: TOOLBAR_DARK,
            dim: TEXT_DIM,
        }
    }

    /// Light preset.
    pub fn light() -> Self {
        Self {
            tint: TINT_BLUE,
            picker_bg: SURFACE_LIGHT,
            picker_fg: TEXT_DARK,
            toolbar_bg: TOOLBAR_LIGHT,
            dim: TEXT_DIM,
        }
    }
}

impl Default for PickerStyle {
    fn default() -> Self {
        Self::dark()
    }
}
