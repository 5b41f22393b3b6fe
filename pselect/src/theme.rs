//! Colors and text attributes used when painting the control.

/// A 24-bit terminal color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert an OKLCH color to terminal RGB.
    pub fn oklch(l: f32, c: f32, h: f32) -> Self {
        use palette::{IntoColor, Oklch, Srgb};

        let srgb: Srgb = Oklch::new(l, c, h).into_color();
        let (r, g, b) = srgb.into_format::<u8>().into_components();
        Self::new(r, g, b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub bold: bool,
    pub dim: bool,
}

impl TextStyle {
    pub const fn new() -> Self {
        Self {
            bold: false,
            dim: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }
}

/// Palette for the trigger field and the popover.
///
/// The defaults mirror a light Material look: white surfaces, grey borders
/// and a pale blue for selected or hovered rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Page background behind the control.
    pub background: Rgb,
    /// Field and popover fill.
    pub surface: Rgb,
    pub text: Rgb,
    /// Placeholder text, icons and the unshrunk field label.
    pub muted: Rgb,
    pub border: Rgb,
    /// Border of the trigger while it has focus or its popover is open.
    pub accent: Rgb,
    /// Fill for selected and hovered rows.
    pub highlight: Rgb,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Rgb::new(250, 250, 250),
            surface: Rgb::new(255, 255, 255),
            text: Rgb::new(33, 33, 33),
            muted: Rgb::new(158, 158, 158),
            border: Rgb::new(189, 189, 189),
            accent: Rgb::oklch(0.55, 0.17, 255.0),
            highlight: Rgb::oklch(0.90, 0.05, 245.0),
        }
    }
}
