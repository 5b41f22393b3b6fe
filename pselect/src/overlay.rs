//! Floating panels anchored to a trigger.
//!
//! A panel is open exactly while an anchor rectangle is recorded. Opening
//! records the trigger's screen rectangle; closing (dismissal or a commit)
//! clears it.

use crate::rect::Rect;

/// Placement preference relative to the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayPosition {
    /// Below the anchor, left edges aligned. Falls back to above when the
    /// panel does not fit below.
    #[default]
    Below,
    /// Above the anchor. Falls back to below when it does not fit above.
    Above,
}

/// Recorded anchor for an overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Anchor {
    rect: Option<Rect>,
}

impl Anchor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, trigger: Rect) {
        self.rect = Some(trigger);
    }

    /// Clear the anchor. Returns true if the overlay was open.
    pub fn close(&mut self) -> bool {
        self.rect.take().is_some()
    }

    pub fn is_open(&self) -> bool {
        self.rect.is_some()
    }
}

/// Compute where a panel of `size` (width, height) goes on `screen`.
///
/// The panel is clamped to the screen and shifted left if it would run off
/// the right edge.
pub fn place(screen: Rect, anchor: Rect, size: (u16, u16), position: OverlayPosition) -> Rect {
    let width = size.0.min(screen.width);
    let height = size.1.min(screen.height);
    let x = constrain_x(anchor.x, width, screen);

    let below = anchor.bottom();
    let fits_below = below.saturating_add(height) <= screen.bottom();
    let fits_above = anchor.y >= screen.y.saturating_add(height);

    let y = match position {
        OverlayPosition::Below if fits_below || !fits_above => {
            below.min(screen.bottom().saturating_sub(height))
        }
        OverlayPosition::Below => anchor.y - height,
        OverlayPosition::Above if fits_above || !fits_below => {
            anchor.y.saturating_sub(height).max(screen.y)
        }
        OverlayPosition::Above => below,
    };

    Rect::new(x, y, width, height)
}

fn constrain_x(x: u16, width: u16, screen: Rect) -> u16 {
    let max_x = screen.x + screen.width.saturating_sub(width);
    x.min(max_x).max(screen.x)
}
