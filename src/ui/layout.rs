//! Window placement, computed from the viewport size every frame so windows follow resizes

/// Gap between menu slots, and between the slots and the menu's edge
pub const MENU_PADDING: f32 = 5.0;

/// A screen-space rectangle, in logical pixels
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn position(&self) -> [f32; 2] {
        [self.x, self.y]
    }

    pub fn size(&self) -> [f32; 2] {
        [self.width, self.height]
    }
}

/// Bounds of a horizontal menu bar holding `slot_count` square slots of `slot_size`, centred at the top of the viewport
pub fn menu_bar_bounds(viewport: [f32; 2], slot_size: f32, slot_count: usize) -> Bounds {
    let width = (slot_size + MENU_PADDING) * slot_count as f32 + MENU_PADDING;
    Bounds {
        x: viewport[0] / 2.0 - width / 2.0,
        y: MENU_PADDING,
        width,
        height: slot_size + 2.0 * MENU_PADDING,
    }
}

/// Bounds of a window of `size`, `margin` pixels away from the bottom-right corner of the viewport
pub fn anchored_bottom_right(viewport: [f32; 2], size: [f32; 2], margin: f32) -> Bounds {
    Bounds {
        x: viewport[0] - size[0] - margin,
        y: viewport[1] - size[1] - margin,
        width: size[0],
        height: size[1],
    }
}
