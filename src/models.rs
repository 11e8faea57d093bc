use image::{Rgb, Rgba};

/// Background of the color icon, `#0078D4`.
pub const BRAND_BLUE: Rgb<u8> = Rgb([0, 120, 212]);
pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
pub const OPAQUE_WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
/// White with zero alpha, the outline icon's background.
pub const CLEAR: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// An axis-aligned rectangle with inclusive corners.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl Rect {
    pub const fn new(x0: u32, y0: u32, x1: u32, y1: u32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Box spanning `(x, y)` to `(x + extent, y + extent)`.
    pub const fn square(x: u32, y: u32, extent: u32) -> Self {
        Self::new(x, y, x + extent, y + extent)
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x0 && x <= self.x1 && y >= self.y0 && y <= self.y1
    }

    /// Whether `(x, y)` is covered by an outline of `width` pixels drawn inward from the edges.
    pub fn on_stroke(&self, x: u32, y: u32, width: u32) -> bool {
        self.contains(x, y)
            && (x < self.x0 + width
                || x + width > self.x1
                || y < self.y0 + width
                || y + width > self.y1)
    }
}

/// Fixed geometry of one icon: a square frame around a grid of button squares.
#[derive(Clone, Copy, Debug)]
pub struct IconSpec {
    pub file_name: &'static str,
    pub size: u32,
    pub frame: Rect,
    pub frame_width: u32,
    /// Buttons per row and per column.
    pub grid: u32,
    pub button_origin: (u32, u32),
    pub button_step: u32,
    pub button_extent: u32,
    pub button_width: u32,
}

impl IconSpec {
    /// Button boxes, column by column.
    pub fn buttons(&self) -> impl Iterator<Item = Rect> + '_ {
        let (ox, oy) = self.button_origin;
        (0..self.grid).flat_map(move |i| {
            (0..self.grid).map(move |j| {
                Rect::square(
                    ox + i * self.button_step,
                    oy + j * self.button_step,
                    self.button_extent,
                )
            })
        })
    }
}

pub const COLOR_ICON: IconSpec = IconSpec {
    file_name: "color.png",
    size: 192,
    frame: Rect::new(60, 60, 132, 132),
    frame_width: 3,
    grid: 3,
    button_origin: (70, 80),
    button_step: 20,
    button_extent: 15,
    button_width: 2,
};

pub const OUTLINE_ICON: IconSpec = IconSpec {
    file_name: "outline.png",
    size: 32,
    frame: Rect::new(8, 8, 24, 24),
    frame_width: 2,
    grid: 2,
    button_origin: (10, 12),
    button_step: 6,
    button_extent: 4,
    button_width: 1,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stroke_grows_inward() {
        let rect = Rect::new(10, 10, 20, 20);

        assert!(rect.on_stroke(10, 15, 2));
        assert!(rect.on_stroke(11, 15, 2));
        assert!(!rect.on_stroke(12, 15, 2));
        assert!(rect.on_stroke(19, 15, 2));
        assert!(rect.on_stroke(20, 20, 2));
        assert!(!rect.on_stroke(15, 15, 2));
        // outside the box is never stroked
        assert!(!rect.on_stroke(9, 15, 2));
        assert!(!rect.on_stroke(21, 15, 2));
    }

    #[test]
    fn color_buttons_follow_fixed_grid() {
        let buttons: Vec<Rect> = COLOR_ICON.buttons().collect();

        assert_eq!(buttons.len(), 9);
        assert_eq!(buttons[0], Rect::new(70, 80, 85, 95));
        assert_eq!(buttons[1], Rect::new(70, 100, 85, 115));
        assert_eq!(buttons[8], Rect::new(110, 120, 125, 135));
    }

    #[test]
    fn outline_buttons_follow_fixed_grid() {
        let buttons: Vec<Rect> = OUTLINE_ICON.buttons().collect();

        assert_eq!(
            buttons,
            vec![
                Rect::new(10, 12, 14, 16),
                Rect::new(10, 18, 14, 22),
                Rect::new(16, 12, 20, 16),
                Rect::new(16, 18, 20, 22),
            ]
        );
    }

    #[test]
    fn every_shape_fits_its_canvas() {
        for spec in [COLOR_ICON, OUTLINE_ICON] {
            for rect in std::iter::once(spec.frame).chain(spec.buttons()) {
                assert!(rect.x1 < spec.size && rect.y1 < spec.size, "{rect:?}");
            }
        }
    }
}
