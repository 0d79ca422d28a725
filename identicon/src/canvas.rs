use crate::color::Color;

/// Palette index of the background color.
pub const BACKGROUND: u8 = 0;
/// Palette index of the foreground color.
pub const FOREGROUND: u8 = 1;

/// Square two-index raster that blocks paint into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    size: u32,
    pixels: Vec<u8>,
}

impl Canvas {
    /// Create a `size` x `size` canvas filled with [`BACKGROUND`].
    pub fn new(size: u32) -> Self {
        let n = size as usize * size as usize;
        Self {
            size,
            pixels: vec![BACKGROUND; n],
        }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Palette index at (x, y).
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.pixels[(y * self.size + x) as usize]
    }

    /// Set (x, y) to [`FOREGROUND`]. Coordinates outside the canvas are ignored.
    #[inline]
    pub fn paint(&mut self, x: i64, y: i64) {
        let size = self.size as i64;
        if (0..size).contains(&x) && (0..size).contains(&y) {
            self.pixels[(y * size + x) as usize] = FOREGROUND;
        }
    }

    /// Row-major palette indices.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Number of foreground pixels.
    pub fn coverage(&self) -> usize {
        self.pixels.iter().filter(|&&p| p == FOREGROUND).count()
    }
}

/// A finished identicon: a painted canvas plus its two colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdenticonImage {
    canvas: Canvas,
    palette: [Color; 2],
}

impl IdenticonImage {
    pub fn new(canvas: Canvas, background: Color, foreground: Color) -> Self {
        Self {
            canvas,
            palette: [background, foreground],
        }
    }

    /// Width and height in pixels.
    pub fn size(&self) -> u32 {
        self.canvas.size()
    }

    /// `[background, foreground]`.
    pub fn palette(&self) -> [Color; 2] {
        self.palette
    }

    /// Palette index at (x, y): [`BACKGROUND`] or [`FOREGROUND`].
    pub fn index(&self, x: u32, y: u32) -> u8 {
        self.canvas.get(x, y)
    }

    /// Resolved color at (x, y).
    pub fn color(&self, x: u32, y: u32) -> Color {
        self.palette[self.index(x, y) as usize]
    }

    /// Row-major palette indices, one byte per pixel.
    pub fn indices(&self) -> &[u8] {
        self.canvas.pixels()
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Convert to RGBA pixel data (4 bytes per pixel).
    pub fn to_rgba(&self) -> Vec<u8> {
        self.indices()
            .iter()
            .flat_map(|&i| self.palette[i as usize].to_rgba())
            .collect()
    }
}
