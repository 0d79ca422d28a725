use crate::canvas::IdenticonImage;
use crate::color::Color;
use crate::compose;
use crate::error::{check_size, IdenticonError};
use crate::select::Selection;

/// A validated identicon configuration that can render any number of inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identicon {
    background: Color,
    foreground: Color,
    size: u32,
}

impl Identicon {
    /// Create a generator for `size` x `size` images.
    ///
    /// Fails with [`IdenticonError::SizeTooSmall`] when `size` is below 16.
    pub fn new(background: Color, foreground: Color, size: u32) -> Result<Self, IdenticonError> {
        check_size(size)?;
        Ok(Self {
            background,
            foreground,
            size,
        })
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn foreground(&self) -> Color {
        self.foreground
    }

    /// Render the identicon for `data`.
    pub fn make(&self, data: &[u8]) -> IdenticonImage {
        let selection = Selection::from_bytes(data);
        let canvas = compose::compose(self.size, &selection);
        IdenticonImage::new(canvas, self.background, self.foreground)
    }

    /// Render one identicon per input, in input order.
    pub fn make_all(&self, inputs: &[&[u8]]) -> Vec<IdenticonImage> {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            inputs.par_iter().map(|data| self.make(data)).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            inputs.iter().map(|data| self.make(data)).collect()
        }
    }
}

/// One-shot rendering without keeping a generator around.
pub fn make(
    background: Color,
    foreground: Color,
    size: u32,
    data: &[u8],
) -> Result<IdenticonImage, IdenticonError> {
    Identicon::new(background, foreground, size).map(|icon| icon.make(data))
}
