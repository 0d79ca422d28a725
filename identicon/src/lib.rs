pub mod error;
pub mod color;
#[allow(clippy::needless_range_loop)]
pub mod geometry;
pub mod canvas;
pub mod block;
pub mod select;
pub mod compose;
pub mod generator;
#[cfg(feature = "serde")]
pub mod config;

pub use canvas::IdenticonImage;
pub use color::Color;
pub use error::{IdenticonError, MIN_SIZE};
pub use generator::{make, Identicon};
