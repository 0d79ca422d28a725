//! PNG output for identicons and block sheets.

use anyhow::{Context, Result};
use identicon::block::{Block, Cell, BLOCK_COUNT};
use identicon::canvas::Canvas;
use identicon::geometry::Rotation;
use identicon::{Color, IdenticonImage};
use std::path::Path;

/// Write an identicon as an indexed PNG, each pixel scaled to `scale` x `scale`.
pub fn write_identicon_png(img: &IdenticonImage, scale: usize, path: &Path) -> Result<()> {
    let size = img.size() as usize;
    let indices = upscale(img.indices(), size, size, scale);
    write_indexed_png(
        path,
        &indices,
        size * scale,
        size * scale,
        img.palette(),
    )
}

/// Write a sheet of every block at every rotation: one row per block, one
/// column per rotation, `spacing` background pixels between cells.
pub fn write_block_sheet_png(
    cell_size: u32,
    spacing: u32,
    background: Color,
    foreground: Color,
    path: &Path,
) -> Result<()> {
    let stride = cell_size + spacing;
    let width = 4 * stride + spacing;
    let height = BLOCK_COUNT as u32 * stride + spacing;

    // Canvas is square; paint into the larger dimension and crop.
    let side = width.max(height);
    let mut canvas = Canvas::new(side);
    for block in Block::all() {
        for rotation in Rotation::ALL {
            let x = spacing + rotation.quarter_turns() as u32 * stride;
            let y = spacing + block.index() as u32 * stride;
            let cell = Cell::new(x as f64, y as f64, cell_size as f64);
            block.render(&mut canvas, cell, rotation);
        }
    }

    let (width, height) = (width as usize, height as usize);
    let mut indices = Vec::with_capacity(width * height);
    for row in canvas.pixels().chunks_exact(side as usize).take(height) {
        indices.extend_from_slice(&row[..width]);
    }
    write_indexed_png(path, &indices, width, height, [background, foreground])
}

fn upscale(indices: &[u8], width: usize, height: usize, scale: usize) -> Vec<u8> {
    if scale == 1 {
        return indices.to_vec();
    }
    let mut out = Vec::with_capacity(width * height * scale * scale);
    for row in indices.chunks_exact(width) {
        let wide: Vec<u8> = row
            .iter()
            .flat_map(|&i| std::iter::repeat(i).take(scale))
            .collect();
        for _ in 0..scale {
            out.extend_from_slice(&wide);
        }
    }
    out
}

fn write_indexed_png(
    path: &Path,
    indices: &[u8],
    width: usize,
    height: usize,
    palette: [Color; 2],
) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    let w = std::io::BufWriter::new(file);

    let plte: Vec<u8> = palette
        .iter()
        .flat_map(|c| [c.r, c.g, c.b])
        .collect();

    let mut encoder = png::Encoder::new(w, width as u32, height as u32);
    encoder.set_color(png::ColorType::Indexed);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_palette(plte);

    let mut writer = encoder
        .write_header()
        .with_context(|| format!("writing PNG header for {}", path.display()))?;
    writer
        .write_image_data(indices)
        .with_context(|| format!("writing PNG data for {}", path.display()))?;

    log::debug!("encoded {}x{} indexed PNG to {}", width, height, path.display());
    Ok(())
}
