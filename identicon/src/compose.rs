//! Lay the selected blocks out on a 3x3 grid.
//!
//! The center cell holds the center block unrotated. The outer ring is
//! walked clockwise one quadrant at a time, starting top-left; each
//! quadrant draws the corner block and the edge block at the same
//! rotation, and the rotation advances a quarter turn per quadrant.

use crate::block::{Block, Cell};
use crate::canvas::Canvas;
use crate::geometry::Rotation;
use crate::select::Selection;

/// Grid positions (column, row) of the corner and edge cell of each
/// quadrant, in drawing order.
pub const QUADRANTS: [[(u32, u32); 2]; 4] = [
    [(0, 0), (1, 0)],
    [(2, 0), (2, 1)],
    [(2, 2), (1, 2)],
    [(0, 2), (0, 1)],
];

/// One block drawn into one grid cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub block: Block,
    pub cell: Cell,
    pub rotation: Rotation,
}

/// Side length of a grid cell. The remainder of `size / 3` is left
/// unpainted along the right and bottom edges.
pub fn cell_size(size: u32) -> u32 {
    size / 3
}

/// The nine placements for `selection`, center first, then each quadrant's
/// corner and edge in clockwise order.
pub fn placements(selection: &Selection, cell_size: u32) -> [Placement; 9] {
    let s = cell_size as f64;
    let at = |col: u32, row: u32| Cell::new(col as f64 * s, row as f64 * s, s);

    let mut out = [Placement {
        block: selection.center,
        cell: at(1, 1),
        rotation: Rotation::NONE,
    }; 9];

    let mut rotation = selection.rotation;
    for (q, [corner, edge]) in QUADRANTS.iter().enumerate() {
        out[1 + 2 * q] = Placement {
            block: selection.corner,
            cell: at(corner.0, corner.1),
            rotation,
        };
        out[2 + 2 * q] = Placement {
            block: selection.edge,
            cell: at(edge.0, edge.1),
            rotation,
        };
        rotation = rotation.next();
    }
    out
}

/// Paint a full identicon of `size` pixels for `selection`.
pub fn compose(size: u32, selection: &Selection) -> Canvas {
    let mut canvas = Canvas::new(size);
    for placement in placements(selection, cell_size(size)) {
        log::trace!(
            "block {} at ({}, {}) rotation {}",
            placement.block.index(),
            placement.cell.x,
            placement.cell.y,
            placement.rotation.quarter_turns()
        );
        placement
            .block
            .render(&mut canvas, placement.cell, placement.rotation);
    }
    canvas
}
