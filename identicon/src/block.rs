//! The sixteen block shapes.
//!
//! Every block paints one square cell of the canvas. Blocks 0-3 look the
//! same at every rotation and are the only ones allowed in the center cell.
//! Blocks 4-15 are small polygons given in the unrotated cell; their
//! vertices are turned about the cell center before the cell's pixels are
//! tested against them.

use smallvec::SmallVec;

use crate::canvas::Canvas;
use crate::geometry::{point_in_polygon, rotate, Point, Rotation};

/// Number of blocks in the library.
pub const BLOCK_COUNT: usize = 16;

/// A square region of the canvas that one block is drawn into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

impl Cell {
    pub const fn new(x: f64, y: f64, size: f64) -> Self {
        Self { x, y, size }
    }

    fn center(&self) -> Point {
        let m = self.size / 2.0;
        Point::new(self.x + m, self.y + m)
    }
}

type Renderer = fn(&mut Canvas, Cell, Rotation);

const RENDERERS: [Renderer; BLOCK_COUNT] = [
    empty,
    filled_square,
    center_square,
    diamond,
    corner_triangle,
    upward_triangle,
    half_rectangle,
    slanted_wedge,
    stacked_triangles,
    leaning_triangle,
    twin_triangles,
    quarter_square,
    downward_triangle,
    low_triangle,
    small_triangle,
    corner_notch,
];

/// One entry of the block library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Block(u8);

impl Block {
    /// The rotation-invariant blocks, in center-selection order.
    pub const CENTER: [Block; 4] = [Block(0), Block(1), Block(2), Block(3)];

    /// Look up a block by library index.
    pub fn new(index: usize) -> Option<Block> {
        (index < BLOCK_COUNT).then_some(Block(index as u8))
    }

    /// Block `n % 16`.
    pub fn wrapping(n: usize) -> Block {
        Block((n % BLOCK_COUNT) as u8)
    }

    /// All sixteen blocks in library order.
    pub fn all() -> impl Iterator<Item = Block> {
        (0..BLOCK_COUNT as u8).map(Block)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Whether this block is eligible for the center cell.
    pub fn is_symmetric(self) -> bool {
        Self::CENTER.contains(&self)
    }

    /// Paint this block into `cell` of `canvas`, turned by `rotation`.
    pub fn render(self, canvas: &mut Canvas, cell: Cell, rotation: Rotation) {
        RENDERERS[self.index()](canvas, cell, rotation)
    }
}

/// Turn `vertices` about the cell center, then paint every pixel of the
/// cell that falls inside the result.
fn fill_polygon(canvas: &mut Canvas, cell: Cell, rotation: Rotation, vertices: &[Point]) {
    let center = cell.center();
    let turned: SmallVec<[Point; 4]> = vertices
        .iter()
        .map(|&p| rotate(p, center, rotation))
        .collect();
    fill_cell_where(canvas, cell, |x, y| point_in_polygon(x, y, &turned));
}

fn fill_cell_where(canvas: &mut Canvas, cell: Cell, inside: impl Fn(f64, f64) -> bool) {
    let mut i = cell.x;
    while i < cell.x + cell.size {
        let mut j = cell.y;
        while j < cell.y + cell.size {
            if inside(i, j) {
                canvas.paint(i as i64, j as i64);
            }
            j += 1.0;
        }
        i += 1.0;
    }
}

fn empty(_canvas: &mut Canvas, _cell: Cell, _rotation: Rotation) {}

/// Whole cell except its top row and left column, which stay background
/// so adjacent filled cells remain distinguishable.
fn filled_square(canvas: &mut Canvas, cell: Cell, _rotation: Rotation) {
    let size = cell.size as i64;
    let x0 = cell.x as i64 + 1;
    let y0 = cell.y as i64 + 1;
    for x in x0..x0 + size - 1 {
        for y in y0..y0 + size - 1 {
            canvas.paint(x, y);
        }
    }
}

/// Half-size square in the middle of the cell.
fn center_square(canvas: &mut Canvas, cell: Cell, _rotation: Rotation) {
    let quarter = cell.size / 4.0;
    let inner = Cell::new(cell.x + quarter, cell.y + quarter, 2.0 * quarter);
    fill_cell_where(canvas, inner, |_, _| true);
}

fn diamond(canvas: &mut Canvas, cell: Cell, _rotation: Rotation) {
    let Cell { x, y, size } = cell;
    let m = size / 2.0;
    let vertices = [
        Point::new(x + m, y),
        Point::new(x + size, y + m),
        Point::new(x + m, y + size),
        Point::new(x, y + m),
    ];
    fill_cell_where(canvas, cell, |px, py| point_in_polygon(px, py, &vertices));
}

/// Top-left half of the cell, split along the anti-diagonal.
fn corner_triangle(canvas: &mut Canvas, cell: Cell, rotation: Rotation) {
    let Cell { x, y, size } = cell;
    let vertices = [
        Point::new(x, y),
        Point::new(x + size, y),
        Point::new(x, y + size),
    ];
    fill_polygon(canvas, cell, rotation, &vertices);
}

fn upward_triangle(canvas: &mut Canvas, cell: Cell, rotation: Rotation) {
    let Cell { x, y, size } = cell;
    let m = size / 2.0;
    let vertices = [
        Point::new(x + m, y),
        Point::new(x + size, y + size),
        Point::new(x, y + size),
    ];
    fill_polygon(canvas, cell, rotation, &vertices);
}

/// Left half of the cell.
fn half_rectangle(canvas: &mut Canvas, cell: Cell, rotation: Rotation) {
    let Cell { x, y, size } = cell;
    let m = size / 2.0;
    let vertices = [
        Point::new(x, y),
        Point::new(x + m, y),
        Point::new(x + m, y + size),
        Point::new(x, y + size),
    ];
    fill_polygon(canvas, cell, rotation, &vertices);
}

fn slanted_wedge(canvas: &mut Canvas, cell: Cell, rotation: Rotation) {
    let Cell { x, y, size } = cell;
    let m = size / 2.0;
    let vertices = [
        Point::new(x, y),
        Point::new(x + size, y + m),
        Point::new(x + size, y + size),
        Point::new(x + m, y + size),
    ];
    fill_polygon(canvas, cell, rotation, &vertices);
}

/// One triangle on top of two, like a pyramid of three.
fn stacked_triangles(canvas: &mut Canvas, cell: Cell, rotation: Rotation) {
    let Cell { x, y, size } = cell;
    let m = size / 2.0;
    let q = m / 2.0;

    let top = [
        Point::new(x + m, y),
        Point::new(x + 3.0 * q, y + m),
        Point::new(x + q, y + m),
    ];
    let bottom_left = [
        Point::new(x + q, y + m),
        Point::new(x + m, y + size),
        Point::new(x, y + size),
    ];
    let bottom_right = [
        Point::new(x + 3.0 * q, y + m),
        Point::new(x + size, y + size),
        Point::new(x + m, y + size),
    ];
    for vertices in [&top, &bottom_left, &bottom_right] {
        fill_polygon(canvas, cell, rotation, vertices);
    }
}

fn leaning_triangle(canvas: &mut Canvas, cell: Cell, rotation: Rotation) {
    let Cell { x, y, size } = cell;
    let m = size / 2.0;
    let vertices = [
        Point::new(x, y),
        Point::new(x + size, y + m),
        Point::new(x + m, y + size),
    ];
    fill_polygon(canvas, cell, rotation, &vertices);
}

/// Two small right triangles in opposite quadrants.
fn twin_triangles(canvas: &mut Canvas, cell: Cell, rotation: Rotation) {
    let Cell { x, y, size } = cell;
    let m = size / 2.0;
    let upper = [
        Point::new(x + m, y),
        Point::new(x + size, y),
        Point::new(x + m, y + m),
    ];
    let lower = [
        Point::new(x, y + m),
        Point::new(x + m, y + m),
        Point::new(x, y + size),
    ];
    fill_polygon(canvas, cell, rotation, &upper);
    fill_polygon(canvas, cell, rotation, &lower);
}

fn quarter_square(canvas: &mut Canvas, cell: Cell, rotation: Rotation) {
    let Cell { x, y, size } = cell;
    let m = size / 2.0;
    let vertices = [
        Point::new(x, y),
        Point::new(x + m, y),
        Point::new(x + m, y + m),
        Point::new(x, y + m),
    ];
    fill_polygon(canvas, cell, rotation, &vertices);
}

fn downward_triangle(canvas: &mut Canvas, cell: Cell, rotation: Rotation) {
    let Cell { x, y, size } = cell;
    let m = size / 2.0;
    let vertices = [
        Point::new(x, y + m),
        Point::new(x + size, y + m),
        Point::new(x + m, y + size),
    ];
    fill_polygon(canvas, cell, rotation, &vertices);
}

fn low_triangle(canvas: &mut Canvas, cell: Cell, rotation: Rotation) {
    let Cell { x, y, size } = cell;
    let m = size / 2.0;
    let vertices = [
        Point::new(x + m, y + m),
        Point::new(x + size, y + size),
        Point::new(x, y + size),
    ];
    fill_polygon(canvas, cell, rotation, &vertices);
}

fn small_triangle(canvas: &mut Canvas, cell: Cell, rotation: Rotation) {
    let Cell { x, y, size } = cell;
    let m = size / 2.0;
    let vertices = [
        Point::new(x + m, y),
        Point::new(x + m, y + m),
        Point::new(x, y + m),
    ];
    fill_polygon(canvas, cell, rotation, &vertices);
}

fn corner_notch(canvas: &mut Canvas, cell: Cell, rotation: Rotation) {
    let Cell { x, y, size } = cell;
    let m = size / 2.0;
    let vertices = [
        Point::new(x, y),
        Point::new(x + m, y),
        Point::new(x, y + m),
    ];
    fill_polygon(canvas, cell, rotation, &vertices);
}
