use bevy::prelude::{Rect, Resource, Vec2};

use crate::core::tic_tac_toe::BOARD_SIZE;
use crate::core::GridIndex;

const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum LayoutError {
    #[error("window width {width} can't fit the board (border: {border}, divider: {divider})")]
    WindowTooNarrow { width: u32, border: u32, divider: u32 },
    #[error("window height {height} can't fit the board (border: {border}, divider: {divider})")]
    WindowTooShort { height: u32, border: u32, divider: u32 },
}

/// Screen placement of the board: one rectangle per cell in row-major order,
/// kept in window coordinates (origin at the top left corner, y pointing down).
#[derive(Clone, Debug, Resource)]
pub struct BoardLayout {
    window: Vec2,
    border: f32,
    divider: f32,
    section: Vec2,
    cells: [Rect; CELL_COUNT],
}

/// Splits one window dimension into three sections,
/// `None` if the leftover space is too small to split.
fn section_length(total: u32, border: u32, divider: u32) -> Option<u32> {
    let inner = total.checked_sub(2 * border + 2 * divider)?;
    (inner >= BOARD_SIZE as u32).then_some(inner / BOARD_SIZE as u32)
}

impl BoardLayout {
    /// Computes cell placement for a window of `width` x `height` with an
    /// outer `border` and `divider`-wide bars between cells, all in pixels.
    pub fn new(width: u32, height: u32, border: u32, divider: u32) -> Result<Self, LayoutError> {
        let section_width = section_length(width, border, divider).ok_or(
            LayoutError::WindowTooNarrow {
                width,
                border,
                divider,
            },
        )?;
        let section_height = section_length(height, border, divider).ok_or(
            LayoutError::WindowTooShort {
                height,
                border,
                divider,
            },
        )?;

        let section = Vec2::new(section_width as f32, section_height as f32);
        let step = section + Vec2::splat(divider as f32);
        let origin = Vec2::splat(border as f32);
        let mut cells = [Rect::default(); CELL_COUNT];
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let min = origin + step * Vec2::new(col as f32, row as f32);
                cells[row * BOARD_SIZE + col] = Rect::from_corners(min, min + section);
            }
        }
        Ok(Self {
            window: Vec2::new(width as f32, height as f32),
            border: border as f32,
            divider: divider as f32,
            section,
            cells,
        })
    }

    /// Returns the cell containing `point` (window coordinates).
    /// Bounds are inclusive; on a shared boundary the first cell
    /// in row-major order wins.
    pub fn locate(&self, point: Vec2) -> Option<GridIndex> {
        self.cells
            .iter()
            .position(|cell| cell.contains(point))
            .map(|index| GridIndex::new(index / BOARD_SIZE, index % BOARD_SIZE))
    }

    /// Returns the rectangle of the cell at `pos`.
    pub fn cell(&self, pos: GridIndex) -> Rect {
        self.cells[pos.row() * BOARD_SIZE + pos.col()]
    }

    /// Returns the size of a single cell.
    pub fn cell_size(&self) -> Vec2 {
        self.section
    }

    /// Returns the window size the layout was computed for.
    pub fn window_size(&self) -> Vec2 {
        self.window
    }

    /// Returns the divider bars between cells: two vertical, two horizontal.
    /// The bars span the whole playable area, border to border.
    pub fn divider_bars(&self) -> [Rect; 4] {
        let min = Vec2::splat(self.border);
        let max = self.window - min;
        let step = self.section + Vec2::splat(self.divider);
        let mut bars = [Rect::default(); 4];
        for i in 0..2 {
            let x = min.x + self.section.x + step.x * i as f32;
            let y = min.y + self.section.y + step.y * i as f32;
            bars[i] = Rect::new(x, min.y, x + self.divider, max.y);
            bars[i + 2] = Rect::new(min.x, y, max.x, y + self.divider);
        }
        bars
    }

    /// Converts a point from window coordinates to world coordinates
    /// (origin at the window center, y pointing up).
    pub fn to_world(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            point.x - self.window.x / 2.0,
            self.window.y / 2.0 - point.y,
        )
    }

    /// Returns the center of the cell at `pos` in world coordinates.
    pub fn cell_center_world(&self, pos: GridIndex) -> Vec2 {
        self.to_world(self.cell(pos).center())
    }
}
