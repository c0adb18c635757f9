use crate::block::Block;
use crate::error::LayoutError;
use crate::geom::round;
use crate::rng::RandomSource;
use crate::viewport::Size;
use glam::Vec2;

/// Vertical distance between row baselines, in device-independent pixels.
/// Fixed regardless of actual block heights; tall blocks may overlap the
/// next row, which is the intended layout character.
pub const ROW_STEP_MOBILE: f32 = 90.0;
pub const ROW_STEP_DESKTOP: f32 = 180.0;

/// Downward bias applied to the first row only. The x component is carried
/// with the offset but placement currently consumes just the y bias.
const FIRST_ROW_OFFSET: Vec2 = Vec2::new(5.0, 20.0);

/// Vertical jitter band mixed into the row baseline before drawing a slot's
/// y coordinate.
const JITTER_MOBILE: (f32, f32) = (-4.0, 5.0);
const JITTER_DESKTOP: (f32, f32) = (-10.0, 20.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutReport {
    pub max_per_row: u32,
    /// Whether the row partition was rebuilt this pass. Stays false while
    /// the memoized row capacity is unchanged, so device-pixel-ratio jitter
    /// does not reshuffle row membership.
    pub rows_rebuilt: bool,
}

/// Partitions blocks into randomized rows and assigns each a randomized
/// position inside its row slot.
pub struct LayoutEngine {
    mobile: bool,
    max_per_row: Option<u32>,
    rows: Vec<u32>,
}

impl LayoutEngine {
    pub fn new(mobile: bool) -> Self {
        Self {
            mobile,
            max_per_row: None,
            rows: Vec::new(),
        }
    }

    pub fn mobile(&self) -> bool {
        self.mobile
    }

    /// Row sizes from the last partition. Their sum is at least the block
    /// count; the final row may overshoot and placement stops early.
    pub fn rows(&self) -> &[u32] {
        &self.rows
    }

    pub fn max_per_row(&self) -> Option<u32> {
        self.max_per_row
    }

    /// Row capacity for a viewport width: `round(wr / (max_block_width *
    /// 1.5))` on desktop, without the 1.5 factor on mobile. Clamped to at
    /// least 1 so narrow viewports or oversized blocks cannot stall
    /// partitioning.
    pub fn row_capacity(viewport_wr: f32, max_block_width: f32, mobile: bool) -> u32 {
        let factor = if mobile { 1.0 } else { 1.5 };
        round(viewport_wr / (max_block_width * factor)).max(1.0) as u32
    }

    /// Full re-flow: recompute the memoized row capacity, rebuild the row
    /// partition if it changed, and assign every block a position. Blocks
    /// keep their original order; each lands in exactly one row slot.
    pub fn reflow(
        &mut self,
        blocks: &mut [Block],
        size: &Size,
        rng: &mut dyn RandomSource,
    ) -> Result<LayoutReport, LayoutError> {
        if blocks.is_empty() {
            self.rows.clear();
            self.max_per_row = None;
            return Ok(LayoutReport {
                max_per_row: 0,
                rows_rebuilt: false,
            });
        }

        let max_block_width = round(
            blocks
                .iter()
                .map(Block::width)
                .fold(0.0_f32, f32::max),
        );
        if !(max_block_width > 0.0) {
            return Err(LayoutError::NonPositiveBlockWidth(max_block_width));
        }

        let capacity = Self::row_capacity(size.wr, max_block_width, self.mobile);
        let rows_rebuilt = self.max_per_row != Some(capacity);
        if rows_rebuilt {
            self.max_per_row = Some(capacity);
            self.partition(blocks.len(), capacity, rng);
            tracing::debug!(
                capacity,
                rows = self.rows.len(),
                "row partition rebuilt"
            );
        }

        self.place(blocks, size, rng);

        Ok(LayoutReport {
            max_per_row: capacity,
            rows_rebuilt,
        })
    }

    /// Draws row sizes uniformly from `[1, capacity]` until the running sum
    /// covers every block. The last row may overshoot; it is not trimmed.
    fn partition(&mut self, block_count: usize, capacity: u32, rng: &mut dyn RandomSource) {
        self.rows.clear();
        let mut assigned = 0_usize;
        while assigned < block_count {
            let cols = rng.round_uniform(1, capacity as i32).max(1) as u32;
            self.rows.push(cols);
            assigned += cols as usize;
        }
    }

    fn place(&self, blocks: &mut [Block], size: &Size, rng: &mut dyn RandomSource) {
        let step = if self.mobile {
            ROW_STEP_MOBILE
        } else {
            ROW_STEP_DESKTOP
        };

        let mut index = 0_usize;
        let mut row_y = 0.0_f32;
        for &row in &self.rows {
            for i in 0..row {
                if index >= blocks.len() {
                    break;
                }
                let block = &mut blocks[index];
                let offset_y = if row_y == 0.0 { FIRST_ROW_OFFSET.y } else { 0.0 };
                block.position = self.slot_point(block.width(), row_y, offset_y, row, i, size, rng);
                index += 1;
            }
            row_y += step;
        }
    }

    /// Position inside the `i`-th of `row` equal-width column slots:
    /// x is a uniform offset within the slot (never past the slot's right
    /// edge minus the block width), y is uniform between the jittered row
    /// baseline and the baseline plus the first-row bias.
    fn slot_point(
        &self,
        block_width: f32,
        row_y: f32,
        offset_y: f32,
        row: u32,
        i: u32,
        size: &Size,
        rng: &mut dyn RandomSource,
    ) -> Vec2 {
        let area = size.wr / row as f32;
        let x = area * i as f32 + rng.uniform(0.0, (area - block_width).max(0.0));

        let (jitter_lo, jitter_hi) = if self.mobile {
            JITTER_MOBILE
        } else {
            JITTER_DESKTOP
        };
        let band_edge = row_y + rng.uniform(jitter_lo, jitter_hi);
        let y = rng.uniform(band_edge, offset_y + row_y);

        Vec2::new(x, y)
    }
}
