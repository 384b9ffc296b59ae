//! Grid map storage and coordinate conversion.
//!
//! ## Coordinate System
//!
//! Cell coordinates are relative to the world origin:
//! cell `(i, j)` covers `[i*scale, (i+1)*scale) x [j*scale, (j+1)*scale)`.
//! The backing store is a row-major `Vec` whose row 0 is the lowest `y`;
//! the map center is the storage index of cell `(0, 0)`.
//!
//! ```text
//!   storage x:   0   1   2   3
//!              ┌───┬───┬───┬───┐
//!   storage 1  │   │   │   │   │   cell (i, j) lives at
//!              ├───┼───┼───┼───┤   storage (i + center_x, j + center_y)
//!   storage 0  │   │   │   │   │
//!              └───┴───┴───┴───┘
//!                      ▲ world x = 0 when center_x = 2
//! ```
//!
//! ## Extent
//!
//! A [`ExtentPolicy::Bounded`] map rejects access outside its extent. An
//! [`ExtentPolicy::Unbounded`] map reports the prototype cell for positions
//! it does not store and grows through [`GridMap::expand_to_include`]
//! before any write outside its extent.

use std::ops::{Index, IndexMut};

use crate::core::math::{are_equal, next_power_of};
use crate::core::{AreaOccupancyObservation, DiscretePoint2D, GridCell, Point2D};
use crate::error::{Error, Result};

use super::config::{ExtentPolicy, GridMapParams};

/// Growth per side is rounded up to a power of this base.
const EXPANSION_BASE: usize = 2;

/// Discretize one world coordinate.
///
/// Quotients within tolerance of an integer snap to it, so coordinates
/// that sit on a cell boundary always land in the cell that starts there.
#[inline]
pub(crate) fn discretize(value: f64, scale: f64) -> i32 {
    let quotient = value / scale;
    let nearest = quotient.round();
    if are_equal(quotient, nearest) {
        nearest as i32
    } else {
        quotient.floor() as i32
    }
}

/// Occupancy grid map.
#[derive(Clone, Debug)]
pub struct GridMap {
    cells: Vec<GridCell>,
    width: usize,
    height: usize,
    scale: f64,
    center_x: usize,
    center_y: usize,
    policy: ExtentPolicy,
    /// Content of every position that has not been observed.
    prototype: GridCell,
}

impl GridMap {
    // === Constructors ===

    /// Create a fixed-extent map of unknown cells.
    pub fn bounded(params: GridMapParams) -> Result<Self> {
        Self::with_prototype(params, ExtentPolicy::Bounded, GridCell::Unknown)
    }

    /// Create a growable map of unknown cells.
    pub fn unbounded(params: GridMapParams) -> Result<Self> {
        Self::with_prototype(params, ExtentPolicy::Unbounded, GridCell::Unknown)
    }

    /// Create a map whose every position starts as `prototype`.
    pub fn with_prototype(
        params: GridMapParams,
        policy: ExtentPolicy,
        prototype: GridCell,
    ) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            cells: vec![prototype; params.cell_count()],
            width: params.width,
            height: params.height,
            scale: params.scale,
            center_x: params.width / 2,
            center_y: params.height / 2,
            policy,
            prototype,
        })
    }

    /// Create a map from explicit row-major cell contents (row 0 is the lowest y).
    ///
    /// Positions outside the extent of an unbounded map read as unknown.
    pub fn from_cells(
        params: GridMapParams,
        policy: ExtentPolicy,
        cells: Vec<GridCell>,
    ) -> Result<Self> {
        params.validate()?;
        if cells.len() != params.cell_count() {
            return Err(Error::InvalidMapParams(format!(
                "expected {} cells for a {}x{} grid, got {}",
                params.cell_count(),
                params.width,
                params.height,
                cells.len()
            )));
        }
        Ok(Self {
            cells,
            width: params.width,
            height: params.height,
            scale: params.scale,
            center_x: params.width / 2,
            center_y: params.height / 2,
            policy,
            prototype: GridCell::Unknown,
        })
    }

    // === Basic Properties ===

    /// Grid width in cells.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Meters per cell.
    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Storage column of world cell `(0, 0)`.
    #[inline]
    pub fn map_center_x(&self) -> usize {
        self.center_x
    }

    /// Storage row of world cell `(0, 0)`.
    #[inline]
    pub fn map_center_y(&self) -> usize {
        self.center_y
    }

    /// Extent policy.
    #[inline]
    pub fn policy(&self) -> ExtentPolicy {
        self.policy
    }

    /// Current dimensions and scale.
    pub fn params(&self) -> GridMapParams {
        GridMapParams::new(self.width, self.height, self.scale)
    }

    /// World bounds of the current extent: (min_point, max_point).
    pub fn bounds(&self) -> (Point2D, Point2D) {
        let min = Point2D::new(
            -(self.center_x as f64) * self.scale,
            -(self.center_y as f64) * self.scale,
        );
        let max = Point2D::new(
            (self.width - self.center_x) as f64 * self.scale,
            (self.height - self.center_y) as f64 * self.scale,
        );
        (min, max)
    }

    // === Coordinate Conversion ===

    /// Cell containing the world point `(x, y)`.
    #[inline]
    pub fn world_to_cell(&self, x: f64, y: f64) -> DiscretePoint2D {
        DiscretePoint2D::new(discretize(x, self.scale), discretize(y, self.scale))
    }

    /// Cell reached by travelling `range` along `angle` from `(x, y)`.
    #[inline]
    pub fn world_to_cell_by_vec(&self, x: f64, y: f64, range: f64, angle: f64) -> DiscretePoint2D {
        self.world_to_cell(x + range * angle.cos(), y + range * angle.sin())
    }

    /// World coordinates of the cell center.
    #[inline]
    pub fn cell_to_world(&self, coord: DiscretePoint2D) -> Point2D {
        Point2D::new(
            (coord.x as f64 + 0.5) * self.scale,
            (coord.y as f64 + 0.5) * self.scale,
        )
    }

    /// Is the cell within the current extent?
    #[inline]
    pub fn has_cell(&self, coord: DiscretePoint2D) -> bool {
        self.storage_index(coord).is_some()
    }

    /// Flat storage index of a cell within the current extent.
    #[inline]
    fn storage_index(&self, coord: DiscretePoint2D) -> Option<usize> {
        let sx = coord.x as i64 + self.center_x as i64;
        let sy = coord.y as i64 + self.center_y as i64;
        if sx < 0 || sy < 0 || sx >= self.width as i64 || sy >= self.height as i64 {
            None
        } else {
            Some(sy as usize * self.width + sx as usize)
        }
    }

    fn out_of_bounds(&self, coord: DiscretePoint2D) -> Error {
        Error::OutOfBounds {
            coord,
            width: self.width,
            height: self.height,
        }
    }

    // === Cell Access ===

    /// Cell within the current extent, if any.
    #[inline]
    pub fn get(&self, coord: DiscretePoint2D) -> Option<&GridCell> {
        self.storage_index(coord).map(|i| &self.cells[i])
    }

    /// Cell at `coord`.
    ///
    /// Outside the extent: [`Error::OutOfBounds`] for a bounded map, the
    /// unknown prototype for an unbounded one.
    pub fn cell(&self, coord: DiscretePoint2D) -> Result<&GridCell> {
        match self.storage_index(coord) {
            Some(i) => Ok(&self.cells[i]),
            None => match self.policy {
                ExtentPolicy::Bounded => Err(self.out_of_bounds(coord)),
                ExtentPolicy::Unbounded => Ok(&self.prototype),
            },
        }
    }

    /// Value of the cell at `coord` (`-1` for unknown), see [`GridCell::value`].
    #[inline]
    pub fn cell_value(&self, coord: DiscretePoint2D) -> Result<f64> {
        self.cell(coord).map(GridCell::value)
    }

    /// Fuse an observation into the cell at `coord`.
    ///
    /// An unbounded map grows first; a bounded map rejects outside cells
    /// and is left untouched.
    pub fn update_cell(
        &mut self,
        coord: DiscretePoint2D,
        observation: &AreaOccupancyObservation,
    ) -> Result<()> {
        let i = self.ensure_index(coord)?;
        self.cells[i].observe(observation);
        Ok(())
    }

    /// Fuse an observation into the cell that owns `world_point`.
    pub fn cell_occupancy_update(
        &mut self,
        world_point: Point2D,
        observation: &AreaOccupancyObservation,
    ) -> Result<()> {
        let coord = self.world_to_cell(world_point.x, world_point.y);
        self.update_cell(coord, observation)
    }

    fn ensure_index(&mut self, coord: DiscretePoint2D) -> Result<usize> {
        if self.policy == ExtentPolicy::Unbounded {
            self.expand_to_include(coord);
        }
        self.storage_index(coord)
            .ok_or_else(|| self.out_of_bounds(coord))
    }

    /// Reset every cell to the prototype.
    pub fn clear(&mut self) {
        self.cells.fill(self.prototype);
    }

    // === Iterators ===

    /// Rows of cells, lowest `y` first.
    pub fn cells(&self) -> impl Iterator<Item = &[GridCell]> + '_ {
        self.cells.chunks(self.width)
    }

    /// Iterate over all stored cells with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (DiscretePoint2D, &GridCell)> + '_ {
        let (width, cx, cy) = (self.width, self.center_x as i32, self.center_y as i32);
        self.cells.iter().enumerate().map(move |(i, cell)| {
            let x = (i % width) as i32 - cx;
            let y = (i / width) as i32 - cy;
            (DiscretePoint2D::new(x, y), cell)
        })
    }

    // === Grid Expansion ===

    /// Grow an unbounded map until it stores `coord`.
    ///
    /// Every side that lacks room grows by the deficit rounded up to a power
    /// of two. Storage is reallocated and copied and the map center shifts by
    /// the cells prepended, so world coordinates of existing cells are kept.
    /// Returns false if nothing changed (cell already stored, or the map is
    /// bounded).
    pub fn expand_to_include(&mut self, coord: DiscretePoint2D) -> bool {
        if self.policy == ExtentPolicy::Bounded || self.has_cell(coord) {
            return false;
        }

        let sx = coord.x as i64 + self.center_x as i64;
        let sy = coord.y as i64 + self.center_y as i64;
        let (w, h) = (self.width as i64, self.height as i64);

        let grow = |deficit: i64| next_power_of(EXPANSION_BASE, deficit as usize);
        let expand_left = if sx < 0 { grow(-sx) } else { 0 };
        let expand_right = if sx >= w { grow(sx - w + 1) } else { 0 };
        let expand_down = if sy < 0 { grow(-sy) } else { 0 };
        let expand_up = if sy >= h { grow(sy - h + 1) } else { 0 };

        let new_width = self.width + expand_left + expand_right;
        let new_height = self.height + expand_down + expand_up;
        let mut new_cells = vec![self.prototype; new_width * new_height];

        for (y, row) in self.cells.chunks(self.width).enumerate() {
            let new_row_start = (y + expand_down) * new_width + expand_left;
            new_cells[new_row_start..new_row_start + self.width].copy_from_slice(row);
        }

        self.cells = new_cells;
        self.width = new_width;
        self.height = new_height;
        self.center_x += expand_left;
        self.center_y += expand_down;

        log::debug!(
            "Grid expanded to {}x{} for cell {} (center now {}, {})",
            self.width,
            self.height,
            coord,
            self.center_x,
            self.center_y
        );
        true
    }
}

impl Index<DiscretePoint2D> for GridMap {
    type Output = GridCell;

    /// # Panics
    /// If a bounded map does not contain `coord`.
    fn index(&self, coord: DiscretePoint2D) -> &GridCell {
        match self.cell(coord) {
            Ok(cell) => cell,
            Err(e) => panic!("{e}"),
        }
    }
}

impl IndexMut<DiscretePoint2D> for GridMap {
    /// Grows an unbounded map to include `coord`.
    ///
    /// # Panics
    /// If a bounded map does not contain `coord`.
    fn index_mut(&mut self, coord: DiscretePoint2D) -> &mut GridCell {
        match self.ensure_index(coord) {
            Ok(i) => &mut self.cells[i],
            Err(e) => panic!("{e}"),
        }
    }
}
