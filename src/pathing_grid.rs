use crate::error::GridError;
use crate::{C, N_SMALLVEC_SIZE};
use core::fmt;
use grid_util::grid::{BoolGrid, Grid};
use grid_util::point::Point;
use itertools::Itertools;
use num_traits::Zero;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// [PathingGrid] wraps the raw occupancy values in a [BoolGrid] where occupied cells are [true]
/// and maintains the 4-connected components of the free cells in a [UnionFind] structure.
#[derive(Clone, Debug)]
pub struct PathingGrid {
    pub grid: BoolGrid,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl Default for PathingGrid {
    fn default() -> PathingGrid {
        PathingGrid::new(0, 0)
    }
}

impl PathingGrid {
    /// Creates a fully open grid.
    pub fn new(width: usize, height: usize) -> PathingGrid {
        PathingGrid {
            grid: BoolGrid::new(width, height, false),
            components: UnionFind::new(width * height),
            components_dirty: true,
        }
    }

    /// Builds a grid from rows of cell values where zero is open and anything else is blocked.
    /// Row `y` holds the cells `(0, y)..(width, y)`. Components are generated before returning.
    pub fn from_rows<T, R>(rows: &[R]) -> Result<PathingGrid, GridError>
    where
        T: Zero,
        R: AsRef<[T]>,
    {
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        if let Some((row, cells)) = rows
            .iter()
            .map(AsRef::as_ref)
            .find_position(|cells| cells.len() != width)
        {
            return Err(GridError::Ragged {
                row,
                expected: width,
                found: cells.len(),
            });
        }
        let mut pathing_grid = PathingGrid::new(width, rows.len());
        for (y, cells) in rows.iter().enumerate() {
            for (x, value) in cells.as_ref().iter().enumerate() {
                if !value.is_zero() {
                    pathing_grid.grid.set(x, y, true);
                }
            }
        }
        pathing_grid.generate_components();
        Ok(pathing_grid)
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// A grid without rows or with zero-width rows, on which no search can expand anything.
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width() && (y as usize) < self.height()
    }

    /// True iff `(x, y)` lies on the grid and is not occupied.
    pub fn is_open(&self, x: i32, y: i32) -> bool {
        self.in_bounds(x, y) && !self.grid.get(x as usize, y as usize)
    }

    pub fn can_move_to(&self, pos: Point) -> bool {
        self.is_open(pos.x, pos.y)
    }

    /// True if the point lies on the grid or on the ring of cells just outside it, the only
    /// points that can have a neighbour on the grid.
    fn borders_grid(&self, point: &Point) -> bool {
        let (x, y) = (i64::from(point.x), i64::from(point.y));
        (-1..=self.width() as i64).contains(&x) && (-1..=self.height() as i64).contains(&y)
    }

    /// All four cardinal neighbours of a point in expansion order (east, south, west, north),
    /// whether walkable or not. Points that are not on the grid or next to it have no neighbours
    /// worth considering and yield none.
    pub fn neighborhood_points(&self, point: &Point) -> SmallVec<[Point; N_SMALLVEC_SIZE]> {
        if !self.borders_grid(point) {
            return SmallVec::new();
        }
        point.neumann_neighborhood().into_iter().collect()
    }

    /// Moves `point` onto the nearest point of the grid or of the ring of cells just outside it.
    /// For any cell on the grid the Manhattan distance to the clamped point never exceeds the
    /// distance to the original one and stays within the grid's extent.
    pub fn clamp_to_border(&self, point: Point) -> Point {
        let clamp = |v: i32, len: usize| i64::from(v).clamp(-1, len as i64) as i32;
        Point::new(clamp(point.x, self.width()), clamp(point.y, self.height()))
    }

    /// The walkable neighbours of a point in expansion order, paired with the unit move cost.
    pub fn neighborhood_points_and_cost(
        &self,
        pos: &Point,
    ) -> SmallVec<[(Point, i32); N_SMALLVEC_SIZE]> {
        self.neighborhood_points(pos)
            .into_iter()
            .filter(|p| self.can_move_to(*p))
            .map(|p| (p, C))
            .collect()
    }

    /// Checks that every cell of the path is walkable and that consecutive cells are
    /// 4-adjacent.
    pub fn is_walkable_path(&self, path: &[Point]) -> bool {
        path.iter().all(|p| self.can_move_to(*p)) && crate::path::is_contiguous(path)
    }

    fn get_ix_point(&self, point: &Point) -> usize {
        point.y as usize * self.width() + point.x as usize
    }

    /// Updates a position on the grid. Joins newly connected components and flags the components
    /// as dirty if components are (potentially) broken apart into multiple.
    /// Positions outside the grid are ignored.
    pub fn set_blocked(&mut self, p: Point, blocked: bool) {
        if !self.in_bounds(p.x, p.y) {
            return;
        }
        if blocked {
            if !self.grid.get(p.x as usize, p.y as usize) {
                self.components_dirty = true;
            }
        } else {
            let p_ix = self.get_ix_point(&p);
            for n in self.neighborhood_points(&p) {
                if self.can_move_to(n) {
                    self.components.union(p_ix, self.get_ix_point(&n));
                }
            }
        }
        self.grid.set(p.x as usize, p.y as usize, blocked);
    }

    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, point: &Point) -> usize {
        self.components.find(self.get_ix_point(point))
    }

    /// Checks if start and goal are open cells on the same component.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks if start and goal are not open cells on the same component.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        if self.can_move_to(*start) && self.can_move_to(*goal) {
            let start_ix = self.get_ix_point(start);
            let goal_ix = self.get_ix_point(goal);
            !self.components.equiv(start_ix, goal_ix)
        } else {
            true
        }
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up open cells with their open east and
    /// south neighbours.
    pub fn generate_components(&mut self) {
        let w = self.width();
        let h = self.height();
        self.components = UnionFind::new(w * h);
        self.components_dirty = false;
        for x in 0..w as i32 {
            for y in 0..h as i32 {
                let point = Point::new(x, y);
                if !self.can_move_to(point) {
                    continue;
                }
                let parent_ix = self.get_ix_point(&point);
                for p in [Point::new(x + 1, y), Point::new(x, y + 1)] {
                    if self.can_move_to(p) {
                        let ix = self.get_ix_point(&p);
                        self.components.union(parent_ix, ix);
                    }
                }
            }
        }
    }
}

impl fmt::Display for PathingGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Grid:")?;
        for y in 0..self.height() {
            let row = (0..self.width())
                .map(|x| if self.grid.get(x, y) { '#' } else { '.' })
                .collect::<String>();
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
