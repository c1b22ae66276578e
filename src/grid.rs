//! Dense occupancy grid that accelerates neighborhood collision checks.
//!
//! Cell size is tuned to the smallest allowed diameter so that each cell can
//! hold at most one accepted point; the search window is sized from the
//! largest diameter so bigger discs still see every occupant that could
//! collide with them.
use glam::Vec2;

pub(crate) struct OccupancyGrid {
    cell_size: f32,
    width: usize,
    height: usize,
    cells: Vec<Option<usize>>,
    search_depth: usize,
}

impl OccupancyGrid {
    pub fn new(region_extent: Vec2, min_diameter: f32, max_diameter: f32) -> Self {
        debug_assert!(min_diameter > 0.0 && max_diameter >= min_diameter);
        let cell_size = min_diameter / std::f32::consts::SQRT_2;
        let width = (region_extent.x / cell_size).ceil().max(1.0) as usize;
        let height = (region_extent.y / cell_size).ceil().max(1.0) as usize;
        let search_depth = (2.0 * max_diameter / cell_size).ceil() as usize;

        Self {
            cell_size,
            width,
            height,
            cells: vec![None; width * height],
            search_depth,
        }
    }

    /// Cell coordinates of a region-local position. Indices are clamped so the
    /// inclusive right/top borders map to the last row/column.
    #[inline]
    pub fn cell_of(&self, position: Vec2) -> (usize, usize) {
        let x = ((position.x / self.cell_size).floor() as isize)
            .clamp(0, self.width as isize - 1) as usize;
        let y = ((position.y / self.cell_size).floor() as isize)
            .clamp(0, self.height as isize - 1) as usize;
        (x, y)
    }

    /// Mark the cell under `position` as occupied by `point_index`.
    pub fn place(&mut self, position: Vec2, point_index: usize) {
        let (x, y) = self.cell_of(position);
        self.cells[y * self.width + x] = Some(point_index);
    }

    /// Occupant indices in the square window of `search_depth` cells around
    /// `position`, clamped to the grid, in row-major scan order.
    pub fn occupants_near(&self, position: Vec2) -> impl Iterator<Item = usize> + '_ {
        let (gx, gy) = self.cell_of(position);
        let start_x = gx.saturating_sub(self.search_depth);
        let end_x = (gx + self.search_depth + 1).min(self.width);
        let start_y = gy.saturating_sub(self.search_depth);
        let end_y = (gy + self.search_depth + 1).min(self.height);

        (start_y..end_y)
            .flat_map(move |y| (start_x..end_x).map(move |x| y * self.width + x))
            .filter_map(move |idx| self.cells[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_dimensions_follow_cell_size() {
        let grid = OccupancyGrid::new(Vec2::new(100.0, 50.0), 10.0, 10.0);
        let cell_size = 10.0 / std::f32::consts::SQRT_2;
        assert_eq!(grid.width, (100.0 / cell_size).ceil() as usize);
        assert_eq!(grid.height, (50.0 / cell_size).ceil() as usize);
        assert_eq!(grid.cells.len(), grid.width * grid.height);
    }

    #[test]
    fn search_depth_scales_with_max_diameter() {
        let grid = OccupancyGrid::new(Vec2::new(100.0, 100.0), 10.0, 10.0);
        // 2 * 10 / (10 / sqrt(2)) = 2 * sqrt(2) ~= 2.83, ceil -> 3
        assert_eq!(grid.search_depth, 3);

        let wide = OccupancyGrid::new(Vec2::new(100.0, 100.0), 1.0, 100.0);
        assert_eq!(wide.search_depth, (200.0f32 * std::f32::consts::SQRT_2).ceil() as usize);
    }

    #[test]
    fn cell_of_clamps_inclusive_borders() {
        let grid = OccupancyGrid::new(Vec2::new(100.0, 100.0), 10.0, 10.0);
        assert_eq!(grid.cell_of(Vec2::ZERO), (0, 0));
        let (x, y) = grid.cell_of(Vec2::new(100.0, 100.0));
        assert_eq!((x, y), (grid.width - 1, grid.height - 1));
    }

    #[test]
    fn placed_occupant_is_visible_through_window() {
        let mut grid = OccupancyGrid::new(Vec2::new(100.0, 100.0), 10.0, 10.0);
        grid.place(Vec2::new(50.0, 50.0), 7);

        let seen: Vec<usize> = grid.occupants_near(Vec2::new(55.0, 47.0)).collect();
        assert_eq!(seen, vec![7]);

        // Far corner lies outside the window.
        let far: Vec<usize> = grid.occupants_near(Vec2::new(2.0, 2.0)).collect();
        assert!(far.is_empty());
    }

    #[test]
    fn window_stays_inside_grid_near_corners() {
        let mut grid = OccupancyGrid::new(Vec2::new(30.0, 30.0), 10.0, 10.0);
        grid.place(Vec2::new(1.0, 1.0), 0);
        grid.place(Vec2::new(29.0, 29.0), 1);

        let near_origin: Vec<usize> = grid.occupants_near(Vec2::ZERO).collect();
        assert!(near_origin.contains(&0));

        let near_max: Vec<usize> = grid.occupants_near(Vec2::new(30.0, 30.0)).collect();
        assert!(near_max.contains(&1));
    }
}
