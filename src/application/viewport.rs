/// Viewport fits the grid into the drawable area and maps between
/// screen pixels and grid cells.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub offset_x: f32,
    pub offset_y: f32,
    pub cell_size: f32,
}

impl Viewport {
    /// Largest square cell size that shows the whole grid, centred in the area
    pub fn fit(area_width: f32, area_height: f32, size_x: usize, size_y: usize) -> Self {
        let cell_size = (area_width / size_x.max(1) as f32)
            .min(area_height / size_y.max(1) as f32)
            .max(1.0);
        Self {
            offset_x: ((area_width - cell_size * size_x as f32) / 2.0).max(0.0),
            offset_y: ((area_height - cell_size * size_y as f32) / 2.0).max(0.0),
            cell_size,
        }
    }

    /// Cell under a screen position, if any
    pub fn screen_to_cell(&self, screen_x: f32, screen_y: f32, size_x: usize, size_y: usize) -> Option<(usize, usize)> {
        let gx = ((screen_x - self.offset_x) / self.cell_size).floor();
        let gy = ((screen_y - self.offset_y) / self.cell_size).floor();
        if gx < 0.0 || gy < 0.0 {
            return None;
        }
        let (x, y) = (gx as usize, gy as usize);
        (x < size_x && y < size_y).then_some((x, y))
    }

    /// Top-left screen corner of a cell
    pub fn cell_to_screen(&self, x: usize, y: usize) -> (f32, f32) {
        (
            x as f32 * self.cell_size + self.offset_x,
            y as f32 * self.cell_size + self.offset_y,
        )
    }
}
