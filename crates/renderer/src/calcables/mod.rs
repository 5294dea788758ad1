pub mod min_max;

pub use min_max::{normalize, resolve_bounds, row_height, scaled_position, series_max, series_min};
