mod day_cell;
mod day_grid;
mod palette;

pub(crate) use day_grid::render_day_grid;
pub(crate) use palette::DayCellPalette;
