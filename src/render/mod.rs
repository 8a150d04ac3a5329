mod chart_block;
mod data_block;

pub use chart_block::render_chart_block;
pub use data_block::render_data_block;
