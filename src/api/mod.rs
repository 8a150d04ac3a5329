mod plot_builder;

pub use plot_builder::TikzPlotBuilder;
