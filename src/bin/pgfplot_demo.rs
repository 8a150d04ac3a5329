//! End-to-end demo: generates two plotting documents, one from a columnar
//! table and one from a flat row-major array.

use tikzplot_rs::{Dataset, PlotResult, SeriesSpec, Table, TikzPlotBuilder};

fn main() -> PlotResult<()> {
    let _ = tikzplot_rs::telemetry::init_default_tracing();

    table_example()?;
    array_example()?;
    Ok(())
}

fn table_example() -> PlotResult<()> {
    let n = 100;
    let sigma: Vec<f64> = linspace(0.1, 1.0, n);
    let table = Table::new()
        .with_column("strike", vec![40.0; n])
        .with_column("sigma", sigma.clone())
        .with_column("callFD", sigma.iter().map(|s| s.sin() * 10.0).collect())
        .with_column("putFD", sigma.iter().map(|s| s.cos() * 10.0).collect());

    let mut builder = TikzPlotBuilder::new(Dataset::from_table(table), "table_data.txt");
    builder.set_title("Finite-Difference Prices");
    builder.set_labels("{$\\sigma$}", "{Price}");
    builder.set_legend_pos("north west");
    builder.set_grid("grid", "major");
    builder.set_figsize("12cm", "8cm");
    builder.set_xmin("0");
    builder.set_xmax("1.1");

    builder.add_series(
        SeriesSpec::new("sigma", "callFD", "CallFD")
            .with_comment("Crank-Nicolson call price")
            .with_option("mark", "o")
            .with_option("thick", true)
            .with_option("mark size", "2pt"),
    );
    builder.add_series(
        SeriesSpec::new("sigma", "putFD", "PutFD")
            .with_comment("Crank-Nicolson put price")
            .with_option("mark", "square*")
            .with_option("color", "blue!50!black")
            .with_option("thick", true)
            .with_option("mark size", "2pt"),
    );
    builder.save("table_plot.tex")
}

fn array_example() -> PlotResult<()> {
    let n = 200;
    let sigma: Vec<f64> = linspace(0.1, 1.0, n);
    let mut values = Vec::with_capacity(n * 3);
    for s in &sigma {
        values.extend_from_slice(&[*s, (s + 1.0).ln() * 10.0, s.sqrt() * 10.0]);
    }
    let header = vec!["sigma".to_owned(), "callMC".to_owned(), "putMC".to_owned()];
    let dataset = Dataset::from_array(values, 3, Some(header))?;

    let mut builder = TikzPlotBuilder::new(dataset, "array_data.txt");
    builder.set_title("Monte Carlo Prices");
    builder.set_labels("{$\\sigma$}", "{Price}");
    builder.set_legend_pos("north west");
    builder.set_grid("grid", "major");
    builder.set_figsize("12cm", "8cm");

    builder.add_series(
        SeriesSpec::new("sigma", "callMC", "CallMC")
            .with_comment("Monte Carlo call price")
            .with_option("mark", "+")
            .with_option("color", "red")
            .with_option("thick", true),
    );
    builder.add_series(
        SeriesSpec::new("sigma", "putMC", "PutMC")
            .with_comment("Monte Carlo put price")
            .with_option("mark", "triangle*")
            .with_option("color", "green")
            .with_option("thick", true),
    );
    builder.save("array_plot.tex")
}

fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    if count < 2 {
        return vec![start];
    }
    let step = (end - start) / (count - 1) as f64;
    (0..count).map(|i| start + step * i as f64).collect()
}
