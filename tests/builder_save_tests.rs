use std::fs;
use std::path::PathBuf;

use indexmap::IndexMap;
use tikzplot_rs::{Dataset, PlotError, SeriesSpec, TikzPlotBuilder};

fn builder() -> TikzPlotBuilder {
    let mut columns = IndexMap::new();
    columns.insert("sigma".to_owned(), vec![0.1, 0.2, 0.3]);
    columns.insert("callFD".to_owned(), vec![0.01, 0.02, 0.03]);
    let mut builder = TikzPlotBuilder::new(Dataset::from_columns(columns), "temp_data.txt");
    builder.set_title("Test Plot");
    builder.add_series(SeriesSpec::new("sigma", "callFD", "CallFD"));
    builder
}

fn temp_destination(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!("tikzplot_{tag}_{}.tex", std::process::id()))
}

#[test]
fn save_writes_both_blocks_to_destination() {
    let destination = temp_destination("save_blocks");
    builder().save(&destination).expect("save");

    let content = fs::read_to_string(&destination).expect("read back");
    assert!(content.contains("\\begin{filecontents*}"));
    assert!(content.contains("\\begin{tikzpicture}"));

    fs::remove_file(&destination).expect("cleanup");
}

#[test]
fn save_writes_build_output_verbatim() {
    let destination = temp_destination("save_verbatim");
    let builder = builder();
    builder.save(&destination).expect("save");

    let content = fs::read_to_string(&destination).expect("read back");
    assert_eq!(content, builder.build().expect("build"));

    fs::remove_file(&destination).expect("cleanup");
}

#[test]
fn failed_save_surfaces_write_error_and_is_retryable() {
    let bad_destination = std::env::temp_dir()
        .join("tikzplot_no_such_dir")
        .join("plot.tex");
    let builder = builder();

    let err = builder.save(&bad_destination).expect_err("missing parent dir");
    assert!(matches!(err, PlotError::DestinationWrite { .. }));

    // Builder state is unaffected, retry to a valid path succeeds.
    let destination = temp_destination("save_retry");
    builder.save(&destination).expect("retry");
    fs::remove_file(&destination).expect("cleanup");
}
