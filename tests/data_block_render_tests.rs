use indexmap::IndexMap;
use tikzplot_rs::{Dataset, TikzPlotBuilder};

fn sigma_call_dataset() -> Dataset {
    let mut columns = IndexMap::new();
    columns.insert("sigma".to_owned(), vec![0.1, 0.2, 0.3]);
    columns.insert("callFD".to_owned(), vec![0.01, 0.02, 0.03]);
    Dataset::from_columns(columns)
}

#[test]
fn data_block_matches_expected_listing() {
    let builder = TikzPlotBuilder::new(sigma_call_dataset(), "temp_data.txt");
    let block = builder.render_data_block();

    assert_eq!(
        block,
        "\\begin{filecontents*}{temp_data.txt}\n\
         sigma callFD\n\
         0.1 0.01\n\
         0.2 0.02\n\
         0.3 0.03\n\
         \\end{filecontents*}\n"
    );
}

#[test]
fn data_block_has_header_plus_one_line_per_row() {
    let builder = TikzPlotBuilder::new(sigma_call_dataset(), "temp_data.txt");
    let block = builder.render_data_block();

    let inner: Vec<&str> = block
        .lines()
        .filter(|line| !line.starts_with('\\') && !line.is_empty())
        .collect();
    assert_eq!(inner.len(), 4);
    assert_eq!(inner[0].split(' ').count(), 2);
    assert_eq!(inner[0], "sigma callFD");
}

#[test]
fn data_lines_round_trip_through_space_split() {
    let builder = TikzPlotBuilder::new(sigma_call_dataset(), "temp_data.txt");
    let block = builder.render_data_block();

    for line in block.lines().filter(|line| !line.starts_with('\\')) {
        let rejoined = line.split(' ').collect::<Vec<_>>().join(" ");
        assert_eq!(rejoined, line);
    }
}

#[test]
fn whole_numbers_print_without_fraction() {
    let mut columns = IndexMap::new();
    columns.insert("strike".to_owned(), vec![40.0, 40.0]);
    columns.insert("sigma".to_owned(), vec![0.5, 1.0]);
    let builder = TikzPlotBuilder::new(Dataset::from_columns(columns), "temp_data.txt");
    let block = builder.render_data_block();

    assert!(block.contains("40 0.5\n"));
    assert!(block.contains("40 1\n"));
    assert!(!block.contains("40.0"));
}

#[test]
fn empty_dataset_renders_header_only() {
    let mut columns = IndexMap::new();
    columns.insert("sigma".to_owned(), Vec::new());
    columns.insert("callFD".to_owned(), Vec::new());
    let builder = TikzPlotBuilder::new(Dataset::from_columns(columns), "temp_data.txt");
    let block = builder.render_data_block();

    assert_eq!(
        block,
        "\\begin{filecontents*}{temp_data.txt}\n\
         sigma callFD\n\
         \\end{filecontents*}\n"
    );
}
