use orgchart::dataset::{load_dataset, Dataset};
use std::path::PathBuf;

pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("org.json")
}

pub fn fixture() -> Dataset {
    load_dataset(&fixture_path()).unwrap()
}
