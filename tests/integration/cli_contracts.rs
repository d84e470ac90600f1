use std::fs;

use orgchart::config::ConfigLoader;
use orgchart::error::ChartError;
use orgchart::tooling::cli::{CliContext, Commands};
use tempfile::TempDir;

use super::support::fixture_path;

fn show(search: &str, department: &str, grade: &str, format: &str) -> Commands {
    Commands::Show {
        search: search.to_string(),
        department: department.to_string(),
        grade: grade.to_string(),
        expand: Vec::new(),
        collapse: Vec::new(),
        format: format.to_string(),
    }
}

fn context() -> CliContext {
    let mut context = CliContext::with_config(ConfigLoader::default(), Some(fixture_path()));
    context.set_color(false);
    context
}

#[test]
fn show_text_renders_summary_and_tree() {
    let output = context().execute(&show("alice", "All", "All", "text")).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(
        lines[0],
        "Search: \"alice\"  Department: All  Grade: All  Zoom: 60%"
    );
    assert!(lines[2].contains("Carol Reyes"));
    assert!(output.contains("Alice Moreau [match]"));
    assert!(!output.contains("Mei Lin"));
}

#[test]
fn show_json_emits_filtered_forest() {
    let output = context().execute(&show("tomas", "sales", "C", "json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    let dan = &value[0]["reports"][0];
    assert_eq!(dan["name"], "Dan Okafor");
    assert_eq!(dan["reports"][0]["name"], "Tomas Berg");
    assert_eq!(dan["reports"][0]["isExactMatch"], true);
    assert_eq!(dan["reports"][0]["key"], "Carol Reyes/Dan Okafor/Tomas Berg");
}

#[test]
fn show_expand_and_collapse_flags() {
    let command = Commands::Show {
        search: String::new(),
        department: "All".to_string(),
        grade: "All".to_string(),
        expand: vec!["Dan Okafor".to_string()],
        collapse: vec!["Sofia Alvarez".to_string()],
        format: "text".to_string(),
    };
    let output = context().execute(&command).unwrap();
    assert!(output.contains("Alice Moreau"));
    assert!(output.contains("Tomas Berg"));
    assert!(!output.contains("Malik Hassan"));
}

#[test]
fn show_rejects_bad_inputs() {
    let err = context().execute(&show("", "Legal", "All", "text")).unwrap_err();
    assert!(matches!(err, ChartError::InvalidFilter(_)));

    let err = context().execute(&show("", "All", "F", "text")).unwrap_err();
    assert!(matches!(err, ChartError::InvalidFilter(_)));

    let err = context().execute(&show("", "All", "All", "xml")).unwrap_err();
    assert!(matches!(err, ChartError::InvalidFilter(_)));
}

#[test]
fn missing_rating_surfaces_when_grade_filtered() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("org.json");
    fs::write(
        &data,
        r#"{"employees":[{"name":"Ada","department":"Executive","reports":[{"name":"Ben","department":"Sales","metrics":{"rating":3.1}}]}]}"#,
    )
    .unwrap();
    let context = CliContext::with_config(ConfigLoader::default(), Some(data));

    assert!(context.execute(&show("", "All", "All", "text")).is_ok());
    let err = context.execute(&show("", "All", "B", "text")).unwrap_err();
    assert!(matches!(
        err,
        ChartError::MissingRating { ref name, ref key } if name == "Ada" && key.as_str() == "Ada"
    ));
}

#[test]
fn workspace_config_supplies_dataset_and_zoom() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("orgchart.toml"),
        format!(
            "dataset = {:?}\n\n[view]\nzoom_percent = 100\ncolor = false\n",
            fixture_path().display().to_string()
        ),
    )
    .unwrap();

    let context = CliContext::new(temp.path().to_path_buf(), None, None).unwrap();
    assert_eq!(context.config().view.zoom_percent, 100);
    let output = context.execute(&show("", "All", "All", "text")).unwrap();
    assert!(output.starts_with("Search: -  Department: All  Grade: All  Zoom: 100%"));
    // One tree level indents four columns at 100%.
    assert!(output.contains("\n    \u{25b8} (2) Dan Okafor"));
}

#[test]
fn explicit_config_file_and_departments_list() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("custom.toml");
    fs::write(
        &config_path,
        "departments = [\"Executive\", \"Sales\", \"Legal\"]\n",
    )
    .unwrap();

    let context =
        CliContext::new(temp.path().to_path_buf(), Some(config_path), Some(fixture_path()))
            .unwrap();
    assert!(context.execute(&show("", "Legal", "All", "text")).is_ok());
    assert!(context.execute(&show("", "Design", "All", "text")).is_err());

    let rendered = context.execute(&Commands::Config).unwrap();
    assert!(rendered.contains("Legal"));
    assert!(rendered.contains("[view]"));
}

#[test]
fn missing_config_file_is_error() {
    let temp = TempDir::new().unwrap();
    let result = CliContext::new(
        temp.path().to_path_buf(),
        Some(temp.path().join("absent.toml")),
        None,
    );
    assert!(result.is_err());
}

#[test]
fn departments_and_grades_tables() {
    let context = context();
    let departments = context.execute(&Commands::Departments).unwrap();
    assert!(departments.contains("Sales"));
    assert!(departments.contains("Total: 9 employees in 4 departments."));

    let grades = context.execute(&Commands::Grades).unwrap();
    assert!(grades.contains("[4.0, +inf)"));

    let grade = context.execute(&Commands::Grade { rating: 3.999 }).unwrap();
    assert_eq!(grade, "3.999 -> grade B");
}
