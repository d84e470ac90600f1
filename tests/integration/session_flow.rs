use orgchart::error::ChartError;
use orgchart::session::ChartSession;
use orgchart::tooling::browse::{render_screen, BrowseCommand, BrowseOutcome};
use orgchart::views::{ExpansionState, RowStyle};

use super::support::fixture;

fn visible(session: &ChartSession) -> Vec<String> {
    session.rows().into_iter().map(|row| row.name).collect()
}

#[test]
fn initial_view_shows_root_and_direct_reports() {
    let session = ChartSession::new(fixture()).unwrap();
    assert_eq!(
        visible(&session),
        vec!["Carol Reyes", "Dan Okafor", "Mei Lin", "Sofia Alvarez"]
    );
}

#[test]
fn active_search_expands_paths_to_matches() {
    let mut session = ChartSession::new(fixture()).unwrap();
    session.set_search_term("jonas").unwrap();
    let rows = session.rows();
    let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Carol Reyes", "Mei Lin", "Jonas Weber"]);
    assert_eq!(rows[2].style, RowStyle::ExactMatch);
}

#[test]
fn exact_matches_render_before_other_children() {
    let mut session = ChartSession::new(fixture()).unwrap();
    // Sofia matches directly; Dan survives only through Alice.
    session.set_search_term("a").unwrap();
    session.set_grade_filter("A").unwrap();
    let rows = session.rows();
    let level_one: Vec<&str> = rows
        .iter()
        .filter(|r| r.depth == 1)
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(level_one, vec!["Sofia Alvarez", "Dan Okafor"]);
}

#[test]
fn user_choice_outlives_filter_changes() {
    let mut session = ChartSession::new(fixture()).unwrap();
    let (key, expanded) = session.toggle("Mei Lin").unwrap();
    assert!(expanded);
    assert_eq!(key.as_str(), "Carol Reyes/Mei Lin");

    session.set_department_filter("Design").unwrap();
    session.set_department_filter("All").unwrap();
    assert_eq!(
        session.expansion().state(&key),
        ExpansionState::ExpandedByUser
    );
    assert!(visible(&session).contains(&"Jonas Weber".to_string()));

    // Collapsing wins over the search default.
    session.toggle("Mei Lin").unwrap();
    session.set_search_term("jonas").unwrap();
    assert_eq!(visible(&session), vec!["Carol Reyes", "Mei Lin"]);
}

#[test]
fn grade_filter_and_reset() {
    let mut session = ChartSession::new(fixture()).unwrap();
    session.set_grade_filter("D").unwrap();
    assert!(!session.is_empty());
    session.set_search_term("nobody").unwrap();
    assert!(session.is_empty());
    assert!(render_screen(&session, false).contains("No results found"));

    session.reset_filters().unwrap();
    assert_eq!(visible(&session).len(), 4);
}

#[test]
fn ambiguous_name_is_reported() {
    let mut dataset = fixture();
    let mut twin = dataset.employees[0].clone();
    twin.reports.clear();
    dataset.employees.push(twin);

    let session = ChartSession::new(dataset).unwrap();
    let err = session.resolve("carol reyes").unwrap_err();
    // Both roots share the path key "Carol Reyes"; the key resolves first.
    assert!(session.resolve("Carol Reyes").is_ok());
    assert!(matches!(err, ChartError::AmbiguousNode { .. }));
}

#[test]
fn browse_commands_drive_session() {
    let mut session = ChartSession::new(fixture()).unwrap();
    for line in ["dept sales", "grade b", "/o"] {
        let outcome = BrowseCommand::parse(line)
            .unwrap()
            .apply(&mut session)
            .unwrap();
        assert_eq!(outcome, BrowseOutcome::Redraw(None));
    }
    assert_eq!(
        session.criteria().to_string(),
        "search=\"o\" department=sales grade=B"
    );
    assert_eq!(visible(&session), vec!["Carol Reyes", "Dan Okafor"]);

    assert!(BrowseCommand::parse("dept Legal")
        .unwrap()
        .apply(&mut session)
        .is_err());
    assert_eq!(
        BrowseCommand::parse("quit").unwrap().apply(&mut session).unwrap(),
        BrowseOutcome::Quit
    );
}
