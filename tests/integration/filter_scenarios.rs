use orgchart::filter::{
    classify, filter_forest, DepartmentFilter, FilterCriteria, FilteredNode, GradeFilter,
};
use orgchart::tree::Employee;

use super::support::fixture;

fn criteria(search: &str, department: &str, grade: &str) -> FilterCriteria {
    FilterCriteria::new(
        search,
        DepartmentFilter::parse(department),
        GradeFilter::parse(grade).unwrap(),
    )
}

fn names(nodes: &[FilteredNode]) -> Vec<&str> {
    nodes.iter().map(|n| n.name.as_str()).collect()
}

fn walk<'a>(nodes: &'a [FilteredNode], out: &mut Vec<&'a FilteredNode>) {
    for node in nodes {
        out.push(node);
        walk(&node.reports, out);
    }
}

#[test]
fn carol_and_dan_end_to_end() {
    let root = Employee::new("Carol", "Executive")
        .with_rating(4.5)
        .with_reports(vec![Employee::new("Dan", "Sales").with_rating(2.5)]);

    let forest = filter_forest(&[root], &criteria("dan", "All", "All")).unwrap();
    let json = serde_json::to_value(&forest).unwrap();

    assert_eq!(json[0]["name"], "Carol");
    assert_eq!(json[0]["isExactMatch"], false);
    assert_eq!(json[0]["isHighlighted"], false);
    assert_eq!(json[0]["reports"][0]["name"], "Dan");
    assert_eq!(json[0]["reports"][0]["isExactMatch"], true);
    assert_eq!(json[0]["reports"][0]["isHighlighted"], true);
    assert_eq!(json[0]["reports"][0]["reports"], serde_json::json!([]));
    assert_eq!(json.as_array().unwrap().len(), 1);
}

#[test]
fn deep_leaf_match_keeps_only_its_ancestor_chain() {
    let dataset = fixture();
    let forest = filter_forest(&dataset.employees, &criteria("priya", "All", "All")).unwrap();

    assert_eq!(names(&forest), vec!["Carol Reyes"]);
    let carol = &forest[0];
    assert_eq!(names(&carol.reports), vec!["Dan Okafor"]);
    let dan = &carol.reports[0];
    assert_eq!(names(&dan.reports), vec!["Alice Moreau"]);
    let alice = &dan.reports[0];
    assert_eq!(names(&alice.reports), vec!["Priya Natarajan"]);

    let priya = &alice.reports[0];
    assert!(priya.is_exact_match && priya.is_highlighted);
    assert_eq!(
        priya.key.as_str(),
        "Carol Reyes/Dan Okafor/Alice Moreau/Priya Natarajan"
    );
    for ancestor in [carol, dan, alice] {
        assert!(!ancestor.is_exact_match && !ancestor.is_highlighted);
    }
}

#[test]
fn department_and_grade_without_search_never_flag() {
    let dataset = fixture();
    let forest = filter_forest(&dataset.employees, &criteria("", "Sales", "A")).unwrap();

    let carol = &forest[0];
    // Executive passes the department check and is grade A itself.
    assert_eq!(names(&carol.reports), vec!["Dan Okafor"]);
    assert_eq!(names(&carol.reports[0].reports), vec!["Alice Moreau"]);
    assert!(carol.reports[0].reports[0].reports.is_empty());

    let mut all = Vec::new();
    walk(&forest, &mut all);
    assert!(all.iter().all(|n| !n.is_highlighted && !n.is_exact_match));
}

#[test]
fn highlighted_leaf_failing_grade_is_pruned() {
    let dataset = fixture();
    let forest = filter_forest(&dataset.employees, &criteria("al", "All", "A")).unwrap();

    let mut all = Vec::new();
    walk(&forest, &mut all);
    let survivors: Vec<&str> = all.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(
        survivors,
        vec!["Carol Reyes", "Dan Okafor", "Alice Moreau", "Sofia Alvarez"]
    );
    // Malik matches the name but is grade C with no surviving reports.
    assert!(!survivors.contains(&"Malik Hassan"));
    let sofia = all.iter().find(|n| n.name == "Sofia Alvarez").unwrap();
    assert!(sofia.is_exact_match);
    assert!(sofia.reports.is_empty());
}

#[test]
fn search_is_case_insensitive() {
    let dataset = fixture();
    let forest = filter_forest(&dataset.employees, &criteria("ALI", "all", "all")).unwrap();
    let mut all = Vec::new();
    walk(&forest, &mut all);
    let highlighted: Vec<&str> = all
        .iter()
        .filter(|n| n.is_highlighted)
        .map(|n| n.name.as_str())
        .collect();
    assert_eq!(highlighted, vec!["Alice Moreau", "Malik Hassan"]);
}

#[test]
fn lowercase_department_filter_matches() {
    let sam = Employee::new("Sam", "Sales").with_rating(3.0);
    let outcome = classify(&sam, &criteria("", "sales", "All")).unwrap();
    assert!(outcome.department_match);

    let ceo = Employee::new("Vera", "Executive").with_rating(3.0);
    assert!(classify(&ceo, &criteria("", "Sales", "All")).unwrap().department_match);
}

#[test]
fn repeated_passes_are_identical() {
    let dataset = fixture();
    let criteria = criteria("a", "Design", "B");
    let first = filter_forest(&dataset.employees, &criteria).unwrap();
    let second = filter_forest(&dataset.employees, &criteria).unwrap();
    assert_eq!(first, second);
}

#[test]
fn nothing_matches_gives_empty_forest() {
    let dataset = fixture();
    let forest = filter_forest(&dataset.employees, &criteria("nobody", "All", "All")).unwrap();
    assert!(forest.is_empty());
}
