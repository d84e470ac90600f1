use orgchart::filter::{classify, filter_forest, DepartmentFilter, FilterCriteria, FilteredNode, GradeFilter};
use orgchart::tree::Employee;
use proptest::prelude::*;

fn employee_strategy() -> impl Strategy<Value = Employee> {
    let names = prop::sample::select(vec!["Ann", "Bob", "Carla", "Dana", "Eli", "Ana Lee"]);
    let departments = prop::sample::select(vec!["Executive", "Sales", "Design", "Operations"]);

    let leaf = (names.clone(), departments.clone(), -1.0f64..5.5)
        .prop_map(|(name, dept, rating)| Employee::new(name, dept).with_rating(rating));
    leaf.prop_recursive(4, 40, 4, move |inner| {
        (
            names.clone(),
            departments.clone(),
            -1.0f64..5.5,
            prop::collection::vec(inner, 0..4),
        )
            .prop_map(|(name, dept, rating, reports)| {
                Employee::new(name, dept)
                    .with_rating(rating)
                    .with_reports(reports)
            })
    })
}

fn criteria_strategy() -> impl Strategy<Value = FilterCriteria> {
    (
        prop::sample::select(vec!["", "a", "AN", "bo", "zz", " "]),
        prop::sample::select(vec!["All", "Sales", "design", "Executive"]),
        prop::sample::select(vec!["All", "A", "B", "C", "D"]),
    )
        .prop_map(|(search, department, grade)| {
            FilterCriteria::new(
                search,
                DepartmentFilter::parse(department),
                GradeFilter::parse(grade).unwrap(),
            )
        })
}

/// Straightforward recursive statement of the survival rule: (name, children).
#[derive(Debug, PartialEq)]
struct Shape(String, Vec<Shape>);

fn expected(node: &Employee, criteria: &FilterCriteria) -> Option<Shape> {
    let children: Vec<Shape> = node
        .reports
        .iter()
        .filter_map(|child| expected(child, criteria))
        .collect();
    let is_match = classify(node, criteria).unwrap().is_match();
    (is_match || !children.is_empty()).then(|| Shape(node.name.clone(), children))
}

fn shape(node: &FilteredNode) -> Shape {
    Shape(node.name.clone(), node.reports.iter().map(shape).collect())
}

fn any_flag(node: &FilteredNode) -> bool {
    node.is_highlighted || node.is_exact_match || node.reports.iter().any(any_flag)
}

proptest! {
    #[test]
    fn survivors_follow_inductive_rule(
        roots in prop::collection::vec(employee_strategy(), 0..3),
        criteria in criteria_strategy(),
    ) {
        let forest = filter_forest(&roots, &criteria).unwrap();
        let actual: Vec<Shape> = forest.iter().map(shape).collect();
        let wanted: Vec<Shape> = roots.iter().filter_map(|r| expected(r, &criteria)).collect();
        prop_assert_eq!(actual, wanted);
    }

    #[test]
    fn empty_search_never_flags(
        roots in prop::collection::vec(employee_strategy(), 0..3),
        criteria in criteria_strategy(),
    ) {
        let mut criteria = criteria;
        criteria.search_term.clear();
        let forest = filter_forest(&roots, &criteria).unwrap();
        prop_assert!(!forest.iter().any(any_flag));
    }

    #[test]
    fn filtering_is_idempotent(
        roots in prop::collection::vec(employee_strategy(), 0..3),
        criteria in criteria_strategy(),
    ) {
        let first = filter_forest(&roots, &criteria).unwrap();
        let second = filter_forest(&roots, &criteria).unwrap();
        prop_assert_eq!(first, second);
    }
}
