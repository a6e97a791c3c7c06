//! Unit tests for the list query planner

use crate::domain::value_objects::{SqlParam, TaskFilter};
use crate::services::task::{escape_like, PredicateBuilder, TaskQueryPlanner};

fn placeholder_count(sql: &str) -> usize {
    sql.matches('$').count()
}

#[test]
fn test_plan_without_filters() {
    let query = TaskQueryPlanner::new().plan(&TaskFilter::default());

    assert_eq!(
        query.select.sql,
        "SELECT id, title, description, status, due_date FROM task WHERE deleted_at IS NULL ORDER BY due_date, id LIMIT $1 OFFSET $2"
    );
    assert_eq!(query.select.params, vec![SqlParam::Int(10), SqlParam::Int(0)]);
    assert_eq!(query.count.sql, "SELECT COUNT(*) FROM task WHERE deleted_at IS NULL");
    assert!(query.count.params.is_empty());
}

#[test]
fn test_plan_with_status_only() {
    let filter = TaskFilter::default().with_status("done").with_page(3, 5);
    let query = TaskQueryPlanner::new().plan(&filter);

    assert_eq!(
        query.select.sql,
        "SELECT id, title, description, status, due_date FROM task WHERE deleted_at IS NULL AND status = $1 ORDER BY due_date, id LIMIT $2 OFFSET $3"
    );
    assert_eq!(
        query.select.params,
        vec![SqlParam::Text("done".into()), SqlParam::Int(5), SqlParam::Int(10)]
    );
    assert_eq!(
        query.count.sql,
        "SELECT COUNT(*) FROM task WHERE deleted_at IS NULL AND status = $1"
    );
    assert_eq!(query.count.params, vec![SqlParam::Text("done".into())]);
}

#[test]
fn test_plan_with_search_only() {
    let query = TaskQueryPlanner::new().plan(&TaskFilter::default().with_search("tes"));

    assert_eq!(
        query.count.sql,
        "SELECT COUNT(*) FROM task WHERE deleted_at IS NULL AND (title ILIKE $1 OR description ILIKE $2)"
    );
    assert_eq!(
        query.count.params,
        vec![SqlParam::Text("%tes%".into()), SqlParam::Text("%tes%".into())]
    );
    assert!(query.select.sql.ends_with("LIMIT $3 OFFSET $4"));
}

#[test]
fn test_plan_with_status_and_search() {
    let filter = TaskFilter::default().with_status("pending").with_search("tes");
    let query = TaskQueryPlanner::new().plan(&filter);

    assert_eq!(
        query.select.sql,
        "SELECT id, title, description, status, due_date FROM task WHERE deleted_at IS NULL AND status = $1 AND (title ILIKE $2 OR description ILIKE $3) ORDER BY due_date, id LIMIT $4 OFFSET $5"
    );
    assert_eq!(query.select.arity(), 5);
    assert_eq!(query.count.arity(), 3);
    assert_eq!(query.count.params[..], query.select.params[..3]);
}

#[test]
fn test_placeholders_match_arguments_for_every_combination() {
    let planner = TaskQueryPlanner::new();
    let statuses = [None, Some("done")];
    let searches = [None, Some("tes")];

    for status in statuses {
        for search in searches {
            let filter = TaskFilter {
                status: status.map(String::from),
                search: search.map(String::from),
                page: 2,
                page_size: 7,
            };
            let query = planner.plan(&filter);

            assert_eq!(placeholder_count(&query.select.sql), query.select.arity());
            assert_eq!(placeholder_count(&query.count.sql), query.count.arity());
            assert!(query.count.sql.contains("deleted_at IS NULL"));
        }
    }
}

#[test]
fn test_empty_filters_are_ignored() {
    let filter = TaskFilter {
        status: Some(String::new()),
        search: Some(String::new()),
        page: 0,
        page_size: 0,
    };
    let query = TaskQueryPlanner::new().plan(&filter);

    assert_eq!(query.filter, TaskFilter::default());
    assert_eq!(query.count.sql, "SELECT COUNT(*) FROM task WHERE deleted_at IS NULL");
}

#[test]
fn test_search_wildcards_are_escaped() {
    assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");

    let query = TaskQueryPlanner::new().plan(&TaskFilter::default().with_search("100%"));
    assert_eq!(query.count.params[0], SqlParam::Text("%100\\%%".into()));
}

#[test]
fn test_predicate_builder_numbers_in_order() {
    let mut builder = PredicateBuilder::new();
    builder
        .equals("a", SqlParam::Int(1))
        .raw("b IS NULL")
        .any_ilike(&["c", "d", "e"], "%x%");
    let (sql, params) = builder.render();

    assert_eq!(
        sql,
        "a = $1 AND b IS NULL AND (c ILIKE $2 OR d ILIKE $3 OR e ILIKE $4)"
    );
    assert_eq!(params.len(), 4);
}
