//! Translates a task filter into parameterized select and count statements.

use crate::domain::value_objects::{SqlParam, Statement, TaskFilter, TaskListQuery};

const SELECT_COLUMNS: &str = "SELECT id, title, description, status, due_date FROM task";
const COUNT_COLUMNS: &str = "SELECT COUNT(*) FROM task";
const ORDER_BY: &str = "ORDER BY due_date, id";

enum Segment {
    Sql(&'static str),
    Bind(SqlParam),
}

/// Collects predicates together with the values they bind.
///
/// Placeholders are numbered only when rendering, so any combination of
/// predicates yields `$1..$n` in the order the values appear.
#[derive(Default)]
pub struct PredicateBuilder {
    predicates: Vec<Vec<Segment>>,
}

impl PredicateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Predicate with no bound values
    pub fn raw(&mut self, sql: &'static str) -> &mut Self {
        self.predicates.push(vec![Segment::Sql(sql)]);
        self
    }

    /// `{column} = $n`
    pub fn equals(&mut self, column: &'static str, value: SqlParam) -> &mut Self {
        self.predicates.push(vec![
            Segment::Sql(column),
            Segment::Sql(" = "),
            Segment::Bind(value),
        ]);
        self
    }

    /// `({a} ILIKE $n OR {b} ILIKE $m)`, each side binding `pattern`
    pub fn any_ilike(&mut self, columns: &[&'static str], pattern: &str) -> &mut Self {
        let mut segments = vec![Segment::Sql("(")];
        for (i, column) in columns.iter().enumerate() {
            if i > 0 {
                segments.push(Segment::Sql(" OR "));
            }
            segments.push(Segment::Sql(*column));
            segments.push(Segment::Sql(" ILIKE "));
            segments.push(Segment::Bind(SqlParam::Text(pattern.to_string())));
        }
        segments.push(Segment::Sql(")"));
        self.predicates.push(segments);
        self
    }

    /// Render the `AND`-joined predicates and their values in placeholder order
    pub fn render(&self) -> (String, Vec<SqlParam>) {
        let mut params = Vec::new();
        let clauses: Vec<String> = self
            .predicates
            .iter()
            .map(|segments| {
                let mut clause = String::new();
                for segment in segments {
                    match segment {
                        Segment::Sql(sql) => clause.push_str(sql),
                        Segment::Bind(value) => {
                            params.push(value.clone());
                            clause.push('$');
                            clause.push_str(&params.len().to_string());
                        }
                    }
                }
                clause
            })
            .collect();

        (clauses.join(" AND "), params)
    }
}

/// Escape `%`, `_` and `\` so a search term matches literally inside `ILIKE`
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Builds list statements for the `task` table
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskQueryPlanner;

impl TaskQueryPlanner {
    pub fn new() -> Self {
        Self
    }

    /// Plan the select and count statements for `filter`.
    ///
    /// Soft-deleted rows are always excluded. Both statements share the same
    /// predicates and arguments; the select adds `LIMIT`/`OFFSET`.
    pub fn plan(&self, filter: &TaskFilter) -> TaskListQuery {
        let filter = filter.normalize();
        let pagination = filter.pagination();

        let mut builder = PredicateBuilder::new();
        builder.raw("deleted_at IS NULL");
        if let Some(status) = &filter.status {
            builder.equals("status", SqlParam::Text(status.clone()));
        }
        if let Some(search) = &filter.search {
            let pattern = format!("%{}%", escape_like(search));
            builder.any_ilike(&["title", "description"], &pattern);
        }
        let (predicates, params) = builder.render();

        let count = Statement {
            sql: format!("{} WHERE {}", COUNT_COLUMNS, predicates),
            params: params.clone(),
        };

        let mut select_params = params;
        select_params.push(SqlParam::Int(i64::from(pagination.limit())));
        select_params.push(SqlParam::Int(
            i64::try_from(pagination.offset()).unwrap_or(i64::MAX),
        ));
        let select = Statement {
            sql: format!(
                "{} WHERE {} {} LIMIT ${} OFFSET ${}",
                SELECT_COLUMNS,
                predicates,
                ORDER_BY,
                select_params.len() - 1,
                select_params.len()
            ),
            params: select_params,
        };

        TaskListQuery {
            filter,
            select,
            count,
        }
    }
}
