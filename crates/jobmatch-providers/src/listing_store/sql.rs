//! SQL rendering of predicate sets and ranking plans
//!
//! Count and page statements share one WHERE clause and one parameter prefix,
//! both rendered from the same [`PredicateSet`]. Parameters used only by the
//! page (query vector, limit, offset) are numbered after the shared ones, so
//! the count statement binds exactly the shared prefix.

use jobmatch_domain::value_objects::{
    FeatureVector, Pagination, PredicateClause, PredicateSet, RankingPlan,
};

/// Bound parameter of a rendered statement
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    /// `text[]`
    TextArray(Vec<String>),
    /// `text`
    Text(String),
    /// `bigint`
    BigInt(i64),
}

/// SQL text plus positional parameters
#[derive(Debug, Clone, PartialEq)]
pub struct SqlStatement {
    /// Statement text using `$n` placeholders
    pub sql: String,
    /// Parameters in placeholder order
    pub params: Vec<SqlParam>,
}

/// Count and page statements of one search
#[derive(Debug, Clone, PartialEq)]
pub struct SearchStatements {
    /// `SELECT COUNT(*) ...`
    pub count: SqlStatement,
    /// `SELECT ... ORDER BY ... LIMIT ... OFFSET ...`
    pub page: SqlStatement,
}

/// Columns selected by page statements
const PAGE_COLUMNS: &str = "id::text AS id, title, description, skills, company, location, \
     salary_min::bigint AS salary_min, salary_max::bigint AS salary_max, created_at, updated_at";

struct WhereClause {
    sql: String,
    params: Vec<SqlParam>,
}

/// Escape LIKE wildcards so a location is matched literally
pub fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len() + 2);
    for c in value.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// pgvector text literal of a feature vector
pub fn vector_literal(vector: &FeatureVector) -> String {
    let values: Vec<String> = vector.as_slice().iter().map(ToString::to_string).collect();
    format!("[{}]", values.join(","))
}

fn render_where(predicates: &PredicateSet) -> WhereClause {
    let mut conditions = Vec::with_capacity(predicates.len());
    let mut params = Vec::new();

    for clause in predicates.clauses() {
        let placeholder = params.len() + 1;
        match clause {
            PredicateClause::SkillsOverlap(skills) => {
                conditions.push(format!("skills && ${placeholder}::text[]"));
                params.push(SqlParam::TextArray(skills.clone()));
            }
            PredicateClause::LocationContains(location) => {
                conditions.push(format!(
                    "LOWER(location) LIKE LOWER(${placeholder}::text) ESCAPE '\\'"
                ));
                params.push(SqlParam::Text(format!("%{}%", escape_like(location))));
            }
            PredicateClause::SalaryFloor(floor) => {
                conditions.push(format!(
                    "(salary_max IS NULL OR salary_max >= ${placeholder}::bigint)"
                ));
                params.push(SqlParam::BigInt(*floor));
            }
            PredicateClause::SalaryCeiling(ceiling) => {
                conditions.push(format!(
                    "(salary_min IS NULL OR salary_min <= ${placeholder}::bigint)"
                ));
                params.push(SqlParam::BigInt(*ceiling));
            }
            PredicateClause::HasFeatureVector => {
                conditions.push("skills_embedding IS NOT NULL".to_string());
            }
        }
    }

    let sql = if conditions.is_empty() {
        "TRUE".to_string()
    } else {
        conditions.join(" AND ")
    };
    WhereClause { sql, params }
}

/// Render the count and page statements of a search against `table`
pub fn render_search(
    table: &str,
    predicates: &PredicateSet,
    ranking: &RankingPlan,
    page: Pagination,
) -> SearchStatements {
    let filter = render_where(predicates);

    let count = SqlStatement {
        sql: format!("SELECT COUNT(*) AS total FROM {table} WHERE {}", filter.sql),
        params: filter.params.clone(),
    };

    let mut params = filter.params;
    let (select, order) = match ranking {
        RankingPlan::ExactRecency => (
            PAGE_COLUMNS.to_string(),
            "created_at DESC, id::text COLLATE \"C\" ASC".to_string(),
        ),
        RankingPlan::SimilarityRank { query } => {
            params.push(SqlParam::Text(vector_literal(query)));
            let similarity = format!(
                "COALESCE(NULLIF(1 - (skills_embedding <=> ${}::text::vector), 'NaN'::float8), 0)",
                params.len()
            );
            (
                format!("{PAGE_COLUMNS}, {similarity} AS similarity"),
                "similarity DESC, id::text COLLATE \"C\" ASC".to_string(),
            )
        }
    };

    params.push(SqlParam::BigInt(i64::from(page.limit)));
    let limit = params.len();
    params.push(SqlParam::BigInt(i64::from(page.offset)));
    let offset = params.len();

    let page = SqlStatement {
        sql: format!(
            "SELECT {select} FROM {table} WHERE {} ORDER BY {order} LIMIT ${limit}::bigint OFFSET ${offset}::bigint",
            filter.sql
        ),
        params,
    };

    SearchStatements { count, page }
}

/// Whether `table` is a plain, optionally schema-qualified identifier
pub fn is_valid_table_name(table: &str) -> bool {
    let parts: Vec<&str> = table.split('.').collect();
    parts.len() <= 2
        && parts.iter().all(|part| {
            part.chars()
                .next()
                .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
                && part.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        })
}
