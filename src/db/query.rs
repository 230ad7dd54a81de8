//! Search query builder
//!
//! Builds the parameterized list statements for the catalog's two
//! filtered reads. These functions are pure: they produce query text
//! plus ordered bind values and never touch the database, so the exact
//! predicates are unit-testable without a connection. Malformed filter
//! input degrades to "no constraint" or "no match"; nothing here errors.

use crate::constants::ROLE_FILTER_ALL;
use crate::db::store::BindValue;

/// A statement template plus its ordered bind values.
#[derive(Debug, Clone, PartialEq)]
pub struct SqlQuery {
    pub sql: String,
    pub binds: Vec<BindValue>,
}

/// Build the course list query.
///
/// An empty search yields an unconditioned scan. A non-empty search
/// matches when the lower-cased course name contains the lower-cased
/// search text, or the course id rendered as text contains it. Both
/// branches share a single wildcard-wrapped, lower-cased bind value, so
/// the id branch effectively matches lower-cased text too. That shared
/// bind is deliberate behavior carried over from the original query, not
/// an oversight; splitting it into two parameters would change matching
/// semantics.
///
/// Courses without enrollments still appear (LEFT JOIN), with
/// `student_count` 0. Rows come back ordered by course id ascending;
/// callers rely on that ordering.
pub fn course_search(search: &str) -> SqlQuery {
    let mut binds = Vec::new();
    let mut where_sql = String::new();

    if !search.is_empty() {
        binds.push(BindValue::Text(format!("%{}%", search.to_lowercase())));
        where_sql = "WHERE LOWER(c.course_name) LIKE $1 \
             OR CAST(c.course_id AS TEXT) LIKE $1 "
            .to_string();
    }

    let sql = format!(
        "SELECT \
           c.course_id AS id, \
           c.course_name, \
           c.lecture_id, \
           u.name AS lecturer_name, \
           c.semester, \
           c.description, \
           c.created_at, \
           COUNT(e.id) AS student_count \
         FROM course c \
         LEFT JOIN users u ON c.lecture_id = u.user_id \
         LEFT JOIN enrollment e ON e.course_id = c.course_id \
         {where_sql}\
         GROUP BY c.course_id, u.name, c.course_name, c.lecture_id, \
                  c.semester, c.description, c.created_at \
         ORDER BY c.course_id"
    );

    SqlQuery { sql, binds }
}

/// Build the user list query.
///
/// A non-empty search matches case-insensitive substrings of name,
/// email, or phone (one shared lower-cased bind). A role filter of
/// "all" (or empty) imposes no role constraint; any other value
/// constrains to an exact role match. Both filters combine with AND.
/// The password column is never selected.
pub fn user_search(search: &str, role: &str) -> SqlQuery {
    let mut binds = Vec::new();
    let mut clauses = Vec::new();

    if !search.is_empty() {
        binds.push(BindValue::Text(format!("%{}%", search.to_lowercase())));
        let p = binds.len();
        clauses.push(format!(
            "(LOWER(u.name) LIKE ${p} \
              OR LOWER(u.email) LIKE ${p} \
              OR LOWER(COALESCE(u.phone, '')) LIKE ${p})"
        ));
    }

    if !role.is_empty() && role != ROLE_FILTER_ALL {
        binds.push(BindValue::Text(role.to_string()));
        clauses.push(format!("u.role = ${}", binds.len()));
    }

    let where_sql = if clauses.is_empty() {
        String::new()
    } else {
        format!("WHERE {} ", clauses.join(" AND "))
    };

    let sql = format!(
        "SELECT \
           u.user_id AS id, \
           u.name, \
           u.email, \
           u.phone, \
           u.role, \
           u.created_at \
         FROM users u \
         {where_sql}\
         ORDER BY u.user_id"
    );

    SqlQuery { sql, binds }
}
