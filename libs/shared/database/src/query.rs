//! PostgREST query-string composition.
//!
//! Every list operation in the cells builds a filter struct and turns it
//! into a [`RestQuery`]. Clauses are emitted in the order they were added,
//! so the same filter struct always yields the same URL.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestQuery {
    params: Vec<(String, String)>,
}

impl RestQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Column list, including embedded resources (`*,author:doctors!author_id(*)`).
    pub fn select(self, columns: &str) -> Self {
        self.param("select", columns)
    }

    /// `column = value`
    pub fn eq(self, column: &str, value: &str) -> Self {
        let filter = format!("eq.{}", value);
        self.param(column, &filter)
    }

    /// Case-insensitive substring match on a single column.
    pub fn ilike(self, column: &str, term: &str) -> Self {
        let filter = format!("ilike.*{}*", escape_like(term));
        self.param(column, &filter)
    }

    /// Case-insensitive substring match on any of `columns` (logical OR).
    pub fn any_ilike(self, columns: &[&str], term: &str) -> Self {
        if columns.is_empty() {
            return self;
        }
        let pattern = quote(&format!("*{}*", escape_like(term)));
        let group = columns
            .iter()
            .map(|column| format!("{}.ilike.{}", column, pattern))
            .collect::<Vec<_>>()
            .join(",");
        self.param("or", &format!("({})", group))
    }

    /// Matches every row; PostgREST refuses unfiltered DELETEs.
    pub fn not_null(self, column: &str) -> Self {
        self.param(column, "not.is.null")
    }

    pub fn order_desc(self, column: &str) -> Self {
        self.param("order", &format!("{}.desc", column))
    }

    pub fn order_asc(self, column: &str) -> Self {
        self.param("order", &format!("{}.asc", column))
    }

    pub fn limit(self, limit: usize) -> Self {
        self.param("limit", &limit.to_string())
    }

    /// Raw parameter, for options without a dedicated helper
    /// (e.g. `comments.order`).
    pub fn param(mut self, key: &str, value: &str) -> Self {
        self.params.push((key.to_string(), value.to_string()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// Percent-encoded query string including the leading `?`, or an empty
    /// string when there are no clauses.
    pub fn to_query_string(&self) -> String {
        if self.params.is_empty() {
            return String::new();
        }
        let joined = self
            .params
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("?{}", joined)
    }

    /// REST path for `table` with this query appended.
    pub fn path_for(&self, table: &str) -> String {
        format!("/rest/v1/{}{}", table, self.to_query_string())
    }
}

/// Escapes LIKE metacharacters in user input.
///
/// PostgREST reads every `*` in a like pattern as `%` and offers no escape
/// for it, so a literal `*` becomes the single-character wildcard `_`. The
/// pattern then over-matches; callers re-check rows in process.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for ch in term.chars() {
        match ch {
            '\\' | '%' | '_' => {
                escaped.push('\\');
                escaped.push(ch);
            }
            '*' => escaped.push('_'),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Double-quotes a value inside an `or=(...)` group so commas, dots and
/// parentheses in user input are not read as PostgREST syntax.
fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for ch in value.chars() {
        if matches!(ch, '\\' | '"') {
            quoted.push('\\');
        }
        quoted.push(ch);
    }
    quoted.push('"');
    quoted
}
