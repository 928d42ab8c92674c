//! CTE wrapping with a date predicate

use super::alias::AliasGenerator;
use super::dialect::{CompareOp, Dialect};
use crate::dates::DateFormat;

/// Date filter applied to the partition column.
///
/// Values are date strings already rendered in the request's format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateRange {
    /// `<col> >= start AND <col> <= end`
    Between { start: String, end: String },
    /// `<col> >= start`, for incremental loads
    Since(String),
}

/// Wraps base queries, drawing aliases from an injected generator
pub struct QueryRewriter<'a, G: AliasGenerator> {
    aliases: &'a G,
}

impl<'a, G: AliasGenerator> QueryRewriter<'a, G> {
    pub fn new(aliases: &'a G) -> Self {
        Self { aliases }
    }

    /// Wraps `base_query` in a CTE filtered to `range` on `partition_column`.
    pub fn wrap(
        &self,
        base_query: &str,
        partition_column: &str,
        format: &DateFormat,
        dialect: Dialect,
        range: &DateRange,
    ) -> String {
        let strategy = dialect.strategy();
        let bound = |op: CompareOp, value: &str| {
            let literal = strategy.render_date_literal(value, format);
            strategy.render_predicate(partition_column, op, &literal)
        };

        let predicate = match range {
            DateRange::Between { start, end } => format!(
                "{} AND {}",
                bound(CompareOp::Gte, start),
                bound(CompareOp::Lte, end)
            ),
            DateRange::Since(start) => bound(CompareOp::Gte, start),
        };

        let alias = self.aliases.next_alias();
        format!(
            "WITH {alias} AS ({base_query}) SELECT * FROM {alias} WHERE {predicate}"
        )
    }
}
