//! Partition planner
//!
//! Produces the ordered list of extraction chunks for a request.
//!
//! Planning paths (strict order):
//! 1. No partition column → the query unmodified, no dates
//! 2. No chunk frequency → one query from the resolved lower bound
//! 3. Chunk frequency → one query per calendar chunk between the bounds
//!
//! Planning is all-or-nothing: the first error aborts the call and no
//! partial list is returned.

use chrono_tz::Tz;

use super::request::{ChunkSpec, PartitionRequest, PlanMode};
use crate::chunks::{compute_chunks, ChunkFrequency};
use crate::dates::{Clock, DateFormat, DateResolver, DateToken};
use crate::dialect::{AliasGenerator, DateRange, Dialect, QueryRewriter};
use crate::errors::{PartitionError, PartitionResult};

/// Planner over an injected clock and alias source
pub struct PartitionPlanner<'a, C: Clock, G: AliasGenerator> {
    clock: &'a C,
    aliases: &'a G,
    timezone: Tz,
}

impl<'a, C: Clock, G: AliasGenerator> PartitionPlanner<'a, C, G> {
    /// Creates a planner evaluating "today" in `timezone`
    pub fn new(clock: &'a C, aliases: &'a G, timezone: Tz) -> Self {
        Self {
            clock,
            aliases,
            timezone,
        }
    }

    /// Plans a request.
    ///
    /// `last_partition_date` is the most recent partition already in the
    /// warehouse, formatted per the request's date format.
    pub fn plan(
        &self,
        request: &PartitionRequest,
        last_partition_date: Option<&str>,
    ) -> PartitionResult<Vec<ChunkSpec>> {
        let Some(column) = request.partition_column() else {
            return Ok(vec![ChunkSpec::passthrough(request.query.clone())]);
        };

        let dialect: Dialect = request.database_dialect.parse()?;
        let format = DateFormat::new(request.date_format.as_str())?;

        match request.mode() {
            PlanMode::Passthrough => Ok(vec![ChunkSpec::passthrough(request.query.clone())]),
            PlanMode::Incremental => {
                self.plan_incremental(request, column, dialect, &format, last_partition_date)
            }
            PlanMode::Backfill => self.plan_backfill(request, column, dialect, &format),
        }
    }

    fn resolver(&self) -> DateResolver<'a, C> {
        DateResolver::new(self.clock, self.timezone)
    }

    fn plan_incremental(
        &self,
        request: &PartitionRequest,
        column: &str,
        dialect: Dialect,
        format: &DateFormat,
        last_partition_date: Option<&str>,
    ) -> PartitionResult<Vec<ChunkSpec>> {
        let token = request.lower_bound_date.as_deref().map(DateToken::parse);
        let lower = self
            .resolver()
            .resolve(token.as_ref(), format, last_partition_date)?;

        let query = QueryRewriter::new(self.aliases).wrap(
            &request.query,
            column,
            format,
            dialect,
            &DateRange::Since(lower.clone()),
        );

        Ok(vec![ChunkSpec::bounded(query, lower.clone(), lower)])
    }

    fn plan_backfill(
        &self,
        request: &PartitionRequest,
        column: &str,
        dialect: Dialect,
        format: &DateFormat,
    ) -> PartitionResult<Vec<ChunkSpec>> {
        let frequency: ChunkFrequency = request
            .chunk_frequency
            .as_deref()
            .unwrap_or_default()
            .parse()?;

        let resolver = self.resolver();

        // No last-partition fallback: a backfill always starts where asked
        let start_token = request
            .chunk_start
            .as_deref()
            .map(DateToken::parse)
            .ok_or_else(|| PartitionError::missing_lower_bound("chunk_start"))?;
        let start = resolver.resolve_date(Some(&start_token), format, None)?;

        let end_token = request.chunk_end.as_deref().map(DateToken::parse);
        let end = resolver.resolve_end_date(end_token.as_ref(), format)?;

        let rewriter = QueryRewriter::new(self.aliases);
        Ok(compute_chunks(start, end, frequency)
            .into_iter()
            .map(|(lo, hi)| {
                let (lo, hi) = (format.format(lo), format.format(hi));
                let range = DateRange::Between {
                    start: lo.clone(),
                    end: hi.clone(),
                };
                let query = rewriter.wrap(&request.query, column, format, dialect, &range);
                ChunkSpec::bounded(query, lo, hi)
            })
            .collect())
    }
}
