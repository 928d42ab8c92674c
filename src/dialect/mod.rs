//! Dialect Query Rewriter
//!
//! Wraps a caller's base query in a uniquely named CTE and filters it on the
//! partition column:
//!
//! ```text
//! WITH <alias> AS (<base_query>) SELECT * FROM <alias> WHERE <predicate>
//! ```
//!
//! Date literals and predicates are rendered by a per-dialect strategy
//! chosen once per call. The base query is opaque and never parsed.

mod alias;
mod dialect;
mod rewriter;

pub use alias::{AliasGenerator, RandomAliasGenerator, SequentialAliasGenerator, DEFAULT_ALIAS_PREFIX};
pub use dialect::{
    escape_string_literal, oracle_date_format, CompareOp, ConvertDateStrategy, Dialect,
    DialectStrategy, OracleStrategy,
};
pub use rewriter::{DateRange, QueryRewriter};
