//! # Parsley - Backtracking Parser Combinators
//!
//! A small engine for composing primitive matchers (literal text,
//! character classes) into larger grammars: sequences, alternatives,
//! repetitions, transformations, and recursive rules that consume text
//! left to right and produce a tree of [`Node`]s.
//!
//! Parsley emphasizes:
//!
//! - **Deterministic backtracking**: a failed match never moves the
//!   cursor; sibling alternatives retry from the same spot
//! - **Useful diagnostics**: the error that survives a parse is the one
//!   that reached furthest into the input, across every explored branch
//! - **Composability**: bare string literals work as parsers, and
//!   grammars may refer to themselves through [`deferred`](crate::deferred::deferred) rules
//! - **Observability on demand**: the `trace` feature turns the
//!   [`named`] hook into a profiler and call tracer; off, it costs
//!   nothing
//!
//! ```
//! use parsley::{and, chars, kleene_sep, parse};
//!
//! let list = kleene_sep(chars("a-z"), ",");
//! let node = parse(&list, "alpha, beta, gamma").unwrap();
//! let items: Vec<_> = node.children.iter().map(|c| c.token.as_ref()).collect();
//! assert_eq!(items, ["alpha", "beta", "gamma"]);
//! ```
//!
//! Matching is plain recursive descent with backtracking: simple and
//! predictable, with no linear-time guarantee. Whitespace is skipped
//! before each leaf match by default; see [`Whitespace`].

pub mod and;
pub mod any;
pub mod chars;
pub mod deferred;
pub mod error;
pub mod exact;
pub mod kleene;
pub mod many;
pub mod map;
pub mod maybe;
pub mod merge;
pub mod node;
pub mod parser;
pub mod run;
pub mod state;
pub mod trace;

pub use and::{And, and};
pub use any::{Any, any};
pub use chars::{Chars, chars};
pub use deferred::{Deferred, deferred};
pub use error::ParseError;
pub use exact::{Exact, exact};
pub use kleene::{Kleene, kleene, kleene_sep};
pub use many::{Many, many, many_sep};
pub use map::{Map, MapExt, map};
pub use maybe::{Maybe, MaybeExt, maybe};
pub use merge::{Merge, MergeExt, merge};
pub use node::Node;
pub use parser::{BoxedParser, Empty, Parser, ParserList, empty};
pub use run::{parse, run, run_with};
pub use state::{State, Whitespace};
pub use trace::named;
#[cfg(feature = "trace")]
pub use trace::{Traced, disable_trace, dump_stats, enable_trace};
