//! Type-level list algebra: resolve list expressions such as
//! `reverse(concat([A, B], [C]))` over interned type lists.
//!
//! The list operations themselves live in [`tylist_core`]; this crate adds the
//! expression language, its salsa-tracked resolver and a script runner. The
//! compile-time encoding of the same algebra is [`tylist_static`].

pub mod database;
pub mod expr;
pub mod parser;
pub mod resolver;
pub mod script;

pub use database::TylistDatabase;
pub use expr::{Expr, ExprKind, Value};
pub use parser::{MAX_NESTING, ParseError, parse_expr};
pub use resolver::{
    IDENTITY_CTOR, Resolution, ResolveError, evaluate, resolve, resolve_with_diagnostics,
};
pub use script::{LineReport, Outcome, ScriptReport, run_script};
pub use tylist_core::{Diagnostic, ResolutionPhase, Term, Ty, TypeList};
pub use {tylist_core, tylist_static};
