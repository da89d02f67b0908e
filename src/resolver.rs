//! Resolution of list expressions to values.
//!
//! [`resolve`] is a tracked function, so every distinct sub-expression is
//! resolved once per database and failures are reported once, through the
//! [`Diagnostic`] accumulator.

use derive_more::{Display, Error, From};
use salsa::Accumulator;
use tylist_core::{
    Diagnostic, ListError, ResolutionPhase, SliceOp, Term, Ty, TypeList, append_back,
    append_front, concatenate, drop_first, first, head, intersperse, last, length, map,
    pack_to_list, reverse, tail,
};

use crate::expr::{Expr, ExprKind, Value};
use crate::parser::parse_expr;

/// The `map` constructor that leaves elements unchanged.
pub const IDENTITY_CTOR: &str = "id";

#[derive(Clone, Debug, Display, Error, From, PartialEq, Eq)]
pub enum ResolveError {
    #[display("{_0}")]
    List(#[error(source)] ListError),
    #[from(ignore)]
    #[display("expected a count, found `{found}`")]
    ExpectedCount { found: String },
    #[from(ignore)]
    #[display("expected a type or a list, found `{found}`")]
    ExpectedTerm { found: String },
}

/// Why a sub-resolution produced no value.
enum Failure {
    /// A nested query failed and has already accumulated its diagnostic.
    Reported,
    Error(ResolveError),
}

impl From<ResolveError> for Failure {
    fn from(err: ResolveError) -> Self {
        Failure::Error(err)
    }
}

impl From<ListError> for Failure {
    fn from(err: ListError) -> Self {
        Failure::Error(err.into())
    }
}

/// Resolve `expr` to a value.
///
/// Returns `None` if resolution fails, with the error accumulated as a
/// [`Diagnostic`].
#[salsa::tracked]
pub fn resolve<'db>(db: &'db dyn salsa::Database, expr: Expr<'db>) -> Option<Value<'db>> {
    tracing::trace!(expr = ?expr.kind(db), "resolving");
    let resolver = Resolver { db };
    match resolver.resolve_kind(expr.kind(db)) {
        Ok(value) => Some(value),
        Err(Failure::Reported) => None,
        Err(Failure::Error(err)) => {
            tracing::debug!(error = %err, "resolution failed");
            Diagnostic::new(ResolutionPhase::Resolution, err.to_string()).accumulate(db);
            None
        }
    }
}

struct Resolver<'db> {
    db: &'db dyn salsa::Database,
}

impl<'db> Resolver<'db> {
    fn value(&self, expr: Expr<'db>) -> Result<Value<'db>, Failure> {
        resolve(self.db, expr).ok_or(Failure::Reported)
    }

    fn term(&self, expr: Expr<'db>) -> Result<Term<'db>, Failure> {
        match self.value(expr)? {
            Value::Term(term) => Ok(term),
            other => Err(ResolveError::ExpectedTerm {
                found: other.render(self.db),
            }
            .into()),
        }
    }

    fn list(&self, expr: Expr<'db>) -> Result<TypeList<'db>, Failure> {
        Ok(self.term(expr)?.expect_list(self.db)?)
    }

    fn count(&self, expr: Expr<'db>) -> Result<usize, Failure> {
        match self.value(expr)? {
            Value::Count(n) => Ok(n),
            other => Err(ResolveError::ExpectedCount {
                found: other.render(self.db),
            }
            .into()),
        }
    }

    fn terms(&self, exprs: &[Expr<'db>]) -> Result<Vec<Term<'db>>, Failure> {
        exprs.iter().map(|&expr| self.term(expr)).collect()
    }

    fn resolve_kind(&self, kind: &ExprKind<'db>) -> Result<Value<'db>, Failure> {
        let db = self.db;
        let list = |list: TypeList<'db>| -> Result<Value<'db>, Failure> {
            Ok(Value::Term(Term::List(list)))
        };

        match kind {
            ExprKind::Token { name, args } => {
                let args = self.terms(args)?;
                Ok(Value::Term(Term::Ty(Ty::apply(db, name, args))))
            }
            ExprKind::Nil => list(TypeList::empty(db)),
            ExprKind::Count(n) => Ok(Value::Count(*n)),
            ExprKind::Pack(elements) => list(pack_to_list(db, self.terms(elements)?)),
            ExprKind::AppendFront { element, list: rest } => {
                list(append_front(db, self.term(*element)?, self.list(*rest)?))
            }
            ExprKind::AppendBack { element, list: init } => {
                list(append_back(db, self.term(*element)?, self.list(*init)?))
            }
            ExprKind::Head(inner) => Ok(Value::Term(head(db, self.list(*inner)?))),
            ExprKind::Tail(inner) => list(tail(db, self.list(*inner)?)),
            ExprKind::Length(inner) => Ok(Value::Count(length(db, self.list(*inner)?))),
            ExprKind::Reverse(inner) => list(reverse(db, self.list(*inner)?)),
            ExprKind::IsList(inner) => Ok(Value::Bool(matches!(
                self.value(*inner)?,
                Value::Term(Term::List(_))
            ))),
            ExprKind::Concat(front, back) => {
                list(concatenate(db, self.list(*front)?, self.list(*back)?))
            }
            ExprKind::Map { ctor, list: inner } => {
                let inner = self.list(*inner)?;
                if ctor == IDENTITY_CTOR {
                    return list(map(db, inner, |element| element));
                }
                list(map(db, inner, |element| {
                    Term::Ty(Ty::apply(db, ctor, vec![element]))
                }))
            }
            ExprKind::Intersperse { sep, list: inner } => {
                list(intersperse(db, self.term(*sep)?, self.list(*inner)?))
            }
            ExprKind::Slice {
                op,
                count,
                list: inner,
            } => {
                let n = self.count(*count)?;
                let inner = self.list(*inner)?;
                let sliced = match op {
                    SliceOp::First => first(db, n, inner)?,
                    SliceOp::Last => last(db, n, inner)?,
                    SliceOp::Drop => drop_first(db, n, inner)?,
                };
                list(sliced)
            }
            ExprKind::Equal(lhs, rhs) => Ok(Value::Bool(self.value(*lhs)? == self.value(*rhs)?)),
        }
    }
}

/// A resolved value together with every diagnostic produced on the way.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution<'db> {
    pub value: Option<Value<'db>>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Resolve `expr` and collect the diagnostics of the whole expression tree.
pub fn resolve_with_diagnostics<'db>(
    db: &'db dyn salsa::Database,
    expr: Expr<'db>,
) -> Resolution<'db> {
    let value = resolve(db, expr);
    let diagnostics = resolve::accumulated::<Diagnostic>(db, expr)
        .into_iter()
        .cloned()
        .collect();
    Resolution { value, diagnostics }
}

/// Parse `source` and resolve it. A parse failure becomes a single
/// [`ResolutionPhase::Parsing`] diagnostic.
pub fn evaluate<'db>(db: &'db dyn salsa::Database, source: &str) -> Resolution<'db> {
    match parse_expr(db, source) {
        Ok(expr) => resolve_with_diagnostics(db, expr),
        Err(err) => {
            tracing::debug!(error = %err, "parse failed");
            Resolution {
                value: None,
                diagnostics: vec![err.into()],
            }
        }
    }
}
