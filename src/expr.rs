//! List expressions and the values they resolve to.
//!
//! Expressions are interned, so two occurrences of the same expression text
//! are one [`Expr`] and [`crate::resolver::resolve`] runs once for both.

use tylist_core::{SliceOp, Term, render_term};

#[salsa::interned(debug)]
pub struct Expr<'db> {
    #[returns(ref)]
    pub kind: ExprKind<'db>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, salsa::Update)]
pub enum ExprKind<'db> {
    /// A token literal such as `int` or `Ptr<int>`.
    Token { name: String, args: Vec<Expr<'db>> },
    /// `nil`, the empty list.
    Nil,
    /// A count literal, used by `first`, `last` and `drop`.
    Count(usize),
    /// `pack(a, b, c)` or `[a, b, c]`.
    Pack(Vec<Expr<'db>>),
    AppendFront { element: Expr<'db>, list: Expr<'db> },
    AppendBack { element: Expr<'db>, list: Expr<'db> },
    Head(Expr<'db>),
    Tail(Expr<'db>),
    Length(Expr<'db>),
    Reverse(Expr<'db>),
    IsList(Expr<'db>),
    Concat(Expr<'db>, Expr<'db>),
    /// Wraps every element in the constructor `ctor`; `id` maps elements to
    /// themselves.
    Map { ctor: String, list: Expr<'db> },
    Intersperse { sep: Expr<'db>, list: Expr<'db> },
    Slice {
        op: SliceOp,
        count: Expr<'db>,
        list: Expr<'db>,
    },
    Equal(Expr<'db>, Expr<'db>),
}

/// The result of resolving an [`Expr`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, salsa::Update)]
pub enum Value<'db> {
    Term(Term<'db>),
    Count(usize),
    Bool(bool),
}

impl<'db> Value<'db> {
    pub fn render(self, db: &'db dyn salsa::Database) -> String {
        match self {
            Value::Term(term) => render_term(db, term),
            Value::Count(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
        }
    }
}
