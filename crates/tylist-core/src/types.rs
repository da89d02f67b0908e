//! Element tokens and terms.

use crate::error::ListError;
use crate::list::TypeList;
use crate::printer::render_term;

/// An opaque element token, such as `int` or `Ptr<int>`.
///
/// Tokens are compared by identity only; the list algebra never looks inside
/// them.
#[salsa::interned(debug)]
pub struct Ty<'db> {
    #[returns(ref)]
    pub name: String,
    #[returns(ref)]
    pub args: Vec<Term<'db>>,
}

impl<'db> Ty<'db> {
    /// A token without arguments.
    pub fn named(db: &'db dyn salsa::Database, name: &str) -> Self {
        Ty::new(db, name.to_owned(), Vec::new())
    }

    /// A constructor applied to arguments, e.g. `Ptr<int>`.
    pub fn apply(db: &'db dyn salsa::Database, ctor: &str, args: Vec<Term<'db>>) -> Self {
        Ty::new(db, ctor.to_owned(), args)
    }
}

/// Anything a list can hold: a token or another list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, salsa::Update)]
pub enum Term<'db> {
    Ty(Ty<'db>),
    List(TypeList<'db>),
}

impl<'db> Term<'db> {
    /// Shorthand for a named token term.
    pub fn token(db: &'db dyn salsa::Database, name: &str) -> Self {
        Term::Ty(Ty::named(db, name))
    }

    /// Membership predicate: the list this term is, if it is one.
    pub fn as_list(self) -> Option<TypeList<'db>> {
        match self {
            Term::List(list) => Some(list),
            Term::Ty(_) => None,
        }
    }

    pub fn is_list(self) -> bool {
        self.as_list().is_some()
    }

    /// Like [`Term::as_list`], but reports the offending term.
    pub fn expect_list(self, db: &'db dyn salsa::Database) -> Result<TypeList<'db>, ListError> {
        self.as_list().ok_or_else(|| ListError::NotAList {
            found: render_term(db, self),
        })
    }
}

impl<'db> From<Ty<'db>> for Term<'db> {
    fn from(ty: Ty<'db>) -> Self {
        Term::Ty(ty)
    }
}

impl<'db> From<TypeList<'db>> for Term<'db> {
    fn from(list: TypeList<'db>) -> Self {
        Term::List(list)
    }
}
