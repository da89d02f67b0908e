//! The list shape, its constructors and primitive accessors.
//!
//! A [`TypeList`] is either [`ListKind::Empty`] or a [`ListKind::Node`] that
//! holds one element and the rest of the list. Lists are interned, so there is
//! exactly one empty list per database and a node's rest is always shared
//! rather than copied.

use crate::types::Term;

#[salsa::interned(debug)]
pub struct TypeList<'db> {
    pub kind: ListKind<'db>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, salsa::Update)]
pub enum ListKind<'db> {
    Empty,
    Node {
        element: Term<'db>,
        rest: TypeList<'db>,
    },
}

impl<'db> TypeList<'db> {
    pub fn empty(db: &'db dyn salsa::Database) -> Self {
        TypeList::new(db, ListKind::Empty)
    }

    pub fn node(db: &'db dyn salsa::Database, element: Term<'db>, rest: TypeList<'db>) -> Self {
        TypeList::new(db, ListKind::Node { element, rest })
    }

    pub fn is_empty(self, db: &'db dyn salsa::Database) -> bool {
        matches!(self.kind(db), ListKind::Empty)
    }

    /// Walks the spine from the first element to `Empty`.
    pub fn iter(self, db: &'db dyn salsa::Database) -> Elements<'db> {
        Elements { db, cursor: self }
    }
}

/// Iterator over the elements of a [`TypeList`].
pub struct Elements<'db> {
    db: &'db dyn salsa::Database,
    cursor: TypeList<'db>,
}

impl<'db> Iterator for Elements<'db> {
    type Item = Term<'db>;

    fn next(&mut self) -> Option<Term<'db>> {
        match self.cursor.kind(self.db) {
            ListKind::Empty => None,
            ListKind::Node { element, rest } => {
                self.cursor = rest;
                Some(element)
            }
        }
    }
}

/// Prepends `elements` onto `tail`, keeping their order.
///
/// Every traversal that has to rebuild a spine collects the elements first
/// and calls this, so no operation recurses on list length.
pub(crate) fn build_onto<'db>(
    db: &'db dyn salsa::Database,
    elements: Vec<Term<'db>>,
    tail: TypeList<'db>,
) -> TypeList<'db> {
    elements
        .into_iter()
        .rev()
        .fold(tail, |rest, element| TypeList::node(db, element, rest))
}

/// Builds a list from a finite sequence; the first item becomes the head.
pub fn pack_to_list<'db, I>(db: &'db dyn salsa::Database, elements: I) -> TypeList<'db>
where
    I: IntoIterator<Item = Term<'db>>,
{
    build_onto(db, elements.into_iter().collect(), TypeList::empty(db))
}

pub fn append_front<'db>(
    db: &'db dyn salsa::Database,
    element: Term<'db>,
    list: TypeList<'db>,
) -> TypeList<'db> {
    TypeList::node(db, element, list)
}

/// Places `element` after the last element of `list`. Rebuilds every node of
/// the spine.
pub fn append_back<'db>(
    db: &'db dyn salsa::Database,
    element: Term<'db>,
    list: TypeList<'db>,
) -> TypeList<'db> {
    let last = TypeList::node(db, element, TypeList::empty(db));
    build_onto(db, list.iter(db).collect(), last)
}

/// The first element, or the empty list itself when `list` is empty.
pub fn head<'db>(db: &'db dyn salsa::Database, list: TypeList<'db>) -> Term<'db> {
    match list.kind(db) {
        ListKind::Empty => Term::List(list),
        ListKind::Node { element, .. } => element,
    }
}

/// Everything after the first element; `Empty` for the empty list.
pub fn tail<'db>(db: &'db dyn salsa::Database, list: TypeList<'db>) -> TypeList<'db> {
    match list.kind(db) {
        ListKind::Empty => list,
        ListKind::Node { rest, .. } => rest,
    }
}
