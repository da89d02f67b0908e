//! Derived list algorithms.
//!
//! All of these are defined by structural recursion on the list shape, but
//! are written as loops over [`TypeList::iter`] so that long lists cannot
//! exhaust the call stack. Results are rebuilt with interned nodes, so a
//! result equal to an existing list is that list.

use crate::error::{ListError, SliceOp};
use crate::list::{ListKind, TypeList, build_onto};
use crate::types::Term;

pub fn length<'db>(db: &'db dyn salsa::Database, list: TypeList<'db>) -> usize {
    list.iter(db).count()
}

/// Prepends each element onto an accumulator that starts out empty.
pub fn reverse<'db>(db: &'db dyn salsa::Database, list: TypeList<'db>) -> TypeList<'db> {
    list.iter(db).fold(TypeList::empty(db), |acc, element| TypeList::node(db, element, acc))
}

/// Applies `f` to every element, head first, preserving order and length.
pub fn map<'db>(
    db: &'db dyn salsa::Database,
    list: TypeList<'db>,
    f: impl FnMut(Term<'db>) -> Term<'db>,
) -> TypeList<'db> {
    let mapped = list.iter(db).map(f).collect();
    build_onto(db, mapped, TypeList::empty(db))
}

/// The elements of `front` followed by `back`. Only `front` is rebuilt;
/// `back` becomes the shared tail of the result.
pub fn concatenate<'db>(
    db: &'db dyn salsa::Database,
    front: TypeList<'db>,
    back: TypeList<'db>,
) -> TypeList<'db> {
    build_onto(db, front.iter(db).collect(), back)
}

/// Puts `sep` between every adjacent pair of elements.
pub fn intersperse<'db>(
    db: &'db dyn salsa::Database,
    sep: Term<'db>,
    list: TypeList<'db>,
) -> TypeList<'db> {
    let elements: Vec<_> = list.iter(db).collect();
    let mut result = TypeList::empty(db);
    for (index, element) in elements.into_iter().enumerate().rev() {
        result = TypeList::node(db, element, result);
        if index > 0 {
            result = TypeList::node(db, sep, result);
        }
    }
    result
}

/// The first `n` elements.
///
/// Fails with [`ListError::OutOfRange`] when `n` exceeds the length of the
/// list.
pub fn first<'db>(
    db: &'db dyn salsa::Database,
    n: usize,
    list: TypeList<'db>,
) -> Result<TypeList<'db>, ListError> {
    let mut prefix = Vec::new();
    let mut cursor = list;
    while prefix.len() < n {
        match cursor.kind(db) {
            ListKind::Empty => {
                return Err(ListError::OutOfRange {
                    op: SliceOp::First,
                    requested: n,
                    length: prefix.len(),
                });
            }
            ListKind::Node { element, rest } => {
                prefix.push(element);
                cursor = rest;
            }
        }
    }
    Ok(build_onto(db, prefix, TypeList::empty(db)))
}

/// Applies `tail` `n` times. The result shares the remaining suffix.
pub fn drop_first<'db>(
    db: &'db dyn salsa::Database,
    n: usize,
    list: TypeList<'db>,
) -> Result<TypeList<'db>, ListError> {
    let mut cursor = list;
    for dropped in 0..n {
        match cursor.kind(db) {
            ListKind::Empty => {
                return Err(ListError::OutOfRange {
                    op: SliceOp::Drop,
                    requested: n,
                    length: dropped,
                });
            }
            ListKind::Node { rest, .. } => cursor = rest,
        }
    }
    Ok(cursor)
}

/// The last `n` elements: drops `length - n` from the front.
pub fn last<'db>(
    db: &'db dyn salsa::Database,
    n: usize,
    list: TypeList<'db>,
) -> Result<TypeList<'db>, ListError> {
    let length = length(db, list);
    let skip = length.checked_sub(n).ok_or(ListError::OutOfRange {
        op: SliceOp::Last,
        requested: n,
        length,
    })?;
    drop_first(db, skip, list)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::{append_front, pack_to_list};
    use crate::types::Ty;

    fn list_of<'db>(db: &'db dyn salsa::Database, names: &[&str]) -> TypeList<'db> {
        pack_to_list(db, names.iter().map(|name| Term::token(db, name)))
    }

    #[test]
    fn test_length() {
        let db = salsa::DatabaseImpl::default();
        let db: &dyn salsa::Database = &db;
        assert_eq!(length(db, TypeList::empty(db)), 0);
        assert_eq!(length(db, list_of(db, &["A"])), 1);
        assert_eq!(length(db, list_of(db, &["A", "B", "C"])), 3);
    }

    #[test]
    fn test_reverse() {
        let db = salsa::DatabaseImpl::default();
        let db: &dyn salsa::Database = &db;
        let abc = list_of(db, &["A", "B", "C"]);
        assert_eq!(reverse(db, abc), list_of(db, &["C", "B", "A"]));
        assert_eq!(reverse(db, reverse(db, abc)), abc);
        assert_eq!(reverse(db, TypeList::empty(db)), TypeList::empty(db));
    }

    #[test]
    fn test_map() {
        let db = salsa::DatabaseImpl::default();
        let db: &dyn salsa::Database = &db;
        let to_ptr = |element| Term::Ty(Ty::apply(db, "Ptr", vec![element]));

        let list = list_of(db, &["int", "bool"]);
        let expected = pack_to_list(
            db,
            [
                to_ptr(Term::token(db, "int")),
                to_ptr(Term::token(db, "bool")),
            ],
        );
        assert_eq!(map(db, list, to_ptr), expected);
        assert_eq!(map(db, list, |element| element), list);
        assert_eq!(map(db, TypeList::empty(db), to_ptr), TypeList::empty(db));
    }

    #[test]
    fn test_map_distributes_over_concatenate() {
        let db = salsa::DatabaseImpl::default();
        let db: &dyn salsa::Database = &db;
        let to_ptr = |element| Term::Ty(Ty::apply(db, "Ptr", vec![element]));
        let a = list_of(db, &["A", "B"]);
        let b = list_of(db, &["C"]);
        assert_eq!(
            map(db, concatenate(db, a, b), to_ptr),
            concatenate(db, map(db, a, to_ptr), map(db, b, to_ptr))
        );
    }

    #[test]
    fn test_concatenate() {
        let db = salsa::DatabaseImpl::default();
        let db: &dyn salsa::Database = &db;
        let empty = TypeList::empty(db);
        let ab = list_of(db, &["A", "B"]);
        let cd = list_of(db, &["C", "D"]);

        assert_eq!(concatenate(db, empty, ab), ab);
        assert_eq!(concatenate(db, ab, empty), ab);
        assert_eq!(concatenate(db, ab, cd), list_of(db, &["A", "B", "C", "D"]));

        let x = Term::token(db, "X");
        assert_eq!(
            concatenate(db, append_front(db, x, ab), cd),
            append_front(db, x, concatenate(db, ab, cd))
        );
    }

    #[test]
    fn test_intersperse() {
        let db = salsa::DatabaseImpl::default();
        let db: &dyn salsa::Database = &db;
        let x = Term::token(db, "X");

        assert_eq!(intersperse(db, x, TypeList::empty(db)), TypeList::empty(db));
        assert_eq!(intersperse(db, x, list_of(db, &["A"])), list_of(db, &["A"]));
        assert_eq!(
            intersperse(db, x, list_of(db, &["A", "B"])),
            list_of(db, &["A", "X", "B"])
        );
        assert_eq!(
            intersperse(db, x, list_of(db, &["A", "B", "C"])),
            list_of(db, &["A", "X", "B", "X", "C"])
        );
    }

    #[test]
    fn test_first() {
        let db = salsa::DatabaseImpl::default();
        let db: &dyn salsa::Database = &db;
        let abc = list_of(db, &["A", "B", "C"]);

        assert_eq!(first(db, 0, abc), Ok(TypeList::empty(db)));
        assert_eq!(first(db, 2, abc), Ok(list_of(db, &["A", "B"])));
        assert_eq!(first(db, 3, abc), Ok(abc));
        assert_eq!(
            first(db, 5, abc),
            Err(ListError::OutOfRange {
                op: SliceOp::First,
                requested: 5,
                length: 3,
            })
        );
    }

    #[test]
    fn test_drop_first() {
        let db = salsa::DatabaseImpl::default();
        let db: &dyn salsa::Database = &db;
        let abc = list_of(db, &["A", "B", "C"]);

        assert_eq!(drop_first(db, 0, abc), Ok(abc));
        assert_eq!(drop_first(db, 1, abc), Ok(list_of(db, &["B", "C"])));
        assert_eq!(drop_first(db, 3, abc), Ok(TypeList::empty(db)));
        assert!(matches!(
            drop_first(db, 4, abc),
            Err(ListError::OutOfRange {
                op: SliceOp::Drop,
                ..
            })
        ));
    }

    #[test]
    fn test_last() {
        let db = salsa::DatabaseImpl::default();
        let db: &dyn salsa::Database = &db;
        let abc = list_of(db, &["A", "B", "C"]);

        assert_eq!(last(db, 0, abc), Ok(TypeList::empty(db)));
        assert_eq!(last(db, 2, abc), Ok(list_of(db, &["B", "C"])));
        assert_eq!(last(db, 3, abc), Ok(abc));
        assert_eq!(
            last(db, 4, abc),
            Err(ListError::OutOfRange {
                op: SliceOp::Last,
                requested: 4,
                length: 3,
            })
        );
    }

    #[test]
    fn test_long_list_does_not_recurse() {
        let db = salsa::DatabaseImpl::default();
        let db: &dyn salsa::Database = &db;
        let n = 100_000;
        let list = pack_to_list(db, (0..n).map(|i| Term::token(db, &format!("T{i}"))));

        assert_eq!(length(db, list), n);
        let reversed = reverse(db, list);
        assert_eq!(reverse(db, reversed), list);
        let doubled = concatenate(db, list, reversed);
        assert_eq!(length(db, doubled), 2 * n);
        assert_eq!(last(db, n, doubled), Ok(reversed));
    }
}
