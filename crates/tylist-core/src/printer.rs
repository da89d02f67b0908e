//! Textual rendering of terms and lists.
//!
//! Two forms are produced:
//!
//! - bracket form, `[A, Ptr<B>, [C]]`, which is also what the expression
//!   parser accepts back;
//! - spine form, `Node(A, Node(B, Empty))`, which spells out the list shape.

use crate::list::TypeList;
use crate::types::Term;

pub fn render_term<'db>(db: &'db dyn salsa::Database, term: Term<'db>) -> String {
    let mut out = String::new();
    write_term(db, term, &mut out);
    out
}

pub fn render_list<'db>(db: &'db dyn salsa::Database, list: TypeList<'db>) -> String {
    render_term(db, Term::List(list))
}

/// Renders the spine of `list`; nested lists inside elements use bracket form.
pub fn render_cons<'db>(db: &'db dyn salsa::Database, list: TypeList<'db>) -> String {
    let mut out = String::new();
    let mut depth = 0;
    for element in list.iter(db) {
        out.push_str("Node(");
        write_term(db, element, &mut out);
        out.push_str(", ");
        depth += 1;
    }
    out.push_str("Empty");
    for _ in 0..depth {
        out.push(')');
    }
    out
}

fn write_term<'db>(db: &'db dyn salsa::Database, term: Term<'db>, out: &mut String) {
    match term {
        Term::Ty(ty) => {
            out.push_str(ty.name(db));
            let args = ty.args(db);
            if !args.is_empty() {
                out.push('<');
                write_separated(db, args.iter().copied(), out);
                out.push('>');
            }
        }
        Term::List(list) => {
            out.push('[');
            write_separated(db, list.iter(db), out);
            out.push(']');
        }
    }
}

fn write_separated<'db>(
    db: &'db dyn salsa::Database,
    terms: impl Iterator<Item = Term<'db>>,
    out: &mut String,
) {
    for (index, term) in terms.enumerate() {
        if index > 0 {
            out.push_str(", ");
        }
        write_term(db, term, out);
    }
}
