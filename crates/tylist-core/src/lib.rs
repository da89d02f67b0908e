//! Interned type lists.
//!
//! Element tokens ([`Ty`]) and lists ([`TypeList`]) are salsa-interned, so a
//! list value is an id: structurally identical lists built by different code
//! paths compare equal, and unchanged sub-lists are shared.

pub mod diagnostic;
pub mod error;
pub mod list;
pub mod ops;
pub mod printer;
pub mod types;

pub use diagnostic::{Diagnostic, ResolutionPhase};
pub use error::{ListError, SliceOp};
pub use list::{
    Elements, ListKind, TypeList, append_back, append_front, head, pack_to_list, tail,
};
pub use ops::{concatenate, drop_first, first, intersperse, last, length, map, reverse};
pub use printer::{render_cons, render_list, render_term};
pub use types::{Term, Ty};
