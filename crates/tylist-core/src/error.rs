//! Errors raised by list operations.

use derive_more::{Display, Error};

/// Slicing operations that take an element count.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
pub enum SliceOp {
    #[display("first")]
    First,
    #[display("last")]
    Last,
    #[display("drop")]
    Drop,
}

#[derive(Clone, Debug, Display, Error, PartialEq, Eq, Hash)]
pub enum ListError {
    /// A term that is not a list was used where a list is required.
    #[display("expected a type list, found `{found}`")]
    NotAList { found: String },

    /// A count larger than the list it slices.
    #[display("`{op}` of {requested} elements is out of range for a list of length {length}")]
    OutOfRange {
        op: SliceOp,
        requested: usize,
        length: usize,
    },
}
