//! Parser for list expressions.
//!
//! Uses winnow in two stages:
//!
//! 1. **Raw parse**: combinators turn text into `RawExpr` trees that borrow
//!    from the input.
//! 2. **Build**: raw trees are checked (operation names, arity, `map`
//!    constructors) and interned as [`Expr`] values.
//!
//! ```text
//! expr     := operand ( "==" operand )?
//! operand  := "[" exprs "]" | number | ident "(" exprs ")" | token
//! token    := ident ( "<" exprs ">" )?          -- `nil` is the empty list
//! ```

use derive_more::{Display, Error};
use winnow::ascii;
use winnow::combinator::{alt, cut_err, delimited, opt, preceded, separated};
use winnow::prelude::*;
use winnow::token::{one_of, take_while};

use tylist_core::{Diagnostic, ResolutionPhase, SliceOp};

use crate::expr::{Expr, ExprKind};

#[derive(Clone, Debug, Display, Error, PartialEq, Eq)]
#[display("parse error at offset {offset}: {message}")]
pub struct ParseError {
    pub message: String,
    pub offset: usize,
}

impl From<ParseError> for Diagnostic {
    fn from(err: ParseError) -> Self {
        Diagnostic::new(
            ResolutionPhase::Parsing,
            format!("{} at offset {}", err.message, err.offset),
        )
    }
}

// ============================================================================
// Raw (unchecked) expressions
// ============================================================================

#[derive(Debug, Clone)]
struct RawExpr<'a> {
    /// Input length remaining where this expression starts.
    at: usize,
    kind: RawKind<'a>,
}

#[derive(Debug, Clone)]
enum RawKind<'a> {
    Token { name: &'a str, args: Vec<RawExpr<'a>> },
    Call { name: &'a str, args: Vec<RawExpr<'a>> },
    List(Vec<RawExpr<'a>>),
    Count(usize),
    Equal(Box<RawExpr<'a>>, Box<RawExpr<'a>>),
}

// ============================================================================
// Winnow parsers
// ============================================================================

fn ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., |c: char| c.is_ascii_whitespace())
        .void()
        .parse_next(input)
}

/// Parse an identifier: [a-zA-Z_][a-zA-Z0-9_]*
fn ident<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    (
        one_of(|c: char| c.is_ascii_alphabetic() || c == '_'),
        take_while(0.., |c: char| c.is_ascii_alphanumeric() || c == '_'),
    )
        .take()
        .parse_next(input)
}

fn count(input: &mut &str) -> ModalResult<usize> {
    ascii::dec_uint(input)
}

/// Parse `open expr, expr, ... close` with at least `min` expressions.
fn exprs_between<'a>(
    input: &mut &'a str,
    open: char,
    close: char,
    min: usize,
) -> ModalResult<Vec<RawExpr<'a>>> {
    delimited(
        (open, ws),
        separated(min.., (ws, raw_expr, ws).map(|(_, e, _)| e), ','),
        cut_err((ws, close)),
    )
    .parse_next(input)
}

fn raw_expr<'a>(input: &mut &'a str) -> ModalResult<RawExpr<'a>> {
    let at = input.len();
    let lhs = raw_operand.parse_next(input)?;
    let rhs = opt(preceded((ws, "==", ws), raw_operand)).parse_next(input)?;
    Ok(match rhs {
        Some(rhs) => RawExpr {
            at,
            kind: RawKind::Equal(Box::new(lhs), Box::new(rhs)),
        },
        None => lhs,
    })
}

fn raw_operand<'a>(input: &mut &'a str) -> ModalResult<RawExpr<'a>> {
    let at = input.len();
    let kind = alt((
        (|i: &mut &'a str| exprs_between(i, '[', ']', 0)).map(RawKind::List),
        count.map(RawKind::Count),
        raw_named,
    ))
    .parse_next(input)?;
    Ok(RawExpr { at, kind })
}

/// An identifier followed by call arguments is an operation; otherwise it is
/// a token with optional type arguments.
fn raw_named<'a>(input: &mut &'a str) -> ModalResult<RawKind<'a>> {
    let name = ident.parse_next(input)?;
    let call_args = opt(preceded(ws, |i: &mut &'a str| exprs_between(i, '(', ')', 0)))
        .parse_next(input)?;
    if let Some(args) = call_args {
        return Ok(RawKind::Call { name, args });
    }
    // `<>` is not an argument list
    let args = opt(preceded(ws, |i: &mut &'a str| exprs_between(i, '<', '>', 1)))
        .parse_next(input)?
        .unwrap_or_default();
    Ok(RawKind::Token { name, args })
}

// ============================================================================
// Building interned expressions
// ============================================================================

struct ExprBuilder<'db, 'src> {
    db: &'db dyn salsa::Database,
    source: &'src str,
}

impl<'db> ExprBuilder<'db, '_> {
    fn error(&self, raw: &RawExpr<'_>, message: String) -> ParseError {
        ParseError {
            message,
            offset: self.source.len() - raw.at,
        }
    }

    fn build(&self, raw: &RawExpr<'_>) -> Result<Expr<'db>, ParseError> {
        let kind = match &raw.kind {
            RawKind::Token { name: "nil", args } if args.is_empty() => ExprKind::Nil,
            RawKind::Token { name, args } => ExprKind::Token {
                name: (*name).to_owned(),
                args: self.build_all(args)?,
            },
            RawKind::List(items) => ExprKind::Pack(self.build_all(items)?),
            RawKind::Count(n) => ExprKind::Count(*n),
            RawKind::Equal(lhs, rhs) => ExprKind::Equal(self.build(lhs)?, self.build(rhs)?),
            RawKind::Call { name, args } => self.build_call(raw, name, args)?,
        };
        Ok(Expr::new(self.db, kind))
    }

    fn build_all(&self, raws: &[RawExpr<'_>]) -> Result<Vec<Expr<'db>>, ParseError> {
        raws.iter().map(|raw| self.build(raw)).collect()
    }

    /// Builds the arguments of `name`, which must number exactly `N`.
    fn args<const N: usize>(
        &self,
        call: &RawExpr<'_>,
        name: &str,
        raws: &[RawExpr<'_>],
    ) -> Result<[Expr<'db>; N], ParseError> {
        let built = self.build_all(raws)?;
        let found = built.len();
        built
            .try_into()
            .map_err(|_| self.arity_error(call, name, N, found))
    }

    fn arity_error(
        &self,
        call: &RawExpr<'_>,
        name: &str,
        expected: usize,
        found: usize,
    ) -> ParseError {
        let plural = if expected == 1 { "" } else { "s" };
        self.error(
            call,
            format!("`{name}` takes {expected} argument{plural}, found {found}"),
        )
    }

    fn build_call(
        &self,
        call: &RawExpr<'_>,
        name: &str,
        raws: &[RawExpr<'_>],
    ) -> Result<ExprKind<'db>, ParseError> {
        let kind = match name {
            "pack" => ExprKind::Pack(self.build_all(raws)?),
            "front" => {
                let [element, list] = self.args(call, name, raws)?;
                ExprKind::AppendFront { element, list }
            }
            "back" => {
                let [element, list] = self.args(call, name, raws)?;
                ExprKind::AppendBack { element, list }
            }
            "head" => ExprKind::Head(self.args::<1>(call, name, raws)?[0]),
            "tail" => ExprKind::Tail(self.args::<1>(call, name, raws)?[0]),
            "len" => ExprKind::Length(self.args::<1>(call, name, raws)?[0]),
            "reverse" => ExprKind::Reverse(self.args::<1>(call, name, raws)?[0]),
            "is_list" => ExprKind::IsList(self.args::<1>(call, name, raws)?[0]),
            "concat" => {
                let [front, back] = self.args(call, name, raws)?;
                ExprKind::Concat(front, back)
            }
            "intersperse" => {
                let [sep, list] = self.args(call, name, raws)?;
                ExprKind::Intersperse { sep, list }
            }
            "first" => self.build_slice(call, SliceOp::First, raws)?,
            "last" => self.build_slice(call, SliceOp::Last, raws)?,
            "drop" => self.build_slice(call, SliceOp::Drop, raws)?,
            "map" => match raws {
                [
                    RawExpr {
                        kind: RawKind::Token { name: ctor, args },
                        ..
                    },
                    list,
                ] if args.is_empty() => ExprKind::Map {
                    ctor: (*ctor).to_owned(),
                    list: self.build(list)?,
                },
                [ctor, _] => {
                    return Err(self.error(
                        ctor,
                        "`map` expects a type constructor name as its first argument".to_owned(),
                    ));
                }
                _ => return Err(self.arity_error(call, name, 2, raws.len())),
            },
            _ => return Err(self.error(call, format!("unknown operation `{name}`"))),
        };
        Ok(kind)
    }

    fn build_slice(
        &self,
        call: &RawExpr<'_>,
        op: SliceOp,
        raws: &[RawExpr<'_>],
    ) -> Result<ExprKind<'db>, ParseError> {
        let [count, list] = self.args(call, &op.to_string(), raws)?;
        Ok(ExprKind::Slice { op, count, list })
    }
}

/// Deepest bracket nesting accepted. Parsing and resolution both recurse once
/// per level, so deeper input is rejected up front.
pub const MAX_NESTING: usize = 64;

fn check_nesting(source: &str) -> Result<(), ParseError> {
    let mut depth = 0usize;
    for (offset, c) in source.char_indices() {
        match c {
            '(' | '[' | '<' => {
                depth += 1;
                if depth > MAX_NESTING {
                    return Err(ParseError {
                        message: format!("expression nested too deeply (limit {MAX_NESTING})"),
                        offset,
                    });
                }
            }
            ')' | ']' | '>' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    Ok(())
}

fn unexpected(source: &str, remaining: &str) -> ParseError {
    let message = match remaining.chars().next() {
        Some(c) => format!("unexpected `{c}`"),
        None => "unexpected end of input".to_owned(),
    };
    ParseError {
        message,
        offset: source.len() - remaining.len(),
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Parse and intern a single expression. Surrounding whitespace is allowed;
/// anything else after the expression is an error.
pub fn parse_expr<'db>(
    db: &'db dyn salsa::Database,
    source: &str,
) -> Result<Expr<'db>, ParseError> {
    check_nesting(source)?;

    let mut remaining = source;
    let raw = delimited(ws, raw_expr, ws)
        .parse_next(&mut remaining)
        .map_err(|_| unexpected(source, remaining))?;

    // Reject trailing input
    if !remaining.is_empty() {
        return Err(unexpected(source, remaining));
    }

    ExprBuilder { db, source }.build(&raw)
}
