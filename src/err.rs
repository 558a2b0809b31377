//! Error types used in the library.
//!
//! Reading a formula fails in one of two ways, both located by a half-open byte span of the input:
//! - A [LexError], when some character cannot begin any lexeme.
//! - A [SyntaxError], when the lexemes do not form a formula.
//!
//! A [SessionError] is raised by a [Session](crate::session::Session) when it declines a request, and is unrelated to the text of a formula.

use std::fmt;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
	Parse(ParseError),
	Session(SessionError),
}

impl From<ParseError> for ErrorKind {
	fn from(e: ParseError) -> Self {
		ErrorKind::Parse(e)
	}
}

impl From<SessionError> for ErrorKind {
	fn from(e: SessionError) -> Self {
		ErrorKind::Session(e)
	}
}

impl From<LexError> for ErrorKind {
	fn from(e: LexError) -> Self {
		ErrorKind::Parse(ParseError::Lex(e))
	}
}

impl From<SyntaxError> for ErrorKind {
	fn from(e: SyntaxError) -> Self {
		ErrorKind::Parse(ParseError::Syntax(e))
	}
}

impl fmt::Display for ErrorKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ErrorKind::Parse(e) => write!(f, "{e}"),
			ErrorKind::Session(e) => write!(f, "{e}"),
		}
	}
}

impl std::error::Error for ErrorKind {}

/// Either of the two ways reading a formula may fail.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
	Lex(LexError),
	Syntax(SyntaxError),
}

impl ParseError {
	pub fn description(&self) -> String {
		match self {
			ParseError::Lex(e) => e.description(),
			ParseError::Syntax(e) => e.description(),
		}
	}

	/// The offending bytes of the input, as a half-open range.
	pub fn span(&self) -> (usize, usize) {
		match self {
			ParseError::Lex(e) => (e.start, e.end),
			ParseError::Syntax(e) => (e.start, e.end),
		}
	}
}

impl From<LexError> for ParseError {
	fn from(e: LexError) -> Self {
		ParseError::Lex(e)
	}
}

impl From<SyntaxError> for ParseError {
	fn from(e: SyntaxError) -> Self {
		ParseError::Syntax(e)
	}
}

impl fmt::Display for ParseError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let (start, end) = self.span();
		write!(f, "{} (at {start}..{end})", self.description())
	}
}

impl std::error::Error for ParseError {}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LexProblem {
	/// The character is outside the set any formula may contain.
	DisallowedCharacter(char),

	/// The character is allowed somewhere, but no lexeme begins with it here.
	UnexpectedCharacter(char),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LexError {
	pub problem: LexProblem,
	pub start: usize,
	pub end: usize,
}

impl LexError {
	pub fn description(&self) -> String {
		match self.problem {
			LexProblem::DisallowedCharacter(c) => {
				format!("The character '{c}' cannot appear in a formula.")
			}
			LexProblem::UnexpectedCharacter(c) => {
				format!("Unexpected character '{c}'.")
			}
		}
	}
}

impl fmt::Display for LexError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} (at {}..{})", self.description(), self.start, self.end)
	}
}

impl std::error::Error for LexError {}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SyntaxProblem {
	/// There is nothing but whitespace.
	EmptyInput,

	/// An open parenthesis is never closed.
	UnmatchedOpen,

	/// A close parenthesis has no open parenthesis to match.
	UnmatchedClose,

	/// The input ends, or a parenthesis closes, directly after a negation.
	DanglingNegation,

	/// A negation was found where an open parenthesis should be.
	NothingNegated,

	/// A binary connective is missing its right-hand operand.
	MissingOperand,

	/// Something other than a variable, constant, negation, or open parenthesis was found where an operand should begin.
	ExpectedOperand,

	/// Something other than a connective or close parenthesis was found after a complete operand.
	ExpectedOperator,

	/// Connectives are nested deeper than the parser allows.
	TooDeep,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SyntaxError {
	pub problem: SyntaxProblem,
	pub start: usize,
	pub end: usize,
}

impl SyntaxError {
	pub fn description(&self) -> String {
		match self.problem {
			SyntaxProblem::EmptyInput => "Nothing was entered.",
			SyntaxProblem::UnmatchedOpen => "This open parenthesis has no matching close parenthesis.",
			SyntaxProblem::UnmatchedClose => "This close parenthesis has no matching open parenthesis.",
			SyntaxProblem::DanglingNegation => "This negation is not applied to anything.",
			SyntaxProblem::NothingNegated => "Nothing is negated by this operator.",
			SyntaxProblem::MissingOperand => "This operator is missing an operand.",
			SyntaxProblem::ExpectedOperand => {
				"Expected a variable, a constant, a negation, or an open parenthesis here."
			}
			SyntaxProblem::ExpectedOperator => "Expected a connective or a close parenthesis here.",
			SyntaxProblem::TooDeep => "The formula is nested too deeply at this connective.",
		}
		.to_string()
	}
}

impl fmt::Display for SyntaxError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} (at {}..{})", self.description(), self.start, self.end)
	}
}

impl std::error::Error for SyntaxError {}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SessionError {
	/// The formula mentions more variables than the configured limit allows.
	TooManyVariables { found: usize, limit: usize },

	/// No formula is held at the index.
	NoSuchFormula(usize),
}

impl fmt::Display for SessionError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			SessionError::TooManyVariables { found, limit } => {
				write!(f, "There are {found} variables, but at most {limit} are allowed.")
			}
			SessionError::NoSuchFormula(index) => write!(f, "There is no formula {index}."),
		}
	}
}

impl std::error::Error for SessionError {}
