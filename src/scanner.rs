//! Conversion of formula text to tokens and a variable table.
//!
//! Every accepted spelling of a connective is translated to a single [TokenKind].
//! Variables are first noted by name, and once the whole input has been read the names are sorted and each variable token is rewritten to the position of its name in the sorted table.

use std::collections::HashSet;

use plex::lexer;

use crate::{
	err::{LexError, LexProblem},
	misc::log::targets,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
	OpenParen,
	CloseParen,
	Not,
	And,
	Or,
	Implies,
	Iff,
	True,
	False,
	/// Index into the variable table of the scan.
	Variable(usize),
	End,
}

/// A token, with the half-open span of bytes it was read from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token {
	pub kind: TokenKind,
	pub start: usize,
	pub end: usize,
}

impl Token {
	pub fn span(&self) -> (usize, usize) {
		(self.start, self.end)
	}
}

/// The result of scanning some input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scan {
	/// The tokens of the input, always closed by a single [TokenKind::End].
	pub tokens: Vec<Token>,
	/// Distinct variable names, sorted.
	pub variables: Vec<String>,
}

/// Characters used by some spelling of a connective, constant, or parenthesis.
const OPERATOR_CHARACTERS: &str = "()~!¬/\\&^∧|∨-=<>→↔⊤⊥";

fn is_allowed(c: char) -> bool {
	c.is_ascii_alphanumeric() || c == '_' || c.is_ascii_whitespace() || OPERATOR_CHARACTERS.contains(c)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Lexeme {
	Whitespace,
	Open,
	Close,
	Not,
	And,
	Or,
	Implies,
	Iff,
	True,
	False,
	Identifier,
	Illegal,
}

// The longest match wins, and of matches with equal length the earliest rule.
// So, reserved words are listed before identifiers.
lexer! {
	fn next_lexeme(text: 'a) -> Lexeme;

	r#"[ \t\r\n\x0C]+"# => Lexeme::Whitespace,
	r#"\("# => Lexeme::Open,
	r#"\)"# => Lexeme::Close,
	r#"~|!|not|¬|\\lnot|\\neg"# => Lexeme::Not,
	r#"/\\|&&|and|\^|∧|\\land|\\wedge"# => Lexeme::And,
	r#"\\/|\|\||or|∨|\\lor|\\vee"# => Lexeme::Or,
	r#"->|=>|implies|→|\\to|\\rightarrow|\\Rightarrow"# => Lexeme::Implies,
	r#"<->|<=>|iff|↔|\\leftrightarrow|\\Leftrightarrow"# => Lexeme::Iff,
	r#"T|true|⊤|\\top"# => Lexeme::True,
	r#"F|false|⊥|\\bot"# => Lexeme::False,
	r#"[A-Za-z_][A-Za-z0-9_]*"# => Lexeme::Identifier,
	r#"."# => Lexeme::Illegal,
}

/// A token before the variable table is fixed.
enum Pending<'a> {
	Fixed(TokenKind),
	Named(&'a str),
}

fn character_error(input: &str, start: usize, problem: fn(char) -> LexProblem) -> LexError {
	let c = input[start..].chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
	LexError {
		problem: problem(c),
		start,
		end: start + c.len_utf8(),
	}
}

pub fn scan(input: &str) -> Result<Scan, LexError> {
	if let Some((start, _)) = input.char_indices().find(|(_, c)| !is_allowed(*c)) {
		log::debug!(target: targets::SCANNER, "Disallowed character at {start}");
		return Err(character_error(input, start, LexProblem::DisallowedCharacter));
	}

	let mut pending: Vec<(Pending, usize, usize)> = Vec::new();
	let mut seen: HashSet<&str> = HashSet::new();

	let mut remaining = input;
	while !remaining.is_empty() {
		let start = input.len() - remaining.len();
		let (lexeme, rest) = match next_lexeme(remaining) {
			Some(found) => found,
			None => return Err(character_error(input, start, LexProblem::UnexpectedCharacter)),
		};
		let end = input.len() - rest.len();
		remaining = rest;

		let kind = match lexeme {
			Lexeme::Whitespace => continue,
			Lexeme::Illegal => {
				log::debug!(target: targets::SCANNER, "Unexpected character at {start}");
				return Err(character_error(input, start, LexProblem::UnexpectedCharacter));
			}
			Lexeme::Identifier => {
				let name = &input[start..end];
				seen.insert(name);
				pending.push((Pending::Named(name), start, end));
				continue;
			}
			Lexeme::Open => TokenKind::OpenParen,
			Lexeme::Close => TokenKind::CloseParen,
			Lexeme::Not => TokenKind::Not,
			Lexeme::And => TokenKind::And,
			Lexeme::Or => TokenKind::Or,
			Lexeme::Implies => TokenKind::Implies,
			Lexeme::Iff => TokenKind::Iff,
			Lexeme::True => TokenKind::True,
			Lexeme::False => TokenKind::False,
		};
		log::trace!(target: targets::SCANNER, "{kind:?} at {start}..{end}");
		pending.push((Pending::Fixed(kind), start, end));
	}

	let mut variables: Vec<String> = seen.into_iter().map(str::to_owned).collect();
	variables.sort();

	let mut tokens: Vec<Token> = pending
		.into_iter()
		.map(|(token, start, end)| {
			let kind = match token {
				Pending::Fixed(kind) => kind,
				Pending::Named(name) => {
					let index = variables
						.binary_search_by(|variable| variable.as_str().cmp(name))
						.expect("scanned variable missing from the table");
					TokenKind::Variable(index)
				}
			};
			Token { kind, start, end }
		})
		.collect();

	tokens.push(Token {
		kind: TokenKind::End,
		start: input.len(),
		end: input.len(),
	});

	log::debug!(target: targets::SCANNER, "{} tokens over variables {variables:?}", tokens.len());

	Ok(Scan { tokens, variables })
}
