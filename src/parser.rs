//! Operator-precedence parsing of a [Scan] to a [Prop].
//!
//! Two stacks are kept, one of pending operators and open parentheses and one of operands.
//! The parser alternates between needing an operand and having one:
//! - While an operand is needed, variables and constants become operands and open parentheses and negations are stacked.
//! - Once an operand is had, a binary connective (or the end of input) reduces every stacked connective which binds at least as tightly, and is then stacked itself.
//!   Ties reduce the stacked connective, so connectives of equal precedence group to the left.
//!
//! Whenever an operand is found, any negations on top of the operator stack are applied to it before it is pushed.
//!
//! Each operand carries the depth of its deepest chain of connectives, and a formula nested deeper than [NESTING_LIMIT] is rejected.
//! Evaluating, displaying, and dropping a [Prop] each recurse once per level, so the limit bounds their use of the stack.

use crate::{
	err::{SyntaxError, SyntaxProblem},
	misc::log::targets,
	prop_tree::Prop,
	scanner::{Scan, Token, TokenKind},
};

/// The output of a parse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Parsed {
	pub root: Prop,
	pub variables: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Stacked {
	Open,
	Not,
	And,
	Or,
	Implies,
	Iff,
}

impl Stacked {
	fn binary(kind: TokenKind) -> Option<Stacked> {
		match kind {
			TokenKind::And => Some(Stacked::And),
			TokenKind::Or => Some(Stacked::Or),
			TokenKind::Implies => Some(Stacked::Implies),
			TokenKind::Iff => Some(Stacked::Iff),
			_ => None,
		}
	}

	/// How tightly the connective binds, if binary.
	fn precedence(&self) -> Option<i8> {
		match self {
			Stacked::Iff => Some(0),
			Stacked::Implies => Some(1),
			Stacked::Or => Some(2),
			Stacked::And => Some(3),
			Stacked::Open | Stacked::Not => None,
		}
	}

	fn apply(&self, left: Prop, right: Prop) -> Prop {
		let (left, right) = (Box::new(left), Box::new(right));
		match self {
			Stacked::And => Prop::And(left, right),
			Stacked::Or => Prop::Or(left, right),
			Stacked::Implies => Prop::Implies(left, right),
			Stacked::Iff => Prop::Iff(left, right),
			Stacked::Open | Stacked::Not => panic!("{self:?} is not a binary connective"),
		}
	}
}

/// The most connectives any path from the root of a parsed formula to a leaf may pass through.
pub const NESTING_LIMIT: usize = 1024;

/// The end of input reduces everything up to an open parenthesis.
const END_PRECEDENCE: i8 = -1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
	NeedOperand,
	HaveOperand,
}

struct StackEntry {
	op: Stacked,
	start: usize,
	end: usize,
}

impl StackEntry {
	fn error(&self, problem: SyntaxProblem) -> SyntaxError {
		SyntaxError {
			problem,
			start: self.start,
			end: self.end,
		}
	}
}

/// An operand, with the count of connectives on its longest path to a leaf.
struct Operand {
	prop: Prop,
	depth: usize,
}

impl Operand {
	fn leaf(prop: Prop) -> Self {
		Operand { prop, depth: 0 }
	}
}

/// The depth of a connective applied at `entry` to operands of at most `depth`.
fn deepen(depth: usize, entry: &StackEntry) -> Result<usize, SyntaxError> {
	match depth < NESTING_LIMIT {
		true => Ok(depth + 1),
		false => Err(entry.error(SyntaxProblem::TooDeep)),
	}
}

fn token_error(token: &Token, problem: SyntaxProblem) -> SyntaxError {
	SyntaxError {
		problem,
		start: token.start,
		end: token.end,
	}
}

#[derive(Default)]
struct Stacks {
	operators: Vec<StackEntry>,
	operands: Vec<Operand>,
}

impl Stacks {
	/// Pushes the operand, wrapped in each negation on top of the operator stack.
	fn push_operand(&mut self, mut operand: Operand) -> Result<(), SyntaxError> {
		while let Some(entry) = self.operators.last() {
			if entry.op != Stacked::Not {
				break;
			}
			operand = Operand {
				depth: deepen(operand.depth, entry)?,
				prop: Prop::Not(Box::new(operand.prop)),
			};
			self.operators.pop();
		}
		self.operands.push(operand);
		Ok(())
	}

	/// Applies the top of the operator stack to the top two operands.
	fn reduce(&mut self) -> Result<(), SyntaxError> {
		let entry = self.operators.pop().expect("reduction without an operator");
		let right = self.operands.pop().expect("reduction without a right operand");
		let left = self.operands.pop().expect("reduction without a left operand");
		log::trace!(target: targets::PARSER, "Reduce {:?} at {}", entry.op, entry.start);
		let depth = deepen(left.depth.max(right.depth), &entry)?;
		self.operands.push(Operand {
			prop: entry.op.apply(left.prop, right.prop),
			depth,
		});
		Ok(())
	}

	/// Reduces while the top of the operator stack is a binary connective binding at least as tightly as `precedence`.
	fn reduce_above(&mut self, precedence: i8) -> Result<(), SyntaxError> {
		while let Some(top) = self.operators.last().and_then(|entry| entry.op.precedence()) {
			if top < precedence {
				break;
			}
			self.reduce()?;
		}
		Ok(())
	}

	/// Reduces back to the nearest open parenthesis and removes it.
	fn close(&mut self, close: &Token) -> Result<(), SyntaxError> {
		loop {
			let top = match self.operators.last() {
				None => return Err(token_error(close, SyntaxProblem::UnmatchedClose)),
				// Unreachable while negations are flushed onto each pushed operand.
				Some(entry) if entry.op == Stacked::Not => {
					return Err(entry.error(SyntaxProblem::NothingNegated));
				}
				Some(entry) => entry.op,
			};
			if top == Stacked::Open {
				self.operators.pop();
				return Ok(());
			}
			self.reduce()?;
		}
	}

	/// The error for input which stops while an operand is needed.
	fn missing_operand(&self, token: &Token) -> SyntaxError {
		match self.operators.last() {
			None if self.operands.is_empty() && token.kind == TokenKind::End => {
				token_error(token, SyntaxProblem::EmptyInput)
			}
			None => token_error(token, SyntaxProblem::UnmatchedClose),
			Some(entry) => match entry.op {
				Stacked::Open if token.kind == TokenKind::End => {
					entry.error(SyntaxProblem::UnmatchedOpen)
				}
				Stacked::Open => token_error(token, SyntaxProblem::ExpectedOperand),
				Stacked::Not => entry.error(SyntaxProblem::DanglingNegation),
				_ => entry.error(SyntaxProblem::MissingOperand),
			},
		}
	}
}

pub fn parse(scan: Scan) -> Result<Parsed, SyntaxError> {
	let Scan { tokens, variables } = scan;

	let mut stacks = Stacks::default();
	let mut state = State::NeedOperand;

	for token in &tokens {
		log::trace!(target: targets::PARSER, "{state:?} with {:?}", token.kind);
		let entry = |op| StackEntry {
			op,
			start: token.start,
			end: token.end,
		};

		match state {
			State::NeedOperand => match token.kind {
				TokenKind::Variable(index) => {
					stacks.push_operand(Operand::leaf(Prop::Var(index)))?;
					state = State::HaveOperand;
				}
				TokenKind::True => {
					stacks.push_operand(Operand::leaf(Prop::True))?;
					state = State::HaveOperand;
				}
				TokenKind::False => {
					stacks.push_operand(Operand::leaf(Prop::False))?;
					state = State::HaveOperand;
				}
				TokenKind::OpenParen => stacks.operators.push(entry(Stacked::Open)),
				TokenKind::Not => stacks.operators.push(entry(Stacked::Not)),
				TokenKind::End | TokenKind::CloseParen => {
					return Err(stacks.missing_operand(token));
				}
				TokenKind::And | TokenKind::Or | TokenKind::Implies | TokenKind::Iff => {
					return Err(token_error(token, SyntaxProblem::ExpectedOperand));
				}
			},

			State::HaveOperand => match token.kind {
				TokenKind::End => {
					stacks.reduce_above(END_PRECEDENCE)?;
					break;
				}
				TokenKind::CloseParen => {
					stacks.close(token)?;
					let operand = stacks.operands.pop().expect("parenthesis closed without an operand");
					stacks.push_operand(operand)?;
				}
				kind => match Stacked::binary(kind) {
					Some(op) => {
						if let Some(precedence) = op.precedence() {
							stacks.reduce_above(precedence)?;
						}
						stacks.operators.push(entry(op));
						state = State::NeedOperand;
					}
					None => return Err(token_error(token, SyntaxProblem::ExpectedOperator)),
				},
			},
		}
	}

	// Everything but open parentheses was reduced by the end of input.
	if let Some(entry) = stacks.operators.last() {
		assert_eq!(entry.op, Stacked::Open, "unreduced {:?} after the end of input", entry.op);
		return Err(entry.error(SyntaxProblem::UnmatchedOpen));
	}

	assert_eq!(stacks.operands.len(), 1, "formula not fully reduced");
	let root = stacks.operands.pop().expect("formula not fully reduced").prop;
	log::debug!(target: targets::PARSER, "Parsed {}", root.display(&variables));

	Ok(Parsed { root, variables })
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::scanner::scan;

	fn parse_str(input: &str) -> Result<String, SyntaxError> {
		let parsed = parse(scan(input).unwrap())?;
		Ok(parsed.root.format(&parsed.variables))
	}

	fn problem(input: &str) -> (SyntaxProblem, usize, usize) {
		let e = parse_str(input).unwrap_err();
		(e.problem, e.start, e.end)
	}

	#[test]
	fn test_precedence() {
		assert_eq!(parse_str("p or q and r").unwrap(), "(p ∨ (q ∧ r))");
		assert_eq!(parse_str("p and q or r").unwrap(), "((p ∧ q) ∨ r)");
		assert_eq!(parse_str("p -> q or r <-> s").unwrap(), "((p → (q ∨ r)) ↔ s)");
		assert_eq!(parse_str("p <-> q -> r").unwrap(), "(p ↔ (q → r))");
	}

	#[test]
	fn test_equal_precedence_groups_left() {
		assert_eq!(parse_str("p -> q -> r").unwrap(), "((p → q) → r)");
		assert_eq!(parse_str("p and q and r").unwrap(), "((p ∧ q) ∧ r)");
		assert_eq!(parse_str("p iff q iff r").unwrap(), "((p ↔ q) ↔ r)");
	}

	#[test]
	fn test_negation() {
		assert_eq!(parse_str("~p and q").unwrap(), "(¬p ∧ q)");
		assert_eq!(parse_str("~~p").unwrap(), "¬¬p");
		assert_eq!(parse_str("~(p or q)").unwrap(), "¬(p ∨ q)");
		assert_eq!(parse_str("p and ~~(~q)").unwrap(), "(p ∧ ¬¬¬q)");
	}

	#[test]
	fn test_parentheses() {
		assert_eq!(parse_str("(p or q) and r").unwrap(), "((p ∨ q) ∧ r)");
		assert_eq!(parse_str("((p))").unwrap(), "p");
		assert_eq!(parse_str("p -> (q -> r)").unwrap(), "(p → (q → r))");
		assert_eq!(parse_str("T").unwrap(), "⊤");
	}

	#[test]
	fn test_errors() {
		assert_eq!(problem(""), (SyntaxProblem::EmptyInput, 0, 0));
		assert_eq!(problem("  "), (SyntaxProblem::EmptyInput, 2, 2));
		assert_eq!(problem("p and"), (SyntaxProblem::MissingOperand, 2, 5));
		assert_eq!(problem("(p"), (SyntaxProblem::UnmatchedOpen, 0, 1));
		assert_eq!(problem("((p) or (q"), (SyntaxProblem::UnmatchedOpen, 8, 9));
		assert_eq!(problem("("), (SyntaxProblem::UnmatchedOpen, 0, 1));
		assert_eq!(problem(")"), (SyntaxProblem::UnmatchedClose, 0, 1));
		assert_eq!(problem("p)"), (SyntaxProblem::UnmatchedClose, 1, 2));
		assert_eq!(problem("()"), (SyntaxProblem::ExpectedOperand, 1, 2));
		assert_eq!(problem("~"), (SyntaxProblem::DanglingNegation, 0, 1));
		assert_eq!(problem("(~)"), (SyntaxProblem::DanglingNegation, 1, 2));
		assert_eq!(problem("and p"), (SyntaxProblem::ExpectedOperand, 0, 3));
		assert_eq!(problem("p q"), (SyntaxProblem::ExpectedOperator, 2, 3));
		assert_eq!(problem("p ~q"), (SyntaxProblem::ExpectedOperator, 2, 3));
		assert_eq!(problem("p or or q"), (SyntaxProblem::ExpectedOperand, 5, 7));
	}

	#[test]
	fn test_nesting_limit() {
		let negations = |count: usize| format!("{}p", "~".repeat(count));
		assert!(parse_str(&negations(NESTING_LIMIT)).is_ok());
		assert_eq!(
			problem(&negations(NESTING_LIMIT + 1)),
			(SyntaxProblem::TooDeep, 0, 1)
		);
		assert_eq!(problem(&negations(200_000)).0, SyntaxProblem::TooDeep);

		let chain = |count: usize| format!("p{}", " and p".repeat(count));
		assert!(parse_str(&chain(NESTING_LIMIT)).is_ok());
		let last_and = 2 + 6 * NESTING_LIMIT;
		assert_eq!(
			problem(&chain(NESTING_LIMIT + 1)),
			(SyntaxProblem::TooDeep, last_and, last_and + 3)
		);

		let nested = |count: usize| format!("{}p{}", "~(p or ".repeat(count), ")".repeat(count));
		assert!(parse_str(&nested(NESTING_LIMIT / 2)).is_ok());
		assert_eq!(problem(&nested(NESTING_LIMIT)).0, SyntaxProblem::TooDeep);
	}

	#[test]
	fn test_parentheses_do_not_nest_connectives() {
		let wrapped = format!("{}p{}", "(".repeat(5000), ")".repeat(5000));
		assert_eq!(parse_str(&wrapped).unwrap(), "p");
	}
}
