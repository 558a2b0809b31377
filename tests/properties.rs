use truthtable::{
	err::{LexProblem, ParseError, SyntaxProblem},
	joint::{joint_satisfiable, JointResult},
	prop_tree::Formula,
	truth_table::{assignments, classify, full_table, Classification},
};

fn formula(text: &str) -> Formula {
	Formula::parse(text).unwrap()
}

fn column(formula: &Formula) -> Vec<bool> {
	assignments(formula.variable_count())
		.map(|assignment| formula.evaluate(&assignment))
		.collect()
}

mod reparse {
	use super::*;

	#[test]
	fn formatted_text_reads_back_equivalently() {
		for text in [
			"p",
			"~p and q or r",
			"p -> q -> r",
			"(a <-> b) \\/ ~(c /\\ T)",
			"!x_1 && (x_2 || F) => x_3",
			"\\lnot p \\Leftrightarrow q \\to r",
			"⊤ ∧ ⊥",
			"not not p implies (q iff r)",
		] {
			let original = formula(text);
			let reread = formula(&original.formatted);
			assert_eq!(original.variables, reread.variables, "{text}");
			assert_eq!(original.formatted, reread.formatted, "{text}");
			assert_eq!(column(&original), column(&reread), "{text}");
		}
	}
}

mod evaluation {
	use super::*;

	#[test]
	fn connective_tables() {
		// Rows are p, q = TT, TF, FT, FF.
		assert_eq!(column(&formula("p -> q")), vec![true, false, true, true]);
		assert_eq!(column(&formula("p and q")), vec![true, false, false, false]);
		assert_eq!(column(&formula("p or q")), vec![true, true, true, false]);
		assert_eq!(column(&formula("p <-> q")), vec![true, false, false, true]);
		assert_eq!(column(&formula("~p")), vec![false, true]);
	}
}

mod classification {
	use super::*;

	#[test]
	fn examples() {
		assert_eq!(classify(&formula("p or not p")), Classification::Tautology);
		assert_eq!(classify(&formula("p and not p")), Classification::Contradiction);
		assert_eq!(classify(&formula("p and q")), Classification::Contingency);
		assert_eq!(classify(&formula("T")), Classification::Tautology);
		assert_eq!(classify(&formula("F")), Classification::Contradiction);
	}

	#[test]
	fn table_shape() {
		let f = formula("(p -> q) and (q -> r)");
		let table = full_table(&f);
		assert_eq!(table.header.len(), 3 + 3);
		assert_eq!(table.rows.len(), 8);
		assert!(table.rows.iter().all(|row| row.len() == table.header.len()));
		assert_eq!(table.formula_column().collect::<Vec<_>>(), column(&f));
	}

	#[test]
	fn table_of_a_variable() {
		let table = full_table(&formula("(q)"));
		assert_eq!(table.header, vec!["q"]);
		assert_eq!(table.formula_column().collect::<Vec<_>>(), vec![true, false]);
	}
}

mod joint {
	use super::*;

	#[test]
	fn examples() {
		let contradictory = vec![formula("p"), formula("not p")];
		assert_eq!(joint_satisfiable(&contradictory), JointResult::Unsatisfiable);

		let modus_ponens = vec![formula("p -> q"), formula("p")];
		match joint_satisfiable(&modus_ponens) {
			JointResult::Satisfiable { variables, witness } => {
				assert_eq!(variables, vec!["p", "q"]);
				assert_eq!(witness, vec![true, true]);
			}
			otherwise => panic!("unexpected {otherwise:?}"),
		}

		assert_eq!(joint_satisfiable(&[]), JointResult::NoFormulas);
	}
}

mod errors {
	use super::*;

	fn syntax(text: &str) -> (SyntaxProblem, (usize, usize)) {
		match Formula::parse(text) {
			Err(ParseError::Syntax(e)) => (e.problem, (e.start, e.end)),
			otherwise => panic!("unexpected {otherwise:?}"),
		}
	}

	#[test]
	fn localisation() {
		assert_eq!(syntax("p and"), (SyntaxProblem::MissingOperand, (2, 5)));
		assert_eq!(syntax("(p"), (SyntaxProblem::UnmatchedOpen, (0, 1)));
		assert_eq!(syntax(")"), (SyntaxProblem::UnmatchedClose, (0, 1)));
		assert_eq!(syntax(""), (SyntaxProblem::EmptyInput, (0, 0)));
	}

	#[test]
	fn lexical() {
		match Formula::parse("p ∧ q ∧ ∃") {
			Err(ParseError::Lex(e)) => {
				assert_eq!(e.problem, LexProblem::DisallowedCharacter('∃'));
				assert_eq!((e.start, e.end), (12, 15));
			}
			otherwise => panic!("unexpected {otherwise:?}"),
		}
	}
}

mod structure {
	use super::*;

	#[test]
	fn variable_indexing() {
		let f = formula("r and p and q");
		assert_eq!(f.variables, vec!["p", "q", "r"]);
		assert_eq!(f.formatted, "((r ∧ p) ∧ q)");
	}

	#[test]
	fn precedence_and_grouping() {
		assert_eq!(formula("p or q and r").formatted, "(p ∨ (q ∧ r))");
		assert_eq!(formula("p -> q -> r").formatted, "((p → q) → r)");
	}

	#[test]
	fn maximal_munch() {
		assert_eq!(formula("p \\Leftrightarrow q").formatted, "(p ↔ q)");
		assert_eq!(formula("p implies q").formatted, "(p → q)");
		assert_eq!(formula("impl").variables, vec!["impl"]);
	}
}
