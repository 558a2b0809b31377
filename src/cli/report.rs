use truthtable::{
	err::ErrorKind,
	joint::JointResult,
	prop_tree::Formula,
	session::Session,
	truth_table::{self, TruthTable},
};

fn value_glyph(value: bool) -> &'static str {
	match value {
		true => "T",
		false => "F",
	}
}

pub fn formula(session: &Session, index: usize, the_formula: &Formula) {
	println!("[{index}] {the_formula}");
	println!("    variables: {}", the_formula.variables.join(", "));
	println!("    {}", truth_table::classify(the_formula));

	if session.config.show_table {
		let table = truth_table::full_table(the_formula);
		print!("{}", render_table(&table));
	}
}

pub fn render_table(table: &TruthTable) -> String {
	let widths: Vec<usize> = table.header.iter().map(|h| h.chars().count().max(1)).collect();

	let mut lines = Vec::with_capacity(table.rows.len() + 2);
	lines.push(table.header.join(" | "));
	lines.push(
		widths
			.iter()
			.map(|width| "-".repeat(*width))
			.collect::<Vec<_>>()
			.join("-+-"),
	);
	for row in &table.rows {
		let cells: Vec<String> = row
			.iter()
			.zip(&widths)
			.map(|(value, width)| format!("{:^width$}", value_glyph(*value), width = *width))
			.collect();
		lines.push(cells.join(" | "));
	}

	let mut rendered = String::new();
	for line in lines {
		rendered.push_str("    ");
		rendered.push_str(line.trim_end());
		rendered.push('\n');
	}
	rendered
}

/// The source with a caret under each character of the span.
pub fn underline(source: &str, (start, end): (usize, usize)) -> String {
	let offset = source[..start].chars().count();
	let width = source[start..end].chars().count().max(1);
	format!("{source}\n{}{}", " ".repeat(offset), "^".repeat(width))
}

pub fn error(source: &str, error: &ErrorKind) {
	match error {
		ErrorKind::Parse(parse_error) => {
			println!("{}", parse_error.description());
			for line in underline(source, parse_error.span()).lines() {
				println!("    {line}");
			}
		}
		ErrorKind::Session(session_error) => {
			println!("{source}");
			println!("    {session_error}");
		}
	}
}

pub fn joint(result: &JointResult) {
	match result {
		JointResult::Satisfiable { variables, witness } => {
			let valuation: Vec<String> = variables
				.iter()
				.zip(witness)
				.map(|(variable, value)| format!("{variable}={}", value_glyph(*value)))
				.collect();
			println!("jointly {result}: {}", valuation.join(" "));
		}
		JointResult::Unsatisfiable => println!("jointly {result}"),
		JointResult::NoFormulas => println!("{result}"),
	}
}
