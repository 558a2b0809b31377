use std::io::BufRead;

use truthtable::session::Session;

mod cli;

fn read_stdin() -> Vec<String> {
	let mut sources = Vec::new();
	for line in std::io::stdin().lock().lines() {
		match line {
			Ok(line) if line.trim().is_empty() => {}
			Ok(line) => sources.push(line),
			Err(e) => {
				eprintln!("Failed to read formulas: {e}");
				std::process::exit(1);
			}
		}
	}
	sources
}

fn main() {
	env_logger::init();

	let matches = cli::args::cli().get_matches();
	let config = cli::args::config_from_args(&matches);

	let sources: Vec<String> = match matches.get_many::<String>("formulas") {
		Some(formulas) => formulas.cloned().collect(),
		None => read_stdin(),
	};

	let mut session = Session::from_config(config);
	let mut failed = false;

	for source in &sources {
		match session.add(source) {
			Ok(index) => match session.get(index) {
				Ok(formula) => cli::report::formula(&session, index, formula),
				Err(e) => println!("{e}"),
			},
			Err(e) => {
				failed = true;
				cli::report::error(source, &e);
			}
		}
	}

	if session.config.joint {
		match session.joint() {
			Ok(result) => cli::report::joint(&result),
			Err(e) => {
				failed = true;
				println!("{e}");
			}
		}
	}

	if failed {
		std::process::exit(1);
	}
}
