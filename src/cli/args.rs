use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

use truthtable::config::{defaults, Config};

pub fn cli() -> Command {
	Command::new("truthtable")
		.about("Classifies propositional formulas by their truth tables")
		.version(env!("CARGO_PKG_VERSION"))

		.arg(Arg::new("formulas")
			.required(false)
			.num_args(0..)
			.help("The formulas to examine. If none are given, formulas are read from stdin, one per line."))

		.arg(Arg::new("table")
			.short('t')
			.long("table")
			.action(ArgAction::SetTrue)
			.help("Display the full truth table of each formula."))

		.arg(Arg::new("joint")
			.short('j')
			.long("joint")
			.action(ArgAction::SetTrue)
			.help("Determine whether the formulas are jointly satisfiable."))

		.arg(Arg::new("variable_limit")
			.long("variable-limit")
			.value_parser(value_parser!(usize))
			.num_args(1)
			.help(format!("The most variables a formula may have.
Default: {}

A limit of 0 allows any number of variables.", defaults::VARIABLE_LIMIT)))
}

pub fn config_from_args(args: &ArgMatches) -> Config {
	let mut the_config = Config::default();

	if let Ok(Some(limit)) = args.try_get_one::<usize>("variable_limit") {
		the_config = the_config.with_variable_limit(*limit)
	};

	the_config.show_table = args.get_flag("table");
	the_config.joint = args.get_flag("joint");

	the_config
}
