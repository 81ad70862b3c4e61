use clap::{Arg, ArgAction, Command};

/// Build the `bch` command line
pub fn build_cli() -> Command {
    let code_file = Arg::new("code_file")
        .help("Code-definition file")
        .value_name("CODE_FILE")
        .required(true);
    let input = Arg::new("input")
        .help("Input file (default or '-': stdin)")
        .value_name("FILE");

    Command::new("bch")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Binary BCH code generator, encoder and decoder")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("gen")
                .about("Generate a code and write its definition file")
                .arg(
                    Arg::new("n")
                        .help("Block length")
                        .value_parser(clap::value_parser!(usize))
                        .required(true),
                )
                .arg(
                    Arg::new("b")
                        .help("First exponent of the consecutive root run")
                        .value_parser(clap::value_parser!(usize))
                        .required(true),
                )
                .arg(
                    Arg::new("d")
                        .help("Designed distance")
                        .value_parser(clap::value_parser!(usize))
                        .required(true),
                )
                .arg(code_file.clone()),
        )
        .subcommand(
            Command::new("enc")
                .about("Encode a message")
                .arg(code_file.clone())
                .arg(input.clone()),
        )
        .subcommand(
            Command::new("dec")
                .about("Decode a received word")
                .arg(code_file)
                .arg(input),
        )
        .arg(
            Arg::new("block")
                .short('b')
                .long("block")
                .help("Treat the input as a stream of arbitrary length, split into padded blocks")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("poly-input")
                .short('i')
                .long("poly-input")
                .help("Read input as polynomial text, e.g. [1, 0, 1]")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("poly-output")
                .short('o')
                .long("poly-output")
                .help("Write output as polynomial text instead of packed bits")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Verbose output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .help("Debug output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("pad-short")
                .long("pad-short")
                .help("Zero-extend a short trailing block instead of failing")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("threads")
                .short('t')
                .long("threads")
                .help("Number of CPU threads for computation (0 = auto-detect)")
                .value_name("N")
                .default_value("0")
                .global(true),
        )
        .arg(
            Arg::new("no-parallel")
                .long("no-parallel")
                .help("Disable all parallel processing")
                .action(ArgAction::SetTrue)
                .global(true),
        )
}

pub fn parse_args() -> clap::ArgMatches {
    build_cli().get_matches()
}
