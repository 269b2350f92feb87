use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("pickset")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Drive and inspect multi-category dual-list selections")
        .long_about("pickset keeps, for every category of a catalog, a pair of 'available' and 'selected' lists. Items move between the lists by click, bulk toggle or drag and drop, while a per-category search filters the available list. The selection can be exported as a form query string and restored from one.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Load this config file instead of ~/.pickset and ./.pickset")
                .global(true)
                .conflicts_with("sample"),
        )
        .arg(
            Arg::new("sample")
                .long("sample")
                .help("Use the built-in sample catalog (regions, companies, branches, sub-branches, languages)")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("show")
                .about("Show both lists and the toggle state of each category")
                .arg(
                    Arg::new("category")
                        .help("Only show this category")
                        .index(1),
                )
                .arg(
                    Arg::new("query")
                        .long("query")
                        .short('q')
                        .help("Filter the available list of the shown category")
                        .requires("category"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("apply")
                .about("Replay a JSON list of commands and report the resulting events")
                .long_about(
                    "Reads a JSON array of commands, dispatches them in order and prints every event they produced, followed by the final state.\n\n\
                    Example file:\n  \
                    [{\"command\": \"select\", \"category\": \"lang\", \"item\": \"lang2\"},\n   \
                    {\"command\": \"set_query\", \"category\": \"lang\", \"query\": \"ger\"},\n   \
                    {\"command\": \"select_all_visible\", \"category\": \"lang\"}]\n\n\
                    Use '-' to read from stdin."
                )
                .arg(
                    Arg::new("file")
                        .help("Path to the command file, or '-' for stdin")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("strict")
                        .long("strict")
                        .help("Fail on unknown category or item references instead of ignoring them")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Print the selection as a form query string")
                .arg(
                    Arg::new("apply")
                        .long("apply")
                        .short('a')
                        .help("Replay this command file before exporting"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output the payload fields in JSON format")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("restore")
                .about("Restore the selection from an exported query string and show it")
                .arg(
                    Arg::new("query")
                        .help("Query string, e.g. 'regions=Europe&languages=French'")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("sample-config")
                .about("Print the built-in sample catalog as a config file"),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(
                    Arg::new("shell")
                        .help("Shell to generate completions for")
                        .required(true)
                        .index(1)
                        .value_parser(clap::value_parser!(clap_complete::Shell)),
                ),
        )
}
