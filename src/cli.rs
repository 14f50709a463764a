use clap::{Arg, ArgMatches, Command};

/// Parse command line arguments.
pub fn parse_args() -> ArgMatches {
    Command::new("helpdeck")
        .arg(
            Arg::new("page")
                .long("page")
                .short('p')
                .help("Path of the page file to edit (defaults to ./helpdeck_page.json)")
                .value_name("FILE"),
        )
        .arg(
            Arg::new("no-page-cache")
                .long("no-page-cache")
                .help("Skip loading and saving the page file (start from the starter layout)")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches()
}
