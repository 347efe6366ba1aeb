fn main() {

    // 1. Parse commandline arguments
    let cli_args = faceseed::args::parse_cli_args();

    // 2. Dispatch and run the requested subcommand
    if let Err(err) = faceseed::run(cli_args) {
        println!("{}", err);
        std::process::exit(1);
    }
}
