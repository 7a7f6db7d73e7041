/// Initialize logging based on verbosity flag.
fn init_logger(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

fn main() {

    // 1. Parse commandline arguments
    let cli_args = heron::args::parse_cli_args();
    init_logger(cli_args.options.verbose);

    // 2. Build the target and run it
    if let Err(err) = heron::build_target(cli_args).and_then(heron::run_process) {
        eprintln!("{}", err);
        std::process::exit(err.exit_code());
    }
}
