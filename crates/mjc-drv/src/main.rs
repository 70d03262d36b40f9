use clap::Parser as ClapParser;
use mjc_drv::{init_logging, run, Cli};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet);

    match run(&cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("mjc: error: {err:#}");
            std::process::exit(1);
        }
    }
}
