use clap::Parser;
use ipv4_subnet_calc::cli::{run, Cli};
use ipv4_subnet_calc::config::Config;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    let config = Config::from_env();
    if let Err(e) = log4rs::init_file(&config.log_config, Default::default()) {
        eprintln!(
            "Logging disabled, cannot load {}: {e}",
            config.log_config.display()
        );
    }
    log::info!("#Start main() address={}", cli.address);

    let output = run(&cli, &config)?;
    print!("{}", output.rendered);
    if !output.rendered.ends_with('\n') {
        println!();
    }

    log::info!("#End main()");
    match output.error {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}
