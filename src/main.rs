use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;
use subnet_summary::cli;
use subnet_summary::config::Settings;

/// Loads the log4rs config file, or logs to stderr at `settings.log_level`.
fn init_logging(settings: &Settings) -> Result<(), Box<dyn Error>> {
    if Path::new(&settings.log_config).exists() {
        log4rs::init_file(&settings.log_config, Default::default())?;
        return Ok(());
    }
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(
            "{d(%H:%M:%S)} {h({l})} {t} - {m}{n}",
        )))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(settings.log_level))?;
    log4rs::init_config(config)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let settings = Settings::from_env()?;
    init_logging(&settings)?;
    log::info!("#Start main() output={}", settings.output);

    let matches = cli::command().get_matches();
    let out = cli::run_matches(&matches, &settings)?;
    print!("{out}");
    Ok(())
}
