use clap::Parser;
use std::io::Read;
use ui_utils::config::toml_config::MAX_SAMPLE_COUNT;
use ui_utils::config::Command;
use ui_utils::utils::error::{ErrorSeverity, Result};
use ui_utils::utils::logger;
use ui_utils::utils::validation::{self, Validate};
use ui_utils::{
    CliConfig, IntervalSampler, IntervalSet, MarkupOptions, MarkupRewriter, TomlConfig, UtilsError,
};

fn main() {
    let args = CliConfig::parse();

    // 先載入配置，日誌等級可能來自設定檔
    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(exit_code(&e));
        }
    };

    let level = config.logging.level.as_deref();
    if args.log_json || config.log_json() {
        logger::init_json_logger(args.verbose, level);
    } else {
        logger::init_cli_logger(args.verbose, level);
    }

    tracing::debug!("CLI args: {:?}", args);

    if let Err(e) = run(&args, &config) {
        tracing::error!(
            "❌ {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(exit_code(&e));
    }
}

fn load_config(args: &CliConfig) -> Result<TomlConfig> {
    let config = match &args.config {
        Some(path) => TomlConfig::from_file(path)?,
        None => TomlConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

fn exit_code(e: &UtilsError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn run(args: &CliConfig, config: &TomlConfig) -> Result<()> {
    match &args.command {
        Command::Linkify {
            text,
            images_width,
            images_height,
        } => {
            let text = match text {
                Some(text) => text.clone(),
                None => {
                    let mut buffer = String::new();
                    std::io::stdin().read_to_string(&mut buffer)?;
                    buffer
                }
            };

            // 命令列參數優先於設定檔
            let defaults = config.markup_options();
            let options = MarkupOptions {
                images_width: images_width.or(defaults.images_width),
                images_height: images_height.or(defaults.images_height),
            };

            println!("{}", MarkupRewriter::new(options).rewrite(&text));
        }
        Command::Sample {
            intervals,
            seed,
            count,
            json,
        } => {
            let set = if intervals.is_empty() {
                config.sampler.interval_set()?
            } else {
                IntervalSet::from_pairs(intervals)?
            };
            let count = count.unwrap_or_else(|| config.sample_count());
            validation::validate_range("count", count, 1, MAX_SAMPLE_COUNT)?;

            let values = match seed.or(config.sampler.seed) {
                Some(seed) => {
                    tracing::info!("🎲 Using seed {}", seed);
                    IntervalSampler::from_seed(seed).sample_n(&set, count as usize)
                }
                None => IntervalSampler::from_thread_rng().sample_n(&set, count as usize),
            };

            if *json {
                println!("{}", serde_json::to_string(&values)?);
            } else {
                for value in values {
                    println!("{}", value);
                }
            }
        }
    }

    Ok(())
}
