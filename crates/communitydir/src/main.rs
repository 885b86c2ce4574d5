//! `cdir` - CLI for communitydir
//!
//! This binary exposes the amount-in-words preview and the phone helpers on
//! the command line.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use communitydir::cli::{Cli, Command, ConfigCommand, PhoneCommand, WordsCommand};
use communitydir::phone::clean_phone_number;
use communitydir::{init_logging, Config};

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone()).context("loading configuration")?;
    debug!(?config, "Configuration loaded");

    match cli.command {
        Command::Words(words_cmd) => handle_words(&config, &words_cmd),
        Command::Phone(phone_cmd) => handle_phone(&config, &phone_cmd),
        Command::Config(config_cmd) => handle_config(&config, config_cmd),
    }
}

fn handle_words(config: &Config, cmd: &WordsCommand) -> anyhow::Result<ExitCode> {
    let mut config = config.clone();
    if let Some(policy) = cmd.negative {
        config.words.negative_policy = policy.into();
    }
    if let Some(overflow) = cmd.cents_overflow {
        config.words.cents_overflow = overflow.into();
    }

    let preview = config.amount_preview(cmd.currency.as_deref());

    if cmd.json {
        let report = preview.report(&cmd.amount);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if let Some(line) = preview.render(&cmd.amount) {
        println!("{line}");
    }
    Ok(ExitCode::SUCCESS)
}

fn handle_phone(config: &Config, cmd: &PhoneCommand) -> anyhow::Result<ExitCode> {
    let formatter = config.phone_formatter()?;

    match cmd {
        PhoneCommand::Format { number, json } => {
            if *json {
                let status = serde_json::json!({
                    "input": number,
                    "kind": formatter.classify(number),
                    "formatted": formatter.format(number),
                });
                println!("{}", serde_json::to_string_pretty(&status)?);
            } else {
                println!("{}", formatter.format(number));
            }
            Ok(ExitCode::SUCCESS)
        }
        PhoneCommand::Validate { number, json } => {
            let kind = formatter.classify(number);
            if *json {
                let status = serde_json::json!({
                    "input": number,
                    "valid": kind.is_some(),
                    "kind": kind,
                });
                println!("{}", serde_json::to_string_pretty(&status)?);
            } else {
                match kind {
                    Some(kind) => println!("valid ({kind:?})"),
                    None => println!("invalid"),
                }
            }
            Ok(if kind.is_some() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        PhoneCommand::Clean { number } => {
            println!("{}", clean_phone_number(number));
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<ExitCode> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Words]");
                println!("  Currency label:     {}", config.words.currency_label);
                println!("  Negative policy:    {:?}", config.words.negative_policy);
                println!("  Cents overflow:     {:?}", config.words.cents_overflow);
                println!();
                println!("[Phone]");
                println!("  Area code:          {}", config.phone.area_code);
                println!("  Country code:       {}", config.phone.country_code);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            if let Err(e) = Config::load_from(Some(path)) {
                println!("Configuration error: {e}");
                return Ok(ExitCode::FAILURE);
            }
            println!("Configuration is valid.");
        }
    }
    Ok(ExitCode::SUCCESS)
}
