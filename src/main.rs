use anyhow::Context;
use clap::Parser;
use clock_shop::config::Settings;
use clock_shop::utils::error::ErrorSeverity;
use clock_shop::utils::{logger, validation::Validate};
use clock_shop::{CliConfig, Clock, ClockShop, TomlConfig};

fn load_settings(cli: &CliConfig) -> anyhow::Result<Settings> {
    let file = match &cli.config {
        Some(path) => Some(
            TomlConfig::from_file(path)
                .with_context(|| format!("Failed to load config file '{}'", path))?,
        ),
        None => None,
    };

    let settings = cli
        .resolve(file.as_ref())
        .context("Failed to merge configuration")?;
    settings
        .validate()
        .context("Configuration validation failed")?;
    Ok(settings)
}

/// 顯示讀取系統時間前後的時鐘
fn show_current_time() -> clock_shop::Result<()> {
    println!("Testing set_to_current_time()");
    println!("----------------------------------");

    let mut clock = Clock::new(1, 1, 1)?;
    println!("Clock before: {}", clock);

    clock.set_to_current_time()?;
    println!("Clock after set_to_current_time(): {}", clock);
    println!(
        "System time for comparison: {}",
        chrono::Local::now().format("%H:%M:%S%.3f")
    );
    Ok(())
}

fn run(settings: &Settings) -> clock_shop::Result<()> {
    if settings.now {
        show_current_time()?;
    }

    let mut shop = ClockShop::new();

    if let Some(input) = &settings.input {
        tracing::info!("📁 Loading clocks from: {}", input);
        let added = shop.fill_from_file(input)?;
        tracing::info!("Loaded {} clocks", added);
    }

    shop.extend(settings.add.iter().copied());

    if settings.sort {
        shop.sort();
    }

    if settings.is_json() {
        println!("{}", shop.to_json()?);
    } else {
        print!("{}", shop);
    }

    if let Some(target) = &settings.find {
        match shop.find(target) {
            Some(index) => println!("🔍 {} found at index {}", target, index),
            None => println!("🔍 {} not found", target),
        }
    }

    if let Some(output) = &settings.output {
        shop.write_to_file(output)?;
        tracing::info!("📁 Shop saved to: {}", output);
    }

    Ok(())
}

fn main() {
    let cli = CliConfig::parse();

    let settings = match load_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {:#}", e);
            eprintln!("💡 Make sure the config file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 初始化日誌
    if settings.json_logs {
        logger::init_json_logger(settings.verbose, settings.log_level.as_deref());
    } else {
        logger::init_cli_logger(settings.verbose, settings.log_level.as_deref());
    }

    tracing::info!("Starting clock-shop CLI");
    tracing::debug!("Effective settings: {:?}", settings);

    if let Err(e) = run(&settings) {
        tracing::error!(
            "❌ clock-shop failed: {} (Severity: {:?})",
            e,
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 建議: {}", e.recovery_suggestion());

        // 根據錯誤嚴重程度決定退出碼
        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}
