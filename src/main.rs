use clap::Parser;
use inflation_skill::core::ConversionInput;
use inflation_skill::domain::ports::ConfigProvider;
use inflation_skill::skill::speech;
use inflation_skill::utils::error::ErrorSeverity;
use inflation_skill::utils::{logger, validation::Validate};
use inflation_skill::{CliConfig, FixedYear, Skill, SystemClock, TomlConfig, YearProvider};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    // 載入 TOML 配置 (命令列參數優先), 日誌等級也可能來自這裡
    if let Some(path) = config.config.clone() {
        let file_config = match TomlConfig::from_file(&path) {
            Ok(file_config) => file_config,
            Err(e) => {
                eprintln!(
                    "❌ Failed to load config file '{}': {}",
                    path.display(),
                    e.user_friendly_message()
                );
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(1);
            }
        };
        if let Err(e) = file_config.validate() {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
        config.apply_file_config(&file_config);
    }

    // 初始化日誌
    logger::init_cli_logger(config.log_level());

    tracing::info!("Starting inflation-skill CLI");
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let outcome = match config.current_year {
        Some(year) => run(&config, FixedYear(year)),
        None => run(&config, SystemClock),
    };

    if let Err(e) = outcome {
        tracing::error!("❌ Conversion failed: {} (Severity: {:?})", e, e.severity());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 2,      // 輸入錯誤
            ErrorSeverity::High => 1,     // 配置錯誤
            ErrorSeverity::Critical => 3, // 資料錯誤
        };
        std::process::exit(exit_code);
    }

    Ok(())
}

fn run<C: YearProvider>(config: &CliConfig, clock: C) -> inflation_skill::Result<()> {
    let skill = Skill::from_config(config, clock)?;

    let input = ConversionInput::from_text(
        Some(config.from_year.as_str()),
        Some(config.to_year.as_str()),
        Some(config.amount.as_str()),
    );
    let result = skill.adjuster().convert_input(&input)?;

    let spoken = speech::year_to_year(
        result.request.amount,
        result.adjusted,
        result.request.source_year,
        result.request.target_year,
    );

    if config.json {
        let output = json!({
            "source_year": result.request.source_year,
            "target_year": result.request.target_year,
            "amount": result.request.amount,
            "ratio": result.ratio,
            "adjusted": result.adjusted,
            "spoken": spoken,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", spoken);
    }

    Ok(())
}
