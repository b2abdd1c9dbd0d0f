use clap::Parser;
use request_params::adapters::json;
use request_params::utils::{logger, validation::Validate};
use request_params::{CliConfig, NormalizedParams, NormalizerConfig, ParamsError, QueryParams};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    let normalizer_config = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            NormalizerConfig::from_file(path)
        }
        None => Ok(NormalizerConfig::default()),
    }
    .and_then(|c| c.validate().map(|_| c));

    // 驗證配置
    let normalizer_config = match normalizer_config {
        Ok(c) => c,
        Err(e) => exit_with(&e),
    };

    let input = match config.read_input(std::io::stdin()) {
        Ok(input) => input,
        Err(e) => exit_with(&e),
    };

    let normalizer = normalizer_config.build_normalizer();
    let result: request_params::Result<NormalizedParams> = if config.json {
        json::parse_body(&input).and_then(|body| normalizer.normalize(&body))
    } else {
        QueryParams::from_target(&input).and_then(|query| normalizer.normalize(&query))
    };

    match result {
        Ok(params) => {
            let rendered = if config.pretty {
                serde_json::to_string_pretty(&params)?
            } else {
                serde_json::to_string(&params)?
            };
            println!("{}", rendered);
            Ok(())
        }
        Err(e) => exit_with(&e),
    }
}

fn exit_with(e: &ParamsError) -> ! {
    tracing::error!("❌ Normalization failed: {}", e);
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    std::process::exit(e.exit_code());
}
