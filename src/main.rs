use clap::Parser;
use recipe_etl::utils::{logger, validation::Validate};
use recipe_etl::{
    AggregationPipeline, CliConfig, ConfigProvider, HttpFetcher, ListingParser, SelectorSet,
};
use url::Url;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting recipe-etl CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let request = config.to_request();
    let base = Url::parse(config.base_origin())?;

    let fetcher = HttpFetcher::new(config.user_agent(), config.request_timeout())?;
    let parser = ListingParser::new(&SelectorSet::default_site(), base)?;
    let pipeline = AggregationPipeline::new(fetcher, parser, config.clone());

    let results = pipeline.aggregate(&request).await;

    if config.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No results found.");
        return Ok(());
    }

    tracing::info!("✅ Aggregated {} listings", results.len());
    for (i, listing) in results.iter().enumerate() {
        println!("{}. {} — {}", i + 1, listing.record.title, listing.record.detail_link);
        if !listing.summary.is_empty() {
            println!("   {}", listing.summary);
        }
    }

    Ok(())
}
