use outlinegen::outline::format;
use outlinegen::{
    default_model_candidates, Config, GenerationConfig, HfConfig, HfInferenceClient,
    OutlineGenerator, OutlineRequest,
};
use std::env;
use std::fs;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file first
    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded successfully"),
        Err(_) => log::warn!("⚠️  No .env file found, using system environment variables"),
    }

    outlinegen::logger::init_with_config(
        outlinegen::logger::LoggerConfig::development()
            .with_level(outlinegen::logger::LogLevel::Debug),
    )?;

    outlinegen::logger::log_startup_info("outlinegen", env!("CARGO_PKG_VERSION"));

    log::info!("🔍 Checking HuggingFace environment...");

    // Check the credential (without printing the actual value for security)
    let token = match env::var("HF_TOKEN") {
        Ok(token) if !token.trim().is_empty() => {
            log::info!("✅ HF token found in environment");
            log::debug!("Token starts with: {}...", &token[..5.min(token.len())]);
            token
        }
        _ => {
            log::error!("❌ No HF_TOKEN set; get one from https://huggingface.co/settings/tokens");
            return Err("HF_TOKEN is required".into());
        }
    };

    // Topic and optional keyword come from the command line.
    let mut args = env::args().skip(1);
    let topic = args
        .next()
        .unwrap_or_else(|| "how to learn rust".to_string());
    let keyword = args.next();

    let config = Config::new()
        .with_huggingface(HfConfig::from_env().with_token(token.as_str()))
        .with_generation(
            GenerationConfig::new()
                .with_max_new_tokens(1500)
                .with_temperature(0.7),
        );

    outlinegen::logger::log_config_info(&config);

    log::info!("📚 Available models:");
    for model in HfInferenceClient::supported_models() {
        log::info!(
            "  {} - {} ({}): {}",
            model.id,
            model.name,
            model.provider,
            model.description
        );
    }

    log::info!("🔄 Creating inference client...");
    let hf_config = HfConfig::from_env().with_token(token.as_str());
    let client = match HfInferenceClient::new(hf_config) {
        Ok(client) => {
            log::info!("✅ Inference client initialized successfully");
            client
        }
        Err(e) => {
            log::error!("❌ Failed to initialize inference client: {}", e);
            return Err(e.into());
        }
    };

    log::info!("🧪 Resolving a working model...");
    let model_id = match client.resolve_model(&default_model_candidates()).await {
        Ok(model_id) => {
            log::info!("✅ Using model: {}", model_id);
            Some(model_id)
        }
        Err(e) => {
            log::warn!("⚠️  No model available ({}), template scaffold will be used", e);
            None
        }
    };

    let generator = OutlineGenerator::new(config)?;

    log::info!("🔄 Generating outline for: {}", topic);

    let mut request = OutlineRequest::new(topic.as_str());
    if let Some(keyword) = &keyword {
        request = request.with_keyword(keyword.as_str());
    }
    if let Some(model_id) = &model_id {
        request = request.with_model(model_id.as_str());
    }

    let generated = match generator.generate(request).await {
        Ok(generated) => {
            log::info!("✅ Outline generated with {}!", generated.model);
            generated
        }
        Err(e) => {
            log::error!("❌ Generation failed: {}", e);
            log::info!("📋 Using template scaffold instead");
            generator.scaffold(&topic, keyword.as_deref())
        }
    };

    log::info!("🎯 Article type: {}", generated.article_type.label());

    println!("\n{}", generated.text);

    // Save the outline next to the binary, like a download would.
    let filename = format::slug_filename(&topic);
    match fs::write(&filename, &generated.text) {
        Ok(_) => log::info!("💾 Outline saved to: {}", filename),
        Err(e) => log::error!("❌ Failed to save outline: {}", e),
    }

    log::info!("🎉 Done!");

    Ok(())
}
