use logoforge::{Config, GeminiConfig, LogoError, LogoStudio};
use std::env;
use std::fs;
use std::path::Path;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file first
    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded successfully"),
        Err(_) => log::warn!("⚠️  No .env file found, using system environment variables"),
    }

    logoforge::logger::init_with_config(
        logoforge::logger::LoggerConfig::development()
            .with_level(logoforge::logger::LogLevel::Debug),
    )?;

    logoforge::logger::log_startup_info("logoforge", env!("CARGO_PKG_VERSION"));

    log::info!("🔍 Checking Gemini environment...");

    // Check the credential (without printing the actual value for security)
    match env::var("GEMINI_API_KEY").or_else(|_| env::var("API_KEY")) {
        Ok(api_key) => {
            log::info!("✅ Gemini API key found in environment");
            log::debug!(
                "API key starts with: {}...",
                &api_key[..5.min(api_key.len())]
            );
        }
        Err(_) => {
            log::warn!("⚠️  No GEMINI_API_KEY or API_KEY in environment variables");
            log::error!("❌ This will likely cause authentication failures");
        }
    }

    let company_name = env::args().nth(1).unwrap_or_else(|| "Acme".to_string());
    let philosophy = env::args()
        .nth(2)
        .unwrap_or_else(|| "minimalist, sustainable technology".to_string());

    validate_inputs(&company_name, &philosophy)?;

    let config = Config::from_env().with_gemini(GeminiConfig::from_env());
    logoforge::logger::log_config_info(&config);

    let output_dir = config.output_dir.clone().unwrap_or_else(|| ".".to_string());
    fs::create_dir_all(&output_dir)?;

    log::info!("🔄 Creating logo studio...");
    let studio = match LogoStudio::new(config) {
        Ok(studio) => {
            log::info!("✅ Logo studio initialized successfully");
            studio
        }
        Err(e) => {
            log::error!("❌ Failed to initialize logo studio: {}", e);
            return Err(e.into());
        }
    };

    // Test 1: Batch generation
    log::info!(
        "🎨 Generating {} logo variants for '{}'...",
        studio.batch_size(),
        company_name
    );

    let assets = {
        let _timer = logoforge::logger::timer("generate_batch");
        match studio
            .generate_batch(&company_name, &philosophy, studio.batch_size())
            .await
        {
            Ok(assets) => {
                log::info!("✅ Batch generation successful, {} assets", assets.len());
                assets
            }
            Err(e) => {
                log::error!("❌ Batch generation failed: {}", e);
                log::warn!("💡 The whole batch is discarded, no partial results are kept");
                return Err(e.into());
            }
        }
    };

    for (index, asset) in assets.iter().enumerate() {
        log::info!("🖼️  Asset {} (id {})", index, asset.id);
        log::info!("   Provenance: {}", asset.origin_prompt);

        let filename = format!(
            "{}_{}_{}.png",
            company_name.to_lowercase().replace(' ', "_"),
            chrono::Utc::now().timestamp(),
            index
        );
        let path = Path::new(&output_dir).join(&filename);

        match asset.decode_bytes() {
            Ok(image_bytes) => match fs::write(&path, image_bytes) {
                Ok(_) => log::info!("💾 Image saved to: {}", path.display()),
                Err(e) => log::error!("❌ Failed to save image: {}", e),
            },
            Err(e) => log::error!("❌ Failed to decode image payload: {}", e),
        }
    }

    // Test 2: Edit the first asset
    if let Some(first) = assets.first() {
        let instruction = "Make it look like a vibrant neon sign with glow";
        log::info!("✏️  Editing asset {} with: '{}'", first.id, instruction);

        let _timer = logoforge::logger::timer("edit_asset");
        match studio.edit_asset(first, instruction).await {
            Ok(edited) => {
                log::info!("✅ Edit successful, new asset id {}", edited.id);

                let filename = format!(
                    "{}_{}_edited.png",
                    company_name.to_lowercase().replace(' ', "_"),
                    chrono::Utc::now().timestamp()
                );
                let path = Path::new(&output_dir).join(&filename);

                match edited.decode_bytes() {
                    Ok(image_bytes) => match fs::write(&path, image_bytes) {
                        Ok(_) => log::info!("💾 Edited image saved to: {}", path.display()),
                        Err(e) => log::error!("❌ Failed to save edited image: {}", e),
                    },
                    Err(e) => log::error!("❌ Failed to decode edited payload: {}", e),
                }
            }
            Err(e) => {
                log::error!("❌ Edit failed: {}", e);
                log::warn!("💡 The original asset is left untouched");
            }
        }
    }

    log::info!("🎉 All done!");
    log::info!("💡 Check the generated image files in {}", output_dir);

    Ok(())
}

fn validate_inputs(company_name: &str, philosophy: &str) -> Result<(), LogoError> {
    if company_name.trim().is_empty() {
        return Err(LogoError::ValidationError(
            "Company name must not be empty".into(),
        ));
    }
    if philosophy.trim().is_empty() {
        return Err(LogoError::ValidationError(
            "Company philosophy must not be empty".into(),
        ));
    }
    Ok(())
}
