use clap::{Parser, ValueEnum};
use lastfm_gradient::api::LastFmClient;
use lastfm_gradient::config::{RequestParams, Settings};
use lastfm_gradient::render::{CssGradientBackend, FaviconBackend, NeatGradientBackend, RenderBackend};
use lastfm_gradient::services::{GradientOrchestrator, GradientSession};
use lastfm_gradient::utils::{create_runtime, exit_code, ArtworkExtractor, LookupError};
use lastfm_gradient::visual::PaletteStrategy;

const APP_NAME: &str = "lastfm-gradient";
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One canvas option set (JSON) per album change
    Neat,
    /// CSS gradient rule per album change
    Css,
    /// Favicon SVG as a data URI per album change
    Favicon,
    /// Page metadata for the current track, then exit
    Meta,
}

#[derive(Parser, Debug, Clone)]
#[command(name = APP_NAME, version, about = "Album-driven animated gradient for a Last.fm user's current track")]
struct Args {
    /// Last.fm API key (overrides LASTFM_API_KEY)
    #[arg(long)]
    api_key: Option<String>,

    /// Last.fm username; requires --api-key
    #[arg(long)]
    username: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Neat)]
    format: OutputFormat,

    /// Palette policy: brightness | dominant
    #[arg(long, default_value = "brightness")]
    strategy: PaletteStrategy,

    /// Render the current track once instead of refreshing
    #[arg(long, default_value_t = false)]
    once: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set RUST_LOG=debug for verbose output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .filter_module("reqwest", log::LevelFilter::Warn)
        .filter_module("hyper", log::LevelFilter::Warn)
        .filter_module("rustls", log::LevelFilter::Warn)
        .init();

    let args = Args::parse();
    log::info!("[Main] Starting {} v{}", APP_NAME, APP_VERSION);

    let settings = Settings::load();
    let rt = create_runtime()?;

    let result = rt.block_on(async {
        match args.format {
            OutputFormat::Neat => serve(&args, &settings, NeatGradientBackend::new(std::io::stdout())).await,
            OutputFormat::Css => serve(&args, &settings, CssGradientBackend::new(std::io::stdout())).await,
            OutputFormat::Favicon => serve(&args, &settings, FaviconBackend::new(std::io::stdout())).await,
            OutputFormat::Meta => serve(&args, &settings, NeatGradientBackend::new(std::io::sink())).await,
        }
    });

    if let Err(e) = result {
        log::error!("[Main] {}", e);
        eprintln!("{} {}", e.status(), e);
        std::process::exit(exit_code(&e));
    }

    log::info!("[Main] Stopped");
    Ok(())
}

async fn serve<B: RenderBackend>(args: &Args, settings: &Settings, backend: B) -> Result<(), LookupError> {
    let request = RequestParams::new(args.api_key.clone(), args.username.clone());
    log::info!(
        "[Main] Rendering with {} backend, {} palette",
        backend.name(),
        args.strategy.name()
    );

    let mut session = GradientSession::connect(
        settings,
        &request,
        LastFmClient::new(settings.api_base.clone()),
        ArtworkExtractor::default(),
        backend,
        GradientOrchestrator::new(args.strategy),
    )
    .await?;

    if let Some(meta) = session.page_meta() {
        log::info!("[Main] Now playing: {}", meta.title);
        if args.format == OutputFormat::Meta {
            println!("{}", serde_json::to_string_pretty(&meta)?);
        }
    }

    if args.once || args.format == OutputFormat::Meta {
        return Ok(());
    }

    session
        .run(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                log::warn!("[Main] Cannot listen for Ctrl-C, running until killed: {}", e);
                std::future::pending::<()>().await;
            }
        })
        .await;
    Ok(())
}
