/*!
# Mind Oasis - A Mood Check-In Companion

Mind Oasis serves a small HTTP API for mood check-ins: AI-generated
reflections with deterministic fallbacks, and PHQ-2 screening.

This file contains the main application flow, coordinating the various
components to bring the service up.

## Usage

```
mind-oasis [OPTIONS]

Options:
  -p, --port <PORT>            Port to listen on (overrides the PORT environment variable)
      --log-format <FORMAT>    Log output format: text or json
  -v, --verbose                Enable verbose output
  -h, --help                   Print help information
  -V, --version                Print version information
```

## Configuration

The application can be configured with the following environment variables:
- `OPENROUTER_API_KEY`: Model provider credential; absent or placeholder
  values switch the service into fallback-only mode
- `OPENROUTER_MODEL`: Chat model to request
- `OPENROUTER_BASE_URL`: Provider base URL
- `PORT`: HTTP listen port (defaults to 3000)
- `OASIS_MODEL_TIMEOUT_SECS`: Bound on each model round trip (defaults to 30)
*/

use mind_oasis::cli::ServerArgs;
use mind_oasis::config::Config;
use mind_oasis::constants::{DEFAULT_LOG_FILTER, LOG_FORMAT_JSON};
use mind_oasis::errors::AppResult;
use mind_oasis::ops::ReflectionService;
use mind_oasis::server::{app_router, AppState};
use tracing::{debug, info, warn};

/// The main entry point for the Mind Oasis server.
///
/// This function coordinates the overall application flow:
/// 1. Parses command-line arguments
/// 2. Initializes structured logging
/// 3. Loads and validates configuration
/// 4. Builds the reflection service with its model dependency
/// 5. Binds the listen socket and serves the API
///
/// # Errors
///
/// This function can return configuration errors (invalid port, timeout,
/// or base URL) and I/O errors (failure to bind the listen socket).
#[tokio::main]
async fn main() -> AppResult<()> {
    let args = ServerArgs::parse();
    init_tracing(&args);

    info!("Starting Mind Oasis");
    debug!("CLI arguments: {:?}", args);

    let mut config = Config::load()?;
    if let Some(port) = args.port {
        config.port = port;
    }
    config.validate()?;
    debug!("Configuration: {:?}", config);

    if !config.model_enabled() {
        warn!("OPENROUTER_API_KEY not configured; reflections will use fallback responses");
    }

    let service = ReflectionService::from_config(&config)?;
    let app = app_router(AppState::new(service));

    let bind_addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    info!("Mind Oasis running on http://{}", bind_addr);
    info!("  POST /api/reflection — mood check-in reflections");
    info!("  POST /api/quiz       — PHQ-2 screening");
    info!("  GET  /api/health     — liveness probe");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initializes the tracing subscriber from CLI arguments.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` widens the default
/// filter. `--log-format json` switches to structured JSON output.
fn init_tracing(args: &ServerArgs) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if args.verbose {
            "debug".into()
        } else {
            DEFAULT_LOG_FILTER.into()
        }
    });

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if args.log_format == LOG_FORMAT_JSON {
        builder.json().init();
    } else {
        builder.init();
    }
}
