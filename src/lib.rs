/*!
# Mind Oasis

Mind Oasis is a small mood check-in service. A user reports a mood and a
free-text journal entry; the service answers with an empathetic reflection
and a suggested action, generated by a language model when one is
configured and reachable, and by deterministic fallback tables otherwise.
A separate endpoint scores the PHQ-2 two-question screening into a
severity tier with guidance text.

## Core Features

- Reflection generation that never fails the caller: model errors and
  unparseable completions degrade through fallback tiers into a fully
  populated result, flagged with `usingMock`
- Tolerant parsing of free-form model output (fenced JSON, bare JSON,
  or prose)
- Deterministic PHQ-2 scoring with strict input validation
- Fallback-only mode when no model credential is configured

## Architecture

The codebase follows a modular architecture with clear separation of
concerns:

- `ai`: OpenRouter client, prompt builder, and response parser
- `ops`: Reflection orchestrator, fallback tables, and quiz scorer
- `server`: axum HTTP layer and response envelope
- `cli`: Command-line interface handling using clap
- `config`: Configuration loading and validation
- `errors`: Error handling infrastructure

## Usage Example

```rust,no_run
use mind_oasis::server::{app_router, AppState};
use mind_oasis::{Config, ReflectionService};

#[tokio::main]
async fn main() -> mind_oasis::AppResult<()> {
    let config = Config::load()?;
    config.validate()?;

    let service = ReflectionService::from_config(&config)?;
    let app = app_router(AppState::new(service));

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
```
*/

/// Model integration: client, prompts, and response parsing
pub mod ai;
/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Constants used throughout the application
pub mod constants;
/// Error types and utilities for error handling
pub mod errors;
/// High-level operations: reflections and PHQ-2 scoring
pub mod ops;
/// HTTP layer exposing the check-in API
pub mod server;

// Re-export important types for convenience
pub use cli::ServerArgs;
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use ops::{CheckIn, QuizResult, QuizSubmission, ReflectionResult, ReflectionService};
