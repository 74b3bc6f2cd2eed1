//! Email draft bot example.
//!
//! Reads a request from the command line, runs the full draft pipeline
//! and prints the reviewed draft.
//!
//! Run with: cargo run -p draft-pipeline --example draft_bot -- "ask dana for the q3 report"
//!
//! Configuration via .env file or environment variables:
//!   ASSISTANT_CONFIG    - Config file path (default: assistant.toml)
//!   PRIMARY_PROVIDER    - openai, anthropic or cohere
//!   PRIMARY_MODEL       - Model name for the primary provider
//!   OPENAI_API_KEY      - Required when the provider is openai
//!   ANTHROPIC_API_KEY   - Required when the provider is anthropic
//!   COHERE_API_KEY      - Required when the provider is cohere

use std::env;

use draft_pipeline::{DraftRequest, Pipeline};
use llm_client::AssistantConfig;
use profile_store::ProfileStore;
use tracing::warn;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let prompt = env::args().skip(1).collect::<Vec<_>>().join(" ");
    if prompt.is_empty() {
        eprintln!("Usage: draft_bot <request text>");
        std::process::exit(1);
    }

    let config = AssistantConfig::load();
    let store = ProfileStore::new("profiles.json");
    let pipeline = Pipeline::from_config(&config, store)?;

    let request = DraftRequest::new(prompt).with_user_id("default");
    let state = pipeline.run(request).await;

    for error in &state.errors {
        warn!("Pipeline note: {}", error);
    }

    match state.final_draft() {
        Some(draft) => {
            println!("Subject: {}\n", draft.subject);
            println!("{}", draft.body);
            if let Some(review) = &state.review {
                if !review.passed {
                    println!("\nReview did not pass after {} retries:", state.retry_count);
                    for issue in &review.issues {
                        println!("  - {issue}");
                    }
                }
            }
        }
        None => eprintln!("No draft produced"),
    }

    Ok(())
}
