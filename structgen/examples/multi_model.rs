//! Query several models for the same topic and collect structured answers.
//!
//! Mirrors the typical research workflow: one prompt, many models, each
//! outcome recorded independently so a failing model never loses the rest.
//! Mock models stand in for real providers here; swap in any
//! `CompletionModel` implementation to go over the network.
//!
//! Run with: `cargo run --example multi_model`

use serde::Deserialize;
use structgen::prelude::*;
use structgen_models::{registry, MockModel, ModelError};

#[derive(Debug, Deserialize)]
struct TopicSummary {
    topic: String,
    summary: String,
    key_points: Vec<String>,
}

impl Structured for TopicSummary {
    fn schema() -> Schema {
        Schema::builder()
            .title("TopicSummary")
            .string("topic", "The topic being summarized", true)
            .string("summary", "Two to three sentence overview", true)
            .string_list("key_points", "3-5 key facts", true)
            .build()
    }
}

fn scripted(name: &str, reply: &str) -> MockModel {
    MockModel::new(name).with_text_response(reply)
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "structgen=debug".into()),
        )
        .init();

    let models = vec![
        scripted(
            registry::resolve("deepseek").as_str(),
            r#"{"topic": "rust", "summary": "A systems language focused on safety and speed.", "key_points": ["ownership", "zero-cost abstractions", "fearless concurrency"]}"#,
        ),
        scripted(
            registry::resolve("mistral").as_str(),
            "```json\n{\"topic\": \"rust\", \"summary\": \"Compiled language with a strict type system.\", \"key_points\": [\"borrow checker\", \"cargo\"]}\n```",
        ),
        MockModel::new(registry::resolve("glm").as_str())
            .with_error(ModelError::http(503, "service unavailable")),
    ];

    let generators: Vec<Generator<MockModel>> = models
        .into_iter()
        .map(|model| {
            let config = ModelConfig::builder(model.name())
                .temperature(0.3)
                .build()
                .expect("valid config");
            Generator::new(model, config)
        })
        .collect();

    let outcomes =
        generate_all::<TopicSummary, _>(&generators, "Summarize the Rust language").await;

    for outcome in outcomes {
        match outcome.result {
            Ok(answer) => {
                println!("{} ({}):", outcome.model, answer.topic);
                println!("  {}", answer.summary);
                for point in answer.key_points {
                    println!("  - {point}");
                }
            }
            Err(error) => println!("{}: failed: {error}", outcome.model),
        }
    }
}
