use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use client_core::{
    config::load_settings, HttpScoringClient, PredictionController, RegionView, SubmitOutcome,
};
use shared::domain::{FieldAssignment, FormInput};
use tracing_subscriber::EnvFilter;

/// Submit one set of form fields to the scoring endpoint and print the result.
#[derive(Parser, Debug)]
struct Args {
    /// Overrides `server_url` from predictor.toml and the environment.
    #[arg(long)]
    server_url: Option<String>,
    /// Form field as NAME=VALUE; repeat for each field.
    #[arg(long = "field", value_name = "NAME=VALUE")]
    fields: Vec<FieldAssignment>,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let mut settings = load_settings();
    if let Some(server_url) = args.server_url {
        settings.server_url = server_url;
    }

    let client = HttpScoringClient::new(settings.predict_url()?);
    // One submit per run.
    let controller = PredictionController::new(client);

    let form: FormInput = args
        .fields
        .into_iter()
        .map(|field| (field.name, field.value))
        .collect();

    tracing::info!(
        predict_url = %controller.service().predict_url(),
        fields = form.len(),
        "submitting form"
    );
    let mut view = RegionView::default();
    let outcome = controller.handle_submit(&form, &mut view).await;
    print_regions(&view);

    Ok(match outcome {
        SubmitOutcome::Failed(_) => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    })
}

fn print_regions(view: &RegionView) {
    if !view.result_hidden {
        let icon = view.icon.map(|icon| icon.glyph()).unwrap_or_default();
        let class = view
            .style_class
            .map(|class| class.as_str())
            .unwrap_or_default();
        println!("{icon} [{class}] {}", view.prediction_text);
        println!("{}", view.probability_text);
    }
    if !view.error_hidden {
        eprintln!("{}", view.error_text);
    }
}
