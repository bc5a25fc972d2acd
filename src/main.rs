use std::{error::Error, fs::File, io, time::Instant};

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use tremor_classifier::{
    batch::{classify_rows, write_predictions, Summary},
    config::Config,
    ingest::read_features_path,
    MotionClassifier,
};

fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::parse_args();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.default_log_level())),
        )
        .init();

    let now = Instant::now();
    let file = match read_features_path(&config.input) {
        Ok(f) => f,
        Err(e) => return Err(format!("Error reading {}: {}", config.input.display(), e).into()),
    };
    info!(
        input = %config.input.display(),
        rows = file.rows.len(),
        skipped = file.rejected.len(),
        labelled = file.has_label,
        "loaded feature file"
    );

    let classifier = MotionClassifier::default();
    let outcome = classify_rows(&classifier, &file.rows, config.explain);

    match &config.output {
        Some(path) => write_predictions(File::create(path)?, &outcome.predictions)?,
        None => write_predictions(io::stdout().lock(), &outcome.predictions)?,
    }

    log_summary(&outcome.summary);
    if outcome.summary.classified == 0 {
        warn!("no rows were classified");
    }

    let elapsed = now.elapsed();
    info!("Elapsed: {:.2?}", elapsed);
    Ok(())
}

fn log_summary(summary: &Summary) {
    info!(
        classified = summary.classified,
        failed = summary.failed,
        no_tremor = summary.no_tremor,
        tremor = summary.tremor,
        "classification finished"
    );
    if let Some(accuracy) = summary.accuracy() {
        info!(
            correct = summary.correct,
            labelled = summary.labelled,
            "accuracy: {:.2}%",
            accuracy * 100.0
        );
    }
}
