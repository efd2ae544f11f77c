// SPDX-License-Identifier: MIT OR Apache-2.0

//! Walkthrough of a pipeline stage using the file helpers.
//!
//! Run with `cargo run --example pipeline_artifacts`.

use artifact_io::logging::{self, LoggingConfig};
use artifact_io::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fs;

#[derive(Debug, Serialize, Deserialize)]
struct LinearModel {
    coefficients: Vec<f64>,
    intercept: f64,
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let workspace = tempfile::tempdir()?;
    let root = workspace.path();

    logging::init(&LoggingConfig::default().with_log_dir(root.join("logs")))?;

    let config_path = root.join("config.yaml");
    fs::write(
        &config_path,
        format!(
            "artifacts_root: {root}/artifacts\n\
             directories:\n  - {root}/artifacts/data\n  - {root}/artifacts/model\n\
             model_trainer:\n  alpha: 0.2\n  l1_ratio: 0.1\n",
            root = root.display()
        ),
    )?;

    let config = read_yaml(&config_path)?;
    create_directories_from(&config.attr("directories")?, true)?;

    let alpha = config.path("model_trainer.alpha")?.as_f64()?;
    println!("training with alpha={alpha} (also {})", config["model_trainer"]["alpha"]);

    let model_dir = config.attr("artifacts_root")?.as_path_buf()?.join("model");
    let model = LinearModel {
        coefficients: vec![0.4, -1.2, 3.3],
        intercept: 0.05,
    };
    let model_path = model_dir.join("model.bin");
    save_binary(&model, &model_path)?;

    let metrics_path = model_dir.join("metrics.json");
    save_json(&metrics_path, &json!({"rmse": 0.71, "mae": 0.55, "r2": 0.31}))?;

    let reloaded: LinearModel = load_binary(&model_path)?;
    let metrics = load_json(&metrics_path)?;
    println!(
        "model with {} coefficients, rmse {}",
        reloaded.coefficients.len(),
        metrics.attr("rmse")?.as_f64()?
    );
    println!(
        "sizes: model {}, metrics {}",
        get_size(&model_path)?,
        get_size(&metrics_path)?
    );

    Ok(())
}
