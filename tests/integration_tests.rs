// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the file helpers.
//!
//! These tests exercise the public functions against real files in a scratch
//! directory, the way a pipeline stage would call them.

mod common;

use artifact_io::domain::{ArtifactError, PathList};
use artifact_io::{
    create_directories, create_directories_from, file_size, get_size, load_binary, load_json,
    load_json_as, read_yaml, save_binary, save_json,
};
use common::Scratch;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::fs;

#[test]
fn test_read_yaml_dual_access() {
    let scratch = Scratch::new();
    let path = scratch.write("config.yaml", "key: value\nnested:\n  a: 1\n");

    let config = read_yaml(&path).unwrap();

    assert_eq!(config["nested"]["a"], 1);
    assert_eq!(config.attr("nested").unwrap().attr("a").unwrap(), json!(1));
    assert_eq!(config.path("nested.a").unwrap().as_i64().unwrap(), 1);
    assert_eq!(config["key"], "value");
    assert_eq!(config.attr("key").unwrap().as_str().unwrap(), "value");
}

#[test]
fn test_read_yaml_pipeline_config() {
    let scratch = Scratch::new();
    let path = scratch.write(
        "config.yaml",
        r#"
# where every stage keeps its output
artifacts_root: artifacts

data_ingestion:
  root_dir: artifacts/data_ingestion
  source_url: https://example.com/data.zip
  unzip_dir: artifacts/data_ingestion

model_trainer:
  alpha: 0.2
  l1_ratio: 0.1
  target_column: quality
"#,
    );

    let config = read_yaml(&path).unwrap();

    assert_eq!(
        config.keys(),
        vec!["artifacts_root", "data_ingestion", "model_trainer"]
    );
    assert_eq!(
        config.path("model_trainer.alpha").unwrap().as_f64().unwrap(),
        0.2
    );

    #[derive(Debug, Deserialize, PartialEq)]
    struct Trainer {
        alpha: f64,
        l1_ratio: f64,
        target_column: String,
    }

    let trainer: Trainer = config.attr("model_trainer").unwrap().deserialize().unwrap();
    assert_eq!(
        trainer,
        Trainer {
            alpha: 0.2,
            l1_ratio: 0.1,
            target_column: "quality".to_string(),
        }
    );
}

#[test]
fn test_read_yaml_empty_file() {
    let scratch = Scratch::new();
    let path = scratch.write("empty.yaml", "");

    let err = read_yaml(&path).unwrap_err();
    assert!(matches!(err, ArtifactError::EmptyDocument { .. }));
    assert!(err.to_string().starts_with("yaml file is empty"));
}

#[test]
fn test_read_yaml_comments_only_and_null() {
    let scratch = Scratch::new();
    for (name, content) in [
        ("comments.yaml", "# nothing configured yet\n\n"),
        ("null.yaml", "null"),
        ("tilde.yaml", "---\n~\n"),
    ] {
        let path = scratch.write(name, content);
        let err = read_yaml(&path).unwrap_err();
        assert!(
            matches!(err, ArtifactError::EmptyDocument { .. }),
            "{name}: {err:?}"
        );
    }
}

#[test]
fn test_read_yaml_malformed() {
    let scratch = Scratch::new();
    let path = scratch.write("bad.yaml", "key: [unclosed\n");

    let err = read_yaml(&path).unwrap_err();
    assert!(matches!(err, ArtifactError::Parse { format: "yaml", .. }));
}

#[test]
fn test_read_yaml_missing_file() {
    let scratch = Scratch::new();
    let err = read_yaml(scratch.path("absent.yaml")).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_create_directories_idempotent() {
    let scratch = Scratch::new();
    let paths = [
        scratch.path("artifacts"),
        scratch.path("artifacts/data_ingestion"),
        scratch.path("artifacts/model_trainer/checkpoints"),
    ];

    create_directories(&paths, true).unwrap();
    create_directories(&paths, true).unwrap();

    for path in &paths {
        assert!(path.is_dir(), "{} missing", path.display());
    }
}

#[test]
fn test_create_directories_empty_list() {
    let empty: [&str; 0] = [];
    create_directories(&empty, true).unwrap();
}

#[test]
fn test_create_directories_stops_at_first_failure() {
    let scratch = Scratch::new();
    let blocker = scratch.write("blocker", "a file, not a directory");
    let after = scratch.path("after");

    let result = create_directories(&[blocker.join("child"), after.clone()], false);

    assert!(result.is_err());
    assert!(!after.exists());
}

#[test]
fn test_create_directories_from_config_list() {
    let scratch = Scratch::new();
    let root = scratch.path("run");
    let path = scratch.write(
        "config.yaml",
        &format!(
            "dirs:\n  - {}\n  - {}\n",
            root.join("data").display(),
            root.join("models").display()
        ),
    );

    let config = read_yaml(&path).unwrap();
    create_directories_from(&config.attr("dirs").unwrap(), false).unwrap();

    assert!(root.join("data").is_dir());
    assert!(root.join("models").is_dir());
}

#[test]
fn test_single_path_string_is_type_mismatch() {
    let err = create_directories_from(&json!("artifacts"), true).unwrap_err();
    assert!(matches!(err, ArtifactError::TypeMismatch { .. }));

    let err = PathList::try_from(&json!({"root": "artifacts"})).unwrap_err();
    assert!(matches!(err, ArtifactError::TypeMismatch { .. }));
}

#[test]
fn test_save_json_writes_indented_text() {
    let scratch = Scratch::new();
    let path = scratch.path("metrics.json");

    save_json(&path, &json!({"x": 1, "y": [1, 2, 3]})).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("\n    \"x\": 1,"));
    let parsed: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, json!({"x": 1, "y": [1, 2, 3]}));
}

#[test]
fn test_save_json_overwrites() {
    let scratch = Scratch::new();
    let path = scratch.path("scores.json");

    save_json(&path, &json!({"long": "a".repeat(200)})).unwrap();
    save_json(&path, &json!({"short": 1})).unwrap();

    assert_eq!(load_json(&path).unwrap(), json!({"short": 1}));
}

#[test]
fn test_save_json_unserializable_leaves_file() {
    let scratch = Scratch::new();
    let path = scratch.write("keep.json", "{\"kept\": true}");

    let mut bad = HashMap::new();
    bad.insert(vec![1u8, 2], "compound key");

    let err = save_json(&path, &bad).unwrap_err();
    assert!(matches!(err, ArtifactError::Serialization { .. }));
    assert_eq!(fs::read_to_string(&path).unwrap(), "{\"kept\": true}");
}

#[test]
fn test_load_json_dual_access() {
    let scratch = Scratch::new();
    let path = scratch.path("params.json");
    save_json(&path, &json!({"model": {"alpha": 0.5, "layers": [64, 32]}})).unwrap();

    let params = load_json(&path).unwrap();

    assert_eq!(params["model"]["layers"][1], 32);
    assert_eq!(params.path("model.layers.1").unwrap().as_u64().unwrap(), 32);
    assert_eq!(params.path("model.alpha").unwrap().as_f64().unwrap(), 0.5);
}

#[test]
fn test_load_json_errors() {
    let scratch = Scratch::new();

    let err = load_json(scratch.path("absent.json")).unwrap_err();
    assert!(err.is_not_found());

    let bad = scratch.write("bad.json", "{\"a\": 1,}");
    let err = load_json(&bad).unwrap_err();
    assert!(matches!(err, ArtifactError::Parse { format: "json", .. }));
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct EvalReport {
    model: String,
    rmse: f64,
    confusion: Vec<Vec<u32>>,
    tags: HashMap<String, String>,
}

fn report() -> EvalReport {
    let mut tags = HashMap::new();
    tags.insert("stage".to_string(), "evaluation".to_string());
    EvalReport {
        model: "elasticnet".to_string(),
        rmse: 0.625,
        confusion: vec![vec![5, 1], vec![0, 7]],
        tags,
    }
}

#[test]
fn test_load_json_as_typed() {
    let scratch = Scratch::new();
    let path = scratch.path("report.json");

    save_json(&path, &report()).unwrap();
    let back: EvalReport = load_json_as(&path).unwrap();

    assert_eq!(back, report());
}

#[test]
fn test_load_json_as_wrong_shape() {
    let scratch = Scratch::new();
    let path = scratch.write("report.json", "{\"model\": 3}");

    let err = load_json_as::<EvalReport>(&path).unwrap_err();
    assert!(matches!(err, ArtifactError::Deserialization { .. }));
}

#[test]
fn test_binary_roundtrip_custom_struct() {
    let scratch = Scratch::new();
    let path = scratch.path("report.bin");

    save_binary(&report(), &path).unwrap();
    let back: EvalReport = load_binary(&path).unwrap();

    assert_eq!(back, report());
}

#[test]
fn test_binary_overwrites() {
    let scratch = Scratch::new();
    let path = scratch.path("model.bin");

    save_binary(&vec![0u64; 500], &path).unwrap();
    save_binary(&"small", &path).unwrap();

    let back: String = load_binary(&path).unwrap();
    assert_eq!(back, "small");
}

#[test]
fn test_load_binary_corrupt_file() {
    let scratch = Scratch::new();
    let path = scratch.write("model.bin", "definitely not an artifact");

    let err = load_binary::<EvalReport>(&path).unwrap_err();
    assert!(matches!(err, ArtifactError::Deserialization { .. }));
}

#[test]
fn test_load_binary_missing_file() {
    let scratch = Scratch::new();
    let err = load_binary::<u8>(scratch.path("absent.bin")).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_get_size_empty_file() {
    let scratch = Scratch::new();
    let path = scratch.write("empty.txt", "");
    assert_eq!(get_size(&path).unwrap(), "~0 KB");
}

#[test]
fn test_get_size_rounds() {
    let scratch = Scratch::new();
    let path = scratch.path("blob.bin");
    fs::write(&path, vec![7u8; 1536]).unwrap();

    assert_eq!(get_size(&path).unwrap(), "~2 KB");
    assert_eq!(file_size(&path).unwrap().bytes(), 1536);
}

#[test]
fn test_get_size_missing() {
    let scratch = Scratch::new();
    assert!(get_size(scratch.path("absent")).unwrap_err().is_not_found());
}
