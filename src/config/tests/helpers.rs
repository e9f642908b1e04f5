//! Shared test helpers for configuration tests.

use ortho_config::MergeComposer;
use serde_json::Value;

use crate::ActionConfig;

/// Applies a configuration layer to the composer based on the layer type.
pub fn apply_layer(composer: &mut MergeComposer, layer_type: &str, value: Value) {
    match layer_type {
        "defaults" => composer.push_defaults(value),
        "file" => composer.push_file(value, None),
        "environment" => composer.push_environment(value),
        "cli" => composer.push_cli(value),
        _ => panic!("unknown layer type: {layer_type}"),
    }
}

/// Composes an [`ActionConfig`] from a sequence of `(layer_type, value)` pairs.
pub fn build_config_from_layers(layers: &[(&str, Value)]) -> ActionConfig {
    let mut composer = MergeComposer::new();

    for (layer_type, value) in layers {
        apply_layer(&mut composer, layer_type, value.clone());
    }

    ActionConfig::merge_from_layers(composer.layers()).expect("merge should succeed")
}

/// A config with every required input and an explicit repository.
pub fn complete_config() -> ActionConfig {
    ActionConfig {
        source_branch: Some("develop".to_owned()),
        target_branch: Some("main".to_owned()),
        github_token: Some("ghp_example".to_owned()),
        repository: Some("a/b".to_owned()),
        ..Default::default()
    }
}
