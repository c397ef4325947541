//! Integration tests for settings files driving the CLI run context

use crate::integration::test_utils::create_fixture;
use clap::Parser;
use dircontents::cli::{render_tree, Cli, RunContext};
use dircontents::config::SettingsLoader;
use serde_json::json;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_settings_file_configures_walk() {
    let (_temp_dir, root) = create_fixture();
    let settings_dir = TempDir::new().unwrap();
    let settings_path = settings_dir.path().join("walk.toml");
    fs::write(
        &settings_path,
        "recursive = false\ndisabled_extensions = [\"json\"]\n",
    )
    .unwrap();

    let cli = Cli::parse_from([
        "dircontents",
        root.to_str().unwrap(),
        "--config",
        settings_path.to_str().unwrap(),
        "--blocking",
        "--keep-extensions",
    ]);
    let context = RunContext::new(&cli).unwrap();
    let tree = context.execute().unwrap();

    assert_eq!(
        tree.to_json(),
        json!({"recipe.txt": "Choux à la crème"})
    );
    assert_eq!(render_tree(&tree, true).unwrap(), r#"{"recipe.txt":"Choux à la crème"}"#);
}

#[test]
fn test_bad_settings_file_is_rejected() {
    let settings_dir = TempDir::new().unwrap();
    let settings_path = settings_dir.path().join("walk.toml");
    fs::write(&settings_path, "text_extensions = [\"tar.gz\"]\n").unwrap();

    assert!(SettingsLoader::load_from_file(&settings_path).is_err());
}
