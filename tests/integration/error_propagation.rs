//! Integration tests for fail-fast error propagation

use crate::integration::test_utils::create_fixture;
use dircontents::{
    build_config, walk, walk_blocking, Config, ConfigOverrides, DecodeError, Decoder, WalkError,
};
use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// A missing root fails with a not-found error in both walkers
#[tokio::test]
async fn test_missing_root_not_found() {
    let (_temp_dir, root) = create_fixture();
    let missing = root.join("does-not-exist");

    let err = walk(&missing, &Config::default()).await.unwrap_err();
    assert!(err.is_not_found());

    let err = walk_blocking(&missing, &Config::default()).unwrap_err();
    assert!(err.is_not_found());
}

/// A root that is a file cannot be listed
#[test]
fn test_file_root_fails() {
    let (_temp_dir, root) = create_fixture();

    let err = walk_blocking(root.join("recipe.txt"), &Config::default()).unwrap_err();
    assert!(matches!(err, WalkError::Filesystem { .. }));
}

/// One failing decoder deep in the tree fails the whole walk
#[tokio::test]
async fn test_nested_decode_failure_yields_no_tree() {
    let (_temp_dir, root) = create_fixture();
    fs::create_dir_all(root.join("env").join("broken")).unwrap();
    fs::write(root.join("env").join("broken").join("bad.json"), "{").unwrap();

    let result = walk(&root, &Config::default()).await;

    match result {
        Err(WalkError::Decode { path, source: DecodeError::Json(_) }) => {
            assert!(path.ends_with("bad.json"));
        }
        other => panic!("expected JSON decode failure, got {:?}", other.map(|t| t.len())),
    }
}

/// Custom decoder errors surface unchanged through both walkers
#[tokio::test]
async fn test_custom_decoder_error_propagates() {
    let (_temp_dir, root) = create_fixture();
    let failing = Decoder::blocking_fn(|_path| Err(DecodeError::custom("refused")));
    let config = build_config(ConfigOverrides::new().extension("txt", failing));

    let err = walk(&root, &config).await.unwrap_err();
    assert!(err.to_string().contains("refused"));

    let err = walk_blocking(&root, &config).unwrap_err();
    assert!(err.to_string().contains("refused"));
}

/// Invalid UTF-8 in a text file is a decode error, not a skip
#[test]
fn test_invalid_utf8_text_fails() {
    let (_temp_dir, root) = create_fixture();
    fs::write(root.join("latin1.txt"), [0x43, 0x72, 0xe8, 0x6d, 0x65]).unwrap();

    let err = walk_blocking(&root, &Config::default()).unwrap_err();
    assert!(matches!(
        err,
        WalkError::Decode {
            source: DecodeError::Utf8(_),
            ..
        }
    ));
}

/// The blocking walker decodes nothing after the first failure in name order
#[test]
fn test_blocking_walk_stops_after_failure() {
    let (_temp_dir, root) = create_fixture();
    fs::write(root.join("a.step"), "").unwrap();
    fs::write(root.join("b.step"), "").unwrap();
    fs::write(root.join("c.step"), "").unwrap();

    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let decoder = Decoder::blocking_fn(move |path| {
        counter.fetch_add(1, Ordering::SeqCst);
        if path.ends_with("b.step") {
            Err(DecodeError::custom("stop"))
        } else {
            Ok(dircontents::Value::Text(String::new()))
        }
    });
    let config = build_config(ConfigOverrides::new().extension("step", decoder));

    assert!(walk_blocking(&root, &config).is_err());
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}
