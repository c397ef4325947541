//! Integration tests for caller-registered and disabled decoders

use crate::integration::test_utils::{create_fixture, module_loader, MATH_JS};
use dircontents::decoder::builtin::read_text;
use dircontents::{
    build_config, walk, walk_blocking, ConfigOverrides, DecodeError, Decoder, Node, Value,
    WILDCARD,
};
use serde_json::json;

fn size_decoder() -> Decoder {
    Decoder::blocking_with_metadata(|_path, metadata| Ok(Value::Data(json!(metadata.len()))))
}

/// A `js` size decoder replaces module loading; `txt` disabled drops recipes
#[tokio::test]
async fn test_walk_with_other_extensions() {
    let (_temp_dir, root) = create_fixture();
    let config = build_config(
        ConfigOverrides::new()
            .module_loader(module_loader())
            .extension("js", size_decoder())
            .disable("txt"),
    );

    let tree = walk(&root, &config).await.unwrap();

    assert_eq!(
        tree.get("math").and_then(Node::as_value),
        Some(&Value::Data(json!(MATH_JS.len())))
    );
    assert!(!tree.contains_key("recipe"));
    assert!(!tree.get("env").and_then(Node::as_tree).unwrap().contains_key("notes"));
}

/// Replacing the defaults leaves only the caller's decoders
#[test]
fn test_replace_default_extensions() {
    let (_temp_dir, root) = create_fixture();
    let config = build_config(
        ConfigOverrides::new()
            .replace_default_extensions()
            .extension("js", size_decoder()),
    );

    let tree = walk_blocking(&root, &config).unwrap();

    assert_eq!(tree.keys().collect::<Vec<_>>(), vec!["env", "math"]);
    assert!(tree.get("env").and_then(Node::as_tree).unwrap().is_empty());
}

/// Disabling `json` omits JSON files while other defaults remain
#[test]
fn test_disabled_json_is_omitted() {
    let (_temp_dir, root) = create_fixture();
    let config = build_config(ConfigOverrides::new().disable("json"));

    let tree = walk_blocking(&root, &config).unwrap();

    assert!(!tree.contains_key("config"));
    assert!(tree.contains_key("recipe"));
    assert!(!tree.get("env").and_then(Node::as_tree).unwrap().contains_key("production"));
}

/// A disabled extension stays skipped even with a wildcard fallback
#[test]
fn test_disabled_extension_ignores_fallback() {
    let (_temp_dir, root) = create_fixture();
    let config = build_config(
        ConfigOverrides::new()
            .disable("json")
            .extension(WILDCARD, Decoder::dual(dircontents::decoder::BytesDecoder)),
    );

    let tree = walk_blocking(&root, &config).unwrap();

    assert!(!tree.contains_key("config"));
    // math.js has no decoder of its own, so the fallback reads it as bytes
    assert_eq!(
        tree.get("math").and_then(Node::as_value).and_then(Value::as_bytes),
        Some(MATH_JS.as_bytes())
    );
}

/// Extension matching ignores case
#[tokio::test]
async fn test_extension_lookup_is_case_insensitive() {
    let (_temp_dir, root) = create_fixture();
    std::fs::write(root.join("SHOUT.TXT"), "LOUD").unwrap();

    let tree = walk(&root, &build_config(ConfigOverrides::new())).await.unwrap();

    assert_eq!(
        tree.get("SHOUT").and_then(Node::as_value).and_then(Value::as_text),
        Some("LOUD")
    );
}

/// Standalone helpers compose into custom async decoders
#[tokio::test]
async fn test_helper_composed_decoder() {
    let (_temp_dir, root) = create_fixture();
    let upper = Decoder::concurrent_fn(|path| async move {
        let text = read_text(&path).await?;
        let text = text
            .as_text()
            .ok_or_else(|| DecodeError::custom("not text"))?
            .to_uppercase();
        Ok::<_, DecodeError>(Value::Text(text))
    });
    let config = build_config(ConfigOverrides::new().extension("txt", upper));

    let tree = walk(&root, &config).await.unwrap();

    assert_eq!(
        tree.get("recipe").and_then(Node::as_value).and_then(Value::as_text),
        Some("CHOUX À LA CRÈME")
    );
}
