//! Shared fixtures for integration tests
//!
//! The standard fixture mirrors a small application config directory:
//!
//! ```text
//! config.json      {"development":{"port":3000}}
//! math.js          module exporting add(a, b)
//! recipe.txt       Choux à la crème
//! env/
//!   production.json
//!   notes.txt
//! ```

use dircontents::{DecodeError, ModuleLoader, Value};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

pub const MATH_JS: &str = "exports.add = function(a, b) {\n\treturn a + b;\n};\n";
pub const RECIPE: &str = "Choux à la crème";

/// Stand-in for a loaded `math.js` module
#[derive(Debug)]
pub struct MathModule;

impl MathModule {
    pub fn add(&self, a: i64, b: i64) -> i64 {
        a + b
    }
}

/// Test module loader: recognizes modules exporting `add`, rejects the rest
pub struct FakeModuleLoader;

impl ModuleLoader for FakeModuleLoader {
    fn load(&self, path: &Path) -> Result<Value, DecodeError> {
        let source = fs::read_to_string(path)?;
        if source.contains("exports.add") {
            Ok(Value::opaque(MathModule))
        } else {
            Err(DecodeError::Module(format!(
                "{} exports nothing",
                path.display()
            )))
        }
    }
}

pub fn module_loader() -> Arc<dyn ModuleLoader> {
    Arc::new(FakeModuleLoader)
}

/// Create the standard fixture and return its root
pub fn create_fixture() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().to_path_buf();

    fs::write(root.join("config.json"), r#"{"development":{"port":3000}}"#).unwrap();
    fs::write(root.join("math.js"), MATH_JS).unwrap();
    fs::write(root.join("recipe.txt"), RECIPE).unwrap();

    fs::create_dir(root.join("env")).unwrap();
    fs::write(
        root.join("env").join("production.json"),
        r#"{"port":80,"hosts":["a","b"]}"#,
    )
    .unwrap();
    fs::write(root.join("env").join("notes.txt"), "deploy on fridays").unwrap();

    (temp_dir, root)
}
