#![allow(dead_code)]

use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tempfile::TempDir;

static INIT: Once = Once::new();

pub fn init_logging() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// A fake host install: `<root>/user/plugin` plus a project folder with media.
pub struct TestHost {
    pub root: TempDir,
}

impl TestHost {
    pub fn new() -> Self {
        init_logging();
        let root = TempDir::new().expect("temp dir");
        fs::create_dir_all(root.path().join("user").join("plugin")).expect("plugin dir");
        Self { root }
    }

    pub fn plugin_dir(&self) -> PathBuf {
        self.root.path().join("user").join("plugin")
    }

    pub fn write(&self, rel: &str, bytes: &[u8]) -> PathBuf {
        let path = self.root.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("parent dir");
        }
        fs::write(&path, bytes).expect("write file");
        path
    }

    /// Descriptor referencing `paths` from two nesting levels, one of them twice.
    pub fn write_project(&self, paths: &[&Path]) -> PathBuf {
        let items: Vec<Value> = paths
            .iter()
            .map(|p| json!({ "FilePath": p.to_string_lossy(), "Volume": 1.0 }))
            .collect();
        let first = paths
            .first()
            .map(|p| p.to_string_lossy().to_string())
            .unwrap_or_default();

        let descriptor = json!({
            "Timelines": [{ "Items": items }],
            "Settings": { "Background": { "FilePath": first } }
        });
        let text = serde_json::to_string_pretty(&descriptor).expect("serialize");
        self.write("work/movie.ymmp", text.as_bytes())
    }
}

pub fn collect_file_paths(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                match (key.as_str(), child) {
                    ("FilePath", Value::String(s)) => out.push(s.clone()),
                    _ => collect_file_paths(child, out),
                }
            }
        }
        Value::Array(items) => items.iter().for_each(|v| collect_file_paths(v, out)),
        _ => {}
    }
}
