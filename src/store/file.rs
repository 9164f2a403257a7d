use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use serde_json::{Map, Value};
use crate::error::ThemeError;
use super::PreferenceStore;

/// Durable store for the desktop build: a JSON object on disk.
///
/// The file is re-read on every access so edits made by other processes
/// are picked up, matching browser storage semantics. Keys this store does
/// not own are preserved whatever their value type.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `Ok(None)` when the file does not exist yet.
    fn read_raw(&self) -> Result<Option<String>, ThemeError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn parse(&self, raw: &str) -> Result<Map<String, Value>, ThemeError> {
        match serde_json::from_str::<Value>(raw)? {
            Value::Object(entries) => Ok(entries),
            other => Err(ThemeError::Storage(format!(
                "{} holds a JSON {} instead of an object",
                self.path.display(),
                json_kind(&other)
            ))),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl PreferenceStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
        let Some(raw) = self.read_raw()? else {
            return Ok(None);
        };

        match self.parse(&raw) {
            Ok(entries) => Ok(entries.get(key).and_then(Value::as_str).map(str::to_string)),
            Err(e) => {
                log::warn!("Ignoring unreadable preference file {}: {}", self.path.display(), e);
                Ok(None)
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        // Never overwrite a file that did not parse.
        let mut entries = match self.read_raw()? {
            Some(raw) => self.parse(&raw)?,
            None => Map::new(),
        };
        entries.insert(key.to_string(), Value::String(value.to_string()));

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&entries)?)?;
        log::debug!("Saved {}={} to {}", key, value, self.path.display());
        Ok(())
    }
}
