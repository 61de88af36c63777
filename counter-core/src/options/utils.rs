use std::{fs, path::Path};

use anyhow::{Error, Result};
use serde::de::DeserializeOwned;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    pub fn from_path(file: &str) -> Option<Self> {
        match Path::new(file).extension()?.to_str()? {
            "json" => Some(Self::Json),
            "yml" | "yaml" => Some(Self::Yaml),
            _ => None,
        }
    }

    pub fn parse<T: DeserializeOwned>(self, raw: &str) -> Result<T> {
        match self {
            Self::Json => serde_json::from_str(raw).map_err(|err| Error::msg(format!("fail to load JSON config: {}", err))),
            Self::Yaml => serde_yaml::from_str(raw).map_err(|err| Error::msg(format!("fail to load YAML config: {}", err))),
        }
    }
}

pub fn options_from_file<T: DeserializeOwned>(file: &str) -> Result<T> {
    let format = ConfigFormat::from_path(file).ok_or_else(|| {
        Error::msg(format!(
            "invalid file format: {}, only support \"json\", \"yaml\" or \"yml\"",
            file
        ))
    })?;

    let raw = fs::read_to_string(file).map_err(|err| Error::msg(format!("fail to read config file {}: {}", file, err)))?;

    format.parse(&raw)
}
