use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManagerError {
    #[error("cannot read configuration: {0}")]
    IOError(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("key '{0}' not found")]
    NameNotFoundError(String),

    #[error("key '{0}' defined more than once")]
    DuplicateNameError(String)
}

pub fn parse_json_value<T>(json_value: serde_json::Value) -> Result<T, ManagerError>
where T: DeserializeOwned {
    Ok(serde_json::from_value(json_value)?)
}
