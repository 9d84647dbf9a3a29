use alloc::string::String;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("line {line}: expected `key = value`")]
    MissingSeparator { line: usize },
    #[error("line {line}: unknown key `{key}`")]
    UnknownKey { line: usize, key: String },
    #[error("line {line}: invalid number `{value}` for `{key}`")]
    InvalidNumber {
        line: usize,
        key: String,
        value: String,
    },
    #[error("line {line}: invalid bool `{value}` for `{key}`")]
    InvalidBool {
        line: usize,
        key: String,
        value: String,
    },
    #[error("autonomous timeline must satisfy drive_end <= fire_end <= sequence_end")]
    Timeline,
}
