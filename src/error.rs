use std::path::PathBuf;

/// Reasons a drop is refused. None of them change the game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is out of range (board has columns 0..{width})")]
    InvalidColumn { column: i64, width: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("the game is already over")]
    GameOver,

    #[error("'{input}' is not a column number")]
    Unparseable { input: String },
}

impl MoveError {
    /// `column` saturates at `i64::MAX` rather than wrapping.
    pub fn invalid_column(column: usize, width: usize) -> Self {
        MoveError::InvalidColumn {
            column: i64::try_from(column).unwrap_or(i64::MAX),
            width,
        }
    }
}

/// Errors that can occur when creating a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
