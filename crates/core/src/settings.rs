//! Game settings - board size and spawn distribution, validated once at startup.

use crate::error::ConfigError;
use crate::spawn::SpawnTable;
use crate::types::{DEFAULT_COLS, DEFAULT_ROWS, MAX_DIM};

/// Startup configuration for a game.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSettings {
    pub rows: usize,
    pub cols: usize,
    pub spawn_table: SpawnTable,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            spawn_table: SpawnTable::default(),
        }
    }
}

impl GameSettings {
    pub fn new(rows: usize, cols: usize, spawn_table: SpawnTable) -> Result<Self, ConfigError> {
        let settings = Self {
            rows,
            cols,
            spawn_table,
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Check the board dimensions. The spawn table is validated on construction.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let in_range = |d: usize| (1..=MAX_DIM).contains(&d);
        if !in_range(self.rows) || !in_range(self.cols) {
            return Err(ConfigError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }
}

/// Parse a board size written as `ROWSxCOLS`.
///
/// # Examples
///
/// ```
/// use tui_2048_core::parse_size;
///
/// assert_eq!(parse_size("4x4").unwrap(), (4, 4));
/// assert_eq!(parse_size("3X5").unwrap(), (3, 5));
/// assert!(parse_size("0x4").is_err());
/// assert!(parse_size("four").is_err());
/// ```
pub fn parse_size(text: &str) -> Result<(usize, usize), ConfigError> {
    let malformed = || ConfigError::MalformedSize(text.to_string());
    let lower = text.trim().to_lowercase();
    let (rows, cols) = lower.split_once('x').ok_or_else(malformed)?;
    let rows: usize = rows.trim().parse().map_err(|_| malformed())?;
    let cols: usize = cols.trim().parse().map_err(|_| malformed())?;

    if rows == 0 || cols == 0 || rows > MAX_DIM || cols > MAX_DIM {
        return Err(ConfigError::InvalidDimensions { rows, cols });
    }
    Ok((rows, cols))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = GameSettings::default();
        assert_eq!((settings.rows, settings.cols), (4, 4));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_dimension() {
        assert_eq!(
            GameSettings::new(0, 4, SpawnTable::default()),
            Err(ConfigError::InvalidDimensions { rows: 0, cols: 4 })
        );
    }

    #[test]
    fn test_parse_size_errors() {
        assert_eq!(
            parse_size("4by4"),
            Err(ConfigError::MalformedSize("4by4".to_string()))
        );
        assert_eq!(
            parse_size("64x4"),
            Err(ConfigError::InvalidDimensions { rows: 64, cols: 4 })
        );
    }
}
