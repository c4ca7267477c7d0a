//! Error types for ship_route

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while installing a map.
///
/// Placement rejections and "no path" are not errors; only a map that cannot
/// be installed is reported.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The payload contained no rows
    #[error("map has no rows")]
    EmptyMap,
    /// A row had zero cells
    #[error("map row {row} is empty")]
    EmptyRow { row: usize },
    /// A row length differs from the first row
    #[error("map row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A symbol is neither the free nor the blocked symbol
    #[error("unknown symbol {symbol:#04x} at row {row}, col {col}")]
    UnknownSymbol { row: usize, col: usize, symbol: u8 },
    /// The map source has nothing to offer
    #[error("no map files in {}", dir.display())]
    NoMaps { dir: PathBuf },
    /// Reading a map source failed
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for map operations
pub type SeaResult<T> = Result<T, LoadError>;
