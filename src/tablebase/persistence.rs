//! Tablebase persistence boundary.
//!
//! The core only needs `save` and `load`; `BincodeFileStore` is the file
//! implementation. A file carries a header (format version, build time,
//! board size, piece limit) followed by one record per won position.
//! `load_or_build` treats any load failure as recoverable and rebuilds.

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::errors::{CheckersError, CheckersResult};
use crate::game_state::board::Board;
use crate::game_state::checkers_types::*;
use crate::game_state::position::Position;
use crate::tablebase::tablebase::{Tablebase, TablebaseConfig};

pub const TABLEBASE_FORMAT_VERSION: u32 = 1;

pub trait TablebaseStore {
    fn save(&self, table: &Tablebase) -> CheckersResult<()>;
    fn load(&self) -> CheckersResult<Tablebase>;
}

#[derive(Debug, Serialize, Deserialize)]
struct TablebaseHeader {
    format_version: u32,
    built_at: DateTime<Utc>,
    config: TablebaseConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct WinRecord {
    cells: Vec<Cell>,
    side_to_move: Color,
    winner: Color,
    distance: u16,
}

#[derive(Debug, Serialize, Deserialize)]
struct TablebaseFile {
    header: TablebaseHeader,
    records: Vec<WinRecord>,
}

#[derive(Debug, Clone)]
pub struct BincodeFileStore {
    path: PathBuf,
}

impl BincodeFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TablebaseStore for BincodeFileStore {
    fn save(&self, table: &Tablebase) -> CheckersResult<()> {
        let mut records = Vec::with_capacity(table.len());
        for winner in [Color::Red, Color::Black] {
            for (position, &distance) in table.wins_for(winner) {
                records.push(WinRecord {
                    cells: position.board().cells().to_vec(),
                    side_to_move: position.side_to_move(),
                    winner,
                    distance,
                });
            }
        }
        let file = TablebaseFile {
            header: TablebaseHeader {
                format_version: TABLEBASE_FORMAT_VERSION,
                built_at: table.built_at(),
                config: table.config(),
            },
            records,
        };

        let mut writer = BufWriter::new(File::create(&self.path)?);
        bincode::serialize_into(&mut writer, &file)?;
        writer.flush()?;
        info!(
            "saved {} tablebase records to {}",
            file.records.len(),
            self.path.display()
        );
        Ok(())
    }

    fn load(&self) -> CheckersResult<Tablebase> {
        // Decoding from memory bounds every length prefix by the file size.
        let bytes = fs::read(&self.path)?;
        let file: TablebaseFile = bincode::deserialize(&bytes)?;
        if file.header.format_version != TABLEBASE_FORMAT_VERSION {
            return Err(CheckersError::TablebaseMismatch(format!(
                "format version {} (expected {TABLEBASE_FORMAT_VERSION})",
                file.header.format_version
            )));
        }

        let config = file.header.config;
        let mut wins = [HashMap::new(), HashMap::new()];
        for record in file.records {
            let board = Board::from_cells(config.board_size, record.cells)?;
            let position = Position::new(board, record.side_to_move);
            wins[record.winner.index()].insert(position, record.distance);
        }
        let [red, black] = wins;
        info!(
            "loaded tablebase built {} from {}",
            file.header.built_at,
            self.path.display()
        );
        Ok(Tablebase::from_parts(config, file.header.built_at, red, black))
    }
}

/// Load the table from `store`, rebuilding and re-saving it when the stored
/// copy is missing, unreadable or built for another configuration.
pub fn load_or_build<S: TablebaseStore + ?Sized>(store: &S, config: TablebaseConfig) -> Tablebase {
    match store.load() {
        Ok(table) if table.config() == config => return table,
        Ok(table) => warn!(
            "stored tablebase is for {:?}, wanted {config:?}; rebuilding",
            table.config()
        ),
        Err(err) => warn!("could not load tablebase ({err}); rebuilding"),
    }

    let table = Tablebase::build(config);
    if let Err(err) = store.save(&table) {
        warn!("could not save rebuilt tablebase: {err}");
    }
    table
}
