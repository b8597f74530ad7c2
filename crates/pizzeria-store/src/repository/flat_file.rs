//! # Flat-File Repository
//!
//! One text file per record kind, one [`FlatRecord`] line per record.
//!
//! ## Load Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  file missing             ──► empty snapshot (first run)               │
//! │  blank line               ──► skipped                                  │
//! │  line fails to decode     ──► StoreError::Malformed { line: n }        │
//! │                               whole load fails, nothing returned       │
//! │  two lines share an id    ──► CoreError::DuplicateId                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Saving rewrites the file from scratch with every record of the snapshot,
//! each line ending in `\n`. An empty snapshot writes an empty file.

use std::fs;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use pizzeria_core::{Identified, RecordSet};
use tracing::debug;

use super::Repository;
use crate::codec::FlatRecord;
use crate::error::{StoreError, StoreResult};

/// Repository backed by a delimited text file.
///
/// ## Usage
/// ```rust,ignore
/// let pizzas: FlatFileRepository<Pizza> = FlatFileRepository::new("data/pizzas.txt");
/// let snapshot = pizzas.load_all()?;
/// ```
#[derive(Debug, Clone)]
pub struct FlatFileRepository<T> {
    path: PathBuf,
    _record: PhantomData<fn() -> T>,
}

impl<T> FlatFileRepository<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FlatFileRepository {
            path: path.into(),
            _record: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<T: FlatRecord + Identified> FlatFileRepository<T> {
    fn decode_lines(&self, contents: &str) -> StoreResult<Vec<T>> {
        let mut records = Vec::new();

        for (index, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let record = T::decode(line).map_err(|source| StoreError::Malformed {
                path: self.path.clone(),
                line: index + 1,
                source,
            })?;
            records.push(record);
        }

        Ok(records)
    }
}

impl<T: FlatRecord + Identified> Repository<T> for FlatFileRepository<T> {
    fn load_all(&self) -> StoreResult<RecordSet<T>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), entity = T::ENTITY, "No record file yet");
                return Ok(RecordSet::new());
            }
            Err(e) => return Err(StoreError::io(&self.path, e)),
        };

        let records = RecordSet::from_records(self.decode_lines(&contents)?)?;

        debug!(
            path = %self.path.display(),
            entity = T::ENTITY,
            count = records.len(),
            "Loaded records"
        );
        Ok(records)
    }

    fn save_all(&self, records: &RecordSet<T>) -> StoreResult<()> {
        let mut contents = String::new();
        for record in records {
            contents.push_str(&record.encode());
            contents.push('\n');
        }

        fs::write(&self.path, contents).map_err(|e| StoreError::io(&self.path, e))?;

        debug!(
            path = %self.path.display(),
            entity = T::ENTITY,
            count = records.len(),
            "Saved records"
        );
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pizzeria_core::{CoreError, Drink, Money, Order};
    use tempfile::TempDir;

    fn drink(id: u32, name: &str) -> Drink {
        Drink {
            id,
            name: name.to_string(),
            price: Money::from_cents(199),
            is_sold_out: false,
            soft_deleted: false,
        }
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let repo: FlatFileRepository<Drink> =
            FlatFileRepository::new(dir.path().join("drinks.txt"));

        let drinks = repo.load_all().unwrap();
        assert!(drinks.is_empty());
        assert!(!repo.path().exists());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let repo: FlatFileRepository<Drink> =
            FlatFileRepository::new(dir.path().join("drinks.txt"));
        let drinks = RecordSet::from_records(vec![drink(1, "Cola"), drink(2, "Lemonade")]).unwrap();

        repo.save_all(&drinks).unwrap();

        let on_disk = fs::read_to_string(repo.path()).unwrap();
        assert_eq!(on_disk, "1#Cola#1.99#false#false\n2#Lemonade#1.99#false#false\n");
        assert_eq!(repo.load_all().unwrap(), drinks);
    }

    #[test]
    fn test_save_replaces_previous_contents() {
        let dir = TempDir::new().unwrap();
        let repo: FlatFileRepository<Drink> =
            FlatFileRepository::new(dir.path().join("drinks.txt"));

        repo.save_all(&RecordSet::from_records(vec![drink(1, "Cola"), drink(2, "Tea")]).unwrap())
            .unwrap();
        repo.save_all(&RecordSet::from_records(vec![drink(1, "Cola")]).unwrap())
            .unwrap();

        assert_eq!(repo.load_all().unwrap().len(), 1);
    }

    #[test]
    fn test_malformed_line_fails_whole_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("drinks.txt");
        fs::write(&path, "1#Cola#1.99#false#false\n2#Tea#free#false#false\n").unwrap();
        let repo: FlatFileRepository<Drink> = FlatFileRepository::new(&path);

        match repo.load_all() {
            Err(StoreError::Malformed { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected Malformed, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_lines_and_crlf_are_tolerated() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("drinks.txt");
        fs::write(&path, "1#Cola#1.99#false#false\r\n\r\n2#Tea#1.50#true#false\r\n").unwrap();
        let repo: FlatFileRepository<Drink> = FlatFileRepository::new(&path);

        let drinks = repo.load_all().unwrap();
        assert_eq!(drinks.len(), 2);
        assert!(drinks.get(2).unwrap().is_sold_out);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("drinks.txt");
        fs::write(&path, "1#Cola#1.99#false#false\n1#Tea#1.50#false#false\n").unwrap();
        let repo: FlatFileRepository<Drink> = FlatFileRepository::new(&path);

        assert!(matches!(
            repo.load_all(),
            Err(StoreError::Core(CoreError::DuplicateId { id: 1, .. }))
        ));
    }

    #[test]
    fn test_orders_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("orders.txt");
        fs::write(
            &path,
            "1#a@x.com#1#0#none#01/15/24#12#false\n2#b@x.com#2#1#small#01/16/24#8#true\n",
        )
        .unwrap();
        let repo: FlatFileRepository<Order> = FlatFileRepository::new(&path);

        let orders = repo.load_all().unwrap();
        assert_eq!(orders.len(), 2);
        assert_eq!(orders.get(2).unwrap().drink_id(), Some(1));
    }

    #[test]
    fn test_unreadable_path_is_io_error() {
        let dir = TempDir::new().unwrap();
        // A directory where a file is expected
        let repo: FlatFileRepository<Drink> = FlatFileRepository::new(dir.path());

        assert!(matches!(repo.load_all(), Err(StoreError::Io { .. })));
    }
}
