//! Reference population loaded from the historical applications file.
//!
//! The full table backs identifier-based prefill; a seeded random sample of
//! it backs the comparison plots. Both are read-only once loaded.

use crate::glossary::Glossary;
use crate::models::{FieldValue, CLIENT_ID_COLUMN, TARGET_COLUMN};
use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

/// Full reference table with an index on the client identifier.
#[derive(Debug)]
pub struct ReferenceTable {
    /// Kept columns with their position in the source records.
    columns: Vec<(String, usize)>,
    rows: Vec<StringRecord>,
    id_index: HashMap<i64, usize>,
}

/// One row of the reference table.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceRow<'a> {
    table: &'a ReferenceTable,
    record: &'a StringRecord,
}

impl ReferenceTable {
    /// Loads the table from a CSV file.
    pub fn load(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)
            .with_context(|| format!("open reference data: {}", path.display()))?;
        Self::from_reader(file).with_context(|| format!("read reference data: {}", path.display()))
    }

    /// Reads a CSV with headers. The outcome column is dropped.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = ReaderBuilder::new().has_headers(true).from_reader(reader);

        let headers = reader.headers().context("read headers")?.clone();
        let columns: Vec<(String, usize)> = headers
            .iter()
            .enumerate()
            .map(|(idx, name)| (name.trim().trim_matches('\u{feff}').to_string(), idx))
            .filter(|(name, _)| name != TARGET_COLUMN)
            .collect();
        let id_position = columns
            .iter()
            .find(|(name, _)| name == CLIENT_ID_COLUMN)
            .map(|(_, idx)| *idx);

        let mut rows = Vec::new();
        let mut id_index = HashMap::new();
        for (line, record) in reader.records().enumerate() {
            let record = record.with_context(|| format!("read record {}", line + 1))?;
            if let Some(id) = id_position
                .and_then(|pos| record.get(pos))
                .and_then(FieldValue::parse_cell)
                .and_then(|v| v.as_i64())
            {
                // First occurrence wins on duplicate identifiers
                id_index.entry(id).or_insert(rows.len());
            }
            rows.push(record);
        }

        if id_position.is_none() {
            tracing::warn!(
                "Reference data has no {} column; prefill by identifier is disabled",
                CLIENT_ID_COLUMN
            );
        }

        Ok(Self {
            columns,
            rows,
            id_index,
        })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.columns
            .iter()
            .find(|(column, _)| column == name)
            .map(|(_, idx)| *idx)
    }

    /// Row of the client with the given identifier.
    pub fn find_by_id(&self, client_id: i64) -> Option<ReferenceRow<'_>> {
        self.id_index.get(&client_id).map(|&idx| ReferenceRow {
            table: self,
            record: &self.rows[idx],
        })
    }

    /// Draws a seeded sample of at most `size` rows, keeping only columns
    /// the glossary can label.
    pub fn sample(&self, size: usize, seed: u64, glossary: &Glossary) -> ReferenceSample {
        let mut indices: Vec<usize> = if self.rows.len() <= size {
            (0..self.rows.len()).collect()
        } else {
            let mut rng = StdRng::seed_from_u64(seed);
            rand::seq::index::sample(&mut rng, self.rows.len(), size).into_vec()
        };
        indices.sort_unstable();

        let columns = self
            .columns
            .iter()
            .filter(|(name, _)| glossary.contains(name))
            .map(|(name, pos)| {
                let values = indices
                    .iter()
                    .map(|&row| {
                        self.rows[row]
                            .get(*pos)
                            .and_then(FieldValue::parse_cell)
                    })
                    .collect();
                (name.clone(), values)
            })
            .collect();

        ReferenceSample::new(columns, indices.len())
    }
}

impl<'a> ReferenceRow<'a> {
    /// Parsed cell of a column; `None` when the column is absent or the cell empty.
    pub fn get(&self, column: &str) -> Option<FieldValue> {
        self.table
            .position(column)
            .and_then(|pos| self.record.get(pos))
            .and_then(FieldValue::parse_cell)
    }

    /// Every kept column with its parsed cell.
    pub fn cells(&self) -> impl Iterator<Item = (&'a str, Option<FieldValue>)> + 'a {
        let record = self.record;
        self.table.columns.iter().map(move |(name, pos)| {
            (
                name.as_str(),
                record.get(*pos).and_then(FieldValue::parse_cell),
            )
        })
    }
}

/// Column-oriented sample of the reference population.
#[derive(Debug, Clone, Default)]
pub struct ReferenceSample {
    order: Vec<String>,
    columns: HashMap<String, Vec<Option<FieldValue>>>,
    rows: usize,
}

impl ReferenceSample {
    pub fn new(columns: Vec<(String, Vec<Option<FieldValue>>)>, rows: usize) -> Self {
        let order = columns.iter().map(|(name, _)| name.clone()).collect();
        Self {
            order,
            columns: columns.into_iter().collect(),
            rows,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Feature names available for comparison, in source column order.
    pub fn features(&self) -> &[String] {
        &self.order
    }

    pub fn column(&self, name: &str) -> Option<&[Option<FieldValue>]> {
        self.columns.get(name).map(Vec::as_slice)
    }
}
