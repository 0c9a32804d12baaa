//! Course records and their CSV representation.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

/// One course extracted from the catalog page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    #[serde(rename = "Course Code")]
    pub course_code: String,
    #[serde(rename = "Course Name")]
    pub course_name: String,
    /// Free-form credit expression, may be empty.
    #[serde(rename = "Credits")]
    pub credits: String,
    /// Designation tags such as `NW`, may be empty.
    #[serde(rename = "Designations")]
    pub designations: String,
    #[serde(rename = "Description")]
    pub description: String,
}

/// Courses in document order. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogTable {
    records: Vec<CourseRecord>,
}

impl From<Vec<CourseRecord>> for CatalogTable {
    fn from(records: Vec<CourseRecord>) -> Self {
        Self { records }
    }
}

impl IntoIterator for CatalogTable {
    type Item = CourseRecord;
    type IntoIter = std::vec::IntoIter<CourseRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl CatalogTable {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[CourseRecord] {
        &self.records
    }

    /// The first `rows` records, or all of them if there are fewer.
    pub fn preview(&self, rows: usize) -> &[CourseRecord] {
        self.records
            .get(..rows.min(self.records.len()))
            .unwrap_or_default()
    }

    /// Writes the table as CSV with a header row to `writer`.
    ///
    /// # Errors
    ///
    /// Returns an error if a record cannot be serialized or the writer fails.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for record in &self.records {
            csv_writer.serialize(record)?;
        }
        csv_writer
            .flush()
            .map_err(|e| CatalogError::Csv(csv::Error::from(e)))
    }

    /// Writes the table to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    pub fn write_csv(&self, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|e| CatalogError::io(path, e))?;
        self.write_to(file)
    }

    /// Reads a table previously written by [`CatalogTable::write_to`].
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not CSV with the expected columns.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let records = csv::Reader::from_reader(reader)
            .deserialize()
            .collect::<std::result::Result<Vec<CourseRecord>, csv::Error>>()?;
        Ok(Self { records })
    }

    /// Reads a table from a CSV file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsed.
    pub fn read_csv(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| CatalogError::io(path, e))?;
        Self::from_reader(file)
    }
}
