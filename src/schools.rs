//! School directory keyed by U-DISE code
//!
//! Used only to auto-fill the school name and administrative block on
//! the form; not part of the salary math. A matching code always
//! overwrites prior manual edits of those two fields.

use std::collections::HashMap;
use std::path::Path;

use log::info;
use serde::Deserialize;

use crate::error::Error;

/// Descriptive data for one school
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SchoolInfo {
    pub name: String,
    pub block: String,
}

/// U-DISE code -> school name and block
#[derive(Debug, Clone)]
pub struct SchoolDirectory {
    schools: HashMap<String, SchoolInfo>,
}

impl Default for SchoolDirectory {
    fn default() -> Self {
        let mut schools = HashMap::new();
        schools.insert(
            "10010100101".to_string(),
            SchoolInfo {
                name: "राजकीय मध्य विद्यालय, मोतिहारी".to_string(),
                block: "मोतिहारी".to_string(),
            },
        );
        schools.insert(
            "10010100102".to_string(),
            SchoolInfo {
                name: "राजकीय कन्या मध्य विद्यालय, मोतिहारी".to_string(),
                block: "मोतिहारी".to_string(),
            },
        );
        schools.insert(
            "10020300405".to_string(),
            SchoolInfo {
                name: "उत्क्रमित मध्य विद्यालय, पताही".to_string(),
                block: "पताही".to_string(),
            },
        );
        Self { schools }
    }
}

impl SchoolDirectory {
    /// Create from loaded directory data
    pub fn from_loaded(schools: HashMap<String, SchoolInfo>) -> Self {
        Self { schools }
    }

    /// Load from a `udise_code,name,block` CSV file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        #[derive(Deserialize)]
        struct Row {
            udise_code: String,
            name: String,
            block: String,
        }

        let mut reader = csv::Reader::from_path(path)?;
        let mut schools = HashMap::new();
        for row in reader.deserialize() {
            let row: Row = row?;
            schools.insert(
                row.udise_code,
                SchoolInfo {
                    name: row.name,
                    block: row.block,
                },
            );
        }
        info!("loaded school directory with {} school(s)", schools.len());
        Ok(Self { schools })
    }

    /// School info for a U-DISE code, `None` when unknown
    pub fn lookup(&self, udise_code: &str) -> Option<&SchoolInfo> {
        self.schools.get(udise_code)
    }

    pub fn len(&self) -> usize {
        self.schools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schools.is_empty()
    }
}
