//! Workout plans: named ordered lists of challenge titles
//!
//! Plans are coach-curated but carry no owner; any coach may overwrite
//! any plan name.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::{read_optional, write_atomic, StoreError};

pub const PLANS_FILE: &str = "workout_plans.json";

/// Whole-file persistence for the plan map (name -> challenge titles).
pub struct PlanStore {
    path: PathBuf,
}

impl PlanStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(PLANS_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all plans; a missing or empty file is an empty map.
    pub fn load(&self) -> Result<BTreeMap<String, Vec<String>>, StoreError> {
        let Some(content) = read_optional(&self.path)? else {
            return Ok(BTreeMap::new());
        };
        serde_json::from_str(&content).map_err(|e| StoreError::corrupt(&self.path, e))
    }

    pub fn save(&self, plans: &BTreeMap<String, Vec<String>>) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(plans)
            .map_err(|e| StoreError::corrupt(&self.path, e))?;
        write_atomic(&self.path, &content)
    }

    /// Create or overwrite a named plan.
    pub fn create_plan(&self, name: &str, titles: Vec<String>) -> Result<(), StoreError> {
        let mut plans = self.load()?;
        plans.insert(name.to_string(), titles);
        self.save(&plans)
    }
}
