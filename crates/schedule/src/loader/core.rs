//! Core [`CatalogLoader`] struct: filesystem-backed catalog loading.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{info, warn};

use crate::catalog::Catalog;
use crate::schema::{CareScheduleTemplate, PetType};
use crate::validation::validate_template_value;

use super::error::{LoadResult, LoadStatus, LoaderError, Result};

/// Filesystem-backed catalog loader.
///
/// Scans a directory (recursively, in path order) for `*.yml` / `*.yaml`
/// files, each holding one [`CareScheduleTemplate`]. Templates for the same
/// species found in several files are merged in the order they are read.
pub struct CatalogLoader {
    /// Root directory containing catalog YAML files.
    catalog_dir: PathBuf,
    /// Loaded templates keyed by species.
    templates: BTreeMap<PetType, CareScheduleTemplate>,
}

impl CatalogLoader {
    pub fn new(catalog_dir: PathBuf) -> Self {
        Self {
            catalog_dir,
            templates: BTreeMap::new(),
        }
    }

    /// Recursively scan the catalog directory and load all YAML files.
    ///
    /// Dotfiles and non-YAML files are skipped. Parse and validation errors
    /// are reported per-file but do not abort the scan. Each scan replaces
    /// whatever a previous scan loaded.
    pub fn load_all(&mut self) -> Result<Vec<LoadResult>> {
        self.templates.clear();
        let mut results = Vec::new();
        let dir = self.catalog_dir.clone();
        self.scan_dir_recursive(&dir, &mut results)?;
        Ok(results)
    }

    fn scan_dir_recursive(&mut self, dir: &Path, results: &mut Vec<LoadResult>) -> Result<()> {
        let mut paths = fs::read_dir(dir)?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<std::io::Result<Vec<_>>>()?;
        paths.sort();

        for path in paths {
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                if name.starts_with('.') {
                    if path.is_file() {
                        results.push(LoadResult {
                            path,
                            status: LoadStatus::Skipped {
                                reason: "dotfile".to_string(),
                            },
                        });
                    }
                    continue;
                }
            }

            if path.is_dir() {
                self.scan_dir_recursive(&path, results)?;
                continue;
            }

            let is_yaml = path
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| e == "yml" || e == "yaml")
                .unwrap_or(false);

            if !is_yaml {
                results.push(LoadResult {
                    path,
                    status: LoadStatus::Skipped {
                        reason: "not a YAML file".to_string(),
                    },
                });
                continue;
            }

            match self.load_file(&path) {
                Ok(template) => {
                    let pet_type = template.pet_type;
                    let rule_count = template.schedules.len();
                    info!(pet_type = %pet_type, rules = rule_count, path = %path.display(), "loaded care schedule template");
                    self.merge(template);
                    results.push(LoadResult {
                        path,
                        status: LoadStatus::Loaded {
                            pet_type,
                            rule_count,
                        },
                    });
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "failed to load catalog file");
                    results.push(LoadResult {
                        path,
                        status: LoadStatus::Failed {
                            error: e.to_string(),
                        },
                    });
                }
            }
        }

        Ok(())
    }

    /// Parse and validate a single template file.
    ///
    /// The file is first read as untyped YAML and validated rule by rule, so
    /// a bad file reports every problem at once; only then is it converted
    /// into typed rules.
    pub fn load_file(&self, path: &Path) -> Result<CareScheduleTemplate> {
        let contents = fs::read_to_string(path)?;
        let value: Value = serde_yaml::from_str(&contents)?;

        let result = validate_template_value(&value);
        for warning in &result.warnings {
            warn!(path = %path.display(), field = %warning.path, "{}", warning.message);
        }
        if !result.valid {
            return Err(LoaderError::Validation(result.summary()));
        }

        serde_json::from_value(value).map_err(|e| LoaderError::Validation(e.to_string()))
    }

    fn merge(&mut self, template: CareScheduleTemplate) {
        self.templates
            .entry(template.pet_type)
            .or_insert_with(|| CareScheduleTemplate::new(template.pet_type, Vec::new()))
            .schedules
            .extend(template.schedules);
    }

    /// Templates loaded so far.
    pub fn templates(&self) -> impl Iterator<Item = &CareScheduleTemplate> {
        self.templates.values()
    }

    /// Assemble the loaded templates into a [`Catalog`].
    ///
    /// Fails when rule IDs collide across files.
    pub fn into_catalog(self) -> Result<Catalog> {
        let version = format!("dir:{}", self.catalog_dir.display());
        Ok(Catalog::from_templates(version, self.templates.into_values())?)
    }

    /// Atomically write a template to `<catalog_dir>/<pet_type>.yml`.
    ///
    /// Writes to a `.tmp` file first, then renames to the final path to
    /// avoid partial writes on crash.
    pub fn write_template(&self, template: &CareScheduleTemplate) -> Result<PathBuf> {
        fs::create_dir_all(&self.catalog_dir)?;
        let final_path = self.catalog_dir.join(format!("{}.yml", template.pet_type));
        let tmp_path = self.catalog_dir.join(format!(".{}.tmp", template.pet_type));

        let yaml = serde_yaml::to_string(template)?;
        fs::write(&tmp_path, yaml)?;
        fs::rename(&tmp_path, &final_path)?;

        info!(pet_type = %template.pet_type, path = %final_path.display(), "wrote care schedule template");
        Ok(final_path)
    }

    pub fn catalog_dir(&self) -> &Path {
        &self.catalog_dir
    }
}
