//! Schedule catalog: the immutable set of care rules, partitioned by species.
//!
//! The built-in catalog is assembled once per process from the tables in
//! [`dog`] and [`cat`] and handed out as `&'static Catalog`. Catalogs loaded
//! from files go through [`Catalog::from_templates`], which validates every
//! rule before accepting it.

mod builder;
mod cat;
mod dog;

use std::collections::{BTreeMap, HashSet};
use std::sync::LazyLock;

use crate::error::{Result, ScheduleError};
use crate::schema::{CareScheduleRule, CareScheduleTemplate, PetType};
use crate::validation::validate_rule;

/// Version label of the compiled-in rule tables.
pub const BUILTIN_CATALOG_VERSION: &str = "2024.1";

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| Catalog {
    version: BUILTIN_CATALOG_VERSION.to_string(),
    templates: BTreeMap::from([
        (PetType::Dog, CareScheduleTemplate::new(PetType::Dog, dog::rules())),
        (PetType::Cat, CareScheduleTemplate::new(PetType::Cat, cat::rules())),
    ]),
});

/// Read-only collection of care-schedule templates keyed by species.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    version: String,
    templates: BTreeMap<PetType, CareScheduleTemplate>,
}

impl Catalog {
    /// The compiled-in catalog, built on first access.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Assemble a catalog from externally supplied templates.
    ///
    /// Rejects invalid rules, rules filed under the wrong species, duplicate
    /// rule IDs, and more than one template per species.
    pub fn from_templates(
        version: impl Into<String>,
        templates: impl IntoIterator<Item = CareScheduleTemplate>,
    ) -> Result<Catalog> {
        let mut by_type = BTreeMap::new();
        let mut seen_ids = HashSet::new();

        for template in templates {
            for rule in &template.schedules {
                let result = validate_rule(rule);
                if !result.valid {
                    let messages: Vec<String> =
                        result.errors.iter().map(|e| e.to_string()).collect();
                    return Err(ScheduleError::InvalidCatalog(format!(
                        "rule '{}' is invalid: {}",
                        rule.id,
                        messages.join("; ")
                    )));
                }
                if rule.pet_type != template.pet_type {
                    return Err(ScheduleError::InvalidCatalog(format!(
                        "rule '{}' has petType '{}' but is listed under '{}'",
                        rule.id, rule.pet_type, template.pet_type
                    )));
                }
                if !seen_ids.insert(rule.id.clone()) {
                    return Err(ScheduleError::InvalidCatalog(format!(
                        "duplicate rule id '{}'",
                        rule.id
                    )));
                }
            }

            let pet_type = template.pet_type;
            if by_type.insert(pet_type, template).is_some() {
                return Err(ScheduleError::InvalidCatalog(format!(
                    "more than one template for pet type '{}'",
                    pet_type
                )));
            }
        }

        Ok(Catalog {
            version: version.into(),
            templates: by_type,
        })
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Template for a species.
    pub fn template(&self, pet_type: PetType) -> Result<&CareScheduleTemplate> {
        self.templates
            .get(&pet_type)
            .ok_or(ScheduleError::MissingTemplate(pet_type))
    }

    /// Template for a species given by name; unknown names are rejected.
    pub fn template_for_name(&self, pet_type: &str) -> Result<&CareScheduleTemplate> {
        let parsed: PetType = pet_type.parse()?;
        self.template(parsed)
    }

    /// Every rule across all species, in species then declaration order.
    pub fn all_rules(&self) -> impl Iterator<Item = &CareScheduleRule> {
        self.templates.values().flat_map(|t| t.schedules.iter())
    }

    /// Species with a template in this catalog.
    pub fn pet_types(&self) -> impl Iterator<Item = PetType> + '_ {
        self.templates.keys().copied()
    }

    pub fn templates(&self) -> impl Iterator<Item = &CareScheduleTemplate> {
        self.templates.values()
    }

    pub fn len(&self) -> usize {
        self.templates.values().map(|t| t.schedules.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
