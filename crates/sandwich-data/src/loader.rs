//! Resolution pipeline: reads shop data files, resolves names, builds a shop.
//!
//! Provides format detection (RON/JSON/TOML), file discovery, and
//! deserialization helpers, then [`load_shop`] on top of them.

use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use sandwich_core::config::ShopConfig;
use sandwich_core::error::KitchenError;
use sandwich_core::fixed::{Cost, checked_f64_to_cost};
use sandwich_core::id::{IngredientId, RecipeId};
use sandwich_core::kitchen::Kitchen;
use sandwich_core::shop::Shop;

use crate::schema::{IngredientData, RecipeData};

// ===========================================================================
// Errors
// ===========================================================================

/// Errors that can occur during data loading.
#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    /// A required data file was not found in the given directory.
    #[error("required file '{file}' not found in {dir}")]
    MissingRequired { file: String, dir: PathBuf },

    /// The file has an extension we don't support.
    #[error("unsupported format for file: {file}")]
    UnsupportedFormat { file: PathBuf },

    /// Two files with the same base name but different formats exist.
    #[error("conflicting formats: {a} and {b}")]
    ConflictingFormats { a: PathBuf, b: PathBuf },

    #[error("parse error in {file}: {detail}")]
    Parse { file: PathBuf, detail: String },

    /// A name reference could not be resolved.
    #[error("unresolved {expected_kind} reference '{name}' in {file}")]
    UnresolvedRef {
        file: PathBuf,
        name: String,
        expected_kind: &'static str,
    },

    #[error("duplicate name '{name}' in {file}")]
    DuplicateName { file: PathBuf, name: String },

    /// A cost, premium or funds value is not finite or does not fit a `Cost`.
    #[error("invalid amount {value} for '{name}' in {file}")]
    InvalidNumber {
        file: PathBuf,
        name: String,
        value: f64,
    },

    /// The kitchen refused an entry (empty bases, no changes, ...).
    #[error("{file}: {source}")]
    Kitchen {
        file: PathBuf,
        #[source]
        source: KitchenError,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

// ===========================================================================
// Format detection
// ===========================================================================

/// Supported data file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Ron,
    Toml,
    Json,
}

/// Detect the format of a file based on its extension.
pub fn detect_format(path: &Path) -> Result<Format, DataLoadError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("ron") => Ok(Format::Ron),
        Some("toml") => Ok(Format::Toml),
        Some("json") => Ok(Format::Json),
        _ => Err(DataLoadError::UnsupportedFormat {
            file: path.to_path_buf(),
        }),
    }
}

// ===========================================================================
// File discovery
// ===========================================================================

/// Scan a directory for `{base_name}.ron`, `.toml` or `.json`.
///
/// Returns `Ok(None)` if none exists, or `Err(ConflictingFormats)` if more
/// than one does.
pub fn find_data_file(dir: &Path, base_name: &str) -> Result<Option<PathBuf>, DataLoadError> {
    let mut found: Option<PathBuf> = None;

    for ext in ["ron", "toml", "json"] {
        let candidate = dir.join(format!("{base_name}.{ext}"));
        if candidate.exists() {
            if let Some(existing) = found {
                return Err(DataLoadError::ConflictingFormats {
                    a: existing,
                    b: candidate,
                });
            }
            found = Some(candidate);
        }
    }

    Ok(found)
}

/// Like [`find_data_file`], but a missing file is an error.
pub fn require_data_file(dir: &Path, base_name: &str) -> Result<PathBuf, DataLoadError> {
    find_data_file(dir, base_name)?.ok_or_else(|| DataLoadError::MissingRequired {
        file: base_name.to_string(),
        dir: dir.to_path_buf(),
    })
}

// ===========================================================================
// Deserialization
// ===========================================================================

fn parse_error(path: &Path, e: impl ToString) -> DataLoadError {
    DataLoadError::Parse {
        file: path.to_path_buf(),
        detail: e.to_string(),
    }
}

/// Read a file and deserialize it according to its extension.
pub fn deserialize_file<T: DeserializeOwned>(path: &Path) -> Result<T, DataLoadError> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;

    match format {
        Format::Ron => ron::from_str(&content).map_err(|e| parse_error(path, e)),
        Format::Json => serde_json::from_str(&content).map_err(|e| parse_error(path, e)),
        Format::Toml => toml::from_str(&content).map_err(|e| parse_error(path, e)),
    }
}

/// Deserialize a list. TOML files hold the array under `toml_key` in a
/// top-level table; RON and JSON files are the array itself.
pub fn deserialize_list<T: DeserializeOwned>(
    path: &Path,
    toml_key: &str,
) -> Result<Vec<T>, DataLoadError> {
    if detect_format(path)? != Format::Toml {
        return deserialize_file(path);
    }
    let content = std::fs::read_to_string(path)?;
    let mut table: toml::Table = toml::from_str(&content).map_err(|e| parse_error(path, e))?;
    let array = table
        .remove(toml_key)
        .ok_or_else(|| parse_error(path, format!("missing key '{toml_key}' in TOML file")))?;
    array
        .try_into()
        .map_err(|e: toml::de::Error| parse_error(path, e))
}

// ===========================================================================
// Name resolution helpers
// ===========================================================================

/// Look up a name in a map, returning an `UnresolvedRef` error if not found.
pub fn resolve_name<V: Copy>(
    map: &HashMap<String, V>,
    name: &str,
    file: &Path,
    expected_kind: &'static str,
) -> Result<V, DataLoadError> {
    map.get(name)
        .copied()
        .ok_or_else(|| DataLoadError::UnresolvedRef {
            file: file.to_path_buf(),
            name: name.to_string(),
            expected_kind,
        })
}

fn resolve_all<V: Copy>(
    map: &HashMap<String, V>,
    names: &[String],
    file: &Path,
    expected_kind: &'static str,
) -> Result<Vec<V>, DataLoadError> {
    names
        .iter()
        .map(|n| resolve_name(map, n, file, expected_kind))
        .collect()
}

/// Check whether a name already exists in a map, returning a `DuplicateName`
/// error if so.
pub fn check_duplicate<V>(
    map: &HashMap<String, V>,
    name: &str,
    file: &Path,
) -> Result<(), DataLoadError> {
    if map.contains_key(name) {
        Err(DataLoadError::DuplicateName {
            file: file.to_path_buf(),
            name: name.to_string(),
        })
    } else {
        Ok(())
    }
}

/// Convert a dollar amount read from `file`, rejecting values a `Cost`
/// cannot hold.
pub fn cost_field(value: f64, name: &str, file: &Path) -> Result<Cost, DataLoadError> {
    checked_f64_to_cost(value).ok_or_else(|| DataLoadError::InvalidNumber {
        file: file.to_path_buf(),
        name: name.to_string(),
        value,
    })
}

// ===========================================================================
// Loading
// ===========================================================================

/// Load the ingredients and (optional) recipes of a shop directory into a
/// fresh kitchen. Entries are added in file order, so every reference must
/// point at an earlier entry.
pub fn load_kitchen(dir: &Path) -> Result<Kitchen, DataLoadError> {
    let mut kitchen = Kitchen::new();

    let ingredients_path = require_data_file(dir, "ingredients")?;
    let entries: Vec<IngredientData> = deserialize_list(&ingredients_path, "ingredients")?;
    let mut ingredients: HashMap<String, IngredientId> = HashMap::new();
    for entry in entries {
        check_duplicate(&ingredients, entry.name(), &ingredients_path)?;
        let added = match &entry {
            IngredientData::Simple {
                name,
                cost,
                quantity,
            } => {
                let cost = cost_field(*cost, name, &ingredients_path)?;
                kitchen.add_simple_ingredient(name, *quantity, cost)
            }
            IngredientData::Complex {
                name,
                premium,
                bases,
            } => {
                let premium = cost_field(*premium, name, &ingredients_path)?;
                let bases = resolve_all(&ingredients, bases, &ingredients_path, "ingredient")?;
                kitchen.add_complex_ingredient(name, premium, bases)
            }
        };
        let id = added.map_err(|source| DataLoadError::Kitchen {
            file: ingredients_path.clone(),
            source,
        })?;
        ingredients.insert(entry.name().to_string(), id);
    }

    let Some(recipes_path) = find_data_file(dir, "recipes")? else {
        tracing::info!(ingredients = ingredients.len(), "loaded kitchen without recipes");
        return Ok(kitchen);
    };
    let entries: Vec<RecipeData> = deserialize_list(&recipes_path, "recipes")?;
    let mut recipes: HashMap<String, RecipeId> = HashMap::new();
    for entry in entries {
        check_duplicate(&recipes, entry.name(), &recipes_path)?;
        let registered = match &entry {
            RecipeData::Simple {
                name,
                premium,
                ingredients: names,
            } => {
                let premium = cost_field(*premium, name, &recipes_path)?;
                let list = resolve_all(&ingredients, names, &recipes_path, "ingredient")?;
                kitchen.register_simple_recipe(name, list, premium)
            }
            RecipeData::Complex {
                name,
                base,
                premium,
                added,
                removed,
            } => {
                let premium = cost_field(*premium, name, &recipes_path)?;
                let base = resolve_name(&recipes, base, &recipes_path, "recipe")?;
                let added = resolve_all(&ingredients, added, &recipes_path, "ingredient")?;
                let removed = resolve_all(&ingredients, removed, &recipes_path, "ingredient")?;
                kitchen.register_complex_recipe(name, added, base, removed, premium)
            }
        };
        let id = registered.map_err(|source| DataLoadError::Kitchen {
            file: recipes_path.clone(),
            source,
        })?;
        recipes.insert(entry.name().to_string(), id);
    }

    tracing::info!(
        ingredients = ingredients.len(),
        recipes = recipes.len(),
        "loaded kitchen"
    );
    Ok(kitchen)
}

/// Load a whole shop: optional `shop` config, required `ingredients`,
/// optional `recipes`.
pub fn load_shop(dir: &Path, seed: u64) -> Result<Shop, DataLoadError> {
    let config = match find_data_file(dir, "shop")? {
        Some(path) => {
            let config = deserialize_file::<ShopConfig>(&path)?;
            cost_field(config.funds, "funds", &path)?;
            config
        }
        None => ShopConfig::default(),
    };
    let kitchen = load_kitchen(dir)?;
    tracing::info!(shop = %config.name, dir = %dir.display(), "shop loaded");
    Ok(Shop::new(config, kitchen, seed))
}

// ===========================================================================
// Tests
// ===========================================================================
