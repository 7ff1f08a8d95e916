//! Folder normalization: raw API JSON to the in-memory model.
//!
//! A pure pass over one folder-detail payload. Every optional field gets its
//! default exactly here; the fetch loop and the renderer never touch raw
//! JSON. Materials without a usable link are dropped, and a material that
//! fails to decode is skipped without affecting its siblings.

use tracing::warn;

use crate::api::{RawFolderDetail, RawMaterial};

use super::{Folder, Material, MaterialKind, Subfolder};

const UNNAMED_FOLDER: &str = "unnamed folder";
const UNNAMED_SUBFOLDER: &str = "unnamed subfolder";
const UNNAMED_FILE: &str = "unnamed file";

/// A normalized folder plus the non-fatal issues found while building it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedFolder {
    pub folder: Folder,
    pub warnings: Vec<String>,
}

/// Normalizes one raw folder detail into a [`Folder`].
///
/// Deterministic and side-effect free apart from warning logs: normalizing
/// the same raw value twice yields structurally equal folders.
#[must_use]
pub fn normalize_folder(raw: &RawFolderDetail) -> NormalizedFolder {
    let mut warnings = Vec::new();

    let id = raw.id.as_ref().map(ToString::to_string).unwrap_or_default();
    let name = raw.name.clone().unwrap_or_else(|| folder_placeholder(&id));

    let children = raw
        .children
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|child| {
            let child_name = child.name.clone().unwrap_or_else(|| UNNAMED_SUBFOLDER.to_string());
            let materials = child
                .materials
                .as_deref()
                .unwrap_or_default()
                .iter()
                .filter_map(|value| extract_material(value, &child_name, &mut warnings))
                .collect();
            Subfolder {
                name: child_name,
                materials,
            }
        })
        .collect();

    NormalizedFolder {
        folder: Folder { id, name, children },
        warnings,
    }
}

fn folder_placeholder(id: &str) -> String {
    if id.is_empty() {
        UNNAMED_FOLDER.to_string()
    } else {
        format!("folder {id}")
    }
}

/// Decodes one material value, returning `None` (with a warning) for
/// undecodable entries and entries without a non-empty link.
fn extract_material(
    value: &serde_json::Value,
    subfolder_name: &str,
    warnings: &mut Vec<String>,
) -> Option<Material> {
    let raw: RawMaterial = match serde_json::from_value(value.clone()) {
        Ok(raw) => raw,
        Err(error) => {
            warn!(subfolder = subfolder_name, %error, "skipping undecodable material");
            warnings.push(format!("skipped an unreadable material in '{subfolder_name}': {error}"));
            return None;
        }
    };

    let name = raw.name.unwrap_or_else(|| UNNAMED_FILE.to_string());
    let link = raw
        .materialable
        .and_then(|materialable| materialable.link)
        .unwrap_or_default();

    if link.is_empty() {
        warn!(subfolder = subfolder_name, material = %name, "dropping material without a link");
        warnings.push(format!("'{name}' in '{subfolder_name}' has no download link"));
        return None;
    }

    Some(Material {
        name,
        link,
        kind: MaterialKind::File,
    })
}
