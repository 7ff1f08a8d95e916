//! In-memory course model: folders, subfolders, and file materials.
//!
//! The tree is the session's browsable state. It is built once per fetch by
//! the normalizer and replaced wholesale on the next successful fetch; order
//! everywhere follows the API response order, which reflects how the course
//! presents its content.

mod normalize;

pub use normalize::{NormalizedFolder, normalize_folder};

/// The kind of a material entry. Only file materials survive normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialKind {
    File,
}

impl std::fmt::Display for MaterialKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File => f.write_str("File"),
        }
    }
}

/// A downloadable file inside a subfolder. The link is always non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Material {
    pub name: String,
    pub link: String,
    pub kind: MaterialKind,
}

/// A nested subfolder holding the actual file materials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subfolder {
    pub name: String,
    pub materials: Vec<Material>,
}

/// One top-level course folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folder {
    pub id: String,
    pub name: String,
    pub children: Vec<Subfolder>,
}

/// The root of one fetch session's browsable state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseTree {
    pub folders: Vec<Folder>,
}

impl CourseTree {
    /// Returns true when the tree holds no folders at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }

    /// Counts materials across all folders and subfolders.
    #[must_use]
    pub fn material_count(&self) -> usize {
        self.folders
            .iter()
            .flat_map(|folder| &folder.children)
            .map(|child| child.materials.len())
            .sum()
    }

    /// Iterates every material with its enclosing folder and subfolder.
    pub fn iter_materials(&self) -> impl Iterator<Item = (&Folder, &Subfolder, &Material)> {
        self.folders.iter().flat_map(|folder| {
            folder.children.iter().flat_map(move |child| {
                child
                    .materials
                    .iter()
                    .map(move |material| (folder, child, material))
            })
        })
    }

    /// Returns a copy of the tree keeping only materials whose name contains
    /// `term`, case-insensitively.
    ///
    /// Subfolders and folders left without materials are pruned. An empty or
    /// whitespace-only term returns the tree unchanged.
    #[must_use]
    pub fn filter_materials(&self, term: &str) -> Self {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return self.clone();
        }

        let folders = self
            .folders
            .iter()
            .filter_map(|folder| {
                let children: Vec<Subfolder> = folder
                    .children
                    .iter()
                    .filter_map(|child| {
                        let materials: Vec<Material> = child
                            .materials
                            .iter()
                            .filter(|material| material.name.to_lowercase().contains(&term))
                            .cloned()
                            .collect();
                        (!materials.is_empty()).then(|| Subfolder {
                            name: child.name.clone(),
                            materials,
                        })
                    })
                    .collect();
                (!children.is_empty()).then(|| Folder {
                    id: folder.id.clone(),
                    name: folder.name.clone(),
                    children,
                })
            })
            .collect();

        Self { folders }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn material(name: &str) -> Material {
        Material {
            name: name.to_string(),
            link: format!("https://cdn.example/{name}"),
            kind: MaterialKind::File,
        }
    }

    fn sample_tree() -> CourseTree {
        CourseTree {
            folders: vec![
                Folder {
                    id: "1".to_string(),
                    name: "Week 1".to_string(),
                    children: vec![Subfolder {
                        name: "Lectures".to_string(),
                        materials: vec![material("Intro.pdf"), material("notes.docx")],
                    }],
                },
                Folder {
                    id: "2".to_string(),
                    name: "Week 2".to_string(),
                    children: vec![Subfolder {
                        name: "Homework".to_string(),
                        materials: vec![material("assignment.PDF")],
                    }],
                },
            ],
        }
    }

    #[test]
    fn test_material_count_spans_folders() {
        assert_eq!(sample_tree().material_count(), 3);
    }

    #[test]
    fn test_iter_materials_preserves_order() {
        let tree = sample_tree();
        let names: Vec<&str> = tree
            .iter_materials()
            .map(|(_, _, material)| material.name.as_str())
            .collect();
        assert_eq!(names, ["Intro.pdf", "notes.docx", "assignment.PDF"]);
    }

    #[test]
    fn test_filter_materials_case_insensitive() {
        let filtered = sample_tree().filter_materials("pdf");
        assert_eq!(filtered.material_count(), 2);
        let names: Vec<&str> = filtered
            .iter_materials()
            .map(|(_, _, material)| material.name.as_str())
            .collect();
        assert_eq!(names, ["Intro.pdf", "assignment.PDF"]);
    }

    #[test]
    fn test_filter_materials_prunes_empty_folders() {
        let filtered = sample_tree().filter_materials("assignment");
        assert_eq!(filtered.folders.len(), 1);
        assert_eq!(filtered.folders[0].name, "Week 2");
    }

    #[test]
    fn test_filter_materials_empty_term_is_identity() {
        let tree = sample_tree();
        assert_eq!(tree.filter_materials(""), tree);
        assert_eq!(tree.filter_materials("   "), tree);
    }

    #[test]
    fn test_filter_materials_no_match_yields_empty_tree() {
        let filtered = sample_tree().filter_materials("zzz");
        assert!(filtered.is_empty());
        assert_eq!(filtered.material_count(), 0);
    }

    #[test]
    fn test_material_kind_display() {
        assert_eq!(MaterialKind::File.to_string(), "File");
    }
}
