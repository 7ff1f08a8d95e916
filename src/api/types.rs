//! Wire types for the course-content API.
//!
//! Every field the two endpoints may omit is an `Option` with its default
//! decided in one place (the normalizer), rather than scattered fallback
//! literals at each access site. Materials are kept as raw JSON values so a
//! single malformed material can be skipped without losing its siblings.

use std::fmt;

use serde::Deserialize;

/// Top-level response of `GET {base_url}/{course_id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct CourseResponse {
    pub data: Option<CourseData>,
}

/// The `data` object of the course response.
#[derive(Debug, Clone, Deserialize)]
pub struct CourseData {
    pub folders: Option<Vec<FolderSummary>>,
}

/// One folder summary from the course response. Only the id is required.
#[derive(Debug, Clone, Deserialize)]
pub struct FolderSummary {
    pub id: FolderId,
    pub name: Option<String>,
}

/// A folder id as the API sends it: numeric in current payloads, but string
/// ids have been observed on other endpoints of the same backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum FolderId {
    Number(u64),
    Text(String),
}

impl fmt::Display for FolderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

/// Top-level response of `GET {base_url}/folders/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct FolderDetailResponse {
    pub data: Option<RawFolderDetail>,
}

/// The `data` object of a folder-detail response, before normalization.
#[derive(Debug, Clone, Deserialize)]
pub struct RawFolderDetail {
    pub id: Option<FolderId>,
    pub name: Option<String>,
    pub children: Option<Vec<RawSubfolder>>,
}

/// One nested subfolder of a folder detail.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSubfolder {
    pub name: Option<String>,
    /// Kept raw so each material decodes independently.
    pub materials: Option<Vec<serde_json::Value>>,
}

/// One material entry, decoded individually from [`RawSubfolder::materials`].
#[derive(Debug, Clone, Deserialize)]
pub struct RawMaterial {
    pub name: Option<String>,
    pub materialable: Option<RawMaterialable>,
}

/// The `materialable` object carrying the download link.
#[derive(Debug, Clone, Deserialize)]
pub struct RawMaterialable {
    pub link: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_course_response_deserialize_full() {
        let json = serde_json::json!({
            "data": {
                "folders": [
                    {"id": 41, "name": "Week 1"},
                    {"id": "42-archived"}
                ]
            }
        });

        let resp: CourseResponse = serde_json::from_value(json).unwrap();
        let folders = resp.data.unwrap().folders.unwrap();
        assert_eq!(folders.len(), 2);
        assert_eq!(folders[0].id, FolderId::Number(41));
        assert_eq!(folders[0].name.as_deref(), Some("Week 1"));
        assert_eq!(folders[1].id, FolderId::Text("42-archived".to_string()));
        assert!(folders[1].name.is_none());
    }

    #[test]
    fn test_course_response_deserialize_missing_data() {
        let resp: CourseResponse = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(resp.data.is_none());
    }

    #[test]
    fn test_course_response_deserialize_missing_folders() {
        let resp: CourseResponse =
            serde_json::from_value(serde_json::json!({"data": {}})).unwrap();
        assert!(resp.data.unwrap().folders.is_none());
    }

    #[test]
    fn test_folder_summary_without_id_fails() {
        let result: Result<FolderSummary, _> =
            serde_json::from_value(serde_json::json!({"name": "orphan"}));
        assert!(result.is_err(), "a summary without an id must not decode");
    }

    #[test]
    fn test_folder_id_display() {
        assert_eq!(FolderId::Number(41).to_string(), "41");
        assert_eq!(FolderId::Text("abc".to_string()).to_string(), "abc");
    }

    #[test]
    fn test_folder_detail_deserialize_minimal() {
        let resp: FolderDetailResponse =
            serde_json::from_value(serde_json::json!({"data": {}})).unwrap();
        let detail = resp.data.unwrap();
        assert!(detail.id.is_none());
        assert!(detail.name.is_none());
        assert!(detail.children.is_none());
    }

    #[test]
    fn test_raw_material_deserialize_missing_link() {
        let material: RawMaterial =
            serde_json::from_value(serde_json::json!({"name": "notes.pdf"})).unwrap();
        assert_eq!(material.name.as_deref(), Some("notes.pdf"));
        assert!(material.materialable.is_none());
    }
}
