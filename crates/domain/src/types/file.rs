//! File listing types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::utils::serde::{option_string_or_number, string_or_number};

/// A file stored in BambooHR, either company-wide or attached to an employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct File {
    #[serde(with = "string_or_number")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_file_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share_with_employee: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Provider grouping of files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileCategory {
    #[serde(
        default,
        deserialize_with = "option_string_or_number::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub files: Vec<File>,
}

/// Body of the `files/view` endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilesResponse {
    #[serde(default)]
    pub categories: Vec<FileCategory>,
}

impl FilesResponse {
    /// Flatten every category's files into one sequence, category order first.
    pub fn into_files(self) -> Vec<File> {
        self.categories.into_iter().flat_map(|category| category.files).collect()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn flattening_preserves_category_then_file_order() {
        let response: FilesResponse = serde_json::from_value(json!({
            "categories": [
                {"id": 1, "name": "Signed", "files": [{"id": "f1"}, {"id": "f2"}]},
                {"id": 2, "name": "Empty"},
                {"id": 3, "name": "Policies", "files": [{"id": 3}]}
            ]
        }))
        .unwrap();

        let ids: Vec<String> = response.into_files().into_iter().map(|f| f.id).collect();
        assert_eq!(ids, vec!["f1", "f2", "3"]);
    }

    #[test]
    fn missing_categories_yield_no_files() {
        let response: FilesResponse = serde_json::from_str("{}").unwrap();
        assert!(response.into_files().is_empty());
    }

    #[test]
    fn file_metadata_is_typed_and_rest_kept() {
        let file: File = serde_json::from_value(json!({
            "id": 17,
            "name": "Handbook",
            "originalFileName": "handbook.pdf",
            "size": 23456,
            "dateCreated": "2021-03-04 10:00:00",
            "createdBy": "Ada Lovelace",
            "shareWithEmployee": "yes",
            "canRenameFile": "no"
        }))
        .unwrap();

        assert_eq!(file.id, "17");
        assert_eq!(file.original_file_name.as_deref(), Some("handbook.pdf"));
        assert_eq!(file.extra["size"], 23456);
        assert_eq!(file.extra["canRenameFile"], "no");
    }
}
