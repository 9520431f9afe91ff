use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A department a Greenhouse posting is filed under.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Department {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Everything else the board returned (`id`, `parent_id`, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single posting from a Greenhouse job board.
///
/// Only `title` and `departments` are interpreted; every other field is kept
/// in `extra` so callers get the posting back as the board sent it.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Job {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub departments: Vec<Department>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Job {
    /// Convenience constructor, mostly for tests and fixtures.
    pub fn new(title: impl Into<String>, departments: &[&str]) -> Self {
        Job {
            title: title.into(),
            departments: departments
                .iter()
                .map(|name| Department {
                    name: name.to_string(),
                    extra: Map::new(),
                })
                .collect(),
            extra: Map::new(),
        }
    }

    /// Name of the first listed department, or `""` when there is none.
    ///
    /// Greenhouse lists the primary department first; secondary entries are
    /// never consulted by the filters.
    pub fn primary_department(&self) -> &str {
        self.departments
            .first()
            .map(|d| d.name.as_str())
            .unwrap_or("")
    }

    /// Case-insensitive substring match against the title.
    pub fn title_contains(&self, keyword: &str) -> bool {
        contains_ignore_case(&self.title, keyword)
    }

    /// Case-insensitive substring match against the primary department only.
    pub fn department_contains(&self, department: &str) -> bool {
        contains_ignore_case(self.primary_department(), department)
    }

    /// Looks up a field the model does not name, e.g. `absolute_url`.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}

/// Body of `GET /v1/boards/{company}/jobs`.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct BoardResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub jobs: Vec<Job>,
    #[serde(default)]
    pub meta: Option<BoardMeta>,
}

/// Paging metadata Greenhouse attaches to a board listing.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct BoardMeta {
    #[serde(default)]
    pub total: Option<u64>,
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

// Greenhouse sends `null` for titles and department names now and then.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_job_keeps_unknown_fields() {
        let job: Job = serde_json::from_value(json!({
            "id": 4012345,
            "title": "Backend Engineer",
            "absolute_url": "https://boards.greenhouse.io/acme/jobs/4012345",
            "departments": [{"id": 7, "name": "Engineering"}]
        }))
        .unwrap();

        assert_eq!(job.title, "Backend Engineer");
        assert_eq!(job.primary_department(), "Engineering");
        assert_eq!(job.field("id"), Some(&json!(4012345)));
        assert_eq!(job.departments[0].extra.get("id"), Some(&json!(7)));
    }

    #[test]
    fn test_job_missing_fields_default_to_empty() {
        let job: Job = serde_json::from_value(json!({"id": 1})).unwrap();
        assert_eq!(job.title, "");
        assert!(job.departments.is_empty());
        assert_eq!(job.primary_department(), "");
    }

    #[test]
    fn test_job_null_fields_default_to_empty() {
        let job: Job = serde_json::from_value(json!({
            "title": null,
            "departments": [{"name": null}]
        }))
        .unwrap();
        assert_eq!(job.title, "");
        assert_eq!(job.primary_department(), "");
    }

    #[test]
    fn test_department_contains_checks_first_entry_only() {
        let job = Job::new("Backend Manager", &["Sales", "Engineering"]);
        assert!(job.department_contains("sales"));
        assert!(!job.department_contains("engineering"));
    }

    #[test]
    fn test_title_contains_ignores_case() {
        let job = Job::new("Senior RUST Developer", &[]);
        assert!(job.title_contains("rust"));
        assert!(job.title_contains("Senior rust"));
        assert!(!job.title_contains("python"));
    }

    #[test]
    fn test_board_response_without_jobs_key() {
        let board: BoardResponse = serde_json::from_str(r#"{"meta": {"total": 0}}"#).unwrap();
        assert!(board.jobs.is_empty());
        assert_eq!(board.meta.and_then(|m| m.total), Some(0));
    }
}
