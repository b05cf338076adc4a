#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Shared HTTP DTOs for the Geotrace video analysis API.
//!
//! The front-end uploads a drive video with its starting position, receives a
//! task identifier, then polls the task status until it reaches a terminal
//! state.
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Path prefix under which uploaded videos are served back.
pub const STATIC_VIDEO_PREFIX: &str = "/static/";
/// Error text reported when the analyzer exits without writing a result.
pub const NO_RESULT_ERROR: &str = "Analysis failed to produce results.";

/// Response to a video upload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UploadResponse {
    /// Identifier to poll the analysis task with.
    pub task_id: Uuid,
}

impl UploadResponse {
    /// Response for a freshly created task.
    #[must_use]
    pub fn new_task() -> Self {
        Self {
            task_id: Uuid::new_v4(),
        }
    }

    /// Name the uploaded video is stored under: the task id plus the original
    /// extension, when there is one.
    #[must_use]
    pub fn stored_file_name(&self, original_name: &str) -> String {
        match original_name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => {
                format!("{}.{ext}", self.task_id)
            }
            _ => self.task_id.to_string(),
        }
    }
}

/// Lifecycle of an analysis task as returned by the status endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TaskStatus {
    /// Analysis is running.
    Processing {
        /// Rough completion percentage.
        #[serde(default)]
        progress: u8,
    },
    /// Analysis finished with a result document.
    Completed {
        /// Analyzer output, passed through untouched.
        result: Value,
        /// Where the uploaded video can be streamed from.
        video_url: String,
    },
    /// Analysis failed.
    Failed {
        /// Short failure description.
        error: String,
        /// Analyzer stderr when available.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },
    /// No task is known under the requested identifier.
    NotFound,
}

impl TaskStatus {
    /// Status of a task that has just been accepted.
    #[must_use]
    pub const fn started() -> Self {
        Self::Processing { progress: 0 }
    }

    /// Completed status pointing at the stored video file.
    #[must_use]
    pub fn completed(result: Value, stored_file_name: &str) -> Self {
        Self::Completed {
            result,
            video_url: format!("{STATIC_VIDEO_PREFIX}{stored_file_name}"),
        }
    }

    /// Failure where the analyzer ran but wrote no result.
    #[must_use]
    pub fn missing_result(stderr: impl Into<String>) -> Self {
        Self::Failed {
            error: NO_RESULT_ERROR.to_string(),
            details: Some(stderr.into()),
        }
    }

    /// Status for a lookup; unknown identifiers become [`Self::NotFound`].
    #[must_use]
    pub fn or_not_found(found: Option<&Self>) -> Self {
        found.cloned().unwrap_or(Self::NotFound)
    }

    /// Whether polling can stop.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Self::Processing { .. })
    }

    /// Wire label of the variant.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Processing { .. } => "processing",
            Self::Completed { .. } => "completed",
            Self::Failed { .. } => "failed",
            Self::NotFound => "not_found",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    #[test]
    fn status_serializes_with_status_tag() -> Result<(), serde_json::Error> {
        assert_eq!(
            serde_json::to_value(TaskStatus::started())?,
            json!({ "status": "processing", "progress": 0 })
        );
        assert_eq!(
            serde_json::to_value(TaskStatus::NotFound)?,
            json!({ "status": "not_found" })
        );
        assert_eq!(
            serde_json::to_value(TaskStatus::completed(json!({"spots": 3}), "abc.mp4"))?,
            json!({
                "status": "completed",
                "result": { "spots": 3 },
                "video_url": "/static/abc.mp4"
            })
        );
        Ok(())
    }

    #[test]
    fn failure_without_details_omits_the_field() -> Result<(), serde_json::Error> {
        let failed = TaskStatus::Failed {
            error: "boom".to_string(),
            details: None,
        };
        assert_eq!(
            serde_json::to_value(&failed)?,
            json!({ "status": "failed", "error": "boom" })
        );
        let with_stderr = TaskStatus::missing_result("ffmpeg exited with status 1");
        assert_eq!(
            serde_json::to_value(&with_stderr)?,
            json!({
                "status": "failed",
                "error": NO_RESULT_ERROR,
                "details": "ffmpeg exited with status 1"
            })
        );
        Ok(())
    }

    #[test]
    fn processing_payload_without_progress_parses() -> Result<(), serde_json::Error> {
        let parsed: TaskStatus = serde_json::from_value(json!({ "status": "processing" }))?;
        assert_eq!(parsed, TaskStatus::Processing { progress: 0 });
        assert!(!parsed.is_terminal());
        Ok(())
    }

    #[test]
    fn unknown_task_maps_to_not_found() {
        let mut tasks = HashMap::new();
        let known = UploadResponse::new_task();
        tasks.insert(known.task_id, TaskStatus::started());

        let missing = TaskStatus::or_not_found(tasks.get(&Uuid::nil()));
        assert_eq!(missing, TaskStatus::NotFound);
        assert_eq!(missing.label(), "not_found");
        assert!(missing.is_terminal());

        let found = TaskStatus::or_not_found(tasks.get(&known.task_id));
        assert_eq!(found.label(), "processing");
    }

    #[test]
    fn stored_file_name_keeps_extension() {
        let upload = UploadResponse {
            task_id: Uuid::nil(),
        };
        assert_eq!(
            upload.stored_file_name("drive.final.mov"),
            "00000000-0000-0000-0000-000000000000.mov"
        );
        assert_eq!(
            upload.stored_file_name("noext"),
            "00000000-0000-0000-0000-000000000000"
        );
        assert_eq!(
            upload.stored_file_name(".hidden"),
            "00000000-0000-0000-0000-000000000000"
        );
    }
}
