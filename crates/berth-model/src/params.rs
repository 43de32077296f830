use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{ConfigTable, ModelError, ModelResult, RESOURCE_NONE};

/// Primary resource the application is launched from.
///
/// Absence of a primary resource is represented by `Option`, never by a
/// sentinel string; [`MainAppResource::from_locator`] handles the wire
/// sentinel at the parse boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum MainAppResource {
    /// An executable jar identified by its locator string.
    Jar { locator: String },
}

impl MainAppResource {
    /// Parse a wire locator, mapping the "no resource" sentinel to `None`.
    pub fn from_locator(locator: &str) -> Option<Self> {
        if locator == RESOURCE_NONE {
            None
        } else {
            Some(MainAppResource::Jar {
                locator: locator.to_string(),
            })
        }
    }
}

/// Ordered jar and file dependency lists captured for the resolution step.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyManifest {
    /// Executable jar-like dependencies.
    pub jars: Vec<String>,
    /// Auxiliary file dependencies.
    pub files: Vec<String>,
}

impl DependencyManifest {
    /// Returns `true` if neither jars nor files are declared.
    pub fn is_empty(&self) -> bool {
        self.jars.is_empty() && self.files.is_empty()
    }

    /// Iterate over every locator in both lists, jars first.
    pub fn locators(&self) -> impl Iterator<Item = &str> {
        self.jars
            .iter()
            .chain(self.files.iter())
            .map(String::as_str)
    }
}

/// Immutable description of one submission, constructed once per run.
///
/// Carries the application identity plus the full string-keyed configuration
/// environment the orchestrator reads its key-prefix conventions from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionParams {
    /// Generated unique application id, also used as the `app-id` label value.
    pub app_id: String,
    /// Human-readable application name.
    pub app_name: String,
    /// Entry-point class of the application.
    pub main_class: String,
    /// Arguments passed to the entry point.
    pub app_args: Vec<String>,
    /// Optional primary resource the application is launched from.
    pub main_resource: Option<MainAppResource>,
    /// Full submission configuration environment.
    pub conf: ConfigTable,
}

impl SubmissionParams {
    /// Create submission parameters with a freshly generated application id.
    pub fn new<N, C>(
        app_name: N,
        main_class: C,
        app_args: Vec<String>,
        main_resource: Option<MainAppResource>,
        conf: ConfigTable,
    ) -> Self
    where
        N: Into<String>,
        C: Into<String>,
    {
        Self {
            app_id: format!("app-{}", Uuid::new_v4().simple()),
            app_name: app_name.into(),
            main_class: main_class.into(),
            app_args,
            main_resource,
            conf,
        }
    }

    /// Check the parts of the submission no later stage can repair.
    ///
    /// The app name must derive a non-empty resource prefix, otherwise no
    /// cluster resource could be named after it.
    pub fn validate(&self) -> ModelResult<()> {
        if self.resource_prefix().is_empty() {
            return Err(ModelError::Invalid(format!(
                "app name {:?} contains no usable characters for a resource prefix",
                self.app_name,
            )));
        }
        if self.main_class.trim().is_empty() {
            return Err(ModelError::Invalid("main class must not be empty".into()));
        }
        Ok(())
    }

    /// DNS-label-safe prefix for cluster resources named after this app.
    ///
    /// Lowercases the app name, collapses runs of non-alphanumeric
    /// characters to single dashes and trims leading/trailing dashes.
    pub fn resource_prefix(&self) -> String {
        let mut out = String::with_capacity(self.app_name.len());
        let mut dash_pending = false;
        for c in self.app_name.chars() {
            if c.is_ascii_alphanumeric() {
                if dash_pending && !out.is_empty() {
                    out.push('-');
                }
                dash_pending = false;
                out.push(c.to_ascii_lowercase());
            } else {
                dash_pending = true;
            }
        }
        out
    }
}
