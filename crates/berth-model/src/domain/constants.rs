//! Well-known string keys of the submission configuration surface.
//!
//! This module contains the label keys, configuration key prefixes and
//! environment variable names recognized across the pipeline. Keeping
//! them here avoids scattering magic strings throughout the codebase.

/// Label key carrying the generated application id.
///
/// Reserved: the orchestrator sets it itself and rejects any submission
/// whose custom labels try to supply it.
pub const LABEL_APP_ID: &str = "app-id";

/// Label key marking the role of a resource within the application.
///
/// Reserved for the same reason as [`LABEL_APP_ID`].
pub const LABEL_ROLE: &str = "role";

/// Role value attached to the driver pod and its service selector.
pub const ROLE_DRIVER: &str = "driver";

/// Configuration key prefix for user-supplied driver labels.
///
/// An entry `driver.label.team = infra` becomes the custom label
/// `team = infra` on the driver pod.
pub const CONF_LABEL_PREFIX: &str = "driver.label.";

/// Configuration key prefix mapping secret names to mount paths.
///
/// An entry `driver.secret.db-creds = /mnt/secrets/db` mounts the secret
/// `db-creds` at `/mnt/secrets/db` inside the driver container.
pub const CONF_SECRET_PREFIX: &str = "driver.secret.";

/// Configuration key holding the comma-separated jar dependency list.
pub const CONF_JARS: &str = "submit.jars";

/// Configuration key holding the comma-separated file dependency list.
pub const CONF_FILES: &str = "submit.files";

/// Wire sentinel meaning "no primary resource was supplied".
///
/// Only the parse boundary ([`crate::MainAppResource::from_locator`]) ever
/// sees this value; the model itself uses `Option`.
pub const RESOURCE_NONE: &str = "none";

/// Suffix appended to the resource prefix to form the driver service name.
pub const DRIVER_SVC_SUFFIX: &str = "-driver-svc";

/// Maximum length of a service name (DNS label limit).
pub const MAX_SERVICE_NAME_LEN: usize = 63;

/// Environment variable listing resolved jar dependencies, comma-separated.
pub const ENV_APP_JARS: &str = "APP_JARS";

/// Environment variable listing resolved file dependencies, comma-separated.
pub const ENV_APP_FILES: &str = "APP_FILES";

/// Environment variable holding the driver classpath derived from the jars.
pub const ENV_APP_CLASSPATH: &str = "APP_CLASSPATH";

/// Environment variable telling the driver the service name it is reachable under.
pub const ENV_DRIVER_SERVICE: &str = "DRIVER_SERVICE_NAME";

/// Prefix for per-secret environment variables pointing at the mount path.
pub const ENV_SECRET_PREFIX: &str = "SECRET_PATH_";
