use serde::{Deserialize, Serialize};

use arc_model::DEFAULT_WORK_DIR;

/// Values applied to runner settings the user left unset.
///
/// Missing fields in a config document take the built-in defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RunnerDefaults {
    /// Replace runners after each job.
    pub ephemeral: bool,
    /// Offer Docker to jobs.
    pub docker_enabled: bool,
    /// Run dockerd inside the runner container rather than in a sidecar.
    pub dockerd_within_runner_container: bool,
    /// Runner working directory.
    pub work_dir: String,
}

impl Default for RunnerDefaults {
    fn default() -> Self {
        Self {
            ephemeral: true,
            docker_enabled: true,
            dockerd_within_runner_container: false,
            work_dir: DEFAULT_WORK_DIR.to_string(),
        }
    }
}
