//! Well-known names shared by the runner resource and its derived objects.

/// API group of the runner resources.
pub const API_GROUP: &str = "actions.summerwind.dev";

/// API version of the runner resources.
pub const API_VERSION: &str = "v1alpha1";

/// Name of the volume derived from a work volume claim template.
///
/// The pod provisioning side mounts this volume into the runner container,
/// so the name must stay stable across releases.
pub const WORK_VOLUME_NAME: &str = "work";

/// Working directory of the runner when `workDir` is not set.
pub const DEFAULT_WORK_DIR: &str = "/runner/_work";
