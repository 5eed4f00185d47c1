mod config;
pub use config::{GitHubApiCredentialsFrom, RunnerConfig, SecretReference, StorageMedium};

mod pod;
pub use pod::RunnerPodSpec;

mod runner;
pub use runner::{Runner, RunnerSpec};

mod validate;
