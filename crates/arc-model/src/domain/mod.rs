mod access_mode;
pub use access_mode::AccessMode;

mod container_mode;
pub use container_mode::ContainerMode;

mod scope;
pub use scope::Scope;

mod toggle;
pub use toggle::Toggle;

mod token;
pub use token::RegistrationToken;

mod constants;
pub use constants::{API_GROUP, API_VERSION, DEFAULT_WORK_DIR, WORK_VOLUME_NAME};
