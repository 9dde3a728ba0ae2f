// Ports to the host environment: inference backend, profile storage,
// live form controls, user-facing status. The pipeline never touches a
// DOM or a model API directly.

use crate::config::SessionConfig;
use crate::domain::model::{FieldSnapshot, Profile, Validity};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Readiness of the on-device model, as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Unavailable,
    Downloadable,
    Downloading,
    Available,
}

/// One model conversation. Fallible and of unspecified latency; no
/// timeout is imposed here. Dropping the session releases it, so a
/// session held in a scope is cleaned up on every exit path.
#[async_trait]
pub trait InferenceSession: Send {
    async fn prompt(&mut self, text: &str) -> Result<String>;
}

#[async_trait]
pub trait InferenceBackend: Send + Sync {
    async fn availability(&self) -> Availability;

    async fn create_session(&self, config: &SessionConfig) -> Result<Box<dyn InferenceSession>>;
}

#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn load(&self) -> Result<Option<Profile>>;

    async fn store(&self, profile: &Profile) -> Result<()>;
}

/// A live form control. `check_validity` is the host's native constraint
/// validation, treated as a black box.
pub trait FieldControl: Send {
    fn snapshot(&self) -> FieldSnapshot;

    fn value(&self) -> String;

    fn set_value(&mut self, value: &str);

    fn check_validity(&self) -> Validity;
}

/// User-facing feedback surface: a busy indicator and a blocking notice.
pub trait StatusSink: Send + Sync {
    fn show_busy(&self);

    fn hide_busy(&self);

    fn notify(&self, message: &str);
}
