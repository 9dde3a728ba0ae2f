pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{MemoryProfileStore, NullStatus, SimField};
pub use config::{EngineConfig, SessionConfig};
pub use core::engine::FillEngine;
pub use domain::model::{
    FieldDescriptor, FieldGroup, FieldSnapshot, GroupOutcome, GroupReport, GroupStats,
    InvalidField, PageReport, Profile, SelectOption, SelectSummary, Validity,
};
pub use domain::ports::{
    Availability, FieldControl, InferenceBackend, InferenceSession, ProfileStore, StatusSink,
};
pub use utils::error::{FillError, Result};
