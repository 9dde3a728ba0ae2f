use crate::adapters::NullStatus;
use crate::config::EngineConfig;
use crate::core::{apply, describe, group, parse, prompt, validate};
use crate::domain::model::{
    FieldSnapshot, GroupOutcome, GroupReport, GroupStats, PageReport, Profile,
};
use crate::domain::ports::{
    Availability, FieldControl, InferenceBackend, ProfileStore, StatusSink,
};
use crate::utils::error::{FillError, Result};

/// Sequences one fill operation: describe -> prompt -> infer -> parse ->
/// apply -> validate, with a single corrective re-prompt for fields that
/// failed native validation. Groups are processed strictly sequentially;
/// the inference backend is a shared single-session resource and no two
/// groups ever share a session.
pub struct FillEngine<B, P> {
    backend: B,
    profiles: P,
    status: Box<dyn StatusSink>,
    config: EngineConfig,
}

impl<B: InferenceBackend, P: ProfileStore> FillEngine<B, P> {
    pub fn new(backend: B, profiles: P) -> Self {
        Self {
            backend,
            profiles,
            status: Box::new(NullStatus),
            config: EngineConfig::default(),
        }
    }

    pub fn with_status(mut self, status: Box<dyn StatusSink>) -> Self {
        self.status = status;
        self
    }

    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Fill every group on the page. Preconditions (stored profile,
    /// model availability) are checked before any field is touched; after
    /// that, one group's failure is reported and never blocks siblings.
    pub async fn fill_page(&self, controls: &mut [Box<dyn FieldControl>]) -> Result<PageReport> {
        let profile = match self.profiles.load().await? {
            Some(profile) => profile,
            None => {
                self.status.notify("Please set up your profile first.");
                return Err(FillError::MissingProfile);
            }
        };

        if self.backend.availability().await == Availability::Unavailable {
            self.status
                .notify("On-device AI is unavailable in this browser.");
            return Err(FillError::BackendUnavailable);
        }

        self.status.show_busy();
        let report = self.fill_groups(controls, &profile).await;
        self.status.hide_busy();

        tracing::info!(
            "Page fill finished: {} groups filled, {} failed",
            report.filled_groups(),
            report.failed_groups()
        );
        Ok(report)
    }

    /// Fill one pre-grouped set of fields with a given profile.
    pub async fn fill_group(
        &self,
        controls: &mut [Box<dyn FieldControl>],
        profile: &Profile,
    ) -> Result<GroupStats> {
        let indices: Vec<usize> = (0..controls.len()).collect();
        self.fill_selection(controls, &indices, profile).await
    }

    async fn fill_groups(
        &self,
        controls: &mut [Box<dyn FieldControl>],
        profile: &Profile,
    ) -> PageReport {
        let snapshots: Vec<FieldSnapshot> = controls.iter().map(|c| c.snapshot()).collect();
        let groups = group::group_snapshots(&snapshots);
        tracing::debug!(
            "Partitioned {} fields into {} groups",
            snapshots.len(),
            groups.len()
        );

        let mut reports = Vec::with_capacity(groups.len());
        for field_group in groups {
            let outcome = match self
                .fill_selection(controls, &field_group.indices, profile)
                .await
            {
                Ok(stats) => GroupOutcome::Filled(stats),
                Err(error) => {
                    tracing::error!("Group \"{}\" failed: {}", field_group.key, error);
                    self.status
                        .notify(&format!("Form filling error: {}", error));
                    GroupOutcome::Failed {
                        error: error.to_string(),
                    }
                }
            };
            reports.push(GroupReport {
                key: field_group.key,
                fields: field_group.indices.len(),
                outcome,
            });
        }

        PageReport { groups: reports }
    }

    async fn fill_selection(
        &self,
        controls: &mut [Box<dyn FieldControl>],
        indices: &[usize],
        profile: &Profile,
    ) -> Result<GroupStats> {
        let snapshots: Vec<FieldSnapshot> =
            indices.iter().map(|&i| controls[i].snapshot()).collect();
        let descriptors = describe::describe_fields(&snapshots, &self.config);
        let names = describe::field_names(&descriptors);

        let fill_prompt = prompt::build_fill_prompt(profile, &descriptors, &names)?;
        tracing::debug!("Fill prompt:\n{}", fill_prompt);
        let raw = {
            // Session lives for this block only; dropped on every exit path.
            let mut session = self.backend.create_session(&self.config.fill).await?;
            session.prompt(&fill_prompt).await?
        };
        tracing::debug!("Fill result: {}", raw);

        // Count mismatch surfaces here, before anything is written.
        let values = parse::parse_fill_response(&raw, &names)?;
        apply::apply_values(controls, indices, &snapshots, &values);

        let invalid = validate::collect_invalid(controls, indices, &snapshots, &values, &names);
        let mut corrected = 0;
        if !invalid.is_empty() {
            tracing::info!(
                "{} fields failed native validation, running fix pass",
                invalid.len()
            );
            let fix_prompt =
                prompt::build_fix_prompt(&invalid, &snapshots, &names, profile, &self.config)?;
            tracing::debug!("Fix prompt:\n{}", fix_prompt);
            let raw = {
                let mut session = self.backend.create_session(&self.config.fix).await?;
                session.prompt(&fix_prompt).await?
            };
            tracing::debug!("Fix result: {}", raw);

            let fixes = parse::parse_fix_response(&raw)?;
            corrected = apply::apply_fixes(controls, indices, &snapshots, &invalid, &names, &fixes);
        }

        Ok(GroupStats {
            fields: indices.len(),
            invalid: invalid.len(),
            corrected,
        })
    }
}
