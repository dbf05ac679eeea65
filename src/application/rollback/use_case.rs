//! Rollback Use Case
//!
//! Drives the pipeline state machine:
//! 1. Validate the deployment arguments (INIT → VALIDATED)
//! 2. Allocate the workspace and extract the backup (VALIDATED → EXTRACTED)
//! 3. Mirror the workspace to the remote host (EXTRACTED → SYNCED)
//! 4. Run the optional post command (SYNCED → COMPLETE)
//!
//! The first failing stage moves the run to FAILED and nothing after it
//! executes. Completed stages are never undone.

use std::sync::Arc;

use crate::application::validation::{validate, ValidatedInputs};
use crate::config::RawDeploymentConfig;
use crate::domain::entities::{BackupReference, DeploymentConfig, Workspace};
use crate::domain::ports::{
    ArchiveExtractor, DeploymentSummary, NoopEventSink, RemoteRunner, RemoteSynchronizer,
    RollbackEvent, RollbackEventSink, WorkspaceAllocator,
};
use crate::domain::value_objects::{resolve_port, PipelineState, PortSource, Stage};
use crate::error::StageError;

use super::options::RollbackOptions;
use super::result::RollbackReport;

/// Position of the driver, carrying what the next stage needs
enum Step {
    Init,
    Validated {
        config: DeploymentConfig,
        backup: BackupReference,
    },
    WorkspaceReady {
        config: DeploymentConfig,
        backup: BackupReference,
        workspace: Workspace,
    },
    Extracted {
        config: DeploymentConfig,
        workspace: Workspace,
    },
    Synced {
        config: DeploymentConfig,
        workspace: Workspace,
    },
    Complete {
        workspace: Workspace,
    },
}

impl Step {
    fn state(&self) -> PipelineState {
        match self {
            Step::Init => PipelineState::Init,
            // Allocation and extraction together move VALIDATED to EXTRACTED
            Step::Validated { .. } | Step::WorkspaceReady { .. } => PipelineState::Validated,
            Step::Extracted { .. } => PipelineState::Extracted,
            Step::Synced { .. } => PipelineState::Synced,
            Step::Complete { .. } => PipelineState::Complete,
        }
    }

    fn workspace(&self) -> Option<&Workspace> {
        match self {
            Step::Init | Step::Validated { .. } => None,
            Step::WorkspaceReady { workspace, .. }
            | Step::Extracted { workspace, .. }
            | Step::Synced { workspace, .. }
            | Step::Complete { workspace } => Some(workspace),
        }
    }
}

/// Rollback use case - orchestrates one deployment attempt
///
/// Parameterized by its collaborators (ports) so each stage can be
/// replaced by a fake in tests.
pub struct RollbackUseCase<W, E, S, R>
where
    W: WorkspaceAllocator,
    E: ArchiveExtractor,
    S: RemoteSynchronizer,
    R: RemoteRunner,
{
    workspaces: W,
    extractor: E,
    synchronizer: S,
    runner: R,
}

impl<W, E, S, R> RollbackUseCase<W, E, S, R>
where
    W: WorkspaceAllocator,
    E: ArchiveExtractor,
    S: RemoteSynchronizer,
    R: RemoteRunner,
{
    pub fn new(workspaces: W, extractor: E, synchronizer: S, runner: R) -> Self {
        Self {
            workspaces,
            extractor,
            synchronizer,
            runner,
        }
    }

    /// Execute the rollback silently
    pub fn execute(&self, raw: &RawDeploymentConfig, options: &RollbackOptions) -> RollbackReport {
        self.execute_with_events(raw, options, Arc::new(NoopEventSink))
    }

    /// Execute the rollback, reporting progress to `event_sink`
    pub fn execute_with_events(
        &self,
        raw: &RawDeploymentConfig,
        options: &RollbackOptions,
        event_sink: Arc<dyn RollbackEventSink>,
    ) -> RollbackReport {
        let sink = event_sink.as_ref();
        sink.on_event(RollbackEvent::Started {
            summary: summarize(raw, options),
        });

        let mut step = Step::Init;
        let mut ssh_port = None;

        loop {
            let from = step.state();
            let workspace = step.workspace().cloned();

            let next = match step {
                Step::Init => self.validate(raw, options, sink).map(|inputs| {
                    ssh_port = Some(inputs.config.ssh_port());
                    Step::Validated {
                        config: inputs.config,
                        backup: inputs.backup,
                    }
                }),
                Step::Validated { config, backup } => {
                    self.allocate_workspace(sink)
                        .map(|workspace| Step::WorkspaceReady {
                            config,
                            backup,
                            workspace,
                        })
                }
                Step::WorkspaceReady {
                    config,
                    backup,
                    workspace,
                } => self
                    .extract(&backup, &workspace, sink)
                    .map(|()| Step::Extracted { config, workspace }),
                Step::Extracted { config, workspace } => self
                    .mirror(&config, &workspace, sink)
                    .map(|()| Step::Synced { config, workspace }),
                Step::Synced { config, workspace } => self
                    .run_post_command(&config, sink)
                    .map(|()| Step::Complete { workspace }),
                Step::Complete { workspace } => {
                    sink.on_event(RollbackEvent::Completed {
                        workspace: workspace.directory().to_path_buf(),
                    });
                    return RollbackReport::complete(workspace, ssh_port);
                }
            };

            match next {
                Ok(next) => {
                    let to = next.state();
                    if to != from && sink.wants_detailed_events() {
                        sink.on_event(RollbackEvent::StateChanged { from, to });
                    }
                    step = next;
                }
                Err(error) => {
                    if sink.wants_detailed_events() {
                        sink.on_event(RollbackEvent::StateChanged {
                            from,
                            to: PipelineState::Failed,
                        });
                    }
                    sink.on_event(RollbackEvent::Failed {
                        stage: error.stage(),
                        message: error.to_string(),
                    });
                    return RollbackReport::failed(from, error, workspace, ssh_port);
                }
            }
        }
    }

    fn validate(
        &self,
        raw: &RawDeploymentConfig,
        options: &RollbackOptions,
        sink: &dyn RollbackEventSink,
    ) -> Result<ValidatedInputs, StageError> {
        let result = validate(raw, &options.backup_file);

        if let Err(violations) = &result {
            for violation in violations {
                sink.on_event(RollbackEvent::ViolationFound {
                    violation: violation.clone(),
                });
            }
        }

        let (port, source) = resolve_port(raw.ssh_port.as_ref());
        sink.on_event(RollbackEvent::PortResolved {
            port,
            defaulted: source == PortSource::Defaulted,
        });

        result.map_err(StageError::Validation)
    }

    fn allocate_workspace(&self, sink: &dyn RollbackEventSink) -> Result<Workspace, StageError> {
        let workspace = self
            .workspaces
            .allocate()
            .map_err(|e| StageError::Workspace {
                message: e.source.to_string(),
                path: e.path,
            })?;

        sink.on_event(RollbackEvent::WorkspaceReady {
            path: workspace.directory().to_path_buf(),
        });
        Ok(workspace)
    }

    fn extract(
        &self,
        backup: &BackupReference,
        workspace: &Workspace,
        sink: &dyn RollbackEventSink,
    ) -> Result<(), StageError> {
        sink.on_event(RollbackEvent::StageStarted {
            stage: Stage::Extraction,
            detail: format!(
                "{} {} -> {}",
                self.extractor.name(),
                backup.path().display(),
                workspace.directory().display()
            ),
        });

        let output = self
            .extractor
            .extract(backup, workspace)
            .map_err(|e| StageError::Extraction {
                archive: backup.path().to_path_buf(),
                output: e.diagnostic(),
            })?;

        sink.on_event(RollbackEvent::StageSucceeded {
            stage: Stage::Extraction,
            output,
        });
        Ok(())
    }

    fn mirror(
        &self,
        config: &DeploymentConfig,
        workspace: &Workspace,
        sink: &dyn RollbackEventSink,
    ) -> Result<(), StageError> {
        sink.on_event(RollbackEvent::StageStarted {
            stage: Stage::Sync,
            detail: format!(
                "{} {} -> {}",
                self.synchronizer.name(),
                workspace.directory().display(),
                config.destination()
            ),
        });

        let output = self
            .synchronizer
            .mirror(workspace, config)
            .map_err(|e| StageError::Sync {
                destination: config.destination(),
                output: e.diagnostic(),
            })?;

        sink.on_event(RollbackEvent::StageSucceeded {
            stage: Stage::Sync,
            output,
        });
        Ok(())
    }

    fn run_post_command(
        &self,
        config: &DeploymentConfig,
        sink: &dyn RollbackEventSink,
    ) -> Result<(), StageError> {
        let Some(command) = config.post_command() else {
            sink.on_event(RollbackEvent::PostCommandSkipped);
            return Ok(());
        };

        sink.on_event(RollbackEvent::StageStarted {
            stage: Stage::PostCommand,
            detail: format!("{} '{}'", config.login(), command),
        });

        let output = self
            .runner
            .run(config, command)
            .map_err(|e| StageError::PostCommand {
                command: command.to_string(),
                output: e.diagnostic(),
            })?;

        sink.on_event(RollbackEvent::StageSucceeded {
            stage: Stage::PostCommand,
            output,
        });
        Ok(())
    }
}

fn summarize(raw: &RawDeploymentConfig, options: &RollbackOptions) -> DeploymentSummary {
    DeploymentSummary {
        host: RawDeploymentConfig::display_value(raw.host.as_ref()),
        path: RawDeploymentConfig::display_value(raw.path.as_ref()),
        username: RawDeploymentConfig::display_value(raw.username.as_ref()),
        ssh_key: RawDeploymentConfig::display_value(raw.ssh_key.as_ref()),
        ssh_port: RawDeploymentConfig::display_value(raw.ssh_port.as_ref()),
        backup_file: options.backup_file.clone(),
        post_command: raw
            .post_command
            .as_ref()
            .and_then(|v| v.as_str())
            .filter(|s| !s.trim().is_empty())
            .map(str::to_string),
    }
}
