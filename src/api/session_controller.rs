use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::core::{Block, DayType, Schedule, ScheduleVariant, default_schedule, validate};
use crate::error::{ScheduleError, ScheduleResult};
use crate::extensions::EditorEvent;
use crate::render::Renderer;

use super::gateway::{EntityRef, HubRef, ScheduleGateway};
use super::notice::NoticeKind;
use super::ScheduleEditor;

/// Where a loaded schedule came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadSource {
    Fetched,
    /// Fetch failed, came back empty, or returned an unusable schedule.
    Fallback,
}

/// Result of resolving one variant against the gateway.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedSchedule {
    pub variant: ScheduleVariant,
    pub schedule: Schedule,
    pub source: LoadSource,
}

impl LoadedSchedule {
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.source == LoadSource::Fallback
    }
}

/// Validated payload handed to `ScheduleGateway::save_schedule`.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveRequest {
    pub variant: ScheduleVariant,
    pub blocks: Vec<Block>,
}

/// Fetches `variant`, falling back to the built-in default for its day type.
///
/// Gateway errors are not propagated: they only select the fallback.
pub async fn fetch_or_default<G: ScheduleGateway>(
    gateway: &G,
    entity: &EntityRef,
    variant: &ScheduleVariant,
) -> LoadedSchedule {
    let fallback = |day_type: DayType| LoadedSchedule {
        variant: variant.clone(),
        schedule: default_schedule(day_type),
        source: LoadSource::Fallback,
    };

    let blocks = match gateway.fetch_schedule(entity, variant).await {
        Ok(blocks) => blocks,
        Err(err) => {
            warn!(%entity, %variant, error = %err, "schedule fetch failed, using default");
            return fallback(variant.day_type);
        }
    };
    if blocks.is_empty() {
        debug!(%entity, %variant, "no stored schedule, using default");
        return fallback(variant.day_type);
    }
    match Schedule::new(blocks) {
        Ok(schedule) => LoadedSchedule {
            variant: variant.clone(),
            schedule,
            source: LoadSource::Fetched,
        },
        Err(err) => {
            warn!(%entity, %variant, error = %err, "stored schedule is invalid, using default");
            fallback(variant.day_type)
        }
    }
}

impl<R: Renderer> ScheduleEditor<R> {
    /// Marks `variant` as the one being loaded.
    ///
    /// Switching to another variant shows its built-in default right away so
    /// the editor never displays a stale variant while a fetch is outstanding.
    pub fn begin_variant_load(&mut self, variant: ScheduleVariant) {
        if variant != self.core.model.variant {
            self.finish_gesture_silently();
            let had_selection = self.core.model.selected.is_some();
            let schedule = default_schedule(variant.day_type);
            self.core.model.replace(variant.clone(), schedule);
            self.invalidate_full();
            if had_selection {
                self.emit_selection_changed();
            }
        } else {
            self.settle_gesture();
        }
        debug!(%variant, "variant load started");
        self.core.model.pending_variant = Some(variant);
    }

    /// Installs a fetch result. Returns `false` when it was ignored.
    ///
    /// Responses for anything but the pending variant are stale and dropped.
    /// Without a pending load, a refresh of the current variant is only
    /// applied when there are no local edits.
    pub fn apply_loaded(&mut self, loaded: LoadedSchedule) -> bool {
        let accept = match &self.core.model.pending_variant {
            Some(pending) => *pending == loaded.variant,
            None => loaded.variant == self.core.model.variant && !self.core.model.editing,
        };
        if !accept {
            debug!(variant = %loaded.variant, "ignoring stale schedule response");
            return false;
        }

        self.finish_gesture_silently();
        let fallback = loaded.is_fallback();
        let blocks_len = loaded.schedule.len();
        info!(variant = %loaded.variant, blocks_len, fallback, "schedule loaded");
        self.core.model.pending_variant = None;
        self.core.model.replace(loaded.variant, loaded.schedule);
        self.invalidate_full();
        self.emit_plugin_event(EditorEvent::ScheduleLoaded {
            blocks_len,
            fallback,
        });
        true
    }

    /// Loads `variant` from the gateway and installs it.
    pub async fn load_variant<G: ScheduleGateway>(
        &mut self,
        gateway: &G,
        entity: &EntityRef,
        variant: ScheduleVariant,
    ) -> bool {
        self.begin_variant_load(variant.clone());
        let loaded = fetch_or_default(gateway, entity, &variant).await;
        self.apply_loaded(loaded)
    }

    /// Completes the load started by `select_mode` or `select_day_type`.
    ///
    /// Returns `false` when nothing was pending.
    pub async fn load_pending<G: ScheduleGateway>(
        &mut self,
        gateway: &G,
        entity: &EntityRef,
    ) -> bool {
        let Some(variant) = self.core.model.pending_variant.clone() else {
            return false;
        };
        let loaded = fetch_or_default(gateway, entity, &variant).await;
        self.apply_loaded(loaded)
    }

    /// Picks a mode in the selector and starts loading its first variant.
    pub fn select_mode(&mut self, mode: &str) -> ScheduleResult<ScheduleVariant> {
        let variant = match self.core.model.selector.select_mode(mode) {
            Ok(variant) => variant,
            Err(err) => return self.report(err),
        };
        self.begin_variant_load(variant.clone());
        Ok(variant)
    }

    /// Switches day type within the current mode and starts loading it.
    pub fn select_day_type(&mut self, day_type: DayType) -> ScheduleResult<ScheduleVariant> {
        let variant = match self.core.model.selector.select_day_type(day_type) {
            Ok(variant) => variant,
            Err(err) => return self.report(err),
        };
        self.begin_variant_load(variant.clone());
        Ok(variant)
    }

    /// Validates the working schedule and packages it for the gateway.
    ///
    /// A failed validation blocks the save and stays on screen until
    /// dismissed, naming the offending block(s).
    pub fn prepare_save(&mut self) -> ScheduleResult<SaveRequest> {
        self.settle_gesture();
        let blocks = self.core.model.schedule.blocks();
        if let Err(err) = validate(blocks) {
            warn!(variant = %self.core.model.variant, error = %err, "save rejected");
            self.raise_persistent_notice(NoticeKind::Error, err.to_string());
            self.emit_plugin_event(EditorEvent::SaveRejected);
            return Err(err);
        }
        Ok(SaveRequest {
            variant: self.core.model.variant.clone(),
            blocks: blocks.to_vec(),
        })
    }

    /// Records the gateway's answer to `request`.
    ///
    /// A failure keeps the edit session open so the user can retry.
    pub fn complete_save(
        &mut self,
        request: SaveRequest,
        result: ScheduleResult<()>,
    ) -> ScheduleResult<()> {
        if let Err(err) = result {
            warn!(variant = %request.variant, error = %err, "schedule save failed");
            self.raise_persistent_notice(NoticeKind::Error, format!("Save failed: {err}"));
            self.emit_plugin_event(EditorEvent::SaveFailed);
            return Err(err);
        }

        if request.variant == self.core.model.variant {
            match Schedule::new(request.blocks) {
                Ok(saved) => {
                    self.core.model.editing = saved != self.core.model.schedule;
                    self.core.model.baseline = saved;
                }
                Err(err) => {
                    return Err(ScheduleError::InvalidData(format!(
                        "saved blocks no longer form a schedule: {err}"
                    )));
                }
            }
        }
        info!(variant = %request.variant, "schedule saved");
        self.raise_notice(NoticeKind::Info, "Schedule saved");
        self.emit_plugin_event(EditorEvent::Saved);
        Ok(())
    }

    /// Validates and persists the working schedule.
    pub async fn save<G: ScheduleGateway>(
        &mut self,
        gateway: &G,
        entity: &EntityRef,
    ) -> ScheduleResult<()> {
        let request = self.prepare_save()?;
        let result = gateway
            .save_schedule(entity, &request.variant, &request.blocks)
            .await;
        self.complete_save(request, result)
    }

    /// Replaces the selector's mode list; `None` or empty restores the fallback list.
    pub fn apply_modes(&mut self, listed: Option<Vec<String>>) {
        let fallback = self.core.behavior.config.fallback_modes.clone();
        self.core
            .model
            .selector
            .apply_listed_modes(listed, &fallback);
        self.invalidate_full();
    }

    /// Asks the hub for its modes; failures fall back to the configured list.
    pub async fn refresh_modes<G: ScheduleGateway>(&mut self, gateway: &G, hub: &HubRef) {
        let listed = match gateway.list_modes(hub).await {
            Ok(modes) => Some(modes),
            Err(err) => {
                warn!(%hub, error = %err, "mode listing failed, using fallback modes");
                None
            }
        };
        self.apply_modes(listed);
    }
}
