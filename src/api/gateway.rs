use std::cell::{Cell, RefCell};
use std::fmt;

use async_trait::async_trait;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Block, ScheduleVariant};
use crate::error::{ScheduleError, ScheduleResult};

/// Opaque reference to the device entity whose schedules are edited.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityRef(pub String);

/// Opaque reference to the hub that owns the mode list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HubRef(pub String);

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for HubRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Remote source of truth for schedules.
///
/// Implementations talk to whatever backend applies schedules to the
/// heating device. Every call may fail; the editor decides how to recover.
/// Futures are not required to be `Send`; the editor drives them on the
/// host's own task.
#[async_trait(?Send)]
pub trait ScheduleGateway {
    async fn fetch_schedule(
        &self,
        entity: &EntityRef,
        variant: &ScheduleVariant,
    ) -> ScheduleResult<Vec<Block>>;

    async fn save_schedule(
        &self,
        entity: &EntityRef,
        variant: &ScheduleVariant,
        blocks: &[Block],
    ) -> ScheduleResult<()>;

    async fn list_modes(&self, hub: &HubRef) -> ScheduleResult<Vec<String>>;
}

/// Process-local gateway keeping schedules in memory.
///
/// Useful for hosts without a backend and for exercising failure handling:
/// fetch/save failures can be switched on at runtime.
#[derive(Debug, Default)]
pub struct InMemoryScheduleGateway {
    schedules: RefCell<IndexMap<(EntityRef, ScheduleVariant), Vec<Block>>>,
    modes: Option<Vec<String>>,
    fail_fetch: Cell<bool>,
    fail_save: Cell<bool>,
    save_count: Cell<usize>,
}

impl InMemoryScheduleGateway {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mode list reported by `list_modes`; without one, listing fails.
    #[must_use]
    pub fn with_modes<S: Into<String>>(mut self, modes: impl IntoIterator<Item = S>) -> Self {
        self.modes = Some(modes.into_iter().map(Into::into).collect());
        self
    }

    pub fn insert(&self, entity: &EntityRef, variant: &ScheduleVariant, blocks: Vec<Block>) {
        self.schedules
            .borrow_mut()
            .insert((entity.clone(), variant.clone()), blocks);
    }

    #[must_use]
    pub fn stored(&self, entity: &EntityRef, variant: &ScheduleVariant) -> Option<Vec<Block>> {
        self.schedules
            .borrow()
            .get(&(entity.clone(), variant.clone()))
            .cloned()
    }

    pub fn set_fail_fetch(&self, fail: bool) {
        self.fail_fetch.set(fail);
    }

    pub fn set_fail_save(&self, fail: bool) {
        self.fail_save.set(fail);
    }

    /// Number of accepted saves.
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.save_count.get()
    }
}

#[async_trait(?Send)]
impl ScheduleGateway for InMemoryScheduleGateway {
    async fn fetch_schedule(
        &self,
        entity: &EntityRef,
        variant: &ScheduleVariant,
    ) -> ScheduleResult<Vec<Block>> {
        if self.fail_fetch.get() {
            return Err(ScheduleError::Gateway(format!(
                "fetch of {variant} for {entity} failed"
            )));
        }
        Ok(self.stored(entity, variant).unwrap_or_default())
    }

    async fn save_schedule(
        &self,
        entity: &EntityRef,
        variant: &ScheduleVariant,
        blocks: &[Block],
    ) -> ScheduleResult<()> {
        if self.fail_save.get() {
            return Err(ScheduleError::Gateway(format!(
                "save of {variant} for {entity} failed"
            )));
        }
        self.insert(entity, variant, blocks.to_vec());
        self.save_count.set(self.save_count.get() + 1);
        debug!(%entity, %variant, blocks = blocks.len(), "stored schedule in memory");
        Ok(())
    }

    async fn list_modes(&self, hub: &HubRef) -> ScheduleResult<Vec<String>> {
        self.modes
            .clone()
            .ok_or_else(|| ScheduleError::Gateway(format!("hub {hub} reports no modes")))
    }
}
