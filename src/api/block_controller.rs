use tracing::debug;

use crate::core::{
    BoundaryHandle, MinuteOfDay, SpecialTemperature, Temperature, to_end_minutes, to_minutes,
};
use crate::error::{ScheduleError, ScheduleResult};
use crate::extensions::EditorEvent;
use crate::render::Renderer;

use super::ScheduleEditor;

impl<R: Renderer> ScheduleEditor<R> {
    /// Selects a block, or clears the selection with `None`.
    pub fn select_block(&mut self, index: Option<usize>) -> ScheduleResult<()> {
        if let Some(index) = index {
            if let Err(err) = self.core.model.schedule.block(index) {
                return self.report(err);
            }
        }
        if self.core.model.selected != index {
            self.core.model.selected = index;
            self.invalidate_full();
            self.emit_selection_changed();
        }
        Ok(())
    }

    /// Splits the selected block (or the longest one) and selects the new half.
    pub fn split_block(&mut self) -> ScheduleResult<usize> {
        let target = self
            .core
            .model
            .selected
            .unwrap_or_else(|| self.core.model.schedule.longest_block_index());
        self.split_block_at(target)
    }

    /// Splits block `index`; the second half gets the configured default temperature.
    pub fn split_block_at(&mut self, index: usize) -> ScheduleResult<usize> {
        self.settle_gesture();
        let second_half = Temperature::Celsius(self.core.behavior.config.default_split_temperature_c);
        let new_index = match self.core.model.schedule.split_block(index, second_half) {
            Ok(new_index) => new_index,
            Err(err) => return self.report(err),
        };
        self.core.model.selected = Some(new_index);
        self.mark_edited();
        self.invalidate_full();
        self.emit_plugin_event(EditorEvent::BlockSplit { index, new_index });
        self.emit_selection_changed();
        Ok(new_index)
    }

    /// Deletes the selected block. Does nothing when no block is selected.
    pub fn delete_selected_block(&mut self) -> ScheduleResult<()> {
        match self.core.model.selected {
            Some(index) => self.delete_block(index),
            None => Ok(()),
        }
    }

    /// Deletes block `index`, extending its earlier neighbor over the hole.
    pub fn delete_block(&mut self, index: usize) -> ScheduleResult<()> {
        self.settle_gesture();
        if let Err(err) = self.core.model.schedule.delete_block(index) {
            return self.report(err);
        }
        let previous_selection = self.core.model.selected;
        self.core.model.clamp_selection();
        self.mark_edited();
        self.invalidate_full();
        self.emit_plugin_event(EditorEvent::BlockDeleted { index });
        if self.core.model.selected != previous_selection {
            self.emit_selection_changed();
        }
        Ok(())
    }

    /// Sets a block temperature; numbers are clamped into `[5, 30]`.
    pub fn set_temperature(
        &mut self,
        index: usize,
        temperature: Temperature,
    ) -> ScheduleResult<Temperature> {
        let applied = match self.core.model.schedule.set_temperature(index, temperature) {
            Ok(applied) => applied,
            Err(err) => return self.report(err),
        };
        self.mark_edited();
        self.invalidate_full();
        self.emit_plugin_event(EditorEvent::TemperatureChanged { index });
        Ok(applied)
    }

    /// Parses `21.5`, `frost` or `off` and applies it like `set_temperature`.
    pub fn set_temperature_text(&mut self, index: usize, text: &str) -> ScheduleResult<Temperature> {
        let temperature = match parse_temperature(text) {
            Ok(temperature) => temperature,
            Err(err) => return self.report(err),
        };
        self.set_temperature(index, temperature)
    }

    /// Typed start time for block `index`; moves the boundary shared with the previous block.
    pub fn set_block_start_text(&mut self, index: usize, text: &str) -> ScheduleResult<MinuteOfDay> {
        let minute = match to_minutes(text) {
            Ok(minute) => minute,
            Err(err) => return self.report(err),
        };
        self.apply_typed_boundary(index, BoundaryHandle::Left, minute)
    }

    /// Typed end time for block `index`; `00:00` means end of day.
    pub fn set_block_end_text(&mut self, index: usize, text: &str) -> ScheduleResult<MinuteOfDay> {
        let minute = match to_end_minutes(text) {
            Ok(minute) => minute,
            Err(err) => return self.report(err),
        };
        self.apply_typed_boundary(index, BoundaryHandle::Right, minute)
    }

    /// Moves a block boundary by a minute delta, with snapping and neighbor clamping.
    pub fn resize_boundary(
        &mut self,
        index: usize,
        handle: BoundaryHandle,
        delta_minutes: i32,
    ) -> ScheduleResult<MinuteOfDay> {
        self.settle_gesture();
        let minute = match self
            .core
            .model
            .schedule
            .resize_boundary(index, handle, delta_minutes)
        {
            Ok(minute) => minute,
            Err(err) => return self.report(err),
        };
        self.after_boundary_edit(index, handle, minute);
        Ok(minute)
    }

    /// Swaps two blocks' positions, keeping each block's duration and temperature.
    ///
    /// A selection on either block follows it to its new position.
    pub fn swap_blocks(&mut self, first: usize, second: usize) -> ScheduleResult<()> {
        self.settle_gesture();
        if let Err(err) = self.core.model.schedule.swap_blocks(first, second) {
            return self.report(err);
        }
        if first != second {
            self.core.model.selected = self.core.model.selected.map(|selected| {
                if selected == first {
                    second
                } else if selected == second {
                    first
                } else {
                    selected
                }
            });
            self.mark_edited();
            self.invalidate_full();
            self.emit_plugin_event(EditorEvent::BlocksSwapped { first, second });
        }
        Ok(())
    }

    /// Moves one block to a new position; blocks in between shift over and the
    /// selection follows the block it pointed at.
    pub fn move_block(&mut self, from: usize, to: usize) -> ScheduleResult<()> {
        self.settle_gesture();
        if let Err(err) = self.core.model.schedule.move_block(from, to) {
            return self.report(err);
        }
        if from != to {
            self.core.model.selected = self
                .core
                .model
                .selected
                .map(|selected| moved_index(selected, from, to));
            self.mark_edited();
            self.invalidate_full();
            self.emit_plugin_event(EditorEvent::BlockMoved { from, to });
        }
        Ok(())
    }

    fn apply_typed_boundary(
        &mut self,
        index: usize,
        handle: BoundaryHandle,
        minute: MinuteOfDay,
    ) -> ScheduleResult<MinuteOfDay> {
        self.settle_gesture();
        let applied = match self.core.model.schedule.set_boundary(index, handle, minute) {
            Ok(applied) => applied,
            Err(err) => return self.report(err),
        };
        if applied != minute {
            debug!(index, ?handle, requested = minute, applied, "typed time adjusted");
        }
        self.after_boundary_edit(index, handle, applied);
        Ok(applied)
    }

    fn after_boundary_edit(&mut self, index: usize, handle: BoundaryHandle, minute: MinuteOfDay) {
        self.mark_edited();
        self.invalidate_full();
        self.emit_plugin_event(EditorEvent::BoundaryMoved {
            index,
            handle,
            minute,
        });
    }
}

/// Position of the block at `index` after the block at `from` moved to `to`.
fn moved_index(index: usize, from: usize, to: usize) -> usize {
    if index == from {
        to
    } else if from < index && index <= to {
        index - 1
    } else if to <= index && index < from {
        index + 1
    } else {
        index
    }
}

fn parse_temperature(text: &str) -> ScheduleResult<Temperature> {
    let trimmed = text.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "frost" => return Ok(Temperature::Special(SpecialTemperature::Frost)),
        "off" => return Ok(Temperature::Special(SpecialTemperature::Off)),
        _ => {}
    }
    trimmed
        .trim_end_matches("°C")
        .trim()
        .replace(',', ".")
        .parse::<f64>()
        .map(Temperature::Celsius)
        .map_err(|_| {
            ScheduleError::InvalidData(format!(
                "invalid temperature `{trimmed}`: expected a number, `frost` or `off`"
            ))
        })
}
