use std::cell::RefCell;
use std::rc::Rc;

use schedule_rs::ScheduleError;
use schedule_rs::api::{ScheduleEditor, ScheduleEditorConfig};
use schedule_rs::core::{BoundaryHandle, Temperature};
use schedule_rs::extensions::{EditorContext, EditorEvent, EditorPlugin};
use schedule_rs::interaction::{AbandonPolicy, InteractionMode};
use schedule_rs::render::NullRenderer;

#[derive(Clone)]
struct RecordingPlugin {
    id: String,
    events: Rc<RefCell<Vec<(EditorEvent, EditorContext)>>>,
}

impl RecordingPlugin {
    fn new(id: impl Into<String>, events: Rc<RefCell<Vec<(EditorEvent, EditorContext)>>>) -> Self {
        Self {
            id: id.into(),
            events,
        }
    }
}

impl EditorPlugin for RecordingPlugin {
    fn id(&self) -> &str {
        &self.id
    }

    fn on_event(&mut self, event: EditorEvent, context: EditorContext) {
        self.events.borrow_mut().push((event, context));
    }
}

fn event_kind(event: &EditorEvent) -> &'static str {
    match event {
        EditorEvent::ScheduleLoaded { .. } => "loaded",
        EditorEvent::SelectionChanged { .. } => "selection",
        EditorEvent::BlockSplit { .. } => "split",
        EditorEvent::BlockDeleted { .. } => "delete",
        EditorEvent::BoundaryMoved { .. } => "boundary",
        EditorEvent::BlocksSwapped { .. } => "swap",
        EditorEvent::BlockMoved { .. } => "move",
        EditorEvent::TemperatureChanged { .. } => "temperature",
        EditorEvent::GestureStarted { .. } => "gesture_start",
        EditorEvent::GestureCommitted => "gesture_commit",
        EditorEvent::GestureAbandoned { .. } => "gesture_abandon",
        EditorEvent::SaveRejected => "save_rejected",
        EditorEvent::Saved => "saved",
        EditorEvent::SaveFailed => "save_failed",
        EditorEvent::Rendered => "rendered",
    }
}

fn recorded_editor(
    config: ScheduleEditorConfig,
) -> (
    ScheduleEditor<NullRenderer>,
    Rc<RefCell<Vec<(EditorEvent, EditorContext)>>>,
) {
    let mut editor = ScheduleEditor::new(NullRenderer::default(), config).expect("editor init");
    let events = Rc::new(RefCell::new(Vec::new()));
    editor
        .register_plugin(Box::new(RecordingPlugin::new("recorder", events.clone())))
        .expect("register plugin");
    (editor, events)
}

#[test]
fn plugin_receives_deterministic_event_sequence() {
    let (mut editor, events) = recorded_editor(ScheduleEditorConfig::default());

    editor.split_block().expect("split");
    editor
        .set_temperature(0, Temperature::Celsius(19.0))
        .expect("temperature");
    editor
        .press_handle(0, BoundaryHandle::Right, 360.0)
        .expect("press");
    editor.pointer_move(420.0).expect("move");
    editor.end_gesture();
    editor.flush().expect("flush");
    editor.delete_block(1).expect("delete");
    editor.swap_blocks(0, 1).expect("swap");

    let kinds: Vec<&str> = events
        .borrow()
        .iter()
        .map(|(event, _)| event_kind(event))
        .collect();
    assert_eq!(
        kinds,
        vec![
            "split",
            "selection",
            "temperature",
            "gesture_start",
            "boundary",
            "gesture_commit",
            "rendered",
            "delete",
            "swap",
        ]
    );
}

#[test]
fn context_reflects_state_after_the_change() {
    let (mut editor, events) = recorded_editor(ScheduleEditorConfig::default());

    editor.split_block().expect("split");
    editor
        .press_handle(0, BoundaryHandle::Right, 360.0)
        .expect("press");

    let recorded = events.borrow();
    let (event, context) = recorded[0];
    assert_eq!(event, EditorEvent::BlockSplit { index: 2, new_index: 3 });
    assert_eq!(context.blocks_len, 6);
    assert_eq!(context.selected_block, Some(3));
    assert!(context.editing);

    let (_, gesture_context) = recorded[recorded.len() - 1];
    assert_eq!(gesture_context.interaction_mode, InteractionMode::Resizing);
}

#[test]
fn boundary_events_carry_the_snapped_minute() {
    let (mut editor, events) = recorded_editor(ScheduleEditorConfig::default());

    editor
        .press_handle(1, BoundaryHandle::Left, 360.0)
        .expect("press");
    editor.pointer_move(331.0).expect("move");

    let boundary = events
        .borrow()
        .iter()
        .find_map(|(event, _)| match event {
            EditorEvent::BoundaryMoved { minute, handle, .. } => Some((*minute, *handle)),
            _ => None,
        });
    assert_eq!(boundary, Some((330, BoundaryHandle::Left)));
}

#[test]
fn abandon_event_reports_rollback() {
    let config = ScheduleEditorConfig::default().with_abandon_policy(AbandonPolicy::Rollback);
    let (mut editor, events) = recorded_editor(config);

    editor
        .press_handle(0, BoundaryHandle::Right, 360.0)
        .expect("press");
    editor.pointer_move(450.0).expect("move");
    editor.abandon_gesture();

    let last = events.borrow().last().map(|(event, _)| *event);
    assert_eq!(last, Some(EditorEvent::GestureAbandoned { rolled_back: true }));
}

#[test]
fn failed_operation_emits_no_event() {
    let (mut editor, events) = recorded_editor(ScheduleEditorConfig::default());

    editor.delete_block(50).expect_err("out of range");

    assert!(events.borrow().is_empty());
}

#[test]
fn register_rejects_duplicate_and_empty_ids() {
    let (mut editor, events) = recorded_editor(ScheduleEditorConfig::default());

    let duplicate = editor.register_plugin(Box::new(RecordingPlugin::new("recorder", events.clone())));
    let empty = editor.register_plugin(Box::new(RecordingPlugin::new("", events.clone())));
    let blank = editor.register_plugin(Box::new(RecordingPlugin::new("   ", events.clone())));

    assert!(matches!(duplicate, Err(ScheduleError::InvalidData(_))));
    assert!(matches!(empty, Err(ScheduleError::InvalidData(_))));
    assert!(matches!(blank, Err(ScheduleError::InvalidData(_))));
    assert_eq!(editor.plugin_count(), 1);
}

#[test]
fn plugin_ids_follow_attach_order() {
    let (mut editor, events) = recorded_editor(ScheduleEditorConfig::default());
    editor
        .register_plugin(Box::new(RecordingPlugin::new("audit", events.clone())))
        .expect("register audit");
    editor
        .register_plugin(Box::new(RecordingPlugin::new("sync", events.clone())))
        .expect("register sync");

    assert_eq!(editor.plugin_ids(), vec!["recorder", "audit", "sync"]);

    assert!(editor.unregister_plugin("audit"));
    assert_eq!(editor.plugin_ids(), vec!["recorder", "sync"]);
}

#[test]
fn unregistered_plugin_stops_receiving_events() {
    let (mut editor, events) = recorded_editor(ScheduleEditorConfig::default());

    assert!(editor.has_plugin("recorder"));
    assert!(editor.unregister_plugin("recorder"));
    assert!(!editor.unregister_plugin("recorder"));
    editor.split_block().expect("split");

    assert!(events.borrow().is_empty());
    assert_eq!(editor.plugin_count(), 0);
}
