use schedule_rs::api::{ScheduleEditor, ScheduleEditorConfig};
use schedule_rs::core::{BoundaryHandle, is_contiguous_partition};
use schedule_rs::interaction::{AbandonPolicy, GestureState, InteractionMode};
use schedule_rs::render::NullRenderer;
use schedule_rs::ScheduleError;

fn build_editor(config: ScheduleEditorConfig) -> ScheduleEditor<NullRenderer> {
    let mut editor = ScheduleEditor::new(NullRenderer::default(), config).expect("editor init");
    editor.flush().expect("initial flush");
    editor
}

fn boundary_after_first_block(editor: &ScheduleEditor<NullRenderer>) -> u16 {
    editor.blocks()[0].end
}

#[test]
fn handle_drag_moves_shared_boundary_in_snapped_steps() {
    // 1440 px wide timeline: one pixel per minute.
    let mut editor = build_editor(ScheduleEditorConfig::default());
    assert_eq!(boundary_after_first_block(&editor), 360);

    editor
        .press_handle(0, BoundaryHandle::Right, 360.0)
        .expect("press");
    assert_eq!(editor.interaction_mode(), InteractionMode::Resizing);

    assert_eq!(editor.pointer_move(400.0).expect("move"), Some(405));
    assert_eq!(editor.blocks()[0].end, 405);
    assert_eq!(editor.blocks()[1].start, 405);

    assert_eq!(editor.pointer_move(366.0).expect("move back"), Some(360));
    assert_eq!(editor.pointer_move(440.0).expect("move"), Some(435));

    editor.end_gesture();
    assert_eq!(editor.interaction_mode(), InteractionMode::Idle);
    assert_eq!(editor.blocks()[0].end, 435);
    assert!(editor.is_editing());
    assert!(is_contiguous_partition(editor.blocks()));
}

#[test]
fn drag_delta_scales_with_timeline_width() {
    let mut editor = build_editor(ScheduleEditorConfig::new(720.0));

    editor
        .press_handle(1, BoundaryHandle::Left, 180.0)
        .expect("press");
    let minute = editor.pointer_move(210.0).expect("move");

    assert_eq!(minute, Some(420));
    editor.end_gesture();
}

#[test]
fn drag_is_clamped_before_the_neighbor_collapses() {
    let mut editor = build_editor(ScheduleEditorConfig::default());

    editor
        .press_handle(0, BoundaryHandle::Right, 360.0)
        .expect("press");
    let minute = editor.pointer_move(1_400.0).expect("move far right");

    // Block 1 runs 06:00-08:00, so the boundary stops at 07:45.
    assert_eq!(minute, Some(465));
    assert_eq!(editor.blocks()[1].duration(), 15);
    editor.end_gesture();
}

#[test]
fn pointer_move_without_gesture_is_ignored() {
    let mut editor = build_editor(ScheduleEditorConfig::default());
    let before = editor.blocks().to_vec();

    assert_eq!(editor.pointer_move(900.0).expect("move"), None);
    assert_eq!(editor.blocks(), before.as_slice());
    assert!(!editor.is_dirty());
}

#[test]
fn pinned_outer_edges_cannot_be_pressed() {
    let mut editor = build_editor(ScheduleEditorConfig::default());
    let last = editor.blocks().len() - 1;

    assert!(matches!(
        editor.press_handle(0, BoundaryHandle::Left, 0.0),
        Err(ScheduleError::InvalidData(_))
    ));
    assert!(matches!(
        editor.press_handle(last, BoundaryHandle::Right, 1_440.0),
        Err(ScheduleError::InvalidData(_))
    ));
    assert!(matches!(
        editor.press_handle(0, BoundaryHandle::Right, f64::NAN),
        Err(ScheduleError::InvalidData(_))
    ));
    assert_eq!(editor.gesture_state(), GestureState::Idle);
}

#[test]
fn abandoned_drag_keeps_partial_writes_by_default() {
    let mut editor = build_editor(ScheduleEditorConfig::default());

    editor
        .press_handle(0, BoundaryHandle::Right, 360.0)
        .expect("press");
    editor.pointer_move(420.0).expect("move");
    editor.abandon_gesture();

    assert_eq!(editor.interaction_mode(), InteractionMode::Idle);
    assert_eq!(boundary_after_first_block(&editor), 420);
    assert!(editor.is_editing());
}

#[test]
fn abandoned_drag_rolls_back_with_rollback_policy() {
    let config = ScheduleEditorConfig::default().with_abandon_policy(AbandonPolicy::Rollback);
    let mut editor = build_editor(config);

    editor
        .press_handle(0, BoundaryHandle::Right, 360.0)
        .expect("press");
    editor.pointer_move(420.0).expect("move");
    editor.pointer_move(480.0).expect("move");
    editor.abandon_gesture();

    assert_eq!(boundary_after_first_block(&editor), 360);
    assert!(!editor.is_editing());
}

#[test]
fn block_drag_swaps_positions_on_drop() {
    let mut editor = build_editor(ScheduleEditorConfig::default());
    let first = editor.blocks()[0];
    let second = editor.blocks()[1];

    editor.start_block_drag(0).expect("drag start");
    assert_eq!(editor.interaction_mode(), InteractionMode::Reordering);
    editor.drop_block_on(1).expect("drop");

    assert_eq!(editor.interaction_mode(), InteractionMode::Idle);
    assert_eq!(editor.blocks()[0].temperature, second.temperature);
    assert_eq!(editor.blocks()[0].duration(), second.duration());
    assert_eq!(editor.blocks()[1].temperature, first.temperature);
    assert_eq!(editor.blocks()[1].duration(), first.duration());
    assert!(is_contiguous_partition(editor.blocks()));
}

#[test]
fn dropped_block_keeps_its_selection() {
    let mut editor = build_editor(ScheduleEditorConfig::default());
    editor.select_block(Some(0)).expect("select");

    editor.start_block_drag(0).expect("drag start");
    editor.drop_block_on(3).expect("drop");

    assert_eq!(editor.selected_block(), Some(3));
}

#[test]
fn dropping_outside_the_schedule_abandons_the_block_drag() {
    let mut editor = build_editor(ScheduleEditorConfig::default());
    let before = editor.blocks().to_vec();

    editor.start_block_drag(2).expect("drag start");
    let err = editor.drop_block_on(42).expect_err("invalid target");

    assert!(matches!(err, ScheduleError::InvalidData(_)));
    assert_eq!(editor.interaction_mode(), InteractionMode::Idle);
    assert_eq!(editor.blocks(), before.as_slice());
}

#[test]
fn host_refresh_is_suppressed_while_interacting() {
    let mut editor = build_editor(ScheduleEditorConfig::default());
    assert!(editor.accepts_host_refresh());

    editor
        .press_handle(0, BoundaryHandle::Right, 360.0)
        .expect("press");
    assert!(!editor.accepts_host_refresh());
    editor.end_gesture();
    assert!(editor.accepts_host_refresh());

    editor.set_affordance_open(true);
    assert!(!editor.accepts_host_refresh());
    editor.set_affordance_open(false);
    assert!(editor.accepts_host_refresh());
}

#[test]
fn structural_edit_commits_an_active_drag_first() {
    let mut editor = build_editor(ScheduleEditorConfig::default());

    editor
        .press_handle(0, BoundaryHandle::Right, 360.0)
        .expect("press");
    editor.pointer_move(390.0).expect("move");
    editor.delete_block(4).expect("delete last");

    assert_eq!(editor.interaction_mode(), InteractionMode::Idle);
    assert_eq!(boundary_after_first_block(&editor), 390);
    assert_eq!(editor.blocks().len(), 4);
}
