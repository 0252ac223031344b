use schedule_rs::ScheduleError;
use schedule_rs::core::{Block, Temperature, validate};
use schedule_rs::error::ValidationViolation;

fn violation_of(blocks: &[Block]) -> (Vec<usize>, ValidationViolation) {
    match validate(blocks).expect_err("schedule should be rejected") {
        ScheduleError::Validation {
            indexes, violation, ..
        } => (indexes.to_vec(), violation),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn accepts_contiguous_full_day() {
    let blocks = [
        Block::new(0, 480, 18.0),
        Block::new(480, 1320, 21.0),
        Block::new(1320, 1440, Temperature::FROST),
    ];

    assert!(validate(&blocks).is_ok());
}

#[test]
fn accepts_off_grid_boundaries_from_stored_schedules() {
    let blocks = [
        Block::new(0, 1340, 18.0),
        Block::new(1340, 1440, 21.0),
    ];

    assert!(validate(&blocks).is_ok());
}

#[test]
fn rejects_empty_schedule() {
    let (indexes, violation) = violation_of(&[]);

    assert!(indexes.is_empty());
    assert_eq!(violation, ValidationViolation::Empty);
}

#[test]
fn rejects_late_first_start() {
    let (indexes, violation) = violation_of(&[Block::new(60, 1440, 18.0)]);

    assert_eq!(indexes, vec![0]);
    assert_eq!(violation, ValidationViolation::StartNotMidnight);
}

#[test]
fn rejects_gap_and_names_both_neighbors() {
    let (indexes, violation) = violation_of(&[
        Block::new(0, 600, 18.0),
        Block::new(660, 1440, 21.0),
    ]);

    assert_eq!(indexes, vec![0, 1]);
    assert_eq!(violation, ValidationViolation::Gap);
}

#[test]
fn rejects_overlap() {
    let (indexes, violation) = violation_of(&[
        Block::new(0, 700, 18.0),
        Block::new(660, 1440, 21.0),
    ]);

    assert_eq!(indexes, vec![0, 1]);
    assert_eq!(violation, ValidationViolation::Overlap);
}

#[test]
fn rejects_short_last_end() {
    let (indexes, violation) = violation_of(&[
        Block::new(0, 600, 18.0),
        Block::new(600, 1425, 21.0),
    ]);

    assert_eq!(indexes, vec![1]);
    assert_eq!(violation, ValidationViolation::EndNotEndOfDay);
}

#[test]
fn gap_check_runs_on_time_sorted_order_but_reports_input_positions() {
    let (indexes, violation) = violation_of(&[
        Block::new(900, 1440, 21.0),
        Block::new(0, 600, 18.0),
    ]);

    assert_eq!(indexes, vec![1, 0]);
    assert_eq!(violation, ValidationViolation::Gap);
}

#[test]
fn unsorted_but_contiguous_input_passes() {
    let blocks = [
        Block::new(600, 1440, 21.0),
        Block::new(0, 600, 18.0),
    ];

    assert!(validate(&blocks).is_ok());
}

#[test]
fn rejects_zero_length_block() {
    let (indexes, violation) = violation_of(&[
        Block::new(0, 600, 18.0),
        Block::new(600, 600, 19.0),
        Block::new(600, 1440, 21.0),
    ]);

    assert_eq!(indexes, vec![1]);
    assert_eq!(violation, ValidationViolation::EmptyRange);
}

#[test]
fn rejects_out_of_range_temperature_with_block_index() {
    let (indexes, violation) = violation_of(&[
        Block::new(0, 600, 18.0),
        Block::new(600, 1440, 31.5),
    ]);

    assert_eq!(indexes, vec![1]);
    assert_eq!(violation, ValidationViolation::TemperatureOutOfRange);
}

#[test]
fn structural_violations_win_over_temperature_violations() {
    let (_, violation) = violation_of(&[
        Block::new(0, 600, 99.0),
        Block::new(660, 1440, 21.0),
    ]);

    assert_eq!(violation, ValidationViolation::Gap);
}

#[test]
fn reason_is_human_readable() {
    let err = validate(&[Block::new(0, 600, 18.0), Block::new(660, 1440, 21.0)])
        .expect_err("gap");

    let message = err.to_string();
    assert!(message.contains("10:00"), "{message}");
    assert!(message.contains("11:00"), "{message}");
    assert!(!err.is_transient());
}
