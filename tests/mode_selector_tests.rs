use chrono::NaiveDate;
use schedule_rs::api::{ModeSelector, ScheduleEditor, ScheduleEditorConfig};
use schedule_rs::core::{
    DayType, FALLBACK_MODES, ScheduleVariant, day_types_for_mode, mode_display_name,
    mode_requires_schedule, selectable_modes, variant_display_name,
};
use schedule_rs::render::NullRenderer;

fn fallback() -> Vec<String> {
    FALLBACK_MODES.iter().map(|mode| (*mode).to_owned()).collect()
}

#[test]
fn day_types_follow_mode_rules() {
    assert_eq!(
        day_types_for_mode("normal"),
        &[DayType::Weekday, DayType::Weekend]
    );
    assert_eq!(day_types_for_mode("homeoffice"), &[DayType::Daily]);
    assert_eq!(day_types_for_mode("party"), &[DayType::Daily]);
    assert!(day_types_for_mode("manual").is_empty());
    assert!(day_types_for_mode("off").is_empty());
    assert!(!mode_requires_schedule("manual"));
    assert!(mode_requires_schedule("vacation"));
}

#[test]
fn selectable_modes_drop_fixed_entries_and_duplicates() {
    let listed = ["normal", "homeoffice", " ", "off", "vacation", "homeoffice", "manual"];

    assert_eq!(selectable_modes(&listed), vec!["homeoffice", "vacation"]);
}

#[test]
fn display_names_match_selector_labels() {
    assert_eq!(
        variant_display_name(&ScheduleVariant::normal_weekday()),
        "Normal - Weekday (Mon-Fri)"
    );
    assert_eq!(
        variant_display_name(&ScheduleVariant::normal_weekend()),
        "Normal - Weekend (Sat-Sun)"
    );
    assert_eq!(
        variant_display_name(&ScheduleVariant::new("homeoffice", DayType::Daily)),
        "Homeoffice (daily)"
    );
    assert_eq!(mode_display_name(""), "");
}

#[test]
fn variant_for_date_uses_weekday_and_weekend_for_normal_only() {
    let saturday = NaiveDate::from_ymd_opt(2026, 10, 17).expect("valid date");
    let monday = NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date");

    assert_eq!(DayType::for_date(saturday), DayType::Weekend);
    assert_eq!(
        ScheduleVariant::for_mode_on("normal", monday),
        Some(ScheduleVariant::normal_weekday())
    );
    assert_eq!(
        ScheduleVariant::for_mode_on("homeoffice", saturday),
        Some(ScheduleVariant::new("homeoffice", DayType::Daily))
    );
    assert_eq!(ScheduleVariant::for_mode_on("off", monday), None);
}

#[test]
fn selector_falls_back_when_hub_lists_nothing() {
    let mut selector = ModeSelector::new(&fallback());
    assert!(selector.is_fallback());

    selector.apply_listed_modes(Some(vec!["normal".into(), "eco".into()]), &fallback());
    assert!(!selector.is_fallback());
    assert_eq!(selector.selectable_modes(), vec!["eco"]);

    selector.apply_listed_modes(Some(Vec::new()), &fallback());
    assert!(selector.is_fallback());
    assert_eq!(selector.modes().len(), 4);

    selector.apply_listed_modes(None, &fallback());
    assert!(selector.is_fallback());
}

#[test]
fn selector_rejects_unknown_and_unscheduled_modes() {
    let mut selector = ModeSelector::new(&fallback());

    assert!(selector.select_mode("party").is_err());
    assert!(selector.select_mode("manual").is_err());
    assert_eq!(selector.current(), &ScheduleVariant::normal_weekday());

    let variant = selector.select_mode("homeoffice").expect("known mode");
    assert_eq!(variant, ScheduleVariant::new("homeoffice", DayType::Daily));
    assert!(selector.select_day_type(DayType::Weekend).is_err());

    selector.select_mode("normal").expect("normal is always available");
    let weekend = selector
        .select_day_type(DayType::Weekend)
        .expect("normal has weekends");
    assert_eq!(weekend, ScheduleVariant::normal_weekend());
}

#[test]
fn selecting_a_variant_shows_its_default_until_loaded() {
    let mut editor = ScheduleEditor::new(NullRenderer::default(), ScheduleEditorConfig::default())
        .expect("editor init");
    editor.split_block().expect("split");

    let variant = editor.select_mode("homeoffice").expect("select mode");

    assert_eq!(editor.variant(), &variant);
    assert_eq!(editor.pending_variant(), Some(&variant));
    assert_eq!(editor.blocks().len(), 3);
    assert_eq!(editor.selected_block(), None);
    assert!(!editor.is_editing());
}

#[test]
fn editor_mode_list_can_be_replaced() {
    let mut editor = ScheduleEditor::new(NullRenderer::default(), ScheduleEditorConfig::default())
        .expect("editor init");

    editor.apply_modes(Some(vec!["normal".into(), "eco".into(), "away".into()]));

    assert_eq!(editor.mode_selector().selectable_modes(), vec!["eco", "away"]);
    assert!(editor.select_mode("homeoffice").is_err());
    assert!(editor.select_mode("away").is_ok());
}

#[test]
fn hub_listing_is_trimmed_and_deduplicated_in_order() {
    let mut selector = ModeSelector::new(&fallback());

    selector.apply_listed_modes(
        Some(vec![
            "eco".into(),
            " normal ".into(),
            "eco ".into(),
            "away".into(),
            "normal".into(),
        ]),
        &fallback(),
    );

    assert_eq!(selector.modes().to_vec(), vec!["eco", "normal", "away"]);
    assert_eq!(selector.selectable_modes(), vec!["eco", "away"]);
}
