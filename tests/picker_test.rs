use apodcli::types::DateInputs;
use apodcli::ui::DateRangePicker;
use chrono::NaiveDate;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_setup_defaults() {
    let picker = DateRangePicker::new(ymd(2024, 3, 10));
    let mut inputs = DateInputs::default();

    picker.setup(&mut inputs);

    assert_eq!(inputs.start, "2024-03-01");
    assert_eq!(inputs.end, "2024-03-10");
    assert_eq!(inputs.min, Some(ymd(1995, 6, 16)));
    assert_eq!(inputs.max, Some(ymd(2024, 3, 10)));
}

#[test]
fn test_setup_twice_matches_setup_once() {
    let picker = DateRangePicker::new(ymd(2024, 3, 10));

    let mut once = DateInputs::default();
    picker.setup(&mut once);

    let mut twice = DateInputs::default();
    picker.setup(&mut twice);
    picker.setup(&mut twice);

    assert_eq!(once, twice);
}

#[test]
fn test_setup_resets_chosen_values() {
    let picker = DateRangePicker::new(ymd(2024, 3, 10));
    let mut inputs = DateInputs::default();
    picker.setup(&mut inputs);
    picker.select_start(&mut inputs, "2001-01-01");
    picker.select_end(&mut inputs, "2001-01-05");

    picker.setup(&mut inputs);

    assert_eq!(inputs.start, "2024-03-01");
    assert_eq!(inputs.end, "2024-03-10");
}

#[test]
fn test_select_clamps_to_archive_bounds() {
    let picker = DateRangePicker::new(ymd(2024, 3, 10));
    let mut inputs = DateInputs::default();
    picker.setup(&mut inputs);

    picker.select_start(&mut inputs, "1980-05-01");
    picker.select_end(&mut inputs, "2031-01-01");
    assert_eq!(inputs.start, "1995-06-16");
    assert_eq!(inputs.end, "2024-03-10");

    picker.select_start(&mut inputs, "2010-10-10");
    assert_eq!(inputs.start, "2010-10-10");
}

#[test]
fn test_select_keeps_unparseable_input() {
    let picker = DateRangePicker::new(ymd(2024, 3, 10));
    let mut inputs = DateInputs::default();
    picker.setup(&mut inputs);

    picker.select_start(&mut inputs, "next tuesday");
    assert_eq!(inputs.start, "next tuesday");
}

#[test]
fn test_default_range_near_archive_start() {
    let picker = DateRangePicker::new(ymd(1995, 6, 20));
    let (start, end) = picker.default_range();

    assert_eq!(start, ymd(1995, 6, 16));
    assert_eq!(end, ymd(1995, 6, 20));
}
