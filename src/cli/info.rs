use crate::{
    info,
    types::DateInputs,
    ui::{DEFAULT_WINDOW_DAYS, DateRangePicker},
};

/// Displays the date bounds the gallery works with.
///
/// # Arguments
///
/// * `range` - Display the default date window
/// * `archive` - Display the first and last selectable day of the archive
///
/// Without any flag both are shown.
///
/// # Output Examples
///
/// ```
/// [o] Default range: 2024-03-01 - 2024-03-10 (last 9 days)
/// [o] Archive: 1995-06-16 - 2024-03-10 (10860 days)
/// ```
pub fn info(range: bool, archive: bool) {
    let picker = DateRangePicker::for_today();
    let mut inputs = DateInputs::default();
    picker.setup(&mut inputs);
    let show_all = !range && !archive;

    if range || show_all {
        info!(
            "Default range: {} - {} (last {} days)",
            inputs.start, inputs.end, DEFAULT_WINDOW_DAYS
        );
    }

    if archive || show_all {
        if let (Some(min), Some(max)) = (inputs.min, inputs.max) {
            let days = (max - min).num_days() + 1;
            info!("Archive: {} - {} ({} days)", min, max, days);
        }
    }
}
