/// Renders a decimal hour count as the plan screen displays durations.
///
/// Whole values render without a minute part ("2 hours", "0 hours"), values
/// under one hour render minutes only ("15 minutes"), everything else gets
/// both parts ("1 hours 30 minutes"). The unit is always the plural word.
/// Rounding can push the minute part to 60, which carries into the hour
/// instead of showing "60 minutes".
pub fn format_hours(decimal_hours: f64) -> String {
    let mut hours = decimal_hours.floor() as i64;
    let mut minutes = ((decimal_hours - hours as f64) * 60.0).round() as i64;
    if minutes == 60 {
        hours += 1;
        minutes = 0;
    }

    if minutes == 0 {
        return format!("{hours} hours");
    }
    if hours == 0 {
        return format!("{minutes} minutes");
    }
    format!("{hours} hours {minutes} minutes")
}
