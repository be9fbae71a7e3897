use micromed_core::{day_of_month, phrase_for, CalendarMonth, FALLBACK_PHRASE, MOTIVATIONAL_PHRASES};

#[test]
fn every_calendar_date_has_its_own_phrase() {
    let dates = CalendarMonth::default().dates();
    for (index, date) in dates.iter().enumerate() {
        assert_eq!(phrase_for(date), MOTIVATIONAL_PHRASES[index], "{date}");
    }
}

#[test]
fn day_three_maps_to_index_two() {
    assert_eq!(day_of_month("2025-07-03"), Some(3));
    assert_eq!(phrase_for("2025-07-03"), MOTIVATIONAL_PHRASES[2]);
}

#[test]
fn out_of_range_and_unparsable_dates_fall_back() {
    assert_eq!(phrase_for("2025-07-31"), FALLBACK_PHRASE);
    assert_eq!(phrase_for("bad-date"), FALLBACK_PHRASE);
    assert_eq!(phrase_for(""), FALLBACK_PHRASE);
}

#[test]
fn lookup_ignores_month_and_year() {
    assert_eq!(phrase_for("1999-01-15"), phrase_for("2025-07-15"));
}
