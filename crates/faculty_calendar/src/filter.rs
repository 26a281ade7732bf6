use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::model::{CategoryFilter, Event};

/// Events whose start or end falls inside `[start, end)`, in input order.
pub fn by_date_range<'a, I>(events: I, start: NaiveDateTime, end: NaiveDateTime) -> Vec<&'a Event>
where
    I: IntoIterator<Item = &'a Event>,
{
    let within = |t: NaiveDateTime| t >= start && t < end;
    events
        .into_iter()
        .filter(|ev| within(ev.start) || within(ev.end))
        .collect()
}

pub fn by_category<'a, I>(events: I, filter: CategoryFilter) -> Vec<&'a Event>
where
    I: IntoIterator<Item = &'a Event>,
{
    events
        .into_iter()
        .filter(|ev| filter.matches(ev.category))
        .collect()
}

/// Events touching `day`, i.e. [`by_date_range`] over that day's midnight to
/// the next.
pub fn on_day<'a, I>(events: I, day: NaiveDate) -> Vec<&'a Event>
where
    I: IntoIterator<Item = &'a Event>,
{
    let start = day.and_time(NaiveTime::MIN);
    by_date_range(events, start, start + Duration::days(1))
}
