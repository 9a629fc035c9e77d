use chrono::NaiveDateTime;

/// Anything with a start and an end on the timeline, optionally carrying a
/// planned (baseline) start and end.
pub trait ScheduledItem {
    fn start(&self) -> NaiveDateTime;

    fn end(&self) -> NaiveDateTime;

    fn plan_start(&self) -> Option<NaiveDateTime> {
        None
    }

    fn plan_end(&self) -> Option<NaiveDateTime> {
        None
    }
}

impl<T> ScheduledItem for &T
    where T: ScheduledItem + ?Sized {
    fn start(&self) -> NaiveDateTime {
        (**self).start()
    }

    fn end(&self) -> NaiveDateTime {
        (**self).end()
    }

    fn plan_start(&self) -> Option<NaiveDateTime> {
        (**self).plan_start()
    }

    fn plan_end(&self) -> Option<NaiveDateTime> {
        (**self).plan_end()
    }
}
