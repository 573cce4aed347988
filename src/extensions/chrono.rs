use chrono::Weekday;

pub trait WeekdayExt {
    /// Three-letter column header label ("Mon", "Tue", ...).
    fn short_label(self) -> &'static str;
}

impl WeekdayExt for Weekday {
    fn short_label(self) -> &'static str {
        match self {
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
            Weekday::Sat => "Sat",
            Weekday::Sun => "Sun",
        }
    }
}
