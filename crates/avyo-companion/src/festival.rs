//! Festival calendar and dated greetings.

use avyo_common::MoodLabel;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Days either side of a festival that still count as "near" it.
pub const FESTIVAL_WINDOW_DAYS: i32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Festival {
    pub name: &'static str,
    pub month: u32,
    pub day: u32,
    /// Portrait shown while the festival is near.
    pub avatar_src: &'static str,
}

/// Fixed calendar, checked in order.
pub const FESTIVALS: &[Festival] = &[
    Festival {
        name: "New Year",
        month: 1,
        day: 1,
        avatar_src: "/avatars/new-year.png",
    },
    Festival {
        name: "Valentine's Day",
        month: 2,
        day: 14,
        avatar_src: "/avatars/valentines.png",
    },
    Festival {
        name: "St. Patrick's Day",
        month: 3,
        day: 17,
        avatar_src: "/avatars/patrick.png",
    },
    Festival {
        name: "Easter",
        month: 4,
        day: 9,
        avatar_src: "/avatars/easter.png",
    },
    Festival {
        name: "Halloween",
        month: 10,
        day: 31,
        avatar_src: "/avatars/halloween.png",
    },
    Festival {
        name: "Thanksgiving",
        month: 11,
        day: 24,
        avatar_src: "/avatars/thanksgiving.png",
    },
    Festival {
        name: "Christmas",
        month: 12,
        day: 25,
        avatar_src: "/avatars/christmas.png",
    },
    Festival {
        name: "Diwali",
        month: 11,
        day: 12,
        avatar_src: "/avatars/diwali.png",
    },
    Festival {
        name: "Chinese New Year",
        month: 2,
        day: 10,
        avatar_src: "/avatars/chinese-new-year.png",
    },
];

/// First festival in the same month within [`FESTIVAL_WINDOW_DAYS`] of `date`.
///
/// Only the day of month is compared, so the window never crosses a month
/// boundary.
pub fn festival_for(date: NaiveDate) -> Option<&'static Festival> {
    FESTIVALS.iter().find(|f| {
        f.month == date.month() && (f.day as i32 - date.day() as i32).abs() <= FESTIVAL_WINDOW_DAYS
    })
}

/// Image path for the given mood.
pub fn mood_avatar(mood: MoodLabel) -> String {
    format!("/avatars/mood-{}.png", mood.as_str())
}

/// Festival name and portrait for `date`. With no festival near, the name
/// is `None` and the neutral mood portrait is used.
pub fn festival_avatar(date: NaiveDate) -> (Option<&'static str>, String) {
    match festival_for(date) {
        Some(f) => (Some(f.name), f.avatar_src.to_string()),
        None => (None, mood_avatar(MoodLabel::Neutral)),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Greeting {
    pub title: String,
    pub description: String,
    pub festival: Option<&'static str>,
}

pub fn greeting(username: &str, date: NaiveDate) -> Greeting {
    let festival = festival_for(date);
    let today = date.format("%-m/%-d/%Y");
    let description = match festival {
        Some(f) => format!("Today is {today}. Happy {}!", f.name),
        None => format!("Today is {today}. Have a great day!"),
    };
    Greeting {
        title: format!("Hello, {username}!"),
        description,
        festival: festival.map(|f| f.name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn exact_festival_day() {
        assert_eq!(festival_for(date(2024, 12, 25)).map(|f| f.name), Some("Christmas"));
    }

    #[test]
    fn window_is_three_days_each_side() {
        assert_eq!(festival_for(date(2024, 10, 28)).map(|f| f.name), Some("Halloween"));
        assert!(festival_for(date(2024, 10, 27)).is_none());
        assert_eq!(festival_for(date(2024, 11, 15)).map(|f| f.name), Some("Diwali"));
        assert!(festival_for(date(2024, 11, 16)).is_none());
    }

    #[test]
    fn window_does_not_cross_months() {
        // Dec 31 is one day from New Year but a different month.
        assert!(festival_for(date(2024, 12, 31)).is_none());
    }

    #[test]
    fn table_order_breaks_overlaps() {
        // Feb 12 is near both Chinese New Year and Valentine's Day.
        assert_eq!(
            festival_for(date(2024, 2, 12)).map(|f| f.name),
            Some("Valentine's Day")
        );
        assert_eq!(
            festival_for(date(2024, 2, 8)).map(|f| f.name),
            Some("Chinese New Year")
        );
    }

    #[test]
    fn greeting_with_festival() {
        let g = greeting("Mira", date(2024, 3, 18));
        assert_eq!(g.title, "Hello, Mira!");
        assert_eq!(g.description, "Today is 3/18/2024. Happy St. Patrick's Day!");
        assert_eq!(g.festival, Some("St. Patrick's Day"));
    }

    #[test]
    fn greeting_without_festival() {
        let g = greeting("Mira", date(2024, 7, 4));
        assert_eq!(g.description, "Today is 7/4/2024. Have a great day!");
        assert!(g.festival.is_none());
    }

    #[test]
    fn festival_avatar_near_festival() {
        assert_eq!(
            festival_avatar(date(2024, 10, 30)),
            (Some("Halloween"), "/avatars/halloween.png".to_string())
        );
        assert_eq!(festival_avatar(date(2024, 2, 9)).1, "/avatars/chinese-new-year.png");
    }

    #[test]
    fn festival_avatar_falls_back_to_neutral_portrait() {
        assert_eq!(
            festival_avatar(date(2024, 7, 4)),
            (None, "/avatars/mood-neutral.png".to_string())
        );
    }

    #[test]
    fn mood_avatar_paths() {
        assert_eq!(mood_avatar(MoodLabel::Happy), "/avatars/mood-happy.png");
        assert_eq!(mood_avatar(MoodLabel::Neutral), "/avatars/mood-neutral.png");
    }
}
