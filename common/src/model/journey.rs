//! The club's reading schedule and the countdown to the kick-off meeting.

use chrono::NaiveDate;

/// Schedule dates are fixed; an invalid one fails at compile time.
const fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid schedule date"),
    }
}

/// Whole days from `today` to `target`; negative once `target` is past.
pub fn days_until(today: NaiveDate, target: NaiveDate) -> i64 {
    target.signed_duration_since(today).num_days()
}

pub const KICKOFF: NaiveDate = date(2026, 2, 22);

/// Headline of the home tab's countdown card.
pub fn dday_text(days_left: i64) -> String {
    match days_left {
        d if d > 0 => format!("첫 모임 OT까지 D-{d} 남았습니다"),
        0 => "오늘이에요! 첫 모임 OT: Kick-off".to_string(),
        _ => "첫 모임 OT가 진행되었어요".to_string(),
    }
}

/// The last week before the kick-off gets an extra nudge.
pub fn shows_encouragement(days_left: i64) -> bool {
    days_left > 0 && days_left < 7
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Done,
    InProgress,
    Upcoming,
}

impl StepStatus {
    pub fn label(self) -> &'static str {
        match self {
            StepStatus::Done => "완료",
            StepStatus::InProgress => "진행 중",
            StepStatus::Upcoming => "준비 중",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Book {
    pub title: &'static str,
    pub main: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// `None` for the kick-off meeting.
    pub stage: Option<u8>,
    pub name: &'static str,
    pub date_label: &'static str,
    pub dates: &'static [NaiveDate],
    pub books: &'static [Book],
}

impl Step {
    pub fn status(&self, today: NaiveDate) -> StepStatus {
        step_status(self.dates, today)
    }
}

/// Done once the last meeting is past, in progress between the first and the
/// last meeting (inclusive), upcoming before that.
pub fn step_status(dates: &[NaiveDate], today: NaiveDate) -> StepStatus {
    let (Some(first), Some(last)) = (dates.first(), dates.last()) else {
        return StepStatus::Upcoming;
    };
    if *last < today {
        StepStatus::Done
    } else if *first <= today {
        StepStatus::InProgress
    } else {
        StepStatus::Upcoming
    }
}

pub const JOURNEY: &[Step] = &[
    Step {
        stage: None,
        name: "OT: Kick-off",
        date_label: "2/22 (일)",
        dates: &[KICKOFF],
        books: &[],
    },
    Step {
        stage: Some(1),
        name: "관찰과 맥락",
        date_label: "3/08",
        dates: &[date(2026, 3, 8)],
        books: &[
            Book { title: "《씩 데이터》", main: true },
            Book { title: "《데이터 읽기의 기술》", main: false },
        ],
    },
    Step {
        stage: Some(2),
        name: "세상을 보는 눈",
        date_label: "3/22, 4/05",
        dates: &[date(2026, 3, 22), date(2026, 4, 5)],
        books: &[
            Book { title: "《팩트풀니스》", main: true },
            Book { title: "《세대 감각》", main: false },
            Book { title: "《숫자에 속지 않고 숫자 읽는 법》", main: false },
        ],
    },
    Step {
        stage: Some(3),
        name: "비판적 시각",
        date_label: "4/19, 5/03",
        dates: &[date(2026, 4, 19), date(2026, 5, 3)],
        books: &[
            Book { title: "《대량살상 수학무기》", main: true },
            Book { title: "《가장 인간적인 미래》", main: false },
            Book { title: "《데이터의 함정》 등", main: false },
        ],
    },
    Step {
        stage: Some(4),
        name: "나만의 중심",
        date_label: "5/17, 5/31",
        dates: &[date(2026, 5, 17), date(2026, 5, 31)],
        books: &[Book { title: "《그냥 하지 말라》", main: true }],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn days_until_crosses_month_and_leap_day() {
        assert_eq!(days_until(date(2026, 2, 15), KICKOFF), 7);
        assert_eq!(days_until(date(2024, 2, 28), date(2024, 3, 1)), 2);
        assert_eq!(days_until(date(2026, 3, 1), KICKOFF), -7);
        assert_eq!(days_until(KICKOFF, KICKOFF), 0);
    }

    #[test]
    fn countdown_text() {
        assert_eq!(dday_text(3), "첫 모임 OT까지 D-3 남았습니다");
        assert_eq!(dday_text(0), "오늘이에요! 첫 모임 OT: Kick-off");
        assert_eq!(dday_text(-1), "첫 모임 OT가 진행되었어요");
        assert!(shows_encouragement(6));
        assert!(!shows_encouragement(7));
        assert!(!shows_encouragement(0));
    }

    #[test]
    fn multi_meeting_stage_is_in_progress_between_dates() {
        let stage = &JOURNEY[2];
        assert_eq!(stage.status(date(2026, 3, 21)), StepStatus::Upcoming);
        assert_eq!(stage.status(date(2026, 3, 22)), StepStatus::InProgress);
        assert_eq!(stage.status(date(2026, 4, 5)), StepStatus::InProgress);
        assert_eq!(stage.status(date(2026, 4, 6)), StepStatus::Done);
    }
}
