use chrono::{Days, NaiveDate};
use serde::Serialize;
use utoipa::ToSchema;

/// Days covered by the weekly trend, today included.
pub const TREND_DAYS: u64 = 7;
/// Look-back window for the completion streak.
pub const STREAK_WINDOW_DAYS: u64 = 30;
/// Upcoming covers due days today..=today+3.
pub const UPCOMING_DAYS: u64 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CategoryCount {
    pub category: String,
    pub count: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct DailyCompletions {
    #[schema(value_type = String, format = Date)]
    pub date: NaiveDate,
    pub count: i64,
}

/// Raw aggregates read from the store for one owner.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatsSnapshot {
    pub total: i64,
    pub completed: i64,
    pub pending: i64,
    pub high: i64,
    pub medium: i64,
    pub low: i64,
    pub today_total: i64,
    pub today_completed: i64,
    pub upcoming: i64,
    pub overdue: i64,
    /// Descending by count.
    pub categories: Vec<CategoryCount>,
    /// Completions per UTC day over the streak window; days without
    /// completions may be absent.
    pub daily_completions: Vec<DailyCompletions>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct PriorityBreakdown {
    pub high: i64,
    pub medium: i64,
    pub low: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct TodayStats {
    pub total: i64,
    pub completed: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskStats {
    pub total: i64,
    pub completed: i64,
    pub pending: i64,
    pub completion_rate: f64,
    pub priority: PriorityBreakdown,
    pub today: TodayStats,
    pub categories: Vec<CategoryCount>,
    /// Oldest first, one entry per day.
    pub weekly: Vec<DailyCompletions>,
    pub upcoming: i64,
    pub overdue: i64,
    pub streak_days: i64,
}

impl TaskStats {
    pub fn from_snapshot(snapshot: StatsSnapshot, today: NaiveDate) -> Self {
        let completion_rate = if snapshot.total == 0 {
            0.0
        } else {
            snapshot.completed as f64 / snapshot.total as f64 * 100.0
        };

        let weekly = weekly_trend(&snapshot.daily_completions, today);
        let streak_days = streak_days(&snapshot.daily_completions, today);

        Self {
            total: snapshot.total,
            completed: snapshot.completed,
            pending: snapshot.pending,
            completion_rate,
            priority: PriorityBreakdown {
                high: snapshot.high,
                medium: snapshot.medium,
                low: snapshot.low,
            },
            today: TodayStats {
                total: snapshot.today_total,
                completed: snapshot.today_completed,
            },
            categories: snapshot.categories,
            weekly,
            upcoming: snapshot.upcoming,
            overdue: snapshot.overdue,
            streak_days,
        }
    }
}

fn weekly_trend(daily: &[DailyCompletions], today: NaiveDate) -> Vec<DailyCompletions> {
    (0..TREND_DAYS)
        .rev()
        .filter_map(|back| today.checked_sub_days(Days::new(back)))
        .map(|date| DailyCompletions {
            date,
            count: daily
                .iter()
                .filter(|d| d.date == date)
                .map(|d| d.count)
                .sum(),
        })
        .collect()
}

/// Distinct days with at least one completion inside the window. Not a
/// consecutive run.
fn streak_days(daily: &[DailyCompletions], today: NaiveDate) -> i64 {
    let Some(window_start) = today.checked_sub_days(Days::new(STREAK_WINDOW_DAYS)) else {
        return 0;
    };

    let mut days: Vec<NaiveDate> = daily
        .iter()
        .filter(|d| d.count > 0 && d.date >= window_start && d.date <= today)
        .map(|d| d.date)
        .collect();
    days.sort_unstable();
    days.dedup();
    days.len() as i64
}
