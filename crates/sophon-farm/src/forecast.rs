// Copyright 2026 Boundless Foundation, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Linear projection of rewards to fixed calendar dates.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

use crate::rewards::RewardsSummary;

/// Projected totals at one forecast date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastRow {
    /// The forecast date, at midnight UTC
    pub date: NaiveDate,
    /// Whole days from now; negative for dates in the past
    pub days: i64,
    /// Projected rewards held by the queried wallets
    pub wallet_total: f64,
    /// Projected points emitted by the farm
    pub total_emitted: f64,
    /// `wallet_total` as a percentage of `total_emitted`
    pub share: f64,
}

/// Whole days from `now` until midnight UTC on `date`, rounded toward negative infinity.
pub fn days_until(date: NaiveDate, now: DateTime<Utc>) -> i64 {
    let delta = date.and_time(NaiveTime::MIN).and_utc() - now;
    let days = delta.num_days();
    if delta < Duration::days(days) {
        days - 1
    } else {
        days
    }
}

/// Extrapolate the current totals linearly to `date`.
pub fn project(summary: &RewardsSummary, date: NaiveDate, now: DateTime<Utc>) -> ForecastRow {
    let days = days_until(date, now);
    let total_emitted = summary.lifetime_rewards + summary.daily_emission * days as f64;
    let wallet_total = summary.wallet_rewards + summary.wallet_daily * days as f64;
    let share = if total_emitted != 0.0 {
        wallet_total / total_emitted * 100.0
    } else {
        tracing::warn!("Projected emission for {date} is zero; reporting a 0% share");
        0.0
    };

    ForecastRow { date, days, wallet_total, total_emitted, share }
}

/// Project the summary to each date, keeping the input order.
pub fn forecast(
    summary: &RewardsSummary,
    dates: &[NaiveDate],
    now: DateTime<Utc>,
) -> Vec<ForecastRow> {
    dates.iter().map(|date| project(summary, *date, now)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn summary() -> RewardsSummary {
        RewardsSummary {
            wallet_rewards: 1_000.0,
            lifetime_rewards: 100_000.0,
            wallet_daily: 50.0,
            daily_emission: 5_000.0,
        }
    }

    #[test]
    fn days_are_floored() {
        let now = Utc.with_ymd_and_hms(2024, 9, 1, 12, 0, 0).unwrap();

        assert_eq!(days_until(date(2024, 10, 1), now), 29);
        assert_eq!(days_until(date(2024, 9, 2), now), 0);
        assert_eq!(days_until(date(2024, 9, 1), now), -1);
        assert_eq!(days_until(date(2024, 8, 1), now), -32);

        let midnight = Utc.with_ymd_and_hms(2024, 9, 1, 0, 0, 0).unwrap();
        assert_eq!(days_until(date(2024, 9, 1), midnight), 0);
        assert_eq!(days_until(date(2024, 8, 31), midnight), -1);
    }

    #[test]
    fn projection_is_linear() {
        let now = Utc.with_ymd_and_hms(2024, 9, 1, 0, 0, 0).unwrap();
        let row = project(&summary(), date(2024, 9, 11), now);

        assert_eq!(row.days, 10);
        assert_eq!(row.total_emitted, 150_000.0);
        assert_eq!(row.wallet_total, 1_500.0);
        assert!((row.share - 1.0).abs() < 1e-12);
    }

    #[test]
    fn past_dates_retrodict() {
        let now = Utc.with_ymd_and_hms(2024, 9, 11, 0, 0, 0).unwrap();
        let row = project(&summary(), date(2024, 9, 1), now);

        assert_eq!(row.days, -10);
        assert_eq!(row.total_emitted, 50_000.0);
        assert_eq!(row.wallet_total, 500.0);
    }

    #[test]
    fn zero_day_share_matches_summary() {
        let now = Utc.with_ymd_and_hms(2024, 9, 1, 0, 0, 0).unwrap();
        let summary = summary();
        let row = project(&summary, date(2024, 9, 1), now);

        assert_eq!(row.days, 0);
        assert_eq!(row.share, summary.rewards_share());
    }

    #[test]
    fn no_emission_is_guarded() {
        let now = Utc.with_ymd_and_hms(2024, 9, 1, 0, 0, 0).unwrap();
        let row = project(&RewardsSummary::default(), date(2024, 12, 1), now);

        assert_eq!(row.total_emitted, 0.0);
        assert_eq!(row.share, 0.0);
    }

    #[test]
    fn negative_projection_keeps_ratio() {
        let summary = RewardsSummary {
            wallet_rewards: 10.0,
            lifetime_rewards: 100.0,
            wallet_daily: 1.0,
            daily_emission: 10.0,
        };
        let now = Utc.with_ymd_and_hms(2024, 9, 21, 0, 0, 0).unwrap();
        let row = project(&summary, date(2024, 9, 1), now);

        assert_eq!(row.days, -20);
        assert_eq!(row.wallet_total, -10.0);
        assert_eq!(row.total_emitted, -100.0);
        assert!((row.share - 10.0).abs() < 1e-12);
    }

    #[test]
    fn forecast_keeps_date_order() {
        let now = Utc.with_ymd_and_hms(2024, 9, 1, 0, 0, 0).unwrap();
        let dates = [date(2025, 1, 1), date(2024, 10, 1)];
        let rows = forecast(&summary(), &dates, now);

        assert_eq!(rows.iter().map(|r| r.date).collect::<Vec<_>>(), dates);
        assert_eq!(rows[1].days, 30);
    }
}
