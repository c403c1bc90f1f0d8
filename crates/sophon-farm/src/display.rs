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

//! Plain-text rendering of the rewards report.

use colored::Colorize;
use tabled::{builder::Builder, settings::Style};

use crate::{
    forecast::ForecastRow,
    rewards::{PoolEmission, RewardsReport, RewardsSummary},
};

/// Unit the farm's points are reported in.
pub const POINTS_SYMBOL: &str = "SP";

const RULE_WIDTH: usize = 70;

fn rule(c: char) -> String {
    c.to_string().repeat(RULE_WIDTH)
}

// Title between two heavy rules.
fn section(title: &str) -> Vec<String> {
    vec![rule('='), title.bold().to_string(), rule('=')]
}

/// Format a number with `decimals` fractional digits and `,` between thousands.
pub fn format_grouped(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Current and daily rewards for each wallet.
pub fn render_wallets(report: &RewardsReport) -> String {
    let mut lines = vec![String::new()];
    lines.extend(section(&format!("Rewards per wallet (in {POINTS_SYMBOL}):")));
    lines.push(format!("{:<42} {:>12} {:>12}", "Address", "Rewards", "Daily"));
    lines.push(rule('-'));
    for wallet in &report.wallets {
        lines.push(format!(
            "{:<42} {:>12.1} {:>12.1}",
            wallet.address.to_checksum(None),
            wallet.current_rewards,
            wallet.daily_accrual
        ));
    }
    lines.join("\n")
}

/// Wallet totals compared with the whole farm.
pub fn render_summary(summary: &RewardsSummary) -> String {
    let mut lines = vec![String::new()];
    lines.extend(section("Summary"));
    lines.push(format!(
        "{POINTS_SYMBOL} combined (%): {} {POINTS_SYMBOL} ({:.2}%)",
        format_grouped(summary.wallet_rewards, 0),
        summary.rewards_share()
    ));
    lines.push(format!(
        "Total {POINTS_SYMBOL} Points : {} {POINTS_SYMBOL}",
        format_grouped(summary.lifetime_rewards, 0)
    ));
    lines.push(String::new());
    lines.push(format!(
        "Daily {POINTS_SYMBOL} combined (%): {} {POINTS_SYMBOL} ({:.2}%)",
        format_grouped(summary.wallet_daily, 0),
        summary.daily_share()
    ));
    lines.push(format!(
        "Total Daily {POINTS_SYMBOL}: {} {POINTS_SYMBOL}",
        format_grouped(summary.daily_emission, 0)
    ));
    lines.push(rule('='));
    lines.join("\n")
}

/// Projected totals at each forecast date.
pub fn render_forecast(rows: &[ForecastRow]) -> String {
    let mut lines = vec![String::new(), "Forecast".bold().to_string(), rule('=')];
    lines.push(format!(
        "{:<12} {:>15} {:>12} {:>20}",
        "Date",
        format!("My {POINTS_SYMBOL} Total"),
        format!("% of My {POINTS_SYMBOL}"),
        format!("Total {POINTS_SYMBOL} Emitted")
    ));
    lines.push(rule('-'));
    for row in rows {
        lines.push(format!(
            "{:<12} {:>15} {:>11.2}% {:>20}",
            row.date.format("%Y-%m-%d").to_string(),
            format_grouped(row.wallet_total, 0),
            row.share,
            format_grouped(row.total_emitted, 0)
        ));
    }
    lines.push(rule('='));
    lines.join("\n")
}

/// Per-pool allocation and emission.
pub fn render_pools(pools: &[PoolEmission]) -> String {
    let mut builder = Builder::default();
    builder.push_record([
        "Pool".to_string(),
        "Description".to_string(),
        "Alloc Points".to_string(),
        "Deposited".to_string(),
        format!("Lifetime {POINTS_SYMBOL}"),
        format!("Daily {POINTS_SYMBOL}"),
    ]);
    for pool in pools {
        builder.push_record([
            pool.pid.to_string(),
            pool.description.clone(),
            pool.alloc_point.to_string(),
            format_grouped(pool.deposited, 2),
            format_grouped(pool.total_rewards, 0),
            format_grouped(pool.daily_emission, 1),
        ]);
    }

    let table = builder.build().with(Style::modern()).to_string();
    format!("\n{}\n{table}", "Pools".bold())
}

/// The full report: wallets, optional pool breakdown, summary and forecast.
pub fn render_report(report: &RewardsReport, forecast: &[ForecastRow], show_pools: bool) -> String {
    let mut sections = vec![render_wallets(report)];
    if show_pools {
        sections.push(render_pools(&report.pools));
    }
    sections.push(render_summary(&report.summary));
    sections.push(render_forecast(forecast));
    sections.join("\n")
}
