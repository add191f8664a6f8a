use ratatui::style::Color;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::ledger::LedgerStore;
use crate::models::Theme;
use crate::money::{saturating_sum, MoneyFormat};

pub(crate) const CHART_TITLE: &str = "Distribuição de Gastos";

/// Everything the pie chart widget needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ChartData {
    pub(crate) title: &'static str,
    pub(crate) labels: Vec<String>,
    pub(crate) values: Vec<Decimal>,
    pub(crate) colors: Vec<Color>,
    pub(crate) title_color: Color,
    pub(crate) legend_color: Color,
    pub(crate) money: MoneyFormat,
}

/// One legend row.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Slice<'a> {
    pub(crate) label: &'a str,
    pub(crate) color: Color,
    pub(crate) share: f64,
}

pub(crate) fn project(
    ledger: &LedgerStore,
    colors: &[Color],
    theme: Theme,
    money: &MoneyFormat,
) -> ChartData {
    let style = theme.style();
    ChartData {
        title: CHART_TITLE,
        labels: ledger.categories().to_vec(),
        values: ledger.amounts().to_vec(),
        colors: colors.to_vec(),
        title_color: style.accent,
        legend_color: style.subtext,
        money: money.clone(),
    }
}

impl ChartData {
    pub(crate) fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub(crate) fn tooltip(&self, index: usize) -> Option<String> {
        let label = self.labels.get(index)?;
        let value = *self.values.get(index)?;
        Some(tooltip_for(label, value, &self.values, &self.money))
    }

    pub(crate) fn slices(&self) -> Vec<Slice<'_>> {
        let shares = shares(&self.values);
        self.labels
            .iter()
            .zip(&self.colors)
            .zip(shares)
            .map(|((label, color), share)| Slice {
                label,
                color: *color,
                share,
            })
            .collect()
    }
}

/// `"{label}: {value} ({percent}%)"` with the percent of the total to one decimal.
///
/// A percent that does not fit in a [`Decimal`] reads as `0.0`.
pub(crate) fn tooltip_for(
    label: &str,
    value: Decimal,
    all_values: &[Decimal],
    money: &MoneyFormat,
) -> String {
    let total = saturating_sum(all_values);
    let percent = if total > Decimal::ZERO {
        value
            .checked_div(total)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .map(|p| p.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero))
            .unwrap_or(Decimal::ZERO)
    } else {
        Decimal::ZERO
    };
    format!("{label}: {} ({percent:.1}%)", money.format(value))
}

/// Fraction of the pie per value. Non-positive values get no area.
pub(crate) fn shares(values: &[Decimal]) -> Vec<f64> {
    let positive = saturating_sum(values.iter().filter(|v| **v > Decimal::ZERO));
    if positive <= Decimal::ZERO {
        return vec![0.0; values.len()];
    }
    values
        .iter()
        .map(|v| {
            if *v > Decimal::ZERO {
                v.checked_div(positive)
                    .and_then(|share| share.to_f64())
                    .unwrap_or(0.0)
            } else {
                0.0
            }
        })
        .collect()
}

/// Index of the slice under `angle`, measured clockwise from 12 o'clock as a
/// fraction of a full turn in `[0, 1)`.
pub(crate) fn slice_at(shares: &[f64], angle: f64) -> Option<usize> {
    let mut acc = 0.0;
    for (i, share) in shares.iter().enumerate() {
        if *share <= 0.0 {
            continue;
        }
        acc += share;
        if angle < acc {
            return Some(i);
        }
    }
    // float rounding can leave the last sliver uncovered
    shares.iter().rposition(|s| *s > 0.0)
}
