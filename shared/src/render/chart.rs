use serde::{Deserialize, Serialize};

use crate::formatting::format_currency;
use crate::models::SpendingSummary;

pub const DOUGHNUT_CUTOUT_PERCENT: u8 = 70;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartLegendEntry {
    pub label: String,
    pub amount_label: String,
    pub color: String,
    pub share_percent: u8,
}

/// Dataset for the spending doughnut: labels and magnitudes in the same order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartView {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub colors: Vec<String>,
    pub cutout_percent: u8,
    pub total_label: String,
    pub legend: Vec<ChartLegendEntry>,
}

impl ChartView {
    /// Tooltip text for a hovered slice
    pub fn tooltip(value: f64) -> String {
        format!("£{:.2}", value)
    }

    pub fn is_empty(&self) -> bool {
        self.values.iter().all(|value| *value == 0.0)
    }
}

pub fn render_spending_chart(summary: &SpendingSummary) -> ChartView {
    let total = summary.total();
    let legend = summary
        .slices
        .iter()
        .map(|slice| ChartLegendEntry {
            label: slice.label.clone(),
            amount_label: format_currency(slice.amount),
            color: slice.tone.foreground().to_string(),
            share_percent: if total > 0.0 {
                (slice.amount.abs() / total * 100.0).round() as u8
            } else {
                0
            },
        })
        .collect();

    ChartView {
        labels: summary.slices.iter().map(|slice| slice.label.clone()).collect(),
        values: summary.slices.iter().map(|slice| slice.amount.abs()).collect(),
        colors: summary.slices.iter().map(|slice| slice.tone.foreground().to_string()).collect(),
        cutout_percent: DOUGHNUT_CUTOUT_PERCENT,
        total_label: format_currency(total),
        legend,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DashboardData;
    use chrono::NaiveDate;

    #[test]
    fn test_chart_keeps_label_order() {
        let now = NaiveDate::from_ymd_opt(2025, 10, 19).unwrap().and_hms_opt(12, 0, 0).unwrap();
        let chart = render_spending_chart(&DashboardData::sample(now).spending);

        assert_eq!(chart.labels, vec!["Groceries", "Transport", "Dining", "Bills"]);
        assert_eq!(chart.values, vec![345.80, 180.50, 265.00, 450.00]);
        assert_eq!(chart.colors[0], "#3B82F6");
        assert_eq!(chart.total_label, "£1,241.30");
        assert_eq!(chart.cutout_percent, 70);
    }

    #[test]
    fn test_empty_summary() {
        let chart = render_spending_chart(&SpendingSummary::default());
        assert!(chart.is_empty());
        assert_eq!(chart.total_label, "£0.00");
    }

    #[test]
    fn test_tooltip_format() {
        assert_eq!(ChartView::tooltip(345.8), "£345.80");
    }
}
