use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{DashboardError, DashboardResult};
use crate::formatting::format_currency;
use crate::models::{IconKey, SavingsGoal};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalCardView {
    pub goal_id: String,
    pub name: String,
    pub icon: IconKey,
    pub target_label: String,
    /// Progress bar fill, 0..=100
    pub progress_percent: u8,
    pub saved_label: String,
    pub percentage_label: String,
    /// Set when the goal has no usable target and progress could not be computed
    pub invalid: bool,
}

/// `round(saved / target * 100)` clamped to 0..=100.
///
/// A goal without a positive target has no defined progress.
pub fn goal_progress(goal: &SavingsGoal) -> DashboardResult<u8> {
    if !(goal.target > 0.0) || !goal.target.is_finite() || !goal.saved.is_finite() {
        return Err(DashboardError::DivideByZeroGoal(goal.id.clone()));
    }
    let percent = (goal.saved / goal.target * 100.0).round().clamp(0.0, 100.0);
    Ok(percent as u8)
}

pub fn render_goals(goals: &[SavingsGoal]) -> Vec<GoalCardView> {
    goals.iter().map(render_goal).collect()
}

fn render_goal(goal: &SavingsGoal) -> GoalCardView {
    let (progress_percent, invalid) = match goal_progress(goal) {
        Ok(percent) => (percent, false),
        Err(e) => {
            warn!("Rendering goal without progress: {}", e);
            (0, true)
        }
    };

    GoalCardView {
        goal_id: goal.id.clone(),
        name: goal.name.clone(),
        icon: goal.icon,
        target_label: format!("Target: {}", format_currency(goal.target)),
        progress_percent,
        saved_label: format_currency(goal.saved),
        percentage_label: format!("{}%", progress_percent),
        invalid,
    }
}
