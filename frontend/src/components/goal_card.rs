use yew::prelude::*;
use shared::render::GoalCardView;
use super::icon::Icon;

#[derive(Properties, PartialEq)]
pub struct GoalsSectionProps {
    pub goals: Vec<GoalCardView>,
}

#[function_component(GoalsSection)]
pub fn goals_section(props: &GoalsSectionProps) -> Html {
    html! {
        <section class="goals-section">
            <h2>{"Savings Goals"}</h2>
            <div class="goals-grid">
                {for props.goals.iter().map(|goal| html! {
                    <GoalCard key={goal.goal_id.clone()} goal={goal.clone()} />
                })}
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct GoalCardProps {
    pub goal: GoalCardView,
}

#[function_component(GoalCard)]
pub fn goal_card(props: &GoalCardProps) -> Html {
    let goal = &props.goal;

    html! {
        <div class={classes!("goal-card", goal.invalid.then_some("invalid"))}>
            <div class="goal-header">
                <div class="goal-icon">
                    <Icon icon={goal.icon} />
                </div>
                <div class="goal-info">
                    <h3 class="goal-name">{&goal.name}</h3>
                    <p class="goal-target">{&goal.target_label}</p>
                </div>
            </div>
            <div class="goal-progress-bar">
                <div class="goal-progress-fill" style={format!("width: {}%", goal.progress_percent)}></div>
            </div>
            <div class="goal-stats">
                <span class="goal-saved">{&goal.saved_label}</span>
                <span class="goal-percentage">{&goal.percentage_label}</span>
            </div>
        </div>
    }
}
