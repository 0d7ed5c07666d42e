//! # Dashboard
//!
//! The explicit state container owned by the top-level application. It holds
//! the data set, the view state and both overlay controllers, and turns user
//! intents into state changes plus a list of [`Effect`]s for the presentation
//! layer (which regions to repaint, which timers to start, where to navigate).
//!
//! ## Flow
//!
//! 1. [`Dashboard::initialize`] renders every region once.
//! 2. Each user action becomes a [`UserIntent`] passed to [`Dashboard::dispatch`].
//! 3. The presentation layer repaints the regions named in the returned effects.

use chrono::{DateTime, Local, Timelike, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::actions::{ActionOutcome, ActionService};
use crate::config::DashboardConfig;
use crate::data::DashboardData;
use crate::error::{DashboardError, DashboardResult};
use crate::forms::{FormKind, FormSubmission};
use crate::modal::{ActionIntent, ClickTarget, Modal, ModalController};
use crate::models::IconKey;
use crate::notifications::{NoticeId, NoticeKind, NotificationCenter};
use crate::render::{
    render_accounts, render_goals, render_header, render_spending_chart, render_transactions,
    AccountCardView, ChartView, GoalCardView, HeaderView, TransactionGroupView,
};
use crate::view_state::{BalanceToggleView, ViewState};

/// Source of the current local time
pub type Clock = fn() -> DateTime<Local>;

pub fn system_clock() -> DateTime<Local> {
    Local::now()
}

/// Pages outside the dashboard reachable from quick actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationTarget {
    Bills,
    Statements,
    Cards,
    Notifications,
    Login,
}

impl NavigationTarget {
    pub fn href(&self) -> &'static str {
        match self {
            NavigationTarget::Bills => "bills.html",
            NavigationTarget::Statements => "statements.html",
            NavigationTarget::Cards => "cards.html",
            NavigationTarget::Notifications => "notifications.html",
            NavigationTarget::Login => "login.html",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuickAction {
    Transfer,
    Pay,
    Bills,
    AddPayee,
    Statements,
    Cards,
    Notifications,
    Chat,
    AddGoal,
    LogOut,
}

impl QuickAction {
    /// The quick-action grid, in display order. Log out lives in the user menu.
    pub const GRID: [QuickAction; 9] = [
        QuickAction::Transfer,
        QuickAction::Pay,
        QuickAction::Bills,
        QuickAction::AddPayee,
        QuickAction::Statements,
        QuickAction::Cards,
        QuickAction::Notifications,
        QuickAction::Chat,
        QuickAction::AddGoal,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            QuickAction::Transfer => "Transfer",
            QuickAction::Pay => "Pay",
            QuickAction::Bills => "Bills",
            QuickAction::AddPayee => "Add Payee",
            QuickAction::Statements => "Statements",
            QuickAction::Cards => "Cards",
            QuickAction::Notifications => "Alerts",
            QuickAction::Chat => "Chat",
            QuickAction::AddGoal => "New Goal",
            QuickAction::LogOut => "Log out",
        }
    }

    pub fn icon(&self) -> IconKey {
        match self {
            QuickAction::Transfer => IconKey::ArrowLeftRight,
            QuickAction::Pay => IconKey::Send,
            QuickAction::Bills => IconKey::Receipt,
            QuickAction::AddPayee => IconKey::UserPlus,
            QuickAction::Statements => IconKey::FileText,
            QuickAction::Cards => IconKey::CreditCard,
            QuickAction::Notifications => IconKey::Bell,
            QuickAction::Chat => IconKey::MessageCircle,
            QuickAction::AddGoal => IconKey::Target,
            QuickAction::LogOut => IconKey::LogOut,
        }
    }
}

/// Everything the user can do on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UserIntent {
    ToggleBalances,
    ToggleUserMenu,
    /// A click anywhere outside the user menu
    CloseUserMenu,
    OpenTransfer { account_id: String },
    OpenPayment { account_id: String },
    OpenTransactionDetail { transaction_id: String },
    QuickAction(QuickAction),
    ModalAction { intent: ActionIntent, submission: FormSubmission },
    OverlayClick(ClickTarget),
    /// Close button on a notice, or its display timer elapsing
    DismissNotice(NoticeId),
}

/// Independently repaintable parts of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Region {
    Header,
    Accounts,
    Goals,
    Transactions,
    Chart,
    Modal,
    Notices,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationIntent {
    pub target: NavigationTarget,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Effect {
    Rerender(Region),
    /// Start the display timer for a new notice
    ScheduleNoticeExpiry { id: NoticeId, after_ms: u64 },
    Navigate(NavigationIntent),
}

/// Accounts region: the balance toggle button plus one card per account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountsSectionView {
    pub balance_toggle: BalanceToggleView,
    pub cards: Vec<AccountCardView>,
}

/// The whole page, as produced by the one-time initialization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub header: HeaderView,
    pub accounts: AccountsSectionView,
    pub goals: Vec<GoalCardView>,
    pub transactions: Vec<TransactionGroupView>,
    pub chart: ChartView,
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    data: DashboardData,
    config: DashboardConfig,
    view_state: ViewState,
    modal: ModalController,
    notifications: NotificationCenter,
    actions: ActionService,
    clock: Clock,
}

impl Dashboard {
    pub fn new(data: DashboardData, config: DashboardConfig) -> Self {
        Self::with_clock(data, config, system_clock)
    }

    pub fn with_clock(data: DashboardData, config: DashboardConfig, clock: Clock) -> Self {
        Self {
            notifications: NotificationCenter::new(),
            actions: ActionService::new(config.clone()),
            view_state: ViewState::new(),
            modal: ModalController::new(),
            data,
            config,
            clock,
        }
    }

    /// Sample data relative to the clock's current time
    pub fn sample(config: DashboardConfig, clock: Clock) -> Self {
        let data = DashboardData::sample(clock().naive_local());
        Self::with_clock(data, config, clock)
    }

    /// Render every region once
    pub fn initialize(&self) -> DashboardView {
        let view = self.view();
        info!(
            "Dashboard initialized: {} accounts, {} goals, {} transaction groups",
            view.accounts.cards.len(),
            view.goals.len(),
            view.transactions.len()
        );
        view
    }

    pub fn view(&self) -> DashboardView {
        DashboardView {
            header: self.render_header(),
            accounts: self.render_accounts(),
            goals: self.render_goals(),
            transactions: self.render_transactions(),
            chart: self.render_chart(),
        }
    }

    pub fn render_header(&self) -> HeaderView {
        render_header(&self.config.user, &self.view_state, (self.clock)().hour())
    }

    pub fn render_accounts(&self) -> AccountsSectionView {
        AccountsSectionView {
            balance_toggle: self.view_state.balance_toggle(),
            cards: render_accounts(&self.data.accounts, &self.view_state, &self.config),
        }
    }

    pub fn render_goals(&self) -> Vec<GoalCardView> {
        render_goals(&self.data.goals)
    }

    pub fn render_transactions(&self) -> Vec<TransactionGroupView> {
        render_transactions(&self.data.transactions, self.today())
    }

    pub fn render_chart(&self) -> ChartView {
        render_spending_chart(&self.data.spending)
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view_state
    }

    pub fn modal(&self) -> Option<&Modal> {
        self.modal.current()
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    pub fn data(&self) -> &DashboardData {
        &self.data
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    fn today(&self) -> chrono::NaiveDate {
        (self.clock)().date_naive()
    }

    fn now_utc(&self) -> DateTime<Utc> {
        (self.clock)().with_timezone(&Utc)
    }

    /// Apply one user intent and report what changed.
    pub fn dispatch(&mut self, intent: UserIntent) -> Vec<Effect> {
        debug!("Dispatching {:?}", intent);
        match intent {
            UserIntent::ToggleBalances => {
                let hidden = self.view_state.toggle_balances();
                debug!("Balances hidden: {}", hidden);
                vec![Effect::Rerender(Region::Accounts)]
            }
            UserIntent::ToggleUserMenu => {
                self.view_state.toggle_user_menu();
                vec![Effect::Rerender(Region::Header)]
            }
            UserIntent::CloseUserMenu => {
                if self.view_state.user_menu_open {
                    self.view_state.close_user_menu();
                    vec![Effect::Rerender(Region::Header)]
                } else {
                    Vec::new()
                }
            }
            UserIntent::OpenTransfer { account_id } => self.open_transfer(&account_id),
            UserIntent::OpenPayment { account_id } => self.open_payment(&account_id),
            UserIntent::OpenTransactionDetail { transaction_id } => self.open_transaction_detail(&transaction_id),
            UserIntent::QuickAction(action) => self.quick_action(action),
            UserIntent::ModalAction { intent, submission } => self.modal_action(intent, &submission),
            UserIntent::OverlayClick(target) => {
                if self.modal.click(&mut self.view_state, target) {
                    vec![Effect::Rerender(Region::Modal)]
                } else {
                    Vec::new()
                }
            }
            UserIntent::DismissNotice(id) => {
                if self.notifications.dismiss(id) {
                    vec![Effect::Rerender(Region::Notices)]
                } else {
                    Vec::new()
                }
            }
        }
    }

    pub fn toggle_balances(&mut self) -> AccountsSectionView {
        self.dispatch(UserIntent::ToggleBalances);
        self.render_accounts()
    }

    pub fn close_modal(&mut self) -> Vec<Effect> {
        self.modal.close(&mut self.view_state);
        vec![Effect::Rerender(Region::Modal)]
    }

    pub fn notify(&mut self, kind: NoticeKind, message: &str, description: Option<String>) -> Vec<Effect> {
        let id = self.notifications.notify(kind, message, description, self.now_utc());
        vec![
            Effect::Rerender(Region::Notices),
            Effect::ScheduleNoticeExpiry { id, after_ms: self.config.notice_display_ms },
        ]
    }

    fn fail(&mut self, error: DashboardError) -> Vec<Effect> {
        warn!("Action failed: {}", error);
        let headline = error.headline();
        self.notify(NoticeKind::Error, headline, Some(error.to_string()))
    }

    fn open(&mut self, modal: Modal) -> Vec<Effect> {
        self.modal.open(&mut self.view_state, modal);
        vec![Effect::Rerender(Region::Modal)]
    }

    fn open_transfer(&mut self, account_id: &str) -> Vec<Effect> {
        match self.data.account(account_id) {
            Ok(account) => {
                let modal = self.actions.transfer_modal(account, &self.data.accounts);
                self.view_state.selected_account_id = Some(account_id.to_string());
                self.open(modal)
            }
            Err(e) => self.fail(e),
        }
    }

    fn open_payment(&mut self, account_id: &str) -> Vec<Effect> {
        match self.data.account(account_id) {
            Ok(account) => {
                let modal = self.actions.payment_modal(account, &self.data.payees);
                self.view_state.selected_account_id = Some(account_id.to_string());
                self.open(modal)
            }
            Err(e) => self.fail(e),
        }
    }

    fn open_transaction_detail(&mut self, transaction_id: &str) -> Vec<Effect> {
        let today = self.today();
        match self.data.transaction(transaction_id) {
            Ok(transaction) => {
                let modal = self.actions.transaction_detail_modal(transaction, today);
                self.open(modal)
            }
            Err(e) => self.fail(e),
        }
    }

    fn quick_action(&mut self, action: QuickAction) -> Vec<Effect> {
        let first_account = self.data.accounts.first().map(|account| account.id.clone());
        match action {
            QuickAction::Transfer => first_account.map(|id| self.open_transfer(&id)).unwrap_or_default(),
            QuickAction::Pay => first_account.map(|id| self.open_payment(&id)).unwrap_or_default(),
            QuickAction::AddPayee => {
                let modal = self.actions.add_payee_modal();
                self.open(modal)
            }
            QuickAction::AddGoal => {
                let modal = self.actions.add_goal_modal();
                self.open(modal)
            }
            QuickAction::Chat => self.notify(
                NoticeKind::Info,
                "Chat Support",
                Some("Connecting to support agent...".to_string()),
            ),
            QuickAction::Bills => navigate(NavigationTarget::Bills),
            QuickAction::Statements => navigate(NavigationTarget::Statements),
            QuickAction::Cards => navigate(NavigationTarget::Cards),
            QuickAction::Notifications => navigate(NavigationTarget::Notifications),
            QuickAction::LogOut => {
                self.view_state.close_user_menu();
                navigate(NavigationTarget::Login)
            }
        }
    }

    fn modal_action(&mut self, intent: ActionIntent, submission: &FormSubmission) -> Vec<Effect> {
        let outcome = match intent {
            ActionIntent::CloseModal => return self.close_modal(),
            ActionIntent::ReportIssue { transaction_id } => self.report_issue(&transaction_id),
            ActionIntent::SubmitTransfer { from_account_id } => self
                .data
                .account(&from_account_id)
                .and_then(|_| self.submit_form(FormKind::Transfer, submission)),
            ActionIntent::SubmitPayment { from_account_id } => self
                .data
                .account(&from_account_id)
                .and_then(|_| self.submit_form(FormKind::Payment, submission)),
            ActionIntent::SubmitAddPayee => self.submit_form(FormKind::AddPayee, submission),
            ActionIntent::SubmitAddGoal => self.submit_form(FormKind::AddGoal, submission),
        };

        match outcome {
            Ok(Some(outcome)) => {
                let mut effects = self.close_modal();
                effects.extend(self.notify(outcome.kind, &outcome.message, outcome.description));
                effects
            }
            Ok(None) => Vec::new(),
            // The modal stays open so the user can correct the form
            Err(e) => self.fail(e),
        }
    }

    /// Validate the open form. `Ok(None)` when no matching form is open.
    fn submit_form(&self, kind: FormKind, submission: &FormSubmission) -> DashboardResult<Option<ActionOutcome>> {
        let form = match self.modal.current().and_then(Modal::form) {
            Some(form) if form.kind == kind => form,
            _ => {
                warn!("Ignoring {:?} submission: form is not open", kind);
                return Ok(None);
            }
        };

        let outcome = match kind {
            FormKind::Transfer => self.actions.submit_transfer(form, submission)?,
            FormKind::Payment => self.actions.submit_payment(form, submission)?,
            FormKind::AddPayee => self.actions.submit_add_payee(form, submission)?,
            FormKind::AddGoal => self.actions.submit_add_goal(form, submission)?,
        };
        Ok(Some(outcome))
    }

    fn report_issue(&self, transaction_id: &str) -> DashboardResult<Option<ActionOutcome>> {
        let transaction = self.data.transaction(transaction_id)?;
        info!("Issue reported for transaction {}", transaction.id);
        Ok(Some(ActionOutcome {
            kind: NoticeKind::Info,
            message: "Issue reported".to_string(),
            description: Some(format!("We'll look into your {} transaction", transaction.merchant)),
        }))
    }
}

fn navigate(target: NavigationTarget) -> Vec<Effect> {
    info!("Navigating to {}", target.href());
    vec![Effect::Navigate(NavigationIntent { target, href: target.href().to_string() })]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{FIELD_AMOUNT, FIELD_GOAL_NAME, FIELD_TARGET_AMOUNT, FIELD_TO_ACCOUNT};
    use chrono::TimeZone;

    fn fixed_clock() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 10, 19, 10, 30, 0).unwrap()
    }

    fn create_test_dashboard() -> Dashboard {
        Dashboard::sample(DashboardConfig::default(), fixed_clock)
    }

    fn success_notices(dashboard: &Dashboard) -> Vec<&crate::notifications::Notice> {
        dashboard
            .notifications()
            .notices()
            .iter()
            .filter(|notice| notice.kind == NoticeKind::Success)
            .collect()
    }

    #[test]
    fn test_initialize_renders_every_region() {
        let view = create_test_dashboard().initialize();

        assert_eq!(view.header.greeting, "Good morning, Julie");
        assert_eq!(view.accounts.cards.len(), 3);
        assert_eq!(view.accounts.balance_toggle.label, "Hide balances");
        assert_eq!(view.goals.len(), 3);
        assert_eq!(view.chart.labels.len(), 4);

        let labels: Vec<&str> = view.transactions.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec!["Today", "Yesterday", "17 Oct", "14 Oct"]);
        assert_eq!(view.transactions[0].rows[0].merchant, "Harrods");
        assert_eq!(view.transactions[0].rows[1].merchant, "Caffè Nero");
    }

    #[test]
    fn test_toggle_twice_renders_same_accounts() {
        let mut dashboard = create_test_dashboard();
        let before = dashboard.render_accounts();

        let hidden = dashboard.toggle_balances();
        assert!(hidden.cards.iter().all(|card| card.balance_display == "••••••"));
        assert_eq!(hidden.balance_toggle.label, "Show balances");

        let restored = dashboard.toggle_balances();
        assert_eq!(restored, before);
        assert!(!dashboard.view_state().balances_hidden);
    }

    #[test]
    fn test_toggle_only_repaints_accounts() {
        let mut dashboard = create_test_dashboard();
        let effects = dashboard.dispatch(UserIntent::ToggleBalances);
        assert_eq!(effects, vec![Effect::Rerender(Region::Accounts)]);
    }

    #[test]
    fn test_opening_second_modal_replaces_first() {
        let mut dashboard = create_test_dashboard();
        dashboard.dispatch(UserIntent::OpenTransfer { account_id: "acc_001".to_string() });
        dashboard.dispatch(UserIntent::QuickAction(QuickAction::AddGoal));

        assert_eq!(dashboard.modal().unwrap().title, "Create Savings Goal");
        assert!(dashboard.view_state().modal_open);
    }

    #[test]
    fn test_transfer_with_empty_amount_keeps_modal_open() {
        let mut dashboard = create_test_dashboard();
        dashboard.dispatch(UserIntent::OpenTransfer { account_id: "acc_001".to_string() });

        dashboard.dispatch(UserIntent::ModalAction {
            intent: ActionIntent::SubmitTransfer { from_account_id: "acc_001".to_string() },
            submission: FormSubmission::new().with(FIELD_TO_ACCOUNT, "acc_002").with(FIELD_AMOUNT, ""),
        });

        assert!(dashboard.view_state().modal_open);
        assert_eq!(dashboard.notifications().count_of(NoticeKind::Error), 1);
        let notice = &dashboard.notifications().notices()[0];
        assert_eq!(notice.message, "Please fill in all required fields");
    }

    #[test]
    fn test_transfer_below_minimum_amount_keeps_modal_open() {
        let mut dashboard = create_test_dashboard();
        dashboard.dispatch(UserIntent::OpenTransfer { account_id: "acc_001".to_string() });

        dashboard.dispatch(UserIntent::ModalAction {
            intent: ActionIntent::SubmitTransfer { from_account_id: "acc_001".to_string() },
            submission: FormSubmission::new().with(FIELD_TO_ACCOUNT, "acc_002").with(FIELD_AMOUNT, "0.001"),
        });

        assert!(dashboard.view_state().modal_open);
        assert!(success_notices(&dashboard).is_empty());
        let notice = &dashboard.notifications().notices()[0];
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.description.as_deref(), Some("Amount must be at least £0.01"));
    }

    #[test]
    fn test_valid_transfer_closes_modal_and_notifies_once() {
        let mut dashboard = create_test_dashboard();
        let accounts_before = dashboard.data().accounts.clone();
        let transactions_before = dashboard.data().transactions.len();
        dashboard.dispatch(UserIntent::OpenTransfer { account_id: "acc_001".to_string() });

        let effects = dashboard.dispatch(UserIntent::ModalAction {
            intent: ActionIntent::SubmitTransfer { from_account_id: "acc_001".to_string() },
            submission: FormSubmission::new().with(FIELD_TO_ACCOUNT, "acc_002").with(FIELD_AMOUNT, "50.00"),
        });

        assert!(!dashboard.view_state().modal_open);
        assert!(dashboard.modal().is_none());
        let successes = success_notices(&dashboard);
        assert_eq!(successes.len(), 1);
        assert!(successes[0].description.as_deref().unwrap().contains("£50.00"));
        assert!(effects
            .iter()
            .any(|effect| matches!(effect, Effect::ScheduleNoticeExpiry { after_ms: 4000, .. })));

        // Simulated flow: nothing in the data set changes
        assert_eq!(dashboard.data().accounts, accounts_before);
        assert_eq!(dashboard.data().transactions.len(), transactions_before);
    }

    #[test]
    fn test_unknown_account_surfaces_error_without_modal() {
        let mut dashboard = create_test_dashboard();
        dashboard.dispatch(UserIntent::OpenPayment { account_id: "acc_404".to_string() });

        assert!(dashboard.modal().is_none());
        assert!(!dashboard.view_state().modal_open);
        let notice = &dashboard.notifications().notices()[0];
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.message, "Account unavailable");
    }

    #[test]
    fn test_unknown_transaction_keeps_current_modal() {
        let mut dashboard = create_test_dashboard();
        dashboard.dispatch(UserIntent::QuickAction(QuickAction::AddPayee));
        dashboard.dispatch(UserIntent::OpenTransactionDetail { transaction_id: "txn_999".to_string() });

        assert_eq!(dashboard.modal().unwrap().title, "Add New Payee");
        assert_eq!(dashboard.notifications().count_of(NoticeKind::Error), 1);
    }

    #[test]
    fn test_submission_without_open_form_is_ignored() {
        let mut dashboard = create_test_dashboard();
        let effects = dashboard.dispatch(UserIntent::ModalAction {
            intent: ActionIntent::SubmitAddGoal,
            submission: FormSubmission::new().with(FIELD_GOAL_NAME, "Boat").with(FIELD_TARGET_AMOUNT, "10"),
        });

        assert!(effects.is_empty());
        assert!(dashboard.notifications().is_empty());
    }

    #[test]
    fn test_backdrop_click_closes_modal() {
        let mut dashboard = create_test_dashboard();
        dashboard.dispatch(UserIntent::OpenTransactionDetail { transaction_id: "txn_003".to_string() });
        assert!(dashboard.view_state().modal_open);

        assert!(dashboard.dispatch(UserIntent::OverlayClick(ClickTarget::Body)).is_empty());
        dashboard.dispatch(UserIntent::OverlayClick(ClickTarget::Backdrop));

        assert!(!dashboard.view_state().modal_open);
    }

    #[test]
    fn test_report_issue_closes_detail_and_notifies() {
        let mut dashboard = create_test_dashboard();
        dashboard.dispatch(UserIntent::OpenTransactionDetail { transaction_id: "txn_002".to_string() });
        dashboard.dispatch(UserIntent::ModalAction {
            intent: ActionIntent::ReportIssue { transaction_id: "txn_002".to_string() },
            submission: FormSubmission::new(),
        });

        assert!(dashboard.modal().is_none());
        let notice = &dashboard.notifications().notices()[0];
        assert_eq!(notice.kind, NoticeKind::Info);
        assert_eq!(notice.message, "Issue reported");
    }

    #[test]
    fn test_navigation_quick_actions() {
        let mut dashboard = create_test_dashboard();
        let effects = dashboard.dispatch(UserIntent::QuickAction(QuickAction::Statements));

        assert_eq!(
            effects,
            vec![Effect::Navigate(NavigationIntent {
                target: NavigationTarget::Statements,
                href: "statements.html".to_string(),
            })]
        );
    }

    #[test]
    fn test_transfer_quick_action_uses_first_account() {
        let mut dashboard = create_test_dashboard();
        dashboard.dispatch(UserIntent::QuickAction(QuickAction::Transfer));

        assert_eq!(dashboard.view_state().selected_account_id.as_deref(), Some("acc_001"));
        assert_eq!(dashboard.modal().unwrap().title, "Transfer Money");
    }

    #[test]
    fn test_transfer_quick_action_without_accounts_is_a_no_op() {
        let mut data = DashboardData::sample(fixed_clock().naive_local());
        data.accounts.clear();
        let mut dashboard = Dashboard::with_clock(data, DashboardConfig::default(), fixed_clock);

        assert!(dashboard.dispatch(UserIntent::QuickAction(QuickAction::Pay)).is_empty());
        assert!(dashboard.modal().is_none());
    }

    #[test]
    fn test_quick_action_grid_icons_are_distinct() {
        let mut icons: Vec<&str> = QuickAction::GRID.iter().map(|action| action.icon().as_str()).collect();
        icons.sort();
        icons.dedup();
        assert_eq!(icons.len(), QuickAction::GRID.len());
        assert!(!QuickAction::GRID.contains(&QuickAction::LogOut));
    }

    #[test]
    fn test_chat_support_notice() {
        let mut dashboard = create_test_dashboard();
        dashboard.dispatch(UserIntent::QuickAction(QuickAction::Chat));

        let notice = &dashboard.notifications().notices()[0];
        assert_eq!(notice.kind, NoticeKind::Info);
        assert_eq!(notice.description.as_deref(), Some("Connecting to support agent..."));
    }

    #[test]
    fn test_dismiss_notice_twice() {
        let mut dashboard = create_test_dashboard();
        dashboard.dispatch(UserIntent::QuickAction(QuickAction::Chat));
        let id = dashboard.notifications().notices()[0].id;

        let first = dashboard.dispatch(UserIntent::DismissNotice(id));
        let second = dashboard.dispatch(UserIntent::DismissNotice(id));

        assert_eq!(first, vec![Effect::Rerender(Region::Notices)]);
        assert!(second.is_empty());
    }

    #[test]
    fn test_each_notice_schedules_its_own_dismissal() {
        let mut dashboard = create_test_dashboard();
        let first = dashboard.dispatch(UserIntent::QuickAction(QuickAction::Chat));
        let second = dashboard.dispatch(UserIntent::QuickAction(QuickAction::Chat));
        let ids: Vec<NoticeId> = dashboard.notifications().notices().iter().map(|n| n.id).collect();

        assert!(first.contains(&Effect::ScheduleNoticeExpiry { id: ids[0], after_ms: 4000 }));
        assert!(second.contains(&Effect::ScheduleNoticeExpiry { id: ids[1], after_ms: 4000 }));

        // The first timer elapsing leaves the second notice on screen
        dashboard.dispatch(UserIntent::DismissNotice(ids[0]));
        assert_eq!(dashboard.notifications().len(), 1);
        assert_eq!(dashboard.notifications().notices()[0].id, ids[1]);
    }

    #[test]
    fn test_user_menu_and_log_out() {
        let mut dashboard = create_test_dashboard();
        dashboard.dispatch(UserIntent::ToggleUserMenu);
        assert!(dashboard.render_header().user_menu.is_some());

        let effects = dashboard.dispatch(UserIntent::QuickAction(QuickAction::LogOut));
        assert!(matches!(
            &effects[0],
            Effect::Navigate(NavigationIntent { target: NavigationTarget::Login, .. })
        ));
        assert!(dashboard.render_header().user_menu.is_none());
        assert!(dashboard.dispatch(UserIntent::CloseUserMenu).is_empty());
    }
}
