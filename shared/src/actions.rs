//! Action handlers for the modal flows: transfer, payment, add payee and add
//! savings goal.
//!
//! The service builds the modal for each flow and validates what comes back.
//! A successful submission only produces a success notice: balances are not
//! updated and no transaction row is added.

use chrono::NaiveDate;
use tracing::info;

use crate::config::DashboardConfig;
use crate::error::DashboardResult;
use crate::formatting::format_currency;
use crate::forms::{FieldSpec, FormKind, FormSpec, FormSubmission, SelectOption};
use crate::modal::{ActionIntent, ButtonStyle, Modal, ModalAction, ModalContent};
use crate::models::{Account, Payee, Transaction};
use crate::notifications::NoticeKind;
use crate::render::render_transaction_detail;

pub const FIELD_FROM: &str = "from";
pub const FIELD_TO_ACCOUNT: &str = "toAccount";
pub const FIELD_AMOUNT: &str = "amount";
pub const FIELD_REFERENCE: &str = "reference";
pub const FIELD_PAYEE: &str = "payee";
pub const FIELD_PAYEE_NAME: &str = "payeeName";
pub const FIELD_ACCOUNT_NUMBER: &str = "accountNumber";
pub const FIELD_SORT_CODE: &str = "sortCode";
pub const FIELD_GOAL_NAME: &str = "goalName";
pub const FIELD_TARGET_AMOUNT: &str = "targetAmount";
pub const FIELD_GOAL_ICON: &str = "goalIcon";

/// The notice shown once a flow completes
#[derive(Debug, Clone, PartialEq)]
pub struct ActionOutcome {
    pub kind: NoticeKind,
    pub message: String,
    pub description: Option<String>,
}

impl ActionOutcome {
    pub fn success(message: &str, description: String) -> Self {
        Self { kind: NoticeKind::Success, message: message.to_string(), description: Some(description) }
    }
}

/// Builds and validates the modal forms
#[derive(Debug, Clone, PartialEq)]
pub struct ActionService {
    config: DashboardConfig,
}

impl ActionService {
    pub fn new(config: DashboardConfig) -> Self {
        Self { config }
    }

    fn amount_field(&self, name: &str, label: &str) -> FieldSpec {
        FieldSpec::amount(name, label, self.config.min_amount, self.config.amount_step)
    }

    pub fn transfer_modal(&self, from: &Account, accounts: &[Account]) -> Modal {
        let destinations = accounts
            .iter()
            .filter(|account| account.id != from.id)
            .map(|account| SelectOption::new(account.id.clone(), account.name.clone()))
            .collect();

        Modal {
            title: "Transfer Money".to_string(),
            content: ModalContent::Form(FormSpec {
                kind: FormKind::Transfer,
                fields: vec![
                    FieldSpec::read_only(
                        FIELD_FROM,
                        "From",
                        format!("{} - {}", from.name, format_currency(from.balance)),
                    ),
                    FieldSpec::select(FIELD_TO_ACCOUNT, "To", Some("Select account..."), destinations),
                    self.amount_field(FIELD_AMOUNT, "Amount"),
                    FieldSpec::text(FIELD_REFERENCE, "Reference (optional)", "Enter reference").optional(),
                ],
            }),
            actions: vec![
                ModalAction::cancel("Cancel"),
                ModalAction::primary(
                    "Continue",
                    ActionIntent::SubmitTransfer { from_account_id: from.id.clone() },
                ),
            ],
        }
    }

    pub fn payment_modal(&self, from: &Account, payees: &[Payee]) -> Modal {
        let options = payees
            .iter()
            .map(|payee| SelectOption::new(payee.id.clone(), payee.name.clone()))
            .collect();

        Modal {
            title: "Make a Payment".to_string(),
            content: ModalContent::Form(FormSpec {
                kind: FormKind::Payment,
                fields: vec![
                    FieldSpec::read_only(FIELD_FROM, "From", from.name.clone()),
                    FieldSpec::select(FIELD_PAYEE, "Pay to", Some("Select payee..."), options),
                    self.amount_field(FIELD_AMOUNT, "Amount"),
                    FieldSpec::text(FIELD_REFERENCE, "Reference", "Enter reference"),
                ],
            }),
            actions: vec![
                ModalAction::cancel("Cancel"),
                ModalAction::primary(
                    "Pay Now",
                    ActionIntent::SubmitPayment { from_account_id: from.id.clone() },
                ),
            ],
        }
    }

    pub fn add_payee_modal(&self) -> Modal {
        Modal {
            title: "Add New Payee".to_string(),
            content: ModalContent::Form(FormSpec {
                kind: FormKind::AddPayee,
                fields: vec![
                    FieldSpec::text(FIELD_PAYEE_NAME, "Payee Name", "Enter payee name"),
                    FieldSpec::text(FIELD_ACCOUNT_NUMBER, "Account Number", "12345678")
                        .max_length(self.config.account_number_max_length),
                    FieldSpec::text(FIELD_SORT_CODE, "Sort Code", "12-34-56")
                        .max_length(self.config.sort_code_max_length),
                    FieldSpec::text(FIELD_REFERENCE, "Reference (optional)", "Enter reference").optional(),
                ],
            }),
            actions: vec![
                ModalAction::cancel("Cancel"),
                ModalAction::primary("Add Payee", ActionIntent::SubmitAddPayee),
            ],
        }
    }

    pub fn add_goal_modal(&self) -> Modal {
        let icons = [
            ("plane", "Holiday"),
            ("home", "House"),
            ("car", "Car"),
            ("graduation-cap", "Education"),
            ("heart", "Wedding"),
        ]
        .into_iter()
        .map(|(value, label)| SelectOption::new(value, label))
        .collect();

        Modal {
            title: "Create Savings Goal".to_string(),
            content: ModalContent::Form(FormSpec {
                kind: FormKind::AddGoal,
                fields: vec![
                    FieldSpec::text(FIELD_GOAL_NAME, "Goal Name", "e.g., Holiday Fund"),
                    self.amount_field(FIELD_TARGET_AMOUNT, "Target Amount"),
                    FieldSpec::select(FIELD_GOAL_ICON, "Icon", None, icons).optional(),
                ],
            }),
            actions: vec![
                ModalAction::cancel("Cancel"),
                ModalAction::primary("Create Goal", ActionIntent::SubmitAddGoal),
            ],
        }
    }

    pub fn transaction_detail_modal(&self, transaction: &Transaction, today: NaiveDate) -> Modal {
        Modal {
            title: "Transaction Details".to_string(),
            content: ModalContent::TransactionDetail(render_transaction_detail(transaction, today)),
            actions: vec![
                ModalAction::cancel("Close"),
                ModalAction {
                    label: "Report Issue".to_string(),
                    style: ButtonStyle::Danger,
                    intent: ActionIntent::ReportIssue { transaction_id: transaction.id.clone() },
                },
            ],
        }
    }

    pub fn submit_transfer(&self, form: &FormSpec, submission: &FormSubmission) -> DashboardResult<ActionOutcome> {
        let validated = form.validate(submission)?;
        let amount = validated.amount(FIELD_AMOUNT).unwrap_or_default();
        info!(
            "Simulated transfer of {} to {}",
            format_currency(amount),
            validated.text(FIELD_TO_ACCOUNT).unwrap_or_default()
        );
        Ok(ActionOutcome::success(
            "Transfer successful",
            format!("{} transferred successfully", format_currency(amount)),
        ))
    }

    pub fn submit_payment(&self, form: &FormSpec, submission: &FormSubmission) -> DashboardResult<ActionOutcome> {
        let validated = form.validate(submission)?;
        let amount = validated.amount(FIELD_AMOUNT).unwrap_or_default();
        info!(
            "Simulated payment of {} to {}",
            format_currency(amount),
            validated.text(FIELD_PAYEE).unwrap_or_default()
        );
        Ok(ActionOutcome::success(
            "Payment successful",
            format!("{} paid successfully", format_currency(amount)),
        ))
    }

    pub fn submit_add_payee(&self, form: &FormSpec, submission: &FormSubmission) -> DashboardResult<ActionOutcome> {
        let validated = form.validate(submission)?;
        let name = validated.text(FIELD_PAYEE_NAME).unwrap_or_default();
        info!("Simulated new payee '{}'", name);
        Ok(ActionOutcome::success("Payee added successfully", format!("{} can now receive payments", name)))
    }

    pub fn submit_add_goal(&self, form: &FormSpec, submission: &FormSubmission) -> DashboardResult<ActionOutcome> {
        let validated = form.validate(submission)?;
        let name = validated.text(FIELD_GOAL_NAME).unwrap_or_default();
        let target = validated.amount(FIELD_TARGET_AMOUNT).unwrap_or_default();
        info!("Simulated savings goal '{}' with target {}", name, format_currency(target));
        Ok(ActionOutcome::success(
            "Savings goal created",
            format!("{} with a target of {}", name, format_currency(target)),
        ))
    }
}

impl Default for ActionService {
    fn default() -> Self {
        Self::new(DashboardConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DashboardData;
    use crate::error::{DashboardError, ValidationError};
    use crate::forms::FieldKind;
    use chrono::NaiveDateTime;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 10, 19).unwrap().and_hms_opt(12, 0, 0).unwrap()
    }

    fn create_test_service() -> ActionService {
        ActionService::default()
    }

    #[test]
    fn test_transfer_form_excludes_source_account() {
        let data = DashboardData::sample(now());
        let modal = create_test_service().transfer_modal(&data.accounts[0], &data.accounts);
        let form = modal.form().unwrap();

        let to = form.field(FIELD_TO_ACCOUNT).unwrap();
        match &to.kind {
            FieldKind::Select { options } => {
                let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
                assert_eq!(values, vec!["acc_002", "acc_003"]);
            }
            other => panic!("unexpected field kind {:?}", other),
        }
        assert!(matches!(
            &form.field(FIELD_FROM).unwrap().kind,
            FieldKind::ReadOnly { value } if value == "Premier Current Account - £4,987,543.26"
        ));
        assert!(matches!(
            form.field(FIELD_AMOUNT).unwrap().kind,
            FieldKind::Number { min, step } if min == 0.01 && step == 0.01
        ));
        assert!(!form.field(FIELD_REFERENCE).unwrap().required);
    }

    #[test]
    fn test_submit_transfer_success_message() {
        let data = DashboardData::sample(now());
        let service = create_test_service();
        let modal = service.transfer_modal(&data.accounts[0], &data.accounts);
        let submission = FormSubmission::new().with(FIELD_TO_ACCOUNT, "acc_002").with(FIELD_AMOUNT, "50.00");

        let outcome = service.submit_transfer(modal.form().unwrap(), &submission).unwrap();

        assert_eq!(outcome.kind, NoticeKind::Success);
        assert_eq!(outcome.message, "Transfer successful");
        assert_eq!(outcome.description.as_deref(), Some("£50.00 transferred successfully"));
    }

    #[test]
    fn test_submit_transfer_empty_amount() {
        let data = DashboardData::sample(now());
        let service = create_test_service();
        let modal = service.transfer_modal(&data.accounts[0], &data.accounts);
        let submission = FormSubmission::new().with(FIELD_TO_ACCOUNT, "acc_002");

        let result = service.submit_transfer(modal.form().unwrap(), &submission);

        assert!(matches!(
            result,
            Err(DashboardError::Validation(ValidationError::MissingField(label))) if label == "Amount"
        ));
    }

    #[test]
    fn test_payment_requires_reference() {
        let data = DashboardData::sample(now());
        let service = create_test_service();
        let modal = service.payment_modal(&data.accounts[0], &data.payees);
        let submission = FormSubmission::new().with(FIELD_PAYEE, "emma").with(FIELD_AMOUNT, "12.5");

        let result = service.submit_payment(modal.form().unwrap(), &submission);
        assert!(matches!(result, Err(DashboardError::Validation(ValidationError::MissingField(_)))));

        let submission = submission.with(FIELD_REFERENCE, "Dinner");
        let outcome = service.submit_payment(modal.form().unwrap(), &submission).unwrap();
        assert_eq!(outcome.description.as_deref(), Some("£12.50 paid successfully"));
    }

    #[test]
    fn test_add_payee_account_number_length() {
        let service = create_test_service();
        let modal = service.add_payee_modal();
        let submission = FormSubmission::new()
            .with(FIELD_PAYEE_NAME, "Ada Lovelace")
            .with(FIELD_ACCOUNT_NUMBER, "123456789")
            .with(FIELD_SORT_CODE, "12-34-56");

        let result = service.submit_add_payee(modal.form().unwrap(), &submission);
        assert!(matches!(result, Err(DashboardError::Validation(ValidationError::FieldTooLong(_, 8)))));

        let submission = submission.with(FIELD_ACCOUNT_NUMBER, "12345678");
        let outcome = service.submit_add_payee(modal.form().unwrap(), &submission).unwrap();
        assert_eq!(outcome.message, "Payee added successfully");
    }

    #[test]
    fn test_add_goal() {
        let service = create_test_service();
        let modal = service.add_goal_modal();
        let submission = FormSubmission::new()
            .with(FIELD_GOAL_NAME, "Boat")
            .with(FIELD_TARGET_AMOUNT, "2500")
            .with(FIELD_GOAL_ICON, "plane");

        let outcome = service.submit_add_goal(modal.form().unwrap(), &submission).unwrap();
        assert_eq!(outcome.message, "Savings goal created");
        assert_eq!(outcome.description.as_deref(), Some("Boat with a target of £2,500.00"));

        let zero = FormSubmission::new().with(FIELD_GOAL_NAME, "Boat").with(FIELD_TARGET_AMOUNT, "0");
        let result = service.submit_add_goal(modal.form().unwrap(), &zero);
        assert!(matches!(result, Err(DashboardError::Validation(ValidationError::AmountNotPositive(_)))));
    }

    #[test]
    fn test_transaction_detail_actions() {
        let data = DashboardData::sample(now());
        let modal = create_test_service().transaction_detail_modal(&data.transactions[0], now().date());

        assert_eq!(modal.title, "Transaction Details");
        assert!(modal.form().is_none());
        assert_eq!(modal.actions[0].intent, ActionIntent::CloseModal);
        assert_eq!(
            modal.actions[1].intent,
            ActionIntent::ReportIssue { transaction_id: "txn_001".to_string() }
        );
    }
}
