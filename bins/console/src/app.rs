//! Application state and key handling.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent};
use tracing::warn;

use arca_client::{AssetsApi, LiabilitiesApi, ObligationsApi, RestClient, SummaryApi};
use arca_core::assets::{ASSET_TYPES, Asset, AssetForm};
use arca_core::collection::{CollectionEntity, ManagedCollection};
use arca_core::form::FieldError;
use arca_core::liabilities::{LIABILITY_TYPES, Liability, LiabilityForm};
use arca_core::notify::Notices;
use arca_core::obligations::{OBLIGATION_TYPES, Obligation, ObligationForm};
use arca_core::summary::{ManagedSummary, Summary};
use arca_core::theme::ThemeStore;
use arca_shared::{AppConfig, AppError};

/// Top-level pages, one per backend collection plus the summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// Backend-computed portfolio summary.
    Summary,
    /// Income-generating assets.
    Assets,
    /// Debts.
    Liabilities,
    /// Recurring commitments.
    Obligations,
}

impl Page {
    /// All pages in tab order.
    pub const ALL: [Self; 4] = [Self::Summary, Self::Assets, Self::Liabilities, Self::Obligations];

    /// Tab label.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Summary => "Summary",
            Self::Assets => "Assets",
            Self::Liabilities => "Liabilities",
            Self::Obligations => "Obligations",
        }
    }

    const fn next(self) -> Self {
        match self {
            Self::Summary => Self::Assets,
            Self::Assets => Self::Liabilities,
            Self::Liabilities => Self::Obligations,
            Self::Obligations => Self::Summary,
        }
    }

    const fn prev(self) -> Self {
        match self {
            Self::Summary => Self::Obligations,
            Self::Assets => Self::Summary,
            Self::Liabilities => Self::Assets,
            Self::Obligations => Self::Liabilities,
        }
    }
}

/// A form plus its transient UI state.
pub struct FormState<F> {
    /// The string-backed form being edited.
    pub form: F,
    /// Index of the focused field.
    pub focus: usize,
    /// Validation errors from the last rejected submit.
    pub errors: Vec<FieldError>,
}

impl<F> FormState<F> {
    fn new(form: F) -> Self {
        Self {
            form,
            focus: 0,
            errors: Vec::new(),
        }
    }
}

/// The modal layer above the current page.
pub enum Modal {
    /// Nothing open.
    None,
    /// Asset create/edit form.
    AssetForm(FormState<AssetForm>),
    /// Liability create/edit form.
    LiabilityForm(FormState<LiabilityForm>),
    /// Obligation create/edit form.
    ObligationForm(FormState<ObligationForm>),
    /// Delete confirmation prompt.
    ConfirmDelete,
}

/// Field layout of a form as the modal renders it.
///
/// Fields are text inputs unless listed as a choice (cycled with left and
/// right) or a toggle (flipped with space).
pub trait FormModel {
    /// Field labels in display order.
    const LABELS: &'static [&'static str];

    /// Mutable access to the text field at `idx`, if it is one.
    fn text_field_mut(&mut self, idx: usize) -> Option<&mut String>;

    /// Cycles the choice field at `idx`, if it is one.
    fn cycle(&mut self, idx: usize, forward: bool);

    /// Flips the toggle field at `idx`, if it is one.
    fn toggle(&mut self, idx: usize);

    /// Display value of the field at `idx`.
    fn value(&self, idx: usize) -> String;
}

fn cycle_choice(options: &[&str], current: &str, forward: bool) -> String {
    let len = options.len();
    let pos = options.iter().position(|o| *o == current).unwrap_or(0);
    let next = if forward {
        (pos + 1) % len
    } else {
        (pos + len - 1) % len
    };
    options[next].to_string()
}

impl FormModel for AssetForm {
    const LABELS: &'static [&'static str] = &[
        "Name",
        "Type",
        "Current value",
        "Quantity",
        "Yield %",
        "Currency",
    ];

    fn text_field_mut(&mut self, idx: usize) -> Option<&mut String> {
        match idx {
            0 => Some(&mut self.name),
            2 => Some(&mut self.current_value),
            3 => Some(&mut self.quantity),
            4 => Some(&mut self.yield_percentage),
            5 => Some(&mut self.currency),
            _ => None,
        }
    }

    fn cycle(&mut self, idx: usize, forward: bool) {
        if idx == 1 {
            self.asset_type = cycle_choice(ASSET_TYPES, &self.asset_type, forward);
        }
    }

    fn toggle(&mut self, _idx: usize) {}

    fn value(&self, idx: usize) -> String {
        match idx {
            0 => self.name.clone(),
            1 => self.asset_type.clone(),
            2 => self.current_value.clone(),
            3 => self.quantity.clone(),
            4 => self.yield_percentage.clone(),
            5 => self.currency.clone(),
            _ => String::new(),
        }
    }
}

impl FormModel for LiabilityForm {
    const LABELS: &'static [&'static str] = &[
        "Name",
        "Type",
        "Current balance",
        "Monthly payment",
        "Interest rate %",
        "Creditor",
        "Secured",
        "End date",
    ];

    fn text_field_mut(&mut self, idx: usize) -> Option<&mut String> {
        match idx {
            0 => Some(&mut self.name),
            2 => Some(&mut self.current_balance),
            3 => Some(&mut self.monthly_payment),
            4 => Some(&mut self.interest_rate),
            5 => Some(&mut self.creditor),
            7 => Some(&mut self.end_date),
            _ => None,
        }
    }

    fn cycle(&mut self, idx: usize, forward: bool) {
        if idx == 1 {
            self.liability_type = cycle_choice(LIABILITY_TYPES, &self.liability_type, forward);
        }
    }

    fn toggle(&mut self, idx: usize) {
        if idx == 6 {
            self.is_secured = !self.is_secured;
        }
    }

    fn value(&self, idx: usize) -> String {
        match idx {
            0 => self.name.clone(),
            1 => self.liability_type.clone(),
            2 => self.current_balance.clone(),
            3 => self.monthly_payment.clone(),
            4 => self.interest_rate.clone(),
            5 => self.creditor.clone(),
            6 => if self.is_secured { "yes" } else { "no" }.to_string(),
            7 => self.end_date.clone(),
            _ => String::new(),
        }
    }
}

impl FormModel for ObligationForm {
    const LABELS: &'static [&'static str] =
        &["Name", "Type", "Monthly amount", "Beneficiary", "End date"];

    fn text_field_mut(&mut self, idx: usize) -> Option<&mut String> {
        match idx {
            0 => Some(&mut self.name),
            2 => Some(&mut self.monthly_amount),
            3 => Some(&mut self.beneficiary),
            4 => Some(&mut self.end_date),
            _ => None,
        }
    }

    fn cycle(&mut self, idx: usize, forward: bool) {
        if idx == 1 {
            self.obligation_type = cycle_choice(OBLIGATION_TYPES, &self.obligation_type, forward);
        }
    }

    fn toggle(&mut self, _idx: usize) {}

    fn value(&self, idx: usize) -> String {
        match idx {
            0 => self.name.clone(),
            1 => self.obligation_type.clone(),
            2 => self.monthly_amount.clone(),
            3 => self.beneficiary.clone(),
            4 => self.end_date.clone(),
            _ => String::new(),
        }
    }
}

/// Whole-application state.
pub struct App {
    /// Active page.
    pub page: Page,
    /// Persisted theme preference.
    pub theme: ThemeStore,
    /// Shared notice feed.
    pub notices: Notices,
    /// Managed assets collection.
    pub assets: ManagedCollection<Asset>,
    /// Managed liabilities collection.
    pub liabilities: ManagedCollection<Liability>,
    /// Managed obligations collection.
    pub obligations: ManagedCollection<Obligation>,
    /// Cached portfolio summary.
    pub summary: ManagedSummary,
    /// Current search term for the active page.
    pub search: String,
    /// Whether keystrokes feed the search box.
    pub searching: bool,
    /// Selected row on the active page.
    pub selected: usize,
    /// Modal layer.
    pub modal: Modal,
    /// Visible asset rows after filtering.
    pub asset_rows: Vec<Asset>,
    /// Visible liability rows after filtering.
    pub liability_rows: Vec<Liability>,
    /// Visible obligation rows after filtering.
    pub obligation_rows: Vec<Obligation>,
    /// Last loaded summary.
    pub summary_view: Option<Arc<Summary>>,
    /// Load failure for the active page, shown with a retry hint.
    pub load_error: Option<AppError>,
    /// Set when the user asks to exit.
    pub should_quit: bool,
}

impl App {
    /// Wires the application together from configuration.
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        let rest = RestClient::new(&config.api)?;
        let notices = Notices::new();

        Ok(Self {
            page: Page::Summary,
            theme: ThemeStore::open(&config.ui.theme_file),
            assets: ManagedCollection::new(Arc::new(AssetsApi::new(rest.clone())), notices.clone()),
            liabilities: ManagedCollection::new(
                Arc::new(LiabilitiesApi::new(rest.clone())),
                notices.clone(),
            ),
            obligations: ManagedCollection::new(
                Arc::new(ObligationsApi::new(rest.clone())),
                notices.clone(),
            ),
            summary: ManagedSummary::new(Arc::new(SummaryApi::new(rest))),
            notices,
            search: String::new(),
            searching: false,
            selected: 0,
            modal: Modal::None,
            asset_rows: Vec::new(),
            liability_rows: Vec::new(),
            obligation_rows: Vec::new(),
            summary_view: None,
            load_error: None,
            should_quit: false,
        })
    }

    /// Number of rows on the active page.
    #[must_use]
    pub fn row_count(&self) -> usize {
        match self.page {
            Page::Summary => 0,
            Page::Assets => self.asset_rows.len(),
            Page::Liabilities => self.liability_rows.len(),
            Page::Obligations => self.obligation_rows.len(),
        }
    }

    /// Reloads the active page from the cache (fetching when stale).
    pub async fn reload(&mut self) {
        self.load_error = None;
        match self.page {
            Page::Summary => match self.summary.load().await {
                Ok(summary) => self.summary_view = Some(summary),
                Err(err) => self.load_error = Some(err),
            },
            Page::Assets => match self.assets.visible(&self.search).await {
                Ok(rows) => self.asset_rows = rows,
                Err(err) => self.load_error = Some(err),
            },
            Page::Liabilities => match self.liabilities.visible(&self.search).await {
                Ok(rows) => self.liability_rows = rows,
                Err(err) => self.load_error = Some(err),
            },
            Page::Obligations => match self.obligations.visible(&self.search).await {
                Ok(rows) => self.obligation_rows = rows,
                Err(err) => self.load_error = Some(err),
            },
        }
        let count = self.row_count();
        if count == 0 {
            self.selected = 0;
        } else if self.selected >= count {
            self.selected = count - 1;
        }
    }

    fn switch_page(&mut self, page: Page) {
        self.page = page;
        self.search.clear();
        self.searching = false;
        self.selected = 0;
    }

    /// Routes one key press.
    pub async fn handle_key(&mut self, key: KeyEvent) {
        let modal = std::mem::replace(&mut self.modal, Modal::None);
        match modal {
            Modal::None => self.handle_page_key(key).await,
            Modal::ConfirmDelete => self.handle_confirm_key(key).await,
            Modal::AssetForm(state) => self.handle_asset_form_key(key, state).await,
            Modal::LiabilityForm(state) => self.handle_liability_form_key(key, state).await,
            Modal::ObligationForm(state) => self.handle_obligation_form_key(key, state).await,
        }
    }

    async fn handle_page_key(&mut self, key: KeyEvent) {
        if self.searching {
            match key.code {
                KeyCode::Esc => {
                    self.searching = false;
                    self.search.clear();
                    self.reload().await;
                }
                KeyCode::Enter => self.searching = false,
                KeyCode::Backspace => {
                    self.search.pop();
                    self.reload().await;
                }
                KeyCode::Char(c) => {
                    self.search.push(c);
                    self.reload().await;
                }
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::Right => {
                self.switch_page(self.page.next());
                self.reload().await;
            }
            KeyCode::BackTab | KeyCode::Left => {
                self.switch_page(self.page.prev());
                self.reload().await;
            }
            KeyCode::Char('/') if self.page != Page::Summary => {
                self.searching = true;
                self.search.clear();
            }
            KeyCode::Char('t') => {
                if let Err(err) = self.theme.toggle() {
                    self.notices.error(err.to_string());
                }
            }
            KeyCode::Char('r') => {
                self.invalidate_page().await;
                self.reload().await;
            }
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => {
                if self.selected + 1 < self.row_count() {
                    self.selected += 1;
                }
            }
            KeyCode::Char('n') => self.open_create(),
            KeyCode::Char('e') => self.open_edit(),
            KeyCode::Char('d') => self.request_delete(),
            _ => {}
        }
    }

    async fn invalidate_page(&mut self) {
        match self.page {
            Page::Summary => self.summary.invalidate().await,
            Page::Assets => self.assets.invalidate().await,
            Page::Liabilities => self.liabilities.invalidate().await,
            Page::Obligations => self.obligations.invalidate().await,
        }
    }

    fn open_create(&mut self) {
        match self.page {
            Page::Summary => {}
            Page::Assets => {
                self.assets.open_create();
                if let Some(draft) = self.assets.session().draft() {
                    self.modal = Modal::AssetForm(FormState::new(AssetForm::from_draft(draft)));
                }
            }
            Page::Liabilities => {
                self.liabilities.open_create();
                if let Some(draft) = self.liabilities.session().draft() {
                    self.modal =
                        Modal::LiabilityForm(FormState::new(LiabilityForm::from_draft(draft)));
                }
            }
            Page::Obligations => {
                self.obligations.open_create();
                if let Some(draft) = self.obligations.session().draft() {
                    self.modal =
                        Modal::ObligationForm(FormState::new(ObligationForm::from_draft(draft)));
                }
            }
        }
    }

    fn open_edit(&mut self) {
        match self.page {
            Page::Summary => {}
            Page::Assets => {
                if let Some(record) = self.asset_rows.get(self.selected).cloned() {
                    self.assets.open_edit(&record);
                    if let Some(draft) = self.assets.session().draft() {
                        self.modal = Modal::AssetForm(FormState::new(AssetForm::from_draft(draft)));
                    }
                }
            }
            Page::Liabilities => {
                if let Some(record) = self.liability_rows.get(self.selected).cloned() {
                    self.liabilities.open_edit(&record);
                    if let Some(draft) = self.liabilities.session().draft() {
                        self.modal =
                            Modal::LiabilityForm(FormState::new(LiabilityForm::from_draft(draft)));
                    }
                }
            }
            Page::Obligations => {
                if let Some(record) = self.obligation_rows.get(self.selected).cloned() {
                    self.obligations.open_edit(&record);
                    if let Some(draft) = self.obligations.session().draft() {
                        self.modal = Modal::ObligationForm(FormState::new(
                            ObligationForm::from_draft(draft),
                        ));
                    }
                }
            }
        }
    }

    fn request_delete(&mut self) {
        match self.page {
            Page::Summary => {}
            Page::Assets => {
                if let Some(record) = self.asset_rows.get(self.selected) {
                    self.assets.request_delete(record.id());
                    self.modal = Modal::ConfirmDelete;
                }
            }
            Page::Liabilities => {
                if let Some(record) = self.liability_rows.get(self.selected) {
                    self.liabilities.request_delete(record.id());
                    self.modal = Modal::ConfirmDelete;
                }
            }
            Page::Obligations => {
                if let Some(record) = self.obligation_rows.get(self.selected) {
                    self.obligations.request_delete(record.id());
                    self.modal = Modal::ConfirmDelete;
                }
            }
        }
    }

    async fn handle_confirm_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Enter => {
                let deleted = match self.page {
                    Page::Summary => Ok(()),
                    Page::Assets => self.assets.confirm_delete().await,
                    Page::Liabilities => self.liabilities.confirm_delete().await,
                    Page::Obligations => self.obligations.confirm_delete().await,
                };
                if deleted.is_ok() {
                    self.summary.invalidate().await;
                }
                self.reload().await;
            }
            KeyCode::Char('n') | KeyCode::Esc => match self.page {
                Page::Summary => {}
                Page::Assets => self.assets.decline_delete(),
                Page::Liabilities => self.liabilities.decline_delete(),
                Page::Obligations => self.obligations.decline_delete(),
            },
            _ => self.modal = Modal::ConfirmDelete,
        }
    }

    async fn handle_asset_form_key(&mut self, key: KeyEvent, mut state: FormState<AssetForm>) {
        match form_key(&mut state, key) {
            FormAction::Keep => self.modal = Modal::AssetForm(state),
            FormAction::Cancel => self.assets.cancel(),
            FormAction::Submit => match state.form.parse() {
                Ok(draft) => {
                    if self.assets.submit(&draft).await.is_ok() {
                        self.summary.invalidate().await;
                        self.reload().await;
                    } else {
                        self.modal = Modal::AssetForm(state);
                    }
                }
                Err(errors) => {
                    warn!(count = errors.len(), "form rejected");
                    state.errors = errors;
                    self.modal = Modal::AssetForm(state);
                }
            },
        }
    }

    async fn handle_liability_form_key(
        &mut self,
        key: KeyEvent,
        mut state: FormState<LiabilityForm>,
    ) {
        match form_key(&mut state, key) {
            FormAction::Keep => self.modal = Modal::LiabilityForm(state),
            FormAction::Cancel => self.liabilities.cancel(),
            FormAction::Submit => match state.form.parse() {
                Ok(draft) => {
                    if self.liabilities.submit(&draft).await.is_ok() {
                        self.summary.invalidate().await;
                        self.reload().await;
                    } else {
                        self.modal = Modal::LiabilityForm(state);
                    }
                }
                Err(errors) => {
                    warn!(count = errors.len(), "form rejected");
                    state.errors = errors;
                    self.modal = Modal::LiabilityForm(state);
                }
            },
        }
    }

    async fn handle_obligation_form_key(
        &mut self,
        key: KeyEvent,
        mut state: FormState<ObligationForm>,
    ) {
        match form_key(&mut state, key) {
            FormAction::Keep => self.modal = Modal::ObligationForm(state),
            FormAction::Cancel => self.obligations.cancel(),
            FormAction::Submit => match state.form.parse() {
                Ok(draft) => {
                    if self.obligations.submit(&draft).await.is_ok() {
                        self.summary.invalidate().await;
                        self.reload().await;
                    } else {
                        self.modal = Modal::ObligationForm(state);
                    }
                }
                Err(errors) => {
                    warn!(count = errors.len(), "form rejected");
                    state.errors = errors;
                    self.modal = Modal::ObligationForm(state);
                }
            },
        }
    }
}

enum FormAction {
    Keep,
    Cancel,
    Submit,
}

/// Applies one key to an open form; Enter submits and Esc cancels.
fn form_key<F: FormModel>(state: &mut FormState<F>, key: KeyEvent) -> FormAction {
    let fields = F::LABELS.len();
    match key.code {
        KeyCode::Esc => return FormAction::Cancel,
        KeyCode::Enter => return FormAction::Submit,
        KeyCode::Tab | KeyCode::Down => state.focus = (state.focus + 1) % fields,
        KeyCode::BackTab | KeyCode::Up => state.focus = (state.focus + fields - 1) % fields,
        KeyCode::Left => state.form.cycle(state.focus, false),
        KeyCode::Right => state.form.cycle(state.focus, true),
        KeyCode::Backspace => {
            if let Some(field) = state.form.text_field_mut(state.focus) {
                field.pop();
            }
        }
        KeyCode::Char(' ') => {
            state.form.toggle(state.focus);
            if let Some(field) = state.form.text_field_mut(state.focus) {
                field.push(' ');
            }
        }
        KeyCode::Char(c) => {
            if let Some(field) = state.form.text_field_mut(state.focus) {
                field.push(c);
            }
        }
        _ => {}
    }
    FormAction::Keep
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_cycle_is_closed() {
        let mut page = Page::Summary;
        for _ in 0..Page::ALL.len() {
            page = page.next();
        }
        assert_eq!(page, Page::Summary);
        assert_eq!(Page::Assets.prev(), Page::Summary);
    }

    #[test]
    fn test_cycle_choice_wraps() {
        assert_eq!(cycle_choice(&["a", "b", "c"], "c", true), "a");
        assert_eq!(cycle_choice(&["a", "b", "c"], "a", false), "c");
        // Unknown current value resets to the first option's neighbour.
        assert_eq!(cycle_choice(&["a", "b", "c"], "zzz", true), "b");
    }

    #[test]
    fn test_form_key_edits_focused_text_field() {
        let mut state = FormState::new(ObligationForm::default());
        for c in "Rent".chars() {
            let _ = form_key(&mut state, KeyEvent::from(KeyCode::Char(c)));
        }
        assert_eq!(state.form.name, "Rent");

        let _ = form_key(&mut state, KeyEvent::from(KeyCode::Backspace));
        assert_eq!(state.form.name, "Ren");
    }

    #[test]
    fn test_form_key_cycles_choice_field() {
        let mut state = FormState::new(ObligationForm::default());
        let _ = form_key(&mut state, KeyEvent::from(KeyCode::Tab));
        assert_eq!(state.focus, 1);

        let _ = form_key(&mut state, KeyEvent::from(KeyCode::Right));
        assert_eq!(state.form.obligation_type, "Kids Education");
        let _ = form_key(&mut state, KeyEvent::from(KeyCode::Left));
        assert_eq!(state.form.obligation_type, "Other");
    }

    #[test]
    fn test_liability_form_toggle() {
        let mut state = FormState::new(LiabilityForm::default());
        state.focus = 6;
        let _ = form_key(&mut state, KeyEvent::from(KeyCode::Char(' ')));
        assert!(state.form.is_secured);
    }
}
