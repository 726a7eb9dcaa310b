// ============================================================================
// LIST VIEWMODEL - per-collection CRUD state machine
// ============================================================================
// Owns the in-memory list and the single inline-edit slot. Every list view
// (employees, tea batches) is this machine plus markup.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::RequestError;
use crate::models::{Record, RecordDraft};
use crate::services::{NotificationSink, ResourceApi};

use super::title_case;

/// Inline-edit state. One slot per list: at most one row is ever in
/// `Editing` or `Saving`, which is the whole concurrency story here.
///
/// Transitions: Viewing -> Editing (begin), Editing -> Viewing (cancel),
/// Editing -> Saving -> Viewing (commit ok), Saving -> Editing (commit
/// failed, draft retained so the operator can fix and retry).
#[derive(Clone, PartialEq, Debug)]
pub enum RowEdit<D> {
    Viewing,
    Editing { id: i64, draft: D },
    Saving { id: i64, draft: D },
}

impl<D> RowEdit<D> {
    /// Row currently occupying the slot, if any.
    pub fn busy_id(&self) -> Option<i64> {
        match self {
            RowEdit::Viewing => None,
            RowEdit::Editing { id, .. } | RowEdit::Saving { id, .. } => Some(*id),
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct ListState<T: Record> {
    /// Records in server order; mutated only through the viewmodel.
    pub records: Vec<T>,
    pub edit: RowEdit<T::Draft>,
    pub loading: bool,
    /// Persistent inline fetch error; cleared by the next successful refresh.
    pub error: Option<String>,
}

impl<T: Record> Default for ListState<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            edit: RowEdit::Viewing,
            loading: false,
            error: None,
        }
    }
}

pub struct ListViewModel<T: Record> {
    api: Rc<dyn ResourceApi<T>>,
    notifier: Rc<dyn NotificationSink>,
    on_unauthorized: Rc<dyn Fn()>,
    state: Rc<RefCell<ListState<T>>>,
}

impl<T: Record> Clone for ListViewModel<T> {
    fn clone(&self) -> Self {
        Self {
            api: Rc::clone(&self.api),
            notifier: Rc::clone(&self.notifier),
            on_unauthorized: Rc::clone(&self.on_unauthorized),
            state: Rc::clone(&self.state),
        }
    }
}

impl<T: Record> ListViewModel<T> {
    pub fn new(
        api: Rc<dyn ResourceApi<T>>,
        notifier: Rc<dyn NotificationSink>,
        on_unauthorized: Rc<dyn Fn()>,
    ) -> Self {
        Self {
            api,
            notifier,
            on_unauthorized,
            state: Rc::new(RefCell::new(ListState::default())),
        }
    }

    /// Snapshot for rendering.
    pub fn snapshot(&self) -> ListState<T> {
        self.state.borrow().clone()
    }

    /// Surface a request error and, for 401, fire the re-login redirect.
    fn handle_error(&self, err: &RequestError) {
        self.notifier.error(&err.to_string());
        if err.is_unauthorized() {
            (self.on_unauthorized)();
        }
    }

    /// Fetch the collection and replace the in-memory list. Rejected while a
    /// row is mid-edit: a refresh under an open draft would break the
    /// single-edit invariant. On failure the previous list stays.
    pub async fn refresh(&self) -> Result<(), String> {
        {
            let mut state = self.state.borrow_mut();
            if state.edit.busy_id().is_some() {
                log::warn!("⚠️ Refresh rejected: a {} row is mid-edit", T::resource_name());
                return Err("A row is being edited".into());
            }
            state.loading = true;
        }

        let result = self.api.list().await;

        let mut state = self.state.borrow_mut();
        state.loading = false;
        match result {
            Ok(records) => {
                log::info!("📋 Loaded {} {}s", records.len(), T::resource_name());
                state.records = records;
                state.error = None;
                Ok(())
            }
            Err(err) => {
                state.error = Some(err.to_string());
                drop(state);
                self.handle_error(&err);
                Err(err.to_string())
            }
        }
    }

    /// Snapshot the record into a draft and open the edit slot. Rejected when
    /// another row already holds it; that row is left untouched.
    pub fn begin_edit(&self, id: i64) -> Result<(), String> {
        let mut state = self.state.borrow_mut();
        if let Some(busy) = state.edit.busy_id() {
            return Err(format!("Row {} is already being edited", busy));
        }
        let draft = state
            .records
            .iter()
            .find(|r| r.id() == id)
            .map(|r| r.to_draft())
            .ok_or_else(|| format!("No {} with id {}", T::resource_name(), id))?;
        state.edit = RowEdit::Editing { id, draft };
        Ok(())
    }

    /// Mutate one field of the open draft. The committed list entry is never
    /// touched; a draft mid-save is frozen.
    pub fn update_draft(&self, field: &str, value: &str) -> Result<(), String> {
        match &mut self.state.borrow_mut().edit {
            RowEdit::Editing { draft, .. } => draft.apply_field(field, value),
            _ => Err("No row is being edited".into()),
        }
    }

    /// Discard the draft, no network call. A row in `Saving` cannot be
    /// cancelled - there is no request cancellation.
    pub fn cancel_edit(&self) {
        let mut state = self.state.borrow_mut();
        if matches!(state.edit, RowEdit::Editing { .. }) {
            state.edit = RowEdit::Viewing;
        }
    }

    /// PUT the draft. On success the committed entry becomes the *server's*
    /// record, not the local draft. On failure the row drops back to
    /// `Editing` with the draft intact - no rollback, retry is immediate.
    pub async fn commit_edit(&self) -> Result<(), String> {
        let (id, draft) = {
            let state = self.state.borrow();
            match &state.edit {
                RowEdit::Editing { id, draft } => (*id, draft.clone()),
                _ => return Err("No row is being edited".into()),
            }
        };

        // Typed payload or nothing: an unrepresentable draft never goes out.
        let payload = match draft.to_payload() {
            Ok(payload) => payload,
            Err(msg) => {
                self.notifier.error(&msg);
                return Err(msg);
            }
        };

        self.state.borrow_mut().edit = RowEdit::Saving {
            id,
            draft: draft.clone(),
        };

        match self.api.update(id, &payload).await {
            Ok(updated) => {
                let mut state = self.state.borrow_mut();
                if let Some(entry) = state.records.iter_mut().find(|r| r.id() == id) {
                    *entry = updated;
                }
                state.edit = RowEdit::Viewing;
                drop(state);
                self.notifier
                    .success(&format!("{} updated successfully!", title_case(T::resource_name())));
                Ok(())
            }
            Err(err) => {
                self.state.borrow_mut().edit = RowEdit::Editing { id, draft };
                self.handle_error(&err);
                Err(err.to_string())
            }
        }
    }

    /// Optimistic delete: the row leaves the list before the DELETE is sent.
    /// On failure it is *not* restored - only a refresh reconciles (known
    /// limitation carried over from the original client). On success a
    /// follow-up refresh re-syncs with server truth.
    pub async fn delete_record(&self, id: i64) -> Result<(), String> {
        {
            let mut state = self.state.borrow_mut();
            if state.edit.busy_id() == Some(id) {
                return Err("Row is being edited".into());
            }
            let before = state.records.len();
            state.records.retain(|r| r.id() != id);
            if state.records.len() == before {
                return Err(format!("No {} with id {}", T::resource_name(), id));
            }
        }

        match self.api.remove(id).await {
            Ok(()) => {
                self.notifier
                    .success(&format!("{} deleted successfully!", title_case(T::resource_name())));
                let _ = self.refresh().await;
                Ok(())
            }
            Err(err) => {
                self.handle_error(&err);
                Err(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use futures::executor::block_on;

    use super::*;
    use crate::models::Employee;
    use crate::viewmodels::testing::{MockApi, RecordingSink};

    struct Fixture {
        api: Rc<MockApi<Employee>>,
        sink: Rc<RecordingSink>,
        redirects: Rc<Cell<usize>>,
        vm: ListViewModel<Employee>,
    }

    fn fixture() -> Fixture {
        let api = Rc::new(MockApi::<Employee>::default());
        let sink = Rc::new(RecordingSink::default());
        let redirects = Rc::new(Cell::new(0));
        let hook = {
            let redirects = Rc::clone(&redirects);
            Rc::new(move || redirects.set(redirects.get() + 1))
        };
        let vm = ListViewModel::new(
            api.clone() as Rc<dyn ResourceApi<Employee>>,
            sink.clone() as Rc<dyn NotificationSink>,
            hook as Rc<dyn Fn()>,
        );
        Fixture {
            api,
            sink,
            redirects,
            vm,
        }
    }

    fn employee(id: i64, name: &str) -> Employee {
        Employee {
            id,
            name: name.into(),
            position: "Picker".into(),
            hire_date: "2024-01-01".into(),
        }
    }

    fn loaded_fixture() -> Fixture {
        let f = fixture();
        f.api
            .list_results
            .borrow_mut()
            .push_back(Ok(vec![employee(1, "Asha"), employee(3, "Tenzin")]));
        block_on(f.vm.refresh()).unwrap();
        f
    }

    #[test]
    fn refresh_replaces_the_list() {
        let f = loaded_fixture();
        let state = f.vm.snapshot();
        assert_eq!(state.records.len(), 2);
        assert!(!state.loading);
        assert_eq!(state.error, None);
    }

    #[test]
    fn refresh_failure_keeps_previous_list_and_sets_inline_error() {
        let f = loaded_fixture();
        f.api.list_results.borrow_mut().push_back(Err(RequestError::Http {
            status: 500,
            message: "boom".into(),
        }));

        assert!(block_on(f.vm.refresh()).is_err());

        let state = f.vm.snapshot();
        assert_eq!(state.records.len(), 2, "previous list retained");
        assert_eq!(state.error.as_deref(), Some("boom"));
        assert_eq!(f.sink.errors.borrow().len(), 1);

        // Next successful refresh clears the inline error.
        f.api
            .list_results
            .borrow_mut()
            .push_back(Ok(vec![employee(1, "Asha")]));
        block_on(f.vm.refresh()).unwrap();
        assert_eq!(f.vm.snapshot().error, None);
    }

    #[test]
    fn refresh_is_rejected_while_a_row_is_mid_edit() {
        let f = loaded_fixture();
        let calls_before = f.api.list_calls.get();
        f.vm.begin_edit(1).unwrap();

        assert!(block_on(f.vm.refresh()).is_err());
        assert_eq!(f.api.list_calls.get(), calls_before, "no fetch issued");
        assert!(matches!(f.vm.snapshot().edit, RowEdit::Editing { id: 1, .. }));
    }

    #[test]
    fn begin_edit_enforces_the_single_row_invariant() {
        let f = loaded_fixture();
        f.vm.begin_edit(1).unwrap();
        f.vm.update_draft("name", "Asha B.").unwrap();

        assert!(f.vm.begin_edit(3).is_err());

        // The first row's edit state is unchanged.
        match f.vm.snapshot().edit {
            RowEdit::Editing { id, draft } => {
                assert_eq!(id, 1);
                assert_eq!(draft.name, "Asha B.");
            }
            other => panic!("expected id 1 still editing, got {:?}", other),
        }
    }

    #[test]
    fn update_draft_never_touches_the_committed_record() {
        let f = loaded_fixture();
        f.vm.begin_edit(1).unwrap();
        f.vm.update_draft("position", "Blender").unwrap();

        let state = f.vm.snapshot();
        assert_eq!(state.records[0].position, "Picker");
    }

    #[test]
    fn update_draft_rejects_unknown_fields() {
        let f = loaded_fixture();
        f.vm.begin_edit(1).unwrap();
        assert!(f.vm.update_draft("salary", "100").is_err());
    }

    #[test]
    fn cancel_edit_discards_the_draft_without_network() {
        let f = loaded_fixture();
        f.vm.begin_edit(1).unwrap();
        f.vm.update_draft("name", "Changed").unwrap();
        f.vm.cancel_edit();

        let state = f.vm.snapshot();
        assert_eq!(state.edit, RowEdit::Viewing);
        assert_eq!(state.records[0].name, "Asha");
        assert_eq!(f.api.update_calls.get(), 0);
    }

    #[test]
    fn commit_adopts_the_server_record() {
        let f = fixture();
        f.api.list_results.borrow_mut().push_back(Ok(vec![Employee {
            id: 7,
            name: "Old".into(),
            position: "Old".into(),
            hire_date: "2020-01-01".into(),
        }]));
        block_on(f.vm.refresh()).unwrap();

        f.vm.begin_edit(7).unwrap();
        f.vm.update_draft("name", "Asha").unwrap();
        f.vm.update_draft("position", "Picker").unwrap();
        f.vm.update_draft("hireDate", "2024-01-01").unwrap();

        // Server echoes the payload back under id 7.
        f.api
            .update_results
            .borrow_mut()
            .push_back(Ok(employee(7, "Asha")));

        block_on(f.vm.commit_edit()).unwrap();

        let state = f.vm.snapshot();
        assert_eq!(state.edit, RowEdit::Viewing);
        assert_eq!(state.records, vec![employee(7, "Asha")]);
        assert_eq!(f.sink.successes.borrow().len(), 1);

        // id travels in the path, not the body
        let (id, body) = f.api.last_update.borrow().clone().unwrap();
        assert_eq!(id, 7);
        assert!(body.get("id").is_none());
    }

    #[test]
    fn failed_commit_returns_to_editing_with_the_draft_intact() {
        let f = loaded_fixture();
        f.vm.begin_edit(1).unwrap();
        f.vm.update_draft("name", "Asha B.").unwrap();
        f.api.update_results.borrow_mut().push_back(Err(RequestError::Http {
            status: 400,
            message: "Name is taken".into(),
        }));

        assert!(block_on(f.vm.commit_edit()).is_err());

        match f.vm.snapshot().edit {
            RowEdit::Editing { id, draft } => {
                assert_eq!(id, 1);
                assert_eq!(draft.name, "Asha B.", "draft kept for retry");
            }
            other => panic!("expected Editing after failure, got {:?}", other),
        }
        // Committed record untouched; error surfaced.
        assert_eq!(f.vm.snapshot().records[0].name, "Asha");
        assert_eq!(f.sink.errors.borrow().as_slice(), ["Name is taken"]);
    }

    #[test]
    fn unrepresentable_draft_never_reaches_the_network() {
        use crate::models::TeaBatch;

        let api = Rc::new(MockApi::<TeaBatch>::default());
        let sink = Rc::new(RecordingSink::default());
        let vm = ListViewModel::new(
            api.clone() as Rc<dyn ResourceApi<TeaBatch>>,
            sink.clone() as Rc<dyn NotificationSink>,
            Rc::new(|| {}) as Rc<dyn Fn()>,
        );
        api.list_results.borrow_mut().push_back(Ok(vec![TeaBatch {
            id: 2,
            tea_type: "Oolong".into(),
            weight_in_kg: 12.5,
            arrival_date: "2024-03-10".into(),
            processing_stage: "Withering".into(),
        }]));
        block_on(vm.refresh()).unwrap();

        vm.begin_edit(2).unwrap();
        vm.update_draft("weightInKg", "-5").unwrap();

        assert!(block_on(vm.commit_edit()).is_err());
        assert_eq!(api.update_calls.get(), 0);
        assert!(matches!(vm.snapshot().edit, RowEdit::Editing { id: 2, .. }));
    }

    #[test]
    fn delete_is_optimistic_and_refetches_on_success() {
        let f = loaded_fixture();
        let list_calls_before = f.api.list_calls.get();
        f.api
            .list_results
            .borrow_mut()
            .push_back(Ok(vec![employee(1, "Asha")]));

        block_on(f.vm.delete_record(3)).unwrap();

        assert_eq!(f.api.remove_calls.get(), 1);
        assert_eq!(f.api.list_calls.get(), list_calls_before + 1, "follow-up refresh");
        assert_eq!(f.sink.successes.borrow().len(), 1);
        assert!(f.vm.snapshot().records.iter().all(|e| e.id != 3));
    }

    #[test]
    fn failed_delete_is_not_rolled_back() {
        let f = loaded_fixture();
        f.api
            .remove_results
            .borrow_mut()
            .push_back(Err(RequestError::Network("offline".into())));

        assert!(block_on(f.vm.delete_record(3)).is_err());

        // Known limitation: the row stays gone until a refresh restores it.
        assert!(f.vm.snapshot().records.iter().all(|e| e.id != 3));
        assert_eq!(f.sink.errors.borrow().len(), 1);

        f.api
            .list_results
            .borrow_mut()
            .push_back(Ok(vec![employee(1, "Asha"), employee(3, "Tenzin")]));
        block_on(f.vm.refresh()).unwrap();
        assert_eq!(f.vm.snapshot().records.len(), 2);
    }

    #[test]
    fn deleting_the_row_under_edit_is_rejected() {
        let f = loaded_fixture();
        f.vm.begin_edit(3).unwrap();

        assert!(block_on(f.vm.delete_record(3)).is_err());
        assert_eq!(f.api.remove_calls.get(), 0);
        assert_eq!(f.vm.snapshot().records.len(), 2);
    }

    #[test]
    fn unauthorized_fires_the_redirect_hook_exactly_once_per_call() {
        let f = loaded_fixture();

        f.api
            .list_results
            .borrow_mut()
            .push_back(Err(RequestError::Unauthorized("Token expired".into())));
        let _ = block_on(f.vm.refresh());
        assert_eq!(f.redirects.get(), 1);

        f.api
            .remove_results
            .borrow_mut()
            .push_back(Err(RequestError::Unauthorized("Token expired".into())));
        let _ = block_on(f.vm.delete_record(1));
        assert_eq!(f.redirects.get(), 2);

        // Non-401 failures never redirect.
        f.api.list_results.borrow_mut().push_back(Err(RequestError::Http {
            status: 500,
            message: "boom".into(),
        }));
        let _ = block_on(f.vm.refresh());
        assert_eq!(f.redirects.get(), 2);
    }
}
