// ============================================================================
// FORM VIEWMODEL - one new-record draft, validation, submission
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{FieldErrors, Record, RecordDraft};
use crate::services::{NotificationSink, ResourceApi};

use super::title_case;

#[derive(Clone, PartialEq, Debug)]
pub struct FormState<D> {
    pub draft: D,
    /// Field-level validation errors; local to the form, never toasted.
    pub errors: FieldErrors,
    pub submitting: bool,
    /// Submission-level error from the backend, shown above the form.
    pub submit_error: Option<String>,
}

impl<D: Default> Default for FormState<D> {
    fn default() -> Self {
        Self {
            draft: D::default(),
            errors: FieldErrors::new(),
            submitting: false,
            submit_error: None,
        }
    }
}

pub struct FormViewModel<T: Record> {
    api: Rc<dyn ResourceApi<T>>,
    notifier: Rc<dyn NotificationSink>,
    on_unauthorized: Rc<dyn Fn()>,
    state: Rc<RefCell<FormState<T::Draft>>>,
}

impl<T: Record> Clone for FormViewModel<T> {
    fn clone(&self) -> Self {
        Self {
            api: Rc::clone(&self.api),
            notifier: Rc::clone(&self.notifier),
            on_unauthorized: Rc::clone(&self.on_unauthorized),
            state: Rc::clone(&self.state),
        }
    }
}

impl<T: Record> FormViewModel<T> {
    pub fn new(
        api: Rc<dyn ResourceApi<T>>,
        notifier: Rc<dyn NotificationSink>,
        on_unauthorized: Rc<dyn Fn()>,
    ) -> Self {
        Self {
            api,
            notifier,
            on_unauthorized,
            state: Rc::new(RefCell::new(FormState::default())),
        }
    }

    pub fn snapshot(&self) -> FormState<T::Draft> {
        self.state.borrow().clone()
    }

    pub fn set_field(&self, field: &str, value: &str) -> Result<(), String> {
        self.state.borrow_mut().draft.apply_field(field, value)
    }

    /// Run field-level checks and store the result. True when submittable.
    pub fn validate(&self) -> bool {
        let mut state = self.state.borrow_mut();
        state.errors = state.draft.validate();
        state.errors.is_empty()
    }

    /// Validate, then POST. Any field error aborts locally - no network call,
    /// nothing toasted. On success the draft resets and the created record is
    /// handed back so the caller can navigate away and refresh its list. On
    /// failure the draft stays for correction.
    pub async fn submit(&self) -> Result<T, String> {
        if !self.validate() {
            return Err("validation failed".into());
        }

        let payload = {
            let mut state = self.state.borrow_mut();
            match state.draft.to_payload() {
                Ok(payload) => payload,
                Err(msg) => {
                    state.submit_error = Some(msg.clone());
                    return Err(msg);
                }
            }
        };

        self.state.borrow_mut().submitting = true;
        let result = self.api.create(&payload).await;

        let mut state = self.state.borrow_mut();
        state.submitting = false;
        match result {
            Ok(record) => {
                *state = FormState::default();
                drop(state);
                self.notifier
                    .success(&format!("{} added successfully!", title_case(T::resource_name())));
                Ok(record)
            }
            Err(err) => {
                state.submit_error = Some(err.to_string());
                drop(state);
                self.notifier.error(&err.to_string());
                if err.is_unauthorized() {
                    (self.on_unauthorized)();
                }
                Err(err.to_string())
            }
        }
    }
}
