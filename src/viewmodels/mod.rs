pub mod form_viewmodel;
pub mod list_viewmodel;

pub use form_viewmodel::{FormState, FormViewModel};
pub use list_viewmodel::{ListState, ListViewModel, RowEdit};

/// "employee" -> "Employee", for toast messages.
pub(crate) fn title_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;

    use async_trait::async_trait;

    use crate::error::RequestError;
    use crate::models::{Record, RecordDraft};
    use crate::services::{NotificationSink, ResourceApi};

    /// Scripted ResourceApi: tests queue results per operation and inspect
    /// call counts and the last serialized payloads afterwards.
    pub struct MockApi<T: Record> {
        pub list_results: RefCell<VecDeque<Result<Vec<T>, RequestError>>>,
        pub create_results: RefCell<VecDeque<Result<T, RequestError>>>,
        pub update_results: RefCell<VecDeque<Result<T, RequestError>>>,
        pub remove_results: RefCell<VecDeque<Result<(), RequestError>>>,
        pub list_calls: Cell<usize>,
        pub create_calls: Cell<usize>,
        pub update_calls: Cell<usize>,
        pub remove_calls: Cell<usize>,
        pub last_create: RefCell<Option<serde_json::Value>>,
        pub last_update: RefCell<Option<(i64, serde_json::Value)>>,
    }

    impl<T: Record> Default for MockApi<T> {
        fn default() -> Self {
            Self {
                list_results: RefCell::new(VecDeque::new()),
                create_results: RefCell::new(VecDeque::new()),
                update_results: RefCell::new(VecDeque::new()),
                remove_results: RefCell::new(VecDeque::new()),
                list_calls: Cell::new(0),
                create_calls: Cell::new(0),
                update_calls: Cell::new(0),
                remove_calls: Cell::new(0),
                last_create: RefCell::new(None),
                last_update: RefCell::new(None),
            }
        }
    }

    fn unscripted<U>() -> Result<U, RequestError> {
        Err(RequestError::Network("unscripted mock call".into()))
    }

    #[async_trait(?Send)]
    impl<T: Record> ResourceApi<T> for MockApi<T> {
        async fn list(&self) -> Result<Vec<T>, RequestError> {
            self.list_calls.set(self.list_calls.get() + 1);
            self.list_results
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Ok(Vec::new()))
        }

        async fn create(
            &self,
            payload: &<T::Draft as RecordDraft>::Payload,
        ) -> Result<T, RequestError> {
            self.create_calls.set(self.create_calls.get() + 1);
            *self.last_create.borrow_mut() = serde_json::to_value(payload).ok();
            self.create_results
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(unscripted)
        }

        async fn update(
            &self,
            id: i64,
            payload: &<T::Draft as RecordDraft>::Payload,
        ) -> Result<T, RequestError> {
            self.update_calls.set(self.update_calls.get() + 1);
            *self.last_update.borrow_mut() =
                serde_json::to_value(payload).ok().map(|v| (id, v));
            self.update_results
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(unscripted)
        }

        async fn remove(&self, id: i64) -> Result<(), RequestError> {
            let _ = id;
            self.remove_calls.set(self.remove_calls.get() + 1);
            self.remove_results
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Ok(()))
        }
    }

    #[derive(Default)]
    pub struct RecordingSink {
        pub successes: RefCell<Vec<String>>,
        pub errors: RefCell<Vec<String>>,
    }

    impl NotificationSink for RecordingSink {
        fn success(&self, message: &str) {
            self.successes.borrow_mut().push(message.to_string());
        }

        fn error(&self, message: &str) {
            self.errors.borrow_mut().push(message.to_string());
        }
    }
}
