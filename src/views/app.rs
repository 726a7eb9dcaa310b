use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::routes::{decide, Access, Route};
use crate::state::SessionStore;
use crate::utils::LocalTokenStore;
use crate::views::employee_form::EmployeeFormView;
use crate::views::employee_list::EmployeeListView;
use crate::views::login_view::LoginView;
use crate::views::nav::NavBar;
use crate::views::register_view::RegisterView;
use crate::views::tea_batch_form::TeaBatchFormView;
use crate::views::tea_batch_list::TeaBatchListView;
use crate::views::toast::{Toast, ToastKind, ToastStack};

const TOAST_DISMISS_MS: u32 = 4000;

enum ToastAction {
    Push(Toast),
    Dismiss(usize),
}

#[derive(Default, PartialEq)]
struct Toasts {
    items: Vec<Toast>,
}

impl Reducible for Toasts {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: ToastAction) -> Rc<Self> {
        let mut items = self.items.clone();
        match action {
            ToastAction::Push(toast) => items.push(toast),
            ToastAction::Dismiss(id) => items.retain(|t| t.id != id),
        }
        Rc::new(Toasts { items })
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let session = use_memo((), |_| SessionStore::new(Rc::new(LocalTokenStore)));
    let session = (*session).clone();

    let route = use_state(|| Route::Home);
    let toasts = use_reducer(Toasts::default);
    let next_toast_id = use_mut_ref(|| 0usize);

    // Every navigation goes through the access gate.
    let navigate = {
        let route = route.clone();
        let session = session.clone();
        Callback::from(move |target: Route| match decide(target, &session.current()) {
            Access::Allow => route.set(target),
            Access::Redirect { to, reason } => {
                if let Some(reason) = reason {
                    log::warn!("🚫 {} blocked: {}", target.path(), reason);
                }
                route.set(to);
            }
        })
    };

    let notify = {
        let toasts = toasts.clone();
        Callback::from(move |(kind, message): (ToastKind, String)| {
            let id = {
                let mut next = next_toast_id.borrow_mut();
                *next += 1;
                *next
            };
            toasts.dispatch(ToastAction::Push(Toast { id, kind, message }));
            let toasts = toasts.clone();
            Timeout::new(TOAST_DISMISS_MS, move || {
                toasts.dispatch(ToastAction::Dismiss(id));
            })
            .forget();
        })
    };

    let on_dismiss = {
        let toasts = toasts.clone();
        Callback::from(move |id: usize| toasts.dispatch(ToastAction::Dismiss(id)))
    };

    let on_logout = {
        let session = session.clone();
        let navigate = navigate.clone();
        Callback::from(move |_: ()| {
            session.logout();
            navigate.emit(Route::Login);
        })
    };

    let body = match *route {
        Route::Home => home_page(),
        Route::Unauthorized => unauthorized_page(),
        Route::Login => html! {
            <LoginView session={session.clone()} navigate={navigate.clone()} />
        },
        Route::Register => html! {
            <RegisterView session={session.clone()} navigate={navigate.clone()} />
        },
        Route::Employees => html! {
            <EmployeeListView
                session={session.clone()}
                navigate={navigate.clone()}
                notify={notify.clone()}
            />
        },
        Route::AddEmployee => html! {
            <EmployeeFormView
                session={session.clone()}
                navigate={navigate.clone()}
                notify={notify.clone()}
            />
        },
        Route::Inventory => html! {
            <TeaBatchListView
                session={session.clone()}
                navigate={navigate.clone()}
                notify={notify.clone()}
            />
        },
        Route::AddTeaBatch => html! {
            <TeaBatchFormView
                session={session.clone()}
                navigate={navigate.clone()}
                notify={notify.clone()}
            />
        },
    };

    html! {
        <div class="app">
            <NavBar
                session={session.clone()}
                navigate={navigate.clone()}
                on_logout={on_logout}
            />
            <main class="flex-grow flex items-center justify-center w-full">
                { body }
            </main>
            <ToastStack toasts={toasts.items.clone()} on_dismiss={on_dismiss} />
        </div>
    }
}

fn home_page() -> Html {
    html! {
        <div class="bg-white p-8 rounded-lg shadow-lg max-w-2xl w-full">
            <h1 class="text-4xl font-bold text-green-600 mb-6 text-center">
                { "Welcome to the Tea Factory System" }
            </h1>
            <p class="text-xl text-green-600">
                { "Your complete solution for tea production management" }
            </p>
        </div>
    }
}

fn unauthorized_page() -> Html {
    html! {
        <div class="bg-white p-8 rounded-lg shadow-lg max-w-2xl w-full text-center">
            <h1 class="text-2xl font-bold text-red-600 mb-4">{ "Not authorized" }</h1>
            <p>{ "Admin privileges required." }</p>
        </div>
    }
}
