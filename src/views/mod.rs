mod app;
mod employee_form;
mod employee_list;
mod login_view;
mod nav;
mod register_view;
mod tea_batch_form;
mod tea_batch_list;
mod toast;

pub use app::App;
