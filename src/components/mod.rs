use yew::prelude::*;

pub mod bank_account_form;
pub mod confirm;
pub mod expense_form;
pub mod income_form;
pub mod navbar;

pub use bank_account_form::BankAccountForm;
pub use confirm::ConfirmDialog;
pub use expense_form::ExpenseForm;
pub use income_form::IncomeForm;
pub use navbar::NavBar;

/// Two-way binding for a text input backed by a string state handle.
pub fn bind_input(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
        state.set(input.value());
    })
}

pub fn bind_select(state: &UseStateHandle<String>) -> Callback<Event> {
    let state = state.clone();
    Callback::from(move |e: Event| {
        let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
        state.set(select.value());
    })
}

pub fn bind_textarea(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let area: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
        state.set(area.value());
    })
}
