use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

mod api;
mod components;
mod format;
mod models;
mod pages;
mod query;
mod session;
mod validate;

use api::ApiClient;
use pages::{BankAccountsPage, ExpensesPage, IncomePage, LoginPage, ProfilePage, SignupPage};
use session::{Session, SessionHandle};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Route {
    Login,
    Signup,
    Expenses,
    Income,
    BankAccounts,
    Profile,
}

impl Route {
    fn requires_auth(self) -> bool {
        !matches!(self, Route::Login | Route::Signup)
    }
}

#[function_component(App)]
fn app() -> Html {
    let session: SessionHandle = use_state(Session::load);
    let route = use_state(|| {
        if Session::load().is_some() {
            Route::Expenses
        } else {
            Route::Login
        }
    });
    let login_notice = use_state(|| None::<String>);

    let on_navigate = {
        let route = route.clone();
        let login_notice = login_notice.clone();
        Callback::from(move |target: Route| {
            login_notice.set(None);
            route.set(target);
        })
    };

    let on_login = {
        let session = session.clone();
        let route = route.clone();
        let login_notice = login_notice.clone();
        Callback::from(move |authenticated: Session| {
            session.set(Some(authenticated));
            login_notice.set(None);
            route.set(Route::Expenses);
        })
    };

    let on_registered = {
        let route = route.clone();
        let login_notice = login_notice.clone();
        Callback::from(move |notice: String| {
            login_notice.set(Some(notice));
            route.set(Route::Login);
        })
    };

    let on_logout = {
        let session = session.clone();
        let route = route.clone();
        Callback::from(move |_| {
            if let Some(current) = (*session).clone() {
                // Best effort; the local session is cleared regardless.
                spawn_local(async move {
                    let _ = ApiClient::new(&current).logout().await;
                });
            }
            Session::clear();
            session.set(None);
            route.set(Route::Login);
        })
    };

    // Route guard: data views need a session.
    let active = if route.requires_auth() && session.is_none() {
        Route::Login
    } else {
        *route
    };

    let content = match active {
        Route::Login => html! {
            <LoginPage
                on_login={on_login}
                on_navigate={on_navigate.clone()}
                notice={(*login_notice).clone().map(AttrValue::from)}
            />
        },
        Route::Signup => html! {
            <SignupPage on_registered={on_registered} on_navigate={on_navigate.clone()} />
        },
        Route::Expenses => html! {
            <ExpensesPage on_navigate={on_navigate.clone()} on_logout={on_logout.clone()} />
        },
        Route::Income => html! {
            <IncomePage on_navigate={on_navigate.clone()} on_logout={on_logout.clone()} />
        },
        Route::BankAccounts => html! {
            <BankAccountsPage on_navigate={on_navigate.clone()} on_logout={on_logout.clone()} />
        },
        Route::Profile => html! {
            <ProfilePage on_navigate={on_navigate.clone()} on_logout={on_logout.clone()} />
        },
    };

    html! {
        <ContextProvider<SessionHandle> context={session}>
            { content }
        </ContextProvider<SessionHandle>>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
