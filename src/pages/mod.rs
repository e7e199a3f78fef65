use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::session::{Session, SessionHandle};

pub mod bank_accounts;
pub mod expenses;
pub mod income;
pub mod login;
pub mod profile;
pub mod signup;

pub use bank_accounts::BankAccountsPage;
pub use expenses::ExpensesPage;
pub use income::IncomePage;
pub use login::LoginPage;
pub use profile::ProfilePage;
pub use signup::SignupPage;

/// Current session from the app-level context.
#[hook]
pub fn use_session() -> Option<Session> {
    use_context::<SessionHandle>().and_then(|handle| (*handle).clone())
}

/// Show a success banner and clear it after two seconds.
pub fn flash(banner: &UseStateHandle<Option<String>>, message: &str) {
    banner.set(Some(message.to_string()));
    let banner = banner.clone();
    spawn_local(async move {
        TimeoutFuture::new(2_000).await;
        banner.set(None);
    });
}
