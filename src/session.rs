//! The authenticated session, held in a context at the composition root and
//! mirrored to local storage so a page reload keeps the user signed in.

use yew::UseStateHandle;

const TOKEN_KEY: &str = "token";
const USER_ID_KEY: &str = "userId";

#[derive(Clone, PartialEq, Debug)]
pub struct Session {
    pub token: String,
    pub user_id: i64,
}

pub type SessionHandle = UseStateHandle<Option<Session>>;

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl Session {
    pub fn new(token: String, user_id: i64) -> Self {
        Session { token, user_id }
    }

    /// Restore the session persisted by a previous login, if any.
    pub fn load() -> Option<Session> {
        let storage = storage()?;
        let token = storage.get_item(TOKEN_KEY).ok().flatten()?;
        if token.is_empty() {
            return None;
        }
        let user_id = storage
            .get_item(USER_ID_KEY)
            .ok()
            .flatten()?
            .parse::<i64>()
            .ok()?;
        Some(Session { token, user_id })
    }

    pub fn store(&self) {
        if let Some(storage) = storage() {
            let _ = storage.set_item(TOKEN_KEY, &self.token);
            let _ = storage.set_item(USER_ID_KEY, &self.user_id.to_string());
        }
    }

    pub fn clear() {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USER_ID_KEY);
        }
    }
}
