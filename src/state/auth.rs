// ============================================================================
// AUTH STORE - fake-authentication session holder (memory only)
// ============================================================================

use std::rc::Rc;

use yew::prelude::*;

use crate::models::user::{User, DEMO_EMAIL, DEMO_PASSWORD};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub is_authenticated: bool,
}

pub enum AuthAction {
    Login(User),
    Logout,
}

impl Reducible for AuthState {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: AuthAction) -> Rc<Self> {
        let next = match action {
            AuthAction::Login(user) => AuthState {
                user: Some(user),
                is_authenticated: true,
            },
            AuthAction::Logout => AuthState::default(),
        };
        Rc::new(next)
    }
}

/// Demo-only credential check. A real deployment would call an auth backend
/// here; the session lifecycle around it stays the same.
pub fn credentials_match(email: &str, password: &str) -> bool {
    email == DEMO_EMAIL && password == DEMO_PASSWORD
}

#[derive(Clone, PartialEq)]
pub struct AuthHandle {
    state: UseReducerHandle<AuthState>,
}

impl AuthHandle {
    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn login(&self, email: &str, password: &str) {
        if credentials_match(email, password) {
            log::info!("🔐 Login successful: {}", email);
            self.state.dispatch(AuthAction::Login(User::demo()));
        } else {
            log::warn!("🔐 Login rejected for {}", email);
        }
    }

    pub fn logout(&self) {
        log::info!("👋 Logout");
        self.state.dispatch(AuthAction::Logout);
    }
}

#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub children: Children,
}

#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let state = use_reducer(AuthState::default);
    let handle = AuthHandle { state };

    html! {
        <ContextProvider<AuthHandle> context={handle}>
            {props.children.clone()}
        </ContextProvider<AuthHandle>>
    }
}

#[hook]
pub fn use_auth() -> AuthHandle {
    use_context::<AuthHandle>().expect("use_auth must be used inside AuthProvider")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_demo_credentials_match() {
        assert!(credentials_match(DEMO_EMAIL, DEMO_PASSWORD));
        assert!(!credentials_match(DEMO_EMAIL, "wrong"));
        assert!(!credentials_match("someone@else.com", DEMO_PASSWORD));
    }

    #[test]
    fn login_creates_session_and_logout_destroys_it() {
        let state = Rc::new(AuthState::default());

        let logged_in = state.reduce(AuthAction::Login(User::demo()));
        assert!(logged_in.is_authenticated);
        assert_eq!(
            logged_in.user.as_ref().map(|u| u.email.as_str()),
            Some(DEMO_EMAIL)
        );

        let logged_out = logged_in.reduce(AuthAction::Logout);
        assert!(!logged_out.is_authenticated);
        assert!(logged_out.user.is_none());
    }
}
