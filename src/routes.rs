use crate::models::Role;
use crate::state::Session;

/// Every screen the app can show. The view layer maps these to components;
/// the gate below decides who may enter.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Route {
    Home,
    Login,
    Register,
    Unauthorized,
    Employees,
    AddEmployee,
    Inventory,
    AddTeaBatch,
}

impl Route {
    pub fn requires_auth(&self) -> bool {
        !matches!(
            self,
            Route::Home | Route::Login | Route::Register | Route::Unauthorized
        )
    }

    pub fn required_role(&self) -> Option<Role> {
        match self {
            Route::AddEmployee => Some(Role::Admin),
            _ => None,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Unauthorized => "/unauthorized",
            Route::Employees => "/employees",
            Route::AddEmployee => "/employees/add",
            Route::Inventory => "/inventory",
            Route::AddTeaBatch => "/inventory/add",
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum Access {
    Allow,
    Redirect {
        to: Route,
        reason: Option<&'static str>,
    },
}

/// Access verdict for a navigation. Total and deterministic: no I/O, no
/// hidden state - just the route and the session snapshot.
///
/// Rules in order, first match wins:
/// 1. public route -> Allow
/// 2. not authenticated -> redirect to login
/// 3. wrong role -> redirect to unauthorized
/// 4. otherwise -> Allow
pub fn decide(route: Route, session: &Session) -> Access {
    if !route.requires_auth() {
        return Access::Allow;
    }

    if !session.authenticated {
        return Access::Redirect {
            to: Route::Login,
            reason: None,
        };
    }

    if let Some(required) = route.required_role() {
        if session.role != Some(required) {
            return Access::Redirect {
                to: Route::Unauthorized,
                reason: Some("Admin privileges required."),
            };
        }
    }

    Access::Allow
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(authenticated: bool, role: Option<Role>) -> Session {
        Session {
            token: authenticated.then(|| "tok".to_string()),
            user_id: authenticated.then_some(1),
            role,
            authenticated,
        }
    }

    const PROTECTED: [Route; 4] = [
        Route::Employees,
        Route::AddEmployee,
        Route::Inventory,
        Route::AddTeaBatch,
    ];

    #[test]
    fn public_routes_are_always_allowed() {
        let anon = session(false, None);
        for route in [Route::Home, Route::Login, Route::Register, Route::Unauthorized] {
            assert_eq!(decide(route, &anon), Access::Allow);
        }
    }

    #[test]
    fn unauthenticated_is_redirected_to_login_on_every_protected_route() {
        let anon = session(false, None);
        for route in PROTECTED {
            assert_eq!(
                decide(route, &anon),
                Access::Redirect {
                    to: Route::Login,
                    reason: None
                }
            );
        }
    }

    #[test]
    fn staff_is_blocked_from_admin_route() {
        let staff = session(true, Some(Role::Staff));
        match decide(Route::AddEmployee, &staff) {
            Access::Redirect {
                to: Route::Unauthorized,
                reason,
            } => assert!(reason.is_some()),
            other => panic!("expected redirect to unauthorized, got {:?}", other),
        }
    }

    #[test]
    fn admin_is_allowed_on_admin_route() {
        let admin = session(true, Some(Role::Admin));
        assert_eq!(decide(Route::AddEmployee, &admin), Access::Allow);
    }

    #[test]
    fn staff_still_reaches_non_admin_routes() {
        let staff = session(true, Some(Role::Staff));
        assert_eq!(decide(Route::Inventory, &staff), Access::Allow);
    }

    #[test]
    fn restored_session_without_role_is_not_admin() {
        // After a restart the token is back but the role is unknown.
        let resumed = session(true, None);
        assert_eq!(decide(Route::Employees, &resumed), Access::Allow);
        assert!(matches!(
            decide(Route::AddEmployee, &resumed),
            Access::Redirect {
                to: Route::Unauthorized,
                ..
            }
        ));
    }
}
