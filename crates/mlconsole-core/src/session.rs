/// Client-side session flag. No verification, tokens or persistence: the
/// credentials form decides what is acceptable and the session just records it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Session {
    is_logged_in: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_logged_in(&self) -> bool {
        self.is_logged_in
    }

    pub fn login(&mut self) {
        self.is_logged_in = true;
    }

    pub fn logout(&mut self) {
        self.is_logged_in = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_logged_out() {
        assert!(!Session::new().is_logged_in());
    }

    #[test]
    fn test_login_then_logout() {
        let mut session = Session::new();
        session.login();
        assert!(session.is_logged_in());
        session.logout();
        assert!(!session.is_logged_in());
    }
}
