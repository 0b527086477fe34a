use crate::store::Store;

pub const USERNAME_KEY: &str = "logbookUsername";
pub const DEFAULT_NAMESPACE: &str = "logbookEntries";
pub const DEFAULT_WELCOME: &str = "Welcome to your logbook";

/// Identity for one run: the active username, if any, and the store key
/// holding that user's entries. Both are fixed at startup.
pub struct Session {
    pub username: Option<String>,
    pub namespace: String,
}

impl Session {
    /// Resolve the active user. A username given on the command line wins and
    /// is written to the store for future runs; otherwise the stored one is
    /// used untouched. An empty string counts as no username at all, so
    /// `--user ""` falls through to the stored value.
    pub fn resolve(store: &mut Store, cli_user: Option<&str>) -> Self {
        let username = match cli_user.filter(|user| !user.is_empty()) {
            Some(user) => {
                store.set(USERNAME_KEY, user);
                Some(user.to_owned())
            }
            None => store
                .get(USERNAME_KEY)
                .filter(|user| !user.is_empty())
                .map(str::to_owned),
        };

        let namespace = match &username {
            Some(user) => format!("{DEFAULT_NAMESPACE}_{user}"),
            None => DEFAULT_NAMESPACE.to_owned(),
        };

        Self {
            username,
            namespace,
        }
    }

    pub fn welcome(&self) -> String {
        match &self.username {
            Some(user) => format!("Welcome {user}"),
            None => DEFAULT_WELCOME.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn empty_store() -> Store {
        let dir = tempfile::tempdir().unwrap();
        Store::open(dir.path().join("logbook.json"))
    }

    #[test]
    fn cli_user_wins_and_is_stored() {
        let mut store = empty_store();
        store.set(USERNAME_KEY, "alice");

        let session = Session::resolve(&mut store, Some("bob"));

        assert_eq!(session.username.as_deref(), Some("bob"));
        assert_eq!(session.namespace, "logbookEntries_bob");
        assert_eq!(session.welcome(), "Welcome bob");
        assert_eq!(store.get(USERNAME_KEY), Some("bob"));
    }

    #[test]
    fn stored_user_is_used_when_no_cli_user() {
        let mut store = empty_store();
        store.set(USERNAME_KEY, "alice");

        let session = Session::resolve(&mut store, None);

        assert_eq!(session.username.as_deref(), Some("alice"));
        assert_eq!(session.namespace, "logbookEntries_alice");
        assert_eq!(store.get(USERNAME_KEY), Some("alice"));
    }

    #[test]
    fn empty_cli_user_falls_through_to_stored() {
        let mut store = empty_store();
        store.set(USERNAME_KEY, "alice");

        let session = Session::resolve(&mut store, Some(""));

        assert_eq!(session.username.as_deref(), Some("alice"));
        assert_eq!(store.get(USERNAME_KEY), Some("alice"));
    }

    #[test]
    fn no_user_anywhere_uses_the_shared_namespace() {
        let mut store = empty_store();

        let session = Session::resolve(&mut store, None);

        assert_eq!(session.username, None);
        assert_eq!(session.namespace, DEFAULT_NAMESPACE);
        assert_eq!(session.welcome(), DEFAULT_WELCOME);
    }
}
