use std::collections::HashMap;

/// Localized string catalog.
///
/// Views receive a `&Strings` rather than reaching into a global registry,
/// so they stay testable without a live localization subsystem. Unknown keys
/// fall back to the key itself instead of failing a render.
pub struct Strings {
    entries: HashMap<&'static str, &'static str>,
}

impl Strings {
    pub fn catalog() -> Self {
        let entries = HashMap::from([
            ("tasks.list.title", " Tasks "),
            ("tasks.summary.title", " Summary "),
            ("tasks.summary.empty", "Select a task to see its summary"),
            ("tasks.action.delete", "Delete"),
            ("tasks.action.run", "Run"),
            ("tasks.action.stop", "Stop"),
            ("tasks.confirm.delete.title", " Delete Task "),
            ("tasks.confirm.delete.message", "Delete task"),
        ]);
        Self { entries }
    }

    pub fn get(&self, key: &'static str) -> &'static str {
        self.entries.get(key).copied().unwrap_or(key)
    }
}

impl Default for Strings {
    fn default() -> Self {
        Self::catalog()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_key() {
        let strings = Strings::catalog();
        assert_eq!(strings.get("tasks.action.run"), "Run");
    }

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        let strings = Strings::catalog();
        assert_eq!(strings.get("tasks.no.such.key"), "tasks.no.such.key");
    }
}
