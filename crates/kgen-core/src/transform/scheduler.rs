use indexmap::{IndexMap, IndexSet};

/// Per-resource worklist of named types.
///
/// A name is emitted at most once: `request` ignores names that are already known, and `drain`
/// marks a name emitted before running its job, so self-references and cycles never re-queue it.
/// Pending names drain in FIFO order. Every known name remembers the origin it was first
/// registered with, so callers can tell a repeat from a collision.
#[derive(Debug)]
pub struct EmissionScheduler<J> {
    pending: IndexMap<String, J>,
    emitted: IndexSet<String>,
    origins: IndexMap<String, String>,
}

impl<J> Default for EmissionScheduler<J> {
    fn default() -> Self {
        Self {
            pending: IndexMap::new(),
            emitted: IndexSet::new(),
            origins: IndexMap::new(),
        }
    }
}

impl<J> EmissionScheduler<J> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `name` for a declaration produced outside the worklist. Later requests for it are
    /// ignored.
    pub fn reserve(&mut self, name: &str, origin: &str) {
        if self.origins.contains_key(name) {
            return;
        }
        self.origins.insert(name.to_string(), origin.to_string());
        self.emitted.insert(name.to_string());
    }

    /// Queue `job` under `name` unless the name is already known. Returns whether it was queued.
    pub fn request(&mut self, name: &str, origin: &str, job: J) -> bool {
        if self.origins.contains_key(name) {
            return false;
        }
        log::debug!("scheduling {name}");
        self.origins.insert(name.to_string(), origin.to_string());
        self.pending.insert(name.to_string(), job);
        true
    }

    /// The origin a name was first registered with, whether pending, emitted or reserved.
    pub fn origin(&self, name: &str) -> Option<&str> {
        self.origins.get(name).map(String::as_str)
    }

    pub fn is_pending(&self, name: &str) -> bool {
        self.pending.contains_key(name)
    }

    pub fn is_emitted(&self, name: &str) -> bool {
        self.emitted.contains(name)
    }

    /// Names in the order they were reserved or emitted.
    pub fn emitted_names(&self) -> impl Iterator<Item = &str> {
        self.emitted.iter().map(String::as_str)
    }

    /// Run pending jobs oldest-first until none remain. Jobs may request further names.
    pub fn drain<E, F>(&mut self, mut f: F) -> Result<(), E>
    where
        F: FnMut(&mut Self, &str, &J) -> Result<(), E>,
    {
        while let Some((name, job)) = self.pending.shift_remove_index(0) {
            self.emitted.insert(name.clone());
            f(self, &name, &job)?;
        }
        Ok(())
    }
}
