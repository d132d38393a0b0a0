//! Process-wide registry of named channels
//!
//! Facades that ask for the same name through the same registry share one
//! [`Channel`]. The global registry is created lazily on first use and lives
//! for the rest of the process; tests and embedders can create their own
//! registry and hand it to a facade instead.

use super::channel::Channel;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

pub type SharedChannel = Arc<Mutex<Channel>>;

static GLOBAL: OnceLock<Arc<ChannelRegistry>> = OnceLock::new();

#[derive(Debug, Default)]
pub struct ChannelRegistry {
    channels: Mutex<HashMap<String, SharedChannel>>,
}

impl ChannelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry shared by every facade that is not given one explicitly
    pub fn global() -> Arc<ChannelRegistry> {
        Arc::clone(GLOBAL.get_or_init(|| Arc::new(ChannelRegistry::new())))
    }

    /// Get the channel called `name`, creating it on first request.
    pub fn channel(&self, name: &str) -> SharedChannel {
        let mut channels = self.channels.lock();
        Arc::clone(
            channels
                .entry(name.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(Channel::new(name)))),
        )
    }

    pub fn get(&self, name: &str) -> Option<SharedChannel> {
        self.channels.lock().get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.channels.lock().contains_key(name)
    }

    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.channels.lock().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.channels.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LogLevel;

    #[test]
    fn test_same_name_same_channel() {
        let registry = ChannelRegistry::new();
        let a = registry.channel("shared");
        let b = registry.channel("shared");
        assert!(Arc::ptr_eq(&a, &b));

        a.lock().set_threshold(LogLevel::Error);
        assert_eq!(b.lock().level(), LogLevel::Error);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_distinct_names() {
        let registry = ChannelRegistry::new();
        registry.channel("b");
        registry.channel("a");
        assert_eq!(registry.names(), vec!["a".to_string(), "b".to_string()]);
        assert!(registry.get("c").is_none());
        assert!(registry.contains("a"));
    }

    #[test]
    fn test_global_is_a_singleton() {
        let a = ChannelRegistry::global();
        let b = ChannelRegistry::global();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
