//! Named conversation services with one active selection

use super::manager::ConversationManager;
use crate::llm::{CompletionParams, LlmService};
use crate::system_prompt::{all_presets, ServicePreset};
use std::collections::HashMap;
use std::sync::Arc;

/// Registry of conversation managers keyed by display name.
///
/// The active name, when set, always refers to a registered service.
#[derive(Default)]
pub struct ServiceRegistry {
    services: HashMap<String, ConversationManager>,
    active: Option<String>,
}

impl ServiceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// One independent manager per preset; the first preset is active
    pub fn with_presets(
        llm: &Arc<dyn LlmService>,
        params: &CompletionParams,
        api_key: Option<&str>,
    ) -> Self {
        Self::from_presets(all_presets(), llm, params, api_key)
    }

    pub fn from_presets(
        presets: &[ServicePreset],
        llm: &Arc<dyn LlmService>,
        params: &CompletionParams,
        api_key: Option<&str>,
    ) -> Self {
        let mut registry = Self::new();
        for preset in presets {
            let manager = ConversationManager::with_preamble(
                Arc::clone(llm),
                params.clone(),
                api_key.map(str::to_string),
                preset.preamble,
            );
            registry.add_service(preset.name, manager);
        }
        registry
    }

    /// Insert or replace a service. The first service added becomes active.
    pub fn add_service(&mut self, name: impl Into<String>, manager: ConversationManager) {
        let name = name.into();
        if self.active.is_none() {
            self.active = Some(name.clone());
        }
        self.services.insert(name, manager);
    }

    /// Select `name` if registered; otherwise leave the selection alone
    pub fn set_active(&mut self, name: &str) -> bool {
        if self.services.contains_key(name) {
            self.active = Some(name.to_string());
            true
        } else {
            false
        }
    }

    pub fn active_name(&self) -> Option<&str> {
        self.active
            .as_deref()
            .filter(|name| self.services.contains_key(*name))
    }

    pub fn get_active(&self) -> Option<&ConversationManager> {
        self.services.get(self.active.as_deref()?)
    }

    pub fn get_active_mut(&mut self) -> Option<&mut ConversationManager> {
        let name = self.active.as_deref()?;
        self.services.get_mut(name)
    }

    #[allow(dead_code)] // API completeness
    pub fn get(&self, name: &str) -> Option<&ConversationManager> {
        self.services.get(name)
    }

    /// Apply one credential to every service
    pub fn set_credential_all(&mut self, api_key: &str) {
        for manager in self.services.values_mut() {
            manager.set_credential(api_key);
        }
    }

    /// Registered names, sorted
    pub fn list_names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.services.keys().cloned().collect();
        names.sort();
        names
    }

    #[allow(dead_code)] // API completeness
    pub fn len(&self) -> usize {
        self.services.len()
    }

    #[allow(dead_code)] // API completeness
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::testing::MockLlmClient;
    use crate::system_prompt::{GENERAL, SCIENCE_MATH};

    fn manager(preamble: &str) -> ConversationManager {
        ConversationManager::with_preamble(
            Arc::new(MockLlmClient::new()),
            CompletionParams::default(),
            None,
            preamble,
        )
    }

    #[test]
    fn test_empty_registry() {
        let registry = ServiceRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.get_active().is_none());
        assert!(registry.active_name().is_none());
        assert!(registry.list_names().is_empty());
    }

    #[test]
    fn test_first_added_is_active() {
        let mut registry = ServiceRegistry::new();
        registry.add_service("A", manager("m1"));
        registry.add_service("B", manager("m2"));

        assert_eq!(registry.get_active().unwrap().preamble(), "m1");
        assert_eq!(registry.active_name(), Some("A"));
    }

    #[test]
    fn test_set_active() {
        let mut registry = ServiceRegistry::new();
        registry.add_service("A", manager("m1"));
        registry.add_service("B", manager("m2"));

        assert!(registry.set_active("B"));
        assert_eq!(registry.get_active().unwrap().preamble(), "m2");

        assert!(!registry.set_active("nonexistent"));
        assert_eq!(registry.active_name(), Some("B"));
        assert_eq!(registry.get_active().unwrap().preamble(), "m2");
    }

    #[test]
    fn test_add_overwrites_existing_name() {
        let mut registry = ServiceRegistry::new();
        registry.add_service("A", manager("old"));
        registry.add_service("A", manager("new"));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("A").unwrap().preamble(), "new");
        assert_eq!(registry.get_active().unwrap().preamble(), "new");
    }

    #[test]
    fn test_list_names() {
        let mut registry = ServiceRegistry::new();
        registry.add_service("B", manager("m2"));
        registry.add_service("A", manager("m1"));
        assert_eq!(registry.list_names(), vec!["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn test_services_are_isolated() {
        let mut registry = ServiceRegistry::new();
        registry.add_service("A", manager("m1"));
        registry.add_service("B", manager("m2"));

        registry.get_active_mut().unwrap().add_user_message("only in A");
        registry.get_active_mut().unwrap().set_credential("key-a");
        registry.set_active("B");

        let b = registry.get_active().unwrap();
        assert_eq!(b.message_count(), 0);
        assert!(!b.has_valid_credential());
        assert_eq!(registry.get("A").unwrap().message_count(), 1);
    }

    #[test]
    fn test_with_presets() {
        let llm: Arc<dyn LlmService> = Arc::new(MockLlmClient::new());
        let mut registry =
            ServiceRegistry::with_presets(&llm, &CompletionParams::default(), Some("sk-test"));

        assert_eq!(registry.len(), all_presets().len());
        assert_eq!(registry.active_name(), Some(SCIENCE_MATH.name));
        assert!(registry.get_active().unwrap().has_valid_credential());
        assert_eq!(registry.get(GENERAL.name).unwrap().preamble(), GENERAL.preamble);

        registry.set_credential_all("");
        assert!(registry.list_names().iter().all(|name| {
            !registry.get(name).unwrap().has_valid_credential()
        }));
    }
}
