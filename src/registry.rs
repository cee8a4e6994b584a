use crate::engine::{CalendarEngine, GregorianEngine, HijriEngine, PersianEngine};
use crate::CalendarType;
use std::collections::HashMap;
use std::sync::{Arc, LazyLock, PoisonError, RwLock};

/// An engine shared between the registry and the sessions using it
pub type SharedEngine = Arc<dyn CalendarEngine>;

static GLOBAL: LazyLock<CalendarRegistry> = LazyLock::new(CalendarRegistry::with_builtins);

/// Error type for engine lookup and registration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// No engine is registered for the calendar type.
    #[error("Calendar type '{0}' is not supported")]
    Unsupported(CalendarType),

    /// Registration was attempted without an engine.
    #[error("No engine given for calendar type '{0}'")]
    MissingEngine(CalendarType),
}

/// Maps calendar types to their engines.
///
/// The process-wide instance from [`CalendarRegistry::global`] starts with
/// the Persian, Gregorian and Hijri engines. Registrations made later are
/// only seen by sessions created afterwards, since a session resolves its
/// engine once.
#[derive(Debug)]
pub struct CalendarRegistry {
    engines: RwLock<HashMap<CalendarType, SharedEngine>>,
}

impl CalendarRegistry {
    /// A registry with no engines at all
    pub fn empty() -> Self {
        Self {
            engines: RwLock::new(HashMap::new()),
        }
    }

    /// A registry holding the three built-in engines
    pub fn with_builtins() -> Self {
        let mut engines: HashMap<CalendarType, SharedEngine> = HashMap::new();
        engines.insert(CalendarType::Persian, Arc::new(PersianEngine));
        engines.insert(CalendarType::Gregorian, Arc::new(GregorianEngine));
        engines.insert(CalendarType::Hijri, Arc::new(HijriEngine::default()));
        Self {
            engines: RwLock::new(engines),
        }
    }

    /// The process-wide registry
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Looks up the engine for `calendar_type`
    ///
    /// # Errors
    /// Returns `RegistryError::Unsupported` if nothing is registered for the type.
    pub fn resolve(&self, calendar_type: CalendarType) -> Result<SharedEngine, RegistryError> {
        self.engines
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&calendar_type)
            .cloned()
            .ok_or(RegistryError::Unsupported(calendar_type))
    }

    /// Installs `engine` for `calendar_type`, returning the engine it replaced
    ///
    /// # Errors
    /// Returns `RegistryError::MissingEngine` if `engine` is `None`.
    pub fn register(
        &self,
        calendar_type: CalendarType,
        engine: Option<SharedEngine>,
    ) -> Result<Option<SharedEngine>, RegistryError> {
        let engine = engine.ok_or(RegistryError::MissingEngine(calendar_type))?;
        log::info!("registering calendar engine for {calendar_type}");
        Ok(self
            .engines
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(calendar_type, engine))
    }

    /// Whether an engine is registered for `calendar_type`
    pub fn contains(&self, calendar_type: CalendarType) -> bool {
        self.engines
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&calendar_type)
    }
}

impl Default for CalendarRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MondayFirstEngine;

    #[test]
    fn test_builtins_resolve() {
        let registry = CalendarRegistry::with_builtins();
        for calendar_type in [
            CalendarType::Persian,
            CalendarType::Gregorian,
            CalendarType::Hijri,
        ] {
            let engine = registry.resolve(calendar_type).unwrap();
            assert_eq!(engine.calendar_type(), calendar_type);
        }
    }

    #[test]
    fn test_unsupported_type() {
        let registry = CalendarRegistry::with_builtins();
        let result = registry.resolve(CalendarType::Custom("julian"));
        assert!(matches!(
            result,
            Err(RegistryError::Unsupported(CalendarType::Custom("julian")))
        ));

        let empty = CalendarRegistry::empty();
        assert!(empty.resolve(CalendarType::Gregorian).is_err());
    }

    #[test]
    fn test_register_custom_engine() {
        let registry = CalendarRegistry::with_builtins();
        let tag = CalendarType::Custom("monday-first");
        assert!(!registry.contains(tag));

        let previous = registry
            .register(tag, Some(Arc::new(MondayFirstEngine)))
            .unwrap();
        assert!(previous.is_none());
        assert!(registry.contains(tag));
        assert_eq!(registry.resolve(tag).unwrap().calendar_type(), tag);
    }

    #[test]
    fn test_register_replaces() {
        let registry = CalendarRegistry::with_builtins();
        let previous = registry
            .register(CalendarType::Hijri, Some(Arc::new(HijriEngine::with_adjustment(0))))
            .unwrap();
        assert!(previous.is_some());
    }

    #[test]
    fn test_register_missing_engine() {
        let registry = CalendarRegistry::with_builtins();
        let result = registry.register(CalendarType::Gregorian, None);
        assert_eq!(
            result.err(),
            Some(RegistryError::MissingEngine(CalendarType::Gregorian))
        );
        assert!(registry.contains(CalendarType::Gregorian));
    }

    #[test]
    fn test_global_registry() {
        let global = CalendarRegistry::global();
        assert!(global.resolve(CalendarType::Persian).is_ok());

        let tag = CalendarType::Custom("global-test");
        global
            .register(tag, Some(Arc::new(MondayFirstEngine)))
            .unwrap();
        assert!(CalendarRegistry::global().contains(tag));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            RegistryError::Unsupported(CalendarType::Custom("julian")).to_string(),
            "Calendar type 'julian' is not supported"
        );
        assert_eq!(
            RegistryError::MissingEngine(CalendarType::Hijri).to_string(),
            "No engine given for calendar type 'Hijri'"
        );
    }
}
