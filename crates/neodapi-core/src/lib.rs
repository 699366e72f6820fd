// SPDX-FileCopyrightText: 2026 Neodapi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the neodapi wallet facade.
//!
//! This crate provides the capability traits wallet adapters and host
//! environments implement, the facade's error types, and the NEO dAPI payload
//! records passed through the facade.

pub mod error;
pub mod events;
pub mod payload;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::{DapiError, ProviderError, ProviderErrorKind};
pub use events::EventListener;
pub use types::{DapiCall, DiscoverySource, EventKind, ProviderDescriptor, ProviderFamily};

pub use traits::{DapiInstance, Environment, EventBus, ProviderObject};

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    struct Opaque;

    impl ProviderObject for Opaque {}

    #[test]
    fn dapi_error_has_all_variants() {
        let _unselected = DapiError::NoProviderSelected;
        let _shape = DapiError::UnsupportedShape {
            provider: "NEOLine".into(),
            entry_point: "an initializer".into(),
        };
        let _config = DapiError::Config("test".into());
    }

    #[test]
    fn provider_object_entry_points_default_to_absent() {
        let object = Arc::new(Opaque);
        assert!(object.initialize().is_none());
        assert!(object.namespace("NEO").is_none());
        assert!(object.into_dapi().is_none());
    }

    #[test]
    fn descriptor_reports_family_and_source() {
        let descriptor = ProviderDescriptor::new("Teemo", Arc::new(Opaque), DiscoverySource::Module);
        assert_eq!(descriptor.family(), ProviderFamily::Teemo);
        assert_eq!(descriptor.source(), DiscoverySource::Module);
        assert!(format!("{descriptor:?}").contains("Teemo"));

        let (name, _object) = descriptor.into_parts();
        assert_eq!(name, "Teemo");
    }

    #[test]
    fn all_capability_traits_are_exported() {
        fn _assert_dapi<T: DapiInstance>() {}
        fn _assert_object<T: ProviderObject>() {}
        fn _assert_environment<T: Environment>() {}
        fn _assert_bus<T: EventBus>() {}
        fn _assert_dyn(_: &dyn DapiInstance, _: &dyn ProviderObject, _: &dyn Environment, _: &dyn EventBus) {}
    }
}
