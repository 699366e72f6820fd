// SPDX-FileCopyrightText: 2026 Neodapi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-family rules turning a discovered object into a callable instance.

use std::sync::Arc;

use neodapi_core::{DapiInstance, ProviderFamily, ProviderObject};

/// How a family's discovered object yields its dAPI instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructionRule {
    /// The object is the instance.
    Direct,
    /// The object's initializer returns the instance.
    Initialize,
    /// The instance lives under a per-chain namespace of the object.
    Namespace,
}

impl ConstructionRule {
    /// Human-readable name of the entry point this rule needs.
    pub fn entry_point(&self, chain: &str) -> String {
        match self {
            ConstructionRule::Direct => "a directly callable dAPI object".to_string(),
            ConstructionRule::Initialize => "an initializer".to_string(),
            ConstructionRule::Namespace => format!("a `{chain}` namespace"),
        }
    }
}

/// The construction rule for a family. Unknown families are used as-is.
pub fn construction_rule(family: &ProviderFamily) -> ConstructionRule {
    match family {
        ProviderFamily::O3 => ConstructionRule::Direct,
        ProviderFamily::NeoLine => ConstructionRule::Initialize,
        ProviderFamily::Teemo => ConstructionRule::Namespace,
        ProviderFamily::Other(_) => ConstructionRule::Direct,
    }
}

/// Apply `rule` to `object`. `None` when the object lacks the entry point.
pub fn resolve(
    rule: ConstructionRule,
    object: Arc<dyn ProviderObject>,
    chain: &str,
) -> Option<Arc<dyn DapiInstance>> {
    match rule {
        ConstructionRule::Direct => object.into_dapi(),
        ConstructionRule::Initialize => object.initialize(),
        ConstructionRule::Namespace => object.namespace(chain),
    }
}
