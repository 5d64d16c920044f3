// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! A cache of generated shader modules keyed by code identity.

use super::{ShaderError, ShaderGenerator, ShaderModule};
use ahash::AHashMap;
use prism_core::{cases, cases::Case, CodeIdentity, Light, Material, ShadingSettings};
use std::sync::Arc;

/// Hit and miss counters for a [`ShaderCache`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Lookups that generated a new module.
    pub misses: u64,
    /// Modules currently cached.
    pub entries: usize,
}

/// Generates each shader module at most once.
///
/// Because identities ignore parameter values, every material of a given
/// shape shares one module.
#[derive(Debug, Default)]
pub struct ShaderCache {
    generator: ShaderGenerator,
    modules: AHashMap<CodeIdentity, Arc<ShaderModule>>,
    hits: u64,
    misses: u64,
}

impl ShaderCache {
    /// Creates an empty cache backed by `generator`.
    pub fn new(generator: ShaderGenerator) -> Self {
        Self {
            generator,
            modules: AHashMap::new(),
            hits: 0,
            misses: 0,
        }
    }

    /// Creates a cache configured by `settings`, pregenerating every
    /// enumerated case if requested.
    pub fn from_settings(settings: &ShadingSettings) -> Result<Self, ShaderError> {
        let mut cache = Self::new(ShaderGenerator::from_settings(settings));
        if settings.pregenerate {
            cache.pregenerate(cases::all_cases())?;
        }
        Ok(cache)
    }

    /// The generator misses are handed to.
    pub fn generator(&self) -> &ShaderGenerator {
        &self.generator
    }

    /// Returns the module for the pair, generating it on first use.
    pub fn get_or_generate(
        &mut self,
        light: Option<&Light>,
        material: &Material,
    ) -> Result<Arc<ShaderModule>, ShaderError> {
        let identity = CodeIdentity::new(light, material);
        if let Some(module) = self.modules.get(&identity) {
            self.hits += 1;
            return Ok(Arc::clone(module));
        }
        self.misses += 1;
        let module = Arc::new(self.generator.generate(light, material)?);
        self.modules.insert(identity, Arc::clone(&module));
        Ok(module)
    }

    /// Looks up a cached module without generating.
    pub fn get(&self, identity: &CodeIdentity) -> Option<Arc<ShaderModule>> {
        self.modules.get(identity).cloned()
    }

    /// Generates every case not yet cached and returns how many were new.
    ///
    /// Does not touch the hit and miss counters.
    pub fn pregenerate(
        &mut self,
        cases: impl IntoIterator<Item = Case>,
    ) -> Result<usize, ShaderError> {
        let mut generated = 0;
        for case in cases {
            let identity = case.identity();
            if self.modules.contains_key(&identity) {
                continue;
            }
            let module = self.generator.generate_case(&case)?;
            self.modules.insert(identity, Arc::new(module));
            generated += 1;
        }
        log::info!(
            "Pregenerated {} shader modules ({} cached)",
            generated,
            self.modules.len()
        );
        Ok(generated)
    }

    /// Number of cached modules.
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Returns `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Drops every cached module. Counters are kept.
    pub fn clear(&mut self) {
        self.modules.clear();
    }

    /// Current counters.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            entries: self.modules.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_core::{
        material::{Albedo, Depth, Emissive, Environment, Normal, OpaqueRegular, Specular},
        math::LinearRgba,
    };

    fn opaque(colour: LinearRgba) -> Material {
        OpaqueRegular::new(
            Albedo::Untextured { colour },
            Depth::Constant,
            Emissive::None,
            Environment::None,
            Normal::Vertex,
            Specular::None,
        )
        .unwrap()
        .into()
    }

    #[test]
    fn same_shape_hits_the_cache() {
        let mut cache = ShaderCache::default();
        let red = cache.get_or_generate(None, &opaque(LinearRgba::RED)).unwrap();
        let blue = cache.get_or_generate(None, &opaque(LinearRgba::BLUE)).unwrap();

        assert!(Arc::ptr_eq(&red, &blue));
        assert_eq!(
            cache.stats(),
            CacheStats {
                hits: 1,
                misses: 1,
                entries: 1
            }
        );
        assert!(cache.get(&red.identity).is_some());
    }

    #[test]
    fn pregenerate_counts_only_new_modules() {
        let mut cache = ShaderCache::default();
        cache.get_or_generate(None, &opaque(LinearRgba::WHITE)).unwrap();

        let unlit = cases::unlit_cases().count();
        let generated = cache.pregenerate(cases::unlit_cases()).unwrap();
        assert_eq!(generated, unlit - 1);
        assert_eq!(cache.len(), unlit);
        assert_eq!(cache.pregenerate(cases::unlit_cases()).unwrap(), 0);

        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.stats().misses, 1);
    }

    #[test]
    fn settings_control_pregeneration() {
        let settings = ShadingSettings {
            pregenerate: true,
            ..Default::default()
        };
        let cache = ShaderCache::from_settings(&settings).unwrap();
        assert_eq!(cache.len(), cases::all_cases().count());
        assert!(ShaderCache::from_settings(&ShadingSettings::default())
            .unwrap()
            .is_empty());
    }
}
