//! Asset factory: creates synthetic asset records on demand.
//!
//! The factory is deterministic given the same seed, enabling reproducible
//! simulations for testing and debugging.

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use types::{ASSET_ID_SUFFIX_MAX, ASSET_ID_SUFFIX_MIN, AssetId, AssetRecord, AssetType, CorpId};

/// Creates new [`AssetRecord`]s with a randomly drawn type and id suffix.
///
/// No uniqueness check is performed on generated ids: two calls may produce
/// identical ids (roughly 1/9000 per pair within the same type prefix).
pub struct AssetFactory {
    rng: StdRng,
}

impl AssetFactory {
    /// Create a factory with a fixed seed for reproducible output.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a factory seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a new asset issued under `corp_id`.
    ///
    /// The asset type is drawn uniformly from [`AssetType::ALL`], the id
    /// suffix uniformly from 1000..=9999. `reinvested` and
    /// `transferable_value` start at zero; `creation_time` is stamped with
    /// the current wall-clock time. This operation cannot fail.
    pub fn create(&mut self, corp_id: impl Into<CorpId>, monetized_value: f64) -> AssetRecord {
        let asset_type = AssetType::ALL[self.rng.random_range(0..AssetType::ALL.len())];
        let suffix = self
            .rng
            .random_range(ASSET_ID_SUFFIX_MIN..=ASSET_ID_SUFFIX_MAX);

        AssetRecord {
            asset_id: AssetId(format!("{}-{}", asset_type.id_prefix(), suffix)),
            corp_id: corp_id.into(),
            asset_type,
            creation_time: Utc::now(),
            monetized_value,
            reinvested: 0,
            transferable_value: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_created_asset_shape() {
        let mut factory = AssetFactory::new(42);

        for _ in 0..200 {
            let asset = factory.create("AtlasCorp-A", 0.0);

            assert!(AssetType::ALL.contains(&asset.asset_type));
            assert_eq!(asset.corp_id, "AtlasCorp-A");
            assert_eq!(asset.reinvested, 0);
            assert_eq!(asset.transferable_value, 0.0);

            let (prefix, suffix) = asset
                .asset_id
                .as_str()
                .split_once('-')
                .expect("id has a dash");
            assert_eq!(prefix, asset.asset_type.id_prefix());
            let suffix: u32 = suffix.parse().expect("numeric suffix");
            assert!((1000..=9999).contains(&suffix));
        }
    }

    #[test]
    fn test_initial_valuation_passed_through() {
        let mut factory = AssetFactory::new(7);
        let asset = factory.create("AtlasCorp-B", 12.5);
        assert_eq!(asset.monetized_value, 12.5);
        // Only the synchronizer sets transferable_value.
        assert_eq!(asset.transferable_value, 0.0);
    }

    #[test]
    fn test_seeded_factories_are_deterministic() {
        let mut a = AssetFactory::new(99);
        let mut b = AssetFactory::new(99);

        for _ in 0..50 {
            let x = a.create("AtlasCorp-C", 0.0);
            let y = b.create("AtlasCorp-C", 0.0);
            assert_eq!(x.asset_id, y.asset_id);
            assert_eq!(x.asset_type, y.asset_type);
        }
    }
}
