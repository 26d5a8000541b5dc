//! Nearest-color matching against a catalog.

use serde::{Deserialize, Serialize};
use tint_core::{hex_to_rgb, ConfigError, Hex, Rgb, TintError};

use crate::catalog::CatalogColor;
use crate::distance::{MatchPolicy, Prepared};

/// Number of matches returned when the caller does not ask for a limit.
pub const DEFAULT_LIMIT: usize = 3;

/// A ranked catalog match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub hex: Hex,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    /// Distance under the matcher's policy, always >= 0.
    pub distance: f32,
    /// 100 for an exact match, falling linearly to 0.
    pub confidence: f32,
}

/// Matcher configuration as supplied by a host (JSON, JS object, ...).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MatchOptions {
    pub policy: MatchPolicy,
    /// Overrides the policy's default confidence scale.
    pub confidence_scale: Option<f32>,
}

/// Ranks catalog colors by distance to a target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorMatcher {
    policy: MatchPolicy,
    confidence_scale: f32,
}

impl Default for ColorMatcher {
    fn default() -> Self {
        Self::new(MatchPolicy::default())
    }
}

impl ColorMatcher {
    pub fn new(policy: MatchPolicy) -> Self {
        Self {
            policy,
            confidence_scale: policy.default_confidence_scale(),
        }
    }

    pub fn from_options(options: &MatchOptions) -> Result<Self, ConfigError> {
        let matcher = Self::new(options.policy);
        match options.confidence_scale {
            Some(scale) => matcher.with_confidence_scale(scale),
            None => Ok(matcher),
        }
    }

    /// Override the confidence lost per unit of distance.
    pub fn with_confidence_scale(mut self, scale: f32) -> Result<Self, ConfigError> {
        if !scale.is_finite() || scale < 0.0 {
            return Err(ConfigError::InvalidConfidenceScale { value: scale });
        }
        self.confidence_scale = scale;
        Ok(self)
    }

    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    pub fn confidence_scale(&self) -> f32 {
        self.confidence_scale
    }

    /// Confidence in [0, 100] for a distance.
    pub fn confidence(&self, distance: f32) -> f32 {
        (100.0 - distance * self.confidence_scale).clamp(0.0, 100.0)
    }

    /// The `limit` closest catalog entries, closest first.
    ///
    /// Ties keep catalog order. An empty catalog yields an empty result.
    pub fn find_nearest(&self, target: Rgb, catalog: &[CatalogColor], limit: usize) -> Vec<MatchResult> {
        self.find_nearest_where(target, catalog, limit, |_| true)
    }

    /// Like [`ColorMatcher::find_nearest`], considering only entries accepted by `filter`.
    pub fn find_nearest_where<F>(
        &self,
        target: Rgb,
        catalog: &[CatalogColor],
        limit: usize,
        filter: F,
    ) -> Vec<MatchResult>
    where
        F: Fn(&CatalogColor) -> bool,
    {
        tracing::debug!(
            color = %target,
            catalog = catalog.len(),
            limit,
            policy = %self.policy,
            "matching color"
        );

        if limit == 0 || catalog.is_empty() {
            return Vec::new();
        }

        let reference = self.policy.prepare(target);
        let mut ranked: Vec<(&CatalogColor, f32)> = catalog
            .iter()
            .filter(|c| filter(*c))
            .map(|c| (c, self.distance_to(&reference, c)))
            .collect();

        // Stable sort: equal distances keep catalog order.
        ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
        ranked.truncate(limit);

        ranked
            .into_iter()
            .map(|(color, distance)| {
                let confidence = self.confidence(distance);
                tracing::trace!(hex = %color.hex, distance, confidence, "match");
                MatchResult {
                    hex: color.hex.clone(),
                    name: color.name.clone(),
                    family: color.family.clone(),
                    distance,
                    confidence,
                }
            })
            .collect()
    }

    /// Match a hex string; the hex is validated before matching.
    pub fn find_nearest_hex(
        &self,
        hex: &str,
        catalog: &[CatalogColor],
        limit: usize,
    ) -> Result<Vec<MatchResult>, TintError> {
        let target = hex_to_rgb(hex)?;
        Ok(self.find_nearest(target, catalog, limit))
    }

    fn distance_to(&self, reference: &Prepared, color: &CatalogColor) -> f32 {
        let prepared = self.policy.prepare(color.rgb());
        self.policy.distance_prepared(reference, &prepared)
    }
}

/// Find the `limit` nearest catalog colors with the default matcher (Delta E 76).
pub fn find_nearest(target: Rgb, catalog: &[CatalogColor], limit: usize) -> Vec<MatchResult> {
    ColorMatcher::default().find_nearest(target, catalog, limit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use proptest::prelude::*;

    fn black_and_white() -> Catalog {
        Catalog::from_pairs([("#FFFFFF", "White"), ("#000000", "Black")]).unwrap()
    }

    fn garments() -> Catalog {
        Catalog::new(vec![
            CatalogColor::new("#B22222", "Firebrick").unwrap().with_family("Reds"),
            CatalogColor::new("#DC143C", "Crimson").unwrap().with_family("Reds"),
            CatalogColor::new("#000080", "Navy").unwrap().with_family("Blues"),
            CatalogColor::new("#4169E1", "Royal").unwrap().with_family("Blues"),
            CatalogColor::new("#228B22", "Forest").unwrap().with_family("Greens"),
            CatalogColor::new("#F5F5DC", "Beige").unwrap().with_family("Neutrals"),
            CatalogColor::new("#808080", "Heather").unwrap().with_family("Neutrals"),
        ])
    }

    #[test]
    fn test_near_white_matches_white() {
        let catalog = black_and_white();
        for policy in MatchPolicy::ALL {
            let matcher = ColorMatcher::new(policy);
            let results = matcher.find_nearest(Rgb::new(0xFE, 0xFE, 0xFE), catalog.as_slice(), 3);
            assert_eq!(results.len(), 2);
            assert_eq!(results[0].name, "White", "{policy}");
            assert!(results[0].distance < 1.0, "{policy}: {}", results[0].distance);
            assert!(results[0].confidence > 99.0, "{policy}: {}", results[0].confidence);
            assert!(results[1].confidence < 1.0, "{policy}: {}", results[1].confidence);
        }
    }

    #[test]
    fn test_exact_match_first() {
        let catalog = garments();
        for (i, color) in catalog.iter().enumerate() {
            let results = find_nearest(color.rgb(), catalog.as_slice(), DEFAULT_LIMIT);
            assert_eq!(results[0].name, color.name, "entry {i}");
            assert_eq!(results[0].distance, 0.0);
            assert_eq!(results[0].confidence, 100.0);
        }
    }

    #[test]
    fn test_reddish_target_prefers_reds() {
        let results = find_nearest(Rgb::new(200, 30, 40), garments().as_slice(), 2);
        let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names.len(), 2);
        assert!(names.iter().all(|n| *n == "Firebrick" || *n == "Crimson"), "{names:?}");
        assert_eq!(results[0].family.as_deref(), Some("Reds"));
    }

    #[test]
    fn test_empty_catalog_and_zero_limit() {
        assert!(find_nearest(Rgb::WHITE, &[], 3).is_empty());
        assert!(find_nearest(Rgb::WHITE, garments().as_slice(), 0).is_empty());
    }

    #[test]
    fn test_limit_beyond_catalog_returns_all_sorted() {
        let catalog = garments();
        let results = find_nearest(Rgb::new(10, 10, 10), catalog.as_slice(), 100);
        assert_eq!(results.len(), catalog.len());
        assert!(results.windows(2).all(|w| w[0].distance <= w[1].distance));
    }

    #[test]
    fn test_duplicates_preserved_in_catalog_order() {
        let catalog = Catalog::from_pairs([
            ("#123456", "First"),
            ("#FFFFFF", "White"),
            ("#123456", "Second"),
        ])
        .unwrap();
        let results = find_nearest(Rgb::new(0x12, 0x34, 0x56), catalog.as_slice(), 3);
        let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second", "White"]);
    }

    #[test]
    fn test_filter_by_family() {
        let catalog = garments();
        let results = ColorMatcher::default().find_nearest_where(
            Rgb::new(200, 30, 40),
            catalog.as_slice(),
            5,
            |c| c.in_family("blues"),
        );
        let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names.len(), 2);
        assert!(names.contains(&"Navy") && names.contains(&"Royal"));
    }

    #[test]
    fn test_find_nearest_hex() {
        let catalog = black_and_white();
        let results = ColorMatcher::default()
            .find_nearest_hex("#111", catalog.as_slice(), 1)
            .unwrap();
        assert_eq!(results[0].name, "Black");

        assert!(ColorMatcher::default()
            .find_nearest_hex("#11", catalog.as_slice(), 1)
            .is_err());
    }

    #[test]
    fn test_confidence_scale_override() {
        let matcher = ColorMatcher::new(MatchPolicy::DeltaE76)
            .with_confidence_scale(2.0)
            .unwrap();
        assert_eq!(matcher.confidence(10.0), 80.0);
        assert_eq!(matcher.confidence(80.0), 0.0);

        let flat = ColorMatcher::default().with_confidence_scale(0.0).unwrap();
        assert_eq!(flat.confidence(500.0), 100.0);

        assert!(ColorMatcher::default().with_confidence_scale(-1.0).is_err());
        assert!(ColorMatcher::default().with_confidence_scale(f32::NAN).is_err());
    }

    #[test]
    fn test_weighted_rgb_scale() {
        let matcher = ColorMatcher::new(MatchPolicy::WeightedRgb);
        let results = matcher.find_nearest(Rgb::BLACK, black_and_white().as_slice(), 2);
        assert_eq!(results[0].confidence, 100.0);
        assert!(results[1].confidence < 0.1, "{}", results[1].confidence);
    }

    #[test]
    fn test_options_from_json() {
        let options: MatchOptions =
            serde_json::from_str(r#"{"policy": "ciede2000", "confidenceScale": 1.5}"#).unwrap();
        let matcher = ColorMatcher::from_options(&options).unwrap();
        assert_eq!(matcher.policy(), MatchPolicy::DeltaE2000);
        assert_eq!(matcher.confidence_scale(), 1.5);

        let defaults: MatchOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(ColorMatcher::from_options(&defaults).unwrap(), ColorMatcher::default());

        assert!(serde_json::from_str::<MatchOptions>(r#"{"policy": "hsv"}"#).is_err());
    }

    fn any_catalog() -> impl Strategy<Value = Vec<CatalogColor>> {
        prop::collection::vec(any::<[u8; 3]>(), 0..24).prop_map(|colors| {
            colors
                .into_iter()
                .enumerate()
                .map(|(i, c)| CatalogColor {
                    hex: Hex::from(Rgb::from(c)),
                    name: format!("c{i}"),
                    family: None,
                    tags: Vec::new(),
                })
                .collect()
        })
    }

    fn any_policy() -> impl Strategy<Value = MatchPolicy> {
        prop_oneof![
            Just(MatchPolicy::DeltaE76),
            Just(MatchPolicy::DeltaE2000),
            Just(MatchPolicy::WeightedRgb),
        ]
    }

    proptest! {
        #[test]
        fn prop_results_bounded_and_sorted(
            target in any::<[u8; 3]>(),
            catalog in any_catalog(),
            limit in 0usize..10,
            policy in any_policy()
        ) {
            let results = ColorMatcher::new(policy).find_nearest(Rgb::from(target), &catalog, limit);
            prop_assert!(results.len() == limit.min(catalog.len()));
            prop_assert!(results.windows(2).all(|w| w[0].distance <= w[1].distance));
            for r in &results {
                prop_assert!(r.distance >= 0.0);
                prop_assert!((0.0..=100.0).contains(&r.confidence));
            }
        }

        #[test]
        fn prop_member_found_first(
            catalog in any_catalog().prop_filter("non-empty", |c| !c.is_empty()),
            pick in any::<prop::sample::Index>(),
            policy in any_policy()
        ) {
            let member = &catalog[pick.index(catalog.len())];
            let results = ColorMatcher::new(policy).find_nearest(member.rgb(), &catalog, 1);
            prop_assert_eq!(results[0].distance, 0.0);
            prop_assert_eq!(results[0].confidence, 100.0);
            prop_assert_eq!(&results[0].hex, &member.hex);
        }
    }
}
