//! SmartMatch influencer recommendations.
//!
//! A synthetic pool of influencer profiles is generated once per application state from a
//! seedable RNG. Recommendations keep the profiles whose primary or secondary niche matches the
//! requested niche, score each one with [`score`] and return the best [`TOP_MATCHES`].

use entity::prelude::{ContentStyle, EngagementTier, Niche};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::model::product::{InfluencerMatch, InfluencerProfile, MatchCriteria};

/// Number of recommendations returned per request.
pub const TOP_MATCHES: usize = 12;

const NAMES: [&str; 20] = [
    "Sarah Johnson",
    "Mike Chen",
    "Emma Rodriguez",
    "David Kim",
    "Lisa Zhang",
    "Alex Thompson",
    "Maya Patel",
    "Ryan Williams",
    "Zoe Martinez",
    "Jake Brown",
    "Ava Davis",
    "Ethan Wilson",
    "Sophia Lee",
    "Noah Garcia",
    "Olivia Moore",
    "Lucas Anderson",
    "Mia Taylor",
    "Liam Jackson",
    "Isabella White",
    "Mason Harris",
];

/// Points awarded by each scoring component.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchWeights {
    /// Influencer's primary niche is the requested niche
    pub niche: f64,
    /// Requested niche is only one of the influencer's secondary niches
    pub secondary_niche: f64,
    /// Awarded for an exact quality score match
    pub quality: f64,
    /// Deducted from `quality` per point of quality score difference
    pub quality_penalty: f64,
    /// Awarded for an exact engagement tier match
    pub tier: f64,
    /// Deducted from `tier` per step between engagement tiers
    pub tier_penalty: f64,
    /// Content style matches
    pub style: f64,
    /// Ceiling of the boost bonus
    pub boost_max: f64,
    /// Boost bonus per unit of boost multiplier
    pub boost_per_multiplier: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            niche: 40.0,
            secondary_niche: 25.0,
            quality: 20.0,
            quality_penalty: 5.0,
            tier: 20.0,
            tier_penalty: 7.0,
            style: 10.0,
            boost_max: 10.0,
            boost_per_multiplier: 3.0,
        }
    }
}

/// Score how well an influencer fits the criteria, between 0 and 100.
pub fn score(
    influencer: &InfluencerProfile,
    criteria: &MatchCriteria,
    weights: &MatchWeights,
) -> f64 {
    let mut score = 0.0;

    if let Some(niche) = criteria.niche {
        if influencer.niche == niche {
            score += weights.niche;
        } else if influencer.secondary_niches.contains(&niche) {
            score += weights.secondary_niche;
        }
    }

    let quality_diff = f64::from(influencer.quality_score.abs_diff(criteria.quality_score));
    score += (weights.quality - quality_diff * weights.quality_penalty).max(0.0);

    let tier_diff = f64::from(
        influencer
            .engagement_tier
            .rank()
            .abs_diff(criteria.engagement_tier.rank()),
    );
    score += (weights.tier - tier_diff * weights.tier_penalty).max(0.0);

    if criteria.content_style == Some(influencer.content_style) {
        score += weights.style;
    }

    if criteria.boost_active {
        score += (criteria.boost_multiplier * weights.boost_per_multiplier).min(weights.boost_max);
    }

    score.clamp(0.0, 100.0)
}

/// Whether the influencer is a candidate for the criteria's niche.
pub fn is_candidate(influencer: &InfluencerProfile, criteria: &MatchCriteria) -> bool {
    match criteria.niche {
        Some(niche) => influencer.niche == niche || influencer.secondary_niches.contains(&niche),
        None => true,
    }
}

/// Score every candidate of the pool and keep the best matches, highest score first.
pub fn recommend(
    pool: &[InfluencerProfile],
    criteria: &MatchCriteria,
    weights: &MatchWeights,
) -> Vec<InfluencerMatch> {
    let mut matches: Vec<InfluencerMatch> = pool
        .iter()
        .filter(|influencer| is_candidate(influencer, criteria))
        .map(|influencer| InfluencerMatch {
            influencer: influencer.clone(),
            match_score: score(influencer, criteria, weights),
        })
        .collect();

    // Stable sort keeps pool order between equal scores
    matches.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));
    matches.truncate(TOP_MATCHES);

    matches
}

/// Generate the synthetic influencer pool.
///
/// The same `seed` always produces the same pool; `None` seeds from the operating system.
pub fn generate_pool(size: usize, seed: Option<u64>) -> Vec<InfluencerProfile> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    (0..size)
        .map(|index| generate_influencer(index, &mut rng))
        .collect()
}

fn generate_influencer(index: usize, rng: &mut StdRng) -> InfluencerProfile {
    let base_name = NAMES[index % NAMES.len()];
    let name = if index >= NAMES.len() {
        format!("{} {}", base_name, index / NAMES.len())
    } else {
        base_name.to_string()
    };

    let username = format!(
        "{}{}",
        base_name.to_lowercase().replace(' ', ""),
        rng.random_range(0..999)
    );
    let followers: u64 = rng.random_range(100_000..1_000_000);
    let engagement: f64 = rng.random_range(1.0..9.0);

    InfluencerProfile {
        id: index as u32 + 1,
        name,
        username,
        niche: pick(&Niche::ALL, rng),
        secondary_niches: vec![pick(&Niche::ALL, rng)],
        followers: format!("{}K", followers / 1000),
        engagement: format!("{:.1}%", engagement),
        quality_score: rng.random_range(3..=5),
        content_style: pick(&ContentStyle::ALL, rng),
        engagement_tier: pick(&EngagementTier::ALL, rng),
        average_views: rng.random_range(50_000..550_000),
        response_rate: rng.random_range(70..100),
    }
}

fn pick<T: Copy>(options: &[T], rng: &mut StdRng) -> T {
    options[rng.random_range(0..options.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn influencer(niche: Niche, secondary: Niche) -> InfluencerProfile {
        InfluencerProfile {
            id: 1,
            name: "Sarah Johnson".to_string(),
            username: "sarahjohnson1".to_string(),
            niche,
            secondary_niches: vec![secondary],
            followers: "245K".to_string(),
            engagement: "4.2%".to_string(),
            quality_score: 4,
            content_style: ContentStyle::Authentic,
            engagement_tier: EngagementTier::High,
            average_views: 120_000,
            response_rate: 90,
        }
    }

    fn criteria(niche: Niche) -> MatchCriteria {
        MatchCriteria {
            niche: Some(niche),
            content_style: Some(ContentStyle::Authentic),
            engagement_tier: EngagementTier::High,
            quality_score: 4,
            ..Default::default()
        }
    }

    /// Expect 40 + 20 + 20 + 10 for a perfect match without boost
    #[test]
    fn perfect_match_without_boost_scores_ninety() {
        let weights = MatchWeights::default();

        let score = score(
            &influencer(Niche::Beauty, Niche::Food),
            &criteria(Niche::Beauty),
            &weights,
        );

        assert_eq!(score, 90.0);
    }

    #[test]
    fn secondary_niche_and_penalties() {
        let weights = MatchWeights::default();
        let mut influencer = influencer(Niche::Food, Niche::Beauty);
        influencer.quality_score = 3;
        influencer.engagement_tier = EngagementTier::Low;
        influencer.content_style = ContentStyle::Creative;

        // 25 + (20 - 5) + (20 - 14) + 0
        assert_eq!(score(&influencer, &criteria(Niche::Beauty), &weights), 46.0);
    }

    #[test]
    fn boost_bonus_is_capped() {
        let weights = MatchWeights::default();
        let mut boosted = criteria(Niche::Beauty);
        boosted.boost_active = true;
        boosted.boost_multiplier = 2.0;

        let influencer = influencer(Niche::Beauty, Niche::Food);
        assert_eq!(score(&influencer, &boosted, &weights), 96.0);

        boosted.boost_multiplier = 5.0;
        assert_eq!(score(&influencer, &boosted, &weights), 100.0);
    }

    #[test]
    fn tier_penalty_never_goes_negative() {
        let weights = MatchWeights::default();
        let mut influencer = influencer(Niche::Tech, Niche::Tech);
        influencer.engagement_tier = EngagementTier::Premium;
        let mut criteria = criteria(Niche::Gaming);
        criteria.engagement_tier = EngagementTier::Low;
        criteria.content_style = None;

        // No niche, full quality, tier 20 - 21 floors at 0
        assert_eq!(score(&influencer, &criteria, &weights), 20.0);
    }

    #[test]
    fn recommendations_are_candidates_sorted_by_score() {
        let pool = generate_pool(500, Some(7));
        let criteria = criteria(Niche::Tech);

        let matches = recommend(&pool, &criteria, &MatchWeights::default());

        assert_eq!(matches.len(), TOP_MATCHES);
        assert!(matches
            .iter()
            .all(|m| is_candidate(&m.influencer, &criteria)));
        assert!(matches
            .windows(2)
            .all(|pair| pair[0].match_score >= pair[1].match_score));
    }

    #[test]
    fn seeded_pools_are_reproducible() {
        let first = generate_pool(50, Some(42));
        let second = generate_pool(50, Some(42));

        assert_eq!(first, second);
        assert_eq!(first[0].name, "Sarah Johnson");
        assert_eq!(first[20].name, "Sarah Johnson 1");
        assert!(first.iter().all(|i| (3..=5).contains(&i.quality_score)));
    }
}
