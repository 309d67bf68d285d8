use entity::prelude::{ContentStyle, EngagementTier, Niche};

use crate::server::config::AppConfig;

use super::*;

fn seeded_state(test: &TestSetup) -> AppState {
    AppState::new(
        test.fixtures.clone(),
        AppConfig {
            smart_match_seed: Some(11),
            ..Default::default()
        },
    )
}

fn criteria() -> MatchCriteria {
    MatchCriteria {
        niche: Some(Niche::Fashion),
        content_style: Some(ContentStyle::Creative),
        engagement_tier: EngagementTier::High,
        quality_score: 4,
        ..Default::default()
    }
}

/// Expect at most twelve niche candidates, best match first
#[tokio::test]
async fn returns_top_matches_for_niche() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    let state = seeded_state(&test);

    let matches = ProductService::new(&state)
        .get_recommendations(criteria())
        .await
        .unwrap();

    assert_eq!(matches.len(), smart_match::TOP_MATCHES);
    for pair in matches.windows(2) {
        assert!(pair[0].match_score >= pair[1].match_score);
    }
    for m in &matches {
        assert!(
            m.influencer.niche == Niche::Fashion
                || m.influencer.secondary_niches.contains(&Niche::Fashion)
        );
        assert!((0.0..=100.0).contains(&m.match_score));
    }

    Ok(())
}

/// Expect identical criteria to be answered from the cache
#[tokio::test]
async fn caches_by_criteria() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    let state = seeded_state(&test);
    let product_service = ProductService::new(&state);

    let first = product_service.get_recommendations(criteria()).await.unwrap();
    let second = product_service.get_recommendations(criteria()).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(state.cache.recommendations.lock().await.len(), 1);

    Ok(())
}

/// Expect an active boost to raise every score
#[tokio::test]
async fn boost_raises_scores() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    let state = seeded_state(&test);
    let product_service = ProductService::new(&state);

    let plain = product_service.get_recommendations(criteria()).await.unwrap();
    let boosted = product_service
        .get_recommendations(MatchCriteria {
            boost_active: true,
            boost_multiplier: 2.0,
            ..criteria()
        })
        .await
        .unwrap();

    // Unboosted scores top out at 90, so the 2x boost adds its full 6 points
    assert_eq!(boosted[0].match_score, plain[0].match_score + 6.0);

    Ok(())
}
