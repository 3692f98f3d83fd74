use std::collections::BTreeMap;

use shufflesim_engine::deck::Deck;
use shufflesim_engine::errors::StatsError;
use shufflesim_engine::rng::seeded;
use shufflesim_engine::shuffle::{IdealShuffler, RiffleShuffler};
use shufflesim_engine::sim::{simulate, SimParams, SimResult};
use shufflesim_engine::stats::{
    empirical_distro, ideal_distro, ideal_distro_stats, kl_divergence, kl_divergences, sim_stats,
    Distribution,
};

fn fixture(rounds: &[(u32, &[u32])]) -> SimResult {
    let map: BTreeMap<u32, Vec<u32>> = rounds.iter().map(|&(r, d)| (r, d.to_vec())).collect();
    SimResult::from_rounds(map)
}

#[test]
fn ideal_distro_weights_sum_to_one() {
    for deck_len in [2usize, 3, 10, 52, 60, 200] {
        let distro = ideal_distro(deck_len).unwrap();
        assert_eq!(distro.len(), deck_len - 1);
        let total: f64 = distro.weights().iter().sum();
        assert!(
            (total - 1.0).abs() < 1e-9,
            "weights sum to {} for deck of {}",
            total,
            deck_len
        );
        assert!(distro.weights().iter().all(|&w| w >= 0.0));
    }
}

#[test]
fn ideal_distro_weights_decrease_linearly() {
    // Weight at distance d is proportional to (N - d).
    let distro = ideal_distro(60).unwrap();
    let w = distro.weights();
    assert!(w.windows(2).all(|pair| pair[0] > pair[1]));
    // w(1) / w(59) = 59 / 1
    assert!((w[0] / w[58] - 59.0).abs() < 1e-9);
}

#[test]
fn degenerate_decks_are_rejected() {
    assert_eq!(ideal_distro(0).unwrap_err(), StatsError::DegenerateDeck(0));
    assert_eq!(ideal_distro(1).unwrap_err(), StatsError::DegenerateDeck(1));
}

#[test]
fn ideal_stats_use_cdf_threshold_crossing() {
    let distro = Distribution::new(vec![1, 2, 3], vec![0.5, 0.3, 0.2]).unwrap();
    let stats = ideal_distro_stats(&distro);
    assert!((stats.mean - 1.7).abs() < 1e-12);
    assert_eq!(stats.p5, 1);
    assert_eq!(stats.p25, 1);
    assert_eq!(stats.p75, 2);
    assert_eq!(stats.p95, 3);
}

#[test]
fn ideal_stats_for_a_two_card_deck() {
    let distro = ideal_distro(2).unwrap();
    let stats = ideal_distro_stats(&distro);
    assert!((stats.mean - 1.0).abs() < 1e-12);
    assert_eq!((stats.p5, stats.p25, stats.p75, stats.p95), (1, 1, 1, 1));
}

#[test]
fn sim_stats_align_to_sorted_rounds() {
    let result = fixture(&[(1, &[2, 4, 6]), (2, &[1, 3, 5])]);
    let stats = sim_stats(&result).unwrap();

    let close = |a: &[f64], b: &[f64]| {
        a.len() == b.len() && a.iter().zip(b).all(|(x, y)| (x - y).abs() < 1e-9)
    };

    assert_eq!(stats.rounds, vec![1, 2]);
    assert!(close(&stats.mean, &[4.0, 3.0]));
    assert!(close(&stats.median, &[4.0, 3.0]));
    // linear-interpolation quantiles
    assert!(close(&stats.p25, &[3.0, 2.0]));
    assert!(close(&stats.p75, &[5.0, 4.0]));
    assert!(close(&stats.p5, &[2.2, 1.2]));
    assert!(close(&stats.p95, &[5.8, 4.8]));
}

#[test]
fn sim_stats_reject_an_empty_result() {
    let result = SimResult::new();
    assert_eq!(sim_stats(&result).unwrap_err(), StatsError::EmptyResult);
}

#[test]
fn empirical_distro_normalizes_the_histogram() {
    let distro = empirical_distro(&[1, 1, 2], 3).unwrap();
    assert_eq!(distro.support(), &[1, 2, 3]);
    let w = distro.weights();
    assert!((w[0] - 2.0 / 3.0).abs() < 1e-12);
    assert!((w[1] - 1.0 / 3.0).abs() < 1e-12);
    assert_eq!(w[2], 0.0);
}

#[test]
fn empirical_distro_rejects_an_all_zero_histogram() {
    assert_eq!(
        empirical_distro(&[], 59).unwrap_err(),
        StatsError::EmptyHistogram
    );
    // Observations entirely outside the support count for nothing.
    assert_eq!(
        empirical_distro(&[0, 60, 100], 59).unwrap_err(),
        StatsError::EmptyHistogram
    );
}

#[test]
fn kl_of_identical_distributions_is_near_zero() {
    let p = Distribution::new(vec![1, 2], vec![0.5, 0.5]).unwrap();
    let q = Distribution::new(vec![1, 2], vec![0.5, 0.5]).unwrap();
    let kl = kl_divergence(&p, &q).unwrap();
    assert!(kl.abs() < 1e-4, "kl = {}", kl);
}

#[test]
fn kl_with_zero_reference_mass_is_large_but_finite() {
    let p = Distribution::new(vec![1, 2], vec![0.5, 0.5]).unwrap();
    let q = Distribution::new(vec![1, 2], vec![1.0, 0.0]).unwrap();
    let kl = kl_divergence(&p, &q).unwrap();
    assert!(kl.is_finite(), "epsilon guard failed: {}", kl);
    assert!(kl > 1.0, "expected a large divergence, got {}", kl);
}

#[test]
fn kl_rejects_mismatched_supports() {
    let p = Distribution::new(vec![1, 2], vec![0.5, 0.5]).unwrap();
    let q = Distribution::new(vec![1], vec![1.0]).unwrap();
    assert_eq!(
        kl_divergence(&p, &q).unwrap_err(),
        StatsError::SupportMismatch { p: 2, q: 1 }
    );
}

#[test]
fn riffle_divergence_trends_toward_zero() {
    let deck = Deck::sequential(60);
    let params = SimParams {
        n_sims: 500,
        n_shuffles: 12,
        marked: (0, 1),
    };
    let result = simulate(&deck, RiffleShuffler::new, &params, &mut seeded(7)).unwrap();
    let ideal = ideal_distro(60).unwrap();
    let divs = kl_divergences(&result, &ideal).unwrap();

    assert_eq!(divs.len(), 12);
    let first = divs[0];
    let last = *divs.last().unwrap();
    assert!(first > 1.0, "one riffle should be far from ideal: {}", first);
    assert!(
        last < first * 0.5,
        "divergence failed to shrink: first {} last {}",
        first,
        last
    );
}

#[test]
fn ideal_shuffler_divergence_is_small_from_the_first_round() {
    let deck = Deck::sequential(60);
    let params = SimParams {
        n_sims: 500,
        n_shuffles: 5,
        marked: (0, 1),
    };
    let result = simulate(&deck, || IdealShuffler, &params, &mut seeded(13)).unwrap();
    let ideal = ideal_distro(60).unwrap();
    let divs = kl_divergences(&result, &ideal).unwrap();

    // Sampling noise keeps this above zero but every round sits inside a
    // tight band.
    for (i, kl) in divs.iter().enumerate() {
        assert!(*kl < 0.5, "round {} diverged: {}", i + 1, kl);
        assert!(kl.is_finite());
    }
}

#[test]
fn end_to_end_summary_matches_the_ideal_reference() {
    // After many ideal shuffles the empirical mean separation approaches the
    // analytic mean of the ideal distribution.
    let deck = Deck::sequential(60);
    let params = SimParams {
        n_sims: 800,
        n_shuffles: 3,
        marked: (0, 1),
    };
    let result = simulate(&deck, || IdealShuffler, &params, &mut seeded(17)).unwrap();
    let stats = sim_stats(&result).unwrap();
    let reference = ideal_distro_stats(&ideal_distro(60).unwrap());

    for (round, mean) in stats.rounds.iter().zip(&stats.mean) {
        assert!(
            (mean - reference.mean).abs() < 2.5,
            "round {} mean {} too far from ideal {}",
            round,
            mean,
            reference.mean
        );
    }
}
