use proptest::prelude::*;

use routegen_core::constructive::optimize;
use routegen_core::distance::MatrixModel;
use routegen_core::evaluation::{aggregate, cost_of};
use routegen_core::models::{CostConfig, RouteOrder, Strategy as RouteStrategy};

fn square(n: usize) -> impl Strategy<Value = Vec<Vec<f64>>> {
    prop::collection::vec(prop::collection::vec(0.0f64..50_000.0, n), n)
}

fn model() -> impl Strategy<Value = MatrixModel> {
    (2usize..9).prop_flat_map(|n| {
        (square(n), square(n)).prop_map(|(durations, distances)| {
            MatrixModel::from_rows(&durations, &distances).expect("generated matrices are valid")
        })
    })
}

fn config() -> impl Strategy<Value = CostConfig> {
    (
        0.0f64..3.0,
        0.0f64..20.0,
        0.0f64..40.0,
        0.0f64..1.0,
        0.0f64..100.0,
    )
        .prop_map(|(price, consumption, rate, overhead, margin)| {
            CostConfig::new(price, consumption, rate, overhead, margin)
        })
}

fn any_strategy() -> impl Strategy<Value = RouteStrategy> {
    prop::sample::select(RouteStrategy::ALL.to_vec())
}

proptest! {
    #[test]
    fn every_strategy_returns_a_permutation(m in model(), s in any_strategy()) {
        let order = optimize(&m, s).unwrap();
        prop_assert!(order.validate_for(m.size()).is_ok());
    }

    #[test]
    fn original_is_identity(m in model()) {
        let order = optimize(&m, RouteStrategy::Original).unwrap();
        prop_assert_eq!(order, RouteOrder::identity(m.size()));
    }

    #[test]
    fn greedy_walks_start_at_zero(m in model()) {
        let greedy = [
            RouteStrategy::NearestNeighbor,
            RouteStrategy::ShortestFirst,
            RouteStrategy::FastestFirst,
        ];
        for s in greedy {
            prop_assert_eq!(optimize(&m, s).unwrap().as_slice()[0], 0);
        }
    }

    #[test]
    fn nearest_equals_shortest(m in model()) {
        prop_assert_eq!(
            optimize(&m, RouteStrategy::NearestNeighbor).unwrap(),
            optimize(&m, RouteStrategy::ShortestFirst).unwrap()
        );
    }

    #[test]
    fn optimize_is_idempotent(m in model(), s in any_strategy()) {
        prop_assert_eq!(optimize(&m, s).unwrap(), optimize(&m, s).unwrap());
    }

    #[test]
    fn cumulative_fields_are_monotone(m in model(), s in any_strategy(), c in config()) {
        let order = optimize(&m, s).unwrap();
        let legs = aggregate(&m, &order, &c).unwrap();
        prop_assert_eq!(legs.len(), m.size() - 1);

        let mut previous = (0.0, 0.0, 0.0);
        for leg in &legs {
            prop_assert!(leg.cumulative_distance_km >= previous.0);
            prop_assert!(leg.cumulative_duration_min >= previous.1);
            prop_assert!(leg.cumulative_cost >= previous.2);
            previous = (
                leg.cumulative_distance_km,
                leg.cumulative_duration_min,
                leg.cumulative_cost,
            );
        }

        let last = legs.last().unwrap();
        let distance: f64 = legs.iter().map(|l| l.distance_km).sum();
        let duration: f64 = legs.iter().map(|l| l.duration_min).sum();
        let cost: f64 = legs.iter().map(|l| l.cost).sum();
        prop_assert!((last.cumulative_distance_km - distance).abs() < 1e-6);
        prop_assert!((last.cumulative_duration_min - duration).abs() < 1e-6);
        prop_assert!((last.cumulative_cost - cost).abs() < 1e-6);
    }

    #[test]
    fn zero_leg_costs_nothing(c in config()) {
        prop_assert_eq!(cost_of(0.0, 0.0, &c), 0.0);
    }
}

#[test]
fn reference_scenario() {
    let m = MatrixModel::from_rows(
        &[
            vec![0.0, 60.0, 180.0],
            vec![60.0, 0.0, 120.0],
            vec![180.0, 120.0, 0.0],
        ],
        &[
            vec![0.0, 1000.0, 3000.0],
            vec![1000.0, 0.0, 2000.0],
            vec![3000.0, 2000.0, 0.0],
        ],
    )
    .unwrap();
    let order = optimize(&m, RouteStrategy::NearestNeighbor).unwrap();
    assert_eq!(order.as_slice(), &[0, 1, 2]);

    let config = CostConfig::new(1.55, 8.0, 15.0, 0.05, 20.0);
    let legs = aggregate(&m, &order, &config).unwrap();
    assert_eq!(legs[0].cost, 0.51);
}
