#![cfg(feature = "parallel")]

mod support;

use ashby_hull::pipeline::parallel::ParallelBoundaryOps;
use ashby_hull::pipeline::serial::SerialBoundaryOps;
use ashby_hull::{BoundaryOps, HullConfig};
use nalgebra::Point2;

#[test]
fn parallel_batch_matches_serial_batch() {
    let categories = vec![
        support::foams(),
        support::ceramics(),
        vec![Point2::new(5.0, 5.0)],
        support::unit_decade_square(),
    ];
    let config = HullConfig::default();
    let serial = SerialBoundaryOps::new().compute_boundaries(&categories, &config);
    let parallel = ParallelBoundaryOps::new().compute_boundaries(&categories, &config);
    assert_eq!(serial.len(), parallel.len());
    for (s, p) in serial.into_iter().zip(parallel) {
        assert_eq!(s.unwrap(), p.unwrap());
    }
}
