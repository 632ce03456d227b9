use log::debug;

use super::model::{Customer, GeoPoint, Invitation};
use crate::config::Config;

/// Mean Earth radius.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

pub const DEFAULT_THRESHOLD_KM: f64 = 100.0;

// ---------------------------------------------------------------------------
// Great-circle distance
// ---------------------------------------------------------------------------

/// Haversine great-circle distance between two points, in the unit of
/// `earth_radius_km`.
///
/// Exactly `0.0` for identical points and symmetric in `a` / `b`.
pub fn haversine_km(a: &GeoPoint, b: &GeoPoint, earth_radius_km: f64) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let d_lat = (lat2 - lat1).abs();
    let d_lon = (b.longitude.to_radians() - a.longitude.to_radians()).abs();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    // Rounding can push h a hair above 1 for antipodal points.
    let c = 2.0 * h.min(1.0).sqrt().asin();

    c * earth_radius_km
}

// ---------------------------------------------------------------------------
// DistanceFilter – keeps customers within a radius of the reference point
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceFilter {
    reference: GeoPoint,
    earth_radius_km: f64,
    threshold_km: f64,
}

impl DistanceFilter {
    pub fn new(reference: GeoPoint, earth_radius_km: f64, threshold_km: f64) -> Self {
        Self {
            reference,
            earth_radius_km,
            threshold_km,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.reference, config.earth_radius_km, config.threshold_km)
    }

    pub fn reference(&self) -> GeoPoint {
        self.reference
    }

    pub fn threshold_km(&self) -> f64 {
        self.threshold_km
    }

    /// Distance from the reference point.
    pub fn distance_to(&self, point: &GeoPoint) -> f64 {
        haversine_km(&self.reference, point, self.earth_radius_km)
    }

    /// Keep customers whose distance is `<= threshold_km`, preserving input order.
    pub fn select_within_radius(&self, customers: Vec<Customer>) -> Vec<Invitation> {
        customers
            .into_iter()
            .filter_map(|customer| {
                let distance_km = self.distance_to(&customer.location);
                let invited = distance_km <= self.threshold_km;
                debug!(
                    "customer {} ({}) at {:.3} km: {}",
                    customer.user_id,
                    customer.name,
                    distance_km,
                    if invited { "invited" } else { "excluded" }
                );
                invited.then_some(Invitation {
                    customer,
                    distance_km,
                })
            })
            .collect()
    }
}

/// Stable ascending sort by `user_id`.
pub fn sort_by_identifier(invitations: &mut [Invitation]) {
    invitations.sort_by_key(Invitation::user_id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_REFERENCE;

    fn customer(user_id: i64, name: &str, latitude: f64, longitude: f64) -> Customer {
        Customer {
            user_id,
            name: name.to_string(),
            location: GeoPoint::new(latitude, longitude),
        }
    }

    fn dublin_filter() -> DistanceFilter {
        DistanceFilter::new(DEFAULT_REFERENCE, EARTH_RADIUS_KM, DEFAULT_THRESHOLD_KM)
    }

    #[test]
    fn distance_to_self_is_zero() {
        let points = [
            DEFAULT_REFERENCE,
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(-33.8688, 151.2093),
            GeoPoint::new(90.0, 180.0),
            GeoPoint::new(-89.999, -179.5),
        ];
        for p in points {
            let filter = DistanceFilter::new(p, EARTH_RADIUS_KM, DEFAULT_THRESHOLD_KM);
            assert_eq!(filter.distance_to(&p), 0.0, "self-distance of {p}");
        }
    }

    #[test]
    fn distance_is_symmetric() {
        let pairs = [
            (DEFAULT_REFERENCE, GeoPoint::new(53.2451022, -6.238335)),
            (GeoPoint::new(41.49008, -71.312796), GeoPoint::new(51.92893, -10.27699)),
            (GeoPoint::new(-12.5, 130.8), GeoPoint::new(64.1, -21.9)),
        ];
        for (a, b) in pairs {
            assert_eq!(
                haversine_km(&a, &b, EARTH_RADIUS_KM),
                haversine_km(&b, &a, EARTH_RADIUS_KM)
            );
        }
    }

    #[test]
    fn nearby_point_is_within_radius() {
        let d = dublin_filter().distance_to(&GeoPoint::new(53.2451022, -6.238335));
        assert!((d - 10.44).abs() < 0.05, "distance was {d}");
        assert!(d <= DEFAULT_THRESHOLD_KM);
    }

    #[test]
    fn transatlantic_point_is_excluded() {
        let d = dublin_filter().distance_to(&GeoPoint::new(41.49008, -71.312796));
        assert!((d - 4887.0).abs() / 4887.0 < 0.05, "distance was {d}");

        let kept = dublin_filter()
            .select_within_radius(vec![customer(9, "Far Away", 41.49008, -71.312796)]);
        assert!(kept.is_empty());
    }

    #[test]
    fn antipodal_distance_is_half_circumference() {
        let d = haversine_km(
            &GeoPoint::new(0.0, 0.0),
            &GeoPoint::new(0.0, 180.0),
            EARTH_RADIUS_KM,
        );
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-6);
    }

    #[test]
    fn select_never_exceeds_threshold() {
        let customers = vec![
            customer(1, "Alice", 53.2451022, -6.238335),
            customer(2, "Bob", 41.49008, -71.312796),
            customer(3, "Carol", 52.986375, -6.043701),
            customer(4, "Dan", 51.92893, -10.27699),
            customer(5, "Eve", 53.3381985, -6.2592576),
        ];
        let filter = dublin_filter();
        let kept = filter.select_within_radius(customers);

        let ids: Vec<i64> = kept.iter().map(Invitation::user_id).collect();
        assert_eq!(ids, vec![1, 3, 5]);
        for inv in &kept {
            assert!(inv.distance_km <= filter.threshold_km());
            assert_eq!(inv.distance_km, filter.distance_to(&inv.customer.location));
        }
    }

    #[test]
    fn threshold_is_inclusive() {
        let target = GeoPoint::new(53.2451022, -6.238335);
        let exact = dublin_filter().distance_to(&target);

        let at_boundary = DistanceFilter::new(DEFAULT_REFERENCE, EARTH_RADIUS_KM, exact);
        assert_eq!(
            at_boundary
                .select_within_radius(vec![customer(1, "Edge", 53.2451022, -6.238335)])
                .len(),
            1
        );

        let just_inside = DistanceFilter::new(DEFAULT_REFERENCE, EARTH_RADIUS_KM, exact - 1e-9);
        assert!(just_inside
            .select_within_radius(vec![customer(1, "Edge", 53.2451022, -6.238335)])
            .is_empty());
    }

    #[test]
    fn from_config_uses_config_values() {
        let config = Config {
            threshold_km: 5.0,
            ..Config::default()
        };
        let filter = DistanceFilter::from_config(&config);
        assert_eq!(filter.threshold_km(), 5.0);
        assert_eq!(filter.reference(), config.reference);
        assert!(filter
            .select_within_radius(vec![customer(1, "Alice", 53.2451022, -6.238335)])
            .is_empty());
    }

    #[test]
    fn sort_is_ascending_for_any_permutation() {
        let ids = [1i64, 5, 3, 2, 4];
        // every rotation plus reversed rotations
        for shift in 0..ids.len() {
            for reversed in [false, true] {
                let mut order: Vec<i64> = ids.iter().cycle().skip(shift).take(ids.len()).copied().collect();
                if reversed {
                    order.reverse();
                }
                let mut invitations: Vec<Invitation> = order
                    .iter()
                    .map(|&id| Invitation {
                        customer: customer(id, "x", 53.3, -6.2),
                        distance_km: 1.0,
                    })
                    .collect();

                sort_by_identifier(&mut invitations);

                let sorted: Vec<i64> = invitations.iter().map(Invitation::user_id).collect();
                assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
            }
        }
    }

    #[test]
    fn negative_ids_sort_first() {
        let mut invitations: Vec<Invitation> = [3, -4, 0, -10]
            .iter()
            .map(|&id| Invitation {
                customer: customer(id, "x", 53.3, -6.2),
                distance_km: 1.0,
            })
            .collect();

        sort_by_identifier(&mut invitations);

        let sorted: Vec<i64> = invitations.iter().map(Invitation::user_id).collect();
        assert_eq!(sorted, vec![-10, -4, 0, 3]);
    }

    #[test]
    fn sort_is_stable_for_equal_ids() {
        let mut invitations: Vec<Invitation> = [(7, "first"), (2, "two"), (7, "second")]
            .iter()
            .map(|&(id, name)| Invitation {
                customer: customer(id, name, 53.3, -6.2),
                distance_km: 1.0,
            })
            .collect();

        sort_by_identifier(&mut invitations);

        let names: Vec<&str> = invitations.iter().map(|i| i.customer.name.as_str()).collect();
        assert_eq!(names, vec!["two", "first", "second"]);
    }
}
