//! Property-based tests for exact rational arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::Rational;

    // Strategy for generating numerator magnitudes
    fn magnitude() -> impl Strategy<Value = u64> {
        0u64..1000u64
    }

    // Strategy for generating non-zero magnitudes
    fn non_zero_magnitude() -> impl Strategy<Value = u64> {
        1u64..1000u64
    }

    fn rational() -> impl Strategy<Value = Rational> {
        (magnitude(), non_zero_magnitude(), any::<bool>())
            .prop_map(|(p, q, sign)| Rational::from_u64(p, q, sign).unwrap())
    }

    fn non_zero_rational() -> impl Strategy<Value = Rational> {
        (non_zero_magnitude(), non_zero_magnitude(), any::<bool>())
            .prop_map(|(p, q, sign)| Rational::from_u64(p, q, sign).unwrap())
    }

    proptest! {
        // Field axioms, up to the unreduced representation

        #[test]
        fn add_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn mul_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn add_associative(a in rational(), b in rational(), c in rational()) {
            let left = (&a + &b) + &c;
            let right = &a + &(&b + &c);
            prop_assert!(left.eq_magnitude(&right));
            prop_assert_eq!(left.signum(), right.signum());
        }

        #[test]
        fn distributive(a in rational(), b in rational(), c in rational()) {
            let left = &a * &(&b + &c);
            let right = &a * &b + &a * &c;
            prop_assert!(left.eq_magnitude(&right));
            prop_assert_eq!(left.signum(), right.signum());
        }

        #[test]
        fn additive_identity_via_sub_of_zero(a in rational(), b in rational()) {
            let sum = &a + &b;
            let round_trip = &sum - &Rational::zero();
            prop_assert!(sum.eq_magnitude(&round_trip));
        }

        #[test]
        fn multiplicative_inverse_recovers_one(a in non_zero_rational()) {
            let reciprocal = Rational::one().checked_div(&a).unwrap();
            let product = &a * &reciprocal;
            prop_assert!(product.eq_magnitude(&Rational::one()));
            // Same signs always multiply to a positive result.
            prop_assert!(!product.is_negative());
        }

        #[test]
        fn sub_then_add_round_trips(a in rational(), b in rational()) {
            let round_trip = (&a - &b) + &b;
            prop_assert!(round_trip.eq_magnitude(&a));
            prop_assert_eq!(round_trip.signum(), a.signum());
        }

        #[test]
        fn simplify_is_idempotent(a in rational()) {
            let once = a.simplify();
            prop_assert_eq!(once.simplify(), once);
        }

        #[test]
        fn simplify_preserves_value_and_sign(a in rational()) {
            let reduced = a.simplify();
            prop_assert!(reduced.eq_magnitude(&a));
            prop_assert_eq!(reduced.is_negative(), a.is_negative());
        }

        #[test]
        fn eq_magnitude_reflexive(a in rational()) {
            prop_assert!(a.eq_magnitude(&a));
        }

        #[test]
        fn eq_magnitude_symmetric(a in rational(), b in rational()) {
            prop_assert_eq!(a.eq_magnitude(&b), b.eq_magnitude(&a));
        }

        #[test]
        fn eq_magnitude_ignores_sign(a in rational()) {
            prop_assert!(a.eq_magnitude(&-&a));
        }

        #[test]
        fn lt_is_irreflexive(a in rational()) {
            prop_assert!(!a.lt(&a));
        }

        #[test]
        fn lt_is_asymmetric(a in rational(), b in rational()) {
            if a.lt(&b) {
                prop_assert!(!b.lt(&a));
            }
        }

        #[test]
        fn lt_agrees_with_floats(a in rational(), b in rational()) {
            // Magnitudes below 1000 convert to f64 exactly, so the float
            // order is the ground truth here.
            if a.to_f64() < b.to_f64() {
                prop_assert!(a.lt(&b));
            }
        }
    }
}
