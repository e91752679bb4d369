//! Algebraic law checks (`P1`..`P12` of the specification) run against
//! `proptest`-generated small polynomials rather than hand-picked examples.

use poly::{Coefficient, Exponent, Monomial, Polynomial};
use proptest::prelude::*;

fn arb_coeff() -> impl Strategy<Value = Coefficient> {
    -10i64..=10
}

fn arb_exp() -> impl Strategy<Value = Exponent> {
    0i32..4
}

/// Small polynomials up to 3 variables deep, built the same way the parser
/// builds them: via [`Polynomial::from_monomials`], so every generated value
/// is already canonical.
fn arb_polynomial() -> impl Strategy<Value = Polynomial> {
    let leaf = arb_coeff().prop_map(Polynomial::from_coeff);
    leaf.prop_recursive(3, 32, 4, |inner| {
        proptest::collection::vec((inner, arb_exp()), 1..4).prop_map(|pairs| {
            let monos = pairs
                .into_iter()
                .map(|(p, e)| Monomial::new(p, e))
                .collect();
            Polynomial::from_monomials(monos)
        })
    })
}

/// Checks invariants I1-I5 recursively, as a standalone validator (P11).
fn assert_canonical(p: &Polynomial) {
    match p {
        Polynomial::Coeff(_) => {}
        Polynomial::Terms(terms) => {
            assert!(!terms.is_empty(), "I1: empty term list");
            if terms.len() == 1 {
                assert!(
                    !(terms[0].exp == 0 && terms[0].poly.is_coeff()),
                    "I4: singleton zero-exponent coefficient term must collapse"
                );
            }
            let mut prev: Option<Exponent> = None;
            for m in terms {
                if let Some(p) = prev {
                    assert!(m.exp > p, "I2: exponents must strictly increase");
                }
                prev = Some(m.exp);
                assert!(!m.poly.is_zero(), "I3: no monomial may carry a zero coefficient");
                assert_canonical(&m.poly);
            }
            let all_zero = terms.iter().all(|m| m.poly.is_zero());
            assert!(!all_zero, "I5: all-zero term list must collapse to zero");
        }
    }
}

proptest! {
    #[test]
    fn p1_add_zero_is_identity(p in arb_polynomial()) {
        prop_assert_eq!(&p + &Polynomial::zero(), p);
    }

    #[test]
    fn p2_add_is_commutative(p in arb_polynomial(), q in arb_polynomial()) {
        prop_assert_eq!(&p + &q, &q + &p);
    }

    #[test]
    fn p3_add_is_associative(p in arb_polynomial(), q in arb_polynomial(), r in arb_polynomial()) {
        prop_assert_eq!((&p + &q) + &r, &p + (&q + &r));
    }

    #[test]
    fn p4_mul_by_one_is_identity_by_zero_is_zero(p in arb_polynomial()) {
        prop_assert_eq!(&p * &Polynomial::from_coeff(1), p.clone());
        prop_assert!((&p * &Polynomial::zero()).is_zero());
    }

    #[test]
    fn p5_mul_distributes_over_add(p in arb_polynomial(), q in arb_polynomial(), r in arb_polynomial()) {
        let lhs = &p * (&q + &r);
        let rhs = (&p * &q) + (&p * &r);
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn p6_sub_self_is_zero_and_double_neg_is_identity(p in arb_polynomial()) {
        prop_assert!((&p - &p).is_zero());
        prop_assert_eq!(-(-p.clone()), p);
    }

    #[test]
    fn p7_is_eq_holds_for_p_plus_its_negation(p in arb_polynomial()) {
        prop_assert_eq!(&p + &(-p.clone()), Polynomial::zero());
    }

    #[test]
    fn p8_at_on_a_coefficient_is_a_no_op(c in arb_coeff(), x in arb_coeff()) {
        prop_assert_eq!(Polynomial::from_coeff(c).at(x), Polynomial::from_coeff(c));
    }

    #[test]
    fn p9_deg_of_product_sums_degrees(p in arb_polynomial(), q in arb_polynomial()) {
        prop_assume!(!p.is_zero() && !q.is_zero());
        let product = &p * &q;
        prop_assume!(!product.is_zero());
        prop_assert_eq!(product.deg(), p.deg() + q.deg());
    }

    #[test]
    fn p10_compose_with_no_substitutions_is_the_exact_constant_term(p in arb_polynomial()) {
        prop_assert_eq!(p.compose(&[]), p.exact_coefficient());
    }

    #[test]
    fn p11_every_operation_result_is_canonical(p in arb_polynomial(), q in arb_polynomial()) {
        assert_canonical(&p);
        assert_canonical(&q);
        assert_canonical(&(&p + &q));
        assert_canonical(&(&p - &q));
        assert_canonical(&(&p * &q));
        assert_canonical(&(-p.clone()));
        assert_canonical(&p.at(3));
        assert_canonical(&p.clone());
    }

    #[test]
    fn p12_clone_is_structurally_equal_and_independent(p in arb_polynomial()) {
        let cloned = p.clone();
        prop_assert_eq!(&cloned, &p);
        // Independent: mutating one does not affect the other.
        let mut mutated = cloned;
        mutated.scale_in_place(0);
        prop_assert!(mutated.is_zero());
        if !p.is_zero() {
            prop_assert!(!p.is_zero());
        }
    }
}

#[test]
fn deg_of_zero_and_nonzero_constant() {
    assert_eq!(Polynomial::zero().deg(), -1);
    assert_eq!(Polynomial::from_coeff(5).deg(), 0);
    assert_eq!(Polynomial::from_coeff(-5).deg(), 0);
}
