use proptest::prelude::*;
use qmkit::*;

const NAMES: [&str; 5] = ["a", "b", "c", "d", "e"];

/// A number of variables and a random subset of the rows of its truth table
fn function() -> impl Strategy<Value = (usize, TermSet)> {
    (1usize..=5).prop_flat_map(|n| {
        any::<u32>().prop_map(move |bits| {
            let terms: TermSet = (0..1usize << n).filter(|t| (bits >> t) & 1 == 1).collect();
            (n, terms)
        })
    })
}

/// A pattern given as a list of positions: None for a free position
fn pattern_positions() -> impl Strategy<Value = Vec<Option<bool>>> {
    prop::collection::vec(prop::option::of(any::<bool>()), 1..=8)
}

fn to_pattern(positions: &[Option<bool>]) -> Implicant {
    let s: String = positions
        .iter()
        .map(|v| match v {
            None => '-',
            Some(false) => '0',
            Some(true) => '1',
        })
        .collect();
    s.parse().unwrap()
}

fn variables(n: usize) -> VarList {
    VarList::from_names(&NAMES[..n]).unwrap()
}

proptest! {
    #[test]
    fn cover_matches_terms((n, terms) in function()) {
        let primes = Primes::extract(&terms, n).unwrap();
        let cover = Cover::select(&primes, &terms).unwrap();
        prop_assert_eq!(cover.covered_terms(), terms.clone());
        for p in cover.iter() {
            let covered: TermSet = p.terms().collect();
            prop_assert!(!covered.is_empty());
            prop_assert!(covered.is_subset(&terms));
        }
    }

    #[test]
    fn extraction_is_idempotent((n, terms) in function()) {
        let first = Primes::extract(&terms, n).unwrap();
        prop_assert_eq!(Primes::extract(&terms, n).unwrap(), first.clone());

        // The traced extraction finds the same primes, stage by stage
        let (traced, stages) = Primes::extract_traced(&terms, n).unwrap();
        prop_assert_eq!(&traced, &first);
        let from_stages: Vec<Implicant> = stages.iter().flat_map(|s| s.primes.iter().copied()).collect();
        prop_assert_eq!(from_stages.len(), first.len());
        prop_assert!(from_stages.iter().all(|p| first.contains(p)));
    }

    #[test]
    fn selection_is_deterministic((n, terms) in function()) {
        let primes = Primes::extract(&terms, n).unwrap();
        let cover = Cover::select(&primes, &terms).unwrap();
        prop_assert_eq!(Cover::select(&primes.clone(), &terms).unwrap(), cover);
    }

    #[test]
    fn primes_are_not_mergeable((n, terms) in function()) {
        let primes = Primes::extract(&terms, n).unwrap();
        for p in primes.iter() {
            for q in primes.iter() {
                prop_assert!(p.merge(q).is_none());
                prop_assert!(p == q || !p.contains(q));
            }
        }
    }

    #[test]
    fn minimal_forms_are_equivalent((n, terms) in function()) {
        let vars = variables(n);
        let result = minimize(terms.clone(), &vars).unwrap();

        let sop = parse_expression(result.formatted_sop(), &vars).unwrap();
        let pos = parse_expression(result.formatted_pos(), &vars).unwrap();
        for asg in generate(n) {
            let expected = terms.contains(asg.term());
            prop_assert_eq!(sop.eval(&asg).unwrap(), expected);
            prop_assert_eq!(pos.eval(&asg).unwrap(), expected);
        }
    }

    #[test]
    fn merge_single_difference(positions in pattern_positions(), idx in any::<prop::sample::Index>()) {
        let fixed: Vec<usize> = positions
            .iter()
            .enumerate()
            .filter(|(_, v)| v.is_some())
            .map(|(i, _)| i)
            .collect();
        prop_assume!(!fixed.is_empty());
        let pos = fixed[idx.index(fixed.len())];

        let mut low = positions.clone();
        low[pos] = Some(false);
        let mut high = positions.clone();
        high[pos] = Some(true);
        let mut merged = positions.clone();
        merged[pos] = None;

        let expected = to_pattern(&merged);
        prop_assert_eq!(to_pattern(&low).merge(&to_pattern(&high)), Some(expected));
        prop_assert_eq!(to_pattern(&high).merge(&to_pattern(&low)), Some(expected));
    }

    #[test]
    fn merge_rejects_other_pairs(p in pattern_positions(), q in pattern_positions()) {
        let (a, b) = (to_pattern(&p), to_pattern(&q));
        let same_width = p.len() == q.len();
        let same_dashes = same_width && p.iter().zip(&q).all(|(x, y)| x.is_none() == y.is_none());
        let differences = p.iter().zip(&q).filter(|(x, y)| x != y).count();
        if same_dashes && differences == 1 {
            prop_assert!(a.merge(&b).is_some());
        } else {
            prop_assert!(a.merge(&b).is_none());
        }
    }
}
