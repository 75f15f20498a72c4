// Property-based tests for parsing, encoding and the commutative hash

use crate::common::*;

use proptest::prelude::*;
use rvoip_sip_params::prelude::*;

/// Names mixing flags, data, numeric and extension parameters
fn name_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "tag", "branch", "maddr", "user", "expires", "ttl", "lr", "x-foo", "x-bar", "X-Baz",
    ])
}

fn token_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9.!%*_+`'~-]{1,12}"
}

/// Unordered parameter set as `name=value` pairs
fn param_set_strategy() -> impl Strategy<Value = Vec<(&'static str, String)>> {
    prop::collection::vec((name_strategy(), token_strategy()), 0..10)
}

fn wire(params: &[(&str, String)]) -> String {
    params
        .iter()
        .map(|(name, value)| format!(";{}={}", name, value))
        .collect()
}

/// A canonical list: typed data and numeric parameters first, then
/// extension parameters, as the encoder writes them.
fn canonical_strategy() -> impl Strategy<Value = String> {
    let typed = prop::collection::vec(
        prop_oneof![
            (prop::sample::select(vec!["tag", "branch", "transport", "received"]), token_strategy())
                .prop_map(|(name, value)| format!(";{}={}", name, value)),
            (prop::sample::select(vec!["expires", "ttl", "reg-id"]), any::<u32>())
                .prop_map(|(name, n)| format!(";{}={}", name, n)),
            Just(";lr".to_string()),
            Just(";rport".to_string()),
        ],
        0..6,
    );
    let extensions = prop::collection::vec(
        ("x-[a-z]{1,6}", prop::option::of(token_strategy())).prop_map(|(name, value)| match value {
            Some(value) => format!(";{}={}", name, value),
            None => format!(";{}", name),
        }),
        0..4,
    );
    (typed, extensions).prop_map(|(typed, extensions)| typed.concat() + &extensions.concat())
}

proptest! {
    /// Property: the hash does not depend on wire order
    #[test]
    fn hash_is_order_independent(
        (params, shuffled) in param_set_strategy()
            .prop_flat_map(|params| (Just(params.clone()), Just(params).prop_shuffle()))
    ) {
        let a = start_line(&wire(&params));
        let b = start_line(&wire(&shuffled));
        prop_assert_eq!(a.commutative_param_hash(), b.commutative_param_hash());
    }

    /// Property: canonical input encodes back to itself
    #[test]
    fn canonical_input_round_trips(raw in canonical_strategy()) {
        let cat = start_line(&raw);
        prop_assert_eq!(cat.to_string(), raw);
    }

    /// Property: encoding parsed output and parsing it again changes nothing
    #[test]
    fn reencoding_is_stable(params in param_set_strategy()) {
        let first = start_line(&wire(&params)).to_string();
        let second = start_line(&first).to_string();
        prop_assert_eq!(first, second);
    }

    /// Property: removing all but a set keeps exactly the kept tags that existed
    #[test]
    fn remove_except_filters_typed_only(
        params in param_set_strategy(),
        keep in prop::collection::hash_set(
            prop::sample::select(vec![ParamType::Tag, ParamType::Lr, ParamType::Expires, ParamType::Ttl]),
            0..4,
        ),
    ) {
        let mut cat = start_line(&wire(&params));
        let before: Vec<ParamType> = cat.parameters().typed().iter().map(|p| p.kind()).collect();
        let extensions = cat.parameters().extensions().len();

        cat.remove_params_except(&keep);

        for kind in &before {
            prop_assert_eq!(cat.exists(*kind), keep.contains(kind));
        }
        prop_assert!(cat.parameters().typed().iter().all(|p| keep.contains(&p.kind())));
        prop_assert_eq!(cat.parameters().extensions().len(), extensions);
    }

    /// Property: arbitrary bytes never make parsing or encoding panic
    #[test]
    fn arbitrary_input_never_panics(raw in prop::collection::vec(any::<u8>(), 0..64)) {
        let cat: ParserCategory = ParserCategory::start_line(raw);
        let _ = cat.to_string();
        let _ = cat.commutative_param_hash();
    }

    /// Property: every qvalue encodes in a form that parses back to itself
    #[test]
    fn qvalue_minimal_form_parses_back(thousandths in 0u16..=1000) {
        let q = QValue::new(thousandths).unwrap();
        let cat = start_line(&format!(";q={}", q));
        prop_assert_eq!(cat.param_qvalue(ParamType::Q).unwrap(), q);
    }
}
