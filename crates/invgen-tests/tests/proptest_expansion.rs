//! Property-based tests for host pattern expansion and inventory assembly.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p invgen-tests --test proptest_expansion
//! ```

use proptest::prelude::*;

use invgen_core::{
    build_inventory, expand_range, find_pattern, resolve_host, HostDeclaration, RawConfig,
    ALL_GROUP,
};

// ============================================================================
// 1. Range expansion
// ============================================================================

proptest! {
    // `range_is_symmetric` keeps only ~10% of generated pairs; the default
    // global-reject budget (1024) aborts the run before enough cases pass.
    #![proptest_config(ProptestConfig {
        max_global_rejects: 65_536,
        ..ProptestConfig::default()
    })]

    /// `[a-b]` yields b-a+1 increasing decimal strings without padding.
    #[test]
    fn range_has_expected_length_and_order(a in 0u64..10_000, len in 0u64..200) {
        let b = a + len;
        let values = expand_range(a, b);
        prop_assert_eq!(values.len() as u64, b - a + 1);

        let parsed: Vec<u64> = values.iter().map(|v| v.parse().unwrap()).collect();
        prop_assert!(parsed.windows(2).all(|w| w[0] + 1 == w[1]));
        prop_assert_eq!(parsed[0], a);
        for (value, n) in values.iter().zip(&parsed) {
            prop_assert_eq!(value, &n.to_string());
        }
    }

    /// Bound order does not matter.
    #[test]
    fn range_is_symmetric(a in 0u64..10_000, b in 0u64..10_000) {
        prop_assume!(a.abs_diff(b) < 500);
        prop_assert_eq!(expand_range(a, b), expand_range(b, a));
    }
}

// ============================================================================
// 2. Pattern resolution
// ============================================================================

proptest! {
    /// Names without brackets come back unchanged.
    #[test]
    fn names_without_patterns_are_unchanged(name in "[a-z0-9.\\-]{1,40}") {
        let decl = HostDeclaration::new(name.clone()).group("g");
        let resolved = resolve_host(&decl).unwrap();
        prop_assert_eq!(resolved, vec![decl]);
    }

    /// Non-numeric bracket content is never a pattern.
    #[test]
    fn alphabetic_brackets_are_literal(prefix in "[a-z]{1,8}", body in "[a-z]{1,5}") {
        let name = format!("{prefix}[{body}]");
        prop_assert!(find_pattern(&name).is_none());
    }

    /// A single range resolves to prefix + value + suffix for every value.
    #[test]
    fn single_range_resolves_every_value(
        prefix in "[a-z]{1,8}",
        suffix in "[a-z.]{0,8}",
        lo in 0u64..1000,
        len in 0u64..50,
    ) {
        let hi = lo + len;
        let decl = HostDeclaration::new(format!("{prefix}[{lo}-{hi}]{suffix}"));
        let names: Vec<String> = resolve_host(&decl).unwrap().into_iter().map(|r| r.host).collect();
        let expected: Vec<String> = (lo..=hi).map(|n| format!("{prefix}{n}{suffix}")).collect();
        prop_assert_eq!(names, expected);
    }

    /// Two occurrences expand to the full cross product.
    #[test]
    fn two_ranges_form_cross_product(a in 1u64..6, b in 1u64..6) {
        let decl = HostDeclaration::new(format!("n[1-{a}]r[1-{b}]"));
        let resolved = resolve_host(&decl).unwrap();
        prop_assert_eq!(resolved.len() as u64, a * b);
        prop_assert!(resolved.iter().all(|r| find_pattern(&r.host).is_none()));
    }
}

// ============================================================================
// 3. Inventory invariants
// ============================================================================

fn group_name() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["web", "db", "cache", "all", "ops"]).prop_map(str::to_string)
}

fn declaration() -> impl Strategy<Value = HostDeclaration> {
    (
        "[a-c]",
        prop::option::of(0u64..4),
        prop::collection::vec(group_name(), 0..3),
    )
        .prop_map(|(name, range, groups)| {
            let host = match range {
                Some(hi) => format!("{name}[0-{hi}]"),
                None => name,
            };
            groups
                .into_iter()
                .fold(HostDeclaration::new(host), |decl, group| decl.group(group))
        })
}

proptest! {
    /// Every declared group exists and non-`all` groups are listed once in `all.children`.
    #[test]
    fn declared_groups_are_children_of_all(decls in prop::collection::vec(declaration(), 1..10)) {
        let inventory = build_inventory(&RawConfig::with_hosts(decls.clone())).unwrap();
        let all = inventory.group(ALL_GROUP).unwrap();

        for decl in &decls {
            for group in decl.groups.iter().flatten() {
                prop_assert!(inventory.group(group).is_some());
                let listed = all.children.iter().filter(|c| *c == group).count();
                let expected = usize::from(group != ALL_GROUP);
                prop_assert_eq!(listed, expected);
            }
        }
    }

    /// Every expanded host is in the meta header.
    #[test]
    fn every_host_is_in_meta(decls in prop::collection::vec(declaration(), 1..10)) {
        let inventory = build_inventory(&RawConfig::with_hosts(decls.clone())).unwrap();
        for decl in &decls {
            for record in resolve_host(decl).unwrap() {
                prop_assert!(inventory.hostvars(&record.host).is_some());
            }
        }
    }
}
