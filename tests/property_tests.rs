//! Property-based tests for the query pipeline and pagination invariants.
//!
//! Tests validate:
//! 1. Identifier constructors reject blank strings
//! 2. Filtering is a pure, idempotent predicate
//! 3. Extending a search term can only shrink the result set
//! 4. Suggestions are sound (each one matches the typed prefix, capped, deduped)
//! 5. Pagination invariants hold under arbitrary mutation sequences
//! 6. Invoice totals always equal the component sum

use chrono::{DateTime, Duration, TimeZone, Utc};
use marketdesk::export::render_invoice;
use marketdesk::model::{
    CustomerRef, Order, OrderStatus, PaymentMethod, PriceBreakdown, RecordId, Rupees,
    User, UserRole, UserStatus,
};
use marketdesk::query::{matches_term, suggest, Constraint, FilterQuery, SuggestConfig};
use marketdesk::state::Pager;
use proptest::prelude::*;

fn anchor() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 11, 6, 12, 0, 0).unwrap()
}

fn user(id: usize, name: &str, status: UserStatus, days_ago: i64) -> User {
    let username = name.to_lowercase().replace(' ', ".");
    let email = format!("{username}@example.com");
    User {
        id: RecordId::new(format!("USR-{id:03}")).expect("valid id"),
        name: name.to_string(),
        username,
        email,
        phone: None,
        city: None,
        role: UserRole::Customer,
        status,
        joined_at: anchor() - Duration::days(days_ago),
    }
}

fn status_strategy() -> impl Strategy<Value = UserStatus> {
    prop_oneof![
        Just(UserStatus::PendingVerification),
        Just(UserStatus::Active),
        Just(UserStatus::Suspended),
        Just(UserStatus::Blocked),
    ]
}

fn users_strategy() -> impl Strategy<Value = Vec<User>> {
    prop::collection::vec(
        ("[a-z]{2,10} [a-z]{2,10}", status_strategy(), 0i64..400), 0..40,
    )
    .prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (name, status, days_ago))| user(i, &name, status, days_ago))
            .collect()
    })
}

// ===== Property 1: Identifier Constructors =====

proptest! {
    #[test]
    fn record_id_rejects_blank_strings(s in "[ \t\n]{0,8}") {
        prop_assert!(RecordId::new(&s).is_err(), "Blank string should be rejected");
    }

    #[test]
    fn record_id_accepts_non_blank_strings(s in "[a-zA-Z0-9-]{1,24}") {
        prop_assert!(RecordId::new(&s).is_ok(), "Non-blank string should be accepted");
    }
}

// ===== Property 2: Filter Idempotence =====

proptest! {
    #[test]
    fn filtering_twice_equals_filtering_once(
        users in users_strategy(),
        term in "[a-z]{0,6}",
        status in prop_oneof![
            Just(Constraint::Any),
            status_strategy().prop_map(Constraint::Only),
        ],
    ) {
        let now = anchor();
        let query = FilterQuery {
            term,
            status,
            ..FilterQuery::default()
        };

        let once: Vec<&User> = users
            .iter()
            .filter(|u| marketdesk::query::matches(*u, &query, now))
            .collect();
        let twice: Vec<&&User> = once
            .iter()
            .filter(|u| marketdesk::query::matches(**u, &query, now))
            .collect();

        prop_assert_eq!(once.len(), twice.len(), "A matching record must keep matching");
    }
}

// ===== Property 3: Term Extension Shrinks Results =====

proptest! {
    #[test]
    fn extending_the_term_never_grows_the_result_set(
        users in users_strategy(),
        prefix in "[a-z]{1,4}",
        extension in "[a-z]{1,4}",
    ) {
        let extended = format!("{prefix}{extension}");

        for u in &users {
            if matches_term(u, &extended) {
                prop_assert!(
                    matches_term(u, &prefix),
                    "A record matching the longer term must match its prefix"
                );
            }
        }
    }
}

// ===== Property 4: Suggestion Soundness =====

proptest! {
    #[test]
    fn suggestions_are_capped_deduped_and_relevant(
        users in users_strategy(),
        term in "[a-z]{2,5}",
        limit in 1usize..10,
    ) {
        let config = SuggestConfig { min_chars: 2, limit };
        let suggestions = suggest(&users, &term, &config);

        prop_assert!(suggestions.len() <= limit, "Cap must hold");

        let needle = term.to_lowercase();
        for s in &suggestions {
            prop_assert!(
                s.to_lowercase().contains(&needle),
                "Suggestion {:?} does not contain {:?}", s, term
            );
        }

        for (i, s) in suggestions.iter().enumerate() {
            prop_assert!(
                !suggestions[..i].contains(s),
                "Duplicate suggestion {:?}", s
            );
        }
    }

    #[test]
    fn short_terms_produce_no_suggestions(users in users_strategy(), term in "[a-z]{0,1}") {
        let suggestions = suggest(&users, &term, &SuggestConfig::default());
        prop_assert!(suggestions.is_empty(), "Below min_chars nothing should surface");
    }
}

// ===== Property 5: Pagination Invariants =====

#[derive(Debug, Clone)]
enum PagerOp {
    Sync(usize),
    SetPage(usize),
    Next,
    Prev,
    Reset,
}

fn pager_op_strategy() -> impl Strategy<Value = PagerOp> {
    prop_oneof![
        (0usize..500).prop_map(PagerOp::Sync),
        (0usize..60).prop_map(PagerOp::SetPage),
        Just(PagerOp::Next),
        Just(PagerOp::Prev),
        Just(PagerOp::Reset),
    ]
}

proptest! {
    #[test]
    fn pager_stays_in_bounds_under_arbitrary_ops(
        page_size in 1usize..25,
        ops in prop::collection::vec(pager_op_strategy(), 0..50),
    ) {
        let mut pager = Pager::new(page_size);
        let mut len = 0usize;

        for op in ops {
            match op {
                PagerOp::Sync(n) => {
                    len = n;
                    pager.sync(n);
                }
                PagerOp::SetPage(p) => {
                    pager.set_page(p);
                }
                PagerOp::Next => {
                    pager.next_page();
                }
                PagerOp::Prev => {
                    pager.prev_page();
                }
                PagerOp::Reset => {
                    // Reset models a collection swap: the pager forgets the
                    // old count until the next sync.
                    len = 0;
                    pager.reset();
                }
            }

            let expected_total = len.div_ceil(page_size).max(1);
            prop_assert_eq!(pager.total_pages(), expected_total);
            prop_assert!(pager.current_page() >= 1);
            prop_assert!(pager.current_page() <= pager.total_pages());
        }
    }

    #[test]
    fn page_slices_partition_the_collection(
        page_size in 1usize..10,
        len in 0usize..80,
    ) {
        let items: Vec<usize> = (0..len).collect();
        let mut pager = Pager::new(page_size);
        pager.sync(len);

        let mut seen = Vec::new();
        for page in 1..=pager.total_pages() {
            pager.set_page(page);
            seen.extend_from_slice(pager.page_slice(&items));
        }

        prop_assert_eq!(seen, items, "Walking every page must visit each item once, in order");
    }
}

// ===== Property 6: Invoice Total =====

proptest! {
    #[test]
    fn invoice_total_is_always_the_component_sum(
        subtotal in 0i64..1_000_000,
        delivery in 0i64..5_000,
        tax in 0i64..100_000,
        discount in 0i64..50_000,
    ) {
        let pricing = PriceBreakdown {
            subtotal: Rupees(subtotal),
            delivery_charge: Rupees(delivery),
            tax: Rupees(tax),
            discount: Rupees(discount),
        };
        let order = Order {
            id: RecordId::new("ORD-PROP-001").expect("valid id"),
            customer: CustomerRef {
                user_id: RecordId::new("USR-001").expect("valid id"),
                name: "Priya Patel".to_string(),
                email: "priya@example.com".to_string(),
                phone: None,
            },
            placed_at: anchor(),
            delivery_date: None,
            status: OrderStatus::Processing,
            payment_method: PaymentMethod::Upi,
            transaction_id: None,
            delivery_address: "456 Park Avenue, Mumbai".to_string(),
            items: Vec::new(),
            pricing,
        };

        let expected = subtotal + delivery + tax - discount;
        prop_assert_eq!(pricing.total(), Rupees(expected));

        let text = render_invoice(&order);
        let total_line = text
            .lines()
            .find(|l| l.starts_with("TOTAL AMOUNT:"))
            .expect("invoice always has a total line");
        prop_assert!(
            total_line.ends_with(&format!("₹{expected}")),
            "Total line {:?} should end with ₹{}", total_line, expected
        );
    }
}
