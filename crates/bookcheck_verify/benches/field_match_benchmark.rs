use std::collections::BTreeMap;

use bookcheck_verify::fields::match_fields;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::json;

fn bench_match_fields(c: &mut Criterion) {
    let doc = json!({
        "firstname": "James",
        "lastname": "Brown",
        "totalprice": 111,
        "depositpaid": true,
        "bookingdates": {"checkin": "2024-01-01", "checkout": "2024-01-05"},
        "additionalneeds": "Breakfast",
    });

    let mut expected = BTreeMap::new();
    expected.insert("firstname".to_string(), "James".to_string());
    expected.insert("lastname".to_string(), "Brown".to_string());
    expected.insert("totalprice".to_string(), "111".to_string());
    expected.insert("depositpaid".to_string(), "true".to_string());
    expected.insert("checkin".to_string(), "2024-01-01".to_string());
    expected.insert("checkout".to_string(), "2024-01-05".to_string());

    c.bench_function("match_fields full booking", |b| {
        b.iter(|| match_fields(black_box(&expected), black_box(&doc)))
    });

    let mut mismatching = expected.clone();
    mismatching.insert("checkin".to_string(), "2024-02-01".to_string());

    c.bench_function("match_fields with mismatch", |b| {
        b.iter(|| match_fields(black_box(&mismatching), black_box(&doc)))
    });
}

criterion_group!(benches, bench_match_fields);
criterion_main!(benches);
