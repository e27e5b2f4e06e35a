use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_json::json;

use voices::infrastructure::twitter::parser::parse_timeline;

/// Home timeline page with `tweets` tweets spread over `users` authors
fn timeline_body(tweets: usize, users: usize) -> Vec<u8> {
    let page: Vec<_> = (0..tweets)
        .map(|i| {
            let user = i % users.max(1);
            json!({
                "id_str": format!("{}", 1_000_000 + i),
                "text": format!("tweet number {i} with some text to parse through"),
                "favorited": i % 3 == 0,
                "created_at": "Wed Aug 27 13:08:45 +0000 2008",
                "place": if i % 5 == 0 {
                    json!({ "full_name": "Tokyo", "country": "Japan" })
                } else {
                    serde_json::Value::Null
                },
                "user": {
                    "id_str": format!("{user}"),
                    "screen_name": format!("user{user}"),
                    "name": format!("User {user}"),
                    "profile_image_url_https": format!("https://pbs.example.com/{user}.png"),
                },
            })
        })
        .collect();
    serde_json::to_vec(&page).unwrap_or_default()
}

fn bench_parse_timeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_timeline");
    for (tweets, users) in [(20, 5), (200, 50), (800, 200)] {
        let body = timeline_body(tweets, users);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{tweets}x{users}")),
            &body,
            |b, body| b.iter(|| parse_timeline(black_box(body))),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_parse_timeline);
criterion_main!(benches);
