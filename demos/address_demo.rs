//! Scores the reference address pairs with diagnostics enabled.
//!
//! cargo run --example address_demo
//! RUST_LOG=string_similarity=debug cargo run --example address_demo

use string_similarity::similarity::{similarity, SimilarityConfig};
use tracing_subscriber::EnvFilter;

const PAIRS: &[(&str, &str)] = &[
    ("martha", "marhta"),
    ("Katherine", "Kahterine"),
    ("Mr. John Smith", "John M Smith"),
    ("Julie S Morin", "Julie T Morin"),
    ("1313-123 Westcourt Place N2L 1B3", "Unit 1313 123 Westcourt Pl. N2L1B3"),
    (
        "123 Falconridge Cres Kitchener ON N2K1B3",
        "123 Falconridge Crescent Kitchener ON N2K1B3",
    ),
];

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_target(false)
        .init();

    let config = SimilarityConfig::default().with_verbose(true);
    for (s1, s2) in PAIRS {
        let score = similarity(s1, s2, &config);
        println!("{score:.3}  {s1:?} / {s2:?}");
    }
}
