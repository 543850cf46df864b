//! End-to-end walk through a draw session.
//!
//! Run with: `cargo run --example demo`
//!
//! Shows:
//!
//! 1. **Seeded draws**: the same seed always produces the same order, so the
//!    output below is reproducible.
//! 2. **Undo**: the last number goes back into the pool, which stays sorted.
//! 3. **Range reset**: an invalid range is refused and nothing changes; a
//!    valid one starts over.
//! 4. **Client JSON**: the snapshot as a web front-end would receive it.

use number_draw::{render_text, to_view_state, DrawSession, Range, StdRandom};

fn main() {
    let range = Range::new(1, 10).expect("1..=10 is a valid range");
    let mut session = DrawSession::new(range, StdRandom::seeded(2024));

    // ── Seeded draws ─────────────────────────────────────────────────────────
    println!();
    println!("══ Five draws from {range}, seed=2024 ══");
    println!();
    for _ in 0..5 {
        if let Some(n) = session.draw() {
            println!("  drew {n:>2}   pool left: {}", session.pool().len());
        }
    }
    println!();
    print!("{}", render_text(&session.snapshot(), None));

    // ── Undo ─────────────────────────────────────────────────────────────────
    println!();
    println!("══ Undo twice ══");
    println!();
    for _ in 0..2 {
        if let Some(n) = session.undo() {
            println!("  put back {n:>2}   current: {:?}", session.current());
        }
    }
    println!();
    print!("{}", render_text(&session.snapshot(), None));

    // ── Range reset ──────────────────────────────────────────────────────────
    println!();
    println!("══ Apply 20..=15, then 20..=25 ══");
    println!();
    match session.apply_range(20, 15) {
        Ok(()) => println!("  unexpected: 20..=15 accepted"),
        Err(err) => println!("  refused: {err}"),
    }
    println!("  still on {} with {} drawn", session.range(), session.history().len());
    if session.apply_range(20, 25).is_ok() {
        println!("  reset to {}", session.range());
    }

    // Drain the pool to show the finished state.
    while session.draw().is_some() {}
    println!();
    print!("{}", render_text(&session.snapshot(), None));

    // ── Client JSON ──────────────────────────────────────────────────────────
    println!();
    println!("══ View state JSON ══");
    println!();
    let view = to_view_state(&session.snapshot(), Some("Twenty-five is a perfect square."));
    match serde_json::to_string_pretty(&view) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("cannot encode view state: {err}"),
    }
}
