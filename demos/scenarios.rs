//! Scripted draws with a fixed index sequence.
//!
//! Run with: `cargo run --example scenarios`
//!
//! `ScriptedRandom` replays the indices it is given, which makes it easy to
//! write down exactly which number each draw picks. Also shows the `App`
//! controller dropping a trivia answer that arrives after the number changed.

use number_draw::{App, DrawSession, Effect, Intent, Range, ScriptedRandom};

fn show(label: &str, session: &DrawSession<ScriptedRandom>) {
    println!(
        "  {label:<10} pool={:?}  history={:?}  current={:?}",
        session.pool(),
        session.history(),
        session.current()
    );
}

fn main() {
    // ── Walkthrough over 1..=3 ───────────────────────────────────────────────
    // Index 1 picks 2 from [1,2,3]; index 1 picks 3 from [1,3];
    // after undo, index 0 picks 1 from [1,3].
    println!();
    println!("══ Scripted indices [1, 1, 0] over 1..=3 ══");
    println!();

    let mut session = DrawSession::new(Range { min: 1, max: 3 }, ScriptedRandom::new(vec![1, 1, 0]));
    show("start", &session);
    session.draw();
    show("draw", &session);
    session.draw();
    show("draw", &session);
    session.undo();
    show("undo", &session);
    session.draw();
    show("draw", &session);

    // ── Stale trivia ─────────────────────────────────────────────────────────
    println!();
    println!("══ Late trivia answers are dropped ══");
    println!();

    let mut app = App::new(DrawSession::new(Range { min: 1, max: 5 }, ScriptedRandom::constant(0)));
    let first = match app.handle(Intent::Draw) {
        Effect::LookupTrivia(ticket) => ticket,
        other => {
            println!("  unexpected effect: {other:?}");
            return;
        }
    };
    let second = match app.handle(Intent::Draw) {
        Effect::LookupTrivia(ticket) => ticket,
        other => {
            println!("  unexpected effect: {other:?}");
            return;
        }
    };

    let kept = app.accept_trivia(second, "Two is the only even prime.".into());
    println!("  answer for {} accepted: {kept}", second.number);
    let kept = app.accept_trivia(first, "One is the loneliest number.".into());
    println!("  answer for {} accepted: {kept}", first.number);
    println!("  shown: {:?}", app.trivia_text());
}
