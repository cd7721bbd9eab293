//! Interactive click counter.
//!
//! Type `+`, `-` or `r` and press enter to click a button, `q` to quit.
//! Set `RUST_LOG=debug` (or `trace`) to watch the store's dispatches.
//!
//! Run with: cargo run --example counter

use std::io::{self, BufRead, Write};
use unistore::counter::{
    click_counter_app, decrease_count, increase_count, render, reset_count, CounterAction,
};
use unistore::store::StoreBuilder;

fn parse(input: &str) -> Option<CounterAction> {
    match input.trim() {
        "+" => Some(increase_count()),
        "-" => Some(decrease_count()),
        "r" | "reset" => Some(reset_count()),
        _ => None,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let store = StoreBuilder::new()
        .reducer(click_counter_app)
        .label("counter")
        .build_or_default()?;

    let draw = |count| {
        println!("{}", render(count));
        print!("> ");
        let _ = io::stdout().flush();
    };

    draw(store.get_state());

    let weak = store.downgrade();
    store.subscribe(move || {
        if let Some(store) = weak.upgrade() {
            draw(store.get_state());
        }
    });

    for line in io::stdin().lock().lines() {
        let line = line?;
        match line.trim() {
            "q" | "quit" => break,
            input => match parse(input) {
                Some(action) => store.dispatch(action),
                None => {
                    println!("unknown input {input:?}; use +, -, r or q");
                    draw(store.get_state());
                }
            },
        }
    }

    Ok(())
}
