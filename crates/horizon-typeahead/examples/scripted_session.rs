//! Scripted typeahead session printing what a host would render.
//!
//! Run with: cargo run -p horizon-typeahead --example scripted_session
//!
//! Set `RUST_LOG=horizon_typeahead=trace` to watch the controller's decisions.

use std::sync::mpsc;
use std::thread;

use horizon_typeahead::prelude::*;
use tracing_subscriber::EnvFilter;

fn print_list(typeahead: &Typeahead) {
    let props = typeahead.input_props();
    println!("  input: {:?} (list open: {})", props.value, props.list_open);
    for item in typeahead.render_items(&PlainItemTemplate) {
        let marker = if item.selected { ">" } else { " " };
        println!("  {marker} {}", item.text);
    }
}

fn auto_session() {
    println!("auto mode");
    let mut typeahead = Typeahead::new(vec!["apple", "apricot", "avocado", "banana"]);
    typeahead.option_selected.connect(|(candidate, index)| {
        println!("  selected #{index}: {:?}", candidate.commit_value());
    });

    typeahead.handle_text_change(&TextChangeEvent::new("ap"));
    print_list(&typeahead);

    for key in [Key::ArrowDown, Key::ArrowDown] {
        typeahead.handle_key_press(&mut KeyPressEvent::key(key));
        print_list(&typeahead);
    }

    typeahead.handle_key_press(&mut KeyPressEvent::key(Key::Enter));
    print_list(&typeahead);
}

fn manual_session() {
    println!("manual mode");
    let cities = ["Berlin", "Bern", "Bergamo", "Bordeaux"];

    let (request_tx, request_rx) = mpsc::channel::<Completion>();
    let worker = thread::spawn(move || {
        for completion in request_rx {
            let query = completion.query().to_lowercase();
            let found: Vec<Candidate> = cities
                .iter()
                .filter(|city| !query.is_empty() && city.to_lowercase().starts_with(&query))
                .map(|city| Candidate::Item(CandidateItem::new(*city).with_field("source", "worker")))
                .collect();
            let outcome = completion.resolve(found);
            tracing::info!(?outcome, query = %query, "lookup finished");
        }
    });

    let mut typeahead = Typeahead::manual(move |_: &str, completion: Completion| {
        if let Err(mpsc::SendError(completion)) = request_tx.send(completion) {
            let _ = completion.close();
        }
    })
    .with_stale_completion_policy(StaleCompletionPolicy::LatestRequest);

    typeahead.handle_text_change(&TextChangeEvent::new("ber"));
    // Give the worker a moment; a real host would redraw on its next frame
    thread::sleep(std::time::Duration::from_millis(50));
    print_list(&typeahead);

    typeahead.handle_key_press(&mut KeyPressEvent::key(Key::ArrowUp));
    print_list(&typeahead);
    typeahead.handle_key_press(&mut KeyPressEvent::key(Key::Tab));
    print_list(&typeahead);

    drop(typeahead);
    let _ = worker.join();
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    auto_session();
    manual_session();
}
