//! Allow-List Configuration
//!
//! Loads the allowed transitions from a JSON document instead of code and
//! shows how invalid documents are reported.
//!
//! Key concepts:
//! - JSON allow-lists with serde
//! - Validation that reports every bad entry at once
//! - Feeding the loaded rules into a manager
//!
//! Run with: cargo run --example allow_list_config

use scenegate::config::{AllowList, ConfigError};
use scenegate::manager::TransitionManager;
use scenegate::state_enum;

state_enum! {
    enum Screen {
        Blank,
        Splash,
        Home,
        Settings,
        Exit,
    }
    null: Blank
    final: [Exit]
}

const GRAPH: &str = r#"{
    "allow": [
        { "from": "Blank", "to": "Splash" },
        { "from": "Splash", "to": "Home" },
        { "from": "Home", "to": "Settings" },
        { "from": "Settings", "to": "Home" },
        { "from": "Home", "to": "Exit" }
    ]
}"#;

const BROKEN: &str = r#"{
    "allow": [
        { "from": "Home", "to": "Home" },
        { "from": "Settings", "to": "Blank" }
    ]
}"#;

fn main() -> Result<(), ConfigError> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "scenegate=debug".to_string()))
        .init();

    println!("=== Allow-List Configuration Example ===\n");

    println!("Example 1: Load a valid graph");
    let rules = AllowList::<Screen>::from_json(GRAPH)?.into_rules()?;
    println!("  loaded {} rules", rules.len());

    let mut screens = TransitionManager::new(rules);
    for next in [Screen::Splash, Screen::Home, Screen::Settings, Screen::Home, Screen::Exit] {
        let outcome = screens.request_transition(next);
        println!("  {:?}: {:?}", next, outcome);
    }
    println!("  finished at {:?} (final: {})", screens.current_state(), screens.is_final());

    println!("\nExample 2: Reject a broken graph");
    match AllowList::<Screen>::from_json(BROKEN)?.into_rules() {
        Err(ConfigError::Invalid { violations }) => {
            for violation in violations {
                println!("  - {violation}");
            }
        }
        Err(other) => return Err(other),
        Ok(_) => println!("  unexpectedly accepted"),
    }

    println!("\nExample 3: Write a graph back out");
    let list = AllowList::new()
        .allow(Screen::Blank, Screen::Splash)
        .allow(Screen::Splash, Screen::Home);
    println!("{}", list.to_json()?);

    println!("\n=== Example Complete ===");
    Ok(())
}
