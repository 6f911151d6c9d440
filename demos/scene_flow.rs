//! Game Scene Flow
//!
//! Wires a game's scene graph into a transition manager and walks through
//! the cases a player can hit.
//!
//! Key concepts:
//! - Registering the allowed transitions once at startup
//! - Vetoing a change from a changing listener (unsaved game)
//! - Reacting to committed changes from a changed listener
//! - Reporting refusals through the failure callback
//!
//! Run with: RUST_LOG=scenegate=debug cargo run --example scene_flow

use scenegate::builder::{fan_out, TransitionManagerBuilder};
use scenegate::manager::{ChangedEvent, ChangingEvent, TransitionOutcome};
use scenegate::rules::RuleEngine;
use scenegate::state_enum;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

state_enum! {
    enum GameScene {
        Null,
        Intro,
        MainMenu,
        SelectProfile,
        NewGame,
        LoadGame,
        PlayGame,
        SaveGame,
        QuitGame,
    }
    null: Null
    final: [QuitGame]
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "scenegate=info".to_string()))
        .init();

    println!("=== Game Scene Flow Example ===\n");

    let game_unsaved = Arc::new(AtomicBool::new(true));
    let unsaved = Arc::clone(&game_unsaved);

    let menu_exits: RuleEngine<_> = fan_out(
        GameScene::MainMenu,
        [
            GameScene::NewGame,
            GameScene::LoadGame,
            GameScene::PlayGame,
            GameScene::SaveGame,
            GameScene::QuitGame,
        ],
    )
    .into_iter()
    .collect();

    let mut scenes = TransitionManagerBuilder::new()
        .allow(GameScene::Null, GameScene::Intro)
        .allow(GameScene::Intro, GameScene::MainMenu)
        .rules(menu_exits)
        .on_changing(move |event: &mut ChangingEvent<GameScene>| {
            if unsaved.load(Ordering::SeqCst) {
                event.cancel = matches!(
                    event.prospective,
                    GameScene::LoadGame | GameScene::NewGame | GameScene::QuitGame
                );
            }
        })
        .on_changed(|event: &ChangedEvent<GameScene>| {
            // Loading the scene itself is the game's job.
            println!("  -> loading {:?} (left {:?})", event.current, event.original);
        })
        .on_failed(|reason| println!("  !! {reason}"))
        .build()?;

    println!("Example 1: Boot into the intro");
    scenes.request_transition(GameScene::Intro);

    println!("\nExample 2: Skip straight to quitting from the intro");
    scenes.request_transition(GameScene::QuitGame);
    println!("  still at {:?}", scenes.current_state());

    println!("\nExample 3: Reach the main menu");
    scenes.request_transition(GameScene::MainMenu);

    println!("\nExample 4: Requesting the current scene is ignored");
    let outcome = scenes.request_transition(GameScene::MainMenu);
    assert_eq!(outcome, TransitionOutcome::Unchanged);
    println!("  outcome: {outcome:?}");

    println!("\nExample 5: Quit with an unsaved game");
    scenes.request_transition(GameScene::QuitGame);

    println!("\nExample 6: Play is not guarded by the unsaved check");
    scenes.request_transition(GameScene::PlayGame);

    println!("\nPath so far: {:?}", scenes.history().get_path());
    println!("Unsaved flag was {}", game_unsaved.load(Ordering::SeqCst));

    println!("\n=== Example Complete ===");
    Ok(())
}
