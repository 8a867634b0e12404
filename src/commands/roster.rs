//! Roster management from the shell, against the same store the TUI uses.

use anyhow::Result;

use crate::roster::{next_id, Player, RosterStore};

pub fn list(store: &RosterStore) -> Result<()> {
    let players = store.load();

    println!("\nRoster");
    println!("======\n");

    if players.is_empty() {
        println!("(empty)");
    } else {
        println!("{:<6} Name", "ID");
        println!("{}", "─".repeat(30));
        for player in &players {
            println!("{:<6} {}", player.id, player.name);
        }
    }

    println!();
    Ok(())
}

pub fn add(store: &RosterStore, name: String) -> Result<()> {
    let name = name.trim().to_string();
    anyhow::ensure!(!name.is_empty(), "player name must not be blank");

    let mut players = store.load();
    let id = next_id(&players);
    players.push(Player {
        id: id.clone(),
        name: name.clone(),
    });
    store.save(&players)?;

    println!("Added player {} with id {}", name, id);
    Ok(())
}

pub fn remove(store: &RosterStore, id: String) -> Result<()> {
    let mut players = store.load();
    let before = players.len();
    players.retain(|p| p.id != id);

    if players.len() == before {
        println!("No player with id {}", id);
        return Ok(());
    }

    store.save(&players)?;
    println!("Removed player {}", id);
    Ok(())
}
