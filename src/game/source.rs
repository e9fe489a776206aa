// src/game/source.rs

//! Loads game snapshots from disk and checks they are safe to render.
use std::fs;
use std::path::Path;

use crate::error::{PanelError, Result};
use crate::game::{Game, TurnAction};
use crate::log_info;

pub fn load_game(path: &Path) -> Result<Game> {
    let content = fs::read_to_string(path)?;

    let game: Game = match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml") | Some("yml") => serde_yaml::from_str(&content)?,
        Some("json") => serde_json::from_str(&content)?,
        other => {
            return Err(PanelError::InvalidSnapshot(format!(
                "unsupported snapshot extension {:?} for {}",
                other,
                path.display()
            )))
        }
    };

    validate_game(&game)?;

    log_info!(
        "Loaded game snapshot from {} ({} players, {} turns, synced={})",
        path.display(),
        game.players.len(),
        game.turns_history.len(),
        game.synced
    );

    Ok(game)
}

pub fn validate_game(game: &Game) -> Result<()> {
    if game.options.players_count < 2 {
        return Err(PanelError::InvalidSnapshot(format!(
            "players_count must be at least 2, got {}",
            game.options.players_count
        )));
    }

    let players = game.players.len();

    if players > 0 && game.current_player >= players {
        return Err(PanelError::InvalidSnapshot(format!(
            "current_player {} out of range for {} players",
            game.current_player, players
        )));
    }

    for (index, turn) in game.turns_history.iter().enumerate() {
        let from = turn.action.from();
        if from >= players {
            return Err(PanelError::InvalidSnapshot(format!(
                "turn {} was played by unknown player {}",
                index, from
            )));
        }
        if let TurnAction::Hint { to, .. } = turn.action {
            if to >= players {
                return Err(PanelError::InvalidSnapshot(format!(
                    "turn {} hints unknown player {}",
                    index, to
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn snapshot() -> serde_json::Value {
        json!({
            "status": "ongoing",
            "players": [ { "name": "Alice" }, { "name": "Bob" } ],
            "current_player": 1,
            "options": { "players_count": 2 },
            "synced": false,
            "turns_history": [
                { "action": { "type": "play", "from": 0, "card": { "color": "red", "number": 1 } },
                  "drawn": { "color": "blue", "number": 4 } }
            ]
        })
    }

    fn write_snapshot(suffix: &str, content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_json_snapshot() {
        let file = write_snapshot(".json", &snapshot().to_string());
        let game = load_game(file.path()).unwrap();

        assert_eq!(game.players.len(), 2);
        assert_eq!(game.current_player().unwrap().name, "Bob");
        assert_eq!(game.turns_history.len(), 1);
        assert!(!game.synced);
        assert!(game.options.turns_history);
    }

    #[test]
    fn test_load_yaml_snapshot() {
        let yaml = serde_yaml::to_string(&snapshot()).unwrap();
        let file = write_snapshot(".yaml", &yaml);
        let game = load_game(file.path()).unwrap();

        assert_eq!(game.players[0].name, "Alice");
    }

    #[test]
    fn test_player_ids_are_distinct_when_omitted() {
        let file = write_snapshot(".json", &snapshot().to_string());
        let game = load_game(file.path()).unwrap();

        assert_ne!(game.players[0].id, game.players[1].id);
    }

    #[test]
    fn test_rejects_unknown_extension() {
        let file = write_snapshot(".txt", "{}");
        assert!(matches!(load_game(file.path()), Err(PanelError::InvalidSnapshot(_))));
    }

    #[test]
    fn test_rejects_single_player_count() {
        let mut value = snapshot();
        value["options"]["players_count"] = json!(1);
        let file = write_snapshot(".json", &value.to_string());

        assert!(matches!(load_game(file.path()), Err(PanelError::InvalidSnapshot(_))));
    }

    #[test]
    fn test_rejects_turn_from_unknown_player() {
        let mut value = snapshot();
        value["turns_history"][0]["action"]["from"] = json!(5);
        let file = write_snapshot(".json", &value.to_string());

        assert!(load_game(file.path()).is_err());
    }

    #[test]
    fn test_rejects_current_player_out_of_range() {
        let mut value = snapshot();
        value["current_player"] = json!(2);
        let file = write_snapshot(".json", &value.to_string());

        assert!(matches!(load_game(file.path()), Err(PanelError::InvalidSnapshot(_))));
    }

    #[test]
    fn test_rejects_hint_to_unknown_player() {
        let mut value = snapshot();
        value["turns_history"][0] = json!({
            "action": { "type": "hint", "from": 0, "to": 3, "hint": { "number": 2 } }
        });
        let file = write_snapshot(".json", &value.to_string());

        assert!(matches!(load_game(file.path()), Err(PanelError::InvalidSnapshot(_))));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let file = write_snapshot(".json", "{ not json");
        assert!(matches!(load_game(file.path()), Err(PanelError::JsonError(_))));
    }
}
