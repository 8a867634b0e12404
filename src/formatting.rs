use unicode_width::UnicodeWidthChar;

use crate::game::{EventKind, EventLog, GameEvent, GamePhase};
use crate::roster::Player;

/// Format elapsed seconds as `mm:ss`. Minutes are not wrapped at the hour,
/// so fulltime of a 25-minute-half match reads `50:00`.
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Resolve a player id against the roster.
pub fn player_name<'a>(roster: &'a [Player], player_id: &str) -> Option<&'a str> {
    roster
        .iter()
        .find(|p| p.id == player_id)
        .map(|p| p.name.as_str())
}

/// One history row: `(time, text, running score)`.
///
/// The running score is the prefix score up to this event, shown for goals
/// and phase ends. Credit rows with the skip sentinel get no attribution
/// text at all.
pub fn format_event_line(
    index: usize,
    event: &GameEvent,
    log: &EventLog,
    roster: &[Player],
) -> (String, String, Option<String>) {
    let time = format_clock(event.seconds);
    let score = || {
        let (us, them) = log.score_at(index);
        Some(format!("{} - {}", us, them))
    };
    match event.kind {
        EventKind::PhaseStart => {
            let text = if event.phase == GamePhase::First {
                "Start of the game".to_string()
            } else {
                "Start second half".to_string()
            };
            (time, text, None)
        }
        EventKind::PhaseEnd => {
            let text = if event.phase == GamePhase::First {
                "Halftime".to_string()
            } else {
                "Fulltime".to_string()
            };
            (time, text, score())
        }
        EventKind::GoalUs => (time, "Goal!".to_string(), score()),
        EventKind::GoalThem => (time, "Goal".to_string(), score()),
        EventKind::CreditGoal | EventKind::CreditAssist => {
            let verb = if event.kind == EventKind::CreditGoal {
                "Scored by"
            } else {
                "Assist by"
            };
            let text = event
                .credited_player()
                .map(|id| {
                    let name = player_name(roster, id).unwrap_or(id);
                    format!("{} {}", verb, name)
                })
                .unwrap_or_default();
            (time, text, None)
        }
    }
}

/// Pad `text` to `width` terminal columns, truncating over-wide strings.
/// Width is measured in display columns, not chars, so wide glyphs in
/// player names keep the roster list aligned.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::SKIP_PLAYER_ID;

    fn roster() -> Vec<Player> {
        vec![
            Player {
                id: "1".to_string(),
                name: "Ana".to_string(),
            },
            Player {
                id: "2".to_string(),
                name: "Bo".to_string(),
            },
        ]
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(90), "01:30");
        assert_eq!(format_clock(1500), "25:00");
        assert_eq!(format_clock(3000), "50:00");
    }

    #[test]
    fn test_phase_end_row_shows_running_score() {
        let mut log = EventLog::new();
        log.append(GameEvent::new(0, GamePhase::First, EventKind::PhaseStart));
        log.append(GameEvent::new(40, GamePhase::First, EventKind::GoalUs));
        log.append(GameEvent::new(90, GamePhase::First, EventKind::PhaseEnd));

        let (time, text, score) = format_event_line(2, log.iter().nth(2).unwrap(), &log, &[]);
        assert_eq!(time, "01:30");
        assert_eq!(text, "Halftime");
        assert_eq!(score.as_deref(), Some("1 - 0"));
    }

    #[test]
    fn test_credit_rows_resolve_names_and_skip_sentinel() {
        let mut log = EventLog::new();
        log.append(GameEvent::new(10, GamePhase::First, EventKind::GoalUs));
        log.append(GameEvent::with_player(
            10,
            GamePhase::First,
            EventKind::CreditGoal,
            "2".to_string(),
        ));
        log.append(GameEvent::with_player(
            10,
            GamePhase::First,
            EventKind::CreditAssist,
            SKIP_PLAYER_ID.to_string(),
        ));

        let (_, scored, _) = format_event_line(1, log.iter().nth(1).unwrap(), &log, &roster());
        assert_eq!(scored, "Scored by Bo");

        let (_, skipped, _) = format_event_line(2, log.iter().nth(2).unwrap(), &log, &roster());
        assert_eq!(skipped, "");
    }

    #[test]
    fn test_unknown_player_id_falls_back_to_id() {
        let mut log = EventLog::new();
        log.append(GameEvent::with_player(
            5,
            GamePhase::First,
            EventKind::CreditGoal,
            "9".to_string(),
        ));
        let (_, text, _) = format_event_line(0, log.iter().next().unwrap(), &log, &roster());
        assert_eq!(text, "Scored by 9");
    }

    #[test]
    fn test_pad_to_width() {
        assert_eq!(pad_to_width("Ana", 5), "Ana  ");
        assert_eq!(pad_to_width("Anabel", 4), "Anab");
        assert_eq!(pad_to_width("", 3), "   ");
    }
}
