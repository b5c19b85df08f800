//! Fixed announcements shown when a game ends.

use super::GameResult;
use serde::Serialize;

/// Title, message and button label for an end-of-game dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AlertItem {
    /// Dialog title.
    pub title: &'static str,
    /// Body text.
    pub message: &'static str,
    /// Label of the dismiss button.
    pub button_title: &'static str,
}

impl AlertItem {
    /// Shown when the human completes a line.
    pub const HUMAN_WIN: AlertItem = AlertItem {
        title: "You Win!",
        message: "You beat AI!",
        button_title: "Yeahh",
    };

    /// Shown when the computer completes a line.
    pub const COMPUTER_WIN: AlertItem = AlertItem {
        title: "You lost!",
        message: "My fantastic AI beat you!",
        button_title: "Yesss",
    };

    /// Shown on a full board with no line.
    pub const DRAW: AlertItem = AlertItem {
        title: "Draw!",
        message: "My AI is just as smart as you",
        button_title: "Rematch!?",
    };

    /// Announcement for a terminal result; `None` while the game is ongoing.
    pub fn for_result(result: GameResult) -> Option<&'static AlertItem> {
        match result {
            GameResult::Ongoing => None,
            GameResult::HumanWin => Some(&Self::HUMAN_WIN),
            GameResult::ComputerWin => Some(&Self::COMPUTER_WIN),
            GameResult::Draw => Some(&Self::DRAW),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_alert_while_ongoing() {
        assert_eq!(AlertItem::for_result(GameResult::Ongoing), None);
    }

    #[test]
    fn test_terminal_results_have_alerts() {
        assert_eq!(
            AlertItem::for_result(GameResult::HumanWin).map(|a| a.title),
            Some("You Win!")
        );
        assert_eq!(
            AlertItem::for_result(GameResult::ComputerWin).map(|a| a.button_title),
            Some("Yesss")
        );
        assert_eq!(
            AlertItem::for_result(GameResult::Draw).map(|a| a.message),
            Some("My AI is just as smart as you")
        );
    }
}
