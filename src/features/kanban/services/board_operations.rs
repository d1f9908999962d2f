use std::collections::HashSet;

use crate::features::kanban::dnd::CardDrop;
use crate::models::{Card, CardTask, Column, StatusMarker};

pub const DUPLICATE_ACTION: &str = "duplicate";
pub const TOGGLE_TASK_ACTION: &str = "toggle-task";

#[derive(Debug, Clone, PartialEq)]
pub struct BoardState {
    pub columns: Vec<Column>,
    /// All live cards; order within a column is their order here.
    pub cards: Vec<Card>,
    pub archived: Vec<Card>,
}

impl Default for BoardState {
    fn default() -> Self {
        Self {
            columns: Column::defaults(),
            cards: Vec::new(),
            archived: Vec::new(),
        }
    }
}

impl BoardState {
    pub fn cards_in(&self, column_id: &str) -> Vec<Card> {
        self.cards.iter().filter(|c| c.column_id == column_id).cloned().collect()
    }

    fn card_mut(&mut self, card_id: &str) -> Option<&mut Card> {
        self.cards.iter_mut().find(|c| c.id == card_id)
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn delete_card(&mut self, card_id: &str) -> Option<Card> {
        let index = self.cards.iter().position(|c| c.id == card_id)?;
        Some(self.cards.remove(index))
    }

    pub fn archive_card(&mut self, card_id: &str) -> bool {
        match self.delete_card(card_id) {
            Some(card) => {
                self.archived.push(card);
                true
            }
            None => false,
        }
    }

    pub fn rename_card(&mut self, card_id: &str, title: &str) -> bool {
        let title = title.trim();
        if title.is_empty() {
            return false;
        }
        match self.card_mut(card_id) {
            Some(card) => {
                card.title = title.to_string();
                true
            }
            None => false,
        }
    }

    pub fn update_description(&mut self, card_id: &str, text: String) -> bool {
        match self.card_mut(card_id) {
            Some(card) => {
                card.description = text;
                true
            }
            None => false,
        }
    }

    pub fn update_status_marker(&mut self, card_id: &str, marker: StatusMarker) -> bool {
        match self.card_mut(card_id) {
            Some(card) => {
                card.status_marker = marker;
                true
            }
            None => false,
        }
    }

    /// Moves a dropped card into its target column, above `before_card` or at the end.
    /// A card released on itself stays where it is.
    pub fn apply_drop(&mut self, drop: &CardDrop) -> bool {
        if drop.before_card.as_deref() == Some(drop.card_id.as_str()) {
            return false;
        }
        if !self.columns.iter().any(|c| c.id == drop.column_id) {
            return false;
        }
        let Some(mut card) = self.delete_card(&drop.card_id) else {
            return false;
        };
        card.column_id = drop.column_id.clone();
        let index = drop
            .before_card
            .as_deref()
            .and_then(|before| self.cards.iter().position(|c| c.id == before && c.column_id == drop.column_id))
            .unwrap_or_else(|| {
                self.cards
                    .iter()
                    .rposition(|c| c.column_id == drop.column_id)
                    .map(|i| i + 1)
                    .unwrap_or(self.cards.len())
            });
        self.cards.insert(index, card);
        true
    }

    /// Runs one of the extra card actions. Unknown actions are ignored.
    pub fn apply_action(&mut self, card_id: &str, action_id: &str, task_index: Option<usize>) -> bool {
        match (action_id, task_index) {
            (DUPLICATE_ACTION, _) => {
                let Some(index) = self.cards.iter().position(|c| c.id == card_id) else {
                    return false;
                };
                let source = &self.cards[index];
                let mut copy = Card::new(source.column_id.clone(), format!("{} (copy)", source.title));
                copy.description = source.description.clone();
                copy.tags = source.tags.clone();
                copy.tasks = source.tasks.iter().map(|t| CardTask { text: t.text.clone(), done: false }).collect();
                self.cards.insert(index + 1, copy);
                true
            }
            (TOGGLE_TASK_ACTION, Some(task)) => {
                match self.card_mut(card_id).and_then(|c| c.tasks.get_mut(task)) {
                    Some(task) => {
                        task.done = !task.done;
                        true
                    }
                    None => false,
                }
            }
            _ => false,
        }
    }

    /// Cards whose links point at cards that no longer exist.
    pub fn broken_link_ids(&self) -> HashSet<String> {
        let live: HashSet<&str> = self.cards.iter().map(|c| c.id.as_str()).collect();
        self.cards
            .iter()
            .filter(|c| c.links.iter().any(|l| !live.contains(l.as_str())))
            .map(|c| c.id.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: &str, column: &str) -> Card {
        Card { id: id.to_string(), ..Card::new(column, id) }
    }

    fn board(cards: &[(&str, &str)]) -> BoardState {
        BoardState {
            cards: cards.iter().map(|(id, col)| card(id, col)).collect(),
            ..BoardState::default()
        }
    }

    fn ids(cards: &[Card]) -> Vec<&str> {
        cards.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn cards_in_keeps_board_order() {
        let board = board(&[("a", "todo"), ("b", "done"), ("c", "todo")]);
        let todo = board.cards_in("todo");
        assert_eq!(todo.len(), 2);
        assert_eq!(ids(&todo), vec!["a", "c"]);
        assert!(board.cards_in("doing").is_empty());
    }

    #[test]
    fn archive_moves_card_out_of_the_board() {
        let mut board = board(&[("a", "done")]);
        assert!(board.archive_card("a"));
        assert!(board.cards.is_empty());
        assert_eq!(ids(&board.archived), vec!["a"]);
        assert!(!board.archive_card("a"));
    }

    #[test]
    fn drop_inserts_above_target_card() {
        let mut board = board(&[("a", "todo"), ("b", "done"), ("c", "done")]);
        let moved = board.apply_drop(&CardDrop {
            card_id: "a".into(),
            column_id: "done".into(),
            before_card: Some("c".into()),
        });
        assert!(moved);
        assert_eq!(ids(&board.cards_in("done")), vec!["b", "a", "c"]);
        assert_eq!(board.cards.iter().find(|c| c.id == "a").unwrap().column_id, "done");
    }

    #[test]
    fn drop_without_target_card_appends_to_column() {
        let mut board = board(&[("a", "todo"), ("b", "done"), ("c", "todo")]);
        board.apply_drop(&CardDrop { card_id: "b".into(), column_id: "todo".into(), before_card: None });
        assert_eq!(ids(&board.cards_in("todo")), vec!["a", "c", "b"]);
    }

    #[test]
    fn card_released_on_itself_keeps_its_place() {
        use std::sync::{Arc, Mutex};

        use leptos::prelude::{Callback, Owner};

        use crate::features::kanban::dnd::{DragDropBackend, Html5DragDrop};

        let owner = Owner::new();
        owner.with(|| {
            let shared = Arc::new(Mutex::new(board(&[("a", "todo"), ("b", "todo"), ("c", "todo")])));
            let dnd = {
                let shared = shared.clone();
                Html5DragDrop::new(Callback::new(move |card_drop: CardDrop| {
                    shared.lock().unwrap().apply_drop(&card_drop);
                }))
            };

            dnd.drag_start("a");
            dnd.drag_over("todo", Some("a"));
            dnd.drop_on("todo");

            let board = shared.lock().unwrap();
            assert_eq!(ids(&board.cards_in("todo")), vec!["a", "b", "c"]);
        });

        let mut board = board(&[("a", "todo"), ("b", "done")]);
        let moved = board.apply_drop(&CardDrop { card_id: "a".into(), column_id: "todo".into(), before_card: Some("a".into()) });
        assert!(!moved);
        assert_eq!(ids(&board.cards), vec!["a", "b"]);
    }

    #[test]
    fn drop_on_unknown_column_is_rejected() {
        let mut board = board(&[("a", "todo")]);
        let moved = board.apply_drop(&CardDrop { card_id: "a".into(), column_id: "nowhere".into(), before_card: None });
        assert!(!moved);
        assert_eq!(board.cards[0].column_id, "todo");
    }

    #[test]
    fn toggle_task_flips_only_the_indexed_task() {
        let mut board = board(&[("a", "todo")]);
        board.cards[0].tasks = vec![
            CardTask { text: "one".into(), done: false },
            CardTask { text: "two".into(), done: false },
        ];
        assert!(board.apply_action("a", TOGGLE_TASK_ACTION, Some(1)));
        assert!(!board.cards[0].tasks[0].done);
        assert!(board.cards[0].tasks[1].done);
        assert!(!board.apply_action("a", TOGGLE_TASK_ACTION, Some(5)));
        assert!(!board.apply_action("a", TOGGLE_TASK_ACTION, None));
    }

    #[test]
    fn duplicate_places_copy_after_source() {
        let mut board = board(&[("a", "todo"), ("b", "todo")]);
        assert!(board.apply_action("a", DUPLICATE_ACTION, None));
        assert_eq!(board.cards.len(), 3);
        assert_eq!(board.cards[1].title, "a (copy)");
        assert_eq!(board.cards[2].id, "b");
    }

    #[test]
    fn broken_links_are_detected_after_delete() {
        let mut board = board(&[("a", "todo"), ("b", "todo")]);
        board.cards[0].links = vec!["b".into()];
        assert!(board.broken_link_ids().is_empty());
        board.delete_card("b");
        assert_eq!(board.broken_link_ids(), HashSet::from(["a".to_string()]));
    }

    #[test]
    fn rename_rejects_blank_titles() {
        let mut board = board(&[("a", "todo")]);
        assert!(!board.rename_card("a", "   "));
        assert!(board.rename_card("a", " Ship it "));
        assert_eq!(board.cards[0].title, "Ship it");
    }
}
