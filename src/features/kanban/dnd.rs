//! Drag-and-drop seam for the board.
//!
//! Columns only need two capabilities: a drop target keyed by column id that
//! reports whether a dragged card hovers it, and a sortable wrapper over the
//! card ids in display order. `Html5DragDrop` provides both on top of native
//! HTML5 drag events; what a completed drop means is left to the host.

use leptos::html::Div;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortStrategy {
    #[default]
    VerticalList,
}

/// Item ids in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortableList {
    pub ids: Vec<String>,
    pub strategy: SortStrategy,
}

impl SortableList {
    pub fn new(ids: Vec<String>, strategy: SortStrategy) -> Self {
        Self { ids, strategy }
    }

    /// 1-based slot of the item rendered at `index`, if the list holds `id` there.
    pub fn posinset(&self, index: usize, id: &str) -> Option<usize> {
        self.ids.get(index).filter(|i| i.as_str() == id).map(|_| index + 1)
    }
}

/// A registered drop zone: the hover flag and the handle to attach to the element.
#[derive(Clone)]
pub struct DropTarget {
    pub id: String,
    pub is_over: Signal<bool>,
    pub node_ref: NodeRef<Div>,
}

/// A card released over a drop zone, optionally above another card. `before_card`
/// equal to `card_id` means the card was released on itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDrop {
    pub card_id: String,
    pub column_id: String,
    pub before_card: Option<String>,
}

pub trait DragDropBackend: Copy + Send + Sync + 'static {
    fn register_drop_target(&self, id: &str) -> DropTarget;
    fn sortable(&self, ids: Vec<String>, strategy: SortStrategy) -> SortableList;

    fn drag_start(&self, card_id: &str);
    /// The pointer moved over zone `zone_id`, above `over_card` if it is on a card.
    fn drag_over(&self, zone_id: &str, over_card: Option<&str>);
    fn drag_leave(&self, zone_id: &str);
    fn drop_on(&self, zone_id: &str);
    fn drag_end(&self);
}

#[derive(Clone, Copy)]
pub struct Html5DragDrop {
    dragging: RwSignal<Option<String>>,
    over_zone: RwSignal<Option<String>>,
    over_card: RwSignal<Option<String>>,
    on_drop: Callback<CardDrop>,
}

impl Html5DragDrop {
    pub fn new(on_drop: Callback<CardDrop>) -> Self {
        Self {
            dragging: RwSignal::new(None),
            over_zone: RwSignal::new(None),
            over_card: RwSignal::new(None),
            on_drop,
        }
    }

    pub fn dragging(&self) -> Option<String> {
        self.dragging.get_untracked()
    }

    fn reset(&self) {
        self.dragging.set(None);
        self.over_zone.set(None);
        self.over_card.set(None);
    }
}

impl DragDropBackend for Html5DragDrop {
    fn register_drop_target(&self, id: &str) -> DropTarget {
        let over_zone = self.over_zone;
        let zone = id.to_string();
        DropTarget {
            id: id.to_string(),
            is_over: Signal::derive(move || over_zone.with(|z| z.as_deref() == Some(zone.as_str()))),
            node_ref: NodeRef::new(),
        }
    }

    fn sortable(&self, ids: Vec<String>, strategy: SortStrategy) -> SortableList {
        SortableList::new(ids, strategy)
    }

    fn drag_start(&self, card_id: &str) {
        self.dragging.set(Some(card_id.to_string()));
    }

    fn drag_over(&self, zone_id: &str, over_card: Option<&str>) {
        if self.dragging.with_untracked(Option::is_none) {
            return;
        }
        if self.over_zone.with_untracked(|z| z.as_deref() != Some(zone_id)) {
            self.over_zone.set(Some(zone_id.to_string()));
        }
        let card = over_card.map(str::to_string);
        if self.over_card.with_untracked(|c| *c != card) {
            self.over_card.set(card);
        }
    }

    fn drag_leave(&self, zone_id: &str) {
        if self.over_zone.with_untracked(|z| z.as_deref() == Some(zone_id)) {
            self.over_zone.set(None);
            self.over_card.set(None);
        }
    }

    fn drop_on(&self, zone_id: &str) {
        let Some(card_id) = self.dragging.get_untracked() else {
            return;
        };
        let before_card = self.over_card.get_untracked();
        self.reset();
        self.on_drop.run(CardDrop {
            card_id,
            column_id: zone_id.to_string(),
            before_card,
        });
    }

    fn drag_end(&self) {
        self.reset();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    #[test]
    fn sortable_keeps_display_order() {
        let list = SortableList::new(vec!["b".into(), "a".into(), "c".into()], SortStrategy::VerticalList);
        assert_eq!(list.posinset(0, "b"), Some(1));
        assert_eq!(list.posinset(1, "a"), Some(2));
        assert_eq!(list.posinset(1, "c"), None);
        assert_eq!(list.posinset(3, "z"), None);
    }

    #[test]
    fn hover_flag_follows_the_dragged_card() {
        let owner = Owner::new();
        owner.with(|| {
            let dnd = Html5DragDrop::new(Callback::new(|_: CardDrop| {}));
            let todo = dnd.register_drop_target("todo");
            let done = dnd.register_drop_target("done");

            dnd.drag_over("todo", None);
            assert!(!todo.is_over.get_untracked(), "nothing is being dragged yet");

            dnd.drag_start("c1");
            dnd.drag_over("todo", None);
            assert!(todo.is_over.get_untracked());
            assert!(!done.is_over.get_untracked());

            dnd.drag_leave("todo");
            assert!(!todo.is_over.get_untracked());

            dnd.drag_over("done", Some("c2"));
            dnd.drag_end();
            assert!(!done.is_over.get_untracked());
            assert_eq!(dnd.dragging(), None);
        });
    }

    #[test]
    fn drop_reports_target_column_and_card_below() {
        let owner = Owner::new();
        owner.with(|| {
            let drops = Arc::new(Mutex::new(Vec::new()));
            let dnd = {
                let drops = drops.clone();
                Html5DragDrop::new(Callback::new(move |drop: CardDrop| drops.lock().unwrap().push(drop)))
            };

            dnd.drag_start("c1");
            dnd.drag_over("done", Some("c2"));
            dnd.drop_on("done");

            dnd.drag_start("c3");
            dnd.drag_over("todo", Some("c3"));
            dnd.drop_on("todo");

            // No drag in progress.
            dnd.drop_on("todo");

            let drops = drops.lock().unwrap();
            assert_eq!(*drops, vec![
                CardDrop { card_id: "c1".into(), column_id: "done".into(), before_card: Some("c2".into()) },
                CardDrop { card_id: "c3".into(), column_id: "todo".into(), before_card: Some("c3".into()) },
            ]);
        });
    }
}
