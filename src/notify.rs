//! Synchronous change notification between the board store and its views.
//!
//! The store emits one [`BoardEvent`] after each successful mutation. Every
//! attached listener is called exactly once per event, in attachment order,
//! on the calling thread, before the mutating operation returns. There is no
//! queue. A listener that panics is not caught: the panic unwinds through
//! the store operation that emitted the event.

use std::rc::Rc;
use crate::models::{Board, Column, Sticker};

/// A change to the board, with the payload each kind carries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardEvent {
    AddSticker {
        column: Column,
        sticker: Sticker,
    },
    DeleteSticker {
        column: Column,
        index: usize,
    },
    /// Stickers land at the tail of `to_column`; views rebuild rather than
    /// patch because every index after the source position changed.
    MoveSticker {
        from_column: Column,
        to_column: Column,
        sticker: Sticker,
    },
    EditStickerBg {
        column: Column,
        index: usize,
        new_color: String,
    },
    LoadStickers,
}

impl BoardEvent {
    /// Event kind name
    pub fn kind(&self) -> &'static str {
        match self {
            BoardEvent::AddSticker { .. } => "add_sticker",
            BoardEvent::DeleteSticker { .. } => "delete_sticker",
            BoardEvent::MoveSticker { .. } => "move_sticker",
            BoardEvent::EditStickerBg { .. } => "edit_sticker_bg",
            BoardEvent::LoadStickers => "load_stickers",
        }
    }
}

/// Receiver of board events
///
/// `board` is the store's state after the mutation, so a listener can
/// rebuild from it without holding a reference to the store.
pub trait BoardListener {
    fn on_event(&self, event: &BoardEvent, board: &Board);
}

impl<F> BoardListener for F
where
    F: Fn(&BoardEvent, &Board),
{
    fn on_event(&self, event: &BoardEvent, board: &Board) {
        self(event, board)
    }
}

/// Ordered listener registry
///
/// Listeners are identified by allocation, so attaching a clone of the same
/// `Rc` twice registers it once.
#[derive(Default)]
pub struct Notifier {
    listeners: Vec<Rc<dyn BoardListener>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. Returns false if it was already attached.
    pub fn attach(&mut self, listener: Rc<dyn BoardListener>) -> bool {
        if self.position(&listener).is_some() {
            return false;
        }
        self.listeners.push(listener);
        true
    }

    /// Unregister a listener. Returns false if it was not attached.
    pub fn detach<L: BoardListener + ?Sized>(&mut self, listener: &Rc<L>) -> bool {
        match self.position(listener) {
            Some(pos) => {
                self.listeners.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Deliver an event to every attached listener, in attachment order
    pub fn notify(&self, event: &BoardEvent, board: &Board) {
        for listener in &self.listeners {
            listener.on_event(event, board);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    fn position<L: BoardListener + ?Sized>(&self, listener: &Rc<L>) -> Option<usize> {
        let target = Rc::as_ptr(listener).cast::<()>();
        self.listeners
            .iter()
            .position(|l| Rc::as_ptr(l).cast::<()>() == target)
    }
}
