//! Lane partition and drag state.

use serde::{Deserialize, Serialize};
use taskboard_core::status::TaskStatus;
use taskboard_core::types::{DbId, Timestamp};

/// The three fixed lanes in board order.
pub const LANES: [TaskStatus; 3] = TaskStatus::ALL;

/// A task as fetched over the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: DbId,
    pub project_id: DbId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: TaskStatus,
    pub created_at: Timestamp,
}

/// What the caller must do after a drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropAction {
    /// Issue `updateTask(task_id, {status})`, then reload the task list.
    Move { task_id: DbId, status: TaskStatus },
    /// Nothing to do: same lane, no drag in flight, or a stale subject.
    NoOp,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// Only one card may be the drag subject at a time.
    #[error("a drag is already in flight")]
    DragInFlight,

    #[error("no card with id {0} on the board")]
    UnknownCard(DbId),
}

/// View model for the board of one project.
///
/// Card order within a lane follows the loaded list, which the server
/// returns ascending by creation time.
#[derive(Debug)]
pub struct BoardState {
    project_id: DbId,
    cards: Vec<Card>,
    drag: Option<DbId>,
}

impl BoardState {
    pub fn new(project_id: DbId) -> Self {
        Self {
            project_id,
            cards: Vec::new(),
            drag: None,
        }
    }

    pub fn project_id(&self) -> DbId {
        self.project_id
    }

    /// Replace the card list wholesale after a reload. Lane membership
    /// only changes through this call, never by local mutation.
    pub fn set_cards(&mut self, cards: Vec<Card>) {
        self.cards = cards;
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Cards of one lane, in loaded order.
    pub fn lane(&self, status: TaskStatus) -> Vec<&Card> {
        self.cards.iter().filter(|c| c.status == status).collect()
    }

    pub fn lane_count(&self, status: TaskStatus) -> usize {
        self.cards.iter().filter(|c| c.status == status).count()
    }

    /// Mark a card as the drag subject.
    pub fn begin_drag(&mut self, id: DbId) -> Result<(), BoardError> {
        if self.drag.is_some() {
            return Err(BoardError::DragInFlight);
        }
        if !self.cards.iter().any(|c| c.id == id) {
            return Err(BoardError::UnknownCard(id));
        }
        self.drag = Some(id);
        Ok(())
    }

    pub fn dragging(&self) -> Option<DbId> {
        self.drag
    }

    pub fn cancel_drag(&mut self) {
        self.drag = None;
    }

    /// Drop the drag subject onto a lane. Always clears the subject.
    ///
    /// Dropping onto the card's current lane is a no-op; any other lane
    /// yields the status transition the caller must submit.
    pub fn drop_on(&mut self, target: TaskStatus) -> DropAction {
        let Some(id) = self.drag.take() else {
            return DropAction::NoOp;
        };
        match self.cards.iter().find(|c| c.id == id) {
            Some(card) if card.status != target => DropAction::Move {
                task_id: id,
                status: target,
            },
            _ => DropAction::NoOp,
        }
    }
}
