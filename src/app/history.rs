use super::SelectionState;
use crate::core::{ControlPointList, Spline};

/// Snapshot reduziert auf die für Undo/Redo relevanten Teile.
///
/// Pfade bestehen aus wenigen Dutzend Ankern, ein Deep-Clone pro Schritt ist
/// daher unkritisch.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Ankerliste
    pub spline: Spline,
    /// Steuerpunkte
    pub controls: ControlPointList,
    /// Selektionszustand zum Zeitpunkt des Snapshots
    pub selection: SelectionState,
}

impl Snapshot {
    /// Erstellt einen Snapshot der Pfaddaten und der Auswahl.
    pub fn from_state(state: &crate::app::AppState) -> Self {
        Self {
            spline: state.spline.clone(),
            controls: state.controls.clone(),
            selection: state.selection.clone(),
        }
    }

    /// Stellt den Snapshot wieder her.
    pub fn apply_to(self, state: &mut crate::app::AppState) {
        state.spline = self.spline;
        state.controls = self.controls;
        state.selection = self.selection;
    }

    /// `true` wenn Pfad oder Steuerpunkte vom aktuellen Zustand abweichen.
    pub fn differs_from(&self, state: &crate::app::AppState) -> bool {
        self.spline != state.spline || self.controls != state.controls
    }
}

/// Einfacher Undo/Redo-Manager mit Snapshotting.
#[derive(Default)]
pub struct EditHistory {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    max_depth: usize,
}

impl EditHistory {
    /// Erstellt einen neuen History-Manager mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::with_capacity(max_depth),
            redo_stack: Vec::with_capacity(max_depth),
            max_depth,
        }
    }

    /// Legt einen fertigen Snapshot ab. Ein neuer Eintrag verwirft den Redo-Stack.
    pub fn record_snapshot(&mut self, snap: Snapshot) {
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(snap);
        self.redo_stack.clear();
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Holt den letzten Undo-Eintrag und legt `current` auf den Redo-Stack.
    pub fn pop_undo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let prev = self.undo_stack.pop()?;
        if self.redo_stack.len() >= self.max_depth {
            self.redo_stack.remove(0);
        }
        self.redo_stack.push(current);
        Some(prev)
    }

    /// Holt den letzten Redo-Eintrag und legt `current` auf den Undo-Stack.
    pub fn pop_redo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.redo_stack.pop()?;
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(current);
        Some(next)
    }

    /// Verwirft beide Stacks (z.B. nach dem Laden einer Routine).
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
