//! Auswahl eines einzelnen Punkts im Editor.

/// Aktuell ausgewähltes Element.
///
/// Anker und Handles werden über den Ankerindex adressiert, Steuerpunkte über ihre ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectedPoint {
    Anchor(usize),
    HandleOut(usize),
    HandleIn(usize),
    Control(u64),
}

impl SelectedPoint {
    /// Index des betroffenen Ankers (auch für Handles).
    pub fn anchor_index(self) -> Option<usize> {
        match self {
            SelectedPoint::Anchor(i) | SelectedPoint::HandleOut(i) | SelectedPoint::HandleIn(i) => {
                Some(i)
            }
            SelectedPoint::Control(_) => None,
        }
    }

    /// ID des Steuerpunkts, falls einer ausgewählt ist.
    pub fn control_id(self) -> Option<u64> {
        match self {
            SelectedPoint::Control(id) => Some(id),
            _ => None,
        }
    }

    /// Gleiche Auswahlart mit anderem Ankerindex; Steuerpunkte bleiben unverändert.
    pub fn with_anchor_index(self, index: usize) -> Self {
        match self {
            SelectedPoint::Anchor(_) => SelectedPoint::Anchor(index),
            SelectedPoint::HandleOut(_) => SelectedPoint::HandleOut(index),
            SelectedPoint::HandleIn(_) => SelectedPoint::HandleIn(index),
            SelectedPoint::Control(id) => SelectedPoint::Control(id),
        }
    }
}
