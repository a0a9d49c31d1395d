//! Ankerpunkte des Pfads.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Ankerpunkt des Spline-Pfads (Positionen in Feld-Zoll).
///
/// Die Handle-Offsets sind relativ zu `position`. Gerade Anker haben
/// konventionell Null-Offsets, werden aber geometrisch gleich behandelt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnchorPoint {
    /// Position auf dem Feld
    pub position: Vec2,
    /// Offset des eingehenden Handles
    pub handle_in_offset: Vec2,
    /// Offset des ausgehenden Handles
    pub handle_out_offset: Vec2,
    /// Kurvenanker (Handles sichtbar und editierbar)
    pub is_curved: bool,
    /// Handles werden gespiegelt geführt
    pub handles_aligned: bool,
    /// Optionaler Anzeigename
    #[serde(default)]
    pub name: String,
}

impl AnchorPoint {
    /// Gerader Anker ohne Handles.
    pub fn straight(position: Vec2) -> Self {
        Self {
            position,
            handle_in_offset: Vec2::ZERO,
            handle_out_offset: Vec2::ZERO,
            is_curved: false,
            handles_aligned: true,
            name: String::new(),
        }
    }

    /// Kurvenanker mit symmetrischen horizontalen Handles der Länge `handle_length`.
    pub fn curved(position: Vec2, handle_length: f32) -> Self {
        Self {
            position,
            handle_in_offset: Vec2::new(-handle_length, 0.0),
            handle_out_offset: Vec2::new(handle_length, 0.0),
            is_curved: true,
            handles_aligned: true,
            name: String::new(),
        }
    }

    /// Setzt den Anzeigenamen (Builder).
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Absolute Position des eingehenden Handles.
    pub fn handle_in(&self) -> Vec2 {
        self.position + self.handle_in_offset
    }

    /// Absolute Position des ausgehenden Handles.
    pub fn handle_out(&self) -> Vec2 {
        self.position + self.handle_out_offset
    }

    /// Offset des Handles auf der angegebenen Seite.
    pub fn handle_offset(&self, side: HandleSide) -> Vec2 {
        match side {
            HandleSide::In => self.handle_in_offset,
            HandleSide::Out => self.handle_out_offset,
        }
    }
}

/// Seite eines Handles am Anker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleSide {
    /// Eingehendes Handle (Richtung Vorgänger)
    In,
    /// Ausgehendes Handle (Richtung Nachfolger)
    Out,
}

impl HandleSide {
    /// Die gegenüberliegende Seite.
    pub fn opposite(self) -> Self {
        match self {
            HandleSide::In => HandleSide::Out,
            HandleSide::Out => HandleSide::In,
        }
    }
}
