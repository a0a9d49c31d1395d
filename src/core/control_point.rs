//! Steuerpunkte entlang des Pfads und ihre Verhaltens-Attribute.

use super::EditError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Verhaltens-Attribut eines Steuerpunkts.
///
/// Pro Steuerpunkt darf jede Art höchstens einmal vorkommen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ControlPointAttribute {
    /// Anhalten für `duration` Sekunden
    Stop { duration: f32 },
    /// Auf `heading` Grad drehen
    Rotate { heading: f32 },
    /// Benannte Aktion ausführen
    Command { action: String },
    /// Zurückspringen zu einem anderen Steuerpunkt
    Loop {
        bounces: u32,
        #[serde(default)]
        target_loop_id: Option<u64>,
    },
}

impl ControlPointAttribute {
    /// Art des Attributs.
    pub fn kind(&self) -> AttributeKind {
        match self {
            ControlPointAttribute::Stop { .. } => AttributeKind::Stop,
            ControlPointAttribute::Rotate { .. } => AttributeKind::Rotate,
            ControlPointAttribute::Command { .. } => AttributeKind::Command,
            ControlPointAttribute::Loop { .. } => AttributeKind::Loop,
        }
    }
}

/// Art eines Attributs (Diskriminante ohne Nutzdaten).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    Stop,
    Rotate,
    Command,
    Loop,
}

impl AttributeKind {
    /// Alle Arten in Menü-Reihenfolge.
    pub const ALL: [AttributeKind; 4] = [
        AttributeKind::Stop,
        AttributeKind::Rotate,
        AttributeKind::Command,
        AttributeKind::Loop,
    ];

    /// Anzeigename.
    pub fn label(self) -> &'static str {
        match self {
            AttributeKind::Stop => "Stop",
            AttributeKind::Rotate => "Rotate",
            AttributeKind::Command => "Command",
            AttributeKind::Loop => "Loop",
        }
    }

    /// Neues Attribut dieser Art mit Startwerten.
    pub fn default_attribute(self) -> ControlPointAttribute {
        match self {
            AttributeKind::Stop => ControlPointAttribute::Stop { duration: 1.0 },
            AttributeKind::Rotate => ControlPointAttribute::Rotate { heading: 0.0 },
            AttributeKind::Command => ControlPointAttribute::Command {
                action: String::new(),
            },
            AttributeKind::Loop => ControlPointAttribute::Loop {
                bounces: 1,
                target_loop_id: None,
            },
        }
    }
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Partielle Änderung eines Attributs.
///
/// Felder, die nicht zur Art des Ziel-Attributs passen, werden ignoriert;
/// die Art selbst ändert sich nie.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeUpdate {
    pub duration: Option<f32>,
    pub heading: Option<f32>,
    pub action: Option<String>,
    pub bounces: Option<u32>,
    pub target_loop_id: Option<Option<u64>>,
}

impl AttributeUpdate {
    fn apply_to(self, attribute: &mut ControlPointAttribute) {
        match attribute {
            ControlPointAttribute::Stop { duration } => {
                if let Some(value) = self.duration {
                    *duration = value;
                }
            }
            ControlPointAttribute::Rotate { heading } => {
                if let Some(value) = self.heading {
                    *heading = value;
                }
            }
            ControlPointAttribute::Command { action } => {
                if let Some(value) = self.action {
                    *action = value;
                }
            }
            ControlPointAttribute::Loop {
                bounces,
                target_loop_id,
            } => {
                if let Some(value) = self.bounces {
                    *bounces = value;
                }
                if let Some(value) = self.target_loop_id {
                    *target_loop_id = value;
                }
            }
        }
    }
}

/// Farbschema eines Steuerpunkts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlPointColor {
    #[default]
    Blue,
    Red,
    Purple,
    Yellow,
    Cyan,
    Green,
    Orange,
}

impl ControlPointColor {
    /// Alle Farben in Auswahl-Reihenfolge.
    pub const ALL: [ControlPointColor; 7] = [
        ControlPointColor::Blue,
        ControlPointColor::Red,
        ControlPointColor::Purple,
        ControlPointColor::Yellow,
        ControlPointColor::Cyan,
        ControlPointColor::Green,
        ControlPointColor::Orange,
    ];

    /// sRGB-Farbwert für die Darstellung.
    pub fn rgb(self) -> [u8; 3] {
        match self {
            ControlPointColor::Blue => [0x3B, 0x82, 0xF6],
            ControlPointColor::Red => [0xEF, 0x44, 0x44],
            ControlPointColor::Purple => [0xA8, 0x55, 0xF7],
            ControlPointColor::Yellow => [0xEA, 0xB3, 0x08],
            ControlPointColor::Cyan => [0x06, 0xB6, 0xD4],
            ControlPointColor::Green => [0x22, 0xC5, 0x5E],
            ControlPointColor::Orange => [0xF9, 0x73, 0x16],
        }
    }

    /// Anzeigename.
    pub fn label(self) -> &'static str {
        match self {
            ControlPointColor::Blue => "Blau",
            ControlPointColor::Red => "Rot",
            ControlPointColor::Purple => "Lila",
            ControlPointColor::Yellow => "Gelb",
            ControlPointColor::Cyan => "Cyan",
            ControlPointColor::Green => "Grün",
            ControlPointColor::Orange => "Orange",
        }
    }
}

/// Markierung auf dem Pfad beim globalen Parameter `u`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint {
    /// Eindeutige ID (vom Aufrufer vergeben)
    pub id: u64,
    /// Globaler Spline-Parameter, wird nicht geclampt
    pub u: f32,
    /// Optionaler Anzeigename
    #[serde(default)]
    pub name: String,
    /// Farbschema
    #[serde(default)]
    pub color: ControlPointColor,
    /// Verhaltens-Attribute, höchstens eines pro Art
    #[serde(default)]
    pub attributes: Vec<ControlPointAttribute>,
}

impl ControlPoint {
    /// Steuerpunkt ohne Namen und Attribute.
    pub fn new(id: u64, u: f32, color: ControlPointColor) -> Self {
        Self {
            id,
            u,
            name: String::new(),
            color,
            attributes: Vec::new(),
        }
    }

    /// Hängt ein Attribut an (Builder, ohne Duplikatprüfung).
    pub fn with_attribute(mut self, attribute: ControlPointAttribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// `true` wenn ein Attribut dieser Art vorhanden ist.
    pub fn has_attribute(&self, kind: AttributeKind) -> bool {
        self.attributes.iter().any(|a| a.kind() == kind)
    }

    /// Arten, die noch hinzugefügt werden dürfen.
    pub fn missing_attribute_kinds(&self) -> Vec<AttributeKind> {
        AttributeKind::ALL
            .into_iter()
            .filter(|kind| !self.has_attribute(*kind))
            .collect()
    }
}

/// Partielle Änderung der Kopfdaten eines Steuerpunkts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControlPointUpdate {
    pub u: Option<f32>,
    pub name: Option<String>,
    pub color: Option<ControlPointColor>,
}

/// Steuerpunkte in Einfügereihenfolge; Identität über `id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ControlPointList {
    points: Vec<ControlPoint>,
}

impl ControlPointList {
    /// Erstellt eine Liste aus vorhandenen Steuerpunkten.
    pub fn new(points: Vec<ControlPoint>) -> Self {
        Self { points }
    }

    /// Alle Steuerpunkte in Einfügereihenfolge.
    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    /// Steuerpunkt mit dieser ID.
    pub fn get(&self, id: u64) -> Option<&ControlPoint> {
        self.points.iter().find(|p| p.id == id)
    }

    fn get_mut(&mut self, id: u64) -> Option<&mut ControlPoint> {
        self.points.iter_mut().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Hängt einen Steuerpunkt an.
    pub fn add(&mut self, point: ControlPoint) {
        self.points.push(point);
    }

    /// Übernimmt die gesetzten Felder von `update`. `false` wenn die ID fehlt.
    pub fn update(&mut self, id: u64, update: ControlPointUpdate) -> bool {
        let Some(point) = self.get_mut(id) else {
            return false;
        };
        if let Some(u) = update.u {
            point.u = u;
        }
        if let Some(name) = update.name {
            point.name = name;
        }
        if let Some(color) = update.color {
            point.color = color;
        }
        true
    }

    /// Entfernt den Steuerpunkt mit dieser ID.
    pub fn delete(&mut self, id: u64) -> Option<ControlPoint> {
        let index = self.points.iter().position(|p| p.id == id)?;
        Some(self.points.remove(index))
    }

    /// Setzt den Parameter `u` eines Steuerpunkts.
    pub fn move_to(&mut self, id: u64, u: f32) -> bool {
        self.update(
            id,
            ControlPointUpdate {
                u: Some(u),
                ..Default::default()
            },
        )
    }

    /// Fügt ein Attribut hinzu; eine bereits vorhandene Art wird abgelehnt.
    ///
    /// Eine unbekannte ID ist kein Fehler, es passiert nichts.
    pub fn add_attribute(
        &mut self,
        id: u64,
        attribute: ControlPointAttribute,
    ) -> Result<(), EditError> {
        let Some(point) = self.get_mut(id) else {
            log::debug!("Attribut hinzufügen: Steuerpunkt {} nicht gefunden", id);
            return Ok(());
        };
        let kind = attribute.kind();
        if point.has_attribute(kind) {
            return Err(EditError::DuplicateAttributeKind { point_id: id, kind });
        }
        point.attributes.push(attribute);
        Ok(())
    }

    /// Ändert das Attribut am Index teilweise. `false` wenn ID oder Index fehlen.
    pub fn update_attribute(&mut self, id: u64, index: usize, update: AttributeUpdate) -> bool {
        match self
            .get_mut(id)
            .and_then(|point| point.attributes.get_mut(index))
        {
            Some(attribute) => {
                update.apply_to(attribute);
                true
            }
            None => false,
        }
    }

    /// Entfernt das Attribut am Index.
    pub fn remove_attribute(&mut self, id: u64, index: usize) -> Option<ControlPointAttribute> {
        let point = self.get_mut(id)?;
        if index < point.attributes.len() {
            Some(point.attributes.remove(index))
        } else {
            None
        }
    }

    /// Steuerpunkte aufsteigend nach `u`; gleiche Werte behalten ihre Reihenfolge.
    pub fn sorted_by_u(&self) -> Vec<&ControlPoint> {
        let mut sorted: Vec<&ControlPoint> = self.points.iter().collect();
        sorted.sort_by(|a, b| a.u.total_cmp(&b.u));
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ControlPointList {
        ControlPointList::new(vec![
            ControlPoint::new(1, 0.3, ControlPointColor::Purple)
                .with_attribute(ControlPointAttribute::Rotate { heading: 180.0 }),
            ControlPoint::new(2, 0.65, ControlPointColor::Red)
                .with_attribute(ControlPointAttribute::Stop { duration: 1.5 }),
        ])
    }

    #[test]
    fn test_doppelte_attribut_art_wird_abgelehnt() {
        let mut list = sample();
        let result = list.add_attribute(2, ControlPointAttribute::Stop { duration: 3.0 });

        assert_eq!(
            result,
            Err(EditError::DuplicateAttributeKind {
                point_id: 2,
                kind: AttributeKind::Stop
            })
        );
        assert_eq!(list.get(2).map(|p| p.attributes.len()), Some(1));

        assert!(list
            .add_attribute(2, ControlPointAttribute::Rotate { heading: 90.0 })
            .is_ok());
        assert_eq!(list.get(2).map(|p| p.attributes.len()), Some(2));
    }

    #[test]
    fn test_unbekannte_id_ist_noop() {
        let mut list = sample();
        let before = list.clone();

        assert!(list.add_attribute(99, AttributeKind::Loop.default_attribute()).is_ok());
        assert!(!list.update(99, ControlPointUpdate::default()));
        assert!(!list.move_to(99, 1.0));
        assert!(list.delete(99).is_none());
        assert!(list.remove_attribute(1, 5).is_none());
        assert!(!list.update_attribute(1, 5, AttributeUpdate::default()));

        assert_eq!(list, before);
    }

    #[test]
    fn test_attribut_update_behaelt_art() {
        let mut list = sample();
        let changed = list.update_attribute(
            1,
            0,
            AttributeUpdate {
                heading: Some(90.0),
                duration: Some(7.0),
                ..Default::default()
            },
        );

        assert!(changed);
        assert_eq!(
            list.get(1).map(|p| p.attributes[0].clone()),
            Some(ControlPointAttribute::Rotate { heading: 90.0 })
        );
    }

    #[test]
    fn test_sortierung_nach_u_ist_stabil() {
        let mut list = sample();
        list.add(ControlPoint::new(3, 0.1, ControlPointColor::Blue));
        list.add(ControlPoint::new(4, 0.3, ControlPointColor::Green));

        let ids: Vec<u64> = list.sorted_by_u().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1, 4, 2]);
    }

    #[test]
    fn test_fehlende_attribut_arten() {
        let list = sample();
        let missing = list.get(1).map(|p| p.missing_attribute_kinds());
        assert_eq!(
            missing,
            Some(vec![
                AttributeKind::Stop,
                AttributeKind::Command,
                AttributeKind::Loop
            ])
        );
    }

    #[test]
    fn test_update_setzt_nur_angegebene_felder() {
        let mut list = sample();
        assert!(list.update(
            2,
            ControlPointUpdate {
                name: Some("Intake".into()),
                ..Default::default()
            }
        ));
        let point = list.get(2).expect("vorhanden");
        assert_eq!(point.name, "Intake");
        assert_eq!(point.u, 0.65);
        assert_eq!(point.color, ControlPointColor::Red);
    }
}
