//! Stückweise kubischer Spline aus Ankerpunkten.
//!
//! Segment `i` verbindet Anker `i` und `i + 1`. Der globale Parameter `u`
//! adressiert den ganzen Pfad: ganzzahliger Teil = Segment, Bruchteil = lokales `t`.

use super::anchor::{AnchorPoint, HandleSide};
use super::bezier::CubicBezier;
use super::vector::{magnitude, normalize};
use super::GeometryError;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Ergebnis einer Nächster-Punkt-Suche auf dem Spline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplineHit {
    /// Globaler Parameter (`segment + t`)
    pub u: f32,
    /// Segment-Index
    pub segment: usize,
    /// Lokaler Parameter im Segment
    pub t: f32,
    /// Punkt auf der Kurve
    pub point: Vec2,
    /// Abstand zum Suchpunkt
    pub distance: f32,
}

/// Geordnete Ankerliste; die Identität eines Ankers ist sein Index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Spline {
    anchors: Vec<AnchorPoint>,
}

impl Spline {
    /// Erstellt einen Spline aus einer Ankerliste.
    pub fn new(anchors: Vec<AnchorPoint>) -> Self {
        Self { anchors }
    }

    /// Alle Anker in Pfadreihenfolge.
    pub fn anchors(&self) -> &[AnchorPoint] {
        &self.anchors
    }

    /// Anker am Index, falls vorhanden.
    pub fn anchor(&self, index: usize) -> Option<&AnchorPoint> {
        self.anchors.get(index)
    }

    /// Anzahl der Anker.
    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    /// `true` wenn keine Anker vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    /// Anzahl der Kurvensegmente (`len - 1`, mindestens 0).
    pub fn segment_count(&self) -> usize {
        self.anchors.len().saturating_sub(1)
    }

    /// Bézier-Kurve des Segments `index`.
    ///
    /// Die Handles fließen unabhängig von `is_curved` ein.
    pub fn segment(&self, index: usize) -> Option<CubicBezier> {
        let start = self.anchors.get(index)?;
        let end = self.anchors.get(index + 1)?;
        Some(CubicBezier::new(
            start.position,
            start.handle_out(),
            end.handle_in(),
            end.position,
        ))
    }

    /// Alle Segmente in Pfadreihenfolge.
    pub fn curve_segments(&self) -> Vec<CubicBezier> {
        (0..self.segment_count())
            .filter_map(|i| self.segment(i))
            .collect()
    }

    /// Punkt beim globalen Parameter `u`.
    ///
    /// Total: weniger als zwei Anker liefern den Nullvektor, `u` wird auf den
    /// gültigen Bereich geclampt, NaN wird wie 0 behandelt.
    pub fn point_at_u(&self, u: f32) -> Vec2 {
        let segment_count = self.segment_count();
        if segment_count == 0 {
            return Vec2::ZERO;
        }

        let u = if u.is_nan() { 0.0 } else { u };
        let segment = (u.floor().max(0.0) as usize).min(segment_count - 1);
        let t = (u - segment as f32).clamp(0.0, 1.0);

        match self.segment(segment) {
            Some(curve) => curve.point_at(t),
            None => Vec2::ZERO,
        }
    }

    /// Sucht den nächstgelegenen Kurvenpunkt durch Abtasten.
    ///
    /// Pro Segment werden `steps_per_segment + 1` Punkte geprüft. Bei gleichem
    /// Abstand gewinnt der zuerst gefundene Punkt. `None` bei weniger als zwei Ankern.
    pub fn nearest_point(&self, position: Vec2, steps_per_segment: usize) -> Option<SplineHit> {
        let steps = steps_per_segment.max(1);
        let mut best: Option<SplineHit> = None;

        for segment in 0..self.segment_count() {
            let Some(curve) = self.segment(segment) else {
                continue;
            };
            for i in 0..=steps {
                let t = i as f32 / steps as f32;
                let point = curve.point_at(t);
                let distance = point.distance(position);
                if best.is_none_or(|b| distance < b.distance) {
                    best = Some(SplineHit {
                        u: segment as f32 + t,
                        segment,
                        t,
                        point,
                        distance,
                    });
                }
            }
        }

        best
    }

    /// Hängt einen Anker ans Pfadende an und gibt seinen Index zurück.
    pub fn add_anchor(&mut self, anchor: AnchorPoint) -> usize {
        self.anchors.push(anchor);
        self.anchors.len() - 1
    }

    /// Entfernt einen Anker ohne Mindestanzahl-Prüfung.
    pub fn remove_anchor(&mut self, index: usize) -> Option<AnchorPoint> {
        if index < self.anchors.len() {
            Some(self.anchors.remove(index))
        } else {
            None
        }
    }

    /// Setzt die Position eines Ankers. Handles bleiben relativ erhalten.
    pub fn move_anchor(&mut self, index: usize, position: Vec2) -> bool {
        self.update_anchor(index, |anchor| anchor.position = position)
    }

    /// Wendet `update` auf den Anker am Index an. `false` wenn nicht vorhanden.
    pub fn update_anchor<F>(&mut self, index: usize, update: F) -> bool
    where
        F: FnOnce(&mut AnchorPoint),
    {
        match self.anchors.get_mut(index) {
            Some(anchor) => {
                update(anchor);
                true
            }
            None => false,
        }
    }

    /// Schaltet zwischen geradem und Kurvenanker um.
    ///
    /// Beim Einschalten werden Handles der Länge `handle_length` horizontal
    /// gesetzt, beim Ausschalten auf Null zurückgesetzt.
    pub fn toggle_anchor_curve(&mut self, index: usize, handle_length: f32) -> bool {
        self.update_anchor(index, |anchor| {
            anchor.is_curved = !anchor.is_curved;
            if anchor.is_curved {
                anchor.handle_in_offset = Vec2::new(-handle_length, 0.0);
                anchor.handle_out_offset = Vec2::new(handle_length, 0.0);
            } else {
                anchor.handle_in_offset = Vec2::ZERO;
                anchor.handle_out_offset = Vec2::ZERO;
            }
        })
    }

    /// Setzt ein Handle und führt das gegenüberliegende gespiegelt nach.
    ///
    /// Das andere Handle zeigt danach exakt entgegengesetzt und behält seine
    /// bisherige Länge. Hat das gesetzte Handle Länge 0, fällt das andere auf 0.
    pub fn set_handle_mirrored(&mut self, index: usize, side: HandleSide, offset: Vec2) -> bool {
        self.update_anchor(index, |anchor| {
            let other_length = magnitude(anchor.handle_offset(side.opposite()));
            let mirrored = -normalize(offset) * other_length;
            match side {
                HandleSide::Out => {
                    anchor.handle_out_offset = offset;
                    anchor.handle_in_offset = mirrored;
                }
                HandleSide::In => {
                    anchor.handle_in_offset = offset;
                    anchor.handle_out_offset = mirrored;
                }
            }
        })
    }

    /// Fügt einen Anker bei `t` auf dem Segment `segment` ein, ohne die Kurvenform zu ändern.
    ///
    /// Die Nachbaranker übernehmen die äußeren De-Casteljau-Punkte als Handles,
    /// der neue Kurvenanker die inneren. Liefert den Index des neuen Ankers
    /// (`segment + 1`), `None` für ein unbekanntes Segment.
    pub fn insert_anchor_on_curve(
        &mut self,
        segment: usize,
        t: f32,
    ) -> Result<Option<usize>, GeometryError> {
        let Some(curve) = self.segment(segment) else {
            return Ok(None);
        };
        let (left, right) = curve.split_at_t(t)?;

        let position = left.p3;
        let inserted = AnchorPoint {
            position,
            handle_in_offset: left.p2 - position,
            handle_out_offset: right.p1 - position,
            is_curved: true,
            handles_aligned: true,
            name: String::new(),
        };

        let start = &mut self.anchors[segment];
        start.handle_out_offset = left.p1 - start.position;
        let end = &mut self.anchors[segment + 1];
        end.handle_in_offset = right.p2 - end.position;

        self.anchors.insert(segment + 1, inserted);
        Ok(Some(segment + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn two_straight() -> Spline {
        Spline::new(vec![
            AnchorPoint::straight(Vec2::new(0.0, 0.0)),
            AnchorPoint::straight(Vec2::new(100.0, 0.0)),
        ])
    }

    fn three_mixed() -> Spline {
        Spline::new(vec![
            AnchorPoint::straight(Vec2::new(0.0, 0.0)),
            AnchorPoint::curved(Vec2::new(100.0, 50.0), 30.0),
            AnchorPoint::straight(Vec2::new(200.0, 0.0)),
        ])
    }

    #[test]
    fn test_point_at_u_ohne_segmente_ist_null() {
        assert_eq!(Spline::default().point_at_u(0.5), Vec2::ZERO);
        let single = Spline::new(vec![AnchorPoint::straight(Vec2::new(5.0, 5.0))]);
        assert_eq!(single.point_at_u(0.0), Vec2::ZERO);
        assert!(single.nearest_point(Vec2::ZERO, 100).is_none());
    }

    #[test]
    fn test_point_at_u_trifft_anker_bei_ganzzahligem_u() {
        let spline = three_mixed();
        for (k, anchor) in spline.anchors().iter().enumerate() {
            assert_eq!(spline.point_at_u(k as f32), anchor.position);
        }
    }

    #[test]
    fn test_point_at_u_ist_total() {
        let spline = three_mixed();
        assert_eq!(spline.point_at_u(-3.0), spline.anchors()[0].position);
        assert_eq!(spline.point_at_u(f32::NAN), spline.anchors()[0].position);
        assert_eq!(spline.point_at_u(17.5), spline.anchors()[2].position);
        assert!(spline.point_at_u(f32::INFINITY).is_finite());
    }

    #[test]
    fn test_gerade_strecke_mittelpunkt() {
        let spline = two_straight();
        let mid = spline.point_at_u(0.5);
        assert_relative_eq!(mid.x, 50.0, epsilon = 1e-4);
        assert_relative_eq!(mid.y, 0.0, epsilon = 1e-4);
    }

    #[test]
    fn test_nearest_point_findet_parameter() {
        let spline = two_straight();
        let hit = spline
            .nearest_point(Vec2::new(25.0, 4.0), 100)
            .expect("Spline hat ein Segment");
        assert_eq!(hit.segment, 0);
        assert_relative_eq!(hit.u, hit.t);
        assert_relative_eq!(hit.point.x, 25.0, epsilon = 1.0);
        assert_relative_eq!(hit.distance, 4.0, epsilon = 0.1);
        assert_eq!(spline.point_at_u(hit.u), hit.point);
    }

    #[test]
    fn test_einfuegen_erhaelt_kurvenform() {
        let mut spline = three_mixed();
        let before = spline.segment(0).expect("Segment 0");
        let split = 0.4;

        let index = spline
            .insert_anchor_on_curve(0, split)
            .expect("t gültig")
            .expect("Segment vorhanden");

        assert_eq!(index, 1);
        assert_eq!(spline.len(), 4);
        assert!(spline.anchors()[1].is_curved);
        assert!(spline.anchors()[1].handles_aligned);

        let expected = before.point_at(split);
        assert_relative_eq!(spline.point_at_u(1.0).x, expected.x, epsilon = 1e-3);
        assert_relative_eq!(spline.point_at_u(1.0).y, expected.y, epsilon = 1e-3);

        for i in 0..=10 {
            let s = i as f32 / 10.0;
            let original = before.point_at(s * split);
            let now = spline.point_at_u(s);
            assert_relative_eq!(now.x, original.x, epsilon = 1e-3);
            assert_relative_eq!(now.y, original.y, epsilon = 1e-3);

            let original = before.point_at(split + s * (1.0 - split));
            let now = spline.point_at_u(1.0 + s);
            assert_relative_eq!(now.x, original.x, epsilon = 1e-3);
            assert_relative_eq!(now.y, original.y, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_einfuegen_auf_unbekanntem_segment_ist_noop() {
        let mut spline = two_straight();
        assert_eq!(spline.insert_anchor_on_curve(5, 0.5), Ok(None));
        assert_eq!(spline.len(), 2);
        assert!(spline.insert_anchor_on_curve(0, 2.0).is_err());
        assert_eq!(spline.len(), 2);
    }

    #[test]
    fn test_gespiegelte_handles() {
        let mut spline = three_mixed();
        assert!(spline.set_handle_mirrored(1, HandleSide::Out, Vec2::new(0.0, 10.0)));

        let anchor = &spline.anchors()[1];
        assert_eq!(anchor.handle_out_offset, Vec2::new(0.0, 10.0));
        assert_relative_eq!(anchor.handle_in_offset.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(anchor.handle_in_offset.y, -30.0, epsilon = 1e-4);
    }

    #[test]
    fn test_gespiegeltes_handle_laenge_null_kollabiert() {
        let mut spline = three_mixed();
        spline.set_handle_mirrored(1, HandleSide::In, Vec2::ZERO);
        let anchor = &spline.anchors()[1];
        assert_eq!(anchor.handle_in_offset, Vec2::ZERO);
        assert_eq!(anchor.handle_out_offset, Vec2::ZERO);
    }

    #[test]
    fn test_kurve_umschalten() {
        let mut spline = two_straight();
        assert!(spline.toggle_anchor_curve(0, 30.0));
        assert!(spline.anchors()[0].is_curved);
        assert_eq!(spline.anchors()[0].handle_in_offset, Vec2::new(-30.0, 0.0));
        assert_eq!(spline.anchors()[0].handle_out_offset, Vec2::new(30.0, 0.0));

        spline.toggle_anchor_curve(0, 30.0);
        assert!(!spline.anchors()[0].is_curved);
        assert_eq!(spline.anchors()[0].handle_out_offset, Vec2::ZERO);

        assert!(!spline.toggle_anchor_curve(9, 30.0));
    }

    #[test]
    fn test_entfernen_und_verschieben() {
        let mut spline = three_mixed();
        assert!(spline.move_anchor(2, Vec2::new(1.0, 2.0)));
        assert_eq!(spline.anchors()[2].position, Vec2::new(1.0, 2.0));
        assert!(!spline.move_anchor(3, Vec2::ZERO));

        assert!(spline.remove_anchor(0).is_some());
        assert!(spline.remove_anchor(7).is_none());
        assert_eq!(spline.segment_count(), 1);
        assert_eq!(spline.curve_segments().len(), 1);
    }
}
