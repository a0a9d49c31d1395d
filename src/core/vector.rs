//! 2D-Vektor-Operationen auf `glam::Vec2`.
//!
//! Alle Funktionen sind rein und geben neue Werte zurück. Die meisten sind
//! dünne Hüllen um glam; `divide` und `normalize` legen das Verhalten bei 0 fest.

use super::GeometryError;
use glam::Vec2;

/// Summe zweier Vektoren.
#[inline]
pub fn add(a: Vec2, b: Vec2) -> Vec2 {
    a + b
}

/// Differenz `a - b`.
#[inline]
pub fn subtract(a: Vec2, b: Vec2) -> Vec2 {
    a - b
}

/// Skalierung mit einem Skalar.
#[inline]
pub fn multiply(v: Vec2, scalar: f32) -> Vec2 {
    v * scalar
}

/// Division durch einen Skalar. Schlägt bei `scalar == 0` fehl.
pub fn divide(v: Vec2, scalar: f32) -> Result<Vec2, GeometryError> {
    if scalar == 0.0 {
        return Err(GeometryError::DivideByZero);
    }
    Ok(v / scalar)
}

/// Lineare Interpolation `a + (b - a) * t`.
///
/// `t` ist nicht beschränkt, Werte außerhalb von [0, 1] extrapolieren.
#[inline]
pub fn lerp(a: Vec2, b: Vec2, t: f32) -> Vec2 {
    a + (b - a) * t
}

/// Euklidische Länge.
#[inline]
pub fn magnitude(v: Vec2) -> f32 {
    v.length()
}

/// Einheitsvektor in Richtung `v`, Nullvektor bei Länge 0.
pub fn normalize(v: Vec2) -> Vec2 {
    let len = magnitude(v);
    if len == 0.0 {
        return Vec2::ZERO;
    }
    v / len
}

/// Exakter komponentenweiser Vergleich.
#[inline]
pub fn equals(a: Vec2, b: Vec2) -> bool {
    a.x == b.x && a.y == b.y
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_divide_by_zero_fails() {
        assert_eq!(
            divide(Vec2::new(1.0, 2.0), 0.0),
            Err(GeometryError::DivideByZero)
        );
        assert_eq!(divide(Vec2::new(4.0, 2.0), 2.0), Ok(Vec2::new(2.0, 1.0)));
    }

    #[test]
    fn test_normalize_zero_returns_zero() {
        assert_eq!(normalize(Vec2::ZERO), Vec2::ZERO);

        let n = normalize(Vec2::new(3.0, 4.0));
        assert_relative_eq!(n.x, 0.6);
        assert_relative_eq!(n.y, 0.8);
        assert_relative_eq!(magnitude(n), 1.0);
    }

    #[test]
    fn test_lerp_extrapolates() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, -10.0);
        assert_eq!(lerp(a, b, 0.5), Vec2::new(5.0, -5.0));
        assert_eq!(lerp(a, b, 2.0), Vec2::new(20.0, -20.0));
        assert_eq!(lerp(a, b, -1.0), Vec2::new(-10.0, 10.0));
    }

    #[test]
    fn test_arithmetic() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, 5.0);
        assert!(equals(add(a, b), Vec2::new(4.0, 7.0)));
        assert!(equals(subtract(b, a), Vec2::new(2.0, 3.0)));
        assert!(equals(multiply(a, 3.0), Vec2::new(3.0, 6.0)));
        assert!(!equals(a, b));
    }
}
