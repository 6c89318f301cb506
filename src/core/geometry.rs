//! Geometrie-Hilfsfunktionen: Distanzen, Normalen, Parallel-Versatz.
//!
//! Alle Funktionen sind rein und arbeiten im flachen 2D-Zeichenraum.

use glam::Vec2;

/// Euklidische Distanz zwischen zwei Punkten.
#[inline]
pub fn distance(p: Vec2, q: Vec2) -> f32 {
    p.distance(q)
}

/// Kürzeste Distanz von `p` zur Strecke `a–b` (nicht zur unendlichen Geraden).
///
/// Projektionsparameter `t = dot(p-a, b-a) / |b-a|²` wird auf `[0, 1]` geklemmt.
/// Entartete Strecke (`a == b`) liefert `distance(p, a)`.
pub fn point_to_segment_distance(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return distance(p, a);
    }

    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    distance(p, a + ab * t)
}

/// Linke Einheitsnormale einer Richtung (`(-dy, dx)`), Null bei Länge 0.
#[inline]
fn unit_normal(direction: Vec2) -> Vec2 {
    direction.perp().normalize_or_zero()
}

/// Verschiebt einen inneren Polylinien-Punkt entlang der gemittelten Normale
/// seiner beiden Nachbarkanten.
///
/// Randpunkte (kein `prev` oder kein `next`) bleiben unverändert.
pub fn perpendicular_offset(
    prev: Option<Vec2>,
    cur: Vec2,
    next: Option<Vec2>,
    magnitude: f32,
) -> Vec2 {
    let (Some(prev), Some(next)) = (prev, next) else {
        return cur;
    };

    let averaged = (unit_normal(cur - prev) + unit_normal(next - cur)) * 0.5;
    cur + averaged * magnitude
}

/// Verschiebt beide Endpunkte einer geraden Strecke um `magnitude` entlang
/// der Normale von `a → b`.
pub fn offset_straight_segment(a: Vec2, b: Vec2, magnitude: f32) -> (Vec2, Vec2) {
    let shift = unit_normal(b - a) * magnitude;
    (a + shift, b + shift)
}

/// Versatz eines Gruppenmitglieds mit Index `index` in einer Gruppe der
/// Größe `group_size`: symmetrisch um 0, Abstand `spacing`.
///
/// Beispiel: 3 Linien, Abstand 8 → `-8, 0, 8`.
pub fn parallel_offset(index: usize, group_size: usize, spacing: f32) -> f32 {
    if group_size == 0 {
        return 0.0;
    }
    index as f32 * spacing - (group_size - 1) as f32 * spacing / 2.0
}

/// Versetzt eine komplette Polylinie seitlich um `magnitude`.
///
/// Zwei Punkte: gerade Formel. Mehr Punkte: Endpunkte entlang ihrer
/// Nachbarkante, innere Punkte über [`perpendicular_offset`], damit sich
/// versetzte Linien nie decken.
pub fn offset_polyline(points: &[Vec2], magnitude: f32) -> Vec<Vec2> {
    if magnitude == 0.0 || points.len() < 2 {
        return points.to_vec();
    }

    if let [a, b] = points {
        let (a, b) = offset_straight_segment(*a, *b, magnitude);
        return vec![a, b];
    }

    let last = points.len() - 1;
    points
        .iter()
        .enumerate()
        .map(|(i, &cur)| match i {
            0 => cur + unit_normal(points[1] - cur) * magnitude,
            i if i == last => cur + unit_normal(cur - points[i - 1]) * magnitude,
            i => perpendicular_offset(Some(points[i - 1]), cur, Some(points[i + 1]), magnitude),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn segment_distance_clamps_to_endpoints() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 0.0);

        assert_relative_eq!(point_to_segment_distance(Vec2::new(5.0, 3.0), a, b), 3.0);
        assert_relative_eq!(point_to_segment_distance(Vec2::new(-4.0, 3.0), a, b), 5.0);
        assert_relative_eq!(point_to_segment_distance(Vec2::new(13.0, 4.0), a, b), 5.0);
    }

    #[test]
    fn degenerate_segment_falls_back_to_point_distance() {
        let a = Vec2::new(2.0, 2.0);
        assert_relative_eq!(point_to_segment_distance(Vec2::new(5.0, 6.0), a, a), 5.0);
    }

    #[test]
    fn perpendicular_offset_leaves_edge_points_untouched() {
        let cur = Vec2::new(1.0, 1.0);
        assert_eq!(perpendicular_offset(None, cur, Some(Vec2::ZERO), 5.0), cur);
        assert_eq!(perpendicular_offset(Some(Vec2::ZERO), cur, None, 5.0), cur);
    }

    #[test]
    fn perpendicular_offset_on_straight_run_moves_along_normal() {
        let moved = perpendicular_offset(
            Some(Vec2::new(0.0, 0.0)),
            Vec2::new(10.0, 0.0),
            Some(Vec2::new(20.0, 0.0)),
            4.0,
        );
        assert_relative_eq!(moved.x, 10.0);
        assert_relative_eq!(moved.y, 4.0);
    }

    #[test]
    fn straight_segment_offset_keeps_direction() {
        let (a, b) = offset_straight_segment(Vec2::new(0.0, 0.0), Vec2::new(0.0, 10.0), 2.0);
        assert_relative_eq!(a.x, -2.0);
        assert_relative_eq!(b.x, -2.0);
        assert_relative_eq!(b.y - a.y, 10.0);
    }

    #[test]
    fn parallel_offsets_are_symmetric_and_evenly_spaced() {
        let offsets: Vec<f32> = (0..3).map(|i| parallel_offset(i, 3, 8.0)).collect();
        assert_eq!(offsets, vec![-8.0, 0.0, 8.0]);

        let pair: Vec<f32> = (0..2).map(|i| parallel_offset(i, 2, 8.0)).collect();
        assert_eq!(pair, vec![-4.0, 4.0]);

        assert_eq!(parallel_offset(0, 1, 8.0), 0.0);
    }

    #[test]
    fn offset_polyline_moves_every_vertex() {
        let points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
        ];
        let shifted = offset_polyline(&points, 3.0);

        assert_eq!(shifted.len(), 3);
        for (orig, moved) in points.iter().zip(&shifted) {
            assert!(orig.distance(*moved) > 1.0, "{orig} wurde nicht versetzt");
        }
    }
}
