//! Data-flow path animation.
//!
//! A flow travels along an ordered polyline. For `N` points and a progress
//! `p` in `[0, 1]`, the head sits on segment `floor(p * (N - 1))` at the
//! fractional remainder; every earlier segment is drawn in full.

use crate::Point;

/// Visible part of the polyline at `progress`.
///
/// Returns `None` for fewer than two points. Progress is clamped to `[0, 1]`
/// and NaN is treated as 0, so the result always starts at `points[0]`.
pub fn flow_path(points: &[Point], progress: f64) -> Option<Vec<Point>> {
    if points.len() < 2 {
        return None;
    }

    let progress = if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    };
    let segments = points.len() - 1;
    let head = progress * segments as f64;
    let index = head.floor() as usize;
    let fraction = head - index as f64;

    let mut path = Vec::with_capacity(index.min(segments) + 2);
    path.push(points[0]);
    path.extend_from_slice(&points[1..=index.min(segments)]);
    if index < segments && fraction > 0.0 {
        path.push(points[index].lerp(points[index + 1], fraction));
    }
    Some(path)
}

/// Total length of a polyline.
pub fn path_length(points: &[Point]) -> f64 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_points() -> [Point; 3] {
        [
            Point::new(100.0, 150.0),
            Point::new(200.0, 150.0),
            Point::new(300.0, 150.0),
        ]
    }

    #[test]
    fn fewer_than_two_points_is_noop() {
        assert_eq!(flow_path(&[], 0.5), None);
        assert_eq!(flow_path(&[Point::new(1.0, 1.0)], 0.5), None);
    }

    #[test]
    fn zero_progress_is_just_the_start() {
        let path = flow_path(&three_points(), 0.0).unwrap();
        assert_eq!(path, vec![Point::new(100.0, 150.0)]);
        assert_eq!(path_length(&path), 0.0);
    }

    #[test]
    fn full_progress_covers_every_segment() {
        let pts = three_points();
        let path = flow_path(&pts, 1.0).unwrap();
        assert_eq!(path, pts.to_vec());
    }

    #[test]
    fn partial_segment_is_interpolated() {
        // 0.75 * 2 = 1.5: first segment complete, second half drawn
        let path = flow_path(&three_points(), 0.75).unwrap();
        assert_eq!(
            path,
            vec![
                Point::new(100.0, 150.0),
                Point::new(200.0, 150.0),
                Point::new(250.0, 150.0),
            ]
        );
    }

    #[test]
    fn out_of_range_progress_is_clamped() {
        let pts = three_points();
        assert_eq!(flow_path(&pts, 2.0), flow_path(&pts, 1.0));
        assert_eq!(flow_path(&pts, -1.0), flow_path(&pts, 0.0));
        assert_eq!(flow_path(&pts, f64::NAN), flow_path(&pts, 0.0));
    }

    #[test]
    fn drawn_length_is_monotonic_in_progress() {
        let pts = three_points();
        let mut previous = 0.0;
        for step in 0..=100 {
            let progress = step as f64 / 100.0;
            let length = path_length(&flow_path(&pts, progress).unwrap());
            assert!(
                length + 1e-9 >= previous,
                "length decreased at progress {progress}: {length} < {previous}"
            );
            previous = length;
        }
        assert!((previous - 200.0).abs() < 1e-9);
    }
}
