// src/data_analysis/path_metrics.rs

use ndarray::Array2;
use std::f64::consts::PI;

use crate::constants::CLEARANCE_SEARCH_RADIUS_M;
use crate::data_input::path_data::{PathSample, PathSeries, PathType};
use crate::error::AnalysisResult;

/// Planar pose as produced by the planner: position and heading (rad).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    pub theta: f64,
}

impl Pose {
    pub fn new(x: f64, y: f64, theta: f64) -> Self {
        Self { x, y, theta }
    }

    fn distance_to(&self, other: &Pose) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Source of clearance values for a position.
pub trait ClearanceMap {
    /// Distance from `(x, y)` to the nearest obstacle.
    fn obstacle_distance(&self, x: f64, y: f64) -> f64;
}

/// Occupancy grid lookup. Cells are indexed `[[row (y), col (x)]]`.
#[derive(Debug, Clone)]
pub struct GridClearance {
    origin_x: f64,
    origin_y: f64,
    resolution: f64,
    occupied: Array2<bool>,
    search_radius: f64,
}

impl GridClearance {
    pub fn new(origin_x: f64, origin_y: f64, resolution: f64, occupied: Array2<bool>) -> Self {
        Self {
            origin_x,
            origin_y,
            resolution,
            occupied,
            search_radius: CLEARANCE_SEARCH_RADIUS_M,
        }
    }

    pub fn with_search_radius(mut self, search_radius: f64) -> Self {
        self.search_radius = search_radius;
        self
    }

    /// Cells outside the grid count as free.
    fn has_obstacle(&self, x: f64, y: f64) -> bool {
        let col = ((x - self.origin_x) / self.resolution).floor();
        let row = ((y - self.origin_y) / self.resolution).floor();
        if col < 0.0 || row < 0.0 {
            return false;
        }
        self.occupied
            .get([row as usize, col as usize])
            .copied()
            .unwrap_or(false)
    }
}

impl ClearanceMap for GridClearance {
    /// Scans a square window of `search_radius` around the point at grid resolution.
    /// Returns the search radius when no occupied cell is inside the window.
    fn obstacle_distance(&self, x: f64, y: f64) -> f64 {
        if !self.resolution.is_finite() || self.resolution <= 0.0 {
            return self.search_radius;
        }
        let steps = (self.search_radius / self.resolution).floor() as i64;
        let mut min_dist = f64::INFINITY;
        for i in -steps..=steps {
            let dx = i as f64 * self.resolution;
            for j in -steps..=steps {
                let dy = j as f64 * self.resolution;
                if self.has_obstacle(x + dx, y + dy) {
                    min_dist = min_dist.min(dx.hypot(dy));
                }
            }
        }
        if min_dist.is_finite() {
            min_dist
        } else {
            self.search_radius
        }
    }
}

/// Per-pose descriptors in the recorder's column layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoseDescriptor {
    pub point_index: usize,
    pub segment_length: f64,
    pub sample: PathSample,
}

/// Wraps an angle into `[-π, π]`.
pub fn normalize_angle(angle: f64) -> f64 {
    let mut a = angle;
    while a > PI {
        a -= 2.0 * PI;
    }
    while a < -PI {
        a += 2.0 * PI;
    }
    a
}

/// Curvature of the circle through three points: `4 * area / (a * b * c)`.
/// Returns 0 for coincident points.
pub fn three_point_curvature(p1: &Pose, p2: &Pose, p3: &Pose) -> f64 {
    let a = p1.distance_to(p2);
    let b = p2.distance_to(p3);
    let c = p3.distance_to(p1);
    if a <= 0.0 || b <= 0.0 || c <= 0.0 {
        return 0.0;
    }
    // Heron's formula; clamp for collinear points where rounding can go slightly negative.
    let s = (a + b + c) / 2.0;
    let area = (s * (s - a) * (s - b) * (s - c)).max(0.0).sqrt();
    4.0 * area / (a * b * c)
}

/// Computes the recorded descriptors for every pose of one path.
pub fn analyze_poses<C: ClearanceMap + ?Sized>(
    path_type: PathType,
    poses: &[Pose],
    clearance: &C,
) -> Vec<PoseDescriptor> {
    let mut path_length = 0.0;
    let mut descriptors = Vec::with_capacity(poses.len());

    for (i, pose) in poses.iter().enumerate() {
        let mut segment_length = 0.0;
        let mut steering_angle = None;
        let mut curvature = 0.0;

        if i > 0 && i + 1 < poses.len() {
            curvature = three_point_curvature(&poses[i - 1], pose, &poses[i + 1]);
        }
        if i > 0 {
            segment_length = pose.distance_to(&poses[i - 1]);
            path_length += segment_length;
            steering_angle = Some(normalize_angle(pose.theta - poses[i - 1].theta));
        }

        descriptors.push(PoseDescriptor {
            point_index: i,
            segment_length,
            sample: PathSample {
                x: pose.x,
                y: pose.y,
                path_length,
                curvature,
                theta: pose.theta,
                steering_angle,
                obstacle_distance: clearance.obstacle_distance(pose.x, pose.y),
                path_type,
            },
        });
    }
    descriptors
}

/// Analyses raw poses straight into a [`PathSeries`].
pub fn series_from_poses<C: ClearanceMap + ?Sized>(
    path_type: PathType,
    poses: &[Pose],
    clearance: &C,
) -> AnalysisResult<PathSeries> {
    let samples = analyze_poses(path_type, poses, clearance)
        .into_iter()
        .map(|d| d.sample)
        .collect();
    PathSeries::new(path_type, samples)
}

#[cfg(test)]
pub(crate) struct ConstantClearance(pub f64);

#[cfg(test)]
impl ClearanceMap for ConstantClearance {
    fn obstacle_distance(&self, _x: f64, _y: f64) -> f64 {
        self.0
    }
}


// src/data_analysis/path_metrics.rs
