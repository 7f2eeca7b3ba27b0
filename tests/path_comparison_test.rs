// tests/path_comparison_test.rs

use path_comparison_render::analysis_context::AnalysisContext;
use path_comparison_render::constants::COMPOSITE_OUTPUT_FILE;
use path_comparison_render::data_analysis::alignment::align;
use path_comparison_render::data_analysis::comparison_report::ComparisonReport;
use path_comparison_render::data_analysis::path_metrics::{analyze_poses, GridClearance, Pose};
use path_comparison_render::data_analysis::statistics::StatValue;
use path_comparison_render::data_input::path_data::PathType;
use path_comparison_render::data_input::path_parser::parse_path_csv;
use path_comparison_render::data_input::path_writer::write_paths_csv;
use path_comparison_render::error::AnalysisError;
use path_comparison_render::metric_names::PLOT_METRICS;
use path_comparison_render::plot_functions::plot_detailed_comparison::{
    build_detailed_charts, plot_detailed_comparisons,
};
use path_comparison_render::plot_functions::plot_path_comparison::{
    build_composite_figure, plot_path_comparison,
};

use ndarray::Array2;
use std::fs;
use std::path::{Path, PathBuf};

/// Fresh per-test output directory under the system temp dir.
fn output_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "path_comparison_render_{}_{}",
        name,
        std::process::id()
    ));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn non_empty_file(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.len() > 0).unwrap_or(false)
}

const HEADER: &str =
    "path_type,point_index,x,y,theta,curvature,obstacle_distance,path_length,segment_length,steering_angle";

/// Original path ends at 5 m, optimized path at 6 m.
fn scenario_csv() -> String {
    format!(
        "{HEADER}\n\
         original,0,0,0,0,0.1,2.0,0,0,\n\
         original,1,5,0,0.1,0.2,3.0,5,5,0.1\n\
         optimized,0,0,0,0,0.05,2.5,0,0,\n\
         optimized,1,5,0,0.05,0.1,3.5,5,5,0.05\n\
         optimized,2,6,0,0.05,0.1,4.0,6,1,0.0\n"
    )
}

#[test]
fn test_scenario_report() {
    let pair = parse_path_csv(scenario_csv().as_bytes()).unwrap();
    let report = ComparisonReport::from_pair(&pair);

    let total = &report.rows[0];
    assert_eq!(
        total.cells(),
        [
            "Total Path Length".to_string(),
            "5.00".to_string(),
            "6.00".to_string(),
            "20.00%".to_string(),
        ]
    );

    // mean(0.1, 0.2) = 0.15 vs mean(0.05, 0.1, 0.1) = 0.083333
    let avg_curvature = report.rows[1].cells();
    assert_eq!(avg_curvature[1], "0.150000");
    assert_eq!(avg_curvature[2], "0.083333");
    assert_eq!(avg_curvature[3], "-44.44%");

    assert_eq!(report.rows[2].cells()[3], "-50.00%");
    assert_eq!(report.rows[4].cells()[1], "2.00");
    assert_eq!(report.rows[4].cells()[2], "2.50");

    // One steering value on the original side: variance is undefined.
    assert_eq!(report.rows[5].baseline, StatValue::Undefined);
    assert_eq!(report.rows[5].cells()[3], "N/A");
}

#[test]
fn test_report_is_deterministic() {
    let first = parse_path_csv(scenario_csv().as_bytes()).unwrap();
    let second = parse_path_csv(scenario_csv().as_bytes()).unwrap();
    let a = ComparisonReport::from_pair(&first);
    let b = ComparisonReport::from_pair(&second);
    assert_eq!(a, b);
    assert_eq!(a.table_cells(), b.table_cells());
}

#[test]
fn test_identical_paths_show_no_change() {
    let csv_text = format!(
        "{HEADER}\n\
         original,0,0,0,0,0.1,2.0,0,0,\n\
         original,1,1,0,0,0.2,2.0,1,1,0.1\n\
         original,2,2,0,0,0.3,2.0,2,1,0.3\n\
         optimized,0,0,0,0,0.1,2.0,0,0,\n\
         optimized,1,1,0,0,0.2,2.0,1,1,0.1\n\
         optimized,2,2,0,0,0.3,2.0,2,1,0.3\n"
    );
    let pair = parse_path_csv(csv_text.as_bytes()).unwrap();
    let report = ComparisonReport::from_pair(&pair);
    for row in &report.rows {
        let change = row.cells()[3].clone();
        assert!(change == "0.00%" || change == "N/A", "{}: {}", row.parameter, change);
    }
}

#[test]
fn test_zero_baseline_obstacle_distance() {
    let csv_text = format!(
        "{HEADER}\n\
         original,0,0,0,0,0.1,0,0,0,\n\
         original,1,1,0,0,0.1,0,1,1,0\n\
         optimized,0,0,0,0,0.1,1.5,0,0,\n\
         optimized,1,1,0,0,0.1,1.5,1,1,0\n"
    );
    let pair = parse_path_csv(csv_text.as_bytes()).unwrap();
    let report = ComparisonReport::from_pair(&pair);
    assert_eq!(report.rows[3].percent_change, StatValue::Undefined);
    assert_eq!(report.rows[4].percent_change, StatValue::Undefined);
    assert_eq!(report.rows[3].cells()[3], "N/A");
}

#[test]
fn test_composite_and_detailed_assembly() {
    let pair = parse_path_csv(scenario_csv().as_bytes()).unwrap();
    let report = ComparisonReport::from_pair(&pair);

    let figure = build_composite_figure(&pair, &report);
    assert_eq!(figure.metric_panels.len(), 4);
    assert_eq!(figure.table.len(), 7);
    let composite_curvature = figure.metric_panels[0].1.as_ref().unwrap();
    assert_eq!(composite_curvature.x_range.end, 6.0);

    let view = align(&pair);
    assert_eq!(view.limit(), 5.0);
    assert_eq!(view.samples(PathType::Original).len(), 2);
    assert_eq!(view.samples(PathType::Optimized).len(), 2);

    let charts = build_detailed_charts(&view);
    let files: Vec<_> = charts.iter().map(|c| c.output_file).collect();
    assert_eq!(
        files,
        [
            "curvature_comparison.png",
            "obstacle_distance_comparison.png",
            "theta_comparison.png",
            "steering_angle_comparison.png",
        ]
    );
    for chart in &charts {
        let config = chart.config.as_ref().unwrap();
        assert!(config
            .series
            .iter()
            .all(|s| s.data.iter().all(|&(x, _)| x <= 5.0)));
    }
}

#[test]
fn test_disjoint_paths_have_empty_aligned_domain() {
    let csv_text = format!(
        "{HEADER}\n\
         original,0,0,0,0,0.1,2.0,2,0,\n\
         original,1,1,0,0,0.1,2.0,3,1,0\n\
         optimized,0,0,0,0,0.1,2.0,0,0,\n\
         optimized,1,1,0,0,0.1,2.0,1,1,0\n"
    );
    let pair = parse_path_csv(csv_text.as_bytes()).unwrap();
    // The report is still available.
    assert_eq!(ComparisonReport::from_pair(&pair).rows.len(), 6);

    let view = align(&pair);
    assert!(view.is_empty());
    assert!(matches!(
        view.require_non_empty(),
        Err(AnalysisError::EmptyAlignedDomain { .. })
    ));
}

#[test]
fn test_recorded_poses_feed_the_comparison() {
    let mut occupied = Array2::from_elem((20, 20), false);
    occupied[[5, 10]] = true;
    let clearance = GridClearance::new(0.0, 0.0, 1.0, occupied);

    let original: Vec<Pose> = (0..5).map(|i| Pose::new(i as f64, 0.0, 0.0)).collect();
    let optimized: Vec<Pose> = (0..5)
        .map(|i| Pose::new(i as f64, 0.2 * i as f64, 0.2_f64.atan()))
        .collect();
    let original = analyze_poses(PathType::Original, &original, &clearance);
    let optimized = analyze_poses(PathType::Optimized, &optimized, &clearance);

    let mut buffer = Vec::new();
    write_paths_csv(&mut buffer, &original, &optimized).unwrap();
    let pair = parse_path_csv(buffer.as_slice()).unwrap();
    assert_eq!(pair.original.len(), 5);
    assert_eq!(pair.optimized.len(), 5);
    assert!(pair.optimized.max_path_length() > pair.original.max_path_length());

    let report = ComparisonReport::from_pair(&pair);
    assert!(report.rows[0].percent_change.value().unwrap() > 0.0);
}

#[test]
fn test_render_writes_all_artifacts() {
    let dir = output_dir("all_artifacts");
    let ctx = AnalysisContext::new(dir.join("path_analysis.csv"), None);
    let pair = parse_path_csv(scenario_csv().as_bytes()).unwrap();
    let report = ComparisonReport::from_pair(&pair);

    let composite = plot_path_comparison(&pair, &report, &ctx).unwrap();
    assert_eq!(composite, dir.join(COMPOSITE_OUTPUT_FILE));
    assert!(non_empty_file(&composite));

    let detailed = plot_detailed_comparisons(&align(&pair), &ctx).unwrap();
    assert_eq!(detailed.len(), 4);
    for (path, metric) in detailed.iter().zip(PLOT_METRICS) {
        assert_eq!(*path, dir.join(metric.output_file()));
        assert!(non_empty_file(path), "{} is missing or empty", path.display());
    }

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_disjoint_paths_still_render_composite() {
    let dir = output_dir("disjoint");
    let ctx = AnalysisContext::new(dir.join("path_analysis.csv"), None);
    let csv_text = format!(
        "{HEADER}\n\
         original,0,0,0,0,0.1,2.0,2,0,\n\
         original,1,1,0,0,0.1,2.0,3,1,0\n\
         optimized,0,0,0,0,0.1,2.0,0,0,\n\
         optimized,1,1,0,0,0.1,2.0,1,1,0\n"
    );
    let pair = parse_path_csv(csv_text.as_bytes()).unwrap();
    let report = ComparisonReport::from_pair(&pair);

    let composite = plot_path_comparison(&pair, &report, &ctx).unwrap();
    assert!(non_empty_file(&composite));
    assert!(matches!(
        plot_detailed_comparisons(&align(&pair), &ctx),
        Err(AnalysisError::EmptyAlignedDomain { .. })
    ));
    for metric in PLOT_METRICS {
        assert!(!dir.join(metric.output_file()).exists());
    }

    fs::remove_dir_all(&dir).unwrap();
}

// tests/path_comparison_test.rs
