use finger_count::{PipelineConfig, PipelineError, analyze_frame};
use image::{GrayImage, Luma, Rgba, RgbaImage};

const BACKGROUND: u8 = 220;
const HAND: u8 = 30;

fn blank_display(w: u32, h: u32) -> RgbaImage {
    RgbaImage::from_pixel(w, h, Rgba([0, 0, 0, 255]))
}

fn fill_rect(gray: &mut GrayImage, x0: u32, y0: u32, x1: u32, y1: u32, value: u8) {
    for y in y0..=y1 {
        for x in x0..=x1 {
            gray.put_pixel(x, y, Luma([value]));
        }
    }
}

/// Dark open-hand silhouette on a light background: a palm block with five
/// finger lobes, fingertip heights staggered so every tip sits on the hull
/// and each inter-finger web forms its own hull segment.
fn open_hand_frame() -> GrayImage {
    let mut gray = GrayImage::from_pixel(400, 400, Luma([BACKGROUND]));
    fill_rect(&mut gray, 40, 250, 359, 389, HAND);
    let finger_tops = [100, 70, 60, 70, 100];
    for (i, &top) in finger_tops.iter().enumerate() {
        let x0 = 40 + i as u32 * 70;
        fill_rect(&mut gray, x0, top, x0 + 39, 249, HAND);
    }
    gray
}

/// Dark filled disc: a convex "fist" with no deep concavities.
fn fist_frame() -> GrayImage {
    let mut gray = GrayImage::from_pixel(400, 400, Luma([BACKGROUND]));
    for y in 0..400i32 {
        for x in 0..400i32 {
            let dx = x - 200;
            let dy = y - 200;
            if dx * dx + dy * dy <= 110 * 110 {
                gray.put_pixel(x as u32, y as u32, Luma([HAND]));
            }
        }
    }
    gray
}

#[test]
fn open_hand_counts_the_finger_webs() {
    let gray = open_hand_frame();
    let mut display = blank_display(400, 400);
    let analysis = analyze_frame(&gray, &mut display, &PipelineConfig::default()).unwrap();

    assert!(
        analysis.finger_count >= 4,
        "expected at least four webs, got {}",
        analysis.finger_count
    );
    assert_eq!(analysis.finger_count, analysis.events.len());
    for event in &analysis.events {
        assert!(event.depth > PipelineConfig::DEFAULT_DEPTH_THRESHOLD);
    }
}

#[test]
fn open_hand_annotation_marks_the_webs() {
    let config = PipelineConfig::default();
    let gray = open_hand_frame();
    let mut display = blank_display(400, 400);
    let analysis = analyze_frame(&gray, &mut display, &config).unwrap();

    for event in &analysis.events {
        // Endpoint markers sit at the fingertips, far markers down in the
        // webs; they do not overlap, so each keeps its own color.
        assert_eq!(
            *display.get_pixel(event.far.x as u32, event.far.y as u32),
            config.far_point_color
        );
        assert_eq!(
            *display.get_pixel(event.start.x as u32, event.start.y as u32),
            config.endpoint_color
        );
    }
}

#[test]
fn fist_counts_zero() {
    let gray = fist_frame();
    let mut display = blank_display(400, 400);
    let analysis = analyze_frame(&gray, &mut display, &PipelineConfig::default()).unwrap();
    assert_eq!(analysis.finger_count, 0);
    assert!(analysis.events.is_empty());
}

#[test]
fn fist_still_gets_its_outline_traced() {
    let config = PipelineConfig::default();
    let gray = fist_frame();
    let mut display = blank_display(400, 400);
    analyze_frame(&gray, &mut display, &config).unwrap();
    // Some pixel near the disc edge carries the outline color.
    let traced = display.pixels().filter(|&&p| p == config.outline_color).count();
    assert!(traced > 0, "outline trace left no pixels");
}

#[test]
fn uniform_frame_yields_zero_without_panicking() {
    let gray = GrayImage::from_pixel(120, 90, Luma([128]));
    let mut display = blank_display(120, 90);
    let analysis = analyze_frame(&gray, &mut display, &PipelineConfig::default()).unwrap();
    assert_eq!(analysis.finger_count, 0);
}

#[test]
fn analysis_is_idempotent_across_copies() {
    let gray = open_hand_frame();
    let config = PipelineConfig::default();

    let mut display_a = blank_display(400, 400);
    let mut display_b = blank_display(400, 400);
    let first = analyze_frame(&gray.clone(), &mut display_a, &config).unwrap();
    let second = analyze_frame(&gray, &mut display_b, &config).unwrap();

    assert_eq!(first, second);
    assert_eq!(display_a.as_raw(), display_b.as_raw());
}

#[test]
fn repeated_invocations_stay_stable() {
    // All intermediate buffers are frame-local; many sequential calls must
    // behave exactly like the first.
    let gray = open_hand_frame();
    let config = PipelineConfig::default();
    let mut display = blank_display(400, 400);
    let baseline = analyze_frame(&gray, &mut display, &config).unwrap();

    for _ in 0..25 {
        let mut display = blank_display(400, 400);
        let analysis = analyze_frame(&gray, &mut display, &config).unwrap();
        assert_eq!(analysis, baseline);
    }
}

#[test]
fn raising_the_threshold_never_raises_the_count() {
    let gray = open_hand_frame();
    let mut last = usize::MAX;
    for threshold in [5.0, 25.0, 50.0, 120.0, 250.0] {
        let config = PipelineConfig {
            depth_threshold: threshold,
            ..Default::default()
        };
        let mut display = blank_display(400, 400);
        let count = analyze_frame(&gray, &mut display, &config)
            .unwrap()
            .finger_count;
        assert!(
            count <= last,
            "count rose from {last} to {count} at threshold {threshold}"
        );
        last = count;
    }
}

#[test]
fn mismatched_frame_sizes_are_rejected() {
    let gray = GrayImage::new(32, 32);
    let mut display = blank_display(64, 32);
    let err = analyze_frame(&gray, &mut display, &PipelineConfig::default()).unwrap_err();
    assert!(matches!(err, PipelineError::FrameSizeMismatch { .. }));
}

#[test]
fn invalid_config_is_rejected_before_any_work() {
    let gray = GrayImage::new(32, 32);
    let mut display = blank_display(32, 32);
    let config = PipelineConfig {
        blur_kernel: 2,
        ..Default::default()
    };
    let before = display.clone();
    let err = analyze_frame(&gray, &mut display, &config).unwrap_err();
    assert!(matches!(err, PipelineError::Config(_)));
    assert_eq!(display.as_raw(), before.as_raw());
}
