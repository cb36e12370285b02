use super::*;
use crate::overlay::QuoteOverlay;

#[test]
fn defaults_match_the_command_line_defaults() {
    let o = PipelineOpts::default();
    assert_eq!(o.frame_duration_ms, 400);
    assert_eq!(o.transition_steps, 5);
    assert_eq!(o.resize, None);
    assert_eq!(o.overlay, Overlay::None);
    assert_eq!(o.quantize_speed, 10);
    assert!(o.validate().is_ok());
}

#[test]
fn partial_json_fills_in_defaults() {
    let o = PipelineOpts::from_reader(
        r#"{
            "frame_duration_ms": 500,
            "resize": "500x500",
            "overlay": { "kind": "centered_quote", "font_size": 40 },
            "seed": 42
        }"#
        .as_bytes(),
    )
    .unwrap();
    assert_eq!(o.frame_duration_ms, 500);
    assert_eq!(o.resize, Some(ResizeSpec::new(500, 500).unwrap()));
    assert_eq!(o.transition_steps, 5);
    assert_eq!(o.seed, Some(42));
    assert_eq!(
        o.overlay,
        Overlay::CenteredQuote(QuoteOverlay {
            font_size: 40.0,
            ..QuoteOverlay::centered()
        })
    );
}

#[test]
fn malformed_json_is_an_argument_error() {
    for bad in [
        r#"{ "resize": "400-300" }"#,
        r#"{ "frame_duration_ms": "slow" }"#,
        r#"{ "unknown_field": 1 }"#,
        "not json",
    ] {
        let err = PipelineOpts::from_reader(bad.as_bytes()).unwrap_err();
        assert!(matches!(err, SlideError::Argument(_)), "{bad}: {err}");
    }
}

#[test]
fn missing_file_is_reported() {
    let err = PipelineOpts::from_path("target/unit_config/nope.json").unwrap_err();
    assert!(err.to_string().contains("nope.json"));
}

#[test]
fn validate_checks_speed_and_overlay() {
    let o = PipelineOpts {
        quantize_speed: 31,
        ..PipelineOpts::default()
    };
    assert!(o.validate().is_err());

    let o = PipelineOpts {
        overlay: Overlay::CenteredQuote(QuoteOverlay {
            palette: vec![],
            ..QuoteOverlay::centered()
        }),
        ..PipelineOpts::default()
    };
    assert!(o.validate().is_err());
}

#[test]
fn total_frame_formula() {
    let o = PipelineOpts {
        transition_steps: 2,
        ..PipelineOpts::default()
    };
    assert_eq!(o.total_frames(0), 0);
    assert_eq!(o.total_frames(1), 1);
    assert_eq!(o.total_frames(2), 4);
    assert_eq!(o.total_frames(3), 7);

    let n = PipelineOpts::default();
    assert_eq!(n.total_frames(2), 2 + 5);
    assert_eq!(n.total_frames(10), 10 + 9 * 5);
}

#[test]
fn options_round_trip_through_json() {
    let o = PipelineOpts {
        resize: Some(ResizeSpec::new(320, 240).unwrap()),
        font: Some("DejaVu Sans".to_string()),
        seed: Some(9),
        ..PipelineOpts::default()
    };
    let json = serde_json::to_string(&o).unwrap();
    assert_eq!(PipelineOpts::from_reader(json.as_bytes()).unwrap(), o);
}
