use super::*;

fn keypoint(name: &str, x: f64) -> Keypoint {
    Keypoint { x, y: 0.5, confidence: 0.9, name: name.to_owned() }
}

#[test]
fn processing_envelope_parses_with_defaults() {
    let body = serde_json::json!({ "status": "processing", "videoId": "ab12cd34" });
    let parsed: AnalysisResponse = serde_json::from_value(body).expect("parse");
    assert_eq!(parsed.status, AnalysisStatus::Processing);
    assert_eq!(parsed.video_id, "ab12cd34");
    assert!(parsed.risks.is_empty());
}

#[test]
fn error_envelope_carries_reason() {
    let body = serde_json::json!({ "status": "error", "videoId": "v1", "error": "Could not open video file" });
    let parsed: AnalysisResponse = serde_json::from_value(body).expect("parse");
    assert_eq!(parsed.status, AnalysisStatus::Error);
    assert_eq!(parsed.error.as_deref(), Some("Could not open video file"));
}

#[test]
fn unknown_status_parses_as_unknown() {
    let body = serde_json::json!({ "status": "queued", "videoId": "v1" });
    let parsed: AnalysisResponse = serde_json::from_value(body).expect("parse");
    assert_eq!(parsed.status, AnalysisStatus::Unknown);
}

#[test]
fn done_envelope_parses_result_fields() {
    let body = serde_json::json!({
        "status": "done",
        "videoId": "v1",
        "sport": "general",
        "playerName": "Athlete",
        "overallRisk": 64,
        "overallSeverity": "HIGH",
        "duration": "0:12",
        "fps": 30,
        "risks": [{
            "timestamp": "0:04",
            "frame": 120,
            "risk": 72,
            "part": "knee",
            "severity": "HIGH",
            "description": "Knee valgus",
            "angle": 151.2
        }],
        "pose_keypoints": [[{ "x": 0.1, "y": 0.2, "confidence": 0.8, "name": "nose" }]],
        "suggestions": ["Strengthen glutes"],
        "riskTimeline": [10, 20, 72],
        "annotatedVideoUrl": "/outputs/v1.mp4",
        "totalFrames": 360,
        "peakRisk": 72
    });
    let parsed: AnalysisResponse = serde_json::from_value(body).expect("parse");
    assert_eq!(parsed.status, AnalysisStatus::Done);
    assert_eq!(parsed.overall_severity, Severity::High);
    assert_eq!(parsed.risks.len(), 1);
    assert_eq!(parsed.risks[0].angle, Some(151.2));
    assert_eq!(parsed.risk_timeline, vec![10, 20, 72]);
    assert_eq!(parsed.pose_keypoints[0][0].name, "nose");
    assert_eq!(parsed.annotated_video_url.as_deref(), Some("/outputs/v1.mp4"));
}

#[test]
fn pose_for_frame_picks_nearest_earlier_sample() {
    let response = AnalysisResponse {
        pose_keypoints: vec![vec![keypoint("nose", 0.1)], vec![keypoint("nose", 0.2)], vec![keypoint("nose", 0.3)]],
        ..AnalysisResponse::default()
    };
    assert_eq!(response.pose_for_frame(1).expect("pose")[0].x, 0.1);
    assert_eq!(response.pose_for_frame(10).expect("pose")[0].x, 0.1);
    assert_eq!(response.pose_for_frame(11).expect("pose")[0].x, 0.2);
    assert_eq!(response.pose_for_frame(0).expect("pose")[0].x, 0.1);
    assert_eq!(response.pose_for_frame(9_999).expect("pose")[0].x, 0.3);
}

#[test]
fn pose_for_frame_without_samples_is_none() {
    assert!(AnalysisResponse::default().pose_for_frame(5).is_none());
}

#[test]
fn upload_response_uses_camel_case() {
    let parsed: UploadResponse =
        serde_json::from_str(r#"{"videoId":"ab","filename":"clip.mp4","status":"processing"}"#).expect("parse");
    assert_eq!(parsed.video_id, "ab");
    assert_eq!(parsed.filename, "clip.mp4");
}
