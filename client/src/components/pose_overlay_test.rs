use super::*;

fn kp(name: &str, x: f64, y: f64, confidence: f64) -> Keypoint {
    Keypoint { x, y, confidence, name: name.to_owned() }
}

#[test]
fn segments_connect_confident_joints() {
    let pose = vec![kp("left_hip", 0.4, 0.5, 0.9), kp("left_knee", 0.42, 0.7, 0.8), kp("left_ankle", 0.43, 0.9, 0.9)];
    let segments = skeleton_segments(&pose);
    assert_eq!(segments, vec![((0.4, 0.5), (0.42, 0.7)), ((0.42, 0.7), (0.43, 0.9))]);
}

#[test]
fn low_confidence_joint_breaks_its_limbs() {
    let pose = vec![kp("left_hip", 0.4, 0.5, 0.9), kp("left_knee", 0.42, 0.7, 0.1), kp("left_ankle", 0.43, 0.9, 0.9)];
    assert!(skeleton_segments(&pose).is_empty());
    assert_eq!(visible_joints(&pose), vec![(0.4, 0.5), (0.43, 0.9)]);
}

#[test]
fn empty_pose_draws_nothing() {
    assert!(skeleton_segments(&[]).is_empty());
    assert!(visible_joints(&[]).is_empty());
}

#[test]
fn skeleton_only_names_backend_keypoints() {
    const NAMES: &[&str] = &[
        "nose",
        "left_eye",
        "right_eye",
        "left_ear",
        "right_ear",
        "left_shoulder",
        "right_shoulder",
        "left_elbow",
        "right_elbow",
        "left_wrist",
        "right_wrist",
        "left_hip",
        "right_hip",
        "left_knee",
        "right_knee",
        "left_ankle",
        "right_ankle",
    ];
    for (from, to) in SKELETON {
        assert!(NAMES.contains(from), "{from}");
        assert!(NAMES.contains(to), "{to}");
    }
}
