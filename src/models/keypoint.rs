//! Body landmarks, keypoint maps, and the fixed skeleton topology.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Named body landmark.
///
/// The set matches the `KeypointType.<NAME>` column prefix used by the
/// pose tracking exports this tool reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KeypointName {
    /// Nose tip
    Nose,
    /// Left eye
    LeftEye,
    /// Right eye
    RightEye,
    /// Left ear
    LeftEar,
    /// Right ear
    RightEar,
    /// Left shoulder
    LeftShoulder,
    /// Right shoulder
    RightShoulder,
    /// Left elbow
    LeftElbow,
    /// Right elbow
    RightElbow,
    /// Left wrist
    LeftWrist,
    /// Right wrist
    RightWrist,
    /// Left hip
    LeftHip,
    /// Right hip
    RightHip,
    /// Left knee
    LeftKnee,
    /// Right knee
    RightKnee,
    /// Left ankle
    LeftAnkle,
    /// Right ankle
    RightAnkle,
}

impl KeypointName {
    /// Every landmark, in declaration order.
    pub const ALL: [Self; 17] = [
        Self::Nose,
        Self::LeftEye,
        Self::RightEye,
        Self::LeftEar,
        Self::RightEar,
        Self::LeftShoulder,
        Self::RightShoulder,
        Self::LeftElbow,
        Self::RightElbow,
        Self::LeftWrist,
        Self::RightWrist,
        Self::LeftHip,
        Self::RightHip,
        Self::LeftKnee,
        Self::RightKnee,
        Self::LeftAnkle,
        Self::RightAnkle,
    ];

    /// Column-name spelling of the landmark (e.g. `LEFT_EYE`).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Nose => "NOSE",
            Self::LeftEye => "LEFT_EYE",
            Self::RightEye => "RIGHT_EYE",
            Self::LeftEar => "LEFT_EAR",
            Self::RightEar => "RIGHT_EAR",
            Self::LeftShoulder => "LEFT_SHOULDER",
            Self::RightShoulder => "RIGHT_SHOULDER",
            Self::LeftElbow => "LEFT_ELBOW",
            Self::RightElbow => "RIGHT_ELBOW",
            Self::LeftWrist => "LEFT_WRIST",
            Self::RightWrist => "RIGHT_WRIST",
            Self::LeftHip => "LEFT_HIP",
            Self::RightHip => "RIGHT_HIP",
            Self::LeftKnee => "LEFT_KNEE",
            Self::RightKnee => "RIGHT_KNEE",
            Self::LeftAnkle => "LEFT_ANKLE",
            Self::RightAnkle => "RIGHT_ANKLE",
        }
    }
}

impl fmt::Display for KeypointName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for landmark names outside the fixed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown keypoint name '{0}'")]
pub struct UnknownKeypoint(pub String);

impl FromStr for KeypointName {
    type Err = UnknownKeypoint;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| UnknownKeypoint(s.to_string()))
    }
}

/// A 2D landmark position whose coordinates may be missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Keypoint {
    /// Horizontal surface coordinate
    pub x: Option<f64>,
    /// Vertical surface coordinate (grows downward)
    pub y: Option<f64>,
}

impl Keypoint {
    /// Creates a keypoint with both coordinates set.
    #[must_use]
    pub const fn at(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
        }
    }

    /// Returns `(x, y)` when both coordinates are known.
    #[must_use]
    pub const fn position(&self) -> Option<(f64, f64)> {
        match (self.x, self.y) {
            (Some(x), Some(y)) => Some((x, y)),
            _ => None,
        }
    }

    /// A keypoint is present only when both coordinates are known.
    #[must_use]
    pub const fn is_present(&self) -> bool {
        self.position().is_some()
    }
}

/// Keypoints of one frame, ordered by landmark.
pub type KeypointMap = BTreeMap<KeypointName, Keypoint>;

/// A bone drawn between two landmarks.
pub type SkeletonEdge = (KeypointName, KeypointName);

/// Fixed skeleton topology: face, shoulders, arms, torso, legs.
pub const SKELETON_EDGES: [SkeletonEdge; 16] = [
    // face
    (KeypointName::LeftEar, KeypointName::LeftEye),
    (KeypointName::LeftEye, KeypointName::Nose),
    (KeypointName::Nose, KeypointName::RightEye),
    (KeypointName::RightEye, KeypointName::RightEar),
    // shoulders and arms
    (KeypointName::LeftShoulder, KeypointName::RightShoulder),
    (KeypointName::LeftShoulder, KeypointName::LeftElbow),
    (KeypointName::LeftElbow, KeypointName::LeftWrist),
    (KeypointName::RightShoulder, KeypointName::RightElbow),
    (KeypointName::RightElbow, KeypointName::RightWrist),
    // torso
    (KeypointName::LeftShoulder, KeypointName::LeftHip),
    (KeypointName::RightShoulder, KeypointName::RightHip),
    (KeypointName::LeftHip, KeypointName::RightHip),
    // legs
    (KeypointName::LeftHip, KeypointName::LeftKnee),
    (KeypointName::LeftKnee, KeypointName::LeftAnkle),
    (KeypointName::RightHip, KeypointName::RightKnee),
    (KeypointName::RightKnee, KeypointName::RightAnkle),
];
