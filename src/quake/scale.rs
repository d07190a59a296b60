use serde::Serialize;

use super::types::Tsunami;

pub const UNKNOWN_INTENSITY: &str = "不明";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScaleClass {
    pub label: &'static str,
    pub bucket: u8,
}

pub fn classify_scale(scale: i64) -> ScaleClass {
    ScaleClass {
        label: intensity_label(scale),
        bucket: severity_bucket(scale),
    }
}

pub fn intensity_label(scale: i64) -> &'static str {
    match scale {
        10 => "1",
        20 => "2",
        30 => "3",
        40 => "4",
        45 => "5弱",
        50 => "5強",
        55 => "6弱",
        60 => "6強",
        70 => "7",
        _ => UNKNOWN_INTENSITY,
    }
}

pub fn severity_bucket(scale: i64) -> u8 {
    match scale {
        i64::MIN..=20 => 1,
        21..=30 => 2,
        31..=40 => 3,
        41..=45 => 4,
        46..=55 => 5,
        56..=60 => 6,
        _ => 7,
    }
}

pub fn tsunami_label(tsunami: &Tsunami) -> &str {
    match tsunami {
        Tsunami::None => "津波の心配なし",
        Tsunami::Unknown => "不明",
        Tsunami::Checking => "調査中",
        Tsunami::NonEffective => "若干の海面変動",
        Tsunami::Watch => "津波注意報",
        Tsunami::Warning => "津波警報",
        Tsunami::Other(raw) => raw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_thresholds_are_inclusive() {
        assert_eq!(severity_bucket(20), 1);
        assert_eq!(severity_bucket(21), 2);
        assert_eq!(severity_bucket(30), 2);
        assert_eq!(severity_bucket(40), 3);
        assert_eq!(severity_bucket(45), 4);
        assert_eq!(severity_bucket(46), 5);
        assert_eq!(severity_bucket(55), 5);
        assert_eq!(severity_bucket(60), 6);
        assert_eq!(severity_bucket(61), 7);
        assert_eq!(severity_bucket(999), 7);
    }

    #[test]
    fn bucket_is_total_and_monotonic() {
        assert_eq!(severity_bucket(i64::MIN), 1);
        assert_eq!(severity_bucket(-1), 1);
        assert_eq!(severity_bucket(i64::MAX), 7);

        let mut previous = severity_bucket(-10);
        for scale in -10..=100 {
            let bucket = severity_bucket(scale);
            assert!(bucket >= previous, "bucket dropped at scale {scale}");
            assert!((1..=7).contains(&bucket));
            previous = bucket;
        }
    }

    #[test]
    fn intensity_labels_cover_known_codes_only() {
        assert_eq!(intensity_label(10), "1");
        assert_eq!(intensity_label(45), "5弱");
        assert_eq!(intensity_label(50), "5強");
        assert_eq!(intensity_label(55), "6弱");
        assert_eq!(intensity_label(60), "6強");
        assert_eq!(intensity_label(70), "7");
        assert_eq!(intensity_label(0), UNKNOWN_INTENSITY);
        assert_eq!(intensity_label(46), UNKNOWN_INTENSITY);
        assert_eq!(intensity_label(-1), UNKNOWN_INTENSITY);
    }

    #[test]
    fn classify_combines_label_and_bucket() {
        assert_eq!(
            classify_scale(50),
            ScaleClass {
                label: "5強",
                bucket: 5
            }
        );
    }

    #[test]
    fn tsunami_labels_pass_unknown_values_through() {
        assert_eq!(tsunami_label(&Tsunami::Warning), "津波警報");
        assert_eq!(tsunami_label(&Tsunami::NonEffective), "若干の海面変動");
        assert_eq!(
            tsunami_label(&Tsunami::Other("MajorWarning".to_string())),
            "MajorWarning"
        );
    }
}
