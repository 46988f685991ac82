//! Report styling per result status.
//!
//! | Status   | Foreground     | Background      | Bold |
//! |----------|----------------|-----------------|------|
//! | HIGH     | (176, 0, 32)   | (254, 242, 242) | yes  |
//! | LOW      | (29, 78, 216)  | (239, 246, 255) | yes  |
//! | BOUNDARY | (234, 88, 12)  | (255, 247, 237) | yes  |
//! | NORMAL   | (17, 17, 17)   | none            | no   |

use labref_model::{RangeStatus, Rgb};
use serde::Serialize;

pub const HIGH_FOREGROUND: Rgb = Rgb::new(176, 0, 32);
pub const LOW_FOREGROUND: Rgb = Rgb::new(29, 78, 216);
pub const BOUNDARY_FOREGROUND: Rgb = Rgb::new(234, 88, 12);
pub const NORMAL_FOREGROUND: Rgb = Rgb::new(17, 17, 17);

pub const HIGH_BACKGROUND: Rgb = Rgb::new(254, 242, 242);
pub const LOW_BACKGROUND: Rgb = Rgb::new(239, 246, 255);
pub const BOUNDARY_BACKGROUND: Rgb = Rgb::new(255, 247, 237);

/// Text colour for a result cell.
pub fn color_for(status: RangeStatus) -> Rgb {
    match status {
        RangeStatus::High => HIGH_FOREGROUND,
        RangeStatus::Low => LOW_FOREGROUND,
        RangeStatus::Boundary => BOUNDARY_FOREGROUND,
        RangeStatus::Normal => NORMAL_FOREGROUND,
    }
}

/// Row highlight, or None when the row is not highlighted.
pub fn background_for(status: RangeStatus) -> Option<Rgb> {
    match status {
        RangeStatus::High => Some(HIGH_BACKGROUND),
        RangeStatus::Low => Some(LOW_BACKGROUND),
        RangeStatus::Boundary => Some(BOUNDARY_BACKGROUND),
        RangeStatus::Normal => None,
    }
}

/// Flagged statuses render bold.
pub fn is_bold(status: RangeStatus) -> bool {
    match status {
        RangeStatus::High | RangeStatus::Low | RangeStatus::Boundary => true,
        RangeStatus::Normal => false,
    }
}

/// All styling hints for one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Presentation {
    pub foreground: Rgb,
    pub background: Option<Rgb>,
    pub bold: bool,
}

/// Foreground, background and weight for `status` in one lookup.
pub fn presentation_for(status: RangeStatus) -> Presentation {
    Presentation {
        foreground: color_for(status),
        background: background_for(status),
        bold: is_bold(status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_foreground() {
        assert_eq!(color_for(RangeStatus::High).as_array(), [176, 0, 32]);
        assert_eq!(color_for(RangeStatus::Low).as_array(), [29, 78, 216]);
        assert_eq!(color_for(RangeStatus::Boundary).as_array(), [234, 88, 12]);
        assert_eq!(color_for(RangeStatus::Normal).as_array(), [17, 17, 17]);
    }

    #[test]
    fn test_background() {
        assert_eq!(background_for(RangeStatus::High), Some(Rgb::new(254, 242, 242)));
        assert_eq!(background_for(RangeStatus::Low), Some(Rgb::new(239, 246, 255)));
        assert_eq!(background_for(RangeStatus::Boundary), Some(Rgb::new(255, 247, 237)));
        assert_eq!(background_for(RangeStatus::Normal), None);
    }

    #[test]
    fn test_bold() {
        assert!(is_bold(RangeStatus::High));
        assert!(is_bold(RangeStatus::Low));
        assert!(is_bold(RangeStatus::Boundary));
        assert!(!is_bold(RangeStatus::Normal));
    }

    #[test]
    fn test_presentation_is_total() {
        for status in RangeStatus::ALL {
            let presentation = presentation_for(status);
            assert_eq!(presentation.bold, status.is_flagged());
            assert_eq!(presentation.background.is_some(), status.is_flagged());
        }
    }
}
