//! Dartboard geometry: scoring a point, naming its region, and testing it
//! against a target region. All radii and the segment order come from
//! `crate::consts`.

pub mod classify;
pub mod geometry;
pub mod scoring;
pub mod section;

pub use self::classify::is_hit;
pub use self::geometry::{aim_point, board_angle, segment_number, ImpactPoint};
pub use self::scoring::{score_for_point, section_for_point, Landing, Shot};
pub use self::section::{DartboardSection, RingKind};
