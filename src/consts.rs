/// Segment values, clockwise starting from the top of the board.
pub const DARTBOARD_SEGMENTS: [u8; 20] = [
    20, 1, 18, 4, 13, 6, 10, 15, 2, 17, 3, 19, 7, 16, 8, 11, 14, 9, 12, 5,
];

/// Angular width of one segment in degrees (360 / 20).
pub const SEGMENT_ARC_DEG: f64 = 18.0;

/// Half a segment. Segment centres, not edges, line up with the labels.
pub const SEGMENT_HALF_ARC_DEG: f64 = 9.0;

/// Rotation that moves 0 degrees from the +x axis to the top of the board.
/// Screen coordinates: y grows downward, so the top is at negative y.
pub const TOP_ROTATION_DEG: f64 = 90.0;

// Ring radii, in board-radius units (the board is the unit disk).
pub const BULLSEYE_RADIUS: f64 = 0.05;
pub const OUTER_BULL_RADIUS: f64 = 0.12;
pub const TRIPLE_INNER_RADIUS: f64 = 0.55;
pub const TRIPLE_OUTER_RADIUS: f64 = 0.62;
pub const DOUBLE_INNER_RADIUS: f64 = 0.93;
pub const DOUBLE_OUTER_RADIUS: f64 = 1.0;
pub const BOARD_RADIUS: f64 = DOUBLE_OUTER_RADIUS;

/// Nominal aim radii used when measuring how far a miss strayed.
pub const AIM_RADIUS_TRIPLE: f64 = 0.585;
pub const AIM_RADIUS_DOUBLE: f64 = 0.965;
pub const AIM_RADIUS_SINGLE: f64 = 0.75;

pub const BULLSEYE_SCORE: u32 = 50;
pub const OUTER_BULL_SCORE: u32 = 25;

/// Number of distinct scoring sections: 20 segments x 3 rings + 2 bulls.
pub const SECTION_COUNT: usize = DARTBOARD_SEGMENTS.len() * 3 + 2;

pub const DARTS_PER_TURN: u8 = 3;

/// The maximal single dart (triple 20).
pub const MAX_DART_SCORE: u32 = 60;

/// Three maximals. Above this no checkout fits in one turn.
pub const CHECKOUT_CEILING: u32 = MAX_DART_SCORE * DARTS_PER_TURN as u32;

pub const DEFAULT_STARTING_SCORE: u32 = 501;

/// Scale used when reporting distances in display units rather than board radii.
pub const TARGET_RADIUS_UNITS: f64 = 10.0;
