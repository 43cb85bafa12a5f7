//! Compass bearings for discretized drone moves.

/// One of the 16 compass directions a single drone move may take.
///
/// Angles are measured in degrees counter-clockwise from due east, in
/// 22.5-degree increments.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Bearing {
    /// East (0 degrees)
    E,
    /// East-northeast (22.5 degrees)
    Ene,
    /// Northeast (45 degrees)
    Ne,
    /// North-northeast (67.5 degrees)
    Nne,
    /// North (90 degrees)
    N,
    /// North-northwest (112.5 degrees)
    Nnw,
    /// Northwest (135 degrees)
    Nw,
    /// West-northwest (157.5 degrees)
    Wnw,
    /// West (180 degrees)
    W,
    /// West-southwest (202.5 degrees)
    Wsw,
    /// Southwest (225 degrees)
    Sw,
    /// South-southwest (247.5 degrees)
    Ssw,
    /// South (270 degrees)
    S,
    /// South-southeast (292.5 degrees)
    Sse,
    /// Southeast (315 degrees)
    Se,
    /// East-southeast (337.5 degrees)
    Ese,
}

impl Bearing {
    /// All 16 bearings, in angle order starting from east.
    pub const ALL: [Bearing; 16] = [
        Bearing::E,
        Bearing::Ene,
        Bearing::Ne,
        Bearing::Nne,
        Bearing::N,
        Bearing::Nnw,
        Bearing::Nw,
        Bearing::Wnw,
        Bearing::W,
        Bearing::Wsw,
        Bearing::Sw,
        Bearing::Ssw,
        Bearing::S,
        Bearing::Sse,
        Bearing::Se,
        Bearing::Ese,
    ];

    /// Angle of this bearing in degrees.
    #[inline]
    pub fn angle_deg(self) -> f64 {
        match self {
            Bearing::E => 0.0,
            Bearing::Ene => 22.5,
            Bearing::Ne => 45.0,
            Bearing::Nne => 67.5,
            Bearing::N => 90.0,
            Bearing::Nnw => 112.5,
            Bearing::Nw => 135.0,
            Bearing::Wnw => 157.5,
            Bearing::W => 180.0,
            Bearing::Wsw => 202.5,
            Bearing::Sw => 225.0,
            Bearing::Ssw => 247.5,
            Bearing::S => 270.0,
            Bearing::Sse => 292.5,
            Bearing::Se => 315.0,
            Bearing::Ese => 337.5,
        }
    }

    /// The bearing pointing the opposite way (angle + 180 degrees mod 360).
    ///
    /// Total and involutive: `b.opposite().opposite() == b` for every bearing.
    #[inline]
    pub fn opposite(self) -> Bearing {
        match self {
            Bearing::E => Bearing::W,
            Bearing::Ene => Bearing::Wsw,
            Bearing::Ne => Bearing::Sw,
            Bearing::Nne => Bearing::Ssw,
            Bearing::N => Bearing::S,
            Bearing::Nnw => Bearing::Sse,
            Bearing::Nw => Bearing::Se,
            Bearing::Wnw => Bearing::Ese,
            Bearing::W => Bearing::E,
            Bearing::Wsw => Bearing::Ene,
            Bearing::Sw => Bearing::Ne,
            Bearing::Ssw => Bearing::Nne,
            Bearing::S => Bearing::N,
            Bearing::Sse => Bearing::Nnw,
            Bearing::Se => Bearing::Nw,
            Bearing::Ese => Bearing::Wnw,
        }
    }
}
