// Constants

// Tolerances
pub const COORDINATE_TOLERANCE: f64 = 1e-9; // Two nodes closer than this are the same node
pub const SEPARATION_TOLERANCE: f64 = 1e-9; // Slack on strut lengths in the distance rule

// Strut lengths for distance-rule families, in fractional unit-cell coordinates.
// Diamond: tetrahedral bond between an interior site and its corner/face-center
// neighbors, |(1/4, 1/4, 1/4)| = sqrt(3)/4.
pub const DIAMOND_BOND_LENGTH: f64 = 0.4330127018922193;
// Kelvin: edge of a truncated octahedron with vertices at permutations of
// (0, +-1/4, +-1/2), |(1/4, -1/4, 0)| = sqrt(2)/4.
pub const KELVIN_STRUT_LENGTH: f64 = 0.3535533905932738;
