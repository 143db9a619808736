use serde::Serialize;

use crate::topology::family::LatticeFamily;

/// Static presentation metadata for a lattice family.
///
/// These are look-up constants for display purposes only; nothing here is
/// computed or validated by the engine. The mechanical-behavior text in
/// particular is descriptive, not the result of simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatticeDescription {
    pub structure: &'static str,
    pub mechanical_behavior: &'static str,
    pub applications: &'static str,
    /// Nominal strut connectivity of the idealized infinite lattice.
    pub nominal_connectivity: usize,
    /// Typical relative-density range for manufactured struts, as a fraction.
    pub relative_density_range: (f64, f64),
}

/// Look up the descriptive metadata for a family.
pub fn description(family: LatticeFamily) -> &'static LatticeDescription {
    match family {
        LatticeFamily::SimpleCubic => &SIMPLE_CUBIC,
        LatticeFamily::Bcc => &BCC,
        LatticeFamily::Fcc => &FCC,
        LatticeFamily::Octet => &OCTET,
        LatticeFamily::Kelvin => &KELVIN,
        LatticeFamily::Diamond => &DIAMOND,
    }
}

static SIMPLE_CUBIC: LatticeDescription = LatticeDescription {
    structure: "Simple cubic arrangement with 8 vertices",
    mechanical_behavior: "Regular deformation pattern, predictable behavior",
    applications: "Basic structural components, scaffolds",
    nominal_connectivity: 6,
    relative_density_range: (0.05, 0.30),
};

static BCC: LatticeDescription = LatticeDescription {
    structure: "Body-centered cubic with additional center node",
    mechanical_behavior: "Better load distribution, improved strength",
    applications: "Enhanced mechanical properties, energy absorption",
    nominal_connectivity: 8,
    relative_density_range: (0.05, 0.35),
};

static FCC: LatticeDescription = LatticeDescription {
    structure: "Face-centered cubic with nodes at face centers",
    mechanical_behavior: "High packing density, superior mechanical properties",
    applications: "High strength-to-weight ratio applications",
    nominal_connectivity: 12,
    relative_density_range: (0.08, 0.40),
};

static OCTET: LatticeDescription = LatticeDescription {
    structure: "Octet truss combining corner and center connectivity",
    mechanical_behavior: "Stretch-dominated response, high specific stiffness",
    applications: "Aerospace sandwich cores, lightweight load-bearing parts",
    nominal_connectivity: 12,
    relative_density_range: (0.05, 0.50),
};

static KELVIN: LatticeDescription = LatticeDescription {
    structure: "Tetrakaidecahedral (Kelvin) cell tiling space without gaps",
    mechanical_behavior: "Bending-dominated response, near-isotropic compliance",
    applications: "Energy-absorbing foams, acoustic damping structures",
    nominal_connectivity: 4,
    relative_density_range: (0.02, 0.20),
};

static DIAMOND: LatticeDescription = LatticeDescription {
    structure: "Diamond-cubic arrangement of two interpenetrating FCC lattices",
    mechanical_behavior: "Uniform strut loading, smooth stress distribution",
    applications: "Bone-mimicking implants, additive-manufactured lattices",
    nominal_connectivity: 4,
    relative_density_range: (0.03, 0.25),
};
