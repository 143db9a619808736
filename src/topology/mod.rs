// Topology module: Generates point-and-edge unit-cell topologies for named lattice families
// Every generation rule is a pure function of the family tag and tiling count

// ======================== MODULE DECLARATIONS ========================
pub mod descriptions;
pub mod distance_rule;
pub mod family;
pub mod generator;
pub mod unit_cell;

// Test modules
mod _tests_family;
mod _tests_generator;

// ======================== LATTICE FAMILIES ========================
pub use family::LatticeFamily; // enum - the six lattice families (SimpleCubic, Bcc, Fcc, Octet, Kelvin, Diamond)

// ======================== UNIT CELL RECIPES ========================
pub use unit_cell::{
    UnitCell,            // struct - node/edge pattern of a single unit cell
    unit_cell,           // fn(family: LatticeFamily) -> UnitCell - builds the unit cell for a family
    cube_corners,        // fn() -> Vec<Vector3<f64>> - the 8 corners of the unit cube
    cube_edge_skeleton,  // fn(corners: &[Vector3<f64>]) -> Vec<(usize, usize)> - the 12 axis-aligned cube edges
};

// ======================== DISTANCE-RULE EDGE CONSTRUCTION ========================
pub use distance_rule::edges_within_separation; // fn(nodes, max_separation, tol) -> Vec<(usize, usize)>

// ======================== TOPOLOGY GENERATION ========================
pub use generator::{
    Topology, // struct - generated node sequence + edge set for a family and tiling
    generate, // fn(family: LatticeFamily, tiling: usize) -> Result<Topology>
};

// ======================== DESCRIPTIVE METADATA ========================
pub use descriptions::{
    LatticeDescription, // struct - static presentation metadata for a family
    description,        // fn(family: LatticeFamily) -> &'static LatticeDescription
};
