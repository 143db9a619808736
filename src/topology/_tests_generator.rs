#[cfg(test)]
mod _tests_generator {
    use super::super::family::LatticeFamily;
    use super::super::generator::generate;
    use crate::config::COORDINATE_TOLERANCE;
    use crate::error::TopologyError;

    #[test]
    fn test_zero_tiling_is_rejected() {
        let err = generate(LatticeFamily::SimpleCubic, 0).unwrap_err();
        assert_eq!(err, TopologyError::InvalidTiling);
    }

    #[test]
    fn test_generation_is_deterministic() {
        for family in LatticeFamily::ALL {
            for tiling in 1..=2 {
                let first = generate(family, tiling).unwrap();
                let second = generate(family, tiling).unwrap();
                assert_eq!(first, second, "{family} tiling {tiling} not reproducible");
            }
        }
    }

    #[test]
    fn test_single_cell_matches_unit_cell_counts() {
        let expected = [
            (LatticeFamily::SimpleCubic, 8, 12),
            (LatticeFamily::Bcc, 9, 20),
            (LatticeFamily::Fcc, 11, 24),
            (LatticeFamily::Octet, 9, 20),
            (LatticeFamily::Kelvin, 24, 36),
            (LatticeFamily::Diamond, 18, 16),
        ];
        for (family, nodes, edges) in expected {
            let topology = generate(family, 1).unwrap();
            assert_eq!(topology.nodes.len(), nodes, "{family} node count");
            assert_eq!(topology.edges.len(), edges, "{family} edge count");
        }
    }

    #[test]
    fn test_edges_are_normalized_sorted_and_in_range() {
        for family in LatticeFamily::ALL {
            for tiling in 1..=2 {
                let topology = generate(family, tiling).unwrap();
                let mut previous = None;
                for &(a, b) in &topology.edges {
                    assert!(a < b, "{family}: edge ({a}, {b}) not normalized");
                    assert!(b < topology.nodes.len(), "{family}: index out of range");
                    if let Some(prev) = previous {
                        assert!(prev < (a, b), "{family}: edges not strictly ascending");
                    }
                    previous = Some((a, b));
                }
            }
        }
    }

    #[test]
    fn test_nodes_are_unique_within_tolerance() {
        for family in LatticeFamily::ALL {
            for tiling in 1..=2 {
                let topology = generate(family, tiling).unwrap();
                for a in 0..topology.nodes.len() {
                    for b in (a + 1)..topology.nodes.len() {
                        let separation = (topology.nodes[a] - topology.nodes[b]).norm();
                        assert!(
                            separation >= COORDINATE_TOLERANCE,
                            "{family} tiling {tiling}: nodes {a} and {b} coincide"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_tiled_coordinates_stay_fractional() {
        for family in LatticeFamily::ALL {
            for tiling in 1..=3 {
                let topology = generate(family, tiling).unwrap();
                for p in &topology.nodes {
                    for k in 0..3 {
                        assert!(
                            (0.0..=1.0).contains(&p[k]),
                            "{family} tiling {tiling}: coordinate {} out of [0, 1]",
                            p[k]
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_simple_cubic_supercell() {
        // 2 cells per axis merge into a 3x3x3 grid of nodes with 54 grid edges
        let topology = generate(LatticeFamily::SimpleCubic, 2).unwrap();
        assert_eq!(topology.nodes.len(), 27);
        assert_eq!(topology.edges.len(), 54);
    }

    #[test]
    fn test_bcc_supercell_shares_corner_nodes() {
        // 27 shared grid corners plus one center per cell
        let topology = generate(LatticeFamily::Bcc, 2).unwrap();
        assert_eq!(topology.nodes.len(), 27 + 8);
    }

    #[test]
    fn test_topology_records_its_arguments() {
        let topology = generate(LatticeFamily::Kelvin, 2).unwrap();
        assert_eq!(topology.family, LatticeFamily::Kelvin);
        assert_eq!(topology.tiling, 2);
    }
}
