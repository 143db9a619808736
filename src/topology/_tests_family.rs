#[cfg(test)]
mod _tests_family {
    use super::super::family::LatticeFamily;
    use crate::error::TopologyError;

    #[test]
    fn test_name_parse_roundtrip() {
        for family in LatticeFamily::ALL {
            let parsed: LatticeFamily = family.name().parse().unwrap();
            assert_eq!(parsed, family);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(
            "BCC".parse::<LatticeFamily>().unwrap(),
            LatticeFamily::Bcc
        );
        assert_eq!(
            "Simple-Cubic".parse::<LatticeFamily>().unwrap(),
            LatticeFamily::SimpleCubic
        );
        assert_eq!(
            "KELVIN".parse::<LatticeFamily>().unwrap(),
            LatticeFamily::Kelvin
        );
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!(
            "sc".parse::<LatticeFamily>().unwrap(),
            LatticeFamily::SimpleCubic
        );
        assert_eq!(
            "body-centered-cubic".parse::<LatticeFamily>().unwrap(),
            LatticeFamily::Bcc
        );
        assert_eq!(
            "face-centered-cubic".parse::<LatticeFamily>().unwrap(),
            LatticeFamily::Fcc
        );
    }

    #[test]
    fn test_unknown_family_is_rejected() {
        let err = "gyroid".parse::<LatticeFamily>().unwrap_err();
        assert_eq!(err, TopologyError::UnknownFamily("gyroid".to_string()));
    }

    #[test]
    fn test_all_has_distinct_names() {
        for (i, a) in LatticeFamily::ALL.iter().enumerate() {
            for b in &LatticeFamily::ALL[i + 1..] {
                assert_ne!(a.name(), b.name());
            }
        }
    }
}
