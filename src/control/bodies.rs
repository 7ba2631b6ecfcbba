/// A celestial body reduced to what the thrust-to-weight calculation needs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CelestialBody {
    pub name: &'static str,
    pub surface_gravity: f64, // m/s²
}

impl CelestialBody {
    pub const fn new(name: &'static str, surface_gravity: f64) -> Self {
        CelestialBody {
            name,
            surface_gravity,
        }
    }
}

// Reference bodies in display order. Surface gravities from the KSP wiki.
pub const REFERENCE_BODIES: [CelestialBody; 4] = [
    CelestialBody::new("Kerbin", 9.81),
    CelestialBody::new("Mun", 1.63),
    CelestialBody::new("Minmus", 0.491),
    CelestialBody::new("Duna", 2.94),
];

/// Case-sensitive lookup into the reference table.
pub fn surface_gravity_of(name: &str) -> Option<f64> {
    REFERENCE_BODIES
        .iter()
        .find(|body| body.name == name)
        .map(|body| body.surface_gravity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_mun_lookup() {
        let gravity = surface_gravity_of("Mun").expect("Mun should be in the reference table");
        assert_abs_diff_eq!(gravity, 1.63, epsilon = 1e-12);
    }

    #[test]
    fn test_unknown_body_lookup() {
        assert_eq!(surface_gravity_of("Eve"), None);
        assert_eq!(surface_gravity_of("mun"), None); // lookup is case-sensitive
    }

    #[test]
    fn test_table_order() {
        let names: Vec<&str> = REFERENCE_BODIES.iter().map(|body| body.name).collect();
        assert_eq!(
            names,
            vec!["Kerbin", "Mun", "Minmus", "Duna"],
            "Reference table must keep its display order"
        );
    }

    #[test]
    fn test_kerbin_matches_standard_gravity() {
        assert_abs_diff_eq!(
            surface_gravity_of("Kerbin").unwrap(),
            crate::constants::STANDARD_GRAVITY,
            epsilon = 1e-12
        );
    }
}
