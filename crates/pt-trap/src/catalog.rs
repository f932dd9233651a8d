//! Built-in ions and trap configurations.

use crate::ion::Ion;
use crate::trap::{PenningTrap, TrapGeometry};
use pt_core::units::constants::{amu, elementary_charges};
use pt_core::units::{kg, m, tesla, volt};

pub fn proton() -> Ion {
    Ion::new(kg(1.67262158e-27), elementary_charges(1.0), "Proton")
        .expect("proton catalog entry is valid")
}

pub fn electron() -> Ion {
    Ion::new(kg(9.10938291e-31), elementary_charges(-1.0), "Electron")
        .expect("electron catalog entry is valid")
}

pub fn rb85() -> Ion {
    Ion::new(amu(85.0), elementary_charges(1.0), "Rb-85").expect("Rb-85 catalog entry is valid")
}

pub fn rb87() -> Ion {
    Ion::new(amu(87.0), elementary_charges(1.0), "Rb-87").expect("Rb-87 catalog entry is valid")
}

/// Look up a catalog ion by label (case-insensitive).
pub fn ion_by_name(name: &str) -> Option<Ion> {
    match name.to_ascii_lowercase().as_str() {
        "proton" => Some(proton()),
        "electron" => Some(electron()),
        "rb-85" | "rb85" => Some(rb85()),
        "rb-87" | "rb87" => Some(rb87()),
        _ => None,
    }
}

/// TITAN measurement Penning trap: 3.7 T, 35.75 V, d = 11.21 mm.
pub fn titan() -> PenningTrap {
    PenningTrap::new(
        tesla(3.7),
        volt(35.75),
        TrapGeometry::CharacteristicDimension(m(11.21e-3)),
        "TITAN",
    )
    .expect("TITAN catalog entry is valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_entries_construct() {
        for ion in [proton(), electron(), rb85(), rb87()] {
            assert!(ion.mass_kg() > 0.0);
            assert!(ion.charge_c() != 0.0);
        }
        assert_eq!(titan().field_t(), 3.7);
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(ion_by_name("Rb-85").unwrap().label(), "Rb-85");
        assert_eq!(ion_by_name("rb87").unwrap().label(), "Rb-87");
        assert_eq!(ion_by_name("ELECTRON").unwrap().polarity(), -1.0);
        assert!(ion_by_name("unobtainium").is_none());
    }
}
