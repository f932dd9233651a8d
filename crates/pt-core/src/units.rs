// pt-core/src/units.rs

use uom::si::f64::{
    ElectricCharge as UomElectricCharge, ElectricPotential as UomElectricPotential,
    Length as UomLength, MagneticFluxDensity as UomMagneticFluxDensity, Mass as UomMass,
    Time as UomTime, Velocity as UomVelocity,
};

// Public canonical unit types (SI, f64)
pub type Charge = UomElectricCharge;
pub type Voltage = UomElectricPotential;
pub type Length = UomLength;
pub type MagneticFlux = UomMagneticFluxDensity;
pub type Mass = UomMass;
pub type Time = UomTime;
pub type Velocity = UomVelocity;

#[inline]
pub fn kg(v: f64) -> Mass {
    use uom::si::mass::kilogram;
    Mass::new::<kilogram>(v)
}

#[inline]
pub fn coulomb(v: f64) -> Charge {
    use uom::si::electric_charge::coulomb;
    Charge::new::<coulomb>(v)
}

#[inline]
pub fn tesla(v: f64) -> MagneticFlux {
    use uom::si::magnetic_flux_density::tesla;
    MagneticFlux::new::<tesla>(v)
}

#[inline]
pub fn volt(v: f64) -> Voltage {
    use uom::si::electric_potential::volt;
    Voltage::new::<volt>(v)
}

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn s(v: f64) -> Time {
    use uom::si::time::second;
    Time::new::<second>(v)
}

#[inline]
pub fn mps(v: f64) -> Velocity {
    use uom::si::velocity::meter_per_second;
    Velocity::new::<meter_per_second>(v)
}

pub mod constants {
    use super::*;

    /// Atomic mass unit (kg).
    pub const AMU_KG: f64 = 1.660_538_92e-27;

    /// Elementary charge (C).
    pub const ELEMENTARY_CHARGE_C: f64 = 1.602_176_565e-19;

    /// Mass given in atomic mass units.
    #[inline]
    pub fn amu(n: f64) -> Mass {
        kg(n * AMU_KG)
    }

    /// Charge given in units of the elementary charge (signed).
    #[inline]
    pub fn elementary_charges(n: f64) -> Charge {
        coulomb(n * ELEMENTARY_CHARGE_C)
    }
}
