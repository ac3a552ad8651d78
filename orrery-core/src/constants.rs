//! Physical constants used by the orbital computations.
//!
//! Every computation in this crate that needs the gravitational constant goes
//! through [`G`]; no other definition of it exists in the codebase.

/// Newtonian constant of gravitation, in m³·kg⁻¹·s⁻². CODATA 2018 value.
pub const G: f64 = 6.674_30e-11;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gravitational_constant_magnitude() {
        // Catches accidental exponent or digit slips in the literal.
        assert!(G > 6.67e-11 && G < 6.68e-11);
    }
}
