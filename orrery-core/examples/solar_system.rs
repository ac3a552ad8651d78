//! Walks through the preset solar system: catalog queries, orbital periods
//! and velocities, and a few surface quantities.
//!
//! Run with `cargo run --example solar_system`.

use orrery_core::presets;
use qtty::velocity::Velocity;
use qtty::{Day, Kilometer, Second};

fn main() -> orrery_core::Result<()> {
    let system = presets::solar_system();

    println!("Bodies ({}):", system.len());
    for body in system.iter() {
        println!("  {body}");
    }

    println!();
    println!("Orbital periods and velocities:");
    for body in system.iter() {
        if body.is_root() {
            continue;
        }
        let period = body.orbital_period()?;
        let velocity: Velocity<Kilometer, Second> = body.orbital_velocity()?.to();
        println!(
            "  {:<8} {:>10.2} days {:>8.2} km/s",
            body.name(),
            period.to::<Day>().value(),
            velocity.value(),
        );
    }

    if let Some(earth) = system.get("Earth") {
        println!();
        println!("Earth up close:");
        println!("  GM:              {:.4e} m^3/s^2", earth.standard_gravitational_parameter());
        println!("  surface gravity: {:.2} m/s^2", earth.surface_gravity());
        println!("  escape velocity: {:.0} m/s", earth.escape_velocity().value());
        println!("  mean density:    {:.0} kg/m^3", earth.density());
    }

    Ok(())
}
