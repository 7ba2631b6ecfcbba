use crate::constants::STANDARD_GRAVITY;
use crate::control::bodies::CelestialBody;
use crate::errors::CalculationError;

/// User-entered description of a single stage.
///
/// Masses are in tonnes and thrust in kilonewtons, matching the in-game
/// readouts, so no unit conversion happens between entry and calculation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StageInputs {
    pub initial_mass: f64,     // tonnes
    pub final_mass: f64,       // tonnes
    pub specific_impulse: f64, // s
    pub thrust: f64,           // kN per engine, 0 = unknown
    pub engine_count: u32,
}

impl StageInputs {
    pub fn new(
        initial_mass: f64,
        final_mass: f64,
        specific_impulse: f64,
        thrust: f64,
        engine_count: u32,
    ) -> Self {
        StageInputs {
            initial_mass,
            final_mass,
            specific_impulse,
            thrust,
            engine_count,
        }
    }

    pub fn total_thrust(&self) -> f64 {
        self.thrust * f64::from(self.engine_count)
    }

    /// Rejects inputs the formulas are not defined for, so the calculator
    /// never has to back out of a NaN.
    pub fn validate(&self) -> Result<(), CalculationError> {
        if self.initial_mass.is_nan() || self.final_mass.is_nan() {
            return Err(CalculationError::InvalidInput(
                "mass must be a number".to_string(),
            ));
        }
        if self.initial_mass <= 0.0 || self.final_mass <= 0.0 {
            return Err(CalculationError::InvalidInput(format!(
                "masses must be positive, got {} t - {} t",
                self.initial_mass, self.final_mass
            )));
        }
        if self.final_mass > self.initial_mass {
            return Err(CalculationError::InvalidInput(format!(
                "final mass {} t exceeds initial mass {} t",
                self.final_mass, self.initial_mass
            )));
        }
        if self.specific_impulse.is_nan() || self.specific_impulse <= 0.0 {
            return Err(CalculationError::InvalidInput(format!(
                "specific impulse must be positive, got {} s",
                self.specific_impulse
            )));
        }
        if self.thrust.is_nan() || self.thrust < 0.0 {
            return Err(CalculationError::InvalidInput(format!(
                "thrust must be non-negative, got {} kN",
                self.thrust
            )));
        }
        if self.engine_count == 0 {
            return Err(CalculationError::InvalidInput(
                "engine count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Thrust-to-weight pair for one reference body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyTwr {
    pub body: &'static str,
    pub twr_initial: f64,
    pub twr_final: f64,
}

/// Thrust-dependent figures, absent when thrust is unknown.
#[derive(Clone, Debug, PartialEq)]
pub struct StagePerformance {
    pub acceleration_initial: f64, // m/s²
    pub acceleration_final: f64,   // m/s²
    pub burn_time: f64,            // s
    pub twr_by_body: Vec<BodyTwr>, // reference table order
}

#[derive(Clone, Debug, PartialEq)]
pub struct StageResult {
    pub delta_v: f64, // m/s
    pub performance: Option<StagePerformance>,
}

pub struct StageCalculator;

impl StageCalculator {
    /// Tsiolkovsky delta-v for the stage, in m/s.
    ///
    /// STANDARD_GRAVITY converts Isp in seconds to exhaust velocity here
    /// regardless of the target body; per-body gravity only enters the TWR
    /// figures.
    pub fn compute_delta_v(
        initial_mass: f64,
        final_mass: f64,
        specific_impulse: f64,
    ) -> Result<f64, CalculationError> {
        if initial_mass.is_nan() || final_mass.is_nan() || initial_mass <= 0.0 || final_mass <= 0.0
        {
            return Err(CalculationError::InvalidInput(format!(
                "masses must be positive, got {} t - {} t",
                initial_mass, final_mass
            )));
        }
        if final_mass > initial_mass {
            return Err(CalculationError::InvalidInput(format!(
                "final mass {} t exceeds initial mass {} t",
                final_mass, initial_mass
            )));
        }
        if specific_impulse.is_nan() || specific_impulse <= 0.0 {
            return Err(CalculationError::InvalidInput(format!(
                "specific impulse must be positive, got {} s",
                specific_impulse
            )));
        }

        let mass_ratio = initial_mass / final_mass;
        let delta_v = mass_ratio.ln() * specific_impulse * STANDARD_GRAVITY;
        log::debug!(
            "delta-v {:.1} m/s from mass ratio {:.3} at Isp {} s",
            delta_v,
            mass_ratio,
            specific_impulse
        );
        Ok(delta_v)
    }

    /// Full stage figures. With zero total thrust only delta-v is known, so
    /// the thrust-dependent part of the result stays empty.
    pub fn compute_stage(
        total_thrust: f64,
        initial_mass: f64,
        final_mass: f64,
        specific_impulse: f64,
        bodies: &[CelestialBody],
    ) -> Result<StageResult, CalculationError> {
        if total_thrust.is_nan() || total_thrust < 0.0 {
            return Err(CalculationError::InvalidInput(format!(
                "thrust must be non-negative, got {} kN",
                total_thrust
            )));
        }

        let delta_v = Self::compute_delta_v(initial_mass, final_mass, specific_impulse)?;

        if total_thrust == 0.0 {
            return Ok(StageResult {
                delta_v,
                performance: None,
            });
        }

        // kN over tonnes comes out directly in m/s².
        let acceleration_initial = total_thrust / initial_mass;
        let acceleration_final = total_thrust / final_mass;

        let acceleration_sum = acceleration_initial + acceleration_final;
        if acceleration_sum == 0.0 {
            return Err(CalculationError::DivisionByZero(
                "endpoint accelerations sum to zero".to_string(),
            ));
        }
        // Burn duration with the mean of the endpoint accelerations as the
        // average rate, mass depleting linearly over the burn.
        let burn_time = 2.0 * delta_v / acceleration_sum;

        let mut twr_by_body = Vec::with_capacity(bodies.len());
        for body in bodies {
            if body.surface_gravity == 0.0 {
                return Err(CalculationError::DivisionByZero(format!(
                    "{} has zero surface gravity",
                    body.name
                )));
            }
            twr_by_body.push(BodyTwr {
                body: body.name,
                twr_initial: acceleration_initial / body.surface_gravity,
                twr_final: acceleration_final / body.surface_gravity,
            });
        }

        log::debug!(
            "burn time {:.1} s at {:.1} - {:.1} m/s²",
            burn_time,
            acceleration_initial,
            acceleration_final
        );

        Ok(StageResult {
            delta_v,
            performance: Some(StagePerformance {
                acceleration_initial,
                acceleration_final,
                burn_time,
                twr_by_body,
            }),
        })
    }

    /// Validates and computes in one step, total thrust taken from the
    /// per-engine thrust and engine count.
    pub fn compute(
        inputs: &StageInputs,
        bodies: &[CelestialBody],
    ) -> Result<StageResult, CalculationError> {
        inputs.validate()?;
        Self::compute_stage(
            inputs.total_thrust(),
            inputs.initial_mass,
            inputs.final_mass,
            inputs.specific_impulse,
            bodies,
        )
    }
}
