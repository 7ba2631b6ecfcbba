use crate::control::stage::{StageInputs, StageResult};

const REPORT_DELIMITER: &str = "----------------------------------------";

/// Console report for one computed stage.
///
/// Lines are accumulated first so a front end other than the CLI can reuse
/// them without capturing stdout.
pub struct StageReport {
    pub log: Vec<String>,
}

impl StageReport {
    pub fn new(inputs: &StageInputs, result: &StageResult) -> Self {
        let mut log = Vec::new();

        log.push(format!(
            "Mass: {} - {}, ISP: {}, Thrust: {}",
            inputs.initial_mass,
            inputs.final_mass,
            inputs.specific_impulse,
            inputs.total_thrust()
        ));
        log.push(format!("Delta v: {:.0} m/s", result.delta_v));

        if let Some(performance) = &result.performance {
            log.push(format!(
                "Acceleration (initial - final): {:.1} - {:.1} m/s²",
                performance.acceleration_initial, performance.acceleration_final
            ));
            log.push(format!(
                "Stage time: {}",
                Self::format_burn_time(performance.burn_time)
            ));
            log.push("TWRs (initial / final):".to_string());
            for twr in &performance.twr_by_body {
                log.push(format!(
                    "    {:<8} {:.2} - {:.2}",
                    twr.body, twr.twr_initial, twr.twr_final
                ));
            }
        }

        StageReport { log }
    }

    fn format_burn_time(burn_time: f64) -> String {
        let minutes = (burn_time / 60.0).floor();
        let seconds = burn_time % 60.0;
        format!("{:.0}m {:.0}s", minutes, seconds)
    }

    pub fn display(&self) {
        for entry in &self.log {
            println!("{}", entry);
        }
        println!("{}", REPORT_DELIMITER);
    }
}
