//! Energy-limited communications uptime.

use serde::{Deserialize, Serialize};

/// Energy drawn per hour of link uptime (kWh).
pub const KWH_PER_UPTIME_HOUR: f64 = 0.5;

/// One sol's communications account.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CommsUptime {
    pub required_h: f64,
    pub achieved_h: f64,
    /// Hours lost to the energy cap (>= 0).
    pub shortfall_h: f64,
}

/// Degrade the requested uptime in proportion to the energy granted.
pub fn compute_comms_uptime(required_uptime_h: f64, energy_kwh: f64) -> CommsUptime {
    let need_kwh = KWH_PER_UPTIME_HOUR * required_uptime_h;
    if need_kwh <= 0.0 {
        return CommsUptime {
            required_h: required_uptime_h,
            achieved_h: 0.0,
            shortfall_h: 0.0,
        };
    }
    let ratio = (energy_kwh / need_kwh).min(1.0);
    let achieved_h = required_uptime_h * ratio;
    CommsUptime {
        required_h: required_uptime_h,
        achieved_h,
        shortfall_h: required_uptime_h - achieved_h,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_uptime_when_energy_suffices() {
        let comms = compute_comms_uptime(12.0, 6.0);
        assert_eq!(comms.required_h, 12.0);
        assert_eq!(comms.achieved_h, 12.0);
        assert_eq!(comms.shortfall_h, 0.0);
    }

    #[test]
    fn test_uptime_degrades_proportionally() {
        // 16 h wants 8 kWh; 2 kWh covers a quarter of it
        let comms = compute_comms_uptime(16.0, 2.0);
        assert!((comms.achieved_h - 4.0).abs() < 1e-9);
        assert!((comms.shortfall_h - 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_energy_no_uptime() {
        let comms = compute_comms_uptime(16.0, 0.0);
        assert_eq!(comms.achieved_h, 0.0);
        assert_eq!(comms.shortfall_h, 16.0);
    }

    #[test]
    fn test_zero_requirement_is_satisfied() {
        let comms = compute_comms_uptime(0.0, 6.0);
        assert_eq!(comms.achieved_h, 0.0);
        assert_eq!(comms.shortfall_h, 0.0);
    }

    #[test]
    fn test_achieved_never_exceeds_required() {
        let comms = compute_comms_uptime(4.0, 100.0);
        assert_eq!(comms.achieved_h, 4.0);
        assert_eq!(comms.shortfall_h, 0.0);
    }
}
