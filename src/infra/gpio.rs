// ============================================================
// Layer 6 - GPIO Backends
// ============================================================
// Two implementations of the LedPin trait:
//
//   RppalPin      - a real Raspberry Pi pin via rppal (Linux only).
//                   Claimed as an output driven low; rppal resets
//                   the pin to its previous mode when dropped.
//   SimulatedPin  - logs every level and keeps a history, for
//                   running the blinker on a laptop and in tests.
//
// open_pin checks for a Raspberry Pi with rppal's DeviceInfo and
// falls back to SimulatedPin anywhere else; --simulate forces it.
//
// rppal uses BCM pin numbering, e.g. BCM 24 is physical pin 18.
//
// Reference: rppal crate documentation (gpio_blinkled example)

use anyhow::Result;

use crate::domain::traits::LedPin;

// ─── SimulatedPin ─────────────────────────────────────────────────────────────
#[derive(Debug, Default)]
pub struct SimulatedPin {
    pin:     u8,
    history: Vec<bool>,
}

impl SimulatedPin {
    pub fn new(pin: u8) -> Self {
        Self { pin, history: Vec::new() }
    }

    /// Every level written so far, oldest first
    pub fn history(&self) -> &[bool] {
        &self.history
    }
}

impl LedPin for SimulatedPin {
    fn set_level(&mut self, high: bool) -> Result<()> {
        tracing::info!("[sim] GPIO {} -> {}", self.pin, if high { "high" } else { "low" });
        self.history.push(high);
        Ok(())
    }
}

// ─── RppalPin ─────────────────────────────────────────────────────────────────
#[cfg(target_os = "linux")]
pub struct RppalPin {
    pin: rppal::gpio::OutputPin,
}

#[cfg(target_os = "linux")]
impl RppalPin {
    /// Open the GPIO peripheral and claim `bcm` as an output (low).
    pub fn claim(bcm: u8) -> Result<Self> {
        use anyhow::Context;

        let gpio = rppal::gpio::Gpio::new().context("Cannot open GPIO peripheral")?;
        let pin  = gpio
            .get(bcm)
            .with_context(|| format!("Cannot claim GPIO {bcm}"))?
            .into_output_low();

        tracing::info!("Claimed GPIO {} as output", bcm);
        Ok(Self { pin })
    }
}

#[cfg(target_os = "linux")]
impl LedPin for RppalPin {
    fn set_level(&mut self, high: bool) -> Result<()> {
        use rppal::gpio::Level;

        self.pin.write(if high { Level::High } else { Level::Low });
        tracing::debug!("GPIO {} -> {}", self.pin.pin(), if high { "high" } else { "low" });
        Ok(())
    }
}

/// Which kind of pin `open_pin` hands out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Hardware,
    Simulated,
}

/// `--simulate` always wins; otherwise real GPIO only on a detected board.
pub fn select_backend(simulate: bool, board: Option<&str>) -> Backend {
    match (simulate, board) {
        (false, Some(_)) => Backend::Hardware,
        _ => Backend::Simulated,
    }
}

/// Model name of the Raspberry Pi we are running on, if any.
pub fn detect_board() -> Option<String> {
    #[cfg(target_os = "linux")]
    {
        match rppal::system::DeviceInfo::new() {
            Ok(info) => Some(info.model().to_string()),
            Err(e) => {
                tracing::debug!("No Raspberry Pi detected: {}", e);
                None
            }
        }
    }

    #[cfg(not(target_os = "linux"))]
    {
        None
    }
}

/// Open the pin the blinker should drive.
///
/// Falls back to a simulated pin when the host is not a Raspberry Pi.
pub fn open_pin(pin: u8, simulate: bool) -> Result<Box<dyn LedPin>> {
    let board = if simulate { None } else { detect_board() };

    match select_backend(simulate, board.as_deref()) {
        Backend::Hardware => {
            tracing::info!("Running on {}", board.as_deref().unwrap_or("unknown board"));
            claim_hardware(pin)
        }
        Backend::Simulated => {
            if !simulate {
                tracing::warn!("Not a Raspberry Pi; simulating GPIO {}", pin);
            }
            Ok(Box::new(SimulatedPin::new(pin)))
        }
    }
}

#[cfg(target_os = "linux")]
fn claim_hardware(pin: u8) -> Result<Box<dyn LedPin>> {
    Ok(Box::new(RppalPin::claim(pin)?))
}

#[cfg(not(target_os = "linux"))]
fn claim_hardware(_pin: u8) -> Result<Box<dyn LedPin>> {
    anyhow::bail!("GPIO access requires Linux; pass --simulate to run without hardware")
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulated_pin_records_levels() {
        let mut pin = SimulatedPin::new(24);
        pin.set_level(true).unwrap();
        pin.set_level(false).unwrap();
        assert_eq!(pin.history(), &[true, false]);
    }

    #[test]
    fn test_open_simulated_pin() {
        let mut pin = open_pin(24, true).unwrap();
        assert!(pin.set_level(true).is_ok());
    }

    #[test]
    fn test_backend_selection() {
        assert_eq!(select_backend(false, Some("Raspberry Pi 4 B")), Backend::Hardware);
        assert_eq!(select_backend(false, None), Backend::Simulated);
        assert_eq!(select_backend(true, Some("Raspberry Pi 4 B")), Backend::Simulated);
    }

    #[test]
    fn test_falls_back_to_simulation_off_board() {
        // Only meaningful on a host that is not a Raspberry Pi
        if detect_board().is_none() {
            let mut pin = open_pin(24, false).unwrap();
            assert!(pin.set_level(false).is_ok());
        }
    }
}
