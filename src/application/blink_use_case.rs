// ============================================================
// Layer 2 - BlinkUseCase
// ============================================================
// Blinks one LED until told to stop:
//
//   loop:
//     pin high, wait one period
//     pin low,  wait one period
//   on shutdown:
//     pin low (best effort), release pin
//
// The shutdown signal is any future, so the CLI passes Ctrl-C
// and tests pass a timer on a paused tokio clock.
//
// Reference: tokio::select! documentation
//            Rust Book §16 (Fearless Concurrency)

use anyhow::Result;
use std::{future::Future, time::Duration};

use crate::domain::traits::LedPin;

// ─── Blink Configuration ─────────────────────────────────────────────────────
#[derive(Debug, Clone)]
pub struct BlinkConfig {
    /// BCM pin number of the LED
    pub pin: u8,

    /// Time spent in each level, in milliseconds
    pub period_ms: u64,

    /// Use a simulated pin instead of real GPIO
    pub simulate: bool,
}

impl Default for BlinkConfig {
    fn default() -> Self {
        Self {
            pin:       24,
            period_ms: 1000,
            simulate:  false,
        }
    }
}

impl BlinkConfig {
    pub fn period(&self) -> Duration {
        Duration::from_millis(self.period_ms)
    }
}

// ─── BlinkUseCase ─────────────────────────────────────────────────────────────
pub struct BlinkUseCase<P: LedPin> {
    pin:    P,
    period: Duration,
}

impl<P: LedPin> BlinkUseCase<P> {
    pub fn new(pin: P, period: Duration) -> Self {
        Self { pin, period }
    }

    #[cfg(test)]
    pub fn pin(&self) -> &P {
        &self.pin
    }

    /// Alternate the pin level every period until `shutdown` resolves.
    /// Returns the number of level changes written before shutdown.
    ///
    /// The pin is driven low afterwards even when a write failed.
    pub async fn run_until<F>(&mut self, shutdown: F) -> Result<u64>
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        let mut level  = true;
        let mut writes = 0u64;

        let outcome = loop {
            if let Err(e) = self.pin.set_level(level) {
                break Err(e);
            }
            writes += 1;

            tokio::select! {
                _ = &mut shutdown => {
                    tracing::info!("Shutdown requested after {} level changes", writes);
                    break Ok(writes);
                }
                _ = tokio::time::sleep(self.period) => {}
            }

            level = !level;
        };

        // Best effort: a failure here must not hide the loop's result
        if let Err(e) = self.pin.set_level(false) {
            tracing::warn!("Could not reset LED pin to low: {:#}", e);
        }

        outcome
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::gpio::SimulatedPin;

    /// Fails every write after the first `ok_writes`
    struct FlakyPin {
        ok_writes: usize,
        levels:    Vec<bool>,
    }

    impl LedPin for FlakyPin {
        fn set_level(&mut self, high: bool) -> Result<()> {
            self.levels.push(high);
            if self.levels.len() > self.ok_writes {
                anyhow::bail!("pin write failed");
            }
            Ok(())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_alternates_each_period_and_ends_low() {
        let mut use_case = BlinkUseCase::new(SimulatedPin::new(24), Duration::from_secs(1));

        let writes = use_case
            .run_until(tokio::time::sleep(Duration::from_millis(3500)))
            .await
            .unwrap();

        assert_eq!(writes, 4);
        assert_eq!(use_case.pin().history(), &[true, false, true, false, false]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_immediate_shutdown_leaves_pin_low() {
        let mut use_case = BlinkUseCase::new(SimulatedPin::new(24), Duration::from_secs(1));

        use_case.run_until(async {}).await.unwrap();

        assert_eq!(use_case.pin().history().last(), Some(&false));
    }

    #[tokio::test(start_paused = true)]
    async fn test_write_failure_still_attempts_reset() {
        let pin = FlakyPin { ok_writes: 2, levels: Vec::new() };
        let mut use_case = BlinkUseCase::new(pin, Duration::from_secs(1));

        let result = use_case
            .run_until(tokio::time::sleep(Duration::from_secs(60)))
            .await;

        assert!(result.is_err());
        // high, low, failed high, attempted low
        assert_eq!(use_case.pin().levels, vec![true, false, true, false]);
    }

    #[test]
    fn test_default_config() {
        let cfg = BlinkConfig::default();
        assert_eq!(cfg.pin, 24);
        assert_eq!(cfg.period(), Duration::from_secs(1));
    }
}
