//! Board bring-up.
//!
//! The controller has a bright red power LED on GPIO 24 that is wired
//! active low: driving the pin high turns it off.

use embedded_hal::digital::v2::OutputPin;

use crate::log::info;

/// The GPIO the power LED is on.
pub const LED_PIN: u8 = 24;

/// Run once before the matrix scan starts.  `led` must already be set up as
/// a push-pull output.  Calling this more than once is harmless.
pub fn keyboard_pre_init<P: OutputPin>(led: &mut P) -> Result<(), P::Error> {
    led.set_high()?;
    info!("power led on gpio {} off", LED_PIN);
    Ok(())
}

#[cfg(test)]
mod test {
    use core::convert::Infallible;

    use super::*;

    #[derive(Default)]
    struct FakePin {
        high: Option<bool>,
        writes: usize,
    }

    impl OutputPin for FakePin {
        type Error = Infallible;

        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.high = Some(false);
            self.writes += 1;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.high = Some(true);
            self.writes += 1;
            Ok(())
        }
    }

    struct BrokenPin;

    impl OutputPin for BrokenPin {
        type Error = &'static str;

        fn set_low(&mut self) -> Result<(), Self::Error> {
            Err("broken")
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            Err("broken")
        }
    }

    #[test]
    fn drives_led_pin_high() {
        let mut pin = FakePin::default();
        keyboard_pre_init(&mut pin).unwrap();
        assert_eq!(pin.high, Some(true));
        keyboard_pre_init(&mut pin).unwrap();
        assert_eq!(pin.high, Some(true));
        assert_eq!(pin.writes, 2);
    }

    #[test]
    fn pin_errors_come_back() {
        assert_eq!(keyboard_pre_init(&mut BrokenPin), Err("broken"));
    }
}
