/// Randomness used by the composers.

use rand::Rng;

/// The two kinds of draw name generation needs.
pub trait Dice {
    /// Uniform float in `[0, 1)`, used for probability bands.
    fn roll(&mut self) -> f32;

    /// Uniform index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

impl<R: Rng + ?Sized> Dice for R {
    fn roll(&mut self) -> f32 {
        self.gen::<f32>()
    }

    fn pick(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

#[cfg(test)]
pub(crate) mod scripted {
    use super::Dice;
    use std::collections::VecDeque;

    /// Replays fixed rolls and picks, counting every draw.
    #[derive(Debug, Default)]
    pub struct ScriptedDice {
        rolls: VecDeque<f32>,
        picks: VecDeque<usize>,
        /// Roll returned once the script runs out.
        pub fallback_roll: f32,
        pub roll_count: usize,
        pub pick_count: usize,
    }

    impl ScriptedDice {
        pub fn new(rolls: &[f32]) -> Self {
            Self {
                rolls: rolls.iter().copied().collect(),
                ..Self::default()
            }
        }

        pub fn with_picks(mut self, picks: &[usize]) -> Self {
            self.picks = picks.iter().copied().collect();
            self
        }
    }

    impl Dice for ScriptedDice {
        fn roll(&mut self) -> f32 {
            self.roll_count += 1;
            self.rolls.pop_front().unwrap_or(self.fallback_roll)
        }

        fn pick(&mut self, len: usize) -> usize {
            self.pick_count += 1;
            self.picks.pop_front().unwrap_or(0) % len
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn rng_rolls_stay_in_unit_interval() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let r = rng.roll();
            assert!((0.0..1.0).contains(&r));
        }
    }

    #[test]
    fn rng_picks_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            assert!(rng.pick(3) < 3);
        }
        assert_eq!(rng.pick(1), 0);
    }

    #[test]
    fn scripted_dice_replays_then_falls_back() {
        let mut dice = scripted::ScriptedDice::new(&[0.1, 0.9]).with_picks(&[4]);
        assert_eq!(dice.roll(), 0.1);
        assert_eq!(dice.roll(), 0.9);
        assert_eq!(dice.roll(), 0.0);
        assert_eq!(dice.pick(3), 1);
        assert_eq!(dice.pick(3), 0);
        assert_eq!(dice.roll_count, 3);
        assert_eq!(dice.pick_count, 2);
    }
}
