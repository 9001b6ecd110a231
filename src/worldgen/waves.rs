//! Enemy wave generation

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::agent::ant::Ant;
use crate::core::config::SimConfig;
use crate::core::types::{Allegiance, AntKind, IntVec2};

/// Spawn a raiding party of enemy fighters at a map edge
///
/// Each fighter enters two rows above the surface on either the left or
/// right border, chosen independently.
pub fn generate_wave(config: &SimConfig, rng: &mut ChaCha8Rng) -> Vec<Ant> {
    let enemy_count = rng.gen_range(5..10);
    let entry_y = config.surface_y() + 2;

    let wave = (0..enemy_count)
        .map(|_| {
            let x = if rng.gen_range(0..2) == 0 {
                0
            } else {
                config.width as i32 - 1
            };
            Ant::new(
                IntVec2::new(x, entry_y),
                AntKind::Fighter,
                Allegiance::Enemy,
                rng,
            )
        })
        .collect::<Vec<_>>();

    info!(count = wave.len(), "enemy wave incoming");
    wave
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_wave_size_and_entry_points() {
        let config = SimConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..20 {
            let wave = generate_wave(&config, &mut rng);
            assert!(wave.len() >= 5 && wave.len() < 10);
            for ant in &wave {
                assert!(ant.pos.x == 0 || ant.pos.x == config.width as i32 - 1);
                assert_eq!(ant.pos.y, config.surface_y() + 2);
                assert_eq!(ant.kind, AntKind::Fighter);
                assert_eq!(ant.allegiance, Allegiance::Enemy);
            }
        }
    }
}
