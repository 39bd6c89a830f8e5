use rand::Rng;

/// Produce a random `width` x `height` board as text, one row per line, each
/// cell independently filled (`X`) with probability `density`/100.
///
/// The output is exactly what [`crate::pattern::parse_pattern`] consumes.
pub fn random_pattern(rng: &mut impl Rng, width: usize, height: usize, density: u32) -> String {
    let mut pattern = String::with_capacity((width + 1) * height);
    for _ in 0..height {
        for _ in 0..width {
            let filled = rng.gen_range(1..=100u32) <= density;
            pattern.push(if filled { 'X' } else { ' ' });
        }
        pattern.push('\n');
    }
    pattern
}
