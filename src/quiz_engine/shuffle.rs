use rand::Rng;

/// Return a shuffled copy of `options`.
///
/// Canonical Fisher-Yates: walk from the last index down, swapping each
/// position with a uniformly chosen earlier-or-equal index. The caller's
/// slice is left untouched.
pub fn shuffle_options<R: Rng>(rng: &mut R, options: &[String]) -> Vec<String> {
    let mut shuffled = options.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.gen_range(0..=i);
        shuffled.swap(i, j);
    }
    shuffled
}
