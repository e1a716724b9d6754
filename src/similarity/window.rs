/// Paired positions from the window matcher. `matched1[k]` in `s1` was
/// matched with `matched2[k]` in `s2`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Matches {
    pub matched1: Vec<usize>,
    pub matched2: Vec<usize>,
}

impl Matches {
    #[inline]
    pub fn len(&self) -> usize {
        self.matched2.len()
    }

    /// Adjacent pairs in `matched2` that fail to strictly increase.
    pub fn transposes(&self) -> usize {
        self.matched2.windows(2).filter(|w| w[0] >= w[1]).count()
    }
}

/// Half-width of the match window: `floor(sqrt(l1))`.
#[inline]
pub(crate) fn match_distance(l1: usize) -> usize {
    (l1 as f64).sqrt().floor() as usize
}

/// Greedy order-sensitive matching of `s1` against `s2`, with `s1` the longer
/// operand. Each position of `s1` takes the earliest unused equal character
/// of `s2` in `[i - mdist, i + mdist)`.
pub(crate) fn match_window(s1: &[char], s2: &[char], mdist: usize) -> Matches {
    let l1 = s1.len();
    let l2 = s2.len();
    let mut used = vec![false; l2];
    let mut matches = Matches::default();

    for i in 0..l1 {
        let window_start = i.saturating_sub(mdist);
        let window_end = l2.min(i + mdist);
        if window_start > l2 {
            break;
        }
        for j in window_start..window_end {
            if !used[j] && s1[i] == s2[j] {
                used[j] = true;
                matches.matched1.push(i);
                matches.matched2.push(j);
                break;
            }
        }
    }
    matches
}
